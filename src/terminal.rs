// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Line-oriented terminal frontend.
//!
//! Renders each route as a numbered menu, shows notices as `[title] message`
//! lines and stands in for the device media library by asking for a file
//! path. End of input quits.

use std::io::Write;
use std::path::PathBuf;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::db::ProfileStore;
use crate::screens::{Navigation, Navigator, Notice, Notifier, Route};
use crate::services::{AuthService, MediaLibrary, ObjectStore, PermissionStatus};
use crate::App;

/// Terminal driver over any line source and output sink.
pub struct Terminal<R, W> {
    input: tokio::sync::Mutex<R>,
    output: std::sync::Mutex<W>,
}

impl<R, W> Terminal<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: tokio::sync::Mutex::new(input),
            output: std::sync::Mutex::new(output),
        }
    }

    /// Give back the output sink (for inspecting a scripted session).
    pub fn into_output(self) -> W {
        self.output
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Drive the screens until the user quits or input ends.
    pub async fn run<A, P, O>(&self, app: &App<A, P, O>)
    where
        A: AuthService,
        P: ProfileStore,
        O: ObjectStore,
    {
        let mut navigator = Navigator::default();

        loop {
            let route = navigator.current();
            tracing::debug!(route = %route, "Showing screen");

            let next = match route {
                Route::Login => self.login_flow(app).await,
                Route::Register => self.register_flow(app).await,
                Route::Profile => self.profile_flow(app).await,
            };

            match next {
                Some(navigation) => navigator.apply(navigation),
                None => break,
            }
        }

        self.write("Até logo!\n");
    }

    async fn login_flow<A, P, O>(&self, app: &App<A, P, O>) -> Option<Navigation>
    where
        A: AuthService,
        P: ProfileStore,
        O: ObjectStore,
    {
        let mut screen = app.login_screen();

        loop {
            self.write("\n== Login ==\n[1] Entrar  [2] Cadastrar  [q] Sair\n");
            match self.prompt("> ").await?.as_str() {
                "1" => {
                    screen.email = self.prompt("Email: ").await?;
                    screen.password = self.prompt("Senha: ").await?;
                    if let Some(navigation) = screen.submit(self).await {
                        return Some(navigation);
                    }
                }
                "2" => return Some(screen.go_to_register()),
                "q" => return None,
                _ => self.write("Opção inválida\n"),
            }
        }
    }

    async fn register_flow<A, P, O>(&self, app: &App<A, P, O>) -> Option<Navigation>
    where
        A: AuthService,
        P: ProfileStore,
        O: ObjectStore,
    {
        let mut screen = app.register_screen();

        loop {
            self.write("\n== Cadastro ==\n[1] Cadastrar  [2] Voltar ao Login  [q] Sair\n");
            match self.prompt("> ").await?.as_str() {
                "1" => {
                    screen.email = self.prompt("Email: ").await?;
                    screen.password = self.prompt("Senha: ").await?;
                    if let Some(navigation) = screen.submit(self).await {
                        return Some(navigation);
                    }
                }
                "2" => return Some(screen.back_to_login()),
                "q" => return None,
                _ => self.write("Opção inválida\n"),
            }
        }
    }

    async fn profile_flow<A, P, O>(&self, app: &App<A, P, O>) -> Option<Navigation>
    where
        A: AuthService,
        P: ProfileStore,
        O: ObjectStore,
    {
        let mut screen = app.profile_screen();
        if let Some(navigation) = screen.activate().await {
            return Some(navigation);
        }

        loop {
            let email = screen
                .session()
                .and_then(|s| s.user.email.as_deref())
                .unwrap_or("");
            self.write(&format!(
                "\n== Perfil {} ==\nFoto: {}\nNome: {}\nDescrição: {}\n\
                 [1] Alterar foto  [2] Editar nome  [3] Editar descrição  [4] Salvar  [5] Sair da conta  [q] Fechar\n",
                email,
                screen.photo.display_uri(&app.config.default_avatar_url),
                screen.name,
                screen.description,
            ));

            match self.prompt("> ").await?.as_str() {
                "1" => screen.choose_photo(self, self).await,
                "2" => screen.name = self.prompt("Nome: ").await?,
                "3" => screen.description = self.prompt("Descrição: ").await?,
                "4" => {
                    screen.save(self).await;
                }
                "5" => return Some(screen.logout().await),
                "q" => return None,
                _ => self.write("Opção inválida\n"),
            }
        }
    }

    /// Show `label` and read one line. `None` at end of input.
    async fn prompt(&self, label: &str) -> Option<String> {
        self.write(label);

        let mut line = String::new();
        let mut input = self.input.lock().await;
        match input.read_line(&mut line).await {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read input");
                None
            }
        }
    }

    fn write(&self, text: &str) {
        let Ok(mut out) = self.output.lock() else {
            return;
        };
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "Failed to write output");
        }
    }
}

impl<R, W> Notifier for Terminal<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    fn notify(&self, notice: Notice) {
        self.write(&format!("[{}] {}\n", notice.title, notice.message));
    }
}

impl<R, W> MediaLibrary for Terminal<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn request_permission(&self) -> PermissionStatus {
        let answer = self
            .prompt("Permitir acesso à galeria? [s/N] ")
            .await
            .unwrap_or_default();

        match answer.trim().to_lowercase().as_str() {
            "s" | "sim" | "y" | "yes" => PermissionStatus::Granted,
            _ => PermissionStatus::Denied,
        }
    }

    async fn pick_image(&self) -> Option<PathBuf> {
        let answer = self
            .prompt("Caminho da imagem (vazio para cancelar): ")
            .await?;
        let answer = answer.trim();
        if answer.is_empty() {
            return None;
        }

        let path = PathBuf::from(answer.strip_prefix("file://").unwrap_or(answer));
        if !path.is_file() {
            self.write(&format!("Arquivo não encontrado: {}\n", path.display()));
            return None;
        }
        Some(path)
    }
}
