// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login and registration screen tests.

use profile_app::screens::{Navigation, Notice, Route};

mod common;
use common::{
    calls, create_test_app, new_log, Call, FakeAuth, FakeObjects, FakeProfiles, RecordingNotifier,
};

#[tokio::test]
async fn test_login_success_routes_to_profile() {
    let log = new_log();
    let app = create_test_app(
        FakeAuth::new(log.clone()),
        FakeProfiles::new(log.clone()),
        FakeObjects::new(log.clone()),
    );
    let notifier = RecordingNotifier::default();

    let mut screen = app.login_screen();
    screen.email = "a@x.com".to_string();
    screen.password = "secret123".to_string();

    let nav = screen.submit(&notifier).await;

    assert_eq!(nav, Some(Navigation::Replace(Route::Profile)));
    assert!(notifier.taken().is_empty());
    assert_eq!(calls(&log), vec![Call::SignIn("a@x.com".to_string())]);
}

#[tokio::test]
async fn test_login_failure_shows_message_verbatim() {
    let log = new_log();
    let mut auth = FakeAuth::new(log.clone());
    auth.sign_in_error = Some("Invalid login credentials".to_string());
    let app = create_test_app(auth, FakeProfiles::new(log.clone()), FakeObjects::new(log));
    let notifier = RecordingNotifier::default();

    let mut screen = app.login_screen();
    screen.email = "a@x.com".to_string();
    screen.password = "wrong".to_string();

    let nav = screen.submit(&notifier).await;

    assert_eq!(nav, None, "Login screen should stay active");
    assert_eq!(
        notifier.taken(),
        vec![Notice::new("Erro", "Invalid login credentials")]
    );
    // Form keeps what the user typed
    assert_eq!(screen.email, "a@x.com");
}

#[tokio::test]
async fn test_login_offers_registration() {
    let log = new_log();
    let app = create_test_app(
        FakeAuth::new(log.clone()),
        FakeProfiles::new(log.clone()),
        FakeObjects::new(log.clone()),
    );

    assert_eq!(
        app.login_screen().go_to_register(),
        Navigation::Push(Route::Register)
    );
    assert!(calls(&log).is_empty());
}

#[tokio::test]
async fn test_register_success_asks_for_confirmation_then_login() {
    let log = new_log();
    let app = create_test_app(
        FakeAuth::new(log.clone()),
        FakeProfiles::new(log.clone()),
        FakeObjects::new(log.clone()),
    );
    let notifier = RecordingNotifier::default();

    let mut screen = app.register_screen();
    screen.email = "new@x.com".to_string();
    screen.password = "secret123".to_string();

    let nav = screen.submit(&notifier).await;

    assert_eq!(nav, Some(Navigation::Replace(Route::Login)));
    assert_eq!(
        notifier.taken(),
        vec![Notice::new(
            "Sucesso",
            "Verifique seu email para confirmar a conta!"
        )]
    );
    assert_eq!(calls(&log), vec![Call::SignUp("new@x.com".to_string())]);
}

#[tokio::test]
async fn test_register_failure_stays() {
    let log = new_log();
    let mut auth = FakeAuth::new(log.clone());
    auth.sign_up_error = Some("Password should be at least 6 characters.".to_string());
    let app = create_test_app(auth, FakeProfiles::new(log.clone()), FakeObjects::new(log));
    let notifier = RecordingNotifier::default();

    let mut screen = app.register_screen();
    screen.email = "new@x.com".to_string();
    screen.password = "123".to_string();

    assert_eq!(screen.submit(&notifier).await, None);
    assert_eq!(
        notifier.taken(),
        vec![Notice::new(
            "Erro",
            "Password should be at least 6 characters."
        )]
    );
    assert_eq!(screen.back_to_login(), Navigation::Replace(Route::Login));
}
