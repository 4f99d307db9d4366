// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile app terminal client.
//!
//! Register, log in and edit a profile stored in a Supabase project.

use profile_app::{
    config::{Config, LogFormat},
    terminal::Terminal,
    SupabaseApp,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let config = Config::from_env()?;
    init_logging(config.log_format);

    tracing::info!(
        url = %config.supabase_url,
        table = %config.profiles_table,
        bucket = %config.profiles_bucket,
        persisted_session = config.session_file.is_some(),
        "Starting profile app"
    );

    let app = SupabaseApp::connect(config).await;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let terminal = Terminal::new(stdin, std::io::stdout());
    terminal.run(&app).await;

    Ok(())
}

/// Initialize logging on stderr so it stays out of the menus.
fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("profile_app=info,warn"));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
