//! Interactive terminal TodoMVC.
//!
//! Reads commands from stdin (`help` lists them) and prints the list after
//! every change. Items persist to `TODOMVC_STORAGE_PATH` unless
//! `TODOMVC_EPHEMERAL` is set.

use anyhow::Context;
use todomvc::{shell, TodoApp};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todomvc=info,todomvc_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    todomvc_runtime::metrics::describe();

    let app = TodoApp::from_env().context("Failed to open todo list")?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout().lock();
    shell::run(&app, stdin, &mut stdout).await?;

    app.close();
    tracing::info!("Goodbye");
    Ok(())
}
