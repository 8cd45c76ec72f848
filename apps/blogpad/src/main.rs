//! # Blogpad
//!
//! Terminal front end: loads the post collection, then reads commands until
//! `quit` or end of input.

use anyhow::Context;

use blogpad_core::ports::Surface;
use blogpad_core::{Blog, PostArchive, PostStore};
use blogpad_shared::Notice;

mod command;
mod config;
mod storage;
mod telemetry;
mod terminal;

use command::Command;
use config::AppConfig;
use telemetry::TelemetryConfig;
use terminal::Terminal;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    tracing::info!(storage = ?config.storage, slot = %config.slot, "Starting Blogpad");

    let archive = PostArchive::new(storage::open(&config), config.slot.clone());
    let mut terminal = Terminal::new();

    // A failed first write leaves the loaded or seeded posts in memory.
    let mut store = PostStore::new(archive);
    if let Err(e) = store.initialize().await {
        tracing::error!(error = %e, "Failed to persist initial posts");
        terminal.notify(&Notice::error(format!(
            "Posts could not be saved and will be lost on exit: {e}"
        )));
    }

    let mut blog = Blog::with_store(store, terminal);
    blog.surface_mut().present();

    while let Some(line) = blog
        .surface_mut()
        .read_line()
        .await
        .context("failed to read input")?
    {
        match command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => command::dispatch(&mut blog, command).await,
            Err(e) => blog.surface_mut().print(e.to_string().trim_end()),
        }
        blog.surface_mut().present();
    }

    tracing::info!("Bye");
    Ok(())
}
