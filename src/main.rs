use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

use mbrowse::models::config::{Args, ConfigManager};
use mbrowse::operations::fetch_buckets;
use mbrowse::web::{RpcClient, WebClient};
use mbrowse::{run_app, App};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config_manager = ConfigManager::from_args(&args)?;
    if args.save_config {
        config_manager.save().with_context(|| {
            format!(
                "Failed to save config to {}",
                config_manager.config_path().display()
            )
        })?;
    }

    init_logging(&config_manager.log_path(&args))?;
    tracing::info!(
        endpoint = %config_manager.app_config.endpoint,
        config = %config_manager.config_path().display(),
        "starting"
    );

    let client = RpcClient::new(&config_manager.app_config.endpoint)?;
    if let Some((access_key, secret_key)) = config_manager.app_config.credentials() {
        client
            .login(access_key, secret_key)
            .await
            .with_context(|| format!("Login to {} failed", config_manager.app_config.endpoint))?;
        tracing::info!(access_key, "logged in");
    }

    let mut app = App::new(Arc::new(client), config_manager);
    fetch_buckets(&mut app.store);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "terminated with error");
        println!("Error: {err:?}");
    }

    Ok(())
}

/// Logs go to a file because the terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mbrowse=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
