use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use std::time::{Duration, Instant};

use crate::app::{commands, App};
use crate::command::Command;
use crate::handlers::key_to_command;
use crate::operations::download::start_pending_download;
use crate::ui;

/// Main application loop following The Elm Architecture (TEA)
pub async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut last_render = Instant::now();
    let render_interval = Duration::from_millis(100); // Limit to 10 FPS for smooth rendering
    let mut needs_render = true;

    loop {
        // Fold whatever background tasks have reported since the last tick
        if app.sync() {
            needs_render = true;
        }

        if app.state().location.pending_download.is_some() {
            let dir = app.download_dir();
            start_pending_download(&mut app.store, &dir);
            needs_render = true;
        }

        // Render only when needed and throttled
        let now = Instant::now();
        if needs_render && now.duration_since(last_render) >= render_interval {
            terminal.draw(|f| ui::draw(f, app))?;
            // Explicit flush for Windows terminal responsiveness
            #[cfg(target_os = "windows")]
            {
                use std::io::Write;
                let _ = std::io::stdout().flush();
            }
            last_render = now;
            needs_render = false;
        }

        if app.should_quit {
            break;
        }

        // Polling blocks this thread, so give spawned tasks a turn first
        tokio::task::yield_now().await;

        if event::poll(Duration::from_millis(25))? {
            let command = match event::read()? {
                Event::Key(key) => {
                    // Ignore key release events (Windows sends both press and release)
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    key_to_command(app, key.code, key.modifiers)
                }
                Event::Paste(text) => Some(Command::Drop { text }),
                Event::Resize(_, _) => {
                    needs_render = true;
                    None
                }
                _ => None,
            };

            if let Some(command) = command {
                // Handle cascading commands
                let mut current = Some(command);
                while let Some(command) = current {
                    current = commands::execute(app, command);
                }
                needs_render = true;
            }
        }
    }

    Ok(())
}
