use super::dialogs::{
    draw_abort_dialog, draw_alert, draw_delete_confirmation, draw_share_dialog, AbortDialogProps,
    AlertProps, ShareDialogProps,
};
use super::panels::{draw_bucket_panel, draw_object_panel};
use super::widgets::{draw_uploads, uploads_height};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Screen};
use crate::menu::get_menu_items;

pub fn draw(f: &mut Frame, app: &mut App) {
    // Draw the base screen
    match app.view.screen {
        Screen::Browser => draw_browser(f, app),
        Screen::DeleteConfirmation => {
            draw_browser(f, app);
            draw_delete_confirmation(f, app);
        }
        Screen::Help => draw_help(f, app),
    }

    // Store-driven overlays go on top of any screen
    let state = app.state();
    if state.objects.share.show {
        draw_share_dialog(
            f,
            &ShareDialogProps::new(&state.objects.share, &app.view.share_form),
        );
    }
    if state.uploads.show_abort_modal {
        draw_abort_dialog(
            f,
            &AbortDialogProps {
                uploads: state.uploads.files.len(),
                abort_selected: app.view.abort_selected,
            },
        );
    }
    if let Some(alert) = AlertProps::from_state(&state.alert) {
        draw_alert(f, &alert);
    }
}

fn draw_browser(f: &mut Frame, app: &mut App) {
    let upload_height = uploads_height(&app.state().uploads);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(upload_height),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new(app.app_title.as_str())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let panel_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(chunks[1]);

    draw_bucket_panel(f, app, panel_chunks[0]);
    draw_object_panel(f, app, panel_chunks[1]);

    if upload_height > 0 {
        draw_uploads(f, &app.state().uploads, chunks[2]);
    }

    draw_menu(f, app, chunks[3]);
}

/// MC-style function key footer for the focused panel.
fn draw_menu(f: &mut Frame, app: &App, area: Rect) {
    let menu_items: Vec<(&str, &str)> = get_menu_items(app)
        .iter()
        .map(|item| (item.key, item.get_label(app)))
        .collect();

    let item_width = area.width as usize / menu_items.len().max(1);
    let mut spans = Vec::new();
    for (num, label) in menu_items {
        spans.push(Span::styled(
            num,
            Style::default().fg(Color::White).bg(Color::Black),
        ));
        spans.push(Span::styled(
            label,
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));

        let used_chars = num.chars().count() + label.chars().count();
        let remaining = item_width.saturating_sub(used_chars);
        if remaining > 0 {
            spans.push(Span::styled(
                " ".repeat(remaining),
                Style::default().bg(Color::Cyan),
            ));
        }
    }

    let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    f.render_widget(footer, area);
}

fn draw_help(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(f.area());

    let help_title = format!("{} - Help", app.app_title);
    let title = Paragraph::new(help_title.as_str())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let help_text = [
        "Navigation:",
        "  ↑/↓ PgUp/PgDn - Move in the focused panel",
        "  Home/End      - First / last row",
        "  Tab           - Switch between buckets and objects",
        "  Enter         - Select bucket / open folder / download object",
        "  Backspace/←   - Go to parent folder",
        "  ↓ on last row - Load the next page of a long listing",
        "",
        "Function Keys:",
        "  F1            - Show this help",
        "  F2 / F3 / F4  - Sort by name / size / date (repeat to reverse)",
        "  F5            - Refresh buckets and objects",
        "  F6            - Share selected object (presigned link)",
        "  F7            - Download selected object",
        "  F8 / Del      - Delete selected object",
        "  F9            - Abort running uploads",
        "  F10 / q       - Quit",
        "",
        "Uploads:",
        "  Drop files from a file manager onto the terminal to upload them",
        "  into the current bucket and folder.",
        "",
        "Press any key to close this help.",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(help_paragraph, chunks[1]);
}
