use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::helpers::{format_size, truncate_string};
use crate::app::UploadsState;
use crate::models::UploadEntry;

/// Uploads shown at once in the progress area.
pub const MAX_VISIBLE_UPLOADS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct UploadRowProps {
    pub name: String,
    pub loaded: String,
    pub total: String,
    pub percent: u16,
}

impl UploadRowProps {
    pub fn new(upload: &UploadEntry) -> Self {
        Self {
            name: upload.name.clone(),
            loaded: format_size(upload.loaded.min(upload.size)),
            total: format_size(upload.size),
            percent: upload.progress_percentage(),
        }
    }
}

/// Height of the upload area: a title border plus two lines per upload.
pub fn uploads_height(uploads: &UploadsState) -> u16 {
    if uploads.files.is_empty() {
        0
    } else {
        (uploads.files.len().min(MAX_VISIBLE_UPLOADS) * 2 + 2) as u16
    }
}

pub fn draw_uploads(f: &mut Frame, uploads: &UploadsState, area: Rect) {
    if uploads.files.is_empty() {
        return;
    }

    let hidden = uploads.files.len().saturating_sub(MAX_VISIBLE_UPLOADS);
    let title = if hidden > 0 {
        format!(
            "Uploads ({} running, {hidden} not shown) - F9 abort",
            uploads.files.len()
        )
    } else {
        format!("Uploads ({} running) - F9 abort", uploads.files.len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows: Vec<UploadRowProps> = uploads
        .files
        .values()
        .take(MAX_VISIBLE_UPLOADS)
        .map(UploadRowProps::new)
        .collect();
    let constraints = vec![Constraint::Length(1); rows.len() * 2];
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, row) in rows.iter().enumerate() {
        let info = Paragraph::new(format!(
            "↑ {}  {} / {}",
            truncate_string(&row.name, 40),
            row.loaded,
            row.total
        ))
        .style(Style::default().fg(Color::White));
        f.render_widget(info, chunks[i * 2]);

        let gauge = Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(Color::Green)
                    .bg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )
            .percent(row.percent)
            .label(format!("{}%", row.percent));
        f.render_widget(gauge, chunks[i * 2 + 1]);
    }
}
