use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::helpers::centered_rect;
use crate::app::view::{ShareField, ShareForm};
use crate::app::{AlertState, App, ShareState};
use crate::models::AlertKind;

pub fn draw_delete_confirmation(f: &mut Frame, app: &App) {
    let area = centered_rect(60, 30, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title("Delete Confirmation")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let question = Paragraph::new("Do you really want to delete this object?")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(question, chunks[0]);

    let confirmation = &app.view.delete_confirmation;
    let name = Paragraph::new(confirmation.name.as_str())
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    f.render_widget(name, chunks[1]);

    let buttons = if confirmation.confirm_selected {
        Paragraph::new("[ DELETE ]  Cancel")
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
    } else {
        Paragraph::new("Delete  [ CANCEL ]").style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    };
    f.render_widget(buttons.alignment(Alignment::Center), chunks[2]);

    let help = Paragraph::new("←/→ or Tab: Select | Enter: Confirm | Esc: Cancel")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[3]);
}

/// Inputs of the share dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareDialogProps {
    pub object: String,
    pub url: String,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub field: ShareField,
}

impl ShareDialogProps {
    pub fn new(share: &ShareState, form: &ShareForm) -> Self {
        Self {
            object: share.object.clone(),
            url: share.url.clone(),
            days: form.expiry.days,
            hours: form.expiry.hours,
            minutes: form.expiry.minutes,
            field: form.field,
        }
    }
}

pub fn draw_share_dialog(f: &mut Frame, props: &ShareDialogProps) {
    let area = centered_rect(80, 40, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(format!("Share Object: {}", props.object))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new("Shareable link").style(Style::default().add_modifier(Modifier::BOLD)),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(props.url.as_str())
            .style(Style::default().fg(Color::Yellow))
            .wrap(Wrap { trim: false }),
        chunks[1],
    );

    let field = |label: &'static str, value: u64, this: ShareField| {
        let style = if props.field == this {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        vec![
            Span::raw(format!("{label}: ")),
            Span::styled(format!(" {value:>2} "), style),
            Span::raw("   "),
        ]
    };
    let mut spans = vec![Span::raw("Expires in  ")];
    spans.extend(field("Days", props.days, ShareField::Days));
    spans.extend(field("Hours", props.hours, ShareField::Hours));
    spans.extend(field("Minutes", props.minutes, ShareField::Minutes));
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[3]);

    let help = Paragraph::new("←/→ or Tab: Field | ↑/↓: Change expiry | Enter/Esc: Close")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[4]);
}

#[derive(Debug, Clone, PartialEq)]
pub struct AbortDialogProps {
    pub uploads: usize,
    pub abort_selected: bool,
}

pub fn draw_abort_dialog(f: &mut Frame, props: &AbortDialogProps) {
    let area = centered_rect(50, 25, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title("Abort uploads in progress?")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(format!(
            "{} upload(s) running. This cannot be undone!",
            props.uploads
        ))
        .alignment(Alignment::Center),
        chunks[0],
    );

    let buttons = if props.abort_selected {
        "Upload  [ ABORT ]"
    } else {
        "[ UPLOAD ]  Abort"
    };
    f.render_widget(
        Paragraph::new(buttons)
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        chunks[2],
    );
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlertProps {
    pub kind: AlertKind,
    pub message: String,
}

impl AlertProps {
    pub fn from_state(alert: &AlertState) -> Option<Self> {
        alert.show.then(|| Self {
            kind: alert.kind,
            message: alert.message.clone(),
        })
    }
}

fn alert_color(kind: AlertKind) -> Color {
    match kind {
        AlertKind::Success => Color::Green,
        AlertKind::Info => Color::Cyan,
        AlertKind::Warning => Color::Yellow,
        AlertKind::Danger => Color::Red,
    }
}

pub fn draw_alert(f: &mut Frame, props: &AlertProps) {
    let area = centered_rect(60, 20, f.area());
    f.render_widget(Clear, area);

    let color = alert_color(props.kind);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            props.message.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::Gray),
        )),
    ];
    let alert = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(props.kind.title())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(alert, area);
}
