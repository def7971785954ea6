use std::time::Duration;

/// Non-danger alerts dismiss themselves after this long.
pub const ALERT_DISMISS_AFTER: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
    Success,
    #[default]
    Info,
    Warning,
    Danger,
}

impl AlertKind {
    pub fn auto_dismiss(&self) -> bool {
        !matches!(self, AlertKind::Danger)
    }

    pub fn title(&self) -> &'static str {
        match self {
            AlertKind::Success => "Success",
            AlertKind::Info => "Info",
            AlertKind::Warning => "Warning",
            AlertKind::Danger => "Error",
        }
    }
}
