use crate::app::{selectors, App, Focus};
use crate::command::Command;
use crate::models::SortBy;

/// A function-key slot of the bottom menu: label and action in one place.
pub struct MenuItem {
    pub key: &'static str,
    pub label: MenuLabel,
    pub action: MenuAction,
}

pub enum MenuLabel {
    Static(&'static str),
    Dynamic(fn(&App) -> &'static str),
}

pub enum MenuAction {
    None,
    Command(Command),
    Dynamic(fn(&App) -> Option<Command>),
}

impl MenuItem {
    pub fn static_item(key: &'static str, label: &'static str, command: Command) -> Self {
        Self {
            key,
            label: MenuLabel::Static(label),
            action: MenuAction::Command(command),
        }
    }

    pub fn empty(key: &'static str) -> Self {
        Self {
            key,
            label: MenuLabel::Static(""),
            action: MenuAction::None,
        }
    }

    pub fn dynamic(
        key: &'static str,
        label_fn: fn(&App) -> &'static str,
        action_fn: fn(&App) -> Option<Command>,
    ) -> Self {
        Self {
            key,
            label: MenuLabel::Dynamic(label_fn),
            action: MenuAction::Dynamic(action_fn),
        }
    }

    pub fn get_label(&self, app: &App) -> &'static str {
        match &self.label {
            MenuLabel::Static(s) => s,
            MenuLabel::Dynamic(f) => f(app),
        }
    }

    pub fn get_action(&self, app: &App) -> Option<Command> {
        match &self.action {
            MenuAction::None => None,
            MenuAction::Command(command) => Some(command.clone()),
            MenuAction::Dynamic(f) => f(app),
        }
    }
}

/// F1..F10 for the focused panel.
pub fn get_menu_items(app: &App) -> Vec<MenuItem> {
    use Command::*;

    match app.view.focus {
        Focus::Buckets => vec![
            MenuItem::static_item("01", "Help", ShowHelp),
            MenuItem::empty("02"),
            MenuItem::empty("03"),
            MenuItem::empty("04"),
            MenuItem::static_item("05", "Refresh", Refresh),
            MenuItem::empty("06"),
            MenuItem::empty("07"),
            MenuItem::empty("08"),
            MenuItem::dynamic("09", abort_label, abort_action),
            MenuItem::static_item("10", "Quit", Quit),
        ],
        Focus::Objects => vec![
            MenuItem::static_item("01", "Help", ShowHelp),
            MenuItem::dynamic("02", |app| sort_label(app, SortBy::Name), |_| {
                Some(Sort {
                    sort_by: SortBy::Name,
                })
            }),
            MenuItem::dynamic("03", |app| sort_label(app, SortBy::Size), |_| {
                Some(Sort {
                    sort_by: SortBy::Size,
                })
            }),
            MenuItem::dynamic(
                "04",
                |app| sort_label(app, SortBy::LastModified),
                |_| {
                    Some(Sort {
                        sort_by: SortBy::LastModified,
                    })
                },
            ),
            MenuItem::static_item("05", "Refresh", Refresh),
            MenuItem::dynamic("06", |app| file_label(app, "Share"), |app| file_action(app, Share)),
            MenuItem::dynamic("07", |app| file_label(app, "Download"), |app| {
                file_action(app, Download)
            }),
            MenuItem::dynamic("08", |app| file_label(app, "Delete"), |app| {
                file_action(app, RequestDelete)
            }),
            MenuItem::dynamic("09", abort_label, abort_action),
            MenuItem::static_item("10", "Quit", Quit),
        ],
    }
}

/// Action bound to function key `n` (1-based) in the current context.
pub fn action_for_key(app: &App, n: u8) -> Option<Command> {
    let index = usize::from(n).checked_sub(1)?;
    get_menu_items(app).get(index)?.get_action(app)
}

fn sort_label(app: &App, sort_by: SortBy) -> &'static str {
    let objects = &app.state().objects;
    let active = objects.sort_by == sort_by;
    match (sort_by, active, objects.sort_order) {
        (SortBy::Name, true, true) => "Name ▲",
        (SortBy::Name, true, false) => "Name ▼",
        (SortBy::Name, false, _) => "Name",
        (SortBy::Size, true, true) => "Size ▲",
        (SortBy::Size, true, false) => "Size ▼",
        (SortBy::Size, false, _) => "Size",
        (SortBy::LastModified, true, true) => "Date ▲",
        (SortBy::LastModified, true, false) => "Date ▼",
        (SortBy::LastModified, false, _) => "Date",
        (SortBy::None, _, _) => "",
    }
}

fn file_label(app: &App, label: &'static str) -> &'static str {
    if app.selected_file().is_some() {
        label
    } else {
        ""
    }
}

fn file_action(app: &App, command: Command) -> Option<Command> {
    app.selected_file().map(|_| command)
}

fn abort_label(app: &App) -> &'static str {
    if selectors::is_uploading(app.state()) {
        "Abort"
    } else {
        ""
    }
}

fn abort_action(app: &App) -> Option<Command> {
    selectors::is_uploading(app.state()).then_some(Command::ShowAbort)
}
