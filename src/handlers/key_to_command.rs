use crate::app::{App, Screen};
use crate::command::Command;
use crate::menu;
use crossterm::event::{KeyCode, KeyModifiers};

/// Converts keyboard input to a Command based on what is on screen. Overlays
/// driven by the store (alert, abort dialog, share dialog) take the key first.
pub fn key_to_command(app: &App, key: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
    if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    let state = app.state();
    if state.alert.show {
        return Some(Command::DismissAlert);
    }
    if state.uploads.show_abort_modal {
        return abort_dialog_key_to_command(app, key);
    }
    if state.objects.share.show {
        return share_dialog_key_to_command(key);
    }

    match app.view.screen {
        Screen::Browser => browser_key_to_command(app, key),
        Screen::DeleteConfirmation => delete_confirmation_key_to_command(app, key),
        Screen::Help => Some(Command::GoBack),
    }
}

fn browser_key_to_command(app: &App, key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::F(n) => menu::action_for_key(app, n),
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Char('?') => Some(Command::ShowHelp),
        KeyCode::Up => Some(Command::MoveUp),
        KeyCode::Down => Some(Command::MoveDown),
        KeyCode::PageUp => Some(Command::PageUp),
        KeyCode::PageDown => Some(Command::PageDown),
        KeyCode::Home => Some(Command::Home),
        KeyCode::End => Some(Command::End),
        KeyCode::Tab | KeyCode::BackTab => Some(Command::FocusNext),
        KeyCode::Enter => Some(Command::Activate),
        KeyCode::Backspace | KeyCode::Left => Some(Command::ParentPrefix),
        KeyCode::Delete => menu::action_for_key(app, 8),
        _ => None,
    }
}

fn delete_confirmation_key_to_command(app: &App, key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => Some(Command::DeleteToggle),
        KeyCode::Enter if app.view.delete_confirmation.confirm_selected => {
            Some(Command::ConfirmDelete)
        }
        KeyCode::Enter | KeyCode::Esc => Some(Command::GoBack),
        _ => None,
    }
}

fn share_dialog_key_to_command(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Tab | KeyCode::Right => Some(Command::ShareFieldNext),
        KeyCode::BackTab | KeyCode::Left => Some(Command::ShareFieldPrev),
        KeyCode::Up | KeyCode::Char('+') => Some(Command::ShareIncrement),
        KeyCode::Down | KeyCode::Char('-') => Some(Command::ShareDecrement),
        KeyCode::Esc | KeyCode::Enter => Some(Command::HideShare),
        _ => None,
    }
}

fn abort_dialog_key_to_command(app: &App, key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => Some(Command::AbortToggle),
        KeyCode::Enter if app.view.abort_selected => Some(Command::ConfirmAbort),
        KeyCode::Enter | KeyCode::Esc => Some(Command::HideAbort),
        _ => None,
    }
}
