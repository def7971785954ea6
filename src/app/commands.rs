use super::view::{Focus, Screen, ShareForm};
use super::{selectors, App};
use crate::command::Command;
use crate::handlers::on_drop;
use crate::models::object::parent_prefix;
use crate::operations::{alert, buckets, objects, uploads};

/// Applies one user gesture. Returns a follow-up command when one gesture
/// implies another.
pub fn execute(app: &mut App, command: Command) -> Option<Command> {
    tracing::trace!(?command, "execute");
    match command {
        Command::Quit => {
            app.should_quit = true;
        }
        Command::ShowHelp => app.view.show(Screen::Help),
        Command::GoBack => app.view.go_back(),
        Command::FocusNext => {
            app.view.focus = app.view.focus.toggle();
        }

        // ===== Navigation =====
        Command::MoveUp => {
            let len = app.focused_len();
            app.view.cursor_mut().up(len);
        }
        Command::MoveDown => {
            let len = app.focused_len();
            if !app.view.cursor_mut().down(len) {
                load_next_page(app);
            }
        }
        Command::PageUp => {
            let len = app.focused_len();
            app.view.cursor_mut().page_up(len);
        }
        Command::PageDown => {
            let len = app.focused_len();
            app.view.cursor_mut().page_down(len);
        }
        Command::Home => {
            let len = app.focused_len();
            app.view.cursor_mut().home(len);
        }
        Command::End => {
            let len = app.focused_len();
            app.view.cursor_mut().end(len);
        }
        Command::Activate => return activate(app),
        Command::ParentPrefix => {
            let prefix = selectors::current_prefix(app.state());
            if !prefix.is_empty() {
                let parent = parent_prefix(prefix);
                open_prefix(app, &parent);
            }
        }

        // ===== Listing =====
        Command::Sort { sort_by } => {
            objects::sort_objects(&mut app.store, sort_by);
            app.view.objects.home(app.state().objects.list.len());
        }
        Command::Refresh => {
            buckets::fetch_buckets(&mut app.store);
            if !selectors::current_bucket(app.state()).is_empty() {
                objects::fetch_objects(&mut app.store, false);
            }
        }

        // ===== Delete =====
        Command::RequestDelete => {
            let name = app.selected_file()?.name.clone();
            app.view.delete_confirmation.name = name;
            app.view.delete_confirmation.confirm_selected = false;
            app.view.show(Screen::DeleteConfirmation);
        }
        Command::DeleteToggle => {
            let confirmation = &mut app.view.delete_confirmation;
            confirmation.confirm_selected = !confirmation.confirm_selected;
        }
        Command::ConfirmDelete => {
            let name = std::mem::take(&mut app.view.delete_confirmation.name);
            if !name.is_empty() {
                objects::delete_object(&mut app.store, &name);
            }
            return Some(Command::GoBack);
        }

        // ===== Share =====
        Command::Share => {
            let name = app.selected_file()?.name.clone();
            app.view.share_form = ShareForm::new(app.config_manager.app_config.share_expiry);
            reshare(app, &name);
        }
        Command::ShareFieldNext => app.view.share_form.next_field(),
        Command::ShareFieldPrev => app.view.share_form.prev_field(),
        Command::ShareIncrement => {
            if app.view.share_form.increment() {
                reshare_current(app);
            }
        }
        Command::ShareDecrement => {
            if app.view.share_form.decrement() {
                reshare_current(app);
            }
        }
        Command::HideShare => objects::hide_share_object(&mut app.store),

        Command::Download => {
            let name = app.selected_file()?.name.clone();
            objects::download_object(&mut app.store, &name);
        }

        // ===== Uploads =====
        Command::ShowAbort => {
            app.view.abort_selected = false;
            uploads::show_abort_modal(&mut app.store);
        }
        Command::AbortToggle => {
            app.view.abort_selected = !app.view.abort_selected;
        }
        Command::ConfirmAbort => {
            let aborted = uploads::confirm_abort(&mut app.store);
            tracing::info!(count = aborted.len(), "uploads aborted");
        }
        Command::HideAbort => uploads::hide_abort_modal(&mut app.store),

        Command::DismissAlert => alert::clear(&app.store.dispatcher()),
        Command::Drop { text } => {
            on_drop(app, &text);
        }
    }
    None
}

fn activate(app: &mut App) -> Option<Command> {
    match app.view.focus {
        Focus::Buckets => {
            let bucket = app.selected_bucket()?.name.clone();
            buckets::select_bucket(&mut app.store, &bucket);
            app.view.objects.reset();
            app.view.focus = Focus::Objects;
            None
        }
        Focus::Objects => {
            let object = app.selected_object()?;
            if object.is_folder() {
                let prefix = selectors::object_key(app.state(), &object.name);
                open_prefix(app, &prefix);
                None
            } else {
                Some(Command::Download)
            }
        }
    }
}

fn open_prefix(app: &mut App, prefix: &str) {
    objects::select_prefix(&mut app.store, prefix);
    app.view.objects.reset();
}

/// Scrolling past the last row pulls in the next page, unless a listing is
/// still on its way.
fn load_next_page(app: &mut App) {
    if app.view.focus != Focus::Objects {
        return;
    }
    let listing = &app.state().objects;
    if listing.is_truncated && listing.in_flight.is_none() {
        objects::fetch_objects(&mut app.store, true);
    }
}

/// Re-issues the link on screen with the expiry now in the form.
fn reshare_current(app: &mut App) {
    let name = app.state().objects.share.object.clone();
    reshare(app, &name);
}

fn reshare(app: &mut App, name: &str) {
    let expiry = app.view.share_form.expiry;
    objects::share_object(
        &mut app.store,
        name,
        expiry.days,
        expiry.hours,
        expiry.minutes,
    );
}
