pub mod commands;
pub mod selectors;
mod state;
mod store;
mod update;
pub mod view;

pub use state::*;
pub use store::{Dispatcher, Store, Thunk};
pub use update::update;
pub use view::{Focus, Screen, ViewState};

use crate::models::config::ConfigManager;
use crate::models::{Bucket, ObjectEntry};
use crate::web::SharedClient;
use std::path::PathBuf;

pub struct App {
    pub store: Store,
    pub view: ViewState,
    pub config_manager: ConfigManager,
    pub should_quit: bool,
    pub app_title: String,
}

impl App {
    pub fn new(client: SharedClient, config_manager: ConfigManager) -> Self {
        let share_form = view::ShareForm::new(config_manager.app_config.share_expiry);

        Self {
            store: Store::new(client),
            view: ViewState {
                share_form,
                ..ViewState::default()
            },
            config_manager,
            should_quit: false,
            app_title: "mbrowse - Object Browser".to_string(),
        }
    }

    pub fn state(&self) -> &State {
        self.store.state()
    }

    pub fn selected_bucket(&self) -> Option<&Bucket> {
        self.state().buckets.list.get(self.view.buckets.selected)
    }

    pub fn selected_object(&self) -> Option<&ObjectEntry> {
        selectors::object_at(self.state(), self.view.objects.selected)
    }

    /// Selected entry when it is an object rather than a folder.
    pub fn selected_file(&self) -> Option<&ObjectEntry> {
        self.selected_object().filter(|object| !object.is_folder())
    }

    pub fn download_dir(&self) -> PathBuf {
        self.config_manager.app_config.resolved_download_dir()
    }

    /// Number of rows in the focused panel.
    pub fn focused_len(&self) -> usize {
        match self.view.focus {
            Focus::Buckets => self.state().buckets.list.len(),
            Focus::Objects => self.state().objects.list.len(),
        }
    }

    /// Folds pending task output and keeps the cursors inside the lists.
    /// Returns `true` when anything changed.
    pub fn sync(&mut self) -> bool {
        let handled = self.store.process_pending();
        if handled > 0 {
            let buckets = self.state().buckets.list.len();
            let objects = self.state().objects.list.len();
            self.view.buckets.clamp(buckets);
            self.view.objects.clamp(objects);
        }
        handled > 0
    }
}
