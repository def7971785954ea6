use super::{alert, objects};
use crate::app::{selectors, Store};
use crate::message::Message;
use crate::models::upload::new_slug;
use crate::models::Slug;
use crate::web::{ProgressCallback, UploadRequest, WebError};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tokio::task::AbortHandle;

/// In-flight upload tasks by slug. Lives beside the state tree because task
/// handles are not state.
#[derive(Debug, Default)]
pub struct UploadRegistry {
    handles: HashMap<Slug, AbortHandle>,
}

impl UploadRegistry {
    pub fn insert(&mut self, slug: Slug, handle: AbortHandle) {
        self.handles.insert(slug, handle);
    }

    pub fn remove(&mut self, slug: &str) -> Option<AbortHandle> {
        self.handles.remove(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.handles.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// Starts uploading the file at `path` into the current bucket and prefix.
/// Returns the slug tracking it, or `None` when nothing was started.
pub fn upload_file(store: &mut Store, path: &Path) -> Option<Slug> {
    let dispatcher = store.dispatcher();
    let bucket = selectors::current_bucket(store.state()).to_string();
    if bucket.is_empty() {
        alert::danger(
            &dispatcher,
            "Please choose a bucket before trying to upload files.",
        );
        return None;
    }

    let size = match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => metadata.len(),
        Ok(_) => {
            tracing::debug!(path = %path.display(), "skipping non-file drop");
            return None;
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "cannot read dropped file");
            alert::danger(&dispatcher, format!("{}: {err}", path.display()));
            return None;
        }
    };
    let name = path.file_name()?.to_string_lossy().into_owned();
    let key = selectors::object_key(store.state(), &name);
    let slug = new_slug();

    store.dispatch(Message::AddUpload {
        slug: slug.clone(),
        name: name.clone(),
        source: path.to_path_buf(),
        size,
    });

    let progress: ProgressCallback = {
        let dispatcher = dispatcher.clone();
        let slug = slug.clone();
        Arc::new(move |loaded| {
            dispatcher.dispatch(Message::UpdateProgress {
                slug: slug.clone(),
                loaded,
            })
        })
    };
    let request = UploadRequest {
        bucket,
        key,
        path: path.to_path_buf(),
    };
    let client = store.client();
    let task_slug = slug.clone();
    let handle = tokio::spawn(async move {
        let result = client.upload(request, progress).await;
        dispatcher.dispatch_thunk(move |store| finish_upload(store, &task_slug, &name, result));
    });
    store.uploads.insert(slug.clone(), handle.abort_handle());
    tracing::info!(slug = %slug, path = %path.display(), size, "upload started");
    Some(slug)
}

/// Retires a completed upload and reports its outcome.
pub fn finish_upload(
    store: &mut Store,
    slug: &str,
    name: &str,
    result: Result<(), WebError>,
) {
    if store.uploads.remove(slug).is_none() {
        // Aborted while the completion was in flight.
        return;
    }
    store.dispatch(Message::StopUpload {
        slug: slug.to_string(),
    });

    let dispatcher = store.dispatcher();
    match result {
        Ok(()) => {
            tracing::info!(slug, name, "upload finished");
            alert::success(&dispatcher, format!("File '{name}' uploaded successfully."));
            objects::fetch_objects(store, false);
        }
        Err(err) if err.is_unauthorized() => {
            tracing::warn!(slug, name, error = %err, "upload rejected");
            alert::danger(&dispatcher, "Unauthorized request.");
        }
        Err(err) => {
            tracing::warn!(slug, name, error = %err, "upload failed");
            alert::danger(
                &dispatcher,
                format!("Error occurred uploading the object {name}."),
            );
        }
    }
}

/// Cancels one upload and drops its entry.
pub fn abort_upload(store: &mut Store, slug: &str) {
    if let Some(handle) = store.uploads.remove(slug) {
        handle.abort();
        tracing::info!(slug, "upload aborted");
    }
    store.dispatch(Message::StopUpload {
        slug: slug.to_string(),
    });
}

/// Aborts every tracked upload and closes the confirmation dialog.
pub fn confirm_abort(store: &mut Store) -> Vec<Slug> {
    let slugs = selectors::upload_slugs(store.state());
    for slug in &slugs {
        abort_upload(store, slug);
    }
    hide_abort_modal(store);
    slugs
}

pub fn show_abort_modal(store: &mut Store) {
    store.dispatch(Message::ShowAbortModal);
}

pub fn hide_abort_modal(store: &mut Store) {
    store.dispatch(Message::HideAbortModal);
}
