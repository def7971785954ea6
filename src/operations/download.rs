use super::alert;
use crate::app::Store;
use crate::message::Message;
use std::path::Path;
use tokio::task::JoinHandle;

/// Carries out a pending download navigation by streaming the URL into
/// `dir`. Returns `None` when nothing is pending.
pub fn start_pending_download(store: &mut Store, dir: &Path) -> Option<JoinHandle<()>> {
    let download = store.state().location.pending_download.clone()?;
    store.dispatch(Message::NavigationHandled);

    let file_name = download
        .object
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or("download")
        .to_string();
    let dest = dir.join(&file_name);
    let client = store.client();
    let dispatcher = store.dispatcher();

    Some(tokio::spawn(async move {
        match client.download(&download.url, &dest).await {
            Ok(bytes) => {
                tracing::info!(object = %download.object, dest = %dest.display(), bytes, "downloaded");
                alert::success(
                    &dispatcher,
                    format!("Downloaded '{file_name}' to {}", dest.display()),
                );
            }
            Err(err) => {
                tracing::warn!(object = %download.object, error = %err, "download failed");
                alert::danger(&dispatcher, err.to_string());
            }
        }
    }))
}
