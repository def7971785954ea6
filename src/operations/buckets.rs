use super::{alert, objects};
use crate::app::{selectors, Store};
use crate::message::Message;
use tokio::task::JoinHandle;

/// Loads the bucket list. When no bucket is current yet the first one is
/// selected.
pub fn fetch_buckets(store: &mut Store) -> JoinHandle<()> {
    let client = store.client();
    let dispatcher = store.dispatcher();
    tokio::spawn(async move {
        match client.list_buckets().await {
            Ok(reply) => {
                let buckets = reply.buckets.unwrap_or_default();
                tracing::info!(count = buckets.len(), "listed buckets");
                let first = buckets.first().map(|bucket| bucket.name.clone());
                dispatcher.dispatch(Message::SetBucketList { buckets });
                if let Some(first) = first {
                    dispatcher.dispatch_thunk(move |store| {
                        if selectors::current_bucket(store.state()).is_empty() {
                            select_bucket(store, &first);
                        }
                    });
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "list buckets failed");
                alert::danger(&dispatcher, err.to_string());
            }
        }
    })
}

/// Makes `bucket` current, starting at its root.
pub fn select_bucket(store: &mut Store, bucket: &str) -> JoinHandle<()> {
    store.dispatch(Message::SetCurrentBucket {
        bucket: bucket.to_string(),
    });
    objects::select_prefix(store, "")
}
