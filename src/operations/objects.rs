use super::alert;
use crate::app::{selectors, Download, Store};
use crate::message::Message;
use crate::models::object::sorted;
use crate::models::{ObjectEntry, SortBy};
use crate::web::{download_url, ListObjectsArgs, PresignedGetArgs, RemoveObjectArgs};
use tokio::task::JoinHandle;

/// Lists the current bucket under the current prefix. `append` requests the
/// page after the stored marker and adds it to the list; otherwise the first
/// page replaces the list.
pub fn fetch_objects(store: &mut Store, append: bool) -> JoinHandle<()> {
    let state = store.state();
    let bucket = selectors::current_bucket(state).to_string();
    let prefix = selectors::current_prefix(state).to_string();
    let marker = if append {
        state.objects.marker.clone()
    } else {
        String::new()
    };

    let dispatcher = store.dispatcher();
    let request = dispatcher.next_id();
    store.dispatch(Message::ListRequested { request });

    let client = store.client();
    tokio::spawn(async move {
        let args = ListObjectsArgs {
            bucket_name: bucket.clone(),
            prefix: prefix.clone(),
            marker,
        };
        match client.list_objects(args).await {
            Ok(reply) => {
                let objects: Vec<ObjectEntry> = reply
                    .objects
                    .unwrap_or_default()
                    .into_iter()
                    .map(|mut object| {
                        if let Some(name) = object.name.strip_prefix(prefix.as_str()) {
                            object.name = name.to_string();
                        }
                        object
                    })
                    .collect();
                tracing::info!(
                    bucket = %bucket,
                    prefix = %prefix,
                    count = objects.len(),
                    truncated = reply.istruncated,
                    append,
                    "listed objects"
                );
                dispatcher.dispatch(Message::ListLoaded {
                    request,
                    objects,
                    marker: reply.nextmarker,
                    is_truncated: reply.istruncated,
                    append,
                });
            }
            Err(err) => {
                tracing::warn!(bucket = %bucket, prefix = %prefix, error = %err, "list objects failed");
                let message = err.to_string();
                dispatcher.dispatch_thunk(move |store| fail_listing(store, request, message));
            }
        }
    })
}

/// Releases a failed listing request. A failure of a request that has since
/// been replaced stays silent.
fn fail_listing(store: &mut Store, request: u64, message: String) {
    let latest = store.state().objects.latest_request;
    if request < latest {
        tracing::debug!(request, latest, "dropping stale listing failure");
        return;
    }
    store.dispatch(Message::ListFailed { request });
    alert::danger(&store.dispatcher(), message);
}

/// Reorders the held list in memory. Repeating the current field flips the
/// order, a new field starts ascending.
pub fn sort_objects(store: &mut Store, sort_by: SortBy) {
    let objects = &store.state().objects;
    let ascending = if objects.sort_by == sort_by {
        !objects.sort_order
    } else {
        true
    };
    let list = sorted(&objects.list, sort_by, ascending);
    let marker = objects.marker.clone();
    let is_truncated = objects.is_truncated;

    store.dispatch(Message::SetSortBy { sort_by });
    store.dispatch(Message::SetSortOrder { ascending });
    store.dispatch(Message::SetList {
        objects: list,
        marker,
        is_truncated,
    });
}

pub fn select_prefix(store: &mut Store, prefix: &str) -> JoinHandle<()> {
    store.dispatch(Message::SetCurrentPrefix {
        prefix: prefix.to_string(),
    });
    let handle = fetch_objects(store, false);
    let route = format!("/{}/{}", selectors::current_bucket(store.state()), prefix);
    store.dispatch(Message::ReplaceRoute { route });
    handle
}

pub fn delete_object(store: &mut Store, name: &str) -> JoinHandle<()> {
    let bucket = selectors::current_bucket(store.state()).to_string();
    let key = selectors::object_key(store.state(), name);
    let name = name.to_string();
    let dispatcher = store.dispatcher();
    let client = store.client();
    tokio::spawn(async move {
        let args = RemoveObjectArgs {
            bucket_name: bucket.clone(),
            objects: vec![key.clone()],
        };
        match client.remove_object(args).await {
            Ok(()) => {
                tracing::info!(bucket = %bucket, key = %key, "removed object");
                dispatcher.dispatch(Message::RemoveObject { name });
            }
            Err(err) => {
                tracing::warn!(bucket = %bucket, key = %key, error = %err, "remove object failed");
                alert::danger(&dispatcher, err.to_string());
            }
        }
    })
}

/// Seconds a presigned link stays valid.
pub fn share_expiry(days: u64, hours: u64, minutes: u64) -> u64 {
    days * 86_400 + hours * 3_600 + minutes * 60
}

pub fn share_object(
    store: &mut Store,
    name: &str,
    days: u64,
    hours: u64,
    minutes: u64,
) -> JoinHandle<()> {
    let client = store.client();
    let args = PresignedGetArgs {
        host: client.host(),
        bucket: selectors::current_bucket(store.state()).to_string(),
        object: selectors::object_key(store.state(), name),
        expiry: share_expiry(days, hours, minutes),
    };
    let name = name.to_string();
    let dispatcher = store.dispatcher();
    let request = dispatcher.next_id();
    store.dispatch(Message::ShareRequested { request });

    tokio::spawn(async move {
        let key = args.object.clone();
        let result = client.presigned_get(args).await;
        dispatcher.dispatch_thunk(move |store| {
            let latest = store.state().objects.share.latest_request;
            if request < latest {
                tracing::debug!(key = %key, request, latest, "dropping stale share reply");
                return;
            }
            match result {
                Ok(reply) => {
                    tracing::info!(key = %key, "created share link");
                    store.dispatch(Message::SetShareObject {
                        request,
                        show: true,
                        object: name,
                        url: reply.url,
                    });
                    alert::success(
                        &store.dispatcher(),
                        format!(
                            "Object shared. Expires in {days} days {hours} hours {minutes} minutes"
                        ),
                    );
                }
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "presign failed");
                    alert::danger(&store.dispatcher(), err.to_string());
                }
            }
        });
    })
}

/// Closes the share dialog. Replies to links requested before the close are
/// dropped.
pub fn hide_share_object(store: &mut Store) {
    let request = store.dispatcher().next_id();
    store.dispatch(Message::SetShareObject {
        request,
        show: false,
        object: String::new(),
        url: String::new(),
    });
}

/// Points the client at the object's download URL. A logged-in session first
/// asks the server for a one-off URL token; anonymous sessions use an empty
/// quoted token and navigate immediately.
pub fn download_object(store: &mut Store, name: &str) -> Option<JoinHandle<()>> {
    let client = store.client();
    let bucket = selectors::current_bucket(store.state()).to_string();
    let key = selectors::object_key(store.state(), name);

    if !client.logged_in() {
        let url = download_url(&client.origin(), &bucket, &key, "''");
        store.dispatch(Message::Navigate {
            download: Download { url, object: key },
        });
        return None;
    }

    let dispatcher = store.dispatcher();
    Some(tokio::spawn(async move {
        match client.create_url_token().await {
            Ok(reply) => {
                let url = download_url(&client.origin(), &bucket, &key, &reply.token);
                dispatcher.dispatch(Message::Navigate {
                    download: Download { url, object: key },
                });
            }
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "url token failed");
                alert::danger(&dispatcher, err.to_string());
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlertKind;
    use crate::web::mock::{listing, object, MockClient};
    use std::sync::Arc;
    use std::time::Duration;

    fn store_with(client: MockClient) -> (Store, Arc<MockClient>) {
        let client = Arc::new(client);
        let mut store = Store::new(client.clone());
        store.dispatch(Message::SetCurrentBucket {
            bucket: "docs".into(),
        });
        (store, client)
    }

    fn names(store: &Store) -> Vec<String> {
        store
            .state()
            .objects
            .list
            .iter()
            .map(|o| o.name.clone())
            .collect()
    }

    #[tokio::test]
    async fn first_page_strips_prefix_and_resets_sort() {
        let (mut store, client) = store_with(
            MockClient::new().with_listing(listing(&["2024/a.txt", "2024/sub/"], "", false)),
        );
        store.dispatch(Message::SetSortBy { sort_by: SortBy::Size });
        store.dispatch(Message::SetSortOrder { ascending: true });

        select_prefix(&mut store, "2024/").await.unwrap();
        store.process_pending();

        assert_eq!(names(&store), ["a.txt", "sub/"]);
        assert_eq!(store.state().objects.sort_by, SortBy::None);
        assert!(!store.state().objects.sort_order);
        assert_eq!(store.state().location.route, "/docs/2024/");
        let calls = client.list_calls.lock().unwrap();
        assert_eq!(calls[0].prefix, "2024/");
        assert_eq!(calls[0].marker, "");
    }

    #[tokio::test]
    async fn next_page_appends_and_adopts_marker() {
        let (mut store, client) = store_with(
            MockClient::new()
                .with_listing(listing(&["a", "b"], "b", true))
                .with_listing(listing(&["c"], "", false)),
        );

        fetch_objects(&mut store, false).await.unwrap();
        store.process_pending();
        assert!(store.state().objects.is_truncated);

        fetch_objects(&mut store, true).await.unwrap();
        store.process_pending();

        assert_eq!(names(&store), ["a", "b", "c"]);
        assert_eq!(store.state().objects.marker, "");
        assert!(!store.state().objects.is_truncated);
        assert_eq!(client.list_calls.lock().unwrap()[1].marker, "b");
    }

    #[tokio::test]
    async fn failed_listing_keeps_state_and_alerts() {
        let (mut store, _) = store_with(
            MockClient::new()
                .with_listing(listing(&["a"], "", false))
                .with_failing_listing("Bucket not found"),
        );
        fetch_objects(&mut store, false).await.unwrap();
        store.process_pending();
        fetch_objects(&mut store, false).await.unwrap();
        store.process_pending();

        assert_eq!(names(&store), ["a"]);
        assert_eq!(store.state().alert.kind, AlertKind::Danger);
        assert_eq!(store.state().alert.message, "Bucket not found");
    }

    #[tokio::test]
    async fn slow_earlier_listing_cannot_overwrite_newer() {
        let (mut store, _) = store_with(
            MockClient::new()
                .with_delayed_listing(Duration::from_millis(50), listing(&["old/"], "", false))
                .with_listing(listing(&["new/"], "", false)),
        );
        let slow = select_prefix(&mut store, "old/");
        let fast = select_prefix(&mut store, "new/");
        fast.await.unwrap();
        slow.await.unwrap();
        store.process_pending();

        assert_eq!(names(&store), ["new/"]);
    }

    #[tokio::test]
    async fn failure_of_replaced_listing_stays_silent() {
        let (mut store, _) = store_with(
            MockClient::new()
                .with_delayed_failing_listing(Duration::from_millis(50), "connection reset")
                .with_listing(listing(&["new/"], "", false)),
        );
        let slow = select_prefix(&mut store, "old/");
        let fast = select_prefix(&mut store, "new/");
        fast.await.unwrap();
        slow.await.unwrap();
        store.process_pending();

        assert_eq!(names(&store), ["new/"]);
        assert!(!store.state().alert.show);
        assert_eq!(store.state().objects.in_flight, None);
    }

    #[tokio::test]
    async fn failed_page_is_no_longer_in_flight() {
        let (mut store, _) = store_with(
            MockClient::new()
                .with_listing(listing(&["a"], "a", true))
                .with_failing_listing("timeout"),
        );
        fetch_objects(&mut store, false).await.unwrap();
        store.process_pending();

        let next = fetch_objects(&mut store, true);
        assert!(store.state().objects.in_flight.is_some());
        next.await.unwrap();
        store.process_pending();

        assert_eq!(store.state().objects.in_flight, None);
        assert!(store.state().objects.is_truncated);
        assert_eq!(store.state().objects.marker, "a");
        assert_eq!(store.state().alert.message, "timeout");
    }

    #[tokio::test]
    async fn sort_by_name_toggles() {
        let (mut store, client) = store_with(MockClient::new());
        store.dispatch(Message::SetList {
            objects: vec![object("b", 1), object("A", 2), object("dir/", 0)],
            marker: "m".into(),
            is_truncated: true,
        });

        sort_objects(&mut store, SortBy::Name);
        assert!(store.state().objects.sort_order);
        assert_eq!(names(&store), ["dir/", "A", "b"]);

        sort_objects(&mut store, SortBy::Name);
        assert!(!store.state().objects.sort_order);
        assert_eq!(names(&store), ["dir/", "b", "A"]);

        sort_objects(&mut store, SortBy::Size);
        assert!(store.state().objects.sort_order);
        assert_eq!(store.state().objects.marker, "m");
        assert!(client.list_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_entry() {
        let (mut store, client) = store_with(MockClient::new());
        store.dispatch(Message::SetCurrentPrefix {
            prefix: "p/".into(),
        });
        store.dispatch(Message::SetList {
            objects: vec![object("foo.txt", 1), object("foo.txt.old", 1)],
            marker: String::new(),
            is_truncated: false,
        });

        delete_object(&mut store, "foo.txt").await.unwrap();
        store.process_pending();

        assert_eq!(names(&store), ["foo.txt.old"]);
        let calls = client.remove_calls.lock().unwrap();
        assert_eq!(calls[0].bucket_name, "docs");
        assert_eq!(calls[0].objects, vec!["p/foo.txt".to_string()]);
    }

    #[tokio::test]
    async fn failed_delete_alerts_and_keeps_list() {
        let (mut store, _) = store_with(MockClient::new().with_failing_remove("Access Denied."));
        store.dispatch(Message::SetList {
            objects: vec![object("foo.txt", 1)],
            marker: String::new(),
            is_truncated: false,
        });

        delete_object(&mut store, "foo.txt").await.unwrap();
        store.process_pending();

        assert_eq!(names(&store), ["foo.txt"]);
        assert_eq!(store.state().alert.kind, AlertKind::Danger);
        assert_eq!(store.state().alert.message, "Access Denied.");
    }

    #[tokio::test]
    async fn share_sets_state_and_alert() {
        let (mut store, client) = store_with(MockClient::new());
        share_object(&mut store, "x", 1, 2, 3).await.unwrap();
        store.process_pending();

        assert_eq!(client.presign_calls.lock().unwrap()[0].expiry, 93_780);
        let share = &store.state().objects.share;
        assert!(share.show);
        assert_eq!(share.object, "x");
        assert_eq!(share.url, "http://localhost:9000/docs/x?X-Amz-Expires=93780");
        assert_eq!(store.state().alert.kind, AlertKind::Success);
        assert!(store
            .state()
            .alert
            .message
            .contains("1 days 2 hours 3 minutes"));

        hide_share_object(&mut store);
        assert!(!store.state().objects.share.show);
        assert!(store.state().objects.share.url.is_empty());
    }

    #[tokio::test]
    async fn share_reply_after_hide_is_dropped() {
        let (mut store, _) = store_with(MockClient::new());
        let pending = share_object(&mut store, "x", 1, 0, 0);
        hide_share_object(&mut store);
        pending.await.unwrap();
        store.process_pending();

        assert!(!store.state().objects.share.show);
        assert!(store.state().objects.share.url.is_empty());
        assert!(!store.state().alert.show);
    }

    #[tokio::test]
    async fn failed_share_leaves_share_state() {
        let (mut store, _) = store_with(MockClient::new().with_failing_presign("expired"));
        share_object(&mut store, "x", 0, 0, 5).await.unwrap();
        store.process_pending();

        assert!(!store.state().objects.share.show);
        assert_eq!(store.state().alert.message, "expired");
    }

    #[tokio::test]
    async fn anonymous_download_navigates_at_once() {
        let (mut store, _) = store_with(MockClient::new());
        store.dispatch(Message::SetCurrentPrefix {
            prefix: "a b/".into(),
        });
        assert!(download_object(&mut store, "c.txt").is_none());

        let pending = store.state().location.pending_download.clone().unwrap();
        assert_eq!(
            pending.url,
            "http://localhost:9000/minio/download/docs/a%20b/c.txt?token=''"
        );
        assert_eq!(pending.object, "a b/c.txt");
    }

    #[tokio::test]
    async fn logged_in_download_uses_url_token() {
        let (mut store, _) = store_with(MockClient::new().logged_in());
        download_object(&mut store, "c.txt").unwrap().await.unwrap();
        assert!(store.state().location.pending_download.is_none());
        store.process_pending();

        let pending = store.state().location.pending_download.clone().unwrap();
        assert!(pending.url.ends_with("/minio/download/docs/c.txt?token=url-token"));
    }

    #[tokio::test]
    async fn token_failure_does_not_navigate() {
        let (mut store, _) =
            store_with(MockClient::new().logged_in().with_failing_token("no session"));
        download_object(&mut store, "c.txt").unwrap().await.unwrap();
        store.process_pending();

        assert!(store.state().location.pending_download.is_none());
        assert_eq!(store.state().alert.kind, AlertKind::Danger);
    }

    #[test]
    fn expiry_seconds() {
        assert_eq!(share_expiry(1, 2, 3), 93_780);
        assert_eq!(share_expiry(7, 0, 0), 604_800);
    }
}
