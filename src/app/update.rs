use super::state::{AlertState, ShareState, State};
use crate::message::Message;
use crate::models::{SortBy, UploadEntry};

/// Central update function following The Elm Architecture (TEA).
/// Folds one message into the state; every match arm is exhaustive so a new
/// message cannot be silently ignored.
pub fn update(state: &mut State, msg: Message) {
    match msg {
        // ===== Buckets =====
        Message::SetBucketList { buckets } => {
            state.buckets.list = buckets;
        }
        Message::SetCurrentBucket { bucket } => {
            state.buckets.current_bucket = bucket;
        }

        // ===== Object Listing =====
        Message::ListRequested { request } => {
            state.objects.latest_request = state.objects.latest_request.max(request);
            state.objects.in_flight = Some(state.objects.latest_request);
        }
        Message::ListLoaded {
            request,
            objects,
            marker,
            is_truncated,
            append,
        } => {
            let listing = &mut state.objects;
            if request < listing.latest_request {
                tracing::debug!(
                    request,
                    latest = listing.latest_request,
                    "dropping stale listing reply"
                );
                return;
            }
            listing.in_flight = None;
            if append {
                listing.list.extend(objects);
            } else {
                listing.list = objects;
                listing.sort_by = SortBy::None;
                listing.sort_order = false;
            }
            listing.marker = marker;
            listing.is_truncated = is_truncated;
        }
        Message::ListFailed { request } => {
            if request >= state.objects.latest_request {
                state.objects.in_flight = None;
            }
        }
        Message::SetList {
            objects,
            marker,
            is_truncated,
        } => {
            state.objects.list = objects;
            state.objects.marker = marker;
            state.objects.is_truncated = is_truncated;
        }
        Message::RemoveObject { name } => {
            state.objects.list.retain(|object| object.name != name);
        }
        Message::SetSortBy { sort_by } => {
            state.objects.sort_by = sort_by;
        }
        Message::SetSortOrder { ascending } => {
            state.objects.sort_order = ascending;
        }
        Message::SetCurrentPrefix { prefix } => {
            state.objects.current_prefix = prefix;
        }
        Message::ShareRequested { request } => {
            let share = &mut state.objects.share;
            share.latest_request = share.latest_request.max(request);
        }
        Message::SetShareObject {
            request,
            show,
            object,
            url,
        } => {
            let latest_request = state.objects.share.latest_request;
            if request < latest_request {
                tracing::debug!(request, latest = latest_request, "dropping stale share reply");
                return;
            }
            state.objects.share = if show {
                ShareState {
                    show,
                    object,
                    url,
                    latest_request: request,
                }
            } else {
                ShareState {
                    latest_request: request,
                    ..ShareState::default()
                }
            };
        }

        // ===== Uploads =====
        Message::AddUpload {
            slug,
            name,
            source,
            size,
        } => {
            state.uploads.files.insert(
                slug.clone(),
                UploadEntry {
                    slug,
                    name,
                    source,
                    size,
                    loaded: 0,
                },
            );
        }
        Message::UpdateProgress { slug, loaded } => {
            if let Some(entry) = state.uploads.files.get_mut(&slug) {
                entry.loaded = loaded;
            }
        }
        Message::StopUpload { slug } => {
            state.uploads.files.remove(&slug);
            if state.uploads.files.is_empty() {
                state.uploads.show_abort_modal = false;
            }
        }
        Message::ShowAbortModal => {
            state.uploads.show_abort_modal = !state.uploads.files.is_empty();
        }
        Message::HideAbortModal => {
            state.uploads.show_abort_modal = false;
        }

        // ===== Alerts =====
        Message::SetAlert { id, kind, message } => {
            state.alert = AlertState {
                show: true,
                kind,
                message,
                id,
            };
        }
        Message::ClearAlert { id } => {
            if id.is_none_or(|id| id == state.alert.id) {
                state.alert = AlertState {
                    id: state.alert.id,
                    ..AlertState::default()
                };
            }
        }

        // ===== Location =====
        Message::ReplaceRoute { route } => {
            state.location.route = route;
        }
        Message::Navigate { download } => {
            state.location.pending_download = Some(download);
        }
        Message::NavigationHandled => {
            state.location.pending_download = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Download;
    use crate::models::{AlertKind, ObjectEntry};
    use std::path::PathBuf;

    fn object(name: &str) -> ObjectEntry {
        ObjectEntry {
            name: name.to_string(),
            size: 1,
            content_type: String::new(),
            last_modified: None,
        }
    }

    fn loaded(request: u64, names: &[&str], marker: &str, append: bool) -> Message {
        Message::ListLoaded {
            request,
            objects: names.iter().map(|n| object(n)).collect(),
            marker: marker.to_string(),
            is_truncated: !marker.is_empty(),
            append,
        }
    }

    #[test]
    fn fresh_listing_resets_sort() {
        let mut state = State::default();
        state.objects.sort_by = SortBy::Size;
        state.objects.sort_order = true;

        update(&mut state, loaded(0, &["a", "b"], "b", false));

        assert_eq!(state.objects.list.len(), 2);
        assert_eq!(state.objects.sort_by, SortBy::None);
        assert!(!state.objects.sort_order);
        assert_eq!(state.objects.marker, "b");
        assert!(state.objects.is_truncated);
    }

    #[test]
    fn appended_page_keeps_arrival_order_and_sort() {
        let mut state = State::default();
        update(&mut state, loaded(0, &["a", "b"], "b", false));
        update(&mut state, Message::SetSortBy { sort_by: SortBy::Name });
        update(&mut state, loaded(0, &["c"], "", true));

        let names: Vec<_> = state.objects.list.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(state.objects.sort_by, SortBy::Name);
        assert!(!state.objects.is_truncated);
        assert_eq!(state.objects.marker, "");
    }

    #[test]
    fn stale_reply_is_dropped() {
        let mut state = State::default();
        update(&mut state, Message::ListRequested { request: 1 });
        update(&mut state, Message::ListRequested { request: 2 });
        update(&mut state, loaded(2, &["new"], "", false));
        update(&mut state, loaded(1, &["old"], "", false));

        assert_eq!(state.objects.list, vec![object("new")]);
    }

    #[test]
    fn hiding_share_clears_fields() {
        let mut state = State::default();
        update(
            &mut state,
            Message::SetShareObject {
                request: 1,
                show: true,
                object: "x".into(),
                url: "http://u".into(),
            },
        );
        assert!(state.objects.share.show);

        update(
            &mut state,
            Message::SetShareObject {
                request: 2,
                show: false,
                object: "ignored".into(),
                url: "ignored".into(),
            },
        );
        let share = &state.objects.share;
        assert!(!share.show);
        assert!(share.object.is_empty());
        assert!(share.url.is_empty());
        assert_eq!(share.latest_request, 2);
    }

    #[test]
    fn share_reply_older_than_hide_is_dropped() {
        let mut state = State::default();
        update(&mut state, Message::ShareRequested { request: 3 });
        update(
            &mut state,
            Message::SetShareObject {
                request: 4,
                show: false,
                object: String::new(),
                url: String::new(),
            },
        );
        update(
            &mut state,
            Message::SetShareObject {
                request: 3,
                show: true,
                object: "x".into(),
                url: "http://late".into(),
            },
        );

        assert!(!state.objects.share.show);
        assert!(state.objects.share.url.is_empty());
    }

    #[test]
    fn in_flight_follows_newest_request() {
        let mut state = State::default();
        update(&mut state, Message::ListRequested { request: 1 });
        assert_eq!(state.objects.in_flight, Some(1));
        update(&mut state, Message::ListRequested { request: 2 });

        update(&mut state, Message::ListFailed { request: 1 });
        assert_eq!(state.objects.in_flight, Some(2));
        update(&mut state, Message::ListFailed { request: 2 });
        assert_eq!(state.objects.in_flight, None);

        update(&mut state, Message::ListRequested { request: 3 });
        update(&mut state, loaded(3, &["a"], "", false));
        assert_eq!(state.objects.in_flight, None);
    }

    #[test]
    fn remove_only_matching_entry() {
        let mut state = State::default();
        update(&mut state, loaded(0, &["foo.txt", "foo.txt.bak", "bar"], "", false));
        update(
            &mut state,
            Message::RemoveObject {
                name: "foo.txt".into(),
            },
        );
        let names: Vec<_> = state.objects.list.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["foo.txt.bak", "bar"]);
    }

    #[test]
    fn upload_lifecycle() {
        let mut state = State::default();
        update(
            &mut state,
            Message::AddUpload {
                slug: "s1".into(),
                name: "a.bin".into(),
                source: PathBuf::from("/tmp/a.bin"),
                size: 10,
            },
        );
        update(&mut state, Message::ShowAbortModal);
        update(
            &mut state,
            Message::UpdateProgress {
                slug: "s1".into(),
                loaded: 4,
            },
        );
        assert_eq!(state.uploads.files["s1"].loaded, 4);
        assert!(state.uploads.show_abort_modal);

        update(&mut state, Message::StopUpload { slug: "s1".into() });
        assert!(state.uploads.files.is_empty());
        assert!(!state.uploads.show_abort_modal);
    }

    #[test]
    fn abort_modal_needs_uploads() {
        let mut state = State::default();
        update(&mut state, Message::ShowAbortModal);
        assert!(!state.uploads.show_abort_modal);
    }

    #[test]
    fn timed_clear_only_hits_its_own_alert() {
        let mut state = State::default();
        update(
            &mut state,
            Message::SetAlert {
                id: 1,
                kind: AlertKind::Success,
                message: "first".into(),
            },
        );
        update(
            &mut state,
            Message::SetAlert {
                id: 2,
                kind: AlertKind::Danger,
                message: "second".into(),
            },
        );
        update(&mut state, Message::ClearAlert { id: Some(1) });
        assert!(state.alert.show);
        assert_eq!(state.alert.message, "second");

        update(&mut state, Message::ClearAlert { id: None });
        assert!(!state.alert.show);
        assert!(state.alert.message.is_empty());
    }

    #[test]
    fn navigation_is_consumed() {
        let mut state = State::default();
        let download = Download {
            url: "http://h/minio/download/b/k?token=t".into(),
            object: "k".into(),
        };
        update(
            &mut state,
            Message::Navigate {
                download: download.clone(),
            },
        );
        assert_eq!(state.location.pending_download, Some(download));
        update(&mut state, Message::NavigationHandled);
        assert!(state.location.pending_download.is_none());
    }
}
