use crate::app::Download;
use crate::models::{AlertKind, Bucket, ObjectEntry, Slug, SortBy};
use std::path::PathBuf;

/// Every state change the store accepts. Folded one at a time by `app::update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ===== Buckets =====
    SetBucketList {
        buckets: Vec<Bucket>,
    },
    SetCurrentBucket {
        bucket: String,
    },

    // ===== Object Listing =====
    /// A listing request was issued; replies from older requests are dropped.
    ListRequested {
        request: u64,
    },
    /// A listing reply arrived. `append` extends the list, otherwise the
    /// list is replaced and the sort resets.
    ListLoaded {
        request: u64,
        objects: Vec<ObjectEntry>,
        marker: String,
        is_truncated: bool,
        append: bool,
    },
    /// The listing request failed. Nothing is loaded but the request no
    /// longer counts as in flight.
    ListFailed {
        request: u64,
    },
    SetList {
        objects: Vec<ObjectEntry>,
        marker: String,
        is_truncated: bool,
    },
    RemoveObject {
        name: String,
    },
    SetSortBy {
        sort_by: SortBy,
    },
    SetSortOrder {
        ascending: bool,
    },
    SetCurrentPrefix {
        prefix: String,
    },
    /// A presign request was issued; replies from older requests are dropped.
    ShareRequested {
        request: u64,
    },
    SetShareObject {
        request: u64,
        show: bool,
        object: String,
        url: String,
    },

    // ===== Uploads =====
    AddUpload {
        slug: Slug,
        name: String,
        source: PathBuf,
        size: u64,
    },
    UpdateProgress {
        slug: Slug,
        loaded: u64,
    },
    StopUpload {
        slug: Slug,
    },
    ShowAbortModal,
    HideAbortModal,

    // ===== Alerts =====
    SetAlert {
        id: u64,
        kind: AlertKind,
        message: String,
    },
    /// Clears the alert with `id`, or whatever alert is showing when `None`.
    ClearAlert {
        id: Option<u64>,
    },

    // ===== Location =====
    ReplaceRoute {
        route: String,
    },
    Navigate {
        download: Download,
    },
    NavigationHandled,
}
