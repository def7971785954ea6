use crate::models::{AlertKind, Bucket, ObjectEntry, Slug, SortBy, UploadEntry};
use std::collections::BTreeMap;

/// The whole application state. Only `app::update` writes to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    pub buckets: BucketsState,
    pub objects: ObjectsState,
    pub uploads: UploadsState,
    pub alert: AlertState,
    pub location: Location,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BucketsState {
    pub list: Vec<Bucket>,
    pub current_bucket: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectsState {
    pub list: Vec<ObjectEntry>,
    /// Continuation token, only meaningful while `is_truncated` is set.
    pub marker: String,
    pub is_truncated: bool,
    pub sort_by: SortBy,
    /// `true` is ascending.
    pub sort_order: bool,
    pub current_prefix: String,
    pub share: ShareState,
    /// Newest listing request issued; older replies are stale.
    pub latest_request: u64,
    /// Listing request still waiting for a reply.
    pub in_flight: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShareState {
    pub show: bool,
    pub object: String,
    pub url: String,
    /// Newest presign request or hide; replies to older ones are dropped.
    pub latest_request: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadsState {
    pub files: BTreeMap<Slug, UploadEntry>,
    pub show_abort_modal: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertState {
    pub show: bool,
    pub kind: AlertKind,
    pub message: String,
    pub id: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    /// `/{bucket}/{prefix}` of the listing on screen.
    pub route: String,
    pub pending_download: Option<Download>,
}

/// A request to fetch `url` on behalf of `object`.
#[derive(Debug, Clone, PartialEq)]
pub struct Download {
    pub url: String,
    pub object: String,
}
