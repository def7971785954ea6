//! Action creators. Each one either dispatches messages straight away or
//! spawns a task against the web client that reports back through the
//! store's dispatcher.

pub mod alert;
pub mod buckets;
pub mod download;
pub mod objects;
pub mod run;
pub mod uploads;

pub use buckets::{fetch_buckets, select_bucket};
pub use objects::{
    delete_object, download_object, fetch_objects, hide_share_object, select_prefix,
    share_expiry, share_object, sort_objects,
};
pub use run::run_app;
pub use uploads::{abort_upload, confirm_abort, upload_file, UploadRegistry};
