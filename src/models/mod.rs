pub mod alert;
pub mod bucket;
pub mod config;
pub mod object;
pub mod upload;

pub use alert::AlertKind;
pub use bucket::Bucket;
pub use object::{ObjectEntry, SortBy};
pub use upload::{Slug, UploadEntry};
