mod dialogs;
mod draw;
mod helpers;
mod panels;
mod widgets;

pub use dialogs::{AbortDialogProps, AlertProps, ShareDialogProps};
pub use draw::draw;
pub use helpers::{centered_rect, format_date, format_size, truncate_string};
pub use panels::{BucketRowProps, ObjectRowProps};
pub use widgets::UploadRowProps;
