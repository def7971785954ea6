pub mod dropzone;
pub mod key_to_command;

pub use dropzone::{on_drop, parse_dropped_paths};
pub use key_to_command::key_to_command;
