// validators crate

mod path;

pub use path::{format_path, format_reason, group_pairs};
