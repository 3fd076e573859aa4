pub mod file_operations;
pub mod time;

pub use file_operations::{
    copy_file_preserving_times, extract_extension, file_time, matches_extensions,
    normalize_extensions,
};
pub use time::parse_timestamp;
