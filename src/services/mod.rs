pub mod file_copy;
pub mod file_filter;
pub mod filter_and_copy;

pub use file_copy::copy_all;
pub use file_filter::{filter, validate};
pub use filter_and_copy::filter_and_copy;
