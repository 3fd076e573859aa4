pub mod copy_result;
pub mod filter_criteria;
pub mod filter_request;

pub use copy_result::{CopyResponse, CopyResult};
pub use filter_criteria::{CopyPlan, FilterCriteria};
pub use filter_request::FilterRequest;
