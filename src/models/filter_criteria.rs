use chrono::NaiveDateTime;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Validated, immutable filter settings for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub source_folder: PathBuf,
    pub from_time: NaiveDateTime,
    pub to_time: NaiveDateTime,
    /// Lowercase extensions without a leading dot
    pub extensions: BTreeSet<String>,
    pub use_creation_time: bool,
}

impl FilterCriteria {
    pub fn new(
        source_folder: PathBuf,
        from_time: NaiveDateTime,
        to_time: NaiveDateTime,
        extensions: BTreeSet<String>,
        use_creation_time: bool,
    ) -> Self {
        Self {
            source_folder,
            from_time,
            to_time,
            extensions,
            use_creation_time,
        }
    }

    /// Inclusive on both ends; an inverted range contains nothing
    pub fn contains_time(&self, file_time: NaiveDateTime) -> bool {
        self.from_time <= file_time && file_time <= self.to_time
    }
}

/// A fully validated request: what to look for and where to put it
#[derive(Debug, Clone)]
pub struct CopyPlan {
    pub criteria: FilterCriteria,
    pub destination_folder: PathBuf,
}
