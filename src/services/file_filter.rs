use crate::error::{FilterCopyError, Result};
use crate::models::{CopyPlan, FilterCriteria, FilterRequest};
use crate::utils::{file_time, matches_extensions, normalize_extensions, parse_timestamp};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Validate raw request fields into a copy plan.
///
/// Checks run in order: both timestamps, the format list, the source folder,
/// then the destination base folder. Nothing touches the filesystem beyond
/// those existence checks.
pub fn validate(request: &FilterRequest) -> Result<CopyPlan> {
    let from_time = parse_timestamp(&request.from_timestamp)?;
    let to_time = parse_timestamp(&request.to_timestamp)?;

    let extensions = normalize_extensions(&request.file_formats);
    if extensions.is_empty() {
        return Err(FilterCopyError::EmptyFormatList);
    }

    let source_folder = PathBuf::from(&request.source_folder);
    if !source_folder.is_dir() {
        return Err(FilterCopyError::SourceNotFound {
            path: source_folder,
        });
    }

    let dest_base = Path::new(&request.dest_folder_base);
    if !dest_base.is_dir() {
        return Err(FilterCopyError::DestinationBaseNotFound {
            path: dest_base.to_path_buf(),
        });
    }

    Ok(CopyPlan {
        criteria: FilterCriteria::new(
            source_folder,
            from_time,
            to_time,
            extensions,
            request.use_created_time,
        ),
        destination_folder: request.destination_folder(),
    })
}

/// Recursively collect files under the source folder that match the criteria.
///
/// Entries are visited sorted by file name within each directory, so the
/// result is stable for a fixed tree. Unreadable directories are skipped;
/// a matching file whose metadata cannot be read fails the whole filter.
pub fn filter(criteria: &FilterCriteria) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(&criteria.source_folder)
        .follow_links(false)
        .sort_by_file_name();

    let mut matches = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {:?}: {}", criteria.source_folder, e);
                continue;
            }
        };

        if entry.file_type().is_dir() || !matches_extensions(entry.path(), &criteria.extensions) {
            continue;
        }

        let path = entry.path();
        let metadata = fs::metadata(path).map_err(|source| FilterCopyError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;
        if metadata.is_dir() {
            continue;
        }

        let time = file_time(&metadata, criteria.use_creation_time).map_err(|source| {
            FilterCopyError::Metadata {
                path: path.to_path_buf(),
                source,
            }
        })?;

        if criteria.contains_time(time) {
            debug!("Matched {:?} ({})", path, time);
            matches.push(path.to_path_buf());
        }
    }

    info!(
        "Found {} matching files in {:?}",
        matches.len(),
        criteria.source_folder
    );

    Ok(matches)
}
