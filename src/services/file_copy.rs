use crate::error::{FilterCopyError, Result};
use crate::models::CopyResult;
use crate::utils::copy_file_preserving_times;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Copy every matched file into `destination_folder`, flattening the tree.
///
/// The destination folder (and missing parents) is created if needed.
/// Files are written under their base name only, so same-named files from
/// different subdirectories overwrite each other and the last one wins.
/// A failed copy, including a match that would be copied onto itself, is
/// logged and counted in `skipped_count`; it never stops the batch.
pub fn copy_all(matches: &[PathBuf], destination_folder: &Path) -> Result<CopyResult> {
    fs::create_dir_all(destination_folder).map_err(|source| {
        FilterCopyError::CreateDestination {
            path: destination_folder.to_path_buf(),
            source,
        }
    })?;

    let mut result = CopyResult::empty(destination_folder.to_path_buf());

    for source in matches {
        let Some(file_name) = source.file_name() else {
            warn!("Skipping {:?}: no file name", source);
            result.skipped_count += 1;
            continue;
        };
        let dest_path = destination_folder.join(file_name);

        match copy_file_preserving_times(source, &dest_path) {
            Ok(()) => {
                debug!("Copied {:?} -> {:?}", source, dest_path);
                result.copied_paths.push(dest_path);
            }
            Err(e) => {
                warn!("Skipped {:?}: {:#}", source, e);
                result.skipped_count += 1;
            }
        }
    }

    info!(
        "Copy completed. Copied: {}, Skipped: {}, Destination: {:?}",
        result.copied_count(),
        result.skipped_count,
        result.destination_folder
    );

    Ok(result)
}
