use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDateTime};
use filetime::{set_file_times, FileTime};
use same_file::is_same_file;
use std::collections::BTreeSet;
use std::fs::{self, Metadata};
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Normalize a comma-separated format list into a set of bare extensions.
///
/// Entries are trimmed, lowercased and stripped of leading dots; blank
/// entries are dropped. `"TXT"`, `".txt"` and `" txt "` all yield `txt`.
pub fn normalize_extensions(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|fmt| !fmt.is_empty())
        .map(|fmt| fmt.to_lowercase().trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// Extension of a file name: everything after the last `.`, lowercased.
///
/// A name without any dot is returned whole, so `README` yields `readme`.
pub fn extract_extension(file_name: &str) -> String {
    file_name
        .rsplit('.')
        .next()
        .unwrap_or(file_name)
        .to_lowercase()
}

/// Check if the file name's extension is one of the given extensions
pub fn matches_extensions(path: &Path, extensions: &BTreeSet<String>) -> bool {
    path.file_name()
        .map(|name| extract_extension(&name.to_string_lossy()))
        .map(|ext| extensions.contains(&ext))
        .unwrap_or(false)
}

/// Read the timestamp used for range filtering, as local wall-clock time.
///
/// With `use_creation_time` this is the inode change time on Unix and the
/// birth time elsewhere; otherwise the last modification time.
pub fn file_time(metadata: &Metadata, use_creation_time: bool) -> io::Result<NaiveDateTime> {
    if use_creation_time {
        creation_time(metadata)
    } else {
        metadata.modified().map(system_time_to_local)
    }
}

#[cfg(unix)]
fn creation_time(metadata: &Metadata) -> io::Result<NaiveDateTime> {
    use std::os::unix::fs::MetadataExt;

    DateTime::from_timestamp(metadata.ctime(), metadata.ctime_nsec() as u32)
        .map(|utc| utc.with_timezone(&Local).naive_local())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "ctime out of range"))
}

#[cfg(not(unix))]
fn creation_time(metadata: &Metadata) -> io::Result<NaiveDateTime> {
    metadata.created().map(system_time_to_local)
}

/// Convert system time to naive local DateTime
pub fn system_time_to_local(time: SystemTime) -> NaiveDateTime {
    DateTime::<Local>::from(time).naive_local()
}

/// Copy a single file, carrying over its access and modification times.
///
/// An existing destination file is overwritten, unless it is the source file
/// itself, which is an error. Failing to restore the timestamps is logged
/// and does not fail the copy.
pub fn copy_file_preserving_times(source: &Path, destination: &Path) -> Result<()> {
    let src_meta = fs::metadata(source)
        .with_context(|| format!("Failed to read metadata for: {:?}", source))?;

    // fs::copy truncates the destination before reading the source
    if is_same_file(source, destination).unwrap_or(false) {
        anyhow::bail!("{:?} and {:?} are the same file", source, destination);
    }

    fs::copy(source, destination)
        .with_context(|| format!("Failed to copy file from {:?} to {:?}", source, destination))?;

    let mtime = FileTime::from_last_modification_time(&src_meta);
    let atime = FileTime::from_last_access_time(&src_meta);
    if let Err(e) = set_file_times(destination, atime, mtime) {
        tracing::debug!("Could not preserve timestamps on {:?}: {}", destination, e);
    }

    Ok(())
}
