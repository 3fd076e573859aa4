use crate::error::Result;
use crate::models::{CopyResult, FilterRequest};
use crate::services::{copy_all, filter, validate};
use tracing::info;

/// Run one request end to end: validate, filter, copy, report.
///
/// Validation completes before the destination folder is created, so a
/// rejected request leaves the filesystem untouched.
pub fn filter_and_copy(request: &FilterRequest) -> Result<CopyResult> {
    let plan = validate(request)?;

    info!(
        "Filtering {:?} for {:?} between {} and {} ({} time)",
        plan.criteria.source_folder,
        plan.criteria.extensions,
        plan.criteria.from_time,
        plan.criteria.to_time,
        if plan.criteria.use_creation_time { "creation" } else { "modification" }
    );

    let matches = filter(&plan.criteria)?;
    copy_all(&matches, &plan.destination_folder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterCopyError;
    use chrono::{Local, NaiveDate, TimeZone};
    use filetime::FileTime;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_at_ten(path: &Path) {
        write_at_ten_with(path, &path.to_string_lossy());
    }

    fn write_at_ten_with(path: &Path, contents: &str) {
        fs::write(path, contents).unwrap();
        let naive = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let stamp = Local.from_local_datetime(&naive).unwrap().timestamp();
        filetime::set_file_mtime(path, FileTime::from_unix_time(stamp, 0)).unwrap();
    }

    fn request(source: &Path, dest_base: &Path) -> FilterRequest {
        FilterRequest {
            source_folder: source.to_string_lossy().to_string(),
            from_timestamp: "2024-01-01 00:00:00".to_string(),
            to_timestamp: "2024-01-01 23:59:59".to_string(),
            file_formats: "txt".to_string(),
            use_created_time: false,
            dest_folder_base: dest_base.to_string_lossy().to_string(),
            dest_folder_name: "picked".to_string(),
        }
    }

    #[test]
    fn test_copies_only_matching_files() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        write_at_ten(&src.path().join("a.txt"));
        write_at_ten(&src.path().join("b.log"));

        let result = filter_and_copy(&request(src.path(), dst.path())).unwrap();

        let dest = dst.path().join("picked");
        assert_eq!(result.destination_folder, dest);
        assert_eq!(result.copied_paths, vec![dest.join("a.txt")]);
        assert_eq!(result.skipped_count, 0);
        assert!(!dest.join("b.log").exists());
    }

    #[test]
    fn test_rejected_request_creates_nothing() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        let mut req = request(src.path(), dst.path());
        req.file_formats = " , ".to_string();

        let err = filter_and_copy(&req).unwrap_err();
        assert!(matches!(err, FilterCopyError::EmptyFormatList));
        assert!(!dst.path().join("picked").exists());
    }

    #[test]
    fn test_repeated_run_into_nested_destination_keeps_earlier_copy() {
        let src = TempDir::new().unwrap();
        write_at_ten_with(&src.path().join("a.txt"), "precious");
        let req = request(src.path(), src.path());
        let dest = src.path().join("picked");

        let first = filter_and_copy(&req).unwrap();
        assert_eq!(first.copied_paths, vec![dest.join("a.txt")]);

        let second = filter_and_copy(&req).unwrap();
        assert_eq!(second.copied_paths, vec![dest.join("a.txt")]);
        assert_eq!(second.skipped_count, 1);
        assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "precious");
        assert_eq!(fs::read_to_string(src.path().join("a.txt")).unwrap(), "precious");
    }

    #[test]
    fn test_destination_equal_to_source_is_skipped() {
        let src = TempDir::new().unwrap();
        write_at_ten_with(&src.path().join("a.txt"), "precious");
        let mut req = request(src.path(), src.path());
        req.dest_folder_name = String::new();

        let result = filter_and_copy(&req).unwrap();

        assert!(result.copied_paths.is_empty());
        assert_eq!(result.skipped_count, 1);
        assert_eq!(fs::read_to_string(src.path().join("a.txt")).unwrap(), "precious");
    }
}
