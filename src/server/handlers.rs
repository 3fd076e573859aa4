use crate::models::{CopyResponse, FilterRequest};
use crate::server::{ApiError, ServerState};
use crate::services::filter_and_copy;
use axum::extract::rejection::FormRejection;
use axum::extract::{Path as UrlPath, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use std::path::{Component, Path, PathBuf};
use tracing::{error, info, warn};

/// Form page bundled into the binary, used when the static dir has none
pub const BUNDLED_INDEX: &str = include_str!("../../static/index.html");

/// GET / - the request form
pub async fn index_handler(State(state): State<ServerState>) -> Html<String> {
    let path = state.static_dir.join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Html(page),
        Err(e) => {
            warn!("Could not read {:?} ({}), serving bundled form", path, e);
            Html(BUNDLED_INDEX.to_string())
        }
    }
}

/// GET /static/{*path} - files from the static directory
pub async fn static_handler(
    State(state): State<ServerState>,
    UrlPath(requested): UrlPath<String>,
) -> Result<Response, ApiError> {
    let relative = sanitize_static_path(&requested).ok_or_else(ApiError::not_found)?;
    let path = state.static_dir.join(relative);

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| ApiError::not_found())?;

    Ok(([(header::CONTENT_TYPE, content_type_for(&path))], bytes).into_response())
}

/// POST /filter-and-copy - validate, filter, copy and report
pub async fn filter_and_copy_handler(
    form: Result<Form<FilterRequest>, FormRejection>,
) -> Result<Json<CopyResponse>, ApiError> {
    let Form(request) = form?;

    info!(
        "Filter-and-copy request: {} -> {:?}",
        request.source_folder,
        request.destination_folder()
    );

    let outcome = tokio::task::spawn_blocking(move || filter_and_copy(&request))
        .await
        .map_err(|e| {
            error!("Filter-and-copy task failed: {}", e);
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, format!("Task join error: {e}"))
        })?;

    match outcome {
        Ok(result) => Ok(Json(CopyResponse::from(result))),
        Err(e) => {
            warn!("Filter-and-copy rejected: {}", e);
            Err(e.into())
        }
    }
}

/// Accept only plain relative segments, so requests cannot escape the static dir
fn sanitize_static_path(requested: &str) -> Option<PathBuf> {
    let path = Path::new(requested);
    let mut clean = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(segment) => clean.push(segment),
            Component::CurDir => {}
            _ => return None,
        }
    }
    (!clean.as_os_str().is_empty()).then_some(clean)
}

fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" => "text/javascript; charset=utf-8",
        "json" => "application/json",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "ico" => "image/x-icon",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, NaiveDate, TimeZone};
    use filetime::FileTime;
    use std::fs;
    use tempfile::TempDir;

    fn request(source: &Path, dest_base: &Path) -> FilterRequest {
        FilterRequest {
            source_folder: source.to_string_lossy().to_string(),
            from_timestamp: "2024-01-01 00:00:00".to_string(),
            to_timestamp: "2024-01-01 23:59:59".to_string(),
            file_formats: "txt".to_string(),
            use_created_time: false,
            dest_folder_base: dest_base.to_string_lossy().to_string(),
            dest_folder_name: "out".to_string(),
        }
    }

    #[test]
    fn test_sanitize_static_path() {
        assert_eq!(sanitize_static_path("css/site.css"), Some(PathBuf::from("css/site.css")));
        assert_eq!(sanitize_static_path("./app.js"), Some(PathBuf::from("app.js")));
        assert_eq!(sanitize_static_path("../secret"), None);
        assert_eq!(sanitize_static_path("a/../../b"), None);
        assert_eq!(sanitize_static_path("/etc/passwd"), None);
        assert_eq!(sanitize_static_path(""), None);
    }

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for(Path::new("x.CSS")), "text/css; charset=utf-8");
        assert_eq!(content_type_for(Path::new("blob")), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_handler_success() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        let file = src.path().join("a.txt");
        fs::write(&file, "a").unwrap();
        let naive = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let stamp = Local.from_local_datetime(&naive).unwrap().timestamp();
        filetime::set_file_mtime(&file, FileTime::from_unix_time(stamp, 0)).unwrap();

        let Json(body) = filter_and_copy_handler(Ok(Form(request(src.path(), dst.path()))))
            .await
            .unwrap();

        assert_eq!(body.status, "success");
        assert_eq!(body.count, 1);
        assert_eq!(body.skipped_files, 0);
        assert!(body.copied_files[0].ends_with("a.txt"));
    }

    #[tokio::test]
    async fn test_handler_reports_validation_error() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        let mut req = request(src.path(), dst.path());
        req.from_timestamp = "2024/01/01".to_string();

        let err = filter_and_copy_handler(Ok(Form(req))).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.detail.contains("Invalid timestamp format"));
    }

    #[tokio::test]
    async fn test_index_falls_back_to_bundled_form() {
        let empty = TempDir::new().unwrap();
        let state = ServerState::new(empty.path().to_path_buf());

        let Html(page) = index_handler(State(state)).await;
        assert_eq!(page, BUNDLED_INDEX);
    }

    #[tokio::test]
    async fn test_index_prefers_static_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "<p>custom</p>").unwrap();
        let state = ServerState::new(dir.path().to_path_buf());

        let Html(page) = index_handler(State(state)).await;
        assert_eq!(page, "<p>custom</p>");
    }
}
