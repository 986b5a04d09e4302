//! Local HTTP server for the web interface.
//!
//! Serves the project tree statically (the web assets load `web/monkey.svg`
//! and friends by relative path) plus a small JSON API:
//! - `/health` - liveness probe
//! - `/api/monkey` - current monkey DNA with rarity summary
//!
//! Every response carries permissive CORS for GET and `no-store` caching so
//! a freshly evolved monkey is never hidden behind a stale browser cache.

use crate::genetics::MonkeyDna;
use crate::models::ForkMonkeyConfig;
use crate::Result;
use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

const CACHE_CONTROL: &str = "no-store, no-cache, must-revalidate";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Project root all static paths resolve against
    pub project_root: Arc<PathBuf>,
}

/// Monkey summary returned by `/api/monkey`
#[derive(Debug, Serialize)]
pub struct MonkeyResponse {
    pub dna: MonkeyDna,
    pub rarity_score: f64,
    pub rarity_label: String,
}

/// Bind and run the server until interrupted
pub async fn start(project_root: PathBuf, port: u16, open_browser: bool) -> Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let state = AppState {
        project_root: Arc::new(project_root),
    };

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", addr, e))?;

    let url = format!("http://localhost:{}/web/index.html", port);
    println!("✓ Server listening on http://{}", addr);
    println!("  Web interface: {}", url);

    if open_browser {
        if let Err(e) = open::that(&url) {
            eprintln!("Failed to open browser: {}. Please open {} manually.", e, url);
        }
    }

    axum::serve(listener, app).await?;
    Ok(())
}

/// Routes, CORS, and request tracing over the shared state
fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/monkey", get(api_monkey))
        .fallback(serve_static)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Response {
    with_no_store((StatusCode::OK, "OK").into_response())
}

/// Current monkey DNA plus rarity summary
async fn api_monkey(State(state): State<AppState>) -> Response {
    let monkey_path = ForkMonkeyConfig::monkey_path(&state.project_root);
    let response = match MonkeyDna::load(&monkey_path) {
        Ok(dna) => {
            let rarity_score = dna.rarity_score();
            let rarity_label = dna.badge().1.to_string();
            Json(MonkeyResponse {
                dna,
                rarity_score,
                rarity_label,
            })
            .into_response()
        }
        Err(e) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    };
    with_no_store(response)
}

/// Static file fallback rooted at the project directory
async fn serve_static(State(state): State<AppState>, uri: Uri) -> Response {
    let Some(path) = resolve_path(&state.project_root, uri.path()) else {
        return with_no_store(
            (StatusCode::BAD_REQUEST, "Invalid path").into_response(),
        );
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let mime = content_type(&path);
            with_no_store(
                ([(header::CONTENT_TYPE, mime)], bytes).into_response(),
            )
        }
        Err(_) => with_no_store((StatusCode::NOT_FOUND, "Not found").into_response()),
    }
}

/// Map a request path onto the project root.
///
/// Rejects parent-directory components; directory requests resolve to their
/// `index.html`.
fn resolve_path(root: &Path, request_path: &str) -> Option<PathBuf> {
    let trimmed = request_path.trim_start_matches('/');

    let mut path = root.to_path_buf();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }

    if path.is_dir() {
        path.push("index.html");
    }

    Some(path)
}

/// Content type from the file extension
fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

fn with_no_store(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(CACHE_CONTROL),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetics::GeneticsEngine;
    use axum::body::Body;
    use axum::http::Request;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn test_router(root: &Path) -> Router {
        router(AppState {
            project_root: Arc::new(root.to_path_buf()),
        })
    }

    #[tokio::test]
    async fn test_cross_origin_get_is_allowed() {
        let temp = TempDir::new().unwrap();
        let app = test_router(temp.path());

        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            CACHE_CONTROL
        );
    }

    #[tokio::test]
    async fn test_api_monkey_returns_dna_summary() {
        let temp = TempDir::new().unwrap();
        let dna = GeneticsEngine::generate_seeded(42, 3);
        dna.save(&ForkMonkeyConfig::monkey_path(temp.path())).unwrap();
        let app = test_router(temp.path());

        let request = Request::builder()
            .uri("/api/monkey")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["dna"]["generation"], 3);
        assert_eq!(body["dna"]["dna_hash"], dna.dna_hash.as_str());
        assert!(body["rarity_score"].is_number());
        assert!(body["rarity_label"].is_string());
    }

    #[tokio::test]
    async fn test_api_monkey_missing_dna_is_not_found() {
        let temp = TempDir::new().unwrap();
        let app = test_router(temp.path());

        let request = Request::builder()
            .uri("/api/monkey")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let root = Path::new("/project");
        assert!(resolve_path(root, "/../etc/passwd").is_none());
        assert!(resolve_path(root, "/web/../../secret").is_none());
    }

    #[test]
    fn test_resolve_plain_file() {
        let root = Path::new("/project");
        assert_eq!(
            resolve_path(root, "/web/monkey.svg"),
            Some(PathBuf::from("/project/web/monkey.svg"))
        );
    }

    #[test]
    fn test_resolve_directory_gets_index() {
        let temp = TempDir::new().unwrap();
        let web = temp.path().join("web");
        std::fs::create_dir_all(&web).unwrap();
        std::fs::write(web.join("index.html"), "<html></html>").unwrap();

        let resolved = resolve_path(temp.path(), "/web").unwrap();
        assert!(resolved.ends_with("web/index.html"));
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type(Path::new("a.svg")), "image/svg+xml");
        assert_eq!(content_type(Path::new("a.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("a.bin")), "application/octet-stream");
        assert_eq!(content_type(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn test_no_store_header_applied() {
        let response = with_no_store((StatusCode::OK, "x").into_response());
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            CACHE_CONTROL
        );
    }
}
