//! Upstream fetch tests against an in-process mock of the FreeToGame API.

mod common;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::Router;
use common::{sample_json, spawn_upstream, titles};
use game_catalog::config::ServerConfig;
use game_catalog::{AsyncGameCatalog, CatalogError, Platform};
use tokio::net::TcpListener;

async fn games_by_platform(Query(params): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
    let all = sample_json();
    let wanted = match params.get("platform").map(String::as_str) {
        Some("pc") => "PC",
        Some("browser") => "Web",
        _ => return Json(all),
    };
    let filtered = all
        .as_array()
        .unwrap()
        .iter()
        .filter(|g| g["platform"].as_str().unwrap().contains(wanted))
        .cloned()
        .collect();
    Json(serde_json::Value::Array(filtered))
}

async fn upstream_url(app: Router) -> String {
    format!("{}/api/games", spawn_upstream(app).await)
}

/// An address nothing listens on.
async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/games")
}

// ---------------------------------------------------------------------------
// fetch
// ---------------------------------------------------------------------------

#[tokio::test(flavor = "multi_thread")]
async fn build_fetches_full_catalog_in_upstream_order() {
    let url = upstream_url(Router::new().route("/api/games", get(games_by_platform))).await;

    let catalog = AsyncGameCatalog::builder().api_url(url).build().await.unwrap();
    let games = catalog.snapshot();
    assert_eq!(games.len(), 6);
    assert_eq!(games[0].title, "Smite");
    assert_eq!(games[5].title, "Genshin Impact");
    assert_eq!(
        games[1].freetogame_profile_url.as_deref(),
        Some("https://www.freetogame.com/2")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_platform_sends_upstream_parameter() {
    let url = upstream_url(Router::new().route("/api/games", get(games_by_platform))).await;
    let catalog = AsyncGameCatalog::builder().api_url(url).build().await.unwrap();

    let web = catalog.fetch_platform(Platform::Web).await.unwrap();
    assert_eq!(titles(&web), vec!["War Thunder", "Forge of Empires", "Tribal Wars"]);

    let pc = catalog.fetch_platform(Platform::Pc).await.unwrap();
    assert_eq!(pc.len(), 4);
    // The held catalog is untouched.
    assert_eq!(catalog.snapshot().len(), 6);
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_payload_is_decode_error() {
    let app = Router::new().route(
        "/api/games",
        get(|| async { Json(serde_json::json!({ "status": 0, "status_message": "oops" })) }),
    );
    let url = upstream_url(app).await;

    let err = AsyncGameCatalog::builder().api_url(url).build().await.err().unwrap();
    assert!(matches!(err, CatalogError::Decode(_)), "got {err:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn error_status_is_source_unavailable() {
    let app = Router::new().route(
        "/api/games",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "down").into_response() }),
    );
    let url = upstream_url(app).await;

    let err = AsyncGameCatalog::builder().api_url(url).build().await.err().unwrap();
    assert!(matches!(err, CatalogError::SourceUnavailable(_)), "got {err:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_upstream_is_source_unavailable() {
    let err = AsyncGameCatalog::builder()
        .api_url(dead_url().await)
        .build()
        .await
        .err()
        .unwrap();
    assert!(matches!(err, CatalogError::SourceUnavailable(_)), "got {err:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn serve_aborts_when_startup_fetch_fails() {
    let config = ServerConfig {
        api_url: dead_url().await,
        ..ServerConfig::default()
    };
    let err = game_catalog::web::serve(config).await.err().unwrap();
    assert!(matches!(err, CatalogError::SourceUnavailable(_)), "got {err:?}");
}

// ---------------------------------------------------------------------------
// refresh
// ---------------------------------------------------------------------------

/// Serves the first `n` sample games on the first call, all of them on the
/// second, and fails afterwards.
async fn growing(State(calls): State<Arc<AtomicUsize>>) -> axum::response::Response {
    let all = sample_json();
    match calls.fetch_add(1, Ordering::SeqCst) {
        0 => Json(serde_json::Value::Array(all.as_array().unwrap()[..2].to_vec())).into_response(),
        1 => Json(all).into_response(),
        _ => (StatusCode::SERVICE_UNAVAILABLE, "maintenance").into_response(),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn refresh_swaps_catalog_and_keeps_it_on_failure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/api/games", get(growing))
        .with_state(calls.clone());
    let url = upstream_url(app).await;

    let catalog = AsyncGameCatalog::builder().api_url(url).build().await.unwrap();
    let before = catalog.snapshot();
    assert_eq!(before.len(), 2);

    assert_eq!(catalog.refresh().await.unwrap(), 6);
    assert_eq!(catalog.snapshot().len(), 6);
    // Snapshots taken earlier are unaffected by the swap.
    assert_eq!(before.len(), 2);

    let err = catalog.refresh().await.err().unwrap();
    assert!(matches!(err, CatalogError::SourceUnavailable(_)));
    assert_eq!(catalog.snapshot().len(), 6);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}
