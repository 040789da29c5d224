//! HTTP front-end: routes, rendering and server lifecycle.

pub mod error;
pub mod render;
pub mod routes;
pub mod session;
pub mod state;

use std::path::Path;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::async_client::AsyncGameCatalog;
use crate::config::{ServerConfig, STATIC_PREFIX};
use crate::error::Result;

pub use error::AppError;
pub use render::{PageView, Renderer};
pub use session::GenreSelection;
pub use state::AppState;

/// Build the application router over `state`, serving static assets from
/// `static_dir`.
pub fn router(state: Arc<AppState>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(routes::index).post(routes::search))
        .route("/main", post(routes::search))
        .route("/jeuxpc", post(routes::search_pc))
        .route("/jeuxweb", post(routes::search_web))
        .nest_service(STATIC_PREFIX, ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fetch the catalog, load the template and serve until shutdown.
///
/// A fetch or template failure here is returned before the listener is
/// bound.
pub async fn serve(config: ServerConfig) -> Result<()> {
    info!("Fetching catalog from {}...", config.api_url);
    let catalog = AsyncGameCatalog::builder()
        .api_url(config.api_url.clone())
        .timeout(config.timeout)
        .build()
        .await?;

    let renderer = Renderer::from_path(&config.template_path)?;

    let state = Arc::new(AppState {
        catalog,
        renderer,
        sticky_genre: config.sticky_genre,
    });
    let app = router(state, &config.static_dir);

    let address = config.listen_addr();
    let listener = TcpListener::bind(&address).await?;
    info!("Listening on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
