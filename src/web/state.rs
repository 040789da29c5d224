use crate::async_client::AsyncGameCatalog;

use super::render::Renderer;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Catalog source and the current in-memory snapshot.
    pub catalog: AsyncGameCatalog,

    /// Compiled page template.
    pub renderer: Renderer,

    /// Reuse the genre carried by the previous page when a submission
    /// leaves the genre empty.
    pub sticky_genre: bool,
}
