//! Shared test fixtures for the game catalog integration tests.
//!
//! Provides small sample catalogs built from upstream-shaped JSON, a router
//! wired to a seeded catalog, and an in-process mock of the upstream API.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use game_catalog::web::{self, AppState, Renderer};
use game_catalog::{AsyncGameCatalog, GameRecord};
use tokio::net::TcpListener;

/// Template that prints just enough to assert on. The action path is
/// marked safe so it is not HTML-escaped.
pub const PLAIN_TEMPLATE: &str = "{% for g in games %}[{{ g.title }}]{% endfor %}\
|count={{ count }}|genre={{ selected_genre or \"\" }}|action={{ action|safe }}";

fn game(id: i64, title: &str, genre: &str, platform: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "thumbnail": format!("https://www.freetogame.com/g/{id}/thumbnail.jpg"),
        "short_description": format!("{title} short description"),
        "game_url": format!("https://www.freetogame.com/open/{id}"),
        "genre": genre,
        "platform": platform,
        "publisher": "Sample Publisher",
        "developer": "Sample Studio",
        "release_date": "2020-01-01",
        "freetogame_profile_url": format!("https://www.freetogame.com/{id}")
    })
}

/// Upstream-shaped JSON for [`sample_catalog`].
pub fn sample_json() -> serde_json::Value {
    serde_json::Value::Array(vec![
        game(1, "Smite", "MOBA", "PC (Windows)"),
        game(2, "War Thunder", "Shooter", "PC (Windows), Web Browser"),
        game(3, "Warframe", "Shooter", "PC (Windows)"),
        game(4, "Forge of Empires", "Strategy", "Web Browser"),
        game(5, "Tribal Wars", "Strategy", "Web Browser"),
        game(6, "Genshin Impact", "Action RPG", "PC (Windows)"),
    ])
}

/// Six games across four genres and both platforms.
pub fn sample_catalog() -> Vec<GameRecord> {
    serde_json::from_value(sample_json()).unwrap()
}

/// The two-record catalog used by the documented query scenarios.
pub fn scenario_catalog() -> Vec<GameRecord> {
    serde_json::from_value(serde_json::json!([
        { "id": 1, "title": "Smite", "genre": "MOBA", "platform": "PC" },
        { "id": 2, "title": "War Thunder", "genre": "Shooter", "platform": "PC,Web" }
    ]))
    .unwrap()
}

pub fn titles(games: &[GameRecord]) -> Vec<&str> {
    games.iter().map(|g| g.title.as_str()).collect()
}

/// Router over a seeded sample catalog rendering [`PLAIN_TEMPLATE`].
pub async fn test_app(sticky_genre: bool) -> Router {
    test_app_with(PLAIN_TEMPLATE, sticky_genre).await
}

pub async fn test_app_with(template: &str, sticky_genre: bool) -> Router {
    let catalog = AsyncGameCatalog::builder()
        .seed(sample_catalog())
        .build()
        .await
        .unwrap();
    let state = Arc::new(AppState {
        catalog,
        renderer: Renderer::from_source(template).unwrap(),
        sticky_genre,
    });
    web::router(state, "css")
}

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn spawn_upstream(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}
