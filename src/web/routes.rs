use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::response::Html;
use serde::Deserialize;
use tracing::debug;

use crate::models::{GameRecord, Platform};
use crate::queries::{Filters, GameQuery};

use super::error::AppError;
use super::render::PageView;
use super::session::GenreSelection;
use super::state::AppState;

/// Fields submitted by the search form. Browsers send every field, so most
/// arrive as empty strings rather than missing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub name: Option<String>,
    pub genre: Option<String>,
    pub id: Option<String>,
    pub selected_genre: Option<String>,
}

impl SearchForm {
    /// Turn the raw form into filters, resolving the genre for this request.
    pub fn into_filters(
        self,
        sticky_genre: bool,
    ) -> Result<(Filters, GenreSelection), AppError> {
        let selection = GenreSelection::resolve(
            self.genre.as_deref(),
            self.selected_genre.as_deref(),
            sticky_genre,
        );

        let id = match trimmed(self.id.as_deref()) {
            Some(raw) => Some(
                raw.parse::<i64>()
                    .map_err(|_| AppError::bad_request(format!("Invalid game id: {raw}")))?,
            ),
            None => None,
        };

        let filters = Filters {
            name: trimmed(self.name.as_deref()).map(String::from),
            genre: selection.as_deref().map(String::from),
            platform: None,
            id,
        };
        Ok((filters, selection))
    }
}

fn trimmed(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}

/// GET /
///
/// Render the full, unfiltered catalog.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let games = state.catalog.snapshot();
    render(&state, &games, &games, &Filters::new(), None)
}

/// POST / and POST /main
///
/// Filter by name, genre or id.
pub async fn search(
    State(state): State<Arc<AppState>>,
    form: Result<Form<SearchForm>, FormRejection>,
) -> Result<Html<String>, AppError> {
    filtered(&state, form?.0, None)
}

/// POST /jeuxpc
///
/// Same as [`search`], restricted to PC games.
pub async fn search_pc(
    State(state): State<Arc<AppState>>,
    form: Result<Form<SearchForm>, FormRejection>,
) -> Result<Html<String>, AppError> {
    filtered(&state, form?.0, Some(Platform::Pc))
}

/// POST /jeuxweb
///
/// Same as [`search`], restricted to browser games.
pub async fn search_web(
    State(state): State<Arc<AppState>>,
    form: Result<Form<SearchForm>, FormRejection>,
) -> Result<Html<String>, AppError> {
    filtered(&state, form?.0, Some(Platform::Web))
}

fn filtered(
    state: &AppState,
    form: SearchForm,
    platform: Option<Platform>,
) -> Result<Html<String>, AppError> {
    let (mut filters, selection) = form.into_filters(state.sticky_genre)?;
    if let Some(p) = platform {
        filters = filters.on(p);
    }

    let games = state.catalog.snapshot();
    let result = GameQuery::new(&games).evaluate(&filters);
    debug!(?filters, matched = result.len(), "Evaluated query");

    render(state, &games, &result, &filters, selection.as_deref())
}

fn render(
    state: &AppState,
    catalog: &[GameRecord],
    games: &[GameRecord],
    filters: &Filters,
    selected_genre: Option<&str>,
) -> Result<Html<String>, AppError> {
    let genres = GameQuery::new(catalog).genres();
    let view = PageView {
        games,
        count: games.len(),
        genres: &genres,
        name: filters.name.as_deref(),
        selected_genre,
        platform: filters.platform.as_deref(),
        action: form_action(filters.platform.as_deref()),
    };
    Ok(Html(state.renderer.render(&view)?))
}

fn form_action(platform: Option<&str>) -> &'static str {
    match platform {
        Some(p) if p == Platform::Pc.filter_value() => "/jeuxpc",
        Some(p) if p == Platform::Web.filter_value() => "/jeuxweb",
        _ => "/main",
    }
}
