//! Filter parameters and the record predicates they expand to.

use crate::config::ALL_GENRES;
use crate::models::{GameRecord, Platform};

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Optional constraints for a catalog evaluation.
///
/// Empty strings count as absent, since HTML forms always submit every
/// field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub name: Option<String>,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub id: Option<i64>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn on(self, platform: Platform) -> Self {
        self.platform(platform.filter_value())
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// True when the genre is exactly the `"all"` sentinel.
    pub fn is_all_genres(&self) -> bool {
        self.genre.as_deref() == Some(ALL_GENRES)
    }

    /// Expand into the predicates a record must all satisfy.
    ///
    /// Precedence for the selection stage: the `"all"` genre admits
    /// everything, then `name` (optionally narrowed by genre), then `id`,
    /// then genre alone. The platform partition is appended after the
    /// selection stage.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut preds = Vec::new();
        let genre = non_empty(self.genre.as_deref());

        if !self.is_all_genres() {
            if let Some(name) = non_empty(self.name.as_deref()) {
                preds.push(Predicate::title(name));
                if let Some(g) = genre {
                    preds.push(Predicate::genre(g));
                }
            } else if let Some(id) = self.id {
                preds.push(Predicate::Id(id));
            } else if let Some(g) = genre {
                preds.push(Predicate::genre(g));
            }
        }

        if let Some(p) = non_empty(self.platform.as_deref()) {
            preds.push(Predicate::platform(p));
        }
        preds
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Predicate
// ---------------------------------------------------------------------------

/// A single test over a [`GameRecord`].
///
/// Text variants hold their needle already lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    TitleContains(String),
    GenreContains(String),
    PlatformContains(String),
    Id(i64),
}

impl Predicate {
    pub fn title(needle: &str) -> Self {
        Self::TitleContains(needle.to_lowercase())
    }

    pub fn genre(needle: &str) -> Self {
        Self::GenreContains(needle.to_lowercase())
    }

    pub fn platform(needle: &str) -> Self {
        Self::PlatformContains(needle.to_lowercase())
    }

    pub fn matches(&self, game: &GameRecord) -> bool {
        match self {
            Self::TitleContains(n) => contains_lower(&game.title, n),
            Self::GenreContains(n) => contains_lower(&game.genre, n),
            Self::PlatformContains(n) => contains_lower(&game.platform, n),
            Self::Id(id) => game.id == *id,
        }
    }
}

fn contains_lower(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
