//! Game queries over an in-memory catalog slice.
//!
//! Every method is a stable, non-destructive filter: results keep the
//! order of the input and the input itself is never touched.

use crate::models::{GameRecord, Platform};

use super::filters::{Filters, Predicate};

// ---------------------------------------------------------------------------
// GameQuery
// ---------------------------------------------------------------------------

/// Query interface for games borrowed from a catalog snapshot.
pub struct GameQuery<'a> {
    games: &'a [GameRecord],
}

impl<'a> GameQuery<'a> {
    /// Create a new `GameQuery` over the given records.
    pub fn new(games: &'a [GameRecord]) -> Self {
        Self { games }
    }

    /// Return the records satisfying every predicate `filters` expands to.
    pub fn evaluate(&self, filters: &Filters) -> Vec<GameRecord> {
        self.matching(&filters.predicates())
    }

    /// Return the records satisfying all of `predicates`.
    pub fn matching(&self, predicates: &[Predicate]) -> Vec<GameRecord> {
        self.games
            .iter()
            .filter(|g| predicates.iter().all(|p| p.matches(g)))
            .cloned()
            .collect()
    }

    /// Count the records `filters` would select.
    pub fn count(&self, filters: &Filters) -> usize {
        let preds = filters.predicates();
        self.games
            .iter()
            .filter(|g| preds.iter().all(|p| p.matches(g)))
            .count()
    }

    /// Search by title substring (case-insensitive).
    pub fn by_name(&self, name: &str) -> Vec<GameRecord> {
        self.matching(&[Predicate::title(name)])
    }

    /// Search by genre substring (case-insensitive).
    pub fn by_genre(&self, genre: &str) -> Vec<GameRecord> {
        self.matching(&[Predicate::genre(genre)])
    }

    /// Restrict to a platform partition.
    pub fn by_platform(&self, platform: Platform) -> Vec<GameRecord> {
        self.matching(&[Predicate::platform(platform.filter_value())])
    }

    /// Look up records by identifier.
    pub fn by_id(&self, id: i64) -> Vec<GameRecord> {
        self.matching(&[Predicate::Id(id)])
    }

    /// Distinct genres in first-seen order.
    pub fn genres(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for g in self.games {
            if !g.genre.is_empty() && !seen.iter().any(|s| s.eq_ignore_ascii_case(&g.genre)) {
                seen.push(g.genre.clone());
            }
        }
        seen
    }
}
