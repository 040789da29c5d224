//! Process-owned catalog snapshot.
//!
//! The catalog is never mutated in place. Readers clone an [`Arc`] to the
//! current list and evaluate against it; a refresh swaps in a new list
//! without disturbing evaluations already running on the old one.

use std::sync::{Arc, RwLock};

use crate::models::Catalog;

/// Lock-guarded holder for the current catalog.
#[derive(Debug, Default)]
pub struct CatalogStore {
    current: RwLock<Arc<Catalog>>,
}

impl CatalogStore {
    pub fn new(games: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(games)),
        }
    }

    /// Return an immutable handle to the current catalog.
    pub fn snapshot(&self) -> Arc<Catalog> {
        // A poisoned lock still holds a complete Arc; the swap below
        // cannot leave it half-written.
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Replace the current catalog, returning the previous one.
    pub fn replace(&self, games: Catalog) -> Arc<Catalog> {
        let next = Arc::new(games);
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::replace(&mut *guard, next)
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
