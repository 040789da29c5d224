//! Query evaluation over the in-memory catalog.
//!
//! [`Filters`] describe what a caller asked for; they expand into
//! [`Predicate`]s that are AND-composed by [`GameQuery`].

pub mod filters;
pub mod games;

pub use filters::{Filters, Predicate};
pub use games::GameQuery;
