pub mod game;

pub use game::*;

/// The full catalog, in upstream order.
pub type Catalog = Vec<GameRecord>;
