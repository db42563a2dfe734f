//! Tiles, the tile supply, and canonical hand ordering.

pub mod tile;
pub mod factory;
pub mod ordering;

pub use tile::{Tile, TileColor, TileId, TileValue};
pub use factory::{build_tile_set, wildcard_start_key};
pub use ordering::{compare_tiles, insertion_index, is_canonical, sort_hand, SORT_KEY_EPSILON};
