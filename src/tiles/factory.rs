//! Builds the fixed tile supply for a match.

use super::tile::{Tile, TileColor, TileId};

/// Build the unshuffled tile set.
///
/// One tile per color for every value in `0..value_count`, then one wildcard
/// per color when `include_wildcards` is set. Wildcards start with a sort key
/// past every numeric value so they default to the end of a hand. IDs are
/// assigned in production order starting at 0.
///
/// Shuffling is the caller's job.
#[must_use]
pub fn build_tile_set(value_count: u8, include_wildcards: bool) -> Vec<Tile> {
    let wildcard_count = if include_wildcards { TileColor::ALL.len() } else { 0 };
    let mut tiles = Vec::with_capacity(value_count as usize * TileColor::ALL.len() + wildcard_count);
    let mut next_id = 0u16;

    for value in 0..value_count {
        for color in TileColor::ALL {
            tiles.push(Tile::number(TileId::new(next_id), color, value));
            next_id += 1;
        }
    }

    if include_wildcards {
        for color in TileColor::ALL {
            tiles.push(Tile::wildcard(TileId::new(next_id), color, wildcard_start_key(value_count)));
            next_id += 1;
        }
    }

    tiles
}

/// Starting sort key for wildcards: strictly above the largest numeric face.
#[must_use]
pub fn wildcard_start_key(value_count: u8) -> f64 {
    f64::from(value_count)
}
