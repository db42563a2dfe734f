//! Canonical hand order.
//!
//! Tiles are ordered by sort key ascending. Keys closer than
//! [`SORT_KEY_EPSILON`] are treated as equal, and ties go to [`TileColor::Black`]
//! first. The comparison is a total order on any hand the engine produces,
//! and sorting uses a stable sort, so re-sorting a sorted hand is a no-op.
//!
//! [`TileColor::Black`]: super::TileColor::Black

use std::cmp::Ordering;

use super::tile::Tile;

/// Two sort keys within this distance are tied.
pub const SORT_KEY_EPSILON: f64 = 1e-3;

/// Compare two sort keys with the tolerance band applied.
///
/// Outside the band this is `f64::total_cmp`, so even a NaN key orders
/// consistently (after every finite key).
#[must_use]
pub fn compare_keys(a: f64, b: f64) -> Ordering {
    if (a - b).abs() < SORT_KEY_EPSILON {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}

/// Hand order between two tiles.
#[must_use]
pub fn compare_tiles(a: &Tile, b: &Tile) -> Ordering {
    compare_keys(a.sort_key(), b.sort_key()).then_with(|| a.color.cmp(&b.color))
}

/// Sort a hand into canonical order in place.
pub fn sort_hand(hand: &mut [Tile]) {
    hand.sort_by(compare_tiles);
}

/// Where `tile` goes in a canonical hand: before every tile it does not
/// strictly follow, so it lands ahead of any tiles it ties with.
#[must_use]
pub fn insertion_index(hand: &[Tile], tile: &Tile) -> usize {
    hand.partition_point(|t| compare_tiles(t, tile) == Ordering::Less)
}

/// Check whether a hand is already in canonical order.
#[must_use]
pub fn is_canonical(hand: &[Tile]) -> bool {
    hand.windows(2)
        .all(|pair| compare_tiles(&pair[0], &pair[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::{TileColor, TileId};

    fn ids(hand: &[Tile]) -> Vec<u16> {
        hand.iter().map(|t| t.id.raw()).collect()
    }

    #[test]
    fn test_sorts_by_key() {
        let mut hand = vec![
            Tile::number(TileId::new(0), TileColor::Black, 9),
            Tile::number(TileId::new(1), TileColor::White, 2),
            Tile::number(TileId::new(2), TileColor::Black, 5),
        ];

        sort_hand(&mut hand);

        assert_eq!(ids(&hand), vec![1, 2, 0]);
        assert!(is_canonical(&hand));
    }

    #[test]
    fn test_black_before_white_on_tie() {
        let mut hand = vec![
            Tile::number(TileId::new(0), TileColor::White, 4),
            Tile::number(TileId::new(1), TileColor::Black, 4),
        ];

        sort_hand(&mut hand);

        assert_eq!(hand[0].color, TileColor::Black);
        assert_eq!(hand[1].color, TileColor::White);
    }

    #[test]
    fn test_epsilon_band_ties() {
        let mut hand = vec![
            Tile::wildcard(TileId::new(0), TileColor::White, 3.0),
            Tile::wildcard(TileId::new(1), TileColor::Black, 3.0 + SORT_KEY_EPSILON / 2.0),
        ];

        sort_hand(&mut hand);

        // Keys tie within epsilon, so color decides.
        assert_eq!(ids(&hand), vec![1, 0]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut hand = vec![
            Tile::number(TileId::new(0), TileColor::White, 1),
            Tile::wildcard(TileId::new(1), TileColor::Black, 12.0),
            Tile::number(TileId::new(2), TileColor::Black, 1),
            Tile::number(TileId::new(3), TileColor::Black, 0),
        ];

        sort_hand(&mut hand);
        let once = ids(&hand);
        sort_hand(&mut hand);

        assert_eq!(ids(&hand), once);
        assert_eq!(once, vec![3, 2, 0, 1]);
    }

    #[test]
    fn test_insertion_index_goes_ahead_of_ties() {
        let hand = vec![
            Tile::number(TileId::new(0), TileColor::Black, 5),
            Tile::number(TileId::new(1), TileColor::White, 5),
        ];

        let white = Tile::wildcard(TileId::new(2), TileColor::White, 5.0);
        assert_eq!(insertion_index(&hand, &white), 1);

        let black = Tile::wildcard(TileId::new(3), TileColor::Black, 5.0);
        assert_eq!(insertion_index(&hand, &black), 0);

        let high = Tile::number(TileId::new(4), TileColor::Black, 9);
        assert_eq!(insertion_index(&hand, &high), 2);
    }

    #[test]
    fn test_nan_key_sorts_last() {
        let mut hand = vec![
            Tile::wildcard(TileId::new(0), TileColor::Black, f64::NAN.abs()),
            Tile::number(TileId::new(1), TileColor::White, 3),
            Tile::wildcard(TileId::new(2), TileColor::White, f64::INFINITY),
            Tile::number(TileId::new(3), TileColor::Black, 1),
        ];

        sort_hand(&mut hand);

        assert_eq!(ids(&hand), vec![3, 1, 2, 0]);
        assert!(is_canonical(&hand));
    }

    #[test]
    fn test_empty_and_single_are_canonical() {
        assert!(is_canonical(&[]));
        assert!(is_canonical(&[Tile::number(TileId::new(0), TileColor::White, 3)]));
    }
}
