//! Elimination and victory evaluation.
//!
//! Pure functions over the seats. No hidden state: the same players always
//! give the same answer.

use crate::core::player::{Player, PlayerId};

/// The winner, if exactly one player is not eliminated.
#[must_use]
pub fn winner<'a>(players: impl IntoIterator<Item = &'a Player>) -> Option<PlayerId> {
    let mut live = players.into_iter().filter(|p| !p.is_eliminated());
    let first = live.next()?;
    match live.next() {
        None => Some(first.id),
        Some(_) => None,
    }
}

/// Number of players still in the match.
#[must_use]
pub fn live_count<'a>(players: impl IntoIterator<Item = &'a Player>) -> usize {
    players.into_iter().filter(|p| !p.is_eliminated()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::{Tile, TileColor, TileId};

    fn seat(id: u8, revealed: bool) -> Player {
        let mut tile = Tile::number(TileId::new(u16::from(id)), TileColor::Black, id);
        if revealed {
            tile = tile.revealed();
        }
        Player::new(PlayerId::new(id), format!("P{id}"), false).with_hand([tile])
    }

    #[test]
    fn test_no_winner_with_two_live() {
        let players = [seat(0, false), seat(1, false), seat(2, true)];
        assert_eq!(winner(&players), None);
        assert_eq!(live_count(&players), 2);
    }

    #[test]
    fn test_last_standing_wins() {
        let players = [seat(0, true), seat(1, false), seat(2, true)];
        assert_eq!(winner(&players), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_nobody_left() {
        let players = [seat(0, true), seat(1, true)];
        assert_eq!(winner(&players), None);
        assert_eq!(live_count(&players), 0);
    }
}
