//! Turn engine scenario tests.
//!
//! Small, fully specified tables on the toy domain (values 0..=3, no
//! wildcards) so every draw and guess outcome is known in advance.

use rust_tilecode::core::{LogEvent, MatchRules};
use rust_tilecode::{
    Command, GameState, Phase, Player, PlayerId, RuleViolation, SequenceRng, Tile, TileColor,
    TileId, TileValue, TurnEngine,
};

const A: PlayerId = PlayerId::new(0);
const B: PlayerId = PlayerId::new(1);
const C: PlayerId = PlayerId::new(2);

fn tile(id: u16, color: TileColor, value: u8) -> Tile {
    Tile::number(TileId::new(id), color, value)
}

fn toy_rules() -> MatchRules {
    MatchRules {
        value_count: 4,
        wildcards: false,
        turn_timer_secs: 30,
    }
}

fn engine() -> TurnEngine<SequenceRng> {
    TurnEngine::new(SequenceRng::default())
}

/// A holds B0 B1, B holds B2 B3, and A's first draw is W2.
fn toy_table() -> GameState {
    let a = Player::new(A, "A", false)
        .with_hand([tile(0, TileColor::Black, 0), tile(1, TileColor::Black, 1)]);
    let b = Player::new(B, "B", false)
        .with_hand([tile(2, TileColor::Black, 2), tile(3, TileColor::Black, 3)]);
    let pool = vec![tile(4, TileColor::White, 0), tile(5, TileColor::White, 2)];
    GameState::from_hands(toy_rules(), vec![a, b], pool).unwrap()
}

// =============================================================================
// Guess resolution
// =============================================================================

/// Drawing W2 then correctly naming B's first tile reveals it and moves to Resolve.
#[test]
fn test_correct_guess_reveals_and_resolves() {
    let mut engine = engine();
    let state = engine.draw(&toy_table()).unwrap();
    assert_eq!(state.drawn_tile().unwrap().value, TileValue::Number(2));

    let state = engine.guess(&state, B, 0, TileValue::Number(2)).unwrap();

    assert!(state.player(B).unwrap().hand()[0].is_revealed());
    assert_eq!(state.phase(), Phase::Resolve);
    assert_eq!(state.active_player_id(), A);
    assert_eq!(
        state.log().latest().unwrap().event,
        LogEvent::GuessHit { target: B, index: 0, value: TileValue::Number(2) }
    );
}

/// A wrong guess ends the turn: the drawn tile is revealed and merged.
#[test]
fn test_wrong_guess_passes_turn() {
    let mut engine = engine();
    let state = engine.draw(&toy_table()).unwrap();

    let state = engine.guess(&state, B, 0, TileValue::Number(1)).unwrap();

    assert_eq!(state.active_player_id(), B);
    assert_eq!(state.phase(), Phase::Draw);
    assert!(state.drawn_tile().is_none());
    assert!(!state.player(B).unwrap().hand()[0].is_revealed());

    let hand = state.player(A).unwrap().hand();
    let ids: Vec<_> = hand.iter().map(|t| t.id.raw()).collect();
    assert_eq!(ids, vec![0, 1, 5]);
    assert!(hand[2].is_revealed());
    assert_eq!(hand[2].owner(), Some(A));

    let events: Vec<_> = state.log().iter().map(|e| e.event.clone()).collect();
    assert_eq!(events[0], LogEvent::TurnEnded { revealed_drawn: true });
    assert!(matches!(events[1], LogEvent::GuessMiss { .. }));
}

/// Three of four tiles revealed; guessing the fourth eliminates and wins.
#[test]
fn test_last_tile_eliminates_and_wins() {
    let a = Player::new(A, "A", false).with_hand([tile(0, TileColor::Black, 0)]);
    let b = Player::new(B, "B", false).with_hand([
        tile(1, TileColor::Black, 1).revealed(),
        tile(2, TileColor::White, 1).revealed(),
        tile(3, TileColor::Black, 2).revealed(),
        tile(4, TileColor::White, 3),
    ]);
    let mut engine = engine();
    let state = GameState::from_hands(toy_rules(), vec![a, b], vec![]).unwrap();

    let state = engine.draw(&state).unwrap();
    let state = engine.guess(&state, B, 3, TileValue::Number(3)).unwrap();

    assert!(state.player(B).unwrap().is_eliminated());
    assert_eq!(state.winner(), Some(A));
    assert_eq!(state.phase(), Phase::GameOver);

    let events: Vec<_> = state.log().iter().map(|e| e.event.clone()).collect();
    assert_eq!(events[0], LogEvent::Victory(A));
    assert_eq!(events[1], LogEvent::Eliminated(B));
}

/// With a third player still in, elimination does not end the match.
#[test]
fn test_elimination_without_victory() {
    let a = Player::new(A, "A", false).with_hand([tile(0, TileColor::Black, 0)]);
    let b = Player::new(B, "B", false).with_hand([
        tile(1, TileColor::Black, 1).revealed(),
        tile(2, TileColor::White, 2),
    ]);
    let c = Player::new(C, "C", false).with_hand([tile(3, TileColor::Black, 3)]);
    let mut engine = engine();
    let state = GameState::from_hands(toy_rules(), vec![a, b, c], vec![]).unwrap();

    let state = engine.draw(&state).unwrap();
    let state = engine.guess(&state, B, 1, TileValue::Number(2)).unwrap();

    assert!(state.player(B).unwrap().is_eliminated());
    assert_eq!(state.winner(), None);
    assert_eq!(state.phase(), Phase::Resolve);

    // Turn order now skips B.
    let state = engine.end_turn(&state).unwrap();
    assert_eq!(state.active_player_id(), C);
}

// =============================================================================
// Draw edge cases
// =============================================================================

/// Empty pool: draw goes straight to Guess with nothing drawn.
#[test]
fn test_draw_from_empty_pool() {
    let a = Player::new(A, "A", false).with_hand([tile(0, TileColor::Black, 0)]);
    let b = Player::new(B, "B", false).with_hand([tile(1, TileColor::Black, 1)]);
    let state = GameState::from_hands(toy_rules(), vec![a, b], vec![]).unwrap();

    let next = engine().draw(&state).unwrap();

    assert_eq!(next.phase(), Phase::Guess);
    assert!(next.drawn_tile().is_none());
    assert_eq!(next.pool_len(), 0);
    assert_eq!(next.tile_ids(), state.tile_ids());
}

/// The pool is consumed from one end only.
#[test]
fn test_pool_draw_order() {
    let mut engine = engine();
    let state = engine.draw(&toy_table()).unwrap();
    let state = engine.guess(&state, B, 0, TileValue::Number(0)).unwrap();
    assert_eq!(state.active_player_id(), B);

    let state = engine.draw(&state).unwrap();
    assert_eq!(state.drawn_tile().unwrap().id, TileId::new(4));
    assert_eq!(state.drawn_tile().unwrap().owner(), Some(B));
}

// =============================================================================
// Rejections
// =============================================================================

/// Every rejection leaves the state untouched.
#[test]
fn test_rejections_are_no_ops() {
    let mut engine = engine();
    let start = toy_table();
    let guessing = engine.draw(&start).unwrap();

    let attempts = [
        (&start, Command::guess(B, 0, TileValue::Number(2))),
        (&start, Command::EndTurn),
        (&start, Command::ContinueGuessing),
        (&guessing, Command::Draw),
        (&guessing, Command::guess(A, 0, TileValue::Number(0))),
        (&guessing, Command::guess(B, 9, TileValue::Number(0))),
        (&guessing, Command::RepositionWildcard { tile: TileId::new(0), position: 0 }),
    ];

    for (state, command) in attempts {
        let log_len = state.log().len();
        let phase = state.phase();
        assert!(engine.apply(state, command).is_err(), "{command:?} accepted");
        assert_eq!(state.log().len(), log_len);
        assert_eq!(state.phase(), phase);
    }
}

/// A finished match rejects everything.
#[test]
fn test_game_over_is_terminal() {
    let a = Player::new(A, "A", false).with_hand([tile(0, TileColor::Black, 0)]);
    let b = Player::new(B, "B", false).with_hand([tile(1, TileColor::Black, 1).revealed()]);
    let state = GameState::from_hands(toy_rules(), vec![a, b], vec![]).unwrap();
    assert_eq!(state.phase(), Phase::GameOver);

    let mut engine = engine();
    for command in [
        Command::Draw,
        Command::TimeoutDraw,
        Command::TimeoutEndTurn,
        Command::ContinueGuessing,
        Command::EndTurn,
        Command::guess(B, 0, TileValue::Number(1)),
    ] {
        assert_eq!(engine.apply(&state, command).unwrap_err(), RuleViolation::GameOver);
    }
}

// =============================================================================
// Wildcards
// =============================================================================

/// The repositioned flag stays set through rejected retries and later turns.
#[test]
fn test_wildcard_flag_is_sticky() {
    let rules = MatchRules {
        value_count: 4,
        wildcards: true,
        turn_timer_secs: 30,
    };
    let wild = TileId::new(8);
    let a = Player::new(A, "A", false).with_hand([
        tile(0, TileColor::Black, 1),
        tile(1, TileColor::White, 3),
        Tile::wildcard(wild, TileColor::Black, 4.0),
    ]);
    let b = Player::new(B, "B", false)
        .with_hand([tile(2, TileColor::Black, 0), tile(3, TileColor::Black, 2)]);
    let mut engine = engine();
    let state = GameState::from_hands(rules, vec![a, b], vec![]).unwrap();

    let state = engine.reposition_wildcard(&state, wild, 1).unwrap();
    let placed = state.player(A).unwrap().hand()[1].clone();
    assert_eq!(placed.id, wild);
    assert_eq!(placed.sort_key(), 2.0);

    for position in 0..=2 {
        assert_eq!(
            engine.reposition_wildcard(&state, wild, position).unwrap_err(),
            RuleViolation::NotRepositionable(wild)
        );
    }

    // B guesses the wildcard by its tag.
    let state = engine.draw(&state).unwrap();
    let state = engine.guess(&state, B, 0, TileValue::Number(3)).unwrap();
    let state = engine.draw(&state).unwrap();
    let state = engine.guess(&state, A, 1, TileValue::Number(2)).unwrap();
    assert!(!state.player(A).unwrap().hand()[1].is_revealed());
    let state = engine.draw(&state).unwrap();
    let state = engine.guess(&state, B, 0, TileValue::Number(1)).unwrap();
    let state = engine.draw(&state).unwrap();
    let state = engine.guess(&state, A, 1, TileValue::Wildcard).unwrap();

    let hand = state.player(A).unwrap().hand();
    assert_eq!(hand[1].id, wild);
    assert!(hand[1].is_revealed());
    assert!(hand[1].is_repositioned());
    assert_eq!(hand[1].sort_key(), 2.0);
}
