//! Tile state machine tests.
//!
//! These tests exercise `GameBoardTileModel` through its public API:
//! - place / pick up / lock transitions and their no-op paths
//! - the null-tile predicate
//! - snapshot synchronization
//! - randomized operation sequences that must keep the Empty invariant

use proptest::prelude::*;
use tile_match::board::{BoardModifier, GameBoardTileModel, TileSnapshot, TileState, UNPLACED_TURN};
use tile_match::cards::Card;

fn assert_empty(tile: &GameBoardTileModel) {
    assert_eq!(tile.state(), TileState::Empty);
    assert_eq!(tile.card(), Card::INVALID);
    assert_eq!(tile.original_card(), Card::INVALID);
    assert_eq!(tile.turn(), UNPLACED_TURN);
}

// =============================================================================
// Transitions
// =============================================================================

/// Placing then picking up returns the placed card and empties the tile.
#[test]
fn test_place_then_pick_up_round_trip() {
    let mut tile = GameBoardTileModel::new();
    tile.place_card(Card::new(12), Card::new(3));

    assert_eq!(tile.pick_up_card(), Card::new(12));
    assert_empty(&tile);
}

/// Picking up from an empty tile changes nothing.
#[test]
fn test_pick_up_empty_tile() {
    let mut tile = GameBoardTileModel::with_modifiers([BoardModifier::wildcard()]);

    assert_eq!(tile.pick_up_card(), Card::INVALID);
    assert_eq!(tile.state(), TileState::Empty);
    assert_eq!(tile.turn(), UNPLACED_TURN);
    assert_eq!(tile.board_modifier_list(), &[BoardModifier::wildcard()]);
}

/// Locking only commits tiles that hold a card.
#[test]
fn test_lock_transitions() {
    let mut tile = GameBoardTileModel::new();
    tile.lock_card_in_place();
    assert_eq!(tile.state(), TileState::Empty);

    tile.place_card_on_turn(Card::new(1), Card::new(1), 0);
    assert_eq!(tile.state(), TileState::OccupiedUnflipped);
    tile.lock_card_in_place();
    assert_eq!(tile.state(), TileState::Occupied);

    // Picking up a committed card is allowed
    assert_eq!(tile.pick_up_card(), Card::new(1));
    tile.lock_card_in_place();
    assert_empty(&tile);
}

/// The picked-up card is an independent copy.
#[test]
fn test_picked_up_card_is_owned() {
    let mut tile = GameBoardTileModel::new();
    tile.place_card(Card::new(6), Card::new(6));

    let card = tile.pick_up_card();
    tile.place_card(Card::new(7), Card::new(7));

    assert_eq!(card, Card::new(6));
    assert_eq!(tile.card(), Card::new(7));
}

// =============================================================================
// Null tiles
// =============================================================================

#[test]
fn test_null_tile_predicate() {
    assert!(!GameBoardTileModel::new().is_null_tile());
    assert!(GameBoardTileModel::with_modifiers([BoardModifier::Null]).is_null_tile());
    assert!(GameBoardTileModel::with_modifiers([
        BoardModifier::Null,
        BoardModifier::multiplier(2),
        BoardModifier::bonus(1),
    ])
    .is_null_tile());
    assert!(!GameBoardTileModel::with_modifiers([BoardModifier::bonus(1), BoardModifier::Null])
        .is_null_tile());
}

// =============================================================================
// Synchronization
// =============================================================================

/// A missing source always produces a blank tile.
#[test]
fn test_update_from_none() {
    let mut tile = GameBoardTileModel::with_modifiers([BoardModifier::Null, BoardModifier::bonus(2)]);
    tile.place_card_on_turn(Card::new(1), Card::new(2), 4);
    tile.lock_card_in_place();

    tile.update_model_from_state(None);

    assert_empty(&tile);
    assert!(tile.board_modifier_list().is_empty());
}

/// A source holding the sentinel card counts as empty.
#[test]
fn test_update_from_invalid_card() {
    let mut tile = GameBoardTileModel::new();
    tile.place_card(Card::new(1), Card::new(1));

    tile.update_model_from_state(Some(&TileSnapshot::occupied(Card::INVALID, 3)));

    assert_empty(&tile);
}

/// A valid source card lands in both card fields, already locked.
#[test]
fn test_update_from_valid_card() {
    let mut tile = GameBoardTileModel::new();
    tile.place_card(Card::new(1), Card::new(2));

    let source = TileSnapshot::occupied(Card::new(30), 8)
        .with_modifier(BoardModifier::wildcard())
        .with_modifier(BoardModifier::bonus(3));
    tile.update_model_from_state(Some(&source));

    assert_eq!(tile.state(), TileState::Occupied);
    assert_eq!(tile.card(), Card::new(30));
    assert_eq!(tile.original_card(), Card::new(30));
    assert_eq!(tile.turn(), 8);
    assert_eq!(tile.board_modifier_list(), &source.board_modifier_list[..]);
}

// =============================================================================
// Randomized sequences
// =============================================================================

#[derive(Clone, Debug)]
enum Op {
    Place(u32, u32, i32),
    PickUp,
    Lock,
    Sync(Option<(Option<u32>, i32)>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u32..50, 0u32..50, 0i32..20).prop_map(|(c, o, t)| Op::Place(c, o, t)),
        Just(Op::PickUp),
        Just(Op::Lock),
        proptest::option::of((proptest::option::of(0u32..50), 0i32..20)).prop_map(Op::Sync),
    ]
}

proptest! {
    /// Whatever the sequence, an empty tile never carries a card or turn,
    /// and a tile with a card is never empty.
    #[test]
    fn prop_empty_invariant_holds(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut tile = GameBoardTileModel::new();

        for op in ops {
            match op {
                Op::Place(c, o, t) => {
                    if tile.is_empty() {
                        tile.place_card_on_turn(Card::new(c), Card::new(o), t);
                    }
                }
                Op::PickUp => {
                    let was_empty = tile.is_empty();
                    let card = tile.pick_up_card();
                    prop_assert_eq!(card.is_valid(), !was_empty);
                }
                Op::Lock => tile.lock_card_in_place(),
                Op::Sync(source) => {
                    let snapshot = source.map(|(card, turn)| TileSnapshot {
                        card: card.map(Card::new),
                        turn,
                        ..TileSnapshot::default()
                    });
                    tile.update_model_from_state(snapshot.as_ref());
                }
            }

            if tile.state() == TileState::Empty {
                prop_assert_eq!(tile.card(), Card::INVALID);
                prop_assert_eq!(tile.turn(), UNPLACED_TURN);
            } else {
                prop_assert!(tile.card().is_valid());
            }
        }
    }

    /// Picking up right after placing always hands back the placed card.
    #[test]
    fn prop_place_pick_up(card in 0u32..1000, original in 0u32..1000) {
        let mut tile = GameBoardTileModel::new();
        tile.place_card(Card::new(card), Card::new(original));

        prop_assert_eq!(tile.pick_up_card(), Card::new(card));
        prop_assert_eq!(tile.state(), TileState::Empty);
    }
}
