//! Board synchronization tests.
//!
//! Two peers hold their own `GameBoard`. One is authoritative and ships
//! encoded `BoardSnapshot`s; the other mirrors them wholesale.

use tile_match::board::{BoardModifier, BoardSnapshot, GameBoard, TilePosition, TileSnapshot, TileState};
use tile_match::cards::Card;

fn pos(x: u16, y: u16) -> TilePosition {
    TilePosition::new(x, y)
}

/// Ship the authoritative board over the wire and apply it.
fn sync(from: &GameBoard, to: &mut GameBoard) {
    let bytes = from.snapshot().to_bytes().unwrap();
    let snapshot = BoardSnapshot::from_bytes(&bytes).unwrap();
    to.apply_snapshot(&snapshot).unwrap();
}

#[test]
fn test_peer_mirrors_authoritative_board() {
    let mut server = GameBoard::new(3, 3);
    server.add_modifier(pos(1, 1), BoardModifier::Null);
    server.place_card(pos(0, 0), Card::new(4), Card::new(4), 0).unwrap();
    server.lock_placed_cards();

    let mut client = GameBoard::new(3, 3);
    sync(&server, &mut client);

    assert_eq!(client, server);
    assert!(client.tile(pos(1, 1)).unwrap().is_null_tile());
}

/// Local transformation history is lost on sync: the server only knows
/// the shown card.
#[test]
fn test_sync_collapses_local_transformation() {
    let mut server = GameBoard::new(2, 1);
    server.place_card(pos(0, 0), Card::new(9), Card::new(9), 0).unwrap();
    server.lock_placed_cards();

    let mut client = GameBoard::new(2, 1);
    client.place_card(pos(0, 0), Card::new(9), Card::new(2), 0).unwrap();
    assert!(client.tile(pos(0, 0)).unwrap().is_transformed());

    sync(&server, &mut client);

    let tile = client.tile(pos(0, 0)).unwrap();
    assert_eq!(tile.state(), TileState::Occupied);
    assert_eq!(tile.original_card(), Card::new(9));
    assert!(!tile.is_transformed());
}

/// Cards the client placed but the server has not seen are wiped.
#[test]
fn test_sync_drops_unconfirmed_cards() {
    let server = GameBoard::new(2, 2);
    let mut client = GameBoard::new(2, 2);
    client.place_card(pos(1, 0), Card::new(5), Card::new(5), 0).unwrap();

    sync(&server, &mut client);

    assert!(client.tile(pos(1, 0)).unwrap().is_empty());
    assert_eq!(client.open_positions().len(), 4);
}

/// Absent tile entries reset the tile, modifiers included.
#[test]
fn test_absent_entries_reset_tiles() {
    let mut client = GameBoard::new(2, 1);
    client.add_modifier(pos(0, 0), BoardModifier::bonus(5));
    client.place_card(pos(0, 0), Card::new(1), Card::new(1), 0).unwrap();

    let mut snapshot = BoardSnapshot::empty(2, 1);
    snapshot.tiles[1] = Some(TileSnapshot::empty().with_modifier(BoardModifier::Null));
    client.apply_snapshot(&snapshot).unwrap();

    let first = client.tile(pos(0, 0)).unwrap();
    assert!(first.is_empty());
    assert!(first.board_modifier_list().is_empty());
    assert!(client.tile(pos(1, 0)).unwrap().is_null_tile());
}

/// A snapshot for a different board size is rejected atomically.
#[test]
fn test_mismatched_snapshot_is_rejected() {
    let mut client = GameBoard::new(2, 2);
    client.place_card(pos(0, 1), Card::new(3), Card::new(3), 0).unwrap();
    let before = client.clone();

    let wrong_size = GameBoard::new(3, 2).snapshot();
    let err = client.apply_snapshot(&wrong_size).unwrap_err();

    assert!(err.message.contains("2x2"));
    assert_eq!(client, before);
}

/// Snapshots also travel as JSON.
#[test]
fn test_snapshot_json() {
    let mut board = GameBoard::new(2, 1);
    board.add_modifier(pos(1, 0), BoardModifier::multiplier(3).for_turns(2));
    board.place_card(pos(0, 0), Card::new(8), Card::new(8), 2).unwrap();

    let json = serde_json::to_string(&board.snapshot()).unwrap();
    let snapshot: BoardSnapshot = serde_json::from_str(&json).unwrap();

    let mut mirror = GameBoard::new(2, 1);
    mirror.apply_snapshot(&snapshot).unwrap();
    assert_eq!(mirror.tile(pos(0, 0)).unwrap().card(), Card::new(8));
    assert_eq!(mirror.tile(pos(0, 0)).unwrap().turn(), 2);
    assert_eq!(mirror.tile(pos(1, 0)).unwrap().board_modifier_list().len(), 1);
}
