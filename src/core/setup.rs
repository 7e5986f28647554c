//! Building a fresh match from its configuration.
//!
//! Setup is deterministic in the seed: both peers of a networked match
//! that share a config and deck build identical boards and hands.

use derive_more::{Display, Error};
use tracing::{info, instrument};

use super::config::MatchConfig;
use super::game_match::Match;
use super::player::Side;
use super::rng::GameRng;
use super::state::MatchState;
use crate::board::{BoardModifier, GameBoard, TilePosition};
use crate::cards::Card;

/// Why a match could not be set up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum SetupError {
    #[display("deck has {available} cards but {needed} are needed to deal")]
    DeckTooSmall { needed: usize, available: usize },
    #[display("hand size {_0} is too large to deal")]
    HandSizeTooLarge(#[error(not(source))] usize),
    #[display("null tile {_0} is outside the board")]
    NullTileOutOfBounds(#[error(not(source))] TilePosition),
    #[display("cannot place {requested} random null tiles on {open} open tiles")]
    TooManyNullTiles { requested: usize, open: usize },
}

/// Shuffle the deck, deal both hands, and lay out the board.
///
/// Cards are dealt one at a time, host first. The undealt remainder
/// becomes the match deck.
#[instrument(skip(deck), fields(deck_size = deck.len(), seed = config.seed))]
pub fn start_match(config: &MatchConfig, mut deck: Vec<Card>) -> Result<(Match, GameBoard), SetupError> {
    let needed = config
        .cards_to_deal()
        .ok_or(SetupError::HandSizeTooLarge(config.hand_size))?;
    if deck.len() < needed {
        return Err(SetupError::DeckTooSmall {
            needed,
            available: deck.len(),
        });
    }

    let rng = GameRng::new(config.seed);
    let board = build_board(config, &mut rng.for_context("layout"))?;

    rng.for_context("deck").shuffle(&mut deck);
    let remainder = deck.split_off(needed);

    let mut state = MatchState::new(remainder, config.board_modifiers.clone());
    for (i, card) in deck.into_iter().enumerate() {
        state.hand_mut(Side::from_turn(i)).push(card);
    }

    let mut game = Match::new(state);
    game.has_bot = config.has_bot;

    info!(
        null_tiles = board.null_tile_count(),
        deck_left = game.state.deck().len(),
        "match started"
    );
    Ok((game, board))
}

fn build_board(config: &MatchConfig, rng: &mut GameRng) -> Result<GameBoard, SetupError> {
    let mut board = GameBoard::new(config.board_width, config.board_height);

    for &pos in &config.null_tiles {
        if board.tile(pos).is_some_and(|t| t.is_null_tile()) {
            continue;
        }
        if !board.add_modifier(pos, BoardModifier::Null) {
            return Err(SetupError::NullTileOutOfBounds(pos));
        }
    }

    if config.random_null_tiles > 0 {
        let open = board.open_positions();
        if config.random_null_tiles > open.len() {
            return Err(SetupError::TooManyNullTiles {
                requested: config.random_null_tiles,
                open: open.len(),
            });
        }
        for pos in rng.sample(&open, config.random_null_tiles) {
            board.add_modifier(pos, BoardModifier::Null);
        }
    }

    Ok(board)
}
