//! The computer opponent: a uniformly random pick among open squares.

use crate::rng::RandomSource;
use crate::types::Board;
use tracing::{debug, instrument};

/// Chooses an empty square uniformly at random.
///
/// No lookahead, no blocking. Returns `None` on a full board.
#[instrument(skip(board, rng))]
pub fn select_computer_move<R>(board: &Board, rng: &mut R) -> Option<usize>
where
    R: RandomSource + ?Sized,
{
    let available = board.empty_indices();
    if available.is_empty() {
        return None;
    }

    let choice = available[rng.pick_index(available.len())];
    debug!(position = choice, options = available.len(), "Computer chose position");
    Some(choice)
}
