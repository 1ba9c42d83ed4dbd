//! Tic-tac-toe game environment used as the fitness arena for evolved agents.
//!
//! The crate is split the same way the rest of the workspace consumes it:
//!
//! - [`core`] - Board state and marks ([`Board`], [`Mark`], [`CellState`])
//! - [`engine`] - Turn-taking ([`Game`], [`play_game`]) and players ([`Player`],
//!   [`RandomPlayer`])
//!
//! Invalid moves are never fatal. A player proposing an occupied cell, a cell outside
//! the board or no cell at all simply forfeits the turn: the board is left untouched
//! and play passes to the opponent.
//!
//! # Example
//!
//! ```
//! use genetac_engine::{GameOutcome, RandomPlayer, play_game};
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg32;
//!
//! let mut rng_x = Pcg32::seed_from_u64(1);
//! let mut rng_o = Pcg32::seed_from_u64(2);
//! let record = play_game(
//!     &mut RandomPlayer::new(&mut rng_x),
//!     &mut RandomPlayer::new(&mut rng_o),
//! );
//!
//! assert!(record.turns() <= 9);
//! if let GameOutcome::Win(mark) = record.outcome() {
//!     assert_eq!(record.board().winner(), Some(mark));
//! }
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Reason a proposed move was rejected.
///
/// A rejected move is a forfeited turn, not a failure of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    #[display("player proposed no cell")]
    NoProposal,
    #[display("cell {index} is outside the board")]
    OutOfRange { index: usize },
    #[display("cell {index} is already occupied")]
    Occupied { index: usize },
}
