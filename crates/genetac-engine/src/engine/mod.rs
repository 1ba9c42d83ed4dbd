//! Turn-taking and players.
//!
//! - [`Player`] - Anything that can propose a cell for its mark
//! - [`RandomPlayer`] - Baseline opponent choosing uniformly among empty cells
//! - [`Game`] - A single game in progress, alternating turns between X and O
//! - [`GameRecord`] - Final board, outcome and per-player forfeits of a finished game
//!
//! # Game Flow
//!
//! 1. X proposes a cell; the game tries to place the mark there
//! 2. An unusable proposal forfeits the turn without touching the board
//! 3. O does the same, and so on
//! 4. The game ends on a completed line, a full board or the turn limit
//!
//! The turn limit only matters when both players keep forfeiting. Against
//! [`RandomPlayer`] the board always fills within 2 × [`CELL_COUNT`](crate::CELL_COUNT)
//! turns.

pub use self::{game::*, player::*};

mod game;
mod player;
