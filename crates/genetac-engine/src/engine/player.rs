use rand::{Rng, seq::IndexedRandom as _};

use crate::core::{Board, Mark};

/// A participant in a game.
pub trait Player {
    /// Proposes the cell `mark` should be placed in.
    ///
    /// The proposal is not trusted: `None`, out-of-range or occupied cells forfeit the
    /// turn.
    fn propose_move(&mut self, board: &Board, mark: Mark) -> Option<usize>;
}

/// Baseline player choosing uniformly among the currently empty cells.
///
/// The player borrows its random source so that a whole run can be driven by a
/// single seeded generator.
#[derive(Debug)]
pub struct RandomPlayer<'a, R: ?Sized> {
    rng: &'a mut R,
}

impl<'a, R> RandomPlayer<'a, R>
where
    R: Rng + ?Sized,
{
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R> Player for RandomPlayer<'_, R>
where
    R: Rng + ?Sized,
{
    fn propose_move(&mut self, board: &Board, _mark: Mark) -> Option<usize> {
        board.empty_cells().choose(self.rng).copied()
    }
}
