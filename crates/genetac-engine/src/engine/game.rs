use crate::{
    PlacementError,
    core::{Board, Mark},
};

use super::player::Player;

/// Default number of turns after which an unfinished game is declared a draw.
pub const DEFAULT_TURN_LIMIT: usize = 100;

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

impl GameOutcome {
    #[must_use]
    pub fn winner(self) -> Option<Mark> {
        match self {
            Self::Win(mark) => Some(mark),
            Self::Draw => None,
        }
    }
}

/// A single game in progress.
///
/// X moves first. Every call to [`Game::play_turn`] consumes exactly one turn,
/// whether or not the proposed move could be applied.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turns: usize,
    turn_limit: usize,
    forfeits: [usize; 2],
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    #[must_use]
    pub fn new() -> Self {
        Self::with_turn_limit(DEFAULT_TURN_LIMIT)
    }

    #[must_use]
    pub fn with_turn_limit(turn_limit: usize) -> Self {
        Self {
            board: Board::EMPTY,
            turns: 0,
            turn_limit,
            forfeits: [0; 2],
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of turns played so far, forfeited ones included.
    #[must_use]
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Mark of the player whose turn it is.
    #[must_use]
    pub fn next_mark(&self) -> Mark {
        if self.turns % 2 == 0 { Mark::X } else { Mark::O }
    }

    /// Returns the outcome once the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(mark) = self.board.winner() {
            return Some(GameOutcome::Win(mark));
        }
        if self.board.is_full() || self.turns >= self.turn_limit {
            return Some(GameOutcome::Draw);
        }
        None
    }

    /// Lets `player` take the next turn.
    ///
    /// Returns the cell that was claimed, or the reason the turn was forfeited. In both
    /// cases the turn counter advances by one and play passes to the opponent.
    pub fn play_turn(&mut self, player: &mut dyn Player) -> Result<usize, PlacementError> {
        let mark = self.next_mark();
        let result = player
            .propose_move(&self.board, mark)
            .ok_or(PlacementError::NoProposal)
            .and_then(|index| self.board.place_mark(mark, index).map(|()| index));
        self.turns += 1;
        if let Err(err) = &result {
            self.forfeits[mark.index()] += 1;
            log::trace!("{mark} forfeited turn {}: {err}", self.turns);
        }
        result
    }

    /// Plays until the game ends and returns the final record.
    pub fn play_out(mut self, x: &mut dyn Player, o: &mut dyn Player) -> GameRecord {
        loop {
            if let Some(outcome) = self.outcome() {
                return GameRecord {
                    board: self.board,
                    outcome,
                    turns: self.turns,
                    forfeits: self.forfeits,
                };
            }
            let player: &mut dyn Player = match self.next_mark() {
                Mark::X => &mut *x,
                Mark::O => &mut *o,
            };
            // Forfeits are recorded by `play_turn`; the game simply moves on.
            let _ = self.play_turn(player);
        }
    }
}

/// Plays a full game with the default turn limit; `x` moves first.
pub fn play_game(x: &mut dyn Player, o: &mut dyn Player) -> GameRecord {
    Game::new().play_out(x, o)
}

/// Result of a finished game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    board: Board,
    outcome: GameOutcome,
    turns: usize,
    forfeits: [usize; 2],
}

impl GameRecord {
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    #[must_use]
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Number of turns `mark` forfeited.
    #[must_use]
    pub fn forfeits(&self, mark: Mark) -> usize {
        self.forfeits[mark.index()]
    }
}
