//! Agents: gene graphs that play tic-tac-toe.
//!
//! An agent's decision function is the root of its gene graph. Before every move the
//! input slots are overwritten with the board as seen by the agent (0 empty, 1 own
//! piece, 2 opponent piece) and the root value is read as the cell to claim.
//!
//! The agent does not check its own proposal. An out-of-range or occupied cell is
//! rejected by the game, which forfeits the turn.

use genetac_engine::{Board, GameOutcome, Mark, Player, format_encoded};
use genetac_gp::{GeneGraph, GraphError, factory};
use rand::Rng;

/// Marker used for evolved agents when drawing boards.
pub const DEFAULT_MARKER: char = 'G';

/// An evolved player together with its win record for the current generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    name: String,
    marker: char,
    wins: usize,
    games: usize,
    graph: GeneGraph,
}

impl Agent {
    #[must_use]
    pub fn new(name: impl Into<String>, graph: GeneGraph) -> Self {
        Self {
            name: name.into(),
            marker: DEFAULT_MARKER,
            wins: 0,
            games: 0,
            graph,
        }
    }

    /// Creates an agent with a random graph of `input_count` input slots followed by
    /// `gene_count` genes.
    pub fn random<R>(
        name: impl Into<String>,
        input_count: usize,
        gene_count: usize,
        rng: &mut R,
    ) -> Result<Self, GraphError>
    where
        R: Rng + ?Sized,
    {
        let graph = factory::random_graph(input_count, gene_count, rng)?;
        Ok(Self::new(name, graph))
    }

    #[must_use]
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn marker(&self) -> char {
        self.marker
    }

    #[must_use]
    pub fn wins(&self) -> usize {
        self.wins
    }

    #[must_use]
    pub fn games(&self) -> usize {
        self.games
    }

    #[must_use]
    pub fn graph(&self) -> &GeneGraph {
        &self.graph
    }

    pub(crate) fn graph_mut(&mut self) -> &mut GeneGraph {
        &mut self.graph
    }

    pub(crate) fn renamed(&self, name: String) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }

    /// Fraction of recorded games won, or 0 before any game.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        #[expect(clippy::cast_precision_loss)]
        let rate = self.wins as f64 / self.games as f64;
        rate
    }

    pub fn reset_record(&mut self) {
        self.wins = 0;
        self.games = 0;
    }

    /// Counts a finished game played as `mark`.
    pub fn record_game(&mut self, outcome: GameOutcome, mark: Mark) {
        self.games += 1;
        if outcome.winner() == Some(mark) {
            self.wins += 1;
        }
    }

    #[cfg(test)]
    pub(crate) fn with_record(mut self, wins: usize, games: usize) -> Self {
        self.wins = wins;
        self.games = games;
        self
    }
}

impl Player for Agent {
    fn propose_move(&mut self, board: &Board, mark: Mark) -> Option<usize> {
        let cells = board.encoded_cells(mark);
        self.graph.set_inputs(cells);
        let value = self.graph.eval_root();
        log::trace!("{} sees {} and proposes {value}", self.name, format_encoded(&cells));
        usize::try_from(value).ok()
    }
}
