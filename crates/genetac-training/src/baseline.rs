//! Games against the random baseline.
//!
//! Fitness and final evaluation both pit an agent, playing X, against a
//! [`RandomPlayer`] that shares the run's random source.

use genetac_engine::{Board, GameOutcome, GameRecord, Mark, RandomPlayer, play_game};
use rand::Rng;
use serde::Serialize;

use crate::agent::Agent;

/// Plays one game as X against a fresh random player and records it on the agent.
pub fn play_against_baseline<R>(agent: &mut Agent, rng: &mut R) -> GameRecord
where
    R: Rng + ?Sized,
{
    let mut baseline = RandomPlayer::new(rng);
    let record = play_game(agent, &mut baseline);
    agent.record_game(record.outcome(), Mark::X);
    record
}

/// Totals of a final evaluation against the random baseline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BaselineReport {
    pub trials: usize,
    pub agent_wins: usize,
    pub baseline_wins: usize,
    pub draws: usize,
    /// Turns the agent forfeited over all trials.
    pub forfeits: usize,
    /// Final boards of the games the agent lost.
    #[serde(skip)]
    pub lost_boards: Vec<Board>,
}

impl BaselineReport {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        #[expect(clippy::cast_precision_loss)]
        let rate = self.agent_wins as f64 / self.trials as f64;
        rate
    }
}

/// Replays `agent` against the baseline for `trials` games.
///
/// The agent is evaluated on a copy with a cleared record, so the caller's counters are
/// left as they were.
pub fn evaluate_against_baseline<R>(agent: &Agent, trials: usize, rng: &mut R) -> BaselineReport
where
    R: Rng + ?Sized,
{
    let mut agent = agent.clone();
    agent.reset_record();

    let mut report = BaselineReport {
        trials,
        ..BaselineReport::default()
    };
    for _ in 0..trials {
        let record = play_against_baseline(&mut agent, rng);
        report.forfeits += record.forfeits(Mark::X);
        match record.outcome() {
            GameOutcome::Win(Mark::X) => report.agent_wins += 1,
            GameOutcome::Win(Mark::O) => {
                report.baseline_wins += 1;
                report.lost_boards.push(record.board().clone());
            }
            GameOutcome::Draw => report.draws += 1,
        }
    }
    log::debug!(
        "{} won {} of {} against the baseline",
        agent.name(),
        report.agent_wins,
        trials
    );
    report
}
