use genetac_engine::{GameOutcome, Mark, RandomPlayer, play_game};
use genetac_training::RunSeed;
use rand::SeedableRng as _;
use rand_pcg::Pcg32;

use crate::util;

const GAMES: usize = 1000;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct BaselineArg {
    /// Number of games to play
    #[arg(long, default_value_t = GAMES)]
    games: usize,
    /// Seed as 32 hex characters; random when omitted
    #[arg(long)]
    seed: Option<RunSeed>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

pub(crate) fn run(arg: &BaselineArg) -> anyhow::Result<()> {
    let seed = util::seed_or_random(arg.seed);
    eprintln!("Seed: {seed}");
    let tally = play_random_games(seed, arg.games);

    eprintln!("Random vs random over {} games:", arg.games);
    let rows = [
        ("X (first) won", tally.x_wins),
        ("O won", tally.o_wins),
        ("Draws", tally.draws),
    ];
    for (label, count) in rows {
        let rate = percent(count, arg.games);
        eprintln!("  {label:<14} {count:5} ({rate:.1}%)");
    }
    Ok(())
}

/// Plays `games` games between two random players that draw from separate streams.
fn play_random_games(seed: RunSeed, games: usize) -> Tally {
    let mut rng_x = seed.rng();
    let mut rng_o = Pcg32::from_rng(&mut rng_x);
    let mut tally = Tally::default();
    for _ in 0..games {
        let record = play_game(
            &mut RandomPlayer::new(&mut rng_x),
            &mut RandomPlayer::new(&mut rng_o),
        );
        match record.outcome() {
            GameOutcome::Win(Mark::X) => tally.x_wins += 1,
            GameOutcome::Win(Mark::O) => tally.o_wins += 1,
            GameOutcome::Draw => tally.draws += 1,
        }
    }
    tally
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    #[expect(clippy::cast_precision_loss)]
    let ratio = count as f64 / total as f64;
    ratio * 100.0
}
