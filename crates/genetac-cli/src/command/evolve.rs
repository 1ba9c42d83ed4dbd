use std::path::PathBuf;

use chrono::Utc;
use genetac_engine::Mark;
use genetac_training::{
    Agent, BaselineReport, EvolutionParams, Evolver, Population, RunSeed,
    evaluate_against_baseline,
};

use crate::{
    schema::{ChampionSummary, GeneEntry, RunSummary, gene_entries},
    util::{self, Output},
};

const GENERATIONS: usize = 100;
const POPULATION_SIZE: usize = 31;
const TRIALS_PER_AGENT: usize = 100;
const ELITE_RATE: f64 = 1.0;
const MUTATIONS_PER_CHILD: usize = 1;
const INITIAL_GENE_COUNT: usize = 40;
const FINAL_TRIALS: usize = 100;

/// Markers in rendered boards of the final evaluation.
const CHAMPION_MARKER: char = '@';
const BASELINE_MARKER: char = 'R';

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct EvolveArg {
    /// Number of generations to run
    #[arg(long, default_value_t = GENERATIONS)]
    generations: usize,
    /// Number of agents in the population
    #[arg(long, default_value_t = POPULATION_SIZE)]
    population: usize,
    /// Games each agent plays per generation
    #[arg(long, default_value_t = TRIALS_PER_AGENT)]
    trials: usize,
    /// Fraction of the population replaced by mutants each generation
    #[arg(long, default_value_t = ELITE_RATE)]
    elite_rate: f64,
    /// Mutation steps applied to each new agent
    #[arg(long, default_value_t = MUTATIONS_PER_CHILD)]
    mutations: usize,
    /// Genes after the input slots in a fresh agent
    #[arg(long, default_value_t = INITIAL_GENE_COUNT)]
    initial_genes: usize,
    /// Games the champion plays against the random player after evolution
    #[arg(long, default_value_t = FINAL_TRIALS)]
    final_trials: usize,
    /// Seed as 32 hex characters; random when omitted
    #[arg(long)]
    seed: Option<RunSeed>,
    /// Output file path for the JSON run summary
    #[arg(long)]
    output: Option<PathBuf>,
    /// Draw the boards of games the champion lost in the final evaluation
    #[arg(long)]
    show_losses: bool,
}

impl Default for EvolveArg {
    fn default() -> Self {
        Self {
            generations: GENERATIONS,
            population: POPULATION_SIZE,
            trials: TRIALS_PER_AGENT,
            elite_rate: ELITE_RATE,
            mutations: MUTATIONS_PER_CHILD,
            initial_genes: INITIAL_GENE_COUNT,
            final_trials: FINAL_TRIALS,
            seed: None,
            output: None,
            show_losses: false,
        }
    }
}

impl EvolveArg {
    fn params(&self) -> EvolutionParams {
        EvolutionParams {
            population_size: self.population,
            trials_per_agent: self.trials,
            elite_rate: self.elite_rate,
            mutations_per_child: self.mutations,
            initial_gene_count: self.initial_genes,
            ..EvolutionParams::default()
        }
    }
}

pub(crate) fn run(arg: &EvolveArg) -> anyhow::Result<()> {
    let seed = util::seed_or_random(arg.seed);
    let evolver = Evolver::new(arg.params())?;
    let mut rng = seed.rng();
    eprintln!("Seed: {seed}");

    let mut population = Population::random(evolver.params(), &mut rng)?;
    evolver.run(&mut population, arg.generations, &mut rng, |report| {
        eprintln!("{report}");
        log::debug!(
            "generation {} wins: min {} / mean {:.1} / max {}",
            report.generation,
            report.stats.min,
            report.stats.mean,
            report.stats.max
        );
    });

    eprintln!();
    eprintln!("Evolution done");
    for agent in population.leaderboard() {
        eprintln!("{}", leaderboard_line(agent));
    }

    let champion = &population.champion().clone().with_marker(CHAMPION_MARKER);
    eprintln!();
    eprintln!("Genes from {}:", champion.name());
    for entry in gene_entries(champion.graph()) {
        eprintln!("{}", gene_line(&entry));
    }

    eprintln!();
    eprintln!("Testing against random");
    let final_evaluation = evaluate_against_baseline(champion, arg.final_trials, &mut rng);
    print_final_evaluation(champion, &final_evaluation, arg.show_losses);

    let summary = RunSummary {
        seed,
        finished_at: Utc::now(),
        generations: arg.generations,
        params: evolver.params().clone(),
        champion: ChampionSummary::from_agent(champion),
        final_evaluation,
    };
    Output::open(arg.output.as_deref())?.write_json(&summary)?;
    if let Some(path) = &arg.output {
        eprintln!();
        eprintln!("Run summary saved to {}", path.display());
    }

    Ok(())
}

fn print_final_evaluation(champion: &Agent, report: &BaselineReport, show_losses: bool) {
    if show_losses {
        for board in &report.lost_boards {
            let rendered = board.render(|mark| match mark {
                Mark::X => champion.marker(),
                Mark::O => BASELINE_MARKER,
            });
            eprintln!("{rendered}");
            eprintln!("-> random won.");
        }
    }
    eprintln!();
    for line in totals_lines(report) {
        eprintln!("{line}");
    }
    eprintln!();
    eprintln!("Winning code:");
    eprintln!("{}", champion.graph().root_expression());
}

fn totals_lines(report: &BaselineReport) -> [String; 4] {
    [
        format!(
            "Genetic won {} of {} games ({:.1}%).",
            report.agent_wins,
            report.trials,
            report.win_rate() * 100.0
        ),
        format!("Random won {} games.", report.baseline_wins),
        format!("Draws: {}", report.draws),
        format!("Forfeited turns: {}", report.forfeits),
    ]
}

fn leaderboard_line(agent: &Agent) -> String {
    format!(
        "{:<16} ... {:5} ({:5.1}%): {}",
        agent.name(),
        agent.wins(),
        agent.win_rate() * 100.0,
        agent.graph().root_expression()
    )
}

fn gene_line(entry: &GeneEntry) -> String {
    let kind = entry.kind.to_string();
    format!(
        "{:<3}: {kind:<15}( [{:2}] [{:2}] ) = {}",
        entry.index, entry.left, entry.right, entry.value
    )
}
