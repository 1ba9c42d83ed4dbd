//! Population, parameters and the generational loop.
//!
//! Selection is deliberately simple: the single best agent of a generation is kept
//! unchanged and the first `⌊N × elite_rate⌋` positions, minus the best, are refilled
//! with its mutants. Survivors keep their relative order and mutants are appended, so a
//! long-lived champion drifts towards the front of the population.

use std::{cmp::Reverse, fmt};

use genetac_gp::GraphError;
use rand::Rng;
use serde::Serialize;

use crate::{agent::Agent, baseline::play_against_baseline};

/// Prefix of generated agent names.
pub const AGENT_NAME_PREFIX: &str = "genetic-";

/// Knobs of an evolution run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvolutionParams {
    /// Number of agents, constant over the run.
    pub population_size: usize,
    /// Games each agent plays per generation.
    pub trials_per_agent: usize,
    /// Fraction of the population, counted from the front, replaced each generation.
    pub elite_rate: f64,
    /// Mutation steps applied to each new child.
    pub mutations_per_child: usize,
    /// Genes after the input slots in a freshly created graph.
    pub initial_gene_count: usize,
    /// Input slots per graph, one per board cell.
    pub input_count: usize,
}

impl Default for EvolutionParams {
    fn default() -> Self {
        Self {
            population_size: 31,
            trials_per_agent: 100,
            elite_rate: 1.0,
            mutations_per_child: 1,
            initial_gene_count: 40,
            input_count: genetac_engine::CELL_COUNT,
        }
    }
}

/// Invalid [`EvolutionParams`].
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ParamError {
    #[display("population must hold at least one agent")]
    EmptyPopulation,
    #[display("elite rate must be within [0, 1], got {rate}")]
    EliteRateOutOfRange { rate: f64 },
    #[display("graphs need at least one input slot")]
    NoInputSlots,
    #[display("graphs need at least one gene after the input slots")]
    NoInitialGenes,
}

impl EvolutionParams {
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.population_size == 0 {
            return Err(ParamError::EmptyPopulation);
        }
        if !(0.0..=1.0).contains(&self.elite_rate) {
            return Err(ParamError::EliteRateOutOfRange {
                rate: self.elite_rate,
            });
        }
        if self.input_count == 0 {
            return Err(ParamError::NoInputSlots);
        }
        if self.initial_gene_count == 0 {
            return Err(ParamError::NoInitialGenes);
        }
        Ok(())
    }

    /// Number of leading positions considered for replacement in a population of `len`.
    #[must_use]
    pub fn removal_count(&self, len: usize) -> usize {
        #[expect(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        let count = (len as f64 * self.elite_rate).floor() as usize;
        count.min(len)
    }
}

/// Failure to create a random [`Population`].
#[derive(
    Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum PopulationError {
    #[display("invalid parameters: {_0}")]
    Params(ParamError),
    #[display("invalid initial graph: {_0}")]
    Graph(GraphError),
}

/// Minimum, mean and maximum wins over a population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WinStats {
    pub min: usize,
    pub mean: f64,
    pub max: usize,
}

/// The agents of a run, in population order.
///
/// A population is never empty.
#[derive(Debug, Clone)]
pub struct Population {
    agents: Vec<Agent>,
    next_id: usize,
}

impl Population {
    /// Creates `params.population_size` random agents named `genetic-1`, `genetic-2`, ...
    ///
    /// The parameters are validated first.
    pub fn random<R>(params: &EvolutionParams, rng: &mut R) -> Result<Self, PopulationError>
    where
        R: Rng + ?Sized,
    {
        params.validate()?;
        let mut population = Self {
            agents: Vec::with_capacity(params.population_size),
            next_id: 1,
        };
        for _ in 0..params.population_size {
            let name = population.next_name();
            let agent = Agent::random(
                name,
                params.input_count,
                params.initial_gene_count,
                rng,
            )?;
            population.agents.push(agent);
        }
        Ok(population)
    }

    /// Wraps existing agents. New agents are numbered from `next_id`.
    pub fn from_agents(agents: Vec<Agent>, next_id: usize) -> Result<Self, ParamError> {
        if agents.is_empty() {
            return Err(ParamError::EmptyPopulation);
        }
        Ok(Self { agents, next_id })
    }

    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    fn next_name(&mut self) -> String {
        let name = format!("{AGENT_NAME_PREFIX}{}", self.next_id);
        self.next_id += 1;
        name
    }

    /// Clears every record, then lets each agent in turn play `trials` games against
    /// the baseline.
    pub fn evaluate_fitness<R>(&mut self, trials: usize, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        for agent in &mut self.agents {
            agent.reset_record();
        }
        for agent in &mut self.agents {
            for _ in 0..trials {
                play_against_baseline(agent, rng);
            }
            log::debug!("{} won {} of {}", agent.name(), agent.wins(), agent.games());
        }
    }

    /// Position of the agent with the most wins; the earliest one on ties.
    #[must_use]
    pub fn best_index(&self) -> usize {
        self.agents
            .iter()
            .enumerate()
            .min_by_key(|(i, agent)| (Reverse(agent.wins()), *i))
            .map_or(0, |(i, _)| i)
    }

    #[must_use]
    pub fn champion(&self) -> &Agent {
        &self.agents[self.best_index()]
    }

    /// Agents sorted by wins, best first. Equal agents keep their population order.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<&Agent> {
        let mut agents = self.agents.iter().collect::<Vec<_>>();
        agents.sort_by_key(|agent| Reverse(agent.wins()));
        agents
    }

    #[must_use]
    pub fn win_stats(&self) -> WinStats {
        let wins = self.agents.iter().map(Agent::wins);
        let min = wins.clone().min().unwrap_or(0);
        let max = wins.clone().max().unwrap_or(0);
        #[expect(clippy::cast_precision_loss)]
        let mean = wins.sum::<usize>() as f64 / self.agents.len() as f64;
        WinStats { min, mean, max }
    }

    /// Replaces the leading agents, except the best, with mutants of the best.
    ///
    /// Returns the number of agents replaced.
    pub fn replace_with_mutants<R>(&mut self, params: &EvolutionParams, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
    {
        let best_index = self.best_index();
        let best = self.agents[best_index].clone();
        let removal_count = params.removal_count(self.agents.len());

        let before = self.agents.len();
        let mut position = 0;
        self.agents.retain(|_| {
            let keep = position >= removal_count || position == best_index;
            position += 1;
            keep
        });
        let removed = before - self.agents.len();

        for _ in 0..removed {
            let name = self.next_name();
            let child = best.mutate(name, params.mutations_per_child, rng);
            self.agents.push(child);
        }
        log::debug!(
            "replaced {removed} agents with mutants of {} ({} wins)",
            best.name(),
            best.wins()
        );
        removed
    }
}

/// Summary of one finished generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    pub generation: usize,
    pub champion: String,
    pub wins: usize,
    pub games: usize,
    pub stats: WinStats,
    /// Agents replaced by mutants after the generation was scored.
    pub replaced: usize,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generation {} done. Best is '{}' with {} of {}.",
            self.generation, self.champion, self.wins, self.games
        )
    }
}

/// Drives a population through a fixed number of generations.
#[derive(Debug, Clone)]
pub struct Evolver {
    params: EvolutionParams,
}

impl Evolver {
    pub fn new(params: EvolutionParams) -> Result<Self, ParamError> {
        params.validate()?;
        Ok(Self { params })
    }

    #[must_use]
    pub fn params(&self) -> &EvolutionParams {
        &self.params
    }

    /// Scores the population and, if `replace` is set, refills it with mutants.
    pub fn run_generation<R>(
        &self,
        population: &mut Population,
        generation: usize,
        replace: bool,
        rng: &mut R,
    ) -> GenerationReport
    where
        R: Rng + ?Sized,
    {
        population.evaluate_fitness(self.params.trials_per_agent, rng);
        let champion = population.champion();
        let mut report = GenerationReport {
            generation,
            champion: champion.name().to_owned(),
            wins: champion.wins(),
            games: champion.games(),
            stats: population.win_stats(),
            replaced: 0,
        };
        if replace {
            report.replaced = population.replace_with_mutants(&self.params, rng);
        }
        report
    }

    /// Runs `generations` generations, calling `on_generation` after each one.
    ///
    /// The population is not replaced after the last generation, so its records are
    /// those of the games actually played.
    pub fn run<R, F>(
        &self,
        population: &mut Population,
        generations: usize,
        rng: &mut R,
        mut on_generation: F,
    ) where
        R: Rng + ?Sized,
        F: FnMut(&GenerationReport),
    {
        for generation in 0..generations {
            let is_last = generation + 1 == generations;
            let report = self.run_generation(population, generation, !is_last, rng);
            on_generation(&report);
        }
    }
}

#[cfg(test)]
mod tests {
    use genetac_gp::{Gene, GeneGraph};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn agent(name: &str, move_index: usize, wins: usize) -> Agent {
        let mut genes = vec![Gene::constant(0); 9];
        genes.push(Gene::constant(move_index));
        Agent::new(name, GeneGraph::from_genes(9, genes).unwrap()).with_record(wins, 20)
    }

    fn population(wins: &[usize]) -> Population {
        let agents = wins
            .iter()
            .enumerate()
            .map(|(i, &w)| agent(&format!("a{i}"), i, w))
            .collect();
        Population::from_agents(agents, 100).unwrap()
    }

    fn names(population: &Population) -> Vec<&str> {
        population.agents().iter().map(Agent::name).collect()
    }

    mod params {
        use super::*;

        #[test]
        fn test_default_is_valid() {
            assert!(EvolutionParams::default().validate().is_ok());
        }

        #[test]
        fn test_invalid_params() {
            let base = EvolutionParams::default();
            let cases = [
                (
                    EvolutionParams {
                        population_size: 0,
                        ..base.clone()
                    },
                    ParamError::EmptyPopulation,
                ),
                (
                    EvolutionParams {
                        elite_rate: 1.5,
                        ..base.clone()
                    },
                    ParamError::EliteRateOutOfRange { rate: 1.5 },
                ),
                (
                    EvolutionParams {
                        input_count: 0,
                        ..base.clone()
                    },
                    ParamError::NoInputSlots,
                ),
                (
                    EvolutionParams {
                        initial_gene_count: 0,
                        ..base.clone()
                    },
                    ParamError::NoInitialGenes,
                ),
            ];
            for (params, expected) in cases {
                assert_eq!(params.validate(), Err(expected));
                assert!(Evolver::new(params).is_err());
            }
        }

        #[test]
        fn test_nan_elite_rate_is_rejected() {
            let params = EvolutionParams {
                elite_rate: f64::NAN,
                ..EvolutionParams::default()
            };
            assert!(params.validate().is_err());
        }

        #[test]
        fn test_removal_count_floors() {
            let params = EvolutionParams {
                elite_rate: 0.5,
                ..EvolutionParams::default()
            };
            assert_eq!(params.removal_count(4), 2);
            assert_eq!(params.removal_count(5), 2);
            assert_eq!(params.removal_count(1), 0);
            assert_eq!(EvolutionParams::default().removal_count(31), 31);
        }
    }

    mod selection {
        use super::*;

        #[test]
        fn test_best_index_prefers_earliest_on_tie() {
            assert_eq!(population(&[3, 7, 7, 1]).best_index(), 1);
            assert_eq!(population(&[0, 0, 0]).best_index(), 0);
        }

        #[test]
        fn test_leaderboard_is_stable() {
            let pop = population(&[3, 7, 3, 9]);
            let board = pop
                .leaderboard()
                .into_iter()
                .map(Agent::name)
                .collect::<Vec<_>>();
            assert_eq!(board, ["a3", "a1", "a0", "a2"]);
        }

        #[test]
        fn test_win_stats() {
            let stats = population(&[2, 4, 9]).win_stats();
            assert_eq!((stats.min, stats.max), (2, 9));
            assert!((stats.mean - 5.0).abs() < f64::EPSILON);
        }
    }

    mod replacement {
        use super::*;

        #[test]
        fn test_full_elite_rate_keeps_only_best() {
            let mut pop = population(&[1, 3, 10, 2]);
            let best = pop.agents()[2].clone();
            let params = EvolutionParams::default();
            let mut rng = Pcg32::seed_from_u64(0);

            let replaced = pop.replace_with_mutants(&params, &mut rng);

            assert_eq!(replaced, 3);
            assert_eq!(names(&pop), ["a2", "genetic-100", "genetic-101", "genetic-102"]);
            assert_eq!(pop.agents()[0], best);
            for child in &pop.agents()[1..] {
                assert_eq!((child.wins(), child.games()), (10, 20));
                assert_eq!(child.graph().len(), best.graph().len());
            }
        }

        #[test]
        fn test_partial_elite_rate_replaces_front() {
            let mut pop = population(&[1, 2, 10, 4]);
            let params = EvolutionParams {
                elite_rate: 0.5,
                ..EvolutionParams::default()
            };
            let replaced = pop.replace_with_mutants(&params, &mut Pcg32::seed_from_u64(1));

            assert_eq!(replaced, 2);
            assert_eq!(names(&pop), ["a2", "a3", "genetic-100", "genetic-101"]);
        }

        #[test]
        fn test_best_inside_removal_window_survives() {
            let mut pop = population(&[10, 2, 3, 4]);
            let params = EvolutionParams {
                elite_rate: 0.5,
                ..EvolutionParams::default()
            };
            let replaced = pop.replace_with_mutants(&params, &mut Pcg32::seed_from_u64(2));

            assert_eq!(replaced, 1);
            assert_eq!(names(&pop), ["a0", "a2", "a3", "genetic-100"]);
        }

        #[test]
        fn test_zero_elite_rate_keeps_everyone() {
            let mut pop = population(&[1, 2, 3]);
            let params = EvolutionParams {
                elite_rate: 0.0,
                ..EvolutionParams::default()
            };
            assert_eq!(pop.replace_with_mutants(&params, &mut Pcg32::seed_from_u64(3)), 0);
            assert_eq!(names(&pop), ["a0", "a1", "a2"]);
        }

        #[test]
        fn test_single_agent_population() {
            let mut pop = population(&[5]);
            let params = EvolutionParams::default();
            assert_eq!(pop.replace_with_mutants(&params, &mut Pcg32::seed_from_u64(4)), 0);
            assert_eq!(names(&pop), ["a0"]);
        }
    }

    mod run {
        use super::*;

        fn small_params() -> EvolutionParams {
            EvolutionParams {
                population_size: 5,
                trials_per_agent: 10,
                initial_gene_count: 20,
                ..EvolutionParams::default()
            }
        }

        fn run_once(seed: u64, generations: usize) -> (Population, Vec<GenerationReport>) {
            let params = small_params();
            let evolver = Evolver::new(params.clone()).unwrap();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut pop = Population::random(&params, &mut rng).unwrap();
            let mut reports = vec![];
            evolver.run(&mut pop, generations, &mut rng, |r| reports.push(r.clone()));
            (pop, reports)
        }

        #[test]
        fn test_random_population_names() {
            let mut rng = Pcg32::seed_from_u64(5);
            let pop = Population::random(&small_params(), &mut rng).unwrap();
            assert_eq!(
                names(&pop),
                ["genetic-1", "genetic-2", "genetic-3", "genetic-4", "genetic-5"]
            );
        }

        #[test]
        fn test_random_population_rejects_invalid_params() {
            let mut rng = Pcg32::seed_from_u64(5);
            let empty = EvolutionParams {
                population_size: 0,
                ..small_params()
            };
            assert_eq!(
                Population::random(&empty, &mut rng).unwrap_err(),
                PopulationError::Params(ParamError::EmptyPopulation)
            );

            let no_inputs = EvolutionParams {
                input_count: 0,
                ..small_params()
            };
            assert_eq!(
                Population::random(&no_inputs, &mut rng).unwrap_err(),
                PopulationError::Params(ParamError::NoInputSlots)
            );
        }

        #[test]
        fn test_evaluate_fitness_resets_records() {
            let mut pop = population(&[50, 60]);
            pop.evaluate_fitness(7, &mut Pcg32::seed_from_u64(6));
            for agent in pop.agents() {
                assert_eq!(agent.games(), 7);
                assert!(agent.wins() <= 7);
            }
        }

        #[test]
        fn test_reports_and_final_generation() {
            let (pop, reports) = run_once(7, 4);

            assert_eq!(reports.len(), 4);
            assert_eq!(pop.len(), 5);
            for (i, report) in reports.iter().enumerate() {
                assert_eq!(report.generation, i);
                assert_eq!(report.games, 10);
                assert!(report.stats.min <= report.wins && report.wins == report.stats.max);
            }
            assert_eq!(reports.last().unwrap().replaced, 0);
            assert!(reports[..3].iter().all(|r| r.replaced == 4));

            // No replacement after the last generation: every agent was scored.
            let last = reports.last().unwrap();
            assert_eq!(pop.champion().name(), last.champion);
            assert!(pop.agents().iter().all(|a| a.games() == 10));
        }

        #[test]
        fn test_champion_survives_into_next_generation() {
            let params = small_params();
            let evolver = Evolver::new(params.clone()).unwrap();
            let mut rng = Pcg32::seed_from_u64(8);
            let mut pop = Population::random(&params, &mut rng).unwrap();

            for generation in 0..5 {
                let report = evolver.run_generation(&mut pop, generation, false, &mut rng);
                let champion = pop.champion().clone();
                assert_eq!(champion.name(), report.champion);
                pop.replace_with_mutants(&params, &mut rng);
                assert!(pop.agents().iter().any(|a| a == &champion));
            }
        }

        #[test]
        fn test_same_seed_same_run() {
            let (a, reports_a) = run_once(9, 3);
            let (b, reports_b) = run_once(9, 3);
            assert_eq!(reports_a, reports_b);
            assert_eq!(a.agents(), b.agents());
        }

        #[test]
        fn test_report_display() {
            let report = GenerationReport {
                generation: 12,
                champion: "genetic-340".to_owned(),
                wins: 71,
                games: 100,
                stats: WinStats {
                    min: 10,
                    mean: 40.0,
                    max: 71,
                },
                replaced: 30,
            };
            assert_eq!(
                report.to_string(),
                "Generation 12 done. Best is 'genetic-340' with 71 of 100."
            );
        }
    }
}
