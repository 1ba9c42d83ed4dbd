//! Evolution of gene-graph agents against a random baseline.
//!
//! This crate turns game outcomes into selection pressure on the gene graphs of
//! [`genetac_gp`]. It implements a (1 + λ) style loop: every generation the best agent
//! survives unchanged and the rest of the population is replaced by its mutants.
//!
//! # How Training Works
//!
//! 1. **Population** - Create agents with random gene graphs ([`Population::random`])
//! 2. **Evaluation** - Each agent plays a fixed number of games as X against a fresh
//!    [`RandomPlayer`](genetac_engine::RandomPlayer) ([`Population::evaluate_fitness`])
//! 3. **Selection** - The agent with the most wins is the champion; ties go to the
//!    earlier position
//! 4. **Replacement** - The first `⌊N × elite_rate⌋` agents, except the champion, are
//!    replaced by mutants of the champion ([`Population::replace_with_mutants`])
//! 5. **Repeat** - For a fixed number of generations ([`Evolver::run`])
//!
//! After the loop, [`evaluate_against_baseline`] replays the champion against the
//! baseline to report its final strength.
//!
//! # Modules
//!
//! - [`agent`] - An agent: a gene graph with a name and win counters
//! - [`mutation`] - The single-step mutation operator
//! - [`evolution`] - Population, parameters and the generational loop
//! - [`baseline`] - Games against the random baseline
//! - [`seed`] - Serializable seed for reproducible runs
//!
//! # Example
//!
//! ```
//! use genetac_training::{EvolutionParams, Evolver, Population, RunSeed};
//!
//! let params = EvolutionParams {
//!     population_size: 4,
//!     trials_per_agent: 5,
//!     ..EvolutionParams::default()
//! };
//! let evolver = Evolver::new(params.clone())?;
//! let mut rng = RunSeed::from_bytes([7; 16]).rng();
//! let mut population = Population::random(&params, &mut rng)?;
//!
//! let mut reports = vec![];
//! evolver.run(&mut population, 3, &mut rng, |report| reports.push(report.clone()));
//!
//! assert_eq!(reports.len(), 3);
//! assert_eq!(population.len(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{agent::*, baseline::*, evolution::*, mutation::*, seed::*};

pub mod agent;
pub mod baseline;
pub mod evolution;
pub mod mutation;
pub mod seed;
