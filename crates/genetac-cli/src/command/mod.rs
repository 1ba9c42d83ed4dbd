use clap::{Parser, Subcommand};

use self::{baseline::BaselineArg, evolve::EvolveArg};

mod baseline;
mod evolve;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Evolve tic-tac-toe agents against a random player
    Evolve(#[clap(flatten)] EvolveArg),
    /// Play random players against each other for reference win rates
    Baseline(#[clap(flatten)] BaselineArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Evolve(EvolveArg::default())) {
        Mode::Evolve(arg) => evolve::run(&arg)?,
        Mode::Baseline(arg) => baseline::run(&arg)?,
    }
    Ok(())
}
