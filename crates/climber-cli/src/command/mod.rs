use clap::{Parser, Subcommand};

use self::{
    benchmark::BenchmarkArg,
    solve::{GuessPasswordArg, OneMaxArg},
};

mod benchmark;
mod solve;

const DEFAULT_PASSWORD: &str = "Hello World!";
const DEFAULT_ONE_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Which problem to solve
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Recreate a target string by hill climbing
    GuessPassword(#[clap(flatten)] GuessPasswordArg),
    /// Turn a random bit string into all ones
    OneMax(#[clap(flatten)] OneMaxArg),
    /// Time repeated searches and report running mean / std-dev
    Benchmark(#[clap(flatten)] BenchmarkArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args
        .mode
        .unwrap_or(Mode::GuessPassword(GuessPasswordArg::default()))
    {
        Mode::GuessPassword(arg) => solve::run_guess_password(&arg)?,
        Mode::OneMax(arg) => solve::run_one_max(&arg)?,
        Mode::Benchmark(arg) => benchmark::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_guess_password() {
        let args = CommandArgs::try_parse_from(["climber"]).unwrap();
        assert!(args.mode.is_none());
    }

    #[test]
    fn test_parse_search_options() {
        let args = CommandArgs::try_parse_from([
            "climber",
            "one-max",
            "--length",
            "16",
            "--seed",
            "000000000000000000000000000000ff",
            "--max-iterations",
            "500",
        ])
        .unwrap();
        let Some(Mode::OneMax(arg)) = args.mode else {
            panic!("expected one-max");
        };
        assert_eq!(arg.length, 16);
        assert_eq!(
            arg.search.seed.map(|s| s.to_string()).as_deref(),
            Some("000000000000000000000000000000ff")
        );
        assert_eq!(arg.search.limits().unwrap().max_iterations, Some(500));
    }

    #[test]
    fn test_invalid_seed_is_rejected() {
        assert!(CommandArgs::try_parse_from(["climber", "one-max", "--seed", "xyz"]).is_err());
    }

    #[test]
    fn test_parse_benchmark() {
        let args = CommandArgs::try_parse_from([
            "climber",
            "benchmark",
            "--problem",
            "one-max",
            "--runs",
            "3",
        ])
        .unwrap();
        assert!(matches!(args.mode, Some(Mode::Benchmark(_))));
    }
}
