use climber_search::{HillClimber, SearchSeed, benchmark::Benchmark, report::Silent};
use rand::Rng as _;

use crate::problem::{GuessPassword, OneMax, Problem};

use super::{DEFAULT_ONE_MAX_LENGTH, DEFAULT_PASSWORD};

/// Problem to benchmark, spelled like the matching subcommand.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ProblemKind {
    #[default]
    GuessPassword,
    OneMax,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct BenchmarkArg {
    /// Problem to benchmark
    #[arg(long, value_enum, default_value_t = ProblemKind::default())]
    problem: ProblemKind,
    /// Number of searches to time
    #[arg(long, default_value_t = Benchmark::default().runs)]
    runs: usize,
    /// Password to recreate
    #[arg(long, default_value = DEFAULT_PASSWORD)]
    target: String,
    /// Number of bits for one max
    #[arg(long, default_value_t = DEFAULT_ONE_MAX_LENGTH)]
    length: usize,
}

pub(crate) fn run(arg: &BenchmarkArg) -> anyhow::Result<()> {
    match arg.problem {
        ProblemKind::GuessPassword => benchmark(&GuessPassword::new(&arg.target)?, arg.runs),
        ProblemKind::OneMax => benchmark(&OneMax::new(arg.length)?, arg.runs),
    }
}

fn benchmark<P>(problem: &P, runs: usize) -> anyhow::Result<()>
where
    P: Problem,
{
    eprintln!("Benchmarking {} over {runs} runs", problem.name());
    let climber = HillClimber::new(problem.sequence_length(), problem.target_fitness());
    let mut rng = rand::rng();

    let stats = Benchmark { runs }.run(
        || {
            let seed: SearchSeed = rng.random();
            climber.climb(
                problem.alphabet(),
                &mut seed.rng(),
                |genes: &[P::Gene]| problem.fitness(genes),
                &mut Silent,
            )
        },
        |progress| {
            println!(
                "{} {:3.2} {:3.2}",
                progress.run, progress.mean_secs, progress.std_dev_secs
            );
        },
    )?;

    if let Some(stats) = stats {
        eprintln!("Duration Stats (secs):");
        eprintln!("  Min:    {:.4}", stats.min);
        eprintln!("  Max:    {:.4}", stats.max);
        eprintln!("  Mean:   {:.4}", stats.mean);
        eprintln!("  Median: {:.4}", stats.median);
        eprintln!("  StdDev: {:.4}", stats.std_dev);
    }
    Ok(())
}
