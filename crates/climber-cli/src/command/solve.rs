use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use anyhow::Context as _;
use climber_search::{
    Candidate, HillClimber, Reporter, SearchLimits, SearchSeed, SearchStatus, report::Silent,
};
use rand::Rng as _;

use crate::{
    model::search_record::SearchRecord,
    problem::{GuessPassword, OneMax, Problem},
};

use super::{DEFAULT_ONE_MAX_LENGTH, DEFAULT_PASSWORD};

/// Options shared by every search command.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SearchArg {
    /// Seed as 32 hex characters (random if omitted)
    #[arg(long)]
    pub(crate) seed: Option<SearchSeed>,
    /// Give up after this many mutations
    #[arg(long)]
    max_iterations: Option<u64>,
    /// Give up after this many seconds
    #[arg(long)]
    max_duration: Option<f64>,
    /// Write a JSON summary to this path (`-` writes nothing)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Do not print accepted candidates
    #[arg(long)]
    quiet: bool,
}

impl SearchArg {
    pub(crate) fn limits(&self) -> anyhow::Result<SearchLimits> {
        let max_duration = self
            .max_duration
            .map(|secs| {
                Duration::try_from_secs_f64(secs)
                    .with_context(|| format!("Invalid --max-duration: {secs}"))
            })
            .transpose()?;
        Ok(SearchLimits {
            max_iterations: self.max_iterations,
            max_duration,
        })
    }

    /// Path to save the search record to; `None` when absent or `-`.
    pub(crate) fn output_path(&self) -> Option<&Path> {
        self.output
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GuessPasswordArg {
    /// Password to recreate
    #[arg(long, default_value = DEFAULT_PASSWORD)]
    target: String,
    #[clap(flatten)]
    search: SearchArg,
}

impl Default for GuessPasswordArg {
    fn default() -> Self {
        Self {
            target: DEFAULT_PASSWORD.to_owned(),
            search: SearchArg::default(),
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct OneMaxArg {
    /// Number of bits
    #[arg(long, default_value_t = DEFAULT_ONE_MAX_LENGTH)]
    pub(crate) length: usize,
    #[clap(flatten)]
    pub(crate) search: SearchArg,
}

pub(crate) fn run_guess_password(arg: &GuessPasswordArg) -> anyhow::Result<()> {
    let problem = GuessPassword::new(&arg.target)?;
    solve(&problem, &arg.search)
}

pub(crate) fn run_one_max(arg: &OneMaxArg) -> anyhow::Result<()> {
    let problem = OneMax::new(arg.length)?;
    solve(&problem, &arg.search)
}

fn solve<P>(problem: &P, arg: &SearchArg) -> anyhow::Result<()>
where
    P: Problem,
{
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let climber = HillClimber::new(problem.sequence_length(), problem.target_fitness())
        .with_limits(arg.limits()?);
    eprintln!("Solving {} (seed {seed})", problem.name());

    let mut printer = |candidate: &Candidate<P::Gene>, started_at: Instant| {
        println!(
            "{}",
            improvement_line(problem, candidate, started_at.elapsed())
        );
    };
    let mut silent = Silent;
    let reporter: &mut dyn Reporter<P::Gene> = if arg.quiet {
        &mut silent
    } else {
        &mut printer
    };

    let started_at = Instant::now();
    let outcome = climber.climb_from(
        started_at,
        problem.alphabet(),
        &mut seed.rng(),
        |genes: &[P::Gene]| problem.fitness(genes),
        reporter,
    )?;
    let elapsed = started_at.elapsed();

    match outcome.status {
        SearchStatus::Reached => eprintln!("Target reached"),
        SearchStatus::Stalled(reason) => eprintln!("Search stalled: {reason}"),
    }
    eprintln!("  Best:         {}", problem.render(outcome.best.genes()));
    eprintln!(
        "  Fitness:      {} / {}",
        outcome.best.fitness(),
        problem.target_fitness()
    );
    eprintln!("  Iterations:   {}", outcome.iterations);
    eprintln!("  Improvements: {}", outcome.improvements);
    eprintln!("  Elapsed:      {elapsed:?}");

    if let Some(path) = arg.output_path() {
        SearchRecord::new(problem, seed, &outcome, elapsed).save(path)?;
        eprintln!("Result saved to {}", path.display());
    }

    Ok(())
}

/// Formats an accepted candidate as `genes, fitness, elapsed`.
fn improvement_line<P>(problem: &P, candidate: &Candidate<P::Gene>, elapsed: Duration) -> String
where
    P: Problem,
{
    format!(
        "{}, {}, {elapsed:?}",
        problem.render(candidate.genes()),
        candidate.fitness()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_default_unbounded() {
        assert_eq!(
            SearchArg::default().limits().unwrap(),
            SearchLimits::UNBOUNDED
        );
    }

    #[test]
    fn test_output_dash_means_no_file() {
        let dash = SearchArg {
            output: Some(PathBuf::from("-")),
            ..SearchArg::default()
        };
        assert_eq!(dash.output_path(), None);
        assert_eq!(SearchArg::default().output_path(), None);

        let file = SearchArg {
            output: Some(PathBuf::from("out.json")),
            ..SearchArg::default()
        };
        assert_eq!(file.output_path(), Some(Path::new("out.json")));
    }

    #[test]
    fn test_solve_with_dash_output_writes_nothing() {
        let arg = OneMaxArg {
            length: 8,
            search: SearchArg {
                seed: Some(SearchSeed::from_u64(3)),
                output: Some(PathBuf::from("-")),
                quiet: true,
                ..SearchArg::default()
            },
        };
        run_one_max(&arg).unwrap();
        assert!(!Path::new("-").exists());
    }

    #[test]
    fn test_improvement_line_format() {
        let problem = GuessPassword::new("Hi!").unwrap();
        let outcome = HillClimber::new(3, 0.0)
            .climb(
                problem.alphabet(),
                &mut SearchSeed::from_u64(4).rng(),
                |genes: &[char]| problem.fitness(genes),
                &mut Silent,
            )
            .unwrap();
        let genes = problem.render(outcome.best.genes());
        let line = improvement_line(&problem, &outcome.best, Duration::from_millis(1500));
        assert_eq!(
            line,
            format!("{genes}, {}, 1.5s", outcome.best.fitness())
        );
        assert_eq!(genes.chars().count(), 3);
    }

    #[test]
    fn test_negative_duration_is_rejected() {
        let arg = SearchArg {
            max_duration: Some(-1.0),
            ..SearchArg::default()
        };
        assert!(arg.limits().is_err());
    }

    #[test]
    fn test_solve_seeded_one_max_quietly() {
        let arg = OneMaxArg {
            length: 12,
            search: SearchArg {
                seed: Some(SearchSeed::from_u64(1)),
                quiet: true,
                ..SearchArg::default()
            },
        };
        run_one_max(&arg).unwrap();
    }

    #[test]
    fn test_solve_writes_record() {
        let path =
            std::env::temp_dir().join(format!("climber-record-{}.json", std::process::id()));
        let arg = GuessPasswordArg {
            target: "Hi!".to_owned(),
            search: SearchArg {
                seed: Some(SearchSeed::from_u64(2)),
                output: Some(path.clone()),
                quiet: true,
                ..SearchArg::default()
            },
        };
        run_guess_password(&arg).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        let record: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(record["problem"], "guess-password");
        assert_eq!(record["best_genes"], "Hi!");
        assert_eq!(record["status"], "Reached");
        assert_eq!(record["seed"], "00000000000000000000000000000002");
    }

    #[test]
    fn test_empty_password_is_invalid_length() {
        let arg = GuessPasswordArg {
            target: String::new(),
            search: SearchArg::default(),
        };
        let err = run_guess_password(&arg).unwrap_err();
        assert!(err.to_string().contains("sequence length"));
    }
}
