use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::Path,
    time::Duration,
};

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use climber_search::{SearchOutcome, SearchSeed, SearchStatus};
use serde::Serialize;

use crate::problem::Problem;

/// Summary of a finished search, saved with `--output`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SearchRecord {
    pub problem: String,
    pub seed: SearchSeed,
    pub finished_at: DateTime<Utc>,
    pub status: SearchStatus,
    pub iterations: u64,
    pub improvements: u64,
    pub best_genes: String,
    pub best_fitness: f64,
    pub target_fitness: f64,
    pub elapsed_secs: f64,
}

impl SearchRecord {
    pub(crate) fn new<P>(
        problem: &P,
        seed: SearchSeed,
        outcome: &SearchOutcome<P::Gene>,
        elapsed: Duration,
    ) -> Self
    where
        P: Problem,
    {
        Self {
            problem: problem.name().to_owned(),
            seed,
            finished_at: Utc::now(),
            status: outcome.status,
            iterations: outcome.iterations,
            improvements: outcome.improvements,
            best_genes: problem.render(outcome.best.genes()),
            best_fitness: outcome.best.fitness(),
            target_fitness: problem.target_fitness(),
            elapsed_secs: elapsed.as_secs_f64(),
        }
    }

    /// Writes the record as pretty-printed JSON followed by a newline.
    pub(crate) fn save(&self, path: &Path) -> anyhow::Result<()> {
        let save = || -> std::io::Result<()> {
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, self)?;
            writeln!(writer)?;
            writer.flush()
        };
        save().with_context(|| format!("Failed to save search record: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use climber_search::{HillClimber, report::Silent};

    use crate::problem::OneMax;

    use super::*;

    fn one_max_record(seed: SearchSeed) -> SearchRecord {
        let problem = OneMax::new(6).unwrap();
        let outcome = HillClimber::new(6, 6.0)
            .climb(
                problem.alphabet(),
                &mut seed.rng(),
                |genes: &[u8]| problem.fitness(genes),
                &mut Silent,
            )
            .unwrap();
        SearchRecord::new(&problem, seed, &outcome, Duration::from_millis(250))
    }

    #[test]
    fn test_record_from_outcome() {
        let record = one_max_record(SearchSeed::from_u64(3));
        assert_eq!(record.problem, "one-max");
        assert_eq!(record.status, SearchStatus::Reached);
        assert_eq!(record.best_genes, "111111");
        assert_eq!(record.best_fitness, 6.0);
        assert_eq!(record.target_fitness, 6.0);
        assert_eq!(record.elapsed_secs, 0.25);
    }

    #[test]
    fn test_save_writes_json_line() {
        let path = env::temp_dir().join(format!("climber-save-{}.json", process::id()));
        one_max_record(SearchSeed::from_u64(4)).save(&path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(text.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["seed"], "00000000000000000000000000000004");
        assert_eq!(value["status"], "Reached");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let path = env::temp_dir()
            .join("climber-missing-dir")
            .join("nested")
            .join("out.json");
        let err = one_max_record(SearchSeed::from_u64(5))
            .save(&path)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to save search record"));
    }
}
