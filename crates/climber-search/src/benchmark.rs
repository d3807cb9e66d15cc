//! Repeated timing of a search.
//!
//! [`Benchmark`] runs a function a fixed number of times, measuring each run's
//! wall-clock duration. After every run it reports the running mean and standard
//! deviation, so long benchmarks show progress as they go. The standard deviation is
//! reported as zero until at least three samples exist.
//!
//! The function under test should be silent: pass a [`Silent`](crate::report::Silent)
//! reporter to the search so printing does not skew the timings.

use std::{
    hint,
    time::{Duration, Instant},
};

use climber_stats::{descriptive::DescriptiveStats, running::RunningStats};

/// Progress after a single benchmark run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkProgress {
    /// 1-based run number.
    pub run: usize,
    /// Duration of this run.
    pub elapsed: Duration,
    /// Mean duration of all runs so far, in seconds.
    pub mean_secs: f64,
    /// Standard deviation of all runs so far, in seconds.
    pub std_dev_secs: f64,
}

/// Times a function over a number of runs.
///
/// # Example
///
/// ```
/// use climber_search::{Alphabet, HillClimber, benchmark::Benchmark, report::Silent};
///
/// let alphabet = Alphabet::new([0u8, 1]).unwrap();
/// let climber = HillClimber::new(16, 16.0);
/// let mut progress = vec![];
/// let stats = Benchmark { runs: 5 }
///     .run(
///         || {
///             climber.climb(
///                 &alphabet,
///                 &mut rand::rng(),
///                 |genes: &[u8]| genes.iter().map(|g| f64::from(*g)).sum(),
///                 &mut Silent,
///             )
///         },
///         |p| progress.push(*p),
///     )
///     .unwrap()
///     .unwrap();
///
/// assert_eq!(stats.count, 5);
/// assert_eq!(progress.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benchmark {
    pub runs: usize,
}

impl Default for Benchmark {
    fn default() -> Self {
        Self { runs: 100 }
    }
}

impl Benchmark {
    /// Runs `f` [`Self::runs`] times, calling `on_run` after each run.
    ///
    /// Returns statistics over all run durations in seconds, or `None` if `runs` is
    /// zero. The first error returned by `f` aborts the benchmark.
    pub fn run<T, E, F, P>(&self, mut f: F, mut on_run: P) -> Result<Option<DescriptiveStats>, E>
    where
        F: FnMut() -> Result<T, E>,
        P: FnMut(&BenchmarkProgress),
    {
        let mut running = RunningStats::new();
        let mut samples = Vec::with_capacity(self.runs);
        for i in 0..self.runs {
            let start = Instant::now();
            let _ = hint::black_box(f()?);
            let elapsed = start.elapsed();

            let secs = elapsed.as_secs_f64();
            running.push(secs);
            samples.push(secs);
            let progress = BenchmarkProgress {
                run: i + 1,
                elapsed,
                mean_secs: running.mean(),
                std_dev_secs: if running.count() > 2 {
                    running.std_dev()
                } else {
                    0.0
                },
            };
            log::trace!("benchmark run {} took {elapsed:?}", progress.run);
            on_run(&progress);
        }
        Ok(DescriptiveStats::new(samples))
    }
}
