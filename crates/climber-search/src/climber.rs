//! The hill-climbing search loop.
//!
//! [`HillClimber`] holds the search parameters and runs the loop against an
//! [`Alphabet`], a generator, a fitness function and a [`Reporter`]. [`search`] is a
//! one-call shortcut that validates raw inputs and seeds the generator itself.
//!
//! # Acceptance Rule
//!
//! A child replaces the current best only if its fitness is *strictly* greater. Equal
//! fitness children are discarded, so the reported fitness values form a strictly
//! increasing sequence and the search never drifts sideways on a plateau. A `NaN`
//! fitness never compares greater and is always discarded.
//!
//! # Limits
//!
//! By default the loop runs until the target is reached, however long that takes.
//! [`SearchLimits`] adds an opt-in iteration cap and/or time budget; when either trips
//! the search returns the best candidate so far with [`SearchStatus::Stalled`].

use std::{
    cmp::Ordering,
    time::{Duration, Instant},
};

use rand::Rng;
use serde::Serialize;

use crate::{Alphabet, Candidate, Reporter, SearchError, SearchSeed, genes};

/// Opt-in guards against searches that never reach their target.
///
/// Both limits are `None` by default, which means the search is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of mutations to try.
    pub max_iterations: Option<u64>,
    /// Maximum wall-clock time since the search started.
    pub max_duration: Option<Duration>,
}

impl SearchLimits {
    pub const UNBOUNDED: Self = Self {
        max_iterations: None,
        max_duration: None,
    };

    fn check(&self, iterations: u64, started_at: Instant) -> Option<StallReason> {
        if self.max_iterations.is_some_and(|max| iterations >= max) {
            return Some(StallReason::IterationLimit);
        }
        if self
            .max_duration
            .is_some_and(|max| started_at.elapsed() >= max)
        {
            return Some(StallReason::TimeLimit);
        }
        None
    }
}

/// Why a bounded search gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, Serialize)]
pub enum StallReason {
    #[display("iteration limit reached")]
    IterationLimit,
    #[display("time limit reached")]
    TimeLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant, Serialize)]
pub enum SearchStatus {
    /// The best candidate's fitness is at or above the target.
    Reached,
    /// A [`SearchLimits`] guard tripped before the target was reached.
    Stalled(StallReason),
}

/// Result of a completed search.
#[derive(Debug, Clone)]
pub struct SearchOutcome<G> {
    /// The best candidate found.
    pub best: Candidate<G>,
    /// Number of mutations tried.
    pub iterations: u64,
    /// Number of mutations accepted.
    pub improvements: u64,
    pub status: SearchStatus,
}

/// Parameters of a hill-climbing search.
///
/// # Example
///
/// ```
/// use climber_search::{Alphabet, HillClimber, SearchSeed, report::Silent};
///
/// // One max: maximize the number of ones.
/// let alphabet = Alphabet::new([0u8, 1]).unwrap();
/// let outcome = HillClimber::new(10, 10.0)
///     .climb(
///         &alphabet,
///         &mut SearchSeed::from_u64(3).rng(),
///         |genes: &[u8]| genes.iter().map(|g| f64::from(*g)).sum(),
///         &mut Silent,
///     )
///     .unwrap();
///
/// assert!(outcome.status.is_reached());
/// assert_eq!(outcome.best.genes(), &[1; 10]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HillClimber {
    /// Number of genes in every candidate.
    pub sequence_length: usize,
    /// Fitness at or above which the search stops.
    pub target_fitness: f64,
    pub limits: SearchLimits,
}

impl HillClimber {
    /// Creates an unbounded search.
    #[must_use]
    pub fn new(sequence_length: usize, target_fitness: f64) -> Self {
        Self {
            sequence_length,
            target_fitness,
            limits: SearchLimits::UNBOUNDED,
        }
    }

    #[must_use]
    pub fn with_limits(self, limits: SearchLimits) -> Self {
        Self { limits, ..self }
    }

    /// Runs the search with an infallible fitness function.
    ///
    /// Elapsed times passed to the reporter are measured from the moment this method is
    /// called. Fails with [`SearchError::InvalidLength`] before generating anything if
    /// `sequence_length` is zero.
    pub fn climb<G, R, F, P>(
        &self,
        alphabet: &Alphabet<G>,
        rng: &mut R,
        fitness: F,
        reporter: &mut P,
    ) -> Result<SearchOutcome<G>, SearchError>
    where
        G: Clone + PartialEq,
        R: Rng + ?Sized,
        F: FnMut(&[G]) -> f64,
        P: Reporter<G> + ?Sized,
    {
        self.climb_from(Instant::now(), alphabet, rng, fitness, reporter)
    }

    /// Like [`Self::climb`], with elapsed times measured from `started_at`.
    pub fn climb_from<G, R, F, P>(
        &self,
        started_at: Instant,
        alphabet: &Alphabet<G>,
        rng: &mut R,
        mut fitness: F,
        reporter: &mut P,
    ) -> Result<SearchOutcome<G>, SearchError>
    where
        G: Clone + PartialEq,
        R: Rng + ?Sized,
        F: FnMut(&[G]) -> f64,
        P: Reporter<G> + ?Sized,
    {
        self.try_climb_from(
            started_at,
            alphabet,
            rng,
            |genes: &[G]| Ok::<_, SearchError>(fitness(genes)),
            reporter,
        )
    }

    /// Runs the search with a fallible fitness function.
    ///
    /// The first fitness error aborts the search and is returned unchanged. Configuration
    /// errors are converted into the caller's error type.
    pub fn try_climb<G, R, F, P, E>(
        &self,
        alphabet: &Alphabet<G>,
        rng: &mut R,
        fitness: F,
        reporter: &mut P,
    ) -> Result<SearchOutcome<G>, E>
    where
        G: Clone + PartialEq,
        R: Rng + ?Sized,
        F: FnMut(&[G]) -> Result<f64, E>,
        P: Reporter<G> + ?Sized,
        E: From<SearchError>,
    {
        self.try_climb_from(Instant::now(), alphabet, rng, fitness, reporter)
    }

    /// Like [`Self::try_climb`], with elapsed times measured from `started_at`.
    pub fn try_climb_from<G, R, F, P, E>(
        &self,
        started_at: Instant,
        alphabet: &Alphabet<G>,
        rng: &mut R,
        mut fitness: F,
        reporter: &mut P,
    ) -> Result<SearchOutcome<G>, E>
    where
        G: Clone + PartialEq,
        R: Rng + ?Sized,
        F: FnMut(&[G]) -> Result<f64, E>,
        P: Reporter<G> + ?Sized,
        E: From<SearchError>,
    {
        if self.sequence_length == 0 {
            return Err(SearchError::InvalidLength.into());
        }

        let initial = genes::random(rng, alphabet, self.sequence_length);
        let mut best = Candidate::evaluate(initial, &mut fitness)?;
        reporter.report(&best, started_at);

        let mut iterations = 0;
        let mut improvements = 0;
        let status = loop {
            if best.fitness() >= self.target_fitness {
                break SearchStatus::Reached;
            }
            if let Some(reason) = self.limits.check(iterations, started_at) {
                log::info!(
                    "search stalled after {iterations} iterations ({reason}), best fitness {}",
                    best.fitness()
                );
                break SearchStatus::Stalled(reason);
            }

            iterations += 1;
            let child = genes::mutate(rng, alphabet, best.genes());
            let child = Candidate::evaluate(child, &mut fitness)?;
            if child.fitness().partial_cmp(&best.fitness()) != Some(Ordering::Greater) {
                continue;
            }

            improvements += 1;
            log::debug!(
                "iteration {iterations}: fitness {} -> {}",
                best.fitness(),
                child.fitness()
            );
            reporter.report(&child, started_at);
            best = child;
        };

        Ok(SearchOutcome {
            best,
            iterations,
            improvements,
            status,
        })
    }
}

/// Searches for a gene sequence whose fitness reaches `target_fitness`.
///
/// Validates `symbols` (must be non-empty) and `sequence_length` (must be positive)
/// before generating anything, seeds a [`rand_pcg::Pcg32`] from `seed` (a fresh random
/// seed when `None`) and runs an unbounded [`HillClimber`].
///
/// This call does not return if the target is unreachable. Use [`HillClimber`] with
/// [`SearchLimits`] to bound it.
pub fn search<G, F, P>(
    fitness: F,
    target_fitness: f64,
    symbols: impl IntoIterator<Item = G>,
    sequence_length: usize,
    reporter: &mut P,
    seed: Option<SearchSeed>,
) -> Result<Candidate<G>, SearchError>
where
    G: Clone + PartialEq,
    F: FnMut(&[G]) -> f64,
    P: Reporter<G> + ?Sized,
{
    let alphabet = Alphabet::new(symbols)?;
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = seed.rng();
    let outcome = HillClimber::new(sequence_length, target_fitness).climb(
        &alphabet,
        &mut rng,
        fitness,
        reporter,
    )?;
    Ok(outcome.best)
}
