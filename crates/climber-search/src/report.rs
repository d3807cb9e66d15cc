//! Reporting of accepted candidates.
//!
//! The hill climber hands every accepted candidate (the initial one included) to a
//! [`Reporter`] together with the instant the search started. Reporters only see
//! shared references, so they cannot influence the search.

use std::time::{Duration, Instant};

use crate::Candidate;

/// Receives each accepted candidate.
///
/// Implemented for any `FnMut(&Candidate<G>, Instant)` closure.
pub trait Reporter<G> {
    fn report(&mut self, candidate: &Candidate<G>, started_at: Instant);
}

impl<G, F> Reporter<G> for F
where
    F: FnMut(&Candidate<G>, Instant),
{
    fn report(&mut self, candidate: &Candidate<G>, started_at: Instant) {
        self(candidate, started_at);
    }
}

/// A reporter that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl<G> Reporter<G> for Silent {
    fn report(&mut self, _candidate: &Candidate<G>, _started_at: Instant) {}
}

/// One accepted candidate and the time elapsed since the search started.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceEntry<G> {
    pub candidate: Candidate<G>,
    pub elapsed: Duration,
}

/// A reporter that records every accepted candidate in order.
///
/// # Example
///
/// ```
/// use climber_search::{Alphabet, HillClimber, SearchSeed, report::TraceRecorder};
///
/// let alphabet = Alphabet::new([0u8, 1]).unwrap();
/// let mut trace = TraceRecorder::new();
/// let outcome = HillClimber::new(8, 8.0)
///     .climb(
///         &alphabet,
///         &mut SearchSeed::from_u64(1).rng(),
///         |genes: &[u8]| genes.iter().map(|g| f64::from(*g)).sum(),
///         &mut trace,
///     )
///     .unwrap();
///
/// assert_eq!(trace.entries().last().unwrap().candidate, outcome.best);
/// ```
#[derive(Debug, Clone)]
pub struct TraceRecorder<G> {
    entries: Vec<TraceEntry<G>>,
}

impl<G> Default for TraceRecorder<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> TraceRecorder<G> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[TraceEntry<G>] {
        &self.entries
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<TraceEntry<G>> {
        self.entries
    }

    /// Fitness of each recorded candidate, in acceptance order.
    pub fn fitness_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.candidate.fitness())
    }
}

impl<G> Reporter<G> for TraceRecorder<G>
where
    G: Clone,
{
    fn report(&mut self, candidate: &Candidate<G>, started_at: Instant) {
        self.entries.push(TraceEntry {
            candidate: candidate.clone(),
            elapsed: started_at.elapsed(),
        });
    }
}
