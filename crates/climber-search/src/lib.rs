//! Mutation-driven hill climbing over gene sequences.
//!
//! The search starts from a random candidate, repeatedly replaces a single gene of the
//! current best candidate, and keeps the child only if its fitness is strictly higher.
//! It stops as soon as the best fitness reaches the target.
//!
//! # How a Search Works
//!
//! 1. **Initial candidate** - Sample `sequence_length` genes from the alphabet in chunks
//!    drawn without replacement (see [`genes::random`])
//! 2. **Report** - Pass the initial candidate to the [`Reporter`]
//! 3. **Mutate** - Replace one random gene with a different symbol (see [`genes::mutate`])
//! 4. **Accept or discard** - Keep the child only if it is strictly fitter, reporting it
//! 5. **Repeat** - Until the target fitness is reached or an opt-in limit trips
//!
//! # Architecture
//!
//! ```text
//! Alphabet ──samples──> genes ──scored by──> fitness fn ──> Candidate
//!                                                             │
//!            HillClimber <──accepts strictly fitter children──┘
//!                 │ reports
//!                 ▼
//!             Reporter (printing, TraceRecorder, ...)
//! ```
//!
//! # Reproducibility
//!
//! All randomness comes from the generator passed to [`HillClimber::climb`]. Seeding a
//! [`rand_pcg::Pcg32`] from a [`SearchSeed`] reproduces a run exactly, provided the
//! fitness function is deterministic. Wall-clock time is only used for reporting and
//! for the optional [`SearchLimits::max_duration`] guard.
//!
//! # Termination
//!
//! Without limits the search loops until the target is reached. If the target can never
//! be reached under the given alphabet and fitness function, the search never returns.
//! Set [`SearchLimits`] to get a [`SearchStatus::Stalled`] outcome instead.
//!
//! # Example
//!
//! ```
//! use climber_search::{SearchSeed, search};
//!
//! let target = "Hi!";
//! let fitness = |genes: &[char]| {
//!     genes.iter().zip(target.chars()).filter(|(g, t)| **g == *t).count() as f64
//! };
//! let best = search(
//!     fitness,
//!     3.0,
//!     (' '..='~').collect::<Vec<_>>(),
//!     3,
//!     &mut climber_search::report::Silent,
//!     Some(SearchSeed::from_u64(42)),
//! )
//! .unwrap();
//! assert_eq!(best.genes().iter().collect::<String>(), "Hi!");
//! ```

pub use self::{
    alphabet::Alphabet,
    candidate::Candidate,
    climber::{HillClimber, SearchLimits, SearchOutcome, SearchStatus, StallReason, search},
    report::Reporter,
    seed::SearchSeed,
};

pub mod alphabet;
pub mod benchmark;
pub mod candidate;
pub mod climber;
pub mod genes;
pub mod report;
pub mod seed;

/// Invalid search configuration, detected before any candidate is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    #[display("alphabet must contain at least one symbol")]
    InvalidAlphabet,
    #[display("sequence length must be positive")]
    InvalidLength,
}
