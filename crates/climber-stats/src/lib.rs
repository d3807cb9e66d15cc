//! Statistical helpers for the climber workspace.
//!
//! - **Descriptive statistics**: min, max, mean, median, variance and standard
//!   deviation of a finished dataset ([`descriptive`])
//! - **Running statistics**: incremental mean and standard deviation for samples that
//!   arrive one at a time ([`running`])
//!
//! Both are used by the benchmark harness in `climber-search` to summarize search
//! durations.
//!
//! # Examples
//!
//! ```
//! use climber_stats::{descriptive::DescriptiveStats, running::RunningStats};
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//!
//! let mut running = RunningStats::new();
//! values.iter().for_each(|v| running.push(*v));
//! assert_eq!(running.mean(), 3.0);
//! ```

pub mod descriptive;
pub mod running;
