//! # Error Types
//!
//! Failures of the harness itself. A wrong final sum is not an error: it is
//! reported through `ExperimentReport` and the sweep carries on.

use std::io;
use thiserror::Error;

/// Errors raised while configuring or running an experiment.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("thread count must be at least 1")]
    NoThreads,

    #[error("workload range [{start}, {end}] is empty")]
    EmptyRange { start: i64, end: i64 },

    #[error("workload range [{start}, {end}] holds more values than a u64 can count")]
    RangeTooLarge { start: i64, end: i64 },

    #[error("expected result over [{start}, {end}] does not fit in 64 bits")]
    Overflow { start: i64, end: i64 },

    #[error("failed to spawn worker {index}")]
    Spawn {
        index: usize,
        #[source]
        source: io::Error,
    },

    #[error("worker {index} panicked")]
    WorkerPanicked { index: usize },

    #[error("sweep has no thread counts to run")]
    EmptySweep,
}

pub type Result<T> = std::result::Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_messages() {
        assert_eq!(
            HarnessError::EmptyRange { start: 5, end: 1 }.to_string(),
            "workload range [5, 1] is empty"
        );
        assert_eq!(HarnessError::WorkerPanicked { index: 3 }.to_string(), "worker 3 panicked");
        assert_eq!(
            HarnessError::RangeTooLarge { start: i64::MIN, end: i64::MAX }.to_string(),
            format!(
                "workload range [{}, {}] holds more values than a u64 can count",
                i64::MIN,
                i64::MAX
            )
        );
    }

    #[test]
    fn test_spawn_keeps_source() {
        let err = HarnessError::Spawn {
            index: 0,
            source: io::Error::new(io::ErrorKind::WouldBlock, "no more threads"),
        };
        assert!(err.source().is_some());
    }
}
