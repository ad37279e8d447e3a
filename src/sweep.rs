//! # Sweep Driver
//!
//! Runs the baseline and every configured lock for each thread count, in order,
//! and collects the reports. A wrong result is logged and recorded; the sweep
//! always continues to the next configuration.

use tracing::{info, info_span, warn};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::runner::{Experiment, ExperimentReport};

/// Drives a full sweep described by a [`BenchConfig`].
#[derive(Debug, Clone)]
pub struct Sweep {
    config: BenchConfig,
}

impl Sweep {
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Every experiment of the sweep, in run order.
    pub fn experiments(&self) -> Vec<Experiment> {
        let workload = self.config.workload;
        self.config
            .thread_counts
            .iter()
            .flat_map(|&threads| {
                let baseline = self
                    .config
                    .include_unguarded
                    .then(|| Experiment::unguarded(threads, workload));
                baseline.into_iter().chain(
                    self.config
                        .locks
                        .iter()
                        .map(move |&lock| Experiment::locked(lock, threads, workload)),
                )
            })
            .collect()
    }

    /// Runs the sweep, handing each report to `on_report` as soon as it is available.
    pub fn run_with(&self, mut on_report: impl FnMut(&ExperimentReport)) -> Result<SweepSummary> {
        self.config.validate()?;

        let mut reports = Vec::new();
        let mut current_threads = None;
        for experiment in self.experiments() {
            if current_threads != Some(experiment.threads) {
                current_threads = Some(experiment.threads);
                info!(threads = experiment.threads, "starting thread count");
            }

            let _span =
                info_span!("experiment", label = experiment.label(), threads = experiment.threads)
                    .entered();
            let report = experiment.run()?;

            if report.is_correct() {
                info!(elapsed_ms = report.elapsed_ms(), measured = report.measured, "correct");
            } else if report.locked {
                warn!(
                    deviation = report.deviation(),
                    measured = report.measured,
                    "lock produced a wrong result"
                );
            } else {
                info!(deviation = report.deviation(), "unguarded run lost updates");
            }

            on_report(&report);
            reports.push(report);
        }

        Ok(SweepSummary { reports })
    }

    pub fn run(&self) -> Result<SweepSummary> {
        self.run_with(|_| {})
    }
}

/// All reports of a finished sweep.
#[derive(Debug, Clone, Default)]
pub struct SweepSummary {
    reports: Vec<ExperimentReport>,
}

impl SweepSummary {
    pub fn reports(&self) -> &[ExperimentReport] {
        &self.reports
    }

    /// Locked runs whose result was wrong. Unguarded mismatches are expected and excluded.
    pub fn failures(&self) -> impl Iterator<Item = &ExperimentReport> {
        self.reports.iter().filter(|r| r.locked && !r.is_correct())
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}
