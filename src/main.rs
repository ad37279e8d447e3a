//! Lock mechanism performance evaluation.
//!
//! Sums the integers of the default range with 2, 4, 8, 16 and 32 threads, once
//! without any lock and once per spin lock, and prints one line per run. Exits with
//! a failure status if any locked run produced a wrong total.

use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};

use spinlock_bench::{init_tracing, BenchConfig, Sweep};

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let config = BenchConfig::default();
    let expected = config
        .workload
        .expected()
        .context("default workload has no valid expected result")?;

    println!("===== Lock Mechanism Performance Evaluation =====");
    println!("Target Operation: {}", config.workload);
    println!("True Expected Result (Final Sum): {expected}");

    let sweep = Sweep::new(config);
    let mut last_threads = None;
    let summary = sweep
        .run_with(|report| {
            if last_threads != Some(report.threads) {
                last_threads = Some(report.threads);
                println!("\n--- Testing with {} Threads ---", report.threads);
            }
            println!("{report}");
        })
        .context("benchmark sweep aborted")?;

    if summary.is_success() {
        info!(runs = summary.reports().len(), "all locked runs produced the expected result");
        Ok(ExitCode::SUCCESS)
    } else {
        for report in summary.failures() {
            error!(
                label = report.label,
                threads = report.threads,
                deviation = report.deviation(),
                "incorrect result"
            );
        }
        Ok(ExitCode::FAILURE)
    }
}
