//! Trigger-driven prime benchmark.
//!
//! Computes the first 60,000 primes by trial division on every trigger
//! event and prints the pass runtime together with running statistics. The
//! first pass additionally reports free heap and the largest prime found.
//!
//! Triggers arrive on stdin, one per line, and are sampled on a fixed
//! polling interval; `--passes` instead runs a fixed number of passes
//! immediately and exits. Reports go to stdout, logging (`RUST_LOG`) to
//! stderr.

use std::{thread, time::Duration};

use clap::Parser;
use primebench_harness::{BenchmarkHarness, TriggerSource};

mod heap;
mod trigger;

use self::{heap::SystemHeapProbe, trigger::StdinTrigger};

/// Number of primes computed by every benchmark pass.
///
/// The reference configuration; the count is fixed at compile time.
const PRIME_COUNT: usize = 60_000;

#[derive(Parser)]
#[command(name = "primebench")]
#[command(author, version, about = "Trigger-driven prime benchmark", long_about = None)]
struct Config {
    /// Run this many passes immediately instead of waiting for triggers
    #[arg(short = 'p', long, value_name = "COUNT")]
    passes: Option<usize>,
    /// Polling interval for the trigger source, in milliseconds
    #[arg(short = 'i', long, value_name = "MS", default_value = "100")]
    interval_ms: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::parse();
    let mut harness = BenchmarkHarness::new(PRIME_COUNT, SystemHeapProbe::default())?;

    match config.passes {
        Some(count) => {
            for _ in 0..count {
                println!("{}", harness.on_trigger());
            }
        }
        None => {
            log::info!("waiting for triggers on stdin (one pass per line)");
            let interval = Duration::from_millis(config.interval_ms);
            let mut trigger = StdinTrigger::spawn();
            while let Some(fired) = trigger.sample() {
                if fired {
                    println!("{}", harness.on_trigger());
                }
                thread::sleep(interval);
            }
        }
    }

    Ok(())
}
