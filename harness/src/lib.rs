//! Trigger-driven benchmark harness.
//!
//! The harness owns a [PrimeSieve] and a set of cumulative
//! [statistics](BenchmarkStats). Each detected trigger event runs the sieve
//! once, folds the measured runtime into the statistics, and emits a
//! [ReportRecord] for the presentation layer to render.
//!
//! # State machine
//!
//! The harness moves through exactly two states: the first trigger runs in
//! `FirstPass`, every later trigger in `Steady`. The first pass is the only
//! one that queries the [HeapProbe] and the only one whose report carries
//! the largest prime produced; steady passes report timing and pass
//! statistics alone.
//!
//! # Collaborators
//!
//! The hardware-facing halves of the benchmark stay outside this crate and
//! reach it through two traits: [TriggerSource], a periodically sampled
//! boolean event source, and [HeapProbe], a one-shot heap availability
//! accessor.
//!
//! Everything here is single-threaded and fully synchronous: a call to
//! [BenchmarkHarness::on_trigger] runs the sieve to completion before
//! returning, so reports are emitted in strictly increasing pass order.

mod harness;
mod heap;
mod report;
mod stats;
#[cfg(test)]
mod tests;
mod trigger;

pub use primebench_sieve::{PrimeSieve, PrimeTable, RunResult, SieveError};

pub use self::{
    harness::BenchmarkHarness,
    heap::{HeapProbe, HeapSnapshot},
    report::ReportRecord,
    stats::BenchmarkStats,
    trigger::TriggerSource,
};
