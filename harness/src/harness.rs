use primebench_sieve::{PrimeSieve, SieveError};

use crate::{BenchmarkStats, HeapProbe, ReportRecord};

/// Which pass the harness is about to run.
///
/// The first pass does two things no later pass repeats: it queries the
/// heap probe and it reports the largest prime produced. `Steady` is
/// entered on the first trigger and never exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    FirstPass,
    Steady,
}

/// Runs one sieve pass per trigger event and accumulates pass statistics.
///
/// [BenchmarkHarness::on_trigger] must be called once per detected event
/// and never re-entrantly; each call runs the sieve to completion before
/// returning, so reports are emitted in strictly increasing pass order.
/// All state is owned by the instance, so independent harnesses can coexist
/// in one process.
#[derive(Debug)]
pub struct BenchmarkHarness<P> {
    sieve: PrimeSieve,
    probe: P,
    stats: BenchmarkStats,
    phase: Phase,
}

impl<P: HeapProbe> BenchmarkHarness<P> {
    /// Create a harness that computes the first `target_count` primes on
    /// every pass, observing heap availability through `probe`.
    ///
    /// Fails if `target_count` is rejected by [PrimeSieve::new]; a
    /// misconfigured sieve is fatal, there is no recovery.
    pub fn new(target_count: usize, probe: P) -> Result<Self, SieveError> {
        let sieve = PrimeSieve::new(target_count)?;
        Ok(Self {
            sieve,
            probe,
            stats: BenchmarkStats::new(),
            phase: Phase::FirstPass,
        })
    }

    /// Cumulative statistics over all passes run so far.
    pub fn stats(&self) -> &BenchmarkStats {
        &self.stats
    }

    /// Run one benchmark pass and report it.
    pub fn on_trigger(&mut self) -> ReportRecord {
        // Heap is sampled before the run, and only on the first pass.
        let heap = match self.phase {
            Phase::FirstPass => {
                let heap = self.probe.snapshot();
                log::debug!(
                    "heap before first pass: {} of {} bytes free",
                    heap.free_heap_bytes,
                    heap.total_heap_bytes
                );
                Some(heap)
            }
            Phase::Steady => None,
        };

        let result = self.sieve.run();
        self.stats.record(result.elapsed());
        log::debug!(
            "pass {} finished in {:?} (largest prime {})",
            self.stats.pass_count(),
            result.elapsed(),
            result.largest_prime()
        );

        let largest_prime = match self.phase {
            Phase::FirstPass => Some(result.largest_prime()),
            Phase::Steady => None,
        };
        self.phase = Phase::Steady;

        ReportRecord::new(
            result.elapsed(),
            self.stats.pass_count(),
            self.stats.average_elapsed_seconds(),
            heap,
            largest_prime,
        )
    }
}
