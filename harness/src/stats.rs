use std::time::Duration;

/// Cumulative statistics across benchmark passes.
///
/// Owned by the harness instance, mutated exactly once per trigger event,
/// and never reset for the life of the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct BenchmarkStats {
    pass_count: u64,
    total_elapsed: Duration,
}

impl BenchmarkStats {
    /// Create zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed pass.
    pub fn record(&mut self, elapsed: Duration) {
        self.pass_count += 1;
        self.total_elapsed += elapsed;
    }

    /// Number of passes recorded so far.
    pub fn pass_count(&self) -> u64 {
        self.pass_count
    }

    /// Total wall-clock time across all recorded passes.
    pub fn total_elapsed(&self) -> Duration {
        self.total_elapsed
    }

    /// Mean wall-clock seconds per pass, or zero before the first pass.
    pub fn average_elapsed_seconds(&self) -> f64 {
        if self.pass_count == 0 {
            return 0.0;
        }
        self.total_elapsed.as_secs_f64() / self.pass_count as f64
    }
}
