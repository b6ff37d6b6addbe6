use std::time::{Duration, Instant};

use crate::PrimeTable;

/// The first four primes, seeded directly so the search can restrict itself
/// to odd candidates from the start.
const SEED_PRIMES: [u32; 4] = [2, 3, 5, 7];

/// Errors produced when configuring a [PrimeSieve].
#[derive(Debug, thiserror::Error)]
pub enum SieveError {
    /// The requested prime count cannot cover the seed primes.
    #[error("target prime count must be at least {minimum}, got {requested}")]
    InvalidTargetCount { requested: usize, minimum: usize },
}

/// A bounded trial-division sieve producing the first `target_count` primes
/// in increasing order.
///
/// Construction validates the configuration; [PrimeSieve::run] is then
/// infallible. The sieve itself is stateless across runs, so one instance
/// can be run repeatedly and each run rebuilds its table from scratch.
#[derive(Debug, Clone)]
pub struct PrimeSieve {
    target_count: usize,
}

impl PrimeSieve {
    /// The smallest supported target count, i.e. the number of seed primes.
    pub const MIN_TARGET_COUNT: usize = SEED_PRIMES.len();

    /// Create a sieve that produces the first `target_count` primes per run.
    ///
    /// Counts below [Self::MIN_TARGET_COUNT] are rejected: the search
    /// assumes the seed primes are already in the table before it begins.
    pub fn new(target_count: usize) -> Result<Self, SieveError> {
        if target_count < Self::MIN_TARGET_COUNT {
            return Err(SieveError::InvalidTargetCount {
                requested: target_count,
                minimum: Self::MIN_TARGET_COUNT,
            });
        }
        Ok(Self { target_count })
    }

    /// The number of primes produced by each run.
    pub fn target_count(&self) -> usize {
        self.target_count
    }

    /// Run the sieve once, timing the computation with a monotonic clock.
    ///
    /// The clock starts immediately before the table is seeded and stops as
    /// soon as the growth loop terminates, before the largest prime is
    /// extracted for the result.
    pub fn run(&self) -> RunResult {
        let start = Instant::now();
        let table = self.generate();
        let elapsed = start.elapsed();
        log::trace!("generated {} primes in {:?}", table.len(), elapsed);
        RunResult {
            prime_count: table.len(),
            largest_prime: table.largest().expect("table holds at least the seed primes"),
            elapsed,
        }
    }

    /// Produce the table of the first `target_count` primes, untimed.
    pub fn generate(&self) -> PrimeTable {
        let mut table = PrimeTable::with_target(self.target_count);
        for prime in SEED_PRIMES {
            table.push(prime);
        }
        let mut candidate = SEED_PRIMES[SEED_PRIMES.len() - 1];
        while table.len() < self.target_count {
            candidate += 2;
            // No factor above the truncated square root can divide the
            // candidate, and every prime up to that bound is already in the
            // table. Index 0 (the prime 2) is skipped: candidates are odd.
            let bound = candidate.isqrt();
            let is_prime = table.as_slice()[1..]
                .iter()
                .take_while(|&&prime| prime <= bound)
                .all(|&prime| candidate % prime != 0);
            if is_prime {
                table.push(candidate);
            }
        }
        table
    }
}

/// The outcome of a single sieve run. Immutable once created.
#[derive(Debug, Clone, Copy)]
pub struct RunResult {
    prime_count: usize,
    largest_prime: u32,
    elapsed: Duration,
}

impl RunResult {
    /// How many primes the run produced.
    pub fn prime_count(&self) -> usize {
        self.prime_count
    }

    /// The largest (final) prime produced by the run.
    pub fn largest_prime(&self) -> u32 {
        self.largest_prime
    }

    /// Wall-clock time of the computation.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Wall-clock time of the computation, in seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
