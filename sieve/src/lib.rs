//! Prime generation by bounded trial division.
//!
//! This crate is the computational leaf of the primebench workspace: given a
//! target count, [PrimeSieve] produces the ordered sequence of the first
//! `target_count` primes and reports the wall-clock time the computation
//! took.
//!
//! # Algorithm
//!
//! The sieve maintains an ordered [PrimeTable] of every prime found so far.
//! The first four primes are seeded directly, after which candidates advance
//! in steps of two (even numbers beyond 2 are never tested). Each candidate
//! is tested for divisibility against the primes already in the table, up to
//! the candidate's truncated integer square root. Every factor of an odd
//! composite at or below its square root is smaller than the candidate, so
//! by induction the divisors needed for the test are always already present
//! in the table.
//!
//! Runs are deterministic and free of side effects: the same sieve run any
//! number of times yields the identical prime sequence, differing only in
//! measured time.

mod sieve;
mod table;

pub use self::{
    sieve::{PrimeSieve, RunResult, SieveError},
    table::PrimeTable,
};
