//! # Primesweep — Multi-threaded Prime Search
//!
//! Searches `[2, max]` for primes by trial division, under one of four
//! work-distribution strategies selected at runtime:
//!
//! 1. **range-immediate** — static range partition, primes printed as found;
//! 2. **range-buffered** — static range partition, per-worker buffers dumped
//!    after all workers join;
//! 3. **cooperative-immediate** — sequential candidate loop, each primality
//!    test's divisor range split across workers with a shared early-exit
//!    flag, primes printed as found;
//! 4. **cooperative-buffered** — the same divisor-parallel test, primes
//!    dumped after the full scan.
//!
//! Deliberately a strategy playground, not a sieve: the point is the
//! coordination primitives (contiguous block partitioning, synchronized vs.
//! buffered delivery, cooperative short-circuit), not raw throughput.

pub mod config;
pub mod driver;
pub mod oracle;
pub mod partition;
pub mod report;
