//! Property-based tests for primesweep's partitioning and primality
//! primitives.
//!
//! These tests use the `proptest` framework to verify invariants across
//! thousands of randomly generated inputs, rather than checking a handful of
//! known values.
//!
//! # How to run
//!
//! ```bash
//! cargo test --test property_tests
//!
//! # Increase case count for thorough testing (default is 256):
//! PROPTEST_CASES=10000 cargo test --test property_tests
//! ```
//!
//! # Testing strategy
//!
//! - **Partition**: contiguity, exact coverage, near-equal sizes, and the
//!   remainder-to-earliest-workers rule, for arbitrary intervals and worker
//!   counts including degenerate ones.
//! - **Oracle**: the divisor-parallel test must agree with sequential trial
//!   division for every candidate and thread count — this is the property
//!   that makes the cooperative variants correct.
//! - **Config**: parsing never panics and recognized keys round-trip.

use proptest::prelude::*;

use primesweep::config::Config;
use primesweep::oracle;
use primesweep::partition::{self, WorkBlock};

proptest! {
    /// Non-empty blocks tile `[lo, hi]` exactly: each starts where the
    /// previous ended + 1, the first starts at `lo`, the last ends at `hi`.
    #[test]
    fn prop_blocks_cover_exactly(
        lo in 1u64..5_000,
        len in 0u64..5_000,
        workers in 1usize..64,
    ) {
        let hi = lo + len;
        let blocks = partition::blocks(lo, hi, workers);
        prop_assert_eq!(blocks.len(), workers);

        let mut cursor = lo;
        for block in blocks.iter().filter(|b| !b.is_empty()) {
            prop_assert_eq!(block.start, cursor, "gap before {:?}", block);
            cursor = block.end + 1;
        }
        prop_assert_eq!(cursor, hi + 1, "coverage stops short of hi");
    }

    /// Block sizes differ by at most 1 and sum to the interval length, with
    /// the larger blocks assigned to the earliest workers.
    #[test]
    fn prop_blocks_near_equal_sizes(
        lo in 1u64..5_000,
        len in 0u64..5_000,
        workers in 1usize..64,
    ) {
        let hi = lo + len;
        let total = hi - lo + 1;
        let blocks = partition::blocks(lo, hi, workers);

        let sizes: Vec<u64> = blocks.iter().map(WorkBlock::len).collect();
        prop_assert_eq!(sizes.iter().sum::<u64>(), total);

        let base = total / workers as u64;
        let remainder = (total % workers as u64) as usize;
        for (i, &size) in sizes.iter().enumerate() {
            let expected = base + u64::from(i < remainder);
            prop_assert_eq!(size, expected, "worker {} got {} units", i, size);
        }
    }

    /// An empty interval yields empty blocks for every worker.
    #[test]
    fn prop_blocks_empty_interval(lo in 2u64..5_000, workers in 1usize..64) {
        let blocks = partition::blocks(lo, lo - 1, workers);
        prop_assert!(blocks.iter().all(WorkBlock::is_empty));
    }

    /// Every divisor in `[3, sqrt_n]` is owned by exactly one divisor block,
    /// and no block reaches past `sqrt_n`.
    #[test]
    fn prop_divisor_blocks_partition_divisor_range(
        sqrt_n in 0u64..2_000,
        workers in 1usize..32,
    ) {
        let blocks = partition::divisor_blocks(sqrt_n, workers);
        prop_assert_eq!(blocks.len(), workers);
        for block in blocks.iter().filter(|b| !b.is_empty()) {
            prop_assert!(block.start >= 3);
            prop_assert!(block.end <= sqrt_n);
        }
        for d in 3..=sqrt_n {
            let owners = blocks
                .iter()
                .filter(|b| !b.is_empty() && b.start <= d && d <= b.end)
                .count();
            prop_assert_eq!(owners, 1, "divisor {} owned by {} blocks", d, owners);
        }
    }

    /// The divisor-parallel oracle agrees with sequential trial division for
    /// every candidate and thread count.
    #[test]
    fn prop_oracle_parallel_matches_sequential(
        n in 0u64..10_000,
        threads in 1usize..8,
    ) {
        prop_assert_eq!(
            oracle::is_prime_parallel(n, threads),
            oracle::is_prime_sequential(n),
            "disagreement at n={} threads={}", n, threads
        );
    }

    /// A prime's only divisors are 1 and itself: multiplying two values
    /// greater than 1 can never produce a prime.
    #[test]
    fn prop_oracle_products_are_composite(a in 2u64..3_000, b in 2u64..3_000) {
        prop_assert!(!oracle::is_prime_sequential(a * b));
    }

    /// Config parsing never panics on arbitrary text.
    #[test]
    fn prop_config_parse_total(text in ".{0,200}") {
        let _ = Config::parse(&text);
    }

    /// Recognized keys written in canonical form round-trip through parse.
    #[test]
    fn prop_config_roundtrip(
        threads in 0usize..1_000,
        max in 0u64..1_000_000,
        variant in 0u32..10,
    ) {
        let text = format!("threads={}\nmax={}\nvariant={}\n", threads, max, variant);
        let config = Config::parse(&text);
        prop_assert_eq!(config.threads, threads);
        prop_assert_eq!(config.max_n, max);
        prop_assert_eq!(config.variant, variant);
    }
}
