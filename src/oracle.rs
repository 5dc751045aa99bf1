//! # Oracle — Sequential and Divisor-Parallel Primality Testing
//!
//! Two entry points with identical semantics:
//!
//! - [`is_prime_sequential`] — classic trial division by odd integers up to
//!   `⌊√n⌋`. No allocation, no threads. The building block for the range
//!   strategies and the reference the parallel form is tested against.
//! - [`is_prime_parallel`] — splits the odd-divisor range of one candidate
//!   across fresh worker threads that share a single early-exit flag. This is
//!   a per-call primitive: threads are spawned and joined inside each call,
//!   not pooled across candidates.
//!
//! ## Early exit
//!
//! The shared flag starts `true` ("still assume prime"). A worker that finds
//! a factor stores `false` and stops; every worker also polls the flag each
//! iteration and bails once it observes `false`. The flag is monotonic
//! (`true → false`, never back), so relaxed atomics are sufficient: a worker
//! may perform a few extra trial divisions after another worker's store
//! before observing it, and the deciding read happens only after every
//! worker has joined.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crate::partition;

/// Trial division by odd integers up to `⌊√n⌋`. O(√n), single-threaded.
pub fn is_prime_sequential(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let sqrt_n = (n as f64).sqrt() as u64;
    let mut d = 3;
    while d <= sqrt_n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Divisor-parallel trial division: split `[3, ⌊√n⌋]` across `threads`
/// workers sharing one early-exit flag, join them all, return the flag.
///
/// The f64 `sqrt` is exact for the 32-bit candidate range this crate
/// targets (f64 carries 52 mantissa bits), so no ±1 correction is applied.
pub fn is_prime_parallel(n: u64, threads: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let sqrt_n = (n as f64).sqrt() as u64;
    let still_prime = AtomicBool::new(true);

    thread::scope(|scope| {
        for block in partition::divisor_blocks(sqrt_n, threads) {
            let still_prime = &still_prime;
            scope.spawn(move || {
                // Blocks may start on an even number when range_size is odd;
                // align up to the first odd divisor or stepping by 2 would
                // skip every odd divisor in the block.
                let mut d = block.start | 1;
                while d <= block.end && still_prime.load(Ordering::Relaxed) {
                    if n % d == 0 {
                        still_prime.store(false, Ordering::Relaxed);
                        break;
                    }
                    d += 2;
                }
            });
        }
    });

    still_prime.load(Ordering::Relaxed)
}
