//! # Partition — Contiguous Work-Block Division
//!
//! Splits an inclusive integer interval `[lo, hi]` into one contiguous block
//! per worker. Every search strategy shares this single implementation: the
//! range variants apply it to the candidate axis, the cooperative primality
//! test applies its divisor-axis sibling (`divisor_blocks`) to the odd trial
//! divisors of one candidate.
//!
//! ## Invariants
//!
//! For `blocks(lo, hi, t)` with `total = hi - lo + 1` units:
//!
//! - blocks are contiguous and non-overlapping, covering `[lo, hi]` exactly;
//! - the first `total % t` workers get `⌊total/t⌋ + 1` units, the rest get
//!   `⌊total/t⌋` — sizes differ by at most 1;
//! - a worker whose computed size is 0 receives an empty block
//!   (`end < start`) and must treat it as a no-op.
//!
//! Degenerate inputs never error: `hi < lo` yields all-empty blocks, and a
//! worker count of 0 is normalized to 1 before any division.

/// One worker's contiguous slice of an interval. `end < start` means empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkBlock {
    /// Index of the worker that owns this block (0-based).
    pub worker: usize,
    pub start: u64,
    pub end: u64,
}

impl WorkBlock {
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Number of units in the block (0 for empty blocks).
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }
}

/// Partition `[lo, hi]` into `workers` contiguous near-equal blocks.
///
/// Leftover units (`total % workers`) go to the earliest workers, so block
/// sizes are deterministic for a given `(lo, hi, workers)` regardless of
/// scheduling. Requires `lo >= 1` (callers partition candidate ranges
/// starting at 2 and divisor ranges starting at 3).
pub fn blocks(lo: u64, hi: u64, workers: usize) -> Vec<WorkBlock> {
    let workers = workers.max(1);
    let total = if hi >= lo { hi - lo + 1 } else { 0 };
    let base = total / workers as u64;
    let remainder = total % workers as u64;

    let mut cursor = lo;
    (0..workers)
        .map(|worker| {
            let size = base + u64::from((worker as u64) < remainder);
            let block = if size > 0 {
                WorkBlock {
                    worker,
                    start: cursor,
                    end: cursor + size - 1,
                }
            } else {
                // Empty block: cursor does not advance.
                WorkBlock {
                    worker,
                    start: cursor,
                    end: cursor - 1,
                }
            };
            cursor += size;
            block
        })
        .collect()
}

/// Divisor-axis blocks for the cooperative primality test.
///
/// Covers the odd trial divisors of `[3, sqrt_n]` with the fixed stride
/// formula `range_size = (sqrt_n - 3)/workers + 1`: worker `t` gets
/// `[3 + t*range_size, min(sqrt_n, 3 + (t+1)*range_size - 1)]`. Workers past
/// the end of the divisor range get empty blocks. Unlike `blocks`, trailing
/// blocks may be shorter than `range_size` only via the `sqrt_n` clamp — the
/// formula deliberately matches the per-candidate splitter the cooperative
/// variants were specified with, rather than the remainder-first policy.
pub fn divisor_blocks(sqrt_n: u64, workers: usize) -> Vec<WorkBlock> {
    let workers = workers.max(1);
    let range_size = if sqrt_n >= 3 {
        (sqrt_n - 3) / workers as u64 + 1
    } else {
        1
    };

    (0..workers)
        .map(|worker| {
            let start = 3 + worker as u64 * range_size;
            let end = sqrt_n.min(start + range_size - 1);
            WorkBlock { worker, start, end }
        })
        .collect()
}
