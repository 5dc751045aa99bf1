//! # Driver — Strategy Dispatch and Worker Lifecycle
//!
//! `SearchDriver` owns one run: it prints the start banner, dispatches on the
//! configured variant, and prints the end banner. Each variant measures its
//! own elapsed time around its parallel section, spawns fresh scoped threads
//! for that section, and joins them all before returning — no pool, no
//! detached threads, no thread reuse across candidates.
//!
//! ## The four variants
//!
//! | # | Work axis | Delivery | Output ordering |
//! |---|-----------|----------|-----------------|
//! | 1 | candidate range | immediate | racy across workers, ascending within one |
//! | 2 | candidate range | buffered | worker index, then ascending — deterministic |
//! | 3 | divisor range per candidate | immediate | strictly ascending |
//! | 4 | divisor range per candidate | buffered | strictly ascending, after the full scan |
//!
//! Variants 1–2 partition `[2, max]` across workers with the sequential
//! oracle; variants 3–4 walk the candidates sequentially and parallelize each
//! primality test's divisor range instead. Any other variant value is a
//! reported error: no workers are spawned and the run still ends cleanly.

use std::thread;
use std::time::Instant;

use tracing::{error, info};

use crate::config::Config;
use crate::oracle;
use crate::partition;
use crate::report::{timestamp_now, PrimeRecord, ReportSink};

pub struct SearchDriver<'s> {
    config: Config,
    sink: &'s dyn ReportSink,
}

impl<'s> SearchDriver<'s> {
    pub fn new(config: Config, sink: &'s dyn ReportSink) -> Self {
        SearchDriver { config, sink }
    }

    /// Run the configured variant to completion. Blocks until every worker
    /// spawned for the run has joined.
    pub fn run(&self) {
        self.sink.emit(&format!(
            "Run start: {}  (threads={} max={} variant={})",
            timestamp_now(),
            self.config.threads,
            self.config.max_n,
            self.config.variant
        ));
        match self.config.variant {
            1 => self.range_immediate(),
            2 => self.range_buffered(),
            3 => self.cooperative_immediate(),
            4 => self.cooperative_buffered(),
            other => error!(variant = other, "unknown variant, no search performed"),
        }
        self.sink.emit(&format!("Run end:   {}", timestamp_now()));
    }

    /// Variant 1: partition the candidate range, emit each prime the moment
    /// its worker finds it. Cross-worker line order is up to the scheduler.
    fn range_immediate(&self) {
        let max = self.config.max_n;
        if max < 2 {
            return;
        }
        let started = Instant::now();

        thread::scope(|scope| {
            for block in partition::blocks(2, max, self.config.effective_threads()) {
                if block.is_empty() {
                    continue;
                }
                let sink = self.sink;
                scope.spawn(move || {
                    for n in block.start..=block.end {
                        if oracle::is_prime_sequential(n) {
                            sink.emit_record(&PrimeRecord::discovered(n, block.worker));
                        }
                    }
                });
            }
        });

        let elapsed = started.elapsed().as_secs_f64();
        info!(elapsed_secs = elapsed, "range-immediate complete");
        self.sink.emit(&format!(
            "{} [variant 1] done in {:.3}s",
            timestamp_now(),
            elapsed
        ));
    }

    /// Variant 2: same partition, but workers fill private vectors — the
    /// sink is untouched during the parallel phase. The dump after join is
    /// worker-index-then-ascending, deterministic for any thread count.
    fn range_buffered(&self) {
        let max = self.config.max_n;
        if max < 2 {
            return;
        }
        let started = Instant::now();

        let results: Vec<Vec<u64>> = thread::scope(|scope| {
            let handles: Vec<_> = partition::blocks(2, max, self.config.effective_threads())
                .into_iter()
                .map(|block| {
                    scope.spawn(move || {
                        let mut found = Vec::new();
                        if !block.is_empty() {
                            for n in block.start..=block.end {
                                if oracle::is_prime_sequential(n) {
                                    found.push(n);
                                }
                            }
                        }
                        found
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| {
                    // A lost buffer would silently truncate the dump, so a
                    // panicked worker takes the whole run down instead.
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect()
        });

        self.sink
            .emit("=== buffered primes (all workers finished) ===");
        let stamp = timestamp_now();
        for (worker, found) in results.iter().enumerate() {
            for &p in found {
                self.sink.emit_record(&PrimeRecord::at(p, worker, &stamp));
            }
        }
        let elapsed = started.elapsed().as_secs_f64();
        info!(elapsed_secs = elapsed, "range-buffered complete");
        self.sink.emit(&format!(
            "{} [variant 2] done in {:.3}s",
            timestamp_now(),
            elapsed
        ));
        self.sink
            .emit("==============================================");
    }

    /// Variant 3: sequential candidate loop, divisor-parallel test per
    /// candidate, immediate emission — strictly ascending output.
    fn cooperative_immediate(&self) {
        let started = Instant::now();
        self.sink.emit(&format!(
            "{} [variant 3] searching up to {}",
            timestamp_now(),
            self.config.max_n
        ));

        for n in 2..=self.config.max_n {
            if oracle::is_prime_parallel(n, self.config.effective_threads()) {
                self.sink
                    .emit(&format!("{} prime: {}", timestamp_now(), n));
            }
        }

        let elapsed = started.elapsed().as_secs_f64();
        info!(elapsed_secs = elapsed, "cooperative-immediate complete");
        self.sink.emit(&format!(
            "{} [variant 3] done in {:.3}s",
            timestamp_now(),
            elapsed
        ));
    }

    /// Variant 4: same candidate loop as variant 3, but primes accumulate in
    /// one vector and print only after the full scan completes.
    fn cooperative_buffered(&self) {
        let started = Instant::now();
        let mut primes = Vec::new();

        for n in 2..=self.config.max_n {
            if oracle::is_prime_parallel(n, self.config.effective_threads()) {
                primes.push(n);
            }
        }

        let elapsed = started.elapsed().as_secs_f64();
        info!(
            elapsed_secs = elapsed,
            found = primes.len(),
            "cooperative-buffered complete"
        );
        self.sink.emit(&format!(
            "{} [variant 4] printing buffered primes...",
            timestamp_now()
        ));
        for p in &primes {
            self.sink.emit(&format!("prime: {}", p));
        }
        self.sink.emit(&format!(
            "{} [variant 4] done in {:.3}s",
            timestamp_now(),
            elapsed
        ));
    }
}
