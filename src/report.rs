//! # Report — Prime Records and Synchronized Result Delivery
//!
//! Search output proper (banners and per-prime lines) flows through the
//! [`ReportSink`] trait rather than straight to stdout, so the driver can be
//! exercised in tests against an in-memory sink and the console sink stays
//! the only place that touches the process output stream.
//!
//! ## Delivery disciplines
//!
//! *Immediate* delivery emits a record the moment a worker discovers it; the
//! sink serializes whole lines so concurrent workers never interleave
//! mid-write, but cross-worker ordering is whatever the scheduler produced.
//! *Buffered* delivery keeps records in private per-worker vectors during the
//! parallel phase and replays them through the sink only after every worker
//! has joined, which makes the output fully deterministic.

use std::io::Write;
use std::sync::Mutex;

use chrono::Local;

/// Local-time timestamp with millisecond precision, e.g.
/// `2026-08-29 14:03:07.241`.
pub fn timestamp_now() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

/// One discovered prime, frozen at the moment of determination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeRecord {
    pub value: u64,
    /// Index of the worker that found it (0-based).
    pub worker: usize,
    pub timestamp: String,
}

impl PrimeRecord {
    /// Record a discovery now, stamping the current local time.
    pub fn discovered(value: u64, worker: usize) -> Self {
        PrimeRecord {
            value,
            worker,
            timestamp: timestamp_now(),
        }
    }

    /// Buffered records share the dump's timestamp instead of their own.
    pub fn at(value: u64, worker: usize, timestamp: &str) -> Self {
        PrimeRecord {
            value,
            worker,
            timestamp: timestamp.to_string(),
        }
    }

    pub fn line(&self) -> String {
        format!(
            "[{}] (worker {}) prime: {}",
            self.timestamp, self.worker, self.value
        )
    }
}

/// Line-oriented result sink shared by all workers of one run.
///
/// Implementations must serialize `emit` so that two concurrent callers
/// never interleave within a line.
pub trait ReportSink: Send + Sync {
    fn emit(&self, line: &str);

    fn emit_record(&self, record: &PrimeRecord) {
        self.emit(&record.line());
    }
}

/// Production sink: whole-line writes to stdout, serialized by the stream
/// lock so concurrent workers cannot interleave mid-line.
#[derive(Default)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn emit(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{line}");
    }
}

/// Test sink: captures every emitted line in order of arrival.
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Prime values parsed back out of the captured `prime: N` lines, in
    /// emission order.
    pub fn prime_values(&self) -> Vec<u64> {
        self.lines()
            .iter()
            .filter_map(|line| {
                let (_, value) = line.rsplit_once("prime: ")?;
                value.trim().parse().ok()
            })
            .collect()
    }
}

impl ReportSink for MemorySink {
    fn emit(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
