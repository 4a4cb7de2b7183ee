//! Execution trace model.
//!
//! A trace is the ordered record of CPU slices handed out during one
//! scheduling run. It is plain data: rendering it as a chart is left to
//! consumers.

use serde::{Deserialize, Serialize};

/// The CPU timeline of a single scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    slices: Vec<Slice>,
}

/// A contiguous interval during which one process held the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Process that ran.
    pub process_id: String,
    /// Start instant (inclusive).
    pub start: i64,
    /// End instant (exclusive).
    pub end: i64,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(process_id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Length of the slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl Trace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `process_id` ran over `[start, end)`.
    ///
    /// Extends the previous slice instead when the same process continues
    /// without a gap, so unit-step policies produce one slice per burst.
    pub fn record(&mut self, process_id: &str, start: i64, end: i64) {
        if let Some(last) = self.slices.last_mut() {
            if last.process_id == process_id && last.end == start {
                last.end = end;
                return;
            }
        }
        self.slices.push(Slice::new(process_id, start, end));
    }

    /// All slices in time order.
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Slices belonging to one process.
    pub fn slices_for(&self, process_id: &str) -> Vec<&Slice> {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Process IDs in dispatch order (one entry per slice).
    pub fn dispatch_order(&self) -> Vec<&str> {
        self.slices.iter().map(|s| s.process_id.as_str()).collect()
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// End of the last slice, or 0 for an empty trace.
    pub fn makespan(&self) -> i64 {
        self.slices.last().map(|s| s.end).unwrap_or(0)
    }

    /// Time in `[0, makespan)` during which the CPU idled.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Busy fraction of `[0, makespan)`. `None` for an empty trace.
    pub fn utilization(&self) -> Option<f64> {
        let horizon = self.makespan();
        if horizon <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / horizon as f64)
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
