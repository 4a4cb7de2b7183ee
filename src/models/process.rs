//! Process model.
//!
//! A process is a single unit of CPU work with a fixed arrival instant and
//! burst length. Schedulers drive its simulation state forward; the derived
//! timings (turnaround, waiting) are computed on demand once it completes.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A simulated process.
///
/// The static attributes are public. The simulation state can only be
/// advanced by the schedulers in this crate, which keeps the lifecycle
/// invariants intact:
/// - `remaining_time` never increases and reaches exactly 0 on completion
/// - `response_time` is recorded once, at the first dispatch
/// - `completion_time` is recorded once, when the remaining time hits 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProcessRecord")]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Instant at which the process becomes runnable.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Static priority (lower = more important). Not used by the built-in policies.
    pub priority: i32,
    #[serde(skip)]
    state: RunState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct RunState {
    remaining_time: i64,
    completion_time: Option<i64>,
    response_time: Option<i64>,
}

impl Process {
    /// Creates a new process with priority 0.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: 0,
            state: RunState {
                remaining_time: burst_time,
                ..RunState::default()
            },
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// CPU time still owed to this process.
    pub fn remaining_time(&self) -> i64 {
        self.state.remaining_time
    }

    /// Instant the process finished, if it has.
    pub fn completion_time(&self) -> Option<i64> {
        self.state.completion_time
    }

    /// Delay between arrival and first dispatch, if dispatched.
    pub fn response_time(&self) -> Option<i64> {
        self.state.response_time
    }

    /// Whether the process has been dispatched at least once.
    pub fn is_started(&self) -> bool {
        self.state.response_time.is_some()
    }

    /// Whether the process has run to completion.
    pub fn is_completed(&self) -> bool {
        self.state.completion_time.is_some()
    }

    /// Completion minus arrival.
    pub fn turnaround_time(&self) -> Option<i64> {
        self.state.completion_time.map(|c| c - self.arrival_time)
    }

    /// Turnaround minus burst: time spent ready but not running.
    pub fn waiting_time(&self) -> Option<i64> {
        self.turnaround_time().map(|t| t - self.burst_time)
    }

    /// Clears all simulation state, as if freshly loaded.
    pub fn reset(&mut self) {
        self.state = RunState {
            remaining_time: self.burst_time,
            ..RunState::default()
        };
    }

    /// Records a dispatch at `now`. Only the first dispatch sets the response time.
    pub(crate) fn dispatch(&mut self, now: i64) {
        if self.state.response_time.is_none() {
            self.state.response_time = Some(now - self.arrival_time);
        }
    }

    /// Runs for `units` of CPU time, ending at `now`. Marks completion when
    /// nothing remains.
    pub(crate) fn execute(&mut self, units: i64, now: i64) {
        debug_assert!(units > 0 && units <= self.state.remaining_time);
        self.state.remaining_time -= units;
        if self.state.remaining_time == 0 {
            self.state.completion_time = Some(now);
        }
    }
}

impl From<ProcessRecord> for Process {
    fn from(record: ProcessRecord) -> Self {
        Process::new(record.id, record.arrival_time, record.burst_time)
            .with_priority(record.priority)
    }
}

/// Static process attributes as supplied by an input source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub id: String,
    pub arrival_time: i64,
    pub burst_time: i64,
    #[serde(default)]
    pub priority: i32,
}
