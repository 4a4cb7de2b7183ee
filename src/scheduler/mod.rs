//! CPU scheduling policies and metrics.
//!
//! Each policy consumes a process set, rewrites its order and simulation
//! state in place, and reports averaged metrics.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection key |
//! |--------|-----------|---------------|
//! | `Fcfs` | no | arrival time |
//! | `Sjf` | no | burst time |
//! | `Srtf` | yes (per unit) | remaining time |
//! | `RoundRobin` | yes (per quantum) | FIFO ready queue |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod metrics;
mod ordering;
mod round_robin;
mod sjf;
mod srtf;

use std::fmt::{self, Debug};
use std::str::FromStr;

pub use fcfs::Fcfs;
pub use metrics::Metrics;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

use crate::error::ScheduleError;
use crate::models::{Process, Trace};
use crate::validation::validate_processes;

/// Quantum used when none is given.
pub const DEFAULT_QUANTUM: i64 = 2;

/// A CPU scheduling policy.
///
/// Implementations are stateless between calls: everything a run needs
/// lives in the process slice it is handed.
pub trait Scheduler: Debug {
    /// Short policy name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Long policy name.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Runs the policy over `processes`, recording every CPU slice.
    ///
    /// On success every process has completed. On error nothing has been
    /// mutated.
    fn simulate(&self, processes: &mut [Process], trace: &mut Trace) -> Result<(), ScheduleError>;

    /// Runs the policy and returns the resulting metrics.
    fn schedule(&self, processes: &mut [Process]) -> Result<Metrics, ScheduleError> {
        self.schedule_traced(processes).map(|(metrics, _)| metrics)
    }

    /// Runs the policy and returns metrics together with the CPU timeline.
    fn schedule_traced(
        &self,
        processes: &mut [Process],
    ) -> Result<(Metrics, Trace), ScheduleError> {
        let mut trace = Trace::new();
        self.simulate(processes, &mut trace)?;
        let metrics = Metrics::calculate(processes)?;
        Ok((metrics, trace))
    }
}

/// Checks a set before a run and clears any state left by a previous run.
fn prepare(processes: &mut [Process]) -> Result<(), ScheduleError> {
    if processes.is_empty() {
        return Err(ScheduleError::EmptyInput);
    }
    validate_processes(processes).map_err(ScheduleError::InvalidInput)?;
    for p in processes.iter_mut() {
        p.reset();
    }
    Ok(())
}

/// The built-in policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Non-preemptive Shortest-Job-First.
    Sjf,
    /// Shortest-Remaining-Time-First.
    Srtf,
    /// Round Robin.
    RoundRobin,
}

impl Algorithm {
    /// Every policy, in reporting order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::RoundRobin,
    ];

    /// Builds the scheduler. `quantum` is only read by Round Robin.
    pub fn scheduler(self, quantum: i64) -> Result<Box<dyn Scheduler>, ScheduleError> {
        Ok(match self {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(Sjf),
            Algorithm::Srtf => Box::new(Srtf),
            Algorithm::RoundRobin => Box::new(RoundRobin::new(quantum)?),
        })
    }

    /// Command-line keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::Srtf => "srtf",
            Algorithm::RoundRobin => "rr",
        }
    }

    /// Title used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF (non-preemptive)",
            Algorithm::Srtf => "SRTF (preemptive SJF)",
            Algorithm::RoundRobin => "Round Robin",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Error returned when an algorithm keyword is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm '{0}' (expected fcfs, sjf, srtf, rr or all)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Algorithm::Fcfs),
            "sjf" => Ok(Algorithm::Sjf),
            "srtf" => Ok(Algorithm::Srtf),
            "rr" => Ok(Algorithm::RoundRobin),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// One algorithm or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlgorithmSelection {
    /// Every policy in reporting order.
    #[default]
    All,
    /// A single policy.
    Only(Algorithm),
}

impl AlgorithmSelection {
    /// The selected algorithms in reporting order.
    pub fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmSelection::All => Algorithm::ALL.to_vec(),
            AlgorithmSelection::Only(a) => vec![a],
        }
    }
}

impl FromStr for AlgorithmSelection {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(AlgorithmSelection::All)
        } else {
            s.parse().map(AlgorithmSelection::Only)
        }
    }
}
