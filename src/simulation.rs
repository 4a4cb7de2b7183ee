//! Simulation driver.
//!
//! Runs a set of policies over one loaded process set. Every policy gets
//! its own deep copy, so the caller's set is never mutated and no two runs
//! share state.

use log::info;

use crate::error::ScheduleError;
use crate::models::{Process, Trace};
use crate::scheduler::{Algorithm, Metrics, RoundRobin, DEFAULT_QUANTUM};

/// The outcome of one policy over one copy of the input.
#[derive(Debug, Clone)]
pub struct AlgorithmRun {
    /// Policy that produced this run.
    pub algorithm: Algorithm,
    /// Time quantum, for Round Robin only.
    pub quantum: Option<i64>,
    /// Completed processes, in the order the policy left them.
    pub processes: Vec<Process>,
    /// Averaged metrics.
    pub metrics: Metrics,
    /// CPU timeline.
    pub trace: Trace,
}

/// A batch of policy runs over one process set.
///
/// # Example
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::Algorithm;
/// use u_cpusched::simulation::Simulation;
///
/// let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let runs = Simulation::new(processes)
///     .with_algorithms(vec![Algorithm::Fcfs, Algorithm::RoundRobin])
///     .with_quantum(2)
///     .run()
///     .unwrap();
/// assert_eq!(runs.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    processes: Vec<Process>,
    algorithms: Vec<Algorithm>,
    quantum: i64,
}

impl Simulation {
    /// Creates a simulation running every policy with the default quantum.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            algorithms: Algorithm::ALL.to_vec(),
            quantum: DEFAULT_QUANTUM,
        }
    }

    /// Sets which policies run, in order.
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// The input set, untouched by any run.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Runs every selected policy.
    ///
    /// The quantum is checked up front, so a bad quantum fails before any
    /// policy has run.
    pub fn run(&self) -> Result<Vec<AlgorithmRun>, ScheduleError> {
        if self.algorithms.contains(&Algorithm::RoundRobin) {
            RoundRobin::new(self.quantum)?;
        }

        self.algorithms
            .iter()
            .map(|&algorithm| self.run_one(algorithm))
            .collect()
    }

    fn run_one(&self, algorithm: Algorithm) -> Result<AlgorithmRun, ScheduleError> {
        let scheduler = algorithm.scheduler(self.quantum)?;
        let mut processes = try_clone(&self.processes)?;

        info!(
            "running {} over {} processes",
            scheduler.description(),
            processes.len()
        );
        let (metrics, trace) = scheduler.schedule_traced(&mut processes)?;
        info!(
            "{}: avg turnaround {:.2}, avg waiting {:.2}, avg response {:.2}",
            scheduler.name(),
            metrics.avg_turnaround_time,
            metrics.avg_waiting_time,
            metrics.avg_response_time
        );

        Ok(AlgorithmRun {
            algorithm,
            quantum: (algorithm == Algorithm::RoundRobin).then_some(self.quantum),
            processes,
            metrics,
            trace,
        })
    }
}

/// Deep-copies a process set, reporting allocation failure instead of aborting.
pub fn try_clone(processes: &[Process]) -> Result<Vec<Process>, ScheduleError> {
    let mut copy = Vec::new();
    copy.try_reserve_exact(processes.len())?;
    copy.extend(processes.iter().cloned());
    Ok(copy)
}
