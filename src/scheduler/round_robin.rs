//! Round Robin.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time.
//! 2. Admit every process that has arrived into a FIFO ready queue.
//! 3. Run the queue head for `min(remaining, quantum)` units.
//! 4. Admit processes that arrived during that slice.
//! 5. Requeue the head at the tail if it still has work.
//!
//! Step 4 precedes step 5: a process arriving at the exact instant a slice
//! expires is queued ahead of the preempted process.
//!
//! The ready queue is a growable `VecDeque`, so it never overflows.

use std::collections::VecDeque;

use log::debug;

use super::ordering::sort_by_arrival;
use super::{prepare, Scheduler, DEFAULT_QUANTUM};
use crate::error::ScheduleError;
use crate::models::{Process, Trace};

/// Round Robin policy with a fixed time quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round Robin policy.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidQuantum`] if `quantum <= 0`.
    pub fn new(quantum: i64) -> Result<Self, ScheduleError> {
        if quantum <= 0 {
            return Err(ScheduleError::InvalidQuantum(quantum));
        }
        Ok(Self { quantum })
    }

    /// Maximum CPU slice per dispatch.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
        }
    }
}

/// Moves every process with `arrival_time <= now` onto the ready queue.
fn admit_arrivals(
    processes: &[Process],
    now: i64,
    next_arrival_idx: &mut usize,
    ready: &mut VecDeque<usize>,
) {
    while *next_arrival_idx < processes.len() && processes[*next_arrival_idx].arrival_time <= now {
        ready.push_back(*next_arrival_idx);
        *next_arrival_idx += 1;
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }

    fn simulate(&self, processes: &mut [Process], trace: &mut Trace) -> Result<(), ScheduleError> {
        prepare(processes)?;
        sort_by_arrival(processes);

        let n = processes.len();
        let mut ready: VecDeque<usize> = VecDeque::with_capacity(n);
        let mut next_arrival_idx = 0;
        let mut current_time = 0;
        let mut completed = 0;

        while completed < n {
            admit_arrivals(processes, current_time, &mut next_arrival_idx, &mut ready);

            let Some(index) = ready.pop_front() else {
                match processes.get(next_arrival_idx) {
                    Some(next) => {
                        debug!("rr: idle {current_time} -> {}", next.arrival_time);
                        current_time = next.arrival_time;
                        continue;
                    }
                    // Unreachable while work remains
                    None => break,
                }
            };

            let p = &mut processes[index];
            p.dispatch(current_time);
            let slice = p.remaining_time().min(self.quantum);
            let start = current_time;
            current_time += slice;
            p.execute(slice, current_time);
            trace.record(&p.id, start, current_time);
            let finished = p.is_completed();

            admit_arrivals(processes, current_time, &mut next_arrival_idx, &mut ready);

            if finished {
                debug!("rr: {} completed at {current_time}", processes[index].id);
                completed += 1;
            } else {
                ready.push_back(index);
            }
        }

        Ok(())
    }
}
