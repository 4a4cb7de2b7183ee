//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time.
//! 2. Walk the sorted list; if the CPU is ahead of the next arrival it idles
//!    until that arrival.
//! 3. Each process runs to completion once dispatched.
//!
//! # Complexity
//! O(n log n).

use log::debug;

use super::ordering::sort_by_arrival;
use super::{prepare, Scheduler};
use crate::error::ScheduleError;
use crate::models::{Process, Trace};

/// First-Come-First-Served policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }

    fn simulate(&self, processes: &mut [Process], trace: &mut Trace) -> Result<(), ScheduleError> {
        prepare(processes)?;
        sort_by_arrival(processes);

        let mut current_time = 0;
        for p in processes.iter_mut() {
            if current_time < p.arrival_time {
                debug!("fcfs: idle {current_time} -> {}", p.arrival_time);
                current_time = p.arrival_time;
            }

            p.dispatch(current_time);
            let start = current_time;
            current_time += p.burst_time;
            p.execute(p.burst_time, current_time);
            trace.record(&p.id, start, current_time);
            debug!("fcfs: {} ran {start}..{current_time}", p.id);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_scenario() {
        let mut ps = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ];
        let m = Fcfs.schedule(&mut ps).unwrap();

        let completions: Vec<_> = ps.iter().map(|p| p.completion_time().unwrap()).collect();
        assert_eq!(completions, vec![5, 8, 16]);
        let waits: Vec<_> = ps.iter().map(|p| p.waiting_time().unwrap()).collect();
        assert_eq!(waits, vec![0, 4, 6]);
        assert!((m.avg_waiting_time - 10.0 / 3.0).abs() < 1e-10);
        assert!((m.avg_turnaround_time - 26.0 / 3.0).abs() < 1e-10);
        assert!((m.avg_response_time - m.avg_waiting_time).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_sorts_by_arrival() {
        let mut ps = vec![
            Process::new("late", 4, 1),
            Process::new("early", 0, 2),
            Process::new("tie_a", 1, 1),
            Process::new("tie_b", 1, 1),
        ];
        let (_, trace) = Fcfs.schedule_traced(&mut ps).unwrap();
        let ids: Vec<&str> = ps.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "tie_a", "tie_b", "late"]);
        assert_eq!(trace.dispatch_order(), ids);
    }

    #[test]
    fn test_fcfs_idles_until_arrival() {
        let mut ps = vec![Process::new("A", 0, 2), Process::new("B", 5, 1)];
        let (_, trace) = Fcfs.schedule_traced(&mut ps).unwrap();
        assert_eq!(ps[1].completion_time(), Some(6));
        assert_eq!(ps[1].response_time(), Some(0));
        assert_eq!(trace.idle_time(), 3);
    }

    #[test]
    fn test_fcfs_single_process() {
        let mut ps = vec![Process::new("P1", 3, 4)];
        let m = Fcfs.schedule(&mut ps).unwrap();
        assert_eq!(ps[0].completion_time(), Some(7));
        assert_eq!(m.avg_waiting_time, 0.0);
        assert_eq!(m.avg_turnaround_time, 4.0);
    }
}
