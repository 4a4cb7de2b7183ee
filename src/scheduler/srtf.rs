//! Shortest-Remaining-Time-First (preemptive SJF).
//!
//! # Algorithm
//!
//! Same selection loop as SJF, keyed by remaining time, but the chosen
//! process runs for a single time unit before the set is rescanned. A
//! newly arrived process with less remaining work therefore takes the CPU
//! on the very next unit; no explicit preemption event exists.
//!
//! # Complexity
//! O(n × total burst time).

use log::debug;

use super::ordering::{next_arrival, select_min, sort_by_arrival};
use super::{prepare, Scheduler};
use crate::error::ScheduleError;
use crate::models::{Process, Trace};

/// Shortest-Remaining-Time-First policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl Scheduler for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First (preemptive SJF)"
    }

    fn simulate(&self, processes: &mut [Process], trace: &mut Trace) -> Result<(), ScheduleError> {
        prepare(processes)?;
        sort_by_arrival(processes);

        let n = processes.len();
        let mut current_time = 0;
        let mut completed = 0;
        let mut running: Option<usize> = None;

        while completed < n {
            let Some(index) = select_min(processes, current_time, Process::remaining_time) else {
                if let Some(arrival) = next_arrival(processes) {
                    debug!("srtf: idle {current_time} -> {arrival}");
                    current_time = arrival;
                }
                continue;
            };

            if let Some(prev) = running.filter(|&prev| prev != index) {
                if !processes[prev].is_completed() {
                    debug!(
                        "srtf: {} preempted by {} at {current_time}",
                        processes[prev].id, processes[index].id
                    );
                }
            }
            running = Some(index);

            let p = &mut processes[index];
            p.dispatch(current_time);
            current_time += 1;
            p.execute(1, current_time);
            trace.record(&p.id, current_time - 1, current_time);

            if p.is_completed() {
                debug!("srtf: {} completed at {current_time}", p.id);
                completed += 1;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(ps: &'a [Process], id: &str) -> &'a Process {
        ps.iter().find(|p| p.id == id).unwrap()
    }

    #[test]
    fn test_srtf_scenario() {
        let mut ps = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ];
        let (m, trace) = Srtf.schedule_traced(&mut ps).unwrap();

        assert_eq!(find(&ps, "P2").completion_time(), Some(4));
        assert_eq!(find(&ps, "P1").completion_time(), Some(8));
        assert_eq!(find(&ps, "P3").completion_time(), Some(16));
        assert_eq!(trace.dispatch_order(), vec!["P1", "P2", "P1", "P3"]);

        // Waiting: P1 3, P2 0, P3 6; response: P1 0, P2 0, P3 6
        assert!((m.avg_waiting_time - 3.0).abs() < 1e-10);
        assert!((m.avg_response_time - 2.0).abs() < 1e-10);
        assert!((m.avg_turnaround_time - 25.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_srtf_preemption_splits_response_and_waiting() {
        let mut ps = vec![Process::new("A", 0, 6), Process::new("B", 2, 1)];
        Srtf.schedule(&mut ps).unwrap();
        let a = find(&ps, "A");
        assert_eq!(a.response_time(), Some(0));
        assert_eq!(a.waiting_time(), Some(1));
        assert!(a.response_time() < a.waiting_time());
        assert_eq!(find(&ps, "B").completion_time(), Some(3));
    }

    #[test]
    fn test_srtf_equal_remaining_keeps_earlier_arrival() {
        // At t=1 A has 2 left and B needs 2: A keeps the CPU.
        let mut ps = vec![Process::new("A", 0, 3), Process::new("B", 1, 2)];
        let (_, trace) = Srtf.schedule_traced(&mut ps).unwrap();
        assert_eq!(trace.dispatch_order(), vec!["A", "B"]);
        assert_eq!(find(&ps, "A").completion_time(), Some(3));
    }

    #[test]
    fn test_srtf_idle_jump() {
        let mut ps = vec![Process::new("A", 4, 2)];
        let (_, trace) = Srtf.schedule_traced(&mut ps).unwrap();
        assert_eq!(ps[0].completion_time(), Some(6));
        assert_eq!(ps[0].response_time(), Some(0));
        assert_eq!(trace.slices().len(), 1);
        assert_eq!(trace.slices()[0].start, 4);
    }
}
