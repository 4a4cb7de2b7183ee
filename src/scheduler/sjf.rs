//! Non-preemptive Shortest-Job-First.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time.
//! 2. Among arrived, unfinished processes pick the smallest burst time.
//!    Ties go to the earliest arrival (lowest index).
//! 3. If nothing has arrived, jump to the next arrival.
//! 4. The chosen process runs to completion.
//!
//! # Complexity
//! O(n²): every selection rescans the whole set.
//!
//! # Reference
//! Smith (1956), optimal for minimizing mean flow time on a single machine.

use log::debug;

use super::ordering::{next_arrival, select_min, sort_by_arrival};
use super::{prepare, Scheduler};
use crate::error::ScheduleError;
use crate::models::{Process, Trace};

/// Non-preemptive Shortest-Job-First policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl Scheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn description(&self) -> &'static str {
        "Shortest Job First (non-preemptive)"
    }

    fn simulate(&self, processes: &mut [Process], trace: &mut Trace) -> Result<(), ScheduleError> {
        prepare(processes)?;
        sort_by_arrival(processes);

        let n = processes.len();
        let mut current_time = 0;
        let mut completed = 0;

        while completed < n {
            let Some(index) = select_min(processes, current_time, |p| p.burst_time) else {
                // Every unfinished process is still in the future
                if let Some(arrival) = next_arrival(processes) {
                    debug!("sjf: idle {current_time} -> {arrival}");
                    current_time = arrival;
                }
                continue;
            };

            let p = &mut processes[index];
            p.dispatch(current_time);
            let start = current_time;
            current_time += p.burst_time;
            p.execute(p.burst_time, current_time);
            trace.record(&p.id, start, current_time);
            debug!("sjf: {} ran {start}..{current_time}", p.id);
            completed += 1;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completion(ps: &[Process], id: &str) -> Option<i64> {
        ps.iter().find(|p| p.id == id).and_then(Process::completion_time)
    }

    #[test]
    fn test_sjf_scenario() {
        let mut ps = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ];
        Sjf.schedule(&mut ps).unwrap();
        assert_eq!(completion(&ps, "P1"), Some(5));
        assert_eq!(completion(&ps, "P2"), Some(8));
        assert_eq!(completion(&ps, "P3"), Some(16));
    }

    #[test]
    fn test_sjf_picks_shortest_arrived() {
        let mut ps = vec![
            Process::new("long", 0, 6),
            Process::new("mid", 1, 4),
            Process::new("short", 2, 1),
        ];
        let (_, trace) = Sjf.schedule_traced(&mut ps).unwrap();
        // long runs first (only one arrived), then short beats mid
        assert_eq!(trace.dispatch_order(), vec!["long", "short", "mid"]);
        assert_eq!(completion(&ps, "short"), Some(7));
        assert_eq!(completion(&ps, "mid"), Some(11));
    }

    #[test]
    fn test_sjf_tie_goes_to_earlier_arrival() {
        let mut ps = vec![
            Process::new("blocker", 0, 5),
            Process::new("later", 3, 2),
            Process::new("earlier", 1, 2),
        ];
        let (_, trace) = Sjf.schedule_traced(&mut ps).unwrap();
        assert_eq!(trace.dispatch_order(), vec!["blocker", "earlier", "later"]);
    }

    #[test]
    fn test_sjf_does_not_preempt() {
        let mut ps = vec![Process::new("A", 0, 10), Process::new("B", 1, 1)];
        Sjf.schedule(&mut ps).unwrap();
        assert_eq!(completion(&ps, "A"), Some(10));
        assert_eq!(completion(&ps, "B"), Some(11));
    }

    #[test]
    fn test_sjf_idle_gap() {
        let mut ps = vec![Process::new("A", 2, 3), Process::new("B", 10, 1)];
        let (_, trace) = Sjf.schedule_traced(&mut ps).unwrap();
        assert_eq!(completion(&ps, "A"), Some(5));
        assert_eq!(completion(&ps, "B"), Some(11));
        assert_eq!(trace.idle_time(), 7);
    }
}
