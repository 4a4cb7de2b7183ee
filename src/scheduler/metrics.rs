//! Schedule quality metrics.
//!
//! Computes the classic per-process averages from a completed process set.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::Process;

/// Average timings over one completed process set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean of completion - arrival.
    pub avg_turnaround_time: f64,
    /// Mean of turnaround - burst.
    pub avg_waiting_time: f64,
    /// Mean of first dispatch - arrival.
    pub avg_response_time: f64,
}

impl Metrics {
    /// Computes metrics over a completed process set.
    ///
    /// # Errors
    /// - [`ScheduleError::EmptyInput`] when `processes` is empty
    /// - [`ScheduleError::IncompleteProcess`] when any process has not finished
    pub fn calculate(processes: &[Process]) -> Result<Self, ScheduleError> {
        if processes.is_empty() {
            return Err(ScheduleError::EmptyInput);
        }

        // Per-process times fit in i64; their sums need more room.
        let mut total_turnaround: i128 = 0;
        let mut total_waiting: i128 = 0;
        let mut total_response: i128 = 0;

        for p in processes {
            let (Some(turnaround), Some(waiting), Some(response)) =
                (p.turnaround_time(), p.waiting_time(), p.response_time())
            else {
                return Err(ScheduleError::IncompleteProcess(p.id.clone()));
            };
            total_turnaround += i128::from(turnaround);
            total_waiting += i128::from(waiting);
            total_response += i128::from(response);
        }

        let n = processes.len() as f64;
        Ok(Self {
            avg_turnaround_time: total_turnaround as f64 / n,
            avg_waiting_time: total_waiting as f64 / n,
            avg_response_time: total_response as f64 / n,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(id: &str, arrival: i64, burst: i64, first_dispatch: i64, completion: i64) -> Process {
        let mut p = Process::new(id, arrival, burst);
        p.dispatch(first_dispatch);
        p.execute(burst, completion);
        p
    }

    #[test]
    fn test_metrics_basic() {
        // FCFS trace of P1(0,5) P2(1,3) P3(2,8)
        let processes = vec![
            completed("P1", 0, 5, 0, 5),
            completed("P2", 1, 3, 5, 8),
            completed("P3", 2, 8, 8, 16),
        ];
        let m = Metrics::calculate(&processes).unwrap();
        assert!((m.avg_turnaround_time - 26.0 / 3.0).abs() < 1e-10);
        assert!((m.avg_waiting_time - 10.0 / 3.0).abs() < 1e-10);
        assert!((m.avg_response_time - 10.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_turnaround_is_waiting_plus_mean_burst() {
        let processes = vec![
            completed("A", 0, 4, 0, 9),
            completed("B", 3, 2, 4, 6),
        ];
        let m = Metrics::calculate(&processes).unwrap();
        let mean_burst = (4.0 + 2.0) / 2.0;
        assert!((m.avg_turnaround_time - (m.avg_waiting_time + mean_burst)).abs() < 1e-10);
        assert!(m.avg_turnaround_time >= m.avg_waiting_time);
        assert!(m.avg_waiting_time >= 0.0);
    }

    #[test]
    fn test_metrics_sums_past_i64() {
        let half = i64::MAX / 2;
        let processes = vec![
            completed("A", 0, half, 0, half),
            completed("B", 0, half - 1, half, i64::MAX - 1),
        ];
        let m = Metrics::calculate(&processes).unwrap();
        let expected = (half as f64 + (i64::MAX - 1) as f64) / 2.0;
        assert!((m.avg_turnaround_time - expected).abs() / expected < 1e-12);
        assert!((m.avg_response_time - half as f64 / 2.0).abs() / (half as f64) < 1e-12);
    }

    #[test]
    fn test_metrics_empty() {
        assert!(matches!(
            Metrics::calculate(&[]),
            Err(ScheduleError::EmptyInput)
        ));
    }

    #[test]
    fn test_metrics_incomplete_process() {
        let processes = vec![completed("P1", 0, 2, 0, 2), Process::new("P2", 0, 3)];
        match Metrics::calculate(&processes) {
            Err(ScheduleError::IncompleteProcess(id)) => assert_eq!(id, "P2"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_metrics_serde_roundtrip() {
        let m = Metrics {
            avg_turnaround_time: 11.5,
            avg_waiting_time: 6.0,
            avg_response_time: 1.0,
        };
        let json = serde_json::to_string(&m).unwrap();
        let back: Metrics = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
