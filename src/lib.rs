//! CPU scheduling simulator.
//!
//! Simulates classic uniprocessor scheduling disciplines over a fixed,
//! pre-loaded process set and reports average turnaround, waiting, and
//! response time.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Trace`, `Slice`
//! - **`scheduler`**: Policies (`Fcfs`, `Sjf`, `Srtf`, `RoundRobin`) and `Metrics`
//! - **`validation`**: Input integrity checks (duplicate IDs, negative arrivals, empty bursts)
//! - **`simulation`**: Driver that runs each policy on its own copy of the input
//! - **`input`**: CSV process loading
//! - **`report`**: Text table and JSON rendering
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Process;
//! use u_cpusched::scheduler::{RoundRobin, Scheduler};
//!
//! let mut processes = vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 1, 3),
//!     Process::new("P3", 2, 8),
//! ];
//! let metrics = RoundRobin::new(2).unwrap().schedule(&mut processes).unwrap();
//! assert!((metrics.avg_waiting_time - 6.0).abs() < 1e-9);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::{LoadError, ScheduleError};
