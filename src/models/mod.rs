//! Simulation domain models.
//!
//! Provides the data types shared by every scheduling policy: the process
//! record and the execution trace a run leaves behind.
//!
//! # Domain Mappings
//!
//! | u-cpusched | Textbook term |
//! |------------|---------------|
//! | Process | PCB / job |
//! | Slice | CPU burst on the Gantt chart |
//! | Trace | Dispatch timeline |

mod process;
mod trace;

pub use process::{Process, ProcessRecord};
pub use trace::{Slice, Trace};
