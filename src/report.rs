//! Result rendering.
//!
//! Turns completed runs into a fixed-width text table or JSON. Rendering
//! never touches the runs themselves.

use std::fmt::{self, Write};

use serde::Serialize;

use crate::models::{Process, Slice};
use crate::scheduler::Metrics;
use crate::simulation::AlgorithmRun;

const RULE: &str =
    "------------------------------------------------------------------------------------------------";

/// One process with its derived timings, as reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessRow {
    pub id: String,
    pub arrival_time: i64,
    pub burst_time: i64,
    pub priority: i32,
    pub completion_time: Option<i64>,
    pub turnaround_time: Option<i64>,
    pub waiting_time: Option<i64>,
    pub response_time: Option<i64>,
}

impl From<&Process> for ProcessRow {
    fn from(p: &Process) -> Self {
        Self {
            id: p.id.clone(),
            arrival_time: p.arrival_time,
            burst_time: p.burst_time,
            priority: p.priority,
            completion_time: p.completion_time(),
            turnaround_time: p.turnaround_time(),
            waiting_time: p.waiting_time(),
            response_time: p.response_time(),
        }
    }
}

/// Serializable view of one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport<'a> {
    pub algorithm: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
    pub processes: Vec<ProcessRow>,
    pub metrics: &'a Metrics,
    pub trace: &'a [Slice],
}

impl<'a> From<&'a AlgorithmRun> for RunReport<'a> {
    fn from(run: &'a AlgorithmRun) -> Self {
        Self {
            algorithm: run.algorithm.label(),
            quantum: run.quantum,
            processes: run.processes.iter().map(ProcessRow::from).collect(),
            metrics: &run.metrics,
            trace: run.trace.slices(),
        }
    }
}

/// Renders the process table followed by the metrics block.
pub fn render_table(run: &AlgorithmRun) -> Result<String, fmt::Error> {
    let mut out = String::new();
    render_processes(&mut out, &run.processes)?;
    render_metrics(&mut out, &run.metrics, run.algorithm.label())?;
    Ok(out)
}

/// Renders a fixed-width table of processes and their derived timings.
pub fn render_processes(out: &mut impl Write, processes: &[Process]) -> fmt::Result {
    writeln!(
        out,
        "\n{:<10} {:<12} {:<10} {:<10} {:<15} {:<15} {:<15} {:<15}",
        "Process", "Arrival", "Burst", "Priority", "Completion", "Turnaround", "Waiting", "Response"
    )?;
    writeln!(out, "{RULE}")?;
    for p in processes {
        writeln!(
            out,
            "{:<10} {:<12} {:<10} {:<10} {:<15} {:<15} {:<15} {:<15}",
            p.id,
            p.arrival_time,
            p.burst_time,
            p.priority,
            cell(p.completion_time()),
            cell(p.turnaround_time()),
            cell(p.waiting_time()),
            cell(p.response_time()),
        )?;
    }
    writeln!(out, "{RULE}")
}

/// Renders the averages block for one policy.
pub fn render_metrics(out: &mut impl Write, metrics: &Metrics, title: &str) -> fmt::Result {
    writeln!(out, "\n{title} Scheduling Algorithm Metrics:")?;
    writeln!(
        out,
        "Average Turnaround Time: {:.2}",
        metrics.avg_turnaround_time
    )?;
    writeln!(out, "Average Waiting Time: {:.2}", metrics.avg_waiting_time)?;
    writeln!(out, "Average Response Time: {:.2}", metrics.avg_response_time)?;
    writeln!(out, "{RULE}")
}

/// Renders every run as a pretty-printed JSON array.
pub fn render_json(runs: &[AlgorithmRun]) -> serde_json::Result<String> {
    let reports: Vec<RunReport<'_>> = runs.iter().map(RunReport::from).collect();
    serde_json::to_string_pretty(&reports)
}

fn cell(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
