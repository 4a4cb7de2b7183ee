use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use u_cpusched::input::{load_processes, DEFAULT_INPUT_PATH};
use u_cpusched::report;
use u_cpusched::scheduler::{AlgorithmSelection, DEFAULT_QUANTUM};
use u_cpusched::simulation::Simulation;
use u_cpusched::workload::WorkloadGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Simulate CPU scheduling algorithms over a process set.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Process data file (CSV: id,arrival_time,burst_time,priority)
    #[arg(short = 'f', long = "file", default_value = DEFAULT_INPUT_PATH)]
    file: PathBuf,

    /// Algorithm to run: fcfs, sjf, srtf, rr or all
    #[arg(short = 'a', long = "algorithm", default_value = "all")]
    algorithm: AlgorithmSelection,

    /// Time quantum for Round Robin
    #[arg(short = 'q', long = "quantum", default_value_t = DEFAULT_QUANTUM, allow_negative_numbers = true)]
    quantum: i64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Generate N random processes instead of reading a file
    #[arg(long, value_name = "N", conflicts_with = "file")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 42, requires = "random")]
    seed: u64,
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    anyhow::ensure!(args.quantum > 0, "time quantum must be positive");

    let (processes, source) = match args.random {
        Some(count) => {
            let mut rng = StdRng::seed_from_u64(args.seed);
            let processes = WorkloadGenerator::new(count).generate(&mut rng);
            (processes, format!("random workload (seed {})", args.seed))
        }
        None => {
            let processes = load_processes(&args.file)
                .with_context(|| format!("reading processes from {}", args.file.display()))?;
            (processes, args.file.display().to_string())
        }
    };

    let runs = Simulation::new(processes)
        .with_algorithms(args.algorithm.algorithms())
        .with_quantum(args.quantum)
        .run()
        .context("simulation failed")?;

    match args.format {
        OutputFormat::Json => println!("{}", report::render_json(&runs)?),
        OutputFormat::Table => {
            let count = runs.first().map_or(0, |r| r.processes.len());
            println!("Read {count} processes from {source}");
            for run in &runs {
                match run.quantum {
                    Some(q) => println!(
                        "\nRunning {} algorithm with time quantum = {q}...",
                        run.algorithm.label()
                    ),
                    None => println!("\nRunning {} algorithm...", run.algorithm.label()),
                }
                print!("{}", report::render_table(run)?);
            }
        }
    }

    Ok(())
}
