//! Command-line front end: flags in display units (MHz, pF, µH), reports on
//! any writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::errors::Result;
use crate::report::{self, LabelledCurve, Topology};
use crate::tank::parallel::solve_batch;
use crate::tank::{BatchConfig, FrequencyRange, ProgressiveTankSolver, TankSolver, VariableCapacitor};
use crate::units::{Capacitance, Frequency, Inductance, Prefix};

/// Component values for VFO tank circuits
#[derive(Parser)]
#[command(name = "vfo-designer", version)]
pub struct Cli {
    #[command(subcommand)]
    topology: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parallel L-C tank with a series-padded tuning capacitor
    Parallel(ParallelArgs),
    /// Three-capacitor progressive tank
    Progressive(ProgressiveArgs),
}

#[derive(Args)]
struct Band {
    /// Lowest frequency of the band in MHz
    #[arg(long)]
    f_min: f64,

    /// Highest frequency of the band in MHz
    #[arg(long)]
    f_max: f64,
}

impl Band {
    fn to_range(&self) -> Result<FrequencyRange> {
        FrequencyRange::new(mhz(self.f_min), mhz(self.f_max))
    }
}

#[derive(Args)]
struct Output {
    /// Write tuning curves as CSV to this file
    #[arg(long)]
    curves: Option<PathBuf>,

    /// Samples per tuning curve
    #[arg(long, default_value_t = 1000)]
    samples: usize,

    /// Print the tank schematic after the results
    #[arg(long)]
    schematic: bool,
}

#[derive(Args)]
struct ParallelArgs {
    #[command(flatten)]
    band: Band,

    /// Minimum tuning capacitance in pF
    #[arg(long)]
    cv_min: f64,

    /// Maximum tuning capacitance in pF
    #[arg(long)]
    cv_max: f64,

    /// Smallest series capacitance tried, in pF
    #[arg(long, default_value_t = 1.0)]
    series_start: f64,

    /// Largest series capacitance tried, in pF
    #[arg(long, default_value_t = 100.0)]
    series_stop: f64,

    /// Number of log-spaced series capacitances
    #[arg(long, default_value_t = 10)]
    series_count: usize,

    #[command(flatten)]
    output: Output,
}

#[derive(Args)]
struct ProgressiveArgs {
    #[command(flatten)]
    band: Band,

    /// Tank inductance in uH
    #[arg(long)]
    inductance: f64,

    /// Coupling capacitor C1 in pF
    #[arg(long)]
    c1: f64,

    /// Maximum tuning capacitance in pF
    #[arg(long)]
    cv_max: f64,

    #[command(flatten)]
    output: Output,
}

fn mhz(value: f64) -> f64 {
    Frequency::from_prefixed(value, Prefix::Mega).value()
}

fn pf(value: f64) -> f64 {
    Capacitance::from_prefixed(value, Prefix::Pico).value()
}

fn uh(value: f64) -> f64 {
    Inductance::from_prefixed(value, Prefix::Micro).value()
}

fn open_csv(path: &Path) -> Result<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}

fn run_parallel(args: &ParallelArgs, out: &mut impl Write) -> Result<()> {
    let variable = VariableCapacitor::new(pf(args.cv_min), pf(args.cv_max))?;
    let band = args.band.to_range()?;
    let config = BatchConfig {
        series_start: pf(args.series_start),
        series_stop: pf(args.series_stop),
        series_count: args.series_count,
    };

    let batch = solve_batch(variable, band, &config)?;
    report::write_parallel_table(&batch.rows, out)?;
    if !batch.failures.is_empty() {
        writeln!(out)?;
        report::write_failures(&batch.failures, out)?;
    }

    if let Some(path) = &args.output.curves {
        let curves: Vec<_> = batch
            .rows
            .iter()
            .map(|row| {
                let c_series = Capacitance::new(row.series_capacitance);
                LabelledCurve {
                    label: Some(format!("{:.4}", c_series.in_prefix(Prefix::Pico))),
                    curve: row.sweep(variable.c_min(), variable.c_max(), args.output.samples),
                }
            })
            .collect();
        let mut csv = open_csv(path)?;
        report::write_curves_csv(&curves, &mut csv)?;
        csv.flush()?;
        tracing::info!(path = %path.display(), curves = curves.len(), "tuning curves written");
    }

    if args.output.schematic {
        writeln!(out)?;
        write!(out, "{}", report::schematic(Topology::Parallel))?;
    }
    Ok(())
}

fn run_progressive(args: &ProgressiveArgs, out: &mut impl Write) -> Result<()> {
    let solver = ProgressiveTankSolver::new(
        uh(args.inductance),
        pf(args.c1),
        pf(args.cv_max),
        args.band.to_range()?,
    )?;
    let design = solver.solve()?;
    report::write_progressive_table(&design, out)?;

    if let Some(path) = &args.output.curves {
        let curves = [LabelledCurve {
            label: None,
            curve: solver.sweep(&design, args.output.samples),
        }];
        let mut csv = open_csv(path)?;
        report::write_curves_csv(&curves, &mut csv)?;
        csv.flush()?;
        tracing::info!(path = %path.display(), "tuning curve written");
    }

    if args.output.schematic {
        writeln!(out)?;
        write!(out, "{}", report::schematic(Topology::Progressive))?;
    }
    Ok(())
}

/// Runs the selected design and writes its report to `out`.
///
/// Curve CSV files named on the command line are written alongside.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.topology {
        Command::Parallel(args) => run_parallel(args, out),
        Command::Progressive(args) => run_progressive(args, out),
    }
}
