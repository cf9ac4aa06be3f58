//! Text reports for solved tanks: result tables, tuning-curve CSV and schematics.
//!
//! Everything here consumes finished results; nothing feeds back into the
//! solvers.

use std::io::Write;

use crate::errors::{Result, TankError};
use crate::math::Scalar;
use crate::sweep::TuningCurve;
use crate::tank::{ParallelTankResult, ProgressiveTankResult, TankNetwork};
use crate::units::{Capacitance, Frequency, Inductance, Prefix};

const COLUMN: usize = 20;

/// Tank topologies with a fixed schematic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Series-padded tuning capacitor with a parallel capacitor.
    Parallel,
    /// Three-capacitor progressive network.
    Progressive,
}

const PARALLEL_SCHEMATIC: &str = "\
 -------------------
 |       |        |
C        \u{2260} C_v    |
C  L     |        = C_p
C        |        |
C        = C_s    |
 |       |        |
 -------------------
";

const PROGRESSIVE_SCHEMATIC: &str = "\
 ---------------------------
 |        |        |       |
C         |        = C1    |
C  L      = C3     |       |
C         |        +-------+
C         |        |       |
 |        |        = C2    \u{2260} C_v
 |        |        |       |
 ---------------------------
";

/// ASCII diagram of `topology`.
#[must_use]
pub const fn schematic(topology: Topology) -> &'static str {
    match topology {
        Topology::Parallel => PARALLEL_SCHEMATIC,
        Topology::Progressive => PROGRESSIVE_SCHEMATIC,
    }
}

fn pico(farads: Scalar) -> Scalar {
    Capacitance::new(farads).in_prefix(Prefix::Pico)
}

fn micro(henries: Scalar) -> Scalar {
    Inductance::new(henries).in_prefix(Prefix::Micro)
}

fn write_header<W: Write>(writer: &mut W, columns: &[&str]) -> Result<()> {
    for column in columns {
        write!(writer, "{column:<COLUMN$}")?;
    }
    writeln!(writer)?;
    writeln!(writer, "{}", "-".repeat(COLUMN * columns.len()))?;
    Ok(())
}

/// Writes parallel-tank rows as a fixed-width table in pF and µH.
///
/// Format:
/// ```text
/// Series C [pF]       Parallel C [pF]     Parallel L [uH]
/// ------------------------------------------------------------
/// 100.0000            217.6279            6.9829
/// ```
pub fn write_parallel_table<W: Write>(rows: &[ParallelTankResult], writer: &mut W) -> Result<()> {
    write_header(writer, &["Series C [pF]", "Parallel C [pF]", "Parallel L [uH]"])?;
    for row in rows {
        writeln!(
            writer,
            "{:<COLUMN$.4}{:<COLUMN$.4}{:<COLUMN$.4}",
            pico(row.series_capacitance),
            pico(row.parallel_capacitance),
            micro(row.inductance),
        )?;
    }
    Ok(())
}

/// Writes one progressive-tank design as a fixed-width table in pF and µH.
pub fn write_progressive_table<W: Write>(result: &ProgressiveTankResult, writer: &mut W) -> Result<()> {
    write_header(writer, &["L [uH]", "C1 [pF]", "C2 [pF]", "C3 [pF]", "Cv max [pF]"])?;
    writeln!(
        writer,
        "{:<COLUMN$.4}{:<COLUMN$.4}{:<COLUMN$.4}{:<COLUMN$.4}{:<COLUMN$.4}",
        micro(result.inductance),
        pico(result.c1),
        pico(result.c2),
        pico(result.c3),
        pico(result.variable_capacitance_max),
    )?;
    Ok(())
}

/// Lists padding values that failed in a batch, one per line.
pub fn write_failures<W: Write>(failures: &[(Scalar, TankError)], writer: &mut W) -> Result<()> {
    for (c_series, err) in failures {
        writeln!(writer, "Series C {:.4} pF skipped: {err}", pico(*c_series))?;
    }
    Ok(())
}

/// A tuning curve with an optional legend entry.
pub struct LabelledCurve<'a, N: ?Sized> {
    /// Legend text; written as an empty field when absent.
    pub label: Option<String>,
    /// Samples to write.
    pub curve: TuningCurve<'a, N>,
}

/// Writes tuning curves as CSV for external plotting.
///
/// Format:
/// ```csv
/// label,capacitance_pF,frequency_MHz
/// 100,10,4
/// 100,10.355,3.998
/// ```
pub fn write_curves_csv<W, N>(curves: &[LabelledCurve<'_, N>], writer: &mut W) -> Result<()>
where
    W: Write,
    N: TankNetwork + ?Sized,
{
    writeln!(writer, "label,capacitance_pF,frequency_MHz")?;
    for labelled in curves {
        let label = labelled.label.as_deref().unwrap_or("");
        for sample in &labelled.curve {
            let mhz = Frequency::new(sample.frequency).in_prefix(Prefix::Mega);
            writeln!(writer, "{label},{},{mhz}", pico(sample.capacitance))?;
        }
    }
    Ok(())
}
