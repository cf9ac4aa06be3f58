//! Inductor in parallel with a fixed capacitor and a series-padded tuning capacitor.
//!
//! ```text
//!  -------------------
//!  |       |        |
//! C        ≠ C_v    |
//! C  L     |        = C_p
//! C        |        |
//! C        = C_s    |
//!  |       |        |
//!  -------------------
//! ```
//!
//! The padding capacitor `C_s` compresses the tuning capacitor's swing; the
//! fixed `C_p` then shifts the whole range so that the requested band is
//! covered exactly. With the tuning capacitor at its minimum the tank
//! resonates at `f_max`; at its maximum, at `f_min`.

use tracing::{debug, warn};

use crate::constants::resonant_inductance;
use crate::errors::{require_physical, require_positive, Result, TankError};
use crate::math::{series_capacitance, Scalar};
use crate::sweep::{logspace, TuningCurve};

use super::{FrequencyRange, TankNetwork, TankSolver, VariableCapacitor};

/// Derived component values of a parallel tank.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelTankResult {
    /// Padding capacitance chosen by the caller (F).
    pub series_capacitance: Scalar,
    /// Fixed capacitance across the tank (F).
    pub parallel_capacitance: Scalar,
    /// Tank inductance (H).
    pub inductance: Scalar,
}

impl ParallelTankResult {
    /// Tuning curve over `samples` evenly spaced settings in [c_v_min, c_v_max].
    #[must_use]
    pub const fn sweep(&self, c_v_min: Scalar, c_v_max: Scalar, samples: usize) -> TuningCurve<'_, Self> {
        TuningCurve::new(self, c_v_min, c_v_max, samples)
    }
}

impl TankNetwork for ParallelTankResult {
    fn inductance(&self) -> Scalar {
        self.inductance
    }

    fn tank_capacitance(&self, c_v: Scalar) -> Scalar {
        series_capacitance(self.series_capacitance, c_v) + self.parallel_capacitance
    }
}

/// Validated inputs for a parallel tank design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelTankSolver {
    variable: VariableCapacitor,
    series_capacitance: Scalar,
    band: FrequencyRange,
}

impl ParallelTankSolver {
    /// Creates a solver; fails when the tuning capacitor's minimum or
    /// `series_capacitance` is not positive.
    pub fn new(variable: VariableCapacitor, series_capacitance: Scalar, band: FrequencyRange) -> Result<Self> {
        require_positive("c_v_min", variable.c_min())?;
        let series_capacitance = require_positive("c_series", series_capacitance)?;
        Ok(Self {
            variable,
            series_capacitance,
            band,
        })
    }

    /// Validates raw SI inputs and creates a solver.
    pub fn from_values(
        c_v_min: Scalar,
        c_v_max: Scalar,
        c_series: Scalar,
        f_min: Scalar,
        f_max: Scalar,
    ) -> Result<Self> {
        Self::new(
            VariableCapacitor::new(c_v_min, c_v_max)?,
            c_series,
            FrequencyRange::new(f_min, f_max)?,
        )
    }

    /// Tuning capacitor range.
    #[must_use]
    pub const fn variable(&self) -> VariableCapacitor {
        self.variable
    }

    /// Target band.
    #[must_use]
    pub const fn band(&self) -> FrequencyRange {
        self.band
    }
}

impl TankSolver for ParallelTankSolver {
    type Design = ParallelTankResult;

    fn solve(&self) -> Result<ParallelTankResult> {
        let c_s = self.series_capacitance;
        let _span = tracing::debug_span!("parallel_tank", c_series = c_s).entered();

        let c_lo = series_capacitance(c_s, self.variable.c_min());
        let c_hi = series_capacitance(c_s, self.variable.c_max());
        let swing = c_hi - c_lo;

        let r = self.band.capacitance_ratio();
        if !(r > 0.0 && r < 1.0) {
            return Err(TankError::InvalidInput {
                parameter: "f_max",
                value: self.band.f_max(),
                reason: "squared band ratio must lie strictly between 0 and 1",
            });
        }
        let c_f = r / (1.0 - r) * swing;

        let parallel = require_physical(
            "parallel_capacitance",
            c_f - c_lo,
            "series/variable capacitor swing cannot cover the requested band",
        )?;
        let inductance = require_physical(
            "inductance",
            resonant_inductance(c_hi + parallel, self.band.f_min()),
            "no finite inductance resonates at f_min",
        )?;

        debug!(
            parallel_capacitance = parallel,
            inductance, "parallel tank solved"
        );
        Ok(ParallelTankResult {
            series_capacitance: c_s,
            parallel_capacitance: parallel,
            inductance,
        })
    }

    fn tuning_span(&self) -> (Scalar, Scalar) {
        (self.variable.c_min(), self.variable.c_max())
    }
}

/// Solves a parallel tank straight from SI inputs.
pub fn solve(
    c_v_min: Scalar,
    c_v_max: Scalar,
    c_series: Scalar,
    f_min: Scalar,
    f_max: Scalar,
) -> Result<ParallelTankResult> {
    ParallelTankSolver::from_values(c_v_min, c_v_max, c_series, f_min, f_max)?.solve()
}

/// Series capacitances tried by [`solve_batch`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchConfig {
    /// Smallest padding capacitance (F).
    pub series_start: Scalar,
    /// Largest padding capacitance (F).
    pub series_stop: Scalar,
    /// Number of log-spaced padding values.
    pub series_count: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            series_start: 1.0e-12,
            series_stop: 100.0e-12,
            series_count: 10,
        }
    }
}

impl BatchConfig {
    /// Padding capacitances in ascending order.
    pub fn series_values(&self) -> Result<Vec<Scalar>> {
        let start = require_positive("series_start", self.series_start)?;
        let stop = require_positive("series_stop", self.series_stop)?;
        if self.series_count == 0 {
            return Err(TankError::InvalidInput {
                parameter: "series_count",
                value: 0.0,
                reason: "at least one series capacitance is required",
            });
        }
        if start > stop {
            return Err(TankError::InvalidInput {
                parameter: "series_stop",
                value: stop,
                reason: "must not be below series_start",
            });
        }
        Ok(logspace(start, stop, self.series_count))
    }
}

/// Outcome of solving one parallel tank per padding capacitance.
#[derive(Debug, Default)]
pub struct ParallelBatch {
    /// Successful designs in padding order.
    pub rows: Vec<ParallelTankResult>,
    /// Padding values that could not be solved, with the reason.
    pub failures: Vec<(Scalar, TankError)>,
}

/// Solves the tank for every padding capacitance in `config`, skipping the
/// ones that fail rather than aborting the batch. Inputs shared by every row
/// are checked once, before the first solve.
pub fn solve_batch(
    variable: VariableCapacitor,
    band: FrequencyRange,
    config: &BatchConfig,
) -> Result<ParallelBatch> {
    require_positive("c_v_min", variable.c_min())?;
    let mut batch = ParallelBatch::default();
    for c_s in config.series_values()? {
        match ParallelTankSolver::new(variable, c_s, band).and_then(|solver| solver.solve()) {
            Ok(row) => batch.rows.push(row),
            Err(err) => {
                warn!(c_series = c_s, %err, "skipping series capacitance");
                batch.failures.push((c_s, err));
            }
        }
    }
    Ok(batch)
}
