//! Progressive three-capacitor tuning network.
//!
//! ```text
//!  ---------------------------
//!  |        |        |       |
//! C         |        = C1    |
//! C  L      = C3     |       |
//! C         |        +-------+
//! C         |        |       |
//!  |        |        = C2    ≠ C_v
//!  |        |        |       |
//!  ---------------------------
//! ```
//!
//! The tuning capacitor sits in parallel with `C2`, that pair in series with
//! `C1`, and the whole branch in parallel with `C3` across the inductor:
//!
//! `C(C_v) = C3 + 1 / (1/C1 + 1/(C2 + C_v))`
//!
//! `C1` limits how much of the tuning capacitor's swing reaches the tank and
//! `C2` sets where on that compressed law the band sits, giving a near-linear
//! tuning law over a narrow band. With `C_v = 0` the tank resonates at `f_max`;
//! at `C_v = C_v_max`, at `f_min`.

use tracing::debug;

use crate::constants::resonant_capacitance;
use crate::errors::{require_physical, require_positive, Result, TankError};
use crate::math::{series_capacitance, Scalar};
use crate::sweep::TuningCurve;

use super::{FrequencyRange, TankNetwork, TankSolver, VariableCapacitor};

/// Component values of a progressive tank.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressiveTankResult {
    /// Tank inductance (H), as supplied.
    pub inductance: Scalar,
    /// Coupling capacitor C1 (F), as supplied.
    pub c1: Scalar,
    /// Capacitor C2 across the tuning capacitor (F).
    pub c2: Scalar,
    /// Capacitor C3 across the inductor (F).
    pub c3: Scalar,
    /// Tuning capacitor maximum (F), as supplied.
    pub variable_capacitance_max: Scalar,
}

impl ProgressiveTankResult {
    /// Tuning curve over `samples` evenly spaced settings in [0, C_v_max].
    #[must_use]
    pub const fn sweep(&self, samples: usize) -> TuningCurve<'_, Self> {
        TuningCurve::new(self, 0.0, self.variable_capacitance_max, samples)
    }
}

impl TankNetwork for ProgressiveTankResult {
    fn inductance(&self) -> Scalar {
        self.inductance
    }

    fn tank_capacitance(&self, c_v: Scalar) -> Scalar {
        self.c3 + series_capacitance(self.c1, self.c2 + c_v)
    }
}

/// Validated inputs for a progressive tank design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressiveTankSolver {
    inductance: Scalar,
    c1: Scalar,
    variable: VariableCapacitor,
    band: FrequencyRange,
}

impl ProgressiveTankSolver {
    /// Creates a solver for a tuning capacitor swinging from zero to
    /// `variable_max`.
    pub fn new(inductance: Scalar, c1: Scalar, variable_max: Scalar, band: FrequencyRange) -> Result<Self> {
        Ok(Self {
            inductance: require_positive("inductance", inductance)?,
            c1: require_positive("c1", c1)?,
            variable: VariableCapacitor::from_zero(variable_max)?,
            band,
        })
    }

    /// Validates raw SI inputs and creates a solver.
    pub fn from_values(
        inductance: Scalar,
        c1: Scalar,
        variable_max: Scalar,
        f_min: Scalar,
        f_max: Scalar,
    ) -> Result<Self> {
        Self::new(inductance, c1, variable_max, FrequencyRange::new(f_min, f_max)?)
    }

    /// Target band.
    #[must_use]
    pub const fn band(&self) -> FrequencyRange {
        self.band
    }
}

impl TankSolver for ProgressiveTankSolver {
    type Design = ProgressiveTankResult;

    fn solve(&self) -> Result<ProgressiveTankResult> {
        let (l, c1, cv_max) = (self.inductance, self.c1, self.variable.c_max());
        let _span = tracing::debug_span!("progressive_tank", inductance = l, c1).entered();

        let c_low_f = resonant_capacitance(l, self.band.f_min());
        let c_high_f = resonant_capacitance(l, self.band.f_max());
        let swing = c_low_f - c_high_f;
        if !(swing.is_finite() && swing > 0.0) {
            return Err(TankError::InvalidInput {
                parameter: "f_max",
                value: self.band.f_max(),
                reason: "band too narrow to resolve a capacitance swing",
            });
        }

        // C2 is the positive root of C2² + x·C2 + y = 0, the condition for
        // the branch to contribute exactly `swing` between C_v = 0 and C_v_max.
        let x = 2.0 * c1 + cv_max;
        let y = c1 * cv_max + c1 * c1 * (1.0 - cv_max / swing);
        let discriminant = x * x - 4.0 * y;
        if !(discriminant.is_finite() && discriminant >= 0.0) {
            return Err(TankError::InfeasibleDesign {
                quantity: "c2_discriminant",
                value: discriminant,
                reason: "no real C2 matches both band edges",
            });
        }
        let c2 = require_physical(
            "c2",
            (-x + discriminant.sqrt()) / 2.0,
            "C1 in series with the tuning capacitor cannot swing enough capacitance",
        )?;
        let c3 = require_physical(
            "c3",
            c_high_f - series_capacitance(c1, c2),
            "C1 and C2 alone exceed the capacitance needed at f_max",
        )?;

        debug!(c2, c3, "progressive tank solved");
        Ok(ProgressiveTankResult {
            inductance: l,
            c1,
            c2,
            c3,
            variable_capacitance_max: cv_max,
        })
    }

    fn tuning_span(&self) -> (Scalar, Scalar) {
        (self.variable.c_min(), self.variable.c_max())
    }
}

/// Solves a progressive tank straight from SI inputs.
pub fn solve(
    inductance: Scalar,
    c1: Scalar,
    variable_max: Scalar,
    f_min: Scalar,
    f_max: Scalar,
) -> Result<ProgressiveTankResult> {
    ProgressiveTankSolver::from_values(inductance, c1, variable_max, f_min, f_max)?.solve()
}
