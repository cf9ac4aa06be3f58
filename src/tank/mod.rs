//! Tank circuit solvers.
//!
//! Each topology comes as a pair: a solver holding validated inputs, and the
//! result record it derives. Results implement [`TankNetwork`], which is all a
//! [`TuningCurve`] needs to evaluate the tank's resonance across the tuning
//! capacitor's range.

use num_complex::Complex;

use crate::circuits::{Capacitor, ConnectionKind, Inductor, Network};
use crate::constants::resonant_frequency;
use crate::errors::{require_positive, Result, TankError};
use crate::math::Scalar;
use crate::sweep::TuningCurve;

/// Parallel L-C tank with a series padding capacitor.
pub mod parallel;
/// Three-capacitor progressive tuning network.
pub mod progressive;

pub use parallel::{BatchConfig, ParallelBatch, ParallelTankResult, ParallelTankSolver};
pub use progressive::{ProgressiveTankResult, ProgressiveTankSolver};

/// Target tuning band in hertz.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawFrequencyRange")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyRange {
    f_min: Scalar,
    f_max: Scalar,
}

impl FrequencyRange {
    /// Validates `0 < f_min < f_max`.
    pub fn new(f_min: Scalar, f_max: Scalar) -> Result<Self> {
        let f_min = require_positive("f_min", f_min)?;
        let f_max = require_positive("f_max", f_max)?;
        if f_min >= f_max {
            return Err(TankError::InvalidInput {
                parameter: "f_max",
                value: f_max,
                reason: "must be strictly greater than f_min",
            });
        }
        Ok(Self { f_min, f_max })
    }

    /// Lower band edge (Hz).
    #[must_use]
    pub const fn f_min(&self) -> Scalar {
        self.f_min
    }

    /// Upper band edge (Hz).
    #[must_use]
    pub const fn f_max(&self) -> Scalar {
        self.f_max
    }

    /// `(f_min / f_max)²`, always in (0, 1).
    #[must_use]
    pub fn capacitance_ratio(&self) -> Scalar {
        let r = self.f_min / self.f_max;
        r * r
    }
}

/// Capacitance range of the tuning capacitor in farads.
///
/// A zero `c_min` is only reachable through [`VariableCapacitor::from_zero`].
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawVariableCapacitor")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableCapacitor {
    c_min: Scalar,
    c_max: Scalar,
}

impl VariableCapacitor {
    /// Validates `0 < c_min < c_max`.
    pub fn new(c_min: Scalar, c_max: Scalar) -> Result<Self> {
        let c_min = require_positive("c_v_min", c_min)?;
        let c_max = require_positive("c_v_max", c_max)?;
        if c_min >= c_max {
            return Err(TankError::InvalidInput {
                parameter: "c_v_max",
                value: c_max,
                reason: "must be strictly greater than c_v_min",
            });
        }
        Ok(Self { c_min, c_max })
    }

    /// Capacitor swinging the whole way from zero up to `c_max`.
    pub fn from_zero(c_max: Scalar) -> Result<Self> {
        let c_max = require_positive("c_v_max", c_max)?;
        Ok(Self { c_min: 0.0, c_max })
    }

    /// Minimum capacitance (F).
    #[must_use]
    pub const fn c_min(&self) -> Scalar {
        self.c_min
    }

    /// Maximum capacitance (F).
    #[must_use]
    pub const fn c_max(&self) -> Scalar {
        self.c_max
    }
}

/// Unchecked wire form of [`FrequencyRange`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFrequencyRange {
    f_min: Scalar,
    f_max: Scalar,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFrequencyRange> for FrequencyRange {
    type Error = TankError;

    fn try_from(raw: RawFrequencyRange) -> Result<Self> {
        Self::new(raw.f_min, raw.f_max)
    }
}

/// Unchecked wire form of [`VariableCapacitor`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawVariableCapacitor {
    c_min: Scalar,
    c_max: Scalar,
}

#[cfg(feature = "serde")]
impl TryFrom<RawVariableCapacitor> for VariableCapacitor {
    type Error = TankError;

    fn try_from(raw: RawVariableCapacitor) -> Result<Self> {
        if raw.c_min == 0.0 {
            Self::from_zero(raw.c_max)
        } else {
            Self::new(raw.c_min, raw.c_max)
        }
    }
}

/// A solved tank: a fixed inductor resonating with a capacitor network whose
/// value depends on the tuning capacitor setting.
pub trait TankNetwork {
    /// Tank inductance (H).
    fn inductance(&self) -> Scalar;

    /// Capacitance the inductor sees with the tuning capacitor at `c_v` (F).
    fn tank_capacitance(&self, c_v: Scalar) -> Scalar;

    /// Resonant frequency (Hz) with the tuning capacitor at `c_v`.
    fn frequency_at(&self, c_v: Scalar) -> Scalar {
        resonant_frequency(self.inductance(), self.tank_capacitance(c_v))
    }

    /// Impedance across the tank at angular frequency `omega` with the tuning
    /// capacitor at `c_v`. Diverges at resonance.
    fn impedance(&self, c_v: Scalar, omega: Scalar) -> Complex<Scalar> {
        let mut tank = Network::new("tank", ConnectionKind::Parallel);
        tank.add_component(Inductor::new("L", self.inductance()));
        tank.add_component(Capacitor::new("C", self.tank_capacitance(c_v)));
        tank.impedance(omega)
    }
}

/// Shared capability of the tank topologies: derive a design, then sweep it.
pub trait TankSolver {
    /// Result record produced by a successful solve.
    type Design: TankNetwork;

    /// Derives the fixed component values.
    fn solve(&self) -> Result<Self::Design>;

    /// Range the tuning capacitor is swept over.
    fn tuning_span(&self) -> (Scalar, Scalar);

    /// Tuning curve of `design` across [`TankSolver::tuning_span`].
    fn sweep<'a>(&self, design: &'a Self::Design, samples: usize) -> TuningCurve<'a, Self::Design> {
        let (start, stop) = self.tuning_span();
        TuningCurve::new(design, start, stop, samples)
    }
}
