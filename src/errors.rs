//! Error types shared by the tank solvers and their reporters.

use thiserror::Error;

use crate::math::Scalar;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum TankError {
    /// An input violates a precondition; raised before any computation.
    #[error("invalid input `{parameter}` = {value:e}: {reason}")]
    InvalidInput {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Value supplied by the caller.
        value: Scalar,
        /// Violated precondition.
        reason: &'static str,
    },
    /// The computation produced a non-physical intermediate.
    #[error("infeasible design: {quantity} = {value:e} ({reason})")]
    InfeasibleDesign {
        /// Name of the derived quantity that went out of range.
        quantity: &'static str,
        /// Its computed value.
        value: Scalar,
        /// What the value means for the requested design.
        reason: &'static str,
    },
    /// Failure writing a report.
    #[error("report output failed: {0}")]
    Io(#[from] std::io::Error),
}

impl TankError {
    /// True for [`TankError::InvalidInput`].
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// True for [`TankError::InfeasibleDesign`].
    #[must_use]
    pub const fn is_infeasible(&self) -> bool {
        matches!(self, Self::InfeasibleDesign { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TankError>;

/// Rejects zero, negative and non-finite values.
pub(crate) fn require_positive(parameter: &'static str, value: Scalar) -> Result<Scalar> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TankError::InvalidInput {
            parameter,
            value,
            reason: "must be finite and strictly positive",
        })
    }
}

/// Accepts a derived quantity only when it is finite and strictly positive.
pub(crate) fn require_physical(
    quantity: &'static str,
    value: Scalar,
    reason: &'static str,
) -> Result<Scalar> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TankError::InfeasibleDesign {
            quantity,
            value,
            reason,
        })
    }
}
