//! Scalar type and capacitor combination rules.

/// Primary scalar type used across the crate.
pub type Scalar = f64;

/// Series combination `1 / (1/a + 1/b)` of two capacitances.
///
/// A zero (open) capacitor in series blocks the branch, so the result is zero
/// when either side is zero instead of producing `NaN`.
#[must_use]
pub fn series_capacitance(a: Scalar, b: Scalar) -> Scalar {
    if a.abs() < Scalar::MIN_POSITIVE || b.abs() < Scalar::MIN_POSITIVE {
        return 0.0;
    }
    1.0 / (1.0 / a + 1.0 / b)
}

/// Parallel combination of capacitances (they add).
#[must_use]
pub fn parallel_capacitance(values: impl IntoIterator<Item = Scalar>) -> Scalar {
    values.into_iter().sum()
}
