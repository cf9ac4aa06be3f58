//! Resonance relations shared by every tank topology.
//!
//! All helpers work in SI base units: hertz, farads and henries. The tank
//! circuits in this crate are ideal L-C resonators, so a single relation
//! `f = 1 / (2π √(L C))` ties the three quantities together and each helper
//! below is that relation solved for a different unknown.

use std::f64::consts::PI;

use crate::math::Scalar;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: Scalar) -> Scalar {
    2.0 * PI * hz
}

/// Resonant frequency in hertz of an ideal tank with inductance `l` (H) and
/// capacitance `c` (F).
#[inline]
#[must_use]
pub fn resonant_frequency(l: Scalar, c: Scalar) -> Scalar {
    1.0 / (2.0 * PI * (l * c).sqrt())
}

/// Capacitance (F) that resonates with inductance `l` (H) at `hz`.
#[inline]
#[must_use]
pub fn resonant_capacitance(l: Scalar, hz: Scalar) -> Scalar {
    let omega = angular_frequency(hz);
    1.0 / (omega * omega * l)
}

/// Inductance (H) that resonates with capacitance `c` (F) at `hz`.
#[inline]
#[must_use]
pub fn resonant_inductance(c: Scalar, hz: Scalar) -> Scalar {
    1.0 / (4.0 * PI * PI * hz * hz * c)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn one_microhenry_one_nanofarad() {
        let f = resonant_frequency(1.0e-6, 1.0e-9);
        assert_relative_eq!(f, 5.032_921_210_448_7e6, max_relative = 1.0e-9);
    }

    #[test]
    fn relations_are_mutually_consistent() {
        let l = 0.784e-6;
        let hz = 14.225e6;
        let c = resonant_capacitance(l, hz);
        assert_relative_eq!(resonant_frequency(l, c), hz, max_relative = 1.0e-12);
        assert_relative_eq!(resonant_inductance(c, hz), l, max_relative = 1.0e-12);
    }
}
