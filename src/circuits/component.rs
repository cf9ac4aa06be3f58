use crate::math::Scalar;
use crate::units::{Capacitance, Inductance};
use num_complex::Complex;

/// Trait implemented by the ideal tank components that can provide a frequency-domain impedance.
pub trait Component {
    /// Returns the component's impedance for an angular frequency `omega` (rad/s).
    fn impedance(&self, omega: Scalar) -> Complex<Scalar>;

    /// Human-readable identifier (e.g. `C1`).
    fn name(&self) -> &str;
}

/// Lumped capacitor model (ideal).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Capacitor {
    name: String,
    capacitance: Capacitance,
}

impl Capacitor {
    /// Creates a capacitor.
    #[must_use]
    pub fn new(name: impl Into<String>, capacitance_f: Scalar) -> Self {
        Self {
            name: name.into(),
            capacitance: Capacitance::new(capacitance_f),
        }
    }

    /// Returns the capacitance magnitude in farads.
    #[must_use]
    pub const fn capacitance(&self) -> Scalar {
        self.capacitance.value()
    }
}

impl Component for Capacitor {
    fn impedance(&self, omega: Scalar) -> Complex<Scalar> {
        if omega.abs() < Scalar::EPSILON || self.capacitance() <= 0.0 {
            Complex::new(Scalar::INFINITY, 0.0)
        } else {
            Complex::new(0.0, -1.0 / (omega * self.capacitance()))
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Lumped inductor model (ideal).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Inductor {
    name: String,
    inductance: Inductance,
}

impl Inductor {
    /// Creates an inductor.
    #[must_use]
    pub fn new(name: impl Into<String>, inductance_h: Scalar) -> Self {
        Self {
            name: name.into(),
            inductance: Inductance::new(inductance_h),
        }
    }

    /// Returns the inductance magnitude in henries.
    #[must_use]
    pub const fn inductance(&self) -> Scalar {
        self.inductance.value()
    }
}

impl Component for Inductor {
    fn impedance(&self, omega: Scalar) -> Complex<Scalar> {
        Complex::new(0.0, omega * self.inductance())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn capacitor_impedance_is_reactive() {
        let c = Capacitor::new("C1", 1e-6);
        let omega = 1.0e3;
        let z = c.impedance(omega);
        assert_relative_eq!(z.re, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(z.im, -1.0e3, max_relative = 1.0e-12);
    }

    #[test]
    fn open_capacitor_at_dc() {
        let c = Capacitor::new("C1", 100.0e-12);
        assert!(c.impedance(0.0).re.is_infinite());
    }

    #[test]
    fn inductor_reactance_grows_with_frequency() {
        let l = Inductor::new("L1", 1.0e-6);
        assert_relative_eq!(l.impedance(1.0e6).im, 1.0, max_relative = 1.0e-12);
        assert_eq!(l.name(), "L1");
    }
}
