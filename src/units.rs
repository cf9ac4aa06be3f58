//! Typed quantities for the three units a tank design deals in.
//!
//! The solvers take and return plain [`Scalar`] values in SI base units. The
//! types here sit at the edges: components store their values as quantities,
//! and the command line and reporters convert between SI and the display units
//! radio builders use (pF, µH, MHz) through [`Prefix`].

use std::fmt;
use std::marker::PhantomData;

use crate::math::Scalar;

/// Marker trait for a physical unit.
pub trait Unit {
    /// Symbol printed after the value (e.g. `F`).
    const SYMBOL: &'static str;
}

/// Capacitance unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Farad;
/// Inductance unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Henry;
/// Frequency unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hertz;

impl Unit for Farad {
    const SYMBOL: &'static str = "F";
}

impl Unit for Henry {
    const SYMBOL: &'static str = "H";
}

impl Unit for Hertz {
    const SYMBOL: &'static str = "Hz";
}

/// SI prefixes used when moving values between base and display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    /// 10⁻¹²
    Pico,
    /// 10⁻⁹
    Nano,
    /// 10⁻⁶
    Micro,
    /// 10⁻³
    Milli,
    /// 10⁰
    Base,
    /// 10³
    Kilo,
    /// 10⁶
    Mega,
    /// 10⁹
    Giga,
}

impl Prefix {
    const ASCENDING: [Self; 8] = [
        Self::Pico,
        Self::Nano,
        Self::Micro,
        Self::Milli,
        Self::Base,
        Self::Kilo,
        Self::Mega,
        Self::Giga,
    ];

    /// Multiplier taking a prefixed value to base units.
    #[must_use]
    pub const fn factor(self) -> Scalar {
        match self {
            Self::Pico => 1.0e-12,
            Self::Nano => 1.0e-9,
            Self::Micro => 1.0e-6,
            Self::Milli => 1.0e-3,
            Self::Base => 1.0,
            Self::Kilo => 1.0e3,
            Self::Mega => 1.0e6,
            Self::Giga => 1.0e9,
        }
    }

    /// Prefix symbol (`µ` for micro).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Pico => "p",
            Self::Nano => "n",
            Self::Micro => "µ",
            Self::Milli => "m",
            Self::Base => "",
            Self::Kilo => "k",
            Self::Mega => "M",
            Self::Giga => "G",
        }
    }

    /// Largest prefix that keeps `value` at or above one, clamped to the
    /// supported range.
    #[must_use]
    pub fn engineering(value: Scalar) -> Self {
        let magnitude = value.abs();
        if magnitude == 0.0 || !magnitude.is_finite() {
            return Self::Base;
        }
        Self::ASCENDING
            .iter()
            .rev()
            .copied()
            .find(|p| magnitude >= p.factor())
            .unwrap_or(Self::Pico)
    }
}

/// A scalar tagged with its unit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Quantity<T, U> {
    value: T,
    #[cfg_attr(feature = "serde", serde(skip))]
    unit: PhantomData<U>,
}

impl<T: Copy, U> Quantity<T, U> {
    /// Wraps a value expressed in base units.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// Value in base units.
    #[must_use]
    pub const fn value(&self) -> T {
        self.value
    }
}

impl<U: Unit> Quantity<Scalar, U> {
    /// Builds a quantity from a value given in `prefix` units, e.g. `(100.0, Pico)`.
    #[must_use]
    pub fn from_prefixed(value: Scalar, prefix: Prefix) -> Self {
        Self::new(value * prefix.factor())
    }

    /// Value expressed in `prefix` units.
    #[must_use]
    pub fn in_prefix(&self, prefix: Prefix) -> Scalar {
        self.value / prefix.factor()
    }
}

impl<U: Unit> fmt::Display for Quantity<Scalar, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = Prefix::engineering(self.value);
        let scaled = self.in_prefix(prefix);
        match f.precision() {
            Some(p) => write!(f, "{scaled:.p$} {}{}", prefix.symbol(), U::SYMBOL),
            None => write!(f, "{scaled} {}{}", prefix.symbol(), U::SYMBOL),
        }
    }
}

/// Capacitance in farads.
pub type Capacitance = Quantity<Scalar, Farad>;
/// Inductance in henries.
pub type Inductance = Quantity<Scalar, Henry>;
/// Frequency in hertz.
pub type Frequency = Quantity<Scalar, Hertz>;

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn prefixed_round_trip() {
        let c = Capacitance::from_prefixed(365.0, Prefix::Pico);
        assert_relative_eq!(c.value(), 365.0e-12, max_relative = 1.0e-12);
        assert_relative_eq!(c.in_prefix(Prefix::Pico), 365.0, max_relative = 1.0e-12);
    }

    #[test]
    fn engineering_prefix_selection() {
        assert_eq!(Prefix::engineering(217.6e-12), Prefix::Pico);
        assert_eq!(Prefix::engineering(8.5e-6), Prefix::Micro);
        assert_eq!(Prefix::engineering(14.225e6), Prefix::Mega);
        assert_eq!(Prefix::engineering(0.0), Prefix::Base);
        assert_eq!(Prefix::engineering(1.0e-15), Prefix::Pico);
    }

    #[test]
    fn display_uses_engineering_units() {
        let f = Frequency::new(3.5e6);
        assert_eq!(format!("{f:.3}"), "3.500 MHz");
        let l = Inductance::new(2.5e-6);
        assert_eq!(format!("{l:.1}"), "2.5 µH");
    }
}
