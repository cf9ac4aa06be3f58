//! Sample spacing helpers and the lazily evaluated tuning curve.

use std::fmt;
use std::iter::FusedIterator;

use crate::math::Scalar;
use crate::tank::TankNetwork;

/// Position of sample `i` out of `n` evenly spaced samples in [start, stop].
///
/// The last sample lands exactly on `stop`.
#[inline]
fn linear_point(start: Scalar, stop: Scalar, n: usize, i: usize) -> Scalar {
    if n <= 1 {
        start
    } else if i + 1 == n {
        stop
    } else {
        start + (stop - start) / (n as Scalar - 1.0) * i as Scalar
    }
}

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    (0..n).map(|i| linear_point(start, stop, n, i)).collect()
}

/// Generates `n` logarithmically spaced samples between `start` and `stop`.
/// Requires start > 0 and stop > 0.
#[must_use]
pub fn logspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    assert!(start > 0.0 && stop > 0.0);
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let log_start = start.log10();
            let log_stop = stop.log10();
            let step = (log_stop - log_start) / (n as Scalar - 1.0);
            (0..n)
                .map(|i| 10f64.powf(log_start + step * i as Scalar))
                .collect()
        }
    }
}

/// One point of a tuning curve.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TuningSample {
    /// Variable capacitor setting in farads.
    pub capacitance: Scalar,
    /// Resonant frequency of the whole tank in hertz.
    pub frequency: Scalar,
}

/// Frequency versus tuning-capacitance curve of a solved tank.
///
/// Nothing is computed up front: each iteration walks the variable capacitor
/// linearly from `start` to `stop` and evaluates the tank's resonance at every
/// sample. The curve is `Copy` and can be iterated any number of times.
pub struct TuningCurve<'a, N: ?Sized> {
    network: &'a N,
    start: Scalar,
    stop: Scalar,
    samples: usize,
}

impl<'a, N: TankNetwork + ?Sized> TuningCurve<'a, N> {
    /// Creates a curve over `samples` evenly spaced settings in [start, stop].
    #[must_use]
    pub const fn new(network: &'a N, start: Scalar, stop: Scalar, samples: usize) -> Self {
        Self {
            network,
            start,
            stop,
            samples,
        }
    }

    /// Number of samples.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.samples
    }

    /// True when the curve has no samples.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.samples == 0
    }

    /// Tuning capacitor range covered by the curve.
    #[must_use]
    pub const fn span(&self) -> (Scalar, Scalar) {
        (self.start, self.stop)
    }

    /// Evaluates sample `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<TuningSample> {
        (index < self.samples).then(|| {
            let capacitance = linear_point(self.start, self.stop, self.samples, index);
            TuningSample {
                capacitance,
                frequency: self.network.frequency_at(capacitance),
            }
        })
    }

    /// Starts a fresh pass over the curve.
    #[must_use]
    pub const fn iter(&self) -> TuningCurveIter<'a, N> {
        TuningCurveIter {
            curve: *self,
            front: 0,
            back: self.samples,
        }
    }
}

impl<N: ?Sized> Clone for TuningCurve<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N: ?Sized> Copy for TuningCurve<'_, N> {}

impl<N: ?Sized> fmt::Debug for TuningCurve<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TuningCurve")
            .field("start", &self.start)
            .field("stop", &self.stop)
            .field("samples", &self.samples)
            .finish()
    }
}

impl<'a, N: TankNetwork + ?Sized> IntoIterator for TuningCurve<'a, N> {
    type Item = TuningSample;
    type IntoIter = TuningCurveIter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, N: TankNetwork + ?Sized> IntoIterator for &TuningCurve<'a, N> {
    type Item = TuningSample;
    type IntoIter = TuningCurveIter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the samples of a [`TuningCurve`].
pub struct TuningCurveIter<'a, N: ?Sized> {
    curve: TuningCurve<'a, N>,
    front: usize,
    back: usize,
}

impl<N: ?Sized> Clone for TuningCurveIter<'_, N> {
    fn clone(&self) -> Self {
        Self {
            curve: self.curve,
            front: self.front,
            back: self.back,
        }
    }
}

impl<N: ?Sized> fmt::Debug for TuningCurveIter<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TuningCurveIter")
            .field("curve", &self.curve)
            .field("remaining", &(self.back - self.front))
            .finish()
    }
}

impl<N: TankNetwork + ?Sized> Iterator for TuningCurveIter<'_, N> {
    type Item = TuningSample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let sample = self.curve.get(self.front);
        self.front += 1;
        sample
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<N: TankNetwork + ?Sized> DoubleEndedIterator for TuningCurveIter<'_, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.curve.get(self.back)
    }
}

impl<N: TankNetwork + ?Sized> ExactSizeIterator for TuningCurveIter<'_, N> {}

impl<N: TankNetwork + ?Sized> FusedIterator for TuningCurveIter<'_, N> {}
