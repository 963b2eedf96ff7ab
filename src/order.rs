use core::f64::consts::SQRT_2;
use core::fmt::Debug;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::First {}
    impl Sealed for super::Second {}
}

/// Filter order.
///
/// Implemented only by [First] and [Second]: the closed form bilinear
/// discretization below exists for those two Butterworth prototypes.
pub trait Order: sealed::Sealed {
    /// The filter order.
    const ORDER: usize;

    /// Sample history and feed-forward coefficients, `ORDER + 1` values.
    type Taps: Copy + Default + Debug + PartialEq + AsRef<[f64]> + AsMut<[f64]>;

    /// Feed-back coefficients, `ORDER` values.
    type Poles: Copy + Default + Debug + PartialEq + AsRef<[f64]> + AsMut<[f64]>;

    /// Discretize the analog prototype for the given `alpha = omega * period`.
    ///
    /// Returns the feed-back (`a`) and feed-forward (`b`) coefficients.
    fn bilinear(alpha: f64) -> (Self::Poles, Self::Taps);
}

/// First order lowpass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum First {}

/// Second order Butterworth lowpass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Second {}

impl Order for First {
    const ORDER: usize = 1;
    type Taps = [f64; 2];
    type Poles = [f64; 1];

    fn bilinear(alpha: f64) -> (Self::Poles, Self::Taps) {
        let a0 = -(alpha - 2.) / (alpha + 2.);
        let b0 = alpha / (alpha + 2.);
        ([a0], [b0, b0])
    }
}

impl Order for Second {
    const ORDER: usize = 2;
    type Taps = [f64; 3];
    type Poles = [f64; 2];

    fn bilinear(alpha: f64) -> (Self::Poles, Self::Taps) {
        // Normalized Butterworth polynomial
        let beta = [1., SQRT_2, 1.];
        let alpha2 = alpha * alpha;
        let d = alpha2 * beta[0] + 2. * alpha * beta[1] + 4. * beta[2];
        let b0 = alpha2 / d;
        let a0 = -(2. * alpha2 * beta[0] - 8. * beta[2]) / d;
        let a1 = -(beta[0] * alpha2 - 2. * beta[1] * alpha + 4. * beta[2]) / d;
        ([a0, a1], [b0, 2. * b0, b0])
    }
}

/// Lowpass coefficients.
///
/// Coefficients are derived and stored in `f64`. With `alpha = omega * period`
/// small, `1 - sum(a)` is of order `alpha^2` for the second order filter and
/// `f32` would lose the DC gain to cancellation.
///
/// The new output is `y0 = a[0]*y1 + ... + b[0]*x0 + b[1]*x1 + ...`, i.e. the
/// feed-back coefficients `a` are stored negated and normalized to a leading
/// denominator coefficient of 1.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coefficients<O: Order> {
    /// Feed-back coefficients, most recent output first.
    pub a: O::Poles,
    /// Feed-forward coefficients, most recent input first.
    pub b: O::Taps,
}

impl<O: Order> Coefficients<O> {
    /// Bilinear transform of the Butterworth lowpass prototype.
    ///
    /// # Args
    /// * `omega`: Cut-off angular frequency (rad/s)
    /// * `period`: Sample period (s)
    pub fn lowpass(omega: f32, period: f32) -> Self {
        let (a, b) = O::bilinear(omega as f64 * period as f64);
        Self { a, b }
    }

    /// All coefficients are finite.
    pub fn is_finite(&self) -> bool {
        self.a
            .as_ref()
            .iter()
            .chain(self.b.as_ref())
            .all(|c| c.is_finite())
    }

    /// Overall (DC) gain of the discrete filter.
    ///
    /// Unity up to rounding for every valid cut-off and period.
    pub fn dc_gain(&self) -> f64 {
        let b: f64 = self.b.as_ref().iter().sum();
        let a: f64 = self.a.as_ref().iter().sum();
        b / (1. - a)
    }
}
