use core::f32::consts::PI;

use super::{Clock, Coefficients, Error, First, NoClock, Order, Second};

/// Per-sample filter interface.
pub trait Filter {
    /// Feed a new input sample into the filter, update the filter state, and
    /// return the new output.
    fn filter(&mut self, x: f32) -> f32;
}

/// First order lowpass.
pub type FirstOrder<C = NoClock> = LowPass<First, C>;

/// Second order Butterworth lowpass.
pub type SecondOrder<C = NoClock> = LowPass<Second, C>;

// Multiply-accumulate vectors `x` and `a`.
fn macc(y0: f64, x: &[f64], a: &[f64]) -> f64 {
    x.iter()
        .zip(a)
        .map(|(x, a)| *x * *a)
        .fold(y0, |y, xa| y + xa)
}

fn shift(xy: &mut [f64], x0: f64) {
    // `xy` contains       x1 x2 x3
    // Shift               x1 x1 x2
    // This unrolls better than xy.rotate_right(1)
    xy.copy_within(0..xy.len() - 1, 1);
    // Store x0            x0 x1 x2
    xy[0] = x0;
}

fn check(value: f32, error: Error) -> Result<f32, Error> {
    if value.is_finite() && value > 0. {
        Ok(value)
    } else {
        Err(error)
    }
}

fn design<O: Order>(omega: f32, period: f32) -> Result<Coefficients<O>, Error> {
    let ba = Coefficients::lowpass(omega, period);
    if ba.is_finite() {
        Ok(ba)
    } else {
        Err(Error::Period)
    }
}

/// Bilinear transform Butterworth lowpass.
///
/// Direct form I implementation of a first ([First]) or second ([Second])
/// order lowpass with unity DC gain. The state is zero after construction:
/// the output starts with a step transient towards the input level unless
/// [LowPass::preload] is used.
///
/// In adaptive mode the sample period is measured with the clock `C` on every
/// [Filter::filter] call and the coefficients are recomputed before the new
/// output is evaluated. The first call after construction uses the nominal
/// period and only establishes the time base.
///
/// # Precision
/// Samples are `f32`. Coefficients and history are `f64` so that the DC gain
/// stays at unity for cut-offs far below the sample rate.
#[derive(Clone, Debug)]
pub struct LowPass<O: Order, C: Clock = NoClock> {
    ba: Coefficients<O>,
    // Most recent first
    x: O::Taps,
    y: O::Taps,
    omega: f32,
    period: f32,
    adaptive: bool,
    clock: C,
    last: C::Instant,
    primed: bool,
}

impl<O: Order> LowPass<O> {
    /// Create a fixed period lowpass.
    ///
    /// # Args
    /// * `cutoff`: -3 dB cut-off frequency (Hz)
    /// * `period`: Sample period (s)
    pub fn new(cutoff: f32, period: f32) -> Result<Self, Error> {
        Self::with_clock(cutoff, period, NoClock, false)
    }
}

impl<O: Order, C: Clock> LowPass<O, C> {
    /// Create an adaptive lowpass measuring its sample period with `clock`.
    ///
    /// `period` is the nominal sample period used until the first interval
    /// has been measured.
    pub fn adaptive(cutoff: f32, period: f32, clock: C) -> Result<Self, Error> {
        Self::with_clock(cutoff, period, clock, true)
    }

    /// Create a lowpass.
    ///
    /// # Args
    /// * `cutoff`: -3 dB cut-off frequency (Hz)
    /// * `period`: Nominal sample period (s)
    /// * `clock`: Time source for adaptive operation
    /// * `adaptive`: Recompute the coefficients from the measured period on
    ///   every update
    pub fn with_clock(
        cutoff: f32,
        period: f32,
        clock: C,
        adaptive: bool,
    ) -> Result<Self, Error> {
        let cutoff = check(cutoff, Error::Cutoff)?;
        let omega = check(2. * PI * cutoff, Error::Cutoff)?;
        let period = check(period, Error::Period)?;
        if adaptive && !C::ADVANCES {
            return Err(Error::Clock);
        }
        let ba = design(omega, period)?;
        if cutoff * period >= 0.5 {
            log::warn!("Cut-off {cutoff} Hz beyond Nyquist at {period} s");
        }
        log::debug!(
            "Lowpass order {} cut-off {cutoff} Hz period {period} s adaptive {adaptive}",
            O::ORDER
        );
        let last = clock.now();
        Ok(Self {
            ba,
            x: Default::default(),
            y: Default::default(),
            omega,
            period,
            adaptive,
            clock,
            last,
            primed: false,
        })
    }

    /// Filter order.
    pub fn order(&self) -> usize {
        O::ORDER
    }

    /// Cut-off frequency (Hz).
    pub fn cutoff(&self) -> f32 {
        self.omega / (2. * PI)
    }

    /// Cut-off angular frequency (rad/s).
    pub fn omega(&self) -> f32 {
        self.omega
    }

    /// Sample period of the current coefficients (s).
    pub fn period(&self) -> f32 {
        self.period
    }

    /// Whether the sample period is measured on every update.
    pub fn is_adaptive(&self) -> bool {
        self.adaptive
    }

    /// Coefficients for the current sample period.
    pub fn coefficients(&self) -> &Coefficients<O> {
        &self.ba
    }

    /// Recent inputs, most recent first.
    pub fn input_history(&self) -> &[f64] {
        self.x.as_ref()
    }

    /// Recent outputs, most recent first.
    pub fn output_history(&self) -> &[f64] {
        self.y.as_ref()
    }

    /// The time source.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Change the sample period and recompute the coefficients.
    ///
    /// In adaptive mode the next update measures the period anew.
    pub fn set_period(&mut self, period: f32) -> Result<(), Error> {
        let period = check(period, Error::Period)?;
        self.ba = design(self.omega, period)?;
        self.period = period;
        Ok(())
    }

    /// Clear the input and output history.
    pub fn reset(&mut self) {
        self.x = Default::default();
        self.y = Default::default();
    }

    /// Fill the input and output history with `value`.
    ///
    /// The filter then continues in steady state at `value` without a start
    /// transient.
    pub fn preload(&mut self, value: f32) {
        self.x.as_mut().fill(value as f64);
        self.y.as_mut().fill(value as f64);
    }

    fn measure(&mut self) {
        let now = self.clock.now();
        let last = core::mem::replace(&mut self.last, now);
        if !self.primed {
            self.primed = true;
            return;
        }
        let dt = self.clock.elapsed(last, now);
        let ba = check(dt, Error::Period).and_then(|dt| design(self.omega, dt));
        match ba {
            Ok(ba) => {
                log::trace!("Lowpass period {dt} s");
                self.ba = ba;
                self.period = dt;
            }
            Err(_) => log::debug!("Ignoring sample interval {dt} s"),
        }
    }
}

impl<O: Order, C: Clock> Filter for LowPass<O, C> {
    fn filter(&mut self, x0: f32) -> f32 {
        if self.adaptive {
            self.measure();
        }
        shift(self.x.as_mut(), x0 as f64);
        // Previous outputs y1, y2 are at the front of `y`
        let y0 = macc(
            macc(0., self.x.as_ref(), self.ba.b.as_ref()),
            self.y.as_ref(),
            self.ba.a.as_ref(),
        );
        shift(self.y.as_mut(), y0);
        y0 as f32
    }
}
