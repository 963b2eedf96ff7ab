use miniconf::Tree;
use serde::{Deserialize, Serialize};

use super::{Clock, Error, LowPass, NoClock, Order};

/// Lowpass settings.
///
/// Exposed in the application settings tree, e.g.
/// `{"cutoff": 10.0, "period": 0.001, "adaptive": false}`.
#[derive(Copy, Clone, Debug, PartialEq, Tree, Serialize, Deserialize)]
pub struct Config {
    /// -3 dB cut-off frequency in Hertz.
    ///
    /// # Value
    /// A positive 32-bit float
    pub cutoff: f32,

    /// Nominal sample period in seconds.
    ///
    /// # Value
    /// A positive 32-bit float
    pub period: f32,

    /// Measure the sample period on every update and follow it with the
    /// filter coefficients.
    pub adaptive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cutoff: 10.,
            period: 1e-3,
            adaptive: false,
        }
    }
}

impl Config {
    /// Build a fixed period lowpass.
    ///
    /// Adaptive settings need a clock, see [Config::build_with_clock].
    pub fn build<O: Order>(&self) -> Result<LowPass<O>, Error> {
        self.build_with_clock(NoClock)
    }

    /// Build a lowpass using `clock` to measure the sample period if adaptive.
    ///
    /// Adaptive settings on a clock that does not advance are rejected with
    /// [Error::Clock].
    pub fn build_with_clock<O: Order, C: Clock>(
        &self,
        clock: C,
    ) -> Result<LowPass<O, C>, Error> {
        LowPass::with_clock(self.cutoff, self.period, clock, self.adaptive)
    }
}
