//! First and second order Butterworth lowpass filters for control loops.
//!
//! The filters are discretized with the bilinear (Tustin) transform from a
//! cut-off frequency in Hz and a sample period in seconds. In adaptive mode
//! the sample period is measured from a [Clock] on every update and the
//! coefficients follow it.
//!
//! ```
//! use lowpass::{Filter, FirstOrder};
//!
//! let mut lp = FirstOrder::new(1.0, 0.01).unwrap();
//! let y = lp.filter(10.0);
//! assert!(y > 0.0 && y < 10.0);
//! ```
#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod clock;
pub use clock::*;
mod config;
pub use config::*;
mod lowpass;
pub use lowpass::*;
mod order;
pub use order::*;

#[cfg(test)]
pub(crate) mod testing;

/// Errors that can occur when configuring a filter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The cut-off frequency is not positive and finite.
    #[error("Invalid cut-off frequency")]
    Cutoff,
    /// The sample period is not positive and finite.
    #[error("Invalid sample period")]
    Period,
    /// Adaptive operation was requested without a clock.
    #[error("Adaptive mode requires a clock")]
    Clock,
}
