//! Monotonic time sources for adaptive filters.
use core::fmt::Debug;

/// A monotonic time source.
///
/// Adaptive filters read [Clock::now] once per update and convert the
/// interval since the previous update into seconds.
pub trait Clock {
    /// Opaque point in time.
    type Instant: Copy + Debug;

    /// Time advances between calls to [Clock::now].
    ///
    /// Adaptive filters reject clocks that do not advance.
    const ADVANCES: bool = true;

    /// The current time.
    fn now(&self) -> Self::Instant;

    /// Time from `earlier` to `later` in seconds.
    ///
    /// Implementations return zero if `later` precedes `earlier`.
    fn elapsed(&self, earlier: Self::Instant, later: Self::Instant) -> f32;
}

impl<C: Clock + ?Sized> Clock for &C {
    type Instant = C::Instant;
    const ADVANCES: bool = C::ADVANCES;

    fn now(&self) -> Self::Instant {
        (**self).now()
    }

    fn elapsed(&self, earlier: Self::Instant, later: Self::Instant) -> f32 {
        (**self).elapsed(earlier, later)
    }
}

/// Clock of fixed period filters.
///
/// Time does not advance. Adaptive filters can not be built on this clock.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoClock;

impl Clock for NoClock {
    type Instant = ();
    const ADVANCES: bool = false;

    fn now(&self) {}

    fn elapsed(&self, _earlier: (), _later: ()) -> f32 {
        0.
    }
}

/// Hardware timer clock.
///
/// Wraps a closure reading a 64 bit [fugit] timer instant with a tick period
/// of `NOM / DENOM` seconds, e.g. an RTIC monotonic:
///
/// ```
/// use lowpass::{Clock, TimerClock};
///
/// let clock = TimerClock::<_, 1, 1_000_000>::new(|| fugit::Instant::from_ticks(1_500));
/// let t = clock.now();
/// assert_eq!(clock.elapsed(fugit::Instant::from_ticks(500), t), 1e-3);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct TimerClock<F, const NOM: u32, const DENOM: u32> {
    now: F,
}

impl<F, const NOM: u32, const DENOM: u32> TimerClock<F, NOM, DENOM>
where
    F: Fn() -> fugit::Instant<u64, NOM, DENOM>,
{
    pub const fn new(now: F) -> Self {
        Self { now }
    }
}

impl<F, const NOM: u32, const DENOM: u32> Clock for TimerClock<F, NOM, DENOM>
where
    F: Fn() -> fugit::Instant<u64, NOM, DENOM>,
{
    type Instant = fugit::Instant<u64, NOM, DENOM>;

    fn now(&self) -> Self::Instant {
        (self.now)()
    }

    fn elapsed(&self, earlier: Self::Instant, later: Self::Instant) -> f32 {
        later
            .checked_duration_since(earlier)
            .map(|d| (d.ticks() as f64 * NOM as f64 / DENOM as f64) as f32)
            .unwrap_or_default()
    }
}

/// Host clock backed by [std::time::Instant].
#[cfg(feature = "std")]
#[derive(Copy, Clone, Debug, Default)]
pub struct StdClock;

#[cfg(feature = "std")]
impl Clock for StdClock {
    type Instant = std::time::Instant;

    fn now(&self) -> Self::Instant {
        std::time::Instant::now()
    }

    fn elapsed(&self, earlier: Self::Instant, later: Self::Instant) -> f32 {
        later.saturating_duration_since(earlier).as_secs_f32()
    }
}
