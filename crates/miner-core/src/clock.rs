//! Monotonic time sources for measuring a search.

/// A monotonic clock.
///
/// Implementations must not go backwards when the system clock is adjusted.
pub trait Clock {
    /// Opaque point in time returned by [`Clock::now`].
    type Mark: Copy;

    fn now(&self) -> Self::Mark;

    /// Seconds elapsed since `start`, never negative.
    fn seconds_since(&self, start: Self::Mark) -> f64;
}

/// [`std::time::Instant`] backed clock.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

#[cfg(feature = "std")]
impl Clock for MonotonicClock {
    type Mark = std::time::Instant;

    #[inline]
    fn now(&self) -> Self::Mark {
        std::time::Instant::now()
    }

    fn seconds_since(&self, start: Self::Mark) -> f64 {
        start.elapsed().as_secs_f64()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    type Mark = C::Mark;

    fn now(&self) -> Self::Mark {
        (**self).now()
    }

    fn seconds_since(&self, start: Self::Mark) -> f64 {
        (**self).seconds_since(start)
    }
}
