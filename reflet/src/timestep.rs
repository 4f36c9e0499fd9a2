use core::time::Duration;

/// Splits wall-clock time into fixed-length ticks.
///
/// Time is [`accumulate`](Self::accumulate)d as frames go by, and whole ticks are
/// [`consume`](Self::consume_tick)d from it. Whatever is left carries over to the next frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedTimestep {
    tick: Duration,
    accumulated: Duration,
}

impl FixedTimestep {
    /// # Panics
    ///
    /// if `tick` is zero
    #[inline]
    #[must_use]
    pub fn new(tick: Duration) -> Self {
        assert!(!tick.is_zero(), "tick duration must not be zero");

        Self {
            tick,
            accumulated: Duration::ZERO,
        }
    }

    /// # Panics
    ///
    /// if `ticks_per_second` is zero
    #[inline]
    #[must_use]
    pub fn from_rate(ticks_per_second: u32) -> Self {
        assert_ne!(ticks_per_second, 0, "tick rate must not be zero");
        Self::new(Duration::from_secs(1) / ticks_per_second)
    }

    #[inline]
    #[must_use]
    pub const fn tick(&self) -> Duration {
        self.tick
    }

    #[inline]
    #[must_use]
    pub const fn accumulated(&self) -> Duration {
        self.accumulated
    }

    #[inline]
    pub fn accumulate(&mut self, elapsed: Duration) {
        self.accumulated = self.accumulated.saturating_add(elapsed);
    }

    /// Removes one tick from the accumulated time, if strictly more than a tick has accumulated.
    #[inline]
    pub fn consume_tick(&mut self) -> bool {
        let has_tick = self.accumulated > self.tick;

        if has_tick {
            self.accumulated -= self.tick;
        }

        has_tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks(ts: &mut FixedTimestep) -> usize {
        core::iter::from_fn(|| ts.consume_tick().then_some(())).count()
    }

    #[test]
    fn eighty_hertz() {
        let ts = FixedTimestep::from_rate(80);
        assert_eq!(ts.tick(), Duration::from_micros(12_500));
    }

    #[test]
    fn remainder_carries_over() {
        let mut ts = FixedTimestep::new(Duration::from_millis(10));

        ts.accumulate(Duration::from_millis(25));
        assert_eq!(ticks(&mut ts), 2);
        assert_eq!(ts.accumulated(), Duration::from_millis(5));

        ts.accumulate(Duration::from_millis(6));
        assert_eq!(ticks(&mut ts), 1);
        assert_eq!(ts.accumulated(), Duration::from_millis(1));
    }

    #[test]
    fn exactly_one_tick_is_not_enough() {
        let mut ts = FixedTimestep::new(Duration::from_millis(10));

        ts.accumulate(Duration::from_millis(10));
        assert_eq!(ticks(&mut ts), 0);

        ts.accumulate(Duration::from_nanos(1));
        assert_eq!(ticks(&mut ts), 1);
    }

    #[test]
    fn short_frames_run_no_ticks() {
        let mut ts = FixedTimestep::from_rate(80);
        ts.accumulate(Duration::from_millis(5));
        assert_eq!(ticks(&mut ts), 0);
        assert_eq!(ts.accumulated(), Duration::from_millis(5));
    }
}
