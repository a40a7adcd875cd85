//! Gravity clock - host-driven replacement for a wall-clock interval timer.
//!
//! The host reports elapsed time; the clock says how many whole gravity steps
//! are due. Dropping the clock is how a pending timer is cancelled.

/// Periodic gravity timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityClock {
    interval_ms: u32,
    accumulated_ms: u32,
}

impl GravityClock {
    /// Arm a clock that fires every `interval_ms` (at least 1 ms)
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
        }
    }

    /// Add elapsed host time
    pub fn advance(&mut self, elapsed_ms: u32) {
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
    }

    /// Consume one due step, if any
    pub fn take_step(&mut self) -> bool {
        if self.accumulated_ms >= self.interval_ms {
            self.accumulated_ms -= self.interval_ms;
            true
        } else {
            false
        }
    }

    /// Time until the next step is due
    pub fn until_next_ms(&self) -> u32 {
        self.interval_ms.saturating_sub(self.accumulated_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let mut clock = GravityClock::new(500);
        clock.advance(499);
        assert!(!clock.take_step());
        clock.advance(1);
        assert!(clock.take_step());
        assert!(!clock.take_step());
    }

    #[test]
    fn keeps_remainder_across_steps() {
        let mut clock = GravityClock::new(500);
        clock.advance(1200);
        assert!(clock.take_step());
        assert!(clock.take_step());
        assert!(!clock.take_step());
        assert_eq!(clock.until_next_ms(), 300);
    }

    #[test]
    fn zero_interval_is_clamped() {
        let mut clock = GravityClock::new(0);
        assert_eq!(clock.until_next_ms(), 1);
        assert!(!clock.take_step());
        clock.advance(1);
        assert!(clock.take_step());
    }
}
