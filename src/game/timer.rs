use std::time::Duration;

/// The controller's view of the periodic tick source.
///
/// The controller only records whether ticks should be flowing and how often;
/// the runtime mirrors that onto a real timer. Stopping is idempotent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickTimer {
    period: Option<Duration>,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, period: Duration) {
        self.period = Some(period);
    }

    /// Stop ticking. Returns whether the timer was running.
    pub fn stop(&mut self) -> bool {
        self.period.take().is_some()
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    pub fn is_active(&self) -> bool {
        self.period.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arm_and_stop() {
        let mut timer = TickTimer::new();
        assert!(!timer.is_active());

        timer.arm(Duration::from_millis(250));
        assert_eq!(timer.period(), Some(Duration::from_millis(250)));

        assert!(timer.stop());
        assert!(!timer.is_active());
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut timer = TickTimer::new();
        assert!(!timer.stop());

        timer.arm(Duration::from_millis(80));
        assert!(timer.stop());
        assert!(!timer.stop());
        assert_eq!(timer.period(), None);
    }
}
