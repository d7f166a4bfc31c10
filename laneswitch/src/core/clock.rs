use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Fixed-rate frame scheduling. The event loop sleeps until `next_deadline`
/// and runs one tick whenever the pacer reports a frame as due.
pub struct FramePacer {
    interval: Duration,
    next_deadline: Instant,
}

impl FramePacer {
    pub fn new(frame_rate: u32, now: Instant) -> Self {
        Self {
            interval: Duration::from_secs(1) / frame_rate.max(1),
            next_deadline: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_deadline(&self) -> Instant {
        self.next_deadline
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_deadline
    }

    /// Marks the current frame as run and schedules the next one. Missed frames
    /// are dropped instead of being replayed back to back.
    pub fn frame_done(&mut self, now: Instant) {
        self.next_deadline += self.interval;
        if now > self.next_deadline {
            log::trace!("Frame deadline missed by {:?}", now - self.next_deadline);
            self.next_deadline = now + self.interval;
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{cell::Cell, rc::Rc, time::Duration, time::Instant};

    use super::Clock;

    /// Clock that only moves when told to. Clones share the same time.
    #[derive(Clone)]
    pub(crate) struct ManualClock {
        now: Rc<Cell<Instant>>,
    }

    impl ManualClock {
        pub(crate) fn new() -> Self {
            Self {
                now: Rc::new(Cell::new(Instant::now())),
            }
        }

        pub(crate) fn advance(&self, by: Duration) {
            self.now.set(self.now.get() + by);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.now.get()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_hertz_interval() {
        let pacer = FramePacer::new(60, Instant::now());
        assert_eq!(pacer.interval(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn first_frame_is_due_immediately() {
        let start = Instant::now();
        let pacer = FramePacer::new(60, start);
        assert!(pacer.is_due(start));
    }

    #[test]
    fn schedules_one_interval_ahead() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(50, start);

        pacer.frame_done(start);
        assert_eq!(pacer.next_deadline(), start + Duration::from_millis(20));
        assert!(!pacer.is_due(start + Duration::from_millis(19)));
        assert!(pacer.is_due(start + Duration::from_millis(20)));

        // Running a little late keeps the cadence.
        pacer.frame_done(start + Duration::from_millis(25));
        assert_eq!(pacer.next_deadline(), start + Duration::from_millis(40));
    }

    #[test]
    fn long_stall_restarts_schedule() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(50, start);

        let late = start + Duration::from_secs(1);
        pacer.frame_done(late);
        assert_eq!(pacer.next_deadline(), late + Duration::from_millis(20));
    }
}
