use std::thread;
use std::time::Duration;

use tracing::trace;

/// How long [`wait`] blocks when no other interval is given.
pub const DEFAULT_WAIT: Duration = Duration::from_secs(2);

/// Something that can block the calling thread for a while.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Blocks the current OS thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

impl<S: Sleeper + ?Sized> Sleeper for &S {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}

/// A fixed pause, handed to whichever [`Sleeper`] the caller provides.
#[derive(Clone, Debug)]
pub struct Delay<S> {
    sleeper: S,
    interval: Duration,
}

impl<S: Sleeper> Delay<S> {
    pub fn new(sleeper: S) -> Self {
        Self::with_interval(sleeper, DEFAULT_WAIT)
    }

    pub fn with_interval(sleeper: S, interval: Duration) -> Self {
        Delay { sleeper, interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Block once for the configured interval.
    pub fn wait(&self) {
        trace!("waiting for {:?}", self.interval);
        self.sleeper.sleep(self.interval);
    }
}

/// Block the calling thread for [`DEFAULT_WAIT`].
pub fn wait() {
    Delay::new(ThreadSleeper).wait();
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::time::Instant;

    use super::*;

    #[derive(Default)]
    struct RecordingSleeper {
        calls: RefCell<Vec<Duration>>,
    }

    impl Sleeper for RecordingSleeper {
        fn sleep(&self, duration: Duration) {
            self.calls.borrow_mut().push(duration);
        }
    }

    #[test]
    fn default_delay_sleeps_once_for_two_seconds() {
        let sleeper = RecordingSleeper::default();
        let delay = Delay::new(&sleeper);
        assert_eq!(delay.interval(), DEFAULT_WAIT);
        delay.wait();

        assert_eq!(*sleeper.calls.borrow(), vec![Duration::from_secs(2)]);
    }

    #[test]
    fn each_wait_is_a_single_sleep() {
        let sleeper = RecordingSleeper::default();
        let delay = Delay::with_interval(&sleeper, Duration::from_millis(250));
        delay.wait();
        delay.wait();

        assert_eq!(
            *sleeper.calls.borrow(),
            vec![Duration::from_millis(250), Duration::from_millis(250)]
        );
    }

    #[test]
    fn zero_interval_still_calls_sleeper() {
        let sleeper = RecordingSleeper::default();
        Delay::with_interval(&sleeper, Duration::ZERO).wait();

        assert_eq!(*sleeper.calls.borrow(), vec![Duration::ZERO]);
    }

    #[test]
    fn thread_sleeper_blocks_at_least_the_interval() {
        let interval = Duration::from_millis(20);
        let start = Instant::now();
        Delay::with_interval(ThreadSleeper, interval).wait();
        let elapsed = start.elapsed();

        assert!(elapsed >= interval, "slept only {elapsed:?}");
        assert!(elapsed < Duration::from_secs(5), "slept {elapsed:?}");
    }
}
