use std::time::{Duration, Instant};

/// Wall-clock time spent by one processing invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Measurement {
    spent: Duration,
}

impl Measurement {
    pub fn from_duration(spent: Duration) -> Self {
        Measurement { spent }
    }

    pub fn spent(&self) -> Duration {
        self.spent
    }

    /// Elapsed nanoseconds, saturating at `u64::MAX`.
    pub fn as_nanos(&self) -> u64 {
        u64::try_from(self.spent.as_nanos()).unwrap_or(u64::MAX)
    }

    /// Elements per second.
    pub fn throughput(&self, elements: usize) -> f64 {
        let secs = self.spent.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        elements as f64 / secs
    }
}

/// Started at the beginning of an invocation, consumed at its end.
#[derive(Debug)]
pub struct Stopwatch(Instant);

impl Stopwatch {
    pub fn start() -> Self {
        Stopwatch(Instant::now())
    }

    pub fn finish(self) -> Measurement {
        Measurement::from_duration(self.0.elapsed())
    }
}

/// Runs `f` and measures how long the whole call took.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Measurement) {
    let stopwatch = Stopwatch::start();
    let value = f();
    (value, stopwatch.finish())
}
