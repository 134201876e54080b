//! Timing utilities for the generator stages.

use std::{
    fmt,
    time::{Duration, Instant},
};

use indexmap::IndexMap;
use log::{log_enabled, Level};

/// A collection of timings for each stage of a generator job, kept in the
/// order in which the stages first ran.
#[derive(Default, Debug, Clone)]
pub struct StageMetrics {
    /// The collected timings for each stage.
    pub timings: IndexMap<&'static str, Duration>,
}

impl StageMetrics {
    /// Add a metric, accumulating onto any previous timing of the stage.
    pub fn add_metric(&mut self, name: &'static str, time: Duration) {
        self.timings.entry(name).and_modify(|e| *e += time).or_insert(time);
    }

    /// Time an item and add the metric to the stage. Timing only happens
    /// when `info` logging is enabled.
    pub fn time_item<T>(&mut self, name: &'static str, f: impl FnOnce() -> T) -> T {
        let mut time = Duration::default();
        let value = timed(f, Level::Info, |duration| time = duration);

        self.add_metric(name, time);
        value
    }

    /// Create an iterator over the collected timings.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Duration)> + '_ {
        self.timings.iter().map(|(item, time)| (*item, *time))
    }

    /// The sum of all collected timings.
    pub fn total(&self) -> Duration {
        self.timings.values().sum()
    }
}

impl fmt::Display for StageMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let longest = self.timings.keys().map(|name| name.len()).max().unwrap_or_default();

        for (name, time) in self.iter() {
            writeln!(f, "{name:<longest$}: {time:?}")?;
        }

        write!(f, "{:<longest$}: {:?}", "total", self.total())
    }
}

/// Execute the given closure while timing it, and pass the duration to the
/// second closure.
#[inline(always)]
pub fn timed<T>(op: impl FnOnce() -> T, level: Level, on_elapsed: impl FnOnce(Duration)) -> T {
    if log_enabled!(level) {
        let begin = Instant::now();
        let result = op();
        on_elapsed(begin.elapsed());
        result
    } else {
        op()
    }
}
