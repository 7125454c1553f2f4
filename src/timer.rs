//! Frame timing diagnostics.

use std::{
    cell::Cell,
    fmt::{self, Arguments},
    time::{Duration, Instant},
};

/// Measures the average time an operation takes.
///
/// Collected timings are averaged and reset when the timer is displayed using `{}`
/// ([`std::fmt::Display`]).
pub struct Timer {
    name: &'static str,
    total: Cell<Duration>,
    count: Cell<u32>,
}

impl Timer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            total: Cell::new(Duration::ZERO),
            count: Cell::new(0),
        }
    }

    /// Invokes a closure, measuring and recording the time it takes.
    pub fn time<T>(&self, timee: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let result = timee();
        self.record(start.elapsed());
        result
    }

    fn record(&self, duration: Duration) {
        self.total.set(self.total.get() + duration);
        self.count.set(self.count.get() + 1);
    }
}

/// Displays the average recorded time and resets it.
impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total.replace(Duration::ZERO);
        let count = self.count.replace(0);
        let avg_ms = if count == 0 {
            0.0
        } else {
            total.as_secs_f32() * 1000.0 / count as f32
        };

        write!(f, "{}: {count}x{avg_ms:.01}ms", self.name)
    }
}

/// Logs frames per second with optional extra data.
pub struct FpsCounter {
    name: String,
    frames: u32,
    start: Instant,
}

impl FpsCounter {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            frames: 0,
            start: Instant::now(),
        }
    }

    /// Advances the frame counter by 1 and logs FPS and the `extra` timers if one second has
    /// passed.
    ///
    /// Returns the logged line, if any.
    pub fn tick_with<'a, I: IntoIterator<Item = &'a Timer>>(&mut self, extra: I) -> Option<String> {
        let now = Instant::now();
        if !self.is_report_due(now) {
            self.frames += 1;
            return None;
        }

        let extra = extra
            .into_iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        if extra.is_empty() {
            self.tick_impl(now, format_args!(""))
        } else {
            self.tick_impl(now, format_args!(" ({extra})"))
        }
    }

    fn is_report_due(&self, now: Instant) -> bool {
        now.duration_since(self.start) > Duration::from_secs(1)
    }

    fn tick_impl(&mut self, now: Instant, args: Arguments<'_>) -> Option<String> {
        self.frames += 1;
        if !self.is_report_due(now) {
            return None;
        }

        let report = format!("{}: {} FPS{}", self.name, self.frames, args);
        log::debug!("{report}");
        self.frames = 0;
        self.start = now;
        Some(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_averages_and_resets() {
        let timer = Timer::new("draw");
        assert_eq!(timer.to_string(), "draw: 0x0.0ms");

        timer.record(Duration::from_millis(2));
        timer.record(Duration::from_millis(4));
        assert_eq!(timer.to_string(), "draw: 2x3.0ms");
        assert_eq!(timer.to_string(), "draw: 0x0.0ms");

        assert_eq!(timer.time(|| 42), 42);
        assert!(timer.to_string().starts_with("draw: 1x"));
    }

    #[test]
    fn fps_reports_once_per_second() {
        let mut fps = FpsCounter::new("frame loop");
        assert_eq!(fps.tick_with(std::iter::empty()), None);
        assert_eq!(fps.tick_with(std::iter::empty()), None);

        fps.start -= Duration::from_secs(2);
        let timer = Timer::new("update");
        timer.record(Duration::from_millis(1));
        assert_eq!(
            fps.tick_with([&timer]).as_deref(),
            Some("frame loop: 3 FPS (update: 1x1.0ms)")
        );
        assert_eq!(fps.frames, 0);

        fps.start -= Duration::from_secs(2);
        assert_eq!(
            fps.tick_with(std::iter::empty()).as_deref(),
            Some("frame loop: 1 FPS")
        );
    }
}
