//! The frame loop contract between an application and whatever drives it.

use std::time::{Duration, Instant};

use crate::canvas::Canvas;

/// Per-frame callbacks invoked by a host.
///
/// Once per frame, the host calls [`Scene::update`] and then [`Scene::draw`]. The host owns the
/// canvas and presents it after `draw` returns.
pub trait Scene {
    fn update(&mut self);

    fn draw(&mut self, canvas: &mut Canvas);
}

/// Runs a single frame of `scene`.
pub fn step<S: Scene + ?Sized>(scene: &mut S, canvas: &mut Canvas) {
    scene.update();
    scene.draw(canvas);
}

/// Schedules frames at a fixed rate.
pub struct FramePacer {
    interval: Duration,
    next: Instant,
}

impl FramePacer {
    /// Creates a pacer for `fps` frames per second, with the first frame due at `now`.
    ///
    /// # Panics
    ///
    /// Panics if `fps` is zero.
    pub fn new(fps: u32, now: Instant) -> Self {
        assert!(fps != 0, "frame rate must be greater than zero");
        Self {
            interval: Duration::from_secs(1) / fps,
            next: now,
        }
    }

    /// Returns when the next frame is due.
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Returns whether a frame is due at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Records that a frame was started at `now` and returns when the following one is due.
    ///
    /// If the loop has fallen more than a frame behind, the schedule restarts from `now` instead
    /// of trying to catch up with a burst of frames.
    pub fn advance(&mut self, now: Instant) -> Instant {
        self.next += self.interval;
        if self.next <= now {
            log::trace!("frame loop fell behind by {:?}", now - self.next);
            self.next = now + self.interval;
        }
        self.next
    }
}
