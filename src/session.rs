//! Polling of the external tracker.

use crate::bridge::TrackingSource;
use crate::canvas::Canvas;
use crate::hand::Hand;
use crate::resolution::AspectRatio;

/// What happens to the displayed hands when the tracker stops finding any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleHands {
    /// The hands of the last frame with a detection stay on screen.
    #[default]
    Keep,
    /// Hands are removed as soon as a frame without detections arrives.
    Clear,
}

/// Connection to the external tracker.
///
/// The session has two independent flags: whether it is *connected* (webcam and detector were
/// both running at some point) and whether the most recently processed frame *detected* any
/// hands. Once connected, it stays connected.
pub struct TrackingSession<S> {
    source: S,
    connected: bool,
    detected: bool,
    aspect: AspectRatio,
    /// Video time of the last processed result, `None` before the first one.
    last_video_time: Option<f64>,
    processing_time: f64,
    hands: Vec<Hand>,
    stale_hands: StaleHands,
}

impl<S: TrackingSource> TrackingSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            connected: false,
            detected: false,
            aspect: AspectRatio::SQUARE,
            last_video_time: None,
            processing_time: 0.0,
            hands: Vec::new(),
            stale_hands: StaleHands::default(),
        }
    }

    /// Sets what to do with the displayed hands when detection is lost.
    pub fn set_stale_hands(&mut self, policy: StaleHands) {
        self.stale_hands = policy;
    }

    /// Marks the session as connected if the webcam and the detector are both running.
    ///
    /// Does nothing if the session is already connected, or if the tracker does not report a
    /// usable video resolution yet.
    pub fn connect(&mut self) {
        if self.connected {
            return;
        }
        if !self.source.is_webcam_active() || !self.source.is_detector_active() {
            return;
        }
        let Some(res) = self.source.video_dimensions() else {
            log::debug!("tracker is running, but the video resolution is unknown");
            return;
        };
        let Some(aspect) = res.aspect_ratio() else {
            return;
        };

        self.aspect = aspect;
        self.connected = true;
        log::info!("connected to tracker, video resolution {res} ({aspect})");
    }

    /// Processes the tracker's latest state. Should be called once per frame while connected.
    pub fn update(&mut self) {
        // The webcam resolution can change while running.
        if let Some(aspect) = self
            .source
            .video_dimensions()
            .and_then(|res| res.aspect_ratio())
        {
            if aspect != self.aspect {
                log::debug!("video aspect ratio changed from {} to {}", self.aspect, aspect);
                self.aspect = aspect;
            }
        }

        self.fetch_landmarks();
    }

    /// Rebuilds the hand list from the tracker's latest result.
    ///
    /// A result whose video time matches the previously processed one is ignored, since the
    /// tracker and the draw loop do not run in lockstep and the same result is usually polled more
    /// than once.
    pub fn fetch_landmarks(&mut self) {
        let Some(result) = self.source.latest_result() else {
            return;
        };
        log::trace!("fetched tracker result: {:?}", result);

        if self.last_video_time == Some(result.video_time) {
            return;
        }
        if let Some(prev) = self.last_video_time {
            self.processing_time = result.video_time - prev;
            log::trace!("processing time: {}", self.processing_time);
        }
        self.last_video_time = Some(result.video_time);

        if result.landmarks.is_empty() {
            if self.detected {
                log::debug!("hand lost at video time {}", result.video_time);
            }
            self.detected = false;
            if self.stale_hands == StaleHands::Clear {
                self.hands.clear();
            }
        } else {
            if !self.detected {
                log::debug!(
                    "found {} hand(s) at video time {}",
                    result.landmarks.len(),
                    result.video_time
                );
            }
            self.detected = true;
            let aspect = self.aspect.as_f64();
            self.hands = result
                .landmarks
                .iter()
                .map(|landmarks| Hand::new(landmarks, aspect, result.video_time))
                .collect();
        }
    }

    /// Returns whether the last processed result contained at least one hand.
    pub fn is_detected(&self) -> bool {
        self.detected
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Returns the hands currently on display.
    ///
    /// With [`StaleHands::Keep`], this can be non-empty even though [`Self::is_detected`] returns
    /// `false`.
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the aspect ratio of the tracker's video.
    pub fn aspect(&self) -> AspectRatio {
        self.aspect
    }

    /// Returns the video time between the last two processed results.
    ///
    /// Only informational. It is `0.0` until two distinct results have been processed.
    pub fn processing_time(&self) -> f64 {
        self.processing_time
    }

    pub fn last_video_time(&self) -> Option<f64> {
        self.last_video_time
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Draws every hand on display.
    pub fn draw(&self, canvas: &mut Canvas) {
        for hand in &self.hands {
            hand.draw(canvas);
        }
    }
}
