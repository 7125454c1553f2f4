//! Hand landmark model.

use crate::bridge::RawLandmark;
use crate::canvas::{draw, Canvas, Color};

/// A landmark position: normalized X and Y, and relative depth in Z.
pub type Point = [f64; 3];

/// One hand detected by the external tracker, prepared for display.
///
/// Landmark positions are stored in the order the tracker reports them, which is the order of
/// [`LandmarkIdx`].
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    points: Vec<Point>,
    time: f64,
}

impl Hand {
    /// Radius of the circle drawn for each landmark, in canvas pixels.
    pub const POINT_SIZE: u32 = 7;
    pub const POINT_COLOR: Color = Color::WHITE;

    /// Creates a [`Hand`] from raw tracker landmarks.
    ///
    /// The tracker's coordinates are normalized to the video frame, which is then shown on a
    /// square canvas. To keep the hand's proportions intact, the longer axis of the frame is
    /// stretched around the center by `aspect` (`width / height`): X for landscape and square
    /// frames, Y for portrait ones. Afterwards X is mirrored, so that moving a hand to the right
    /// also moves it to the right on screen. Z is kept as-is.
    pub fn new(landmarks: &[RawLandmark], aspect: f64, time: f64) -> Self {
        let points = landmarks
            .iter()
            .map(|lm| {
                let (mut x, mut y) = (lm.x - 0.5, lm.y - 0.5);
                if aspect < 1.0 {
                    y /= aspect;
                } else {
                    x *= aspect;
                }
                let (x, y) = (x + 0.5, y + 0.5);
                [1.0 - x, y, lm.z]
            })
            .collect();

        Self { points, time }
    }

    /// Returns the corrected landmark positions.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the video timestamp of the frame this hand was detected in.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Draws a filled circle for every landmark.
    ///
    /// Landmarks far outside the frame are pulled in to just beyond the canvas edge, where their
    /// circle is clipped entirely. Non-finite landmarks are skipped.
    pub fn draw(&self, canvas: &mut Canvas) {
        let (w, h) = (canvas.width() as f64, canvas.height() as f64);
        for &[x, y, _] in &self.points {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            let (x, y) = (to_pixel(x, w), to_pixel(y, h));
            draw::circle(canvas, x, y, Self::POINT_SIZE).color(Self::POINT_COLOR);
        }
    }
}

/// Converts a normalized coordinate to a pixel coordinate along an axis of `len` pixels.
fn to_pixel(coord: f64, len: f64) -> i32 {
    let margin = f64::from(Hand::POINT_SIZE + 1);
    (coord * len).floor().clamp(-margin, len + margin) as i32
}

/// Names for the hand landmarks, in the order the tracker reports them.
///
/// # Terminology
///
/// - **CMC**: [Carpometacarpal joint], the lowest joint of the thumb, located near the wrist.
/// - **MCP**: [Metacarpophalangeal joint], the lower joint forming the knuckles near the palm of
///   the hand.
/// - **PIP**: Proximal Interphalangeal joint, the joint between the MCP and DIP.
/// - **DIP**: Distal Interphalangeal joint, the highest joint of a finger.
/// - **Tip**: This landmark is just placed on the tip of the finger, above the DIP.
///
/// [Carpometacarpal joint]: https://en.wikipedia.org/wiki/Carpometacarpal_joint
/// [Metacarpophalangeal joint]: https://en.wikipedia.org/wiki/Metacarpophalangeal_joint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkIdx {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

impl LandmarkIdx {
    /// Number of landmarks the tracker reports per hand.
    pub const COUNT: usize = 21;
}
