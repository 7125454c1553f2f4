use crate::bridge::{BridgeState, RawLandmark, TrackingResult};
use crate::hand::LandmarkIdx;

pub fn landmark(x: f64, y: f64, z: f64) -> RawLandmark {
    RawLandmark { x, y, z }
}

/// A fake hand: 21 landmarks spread on a small grid around `(cx, cy)`.
pub fn synthetic_hand(cx: f64, cy: f64) -> Vec<RawLandmark> {
    (0..LandmarkIdx::COUNT)
        .map(|i| {
            let (col, row) = ((i % 5) as f64, (i / 5) as f64);
            landmark(cx + (col - 2.0) * 0.02, cy + (row - 2.0) * 0.02, i as f64 * -0.01)
        })
        .collect()
}

/// A fully connected tracker snapshot reporting `hands` at `video_time`.
pub fn snapshot(video_time: f64, hands: Vec<Vec<RawLandmark>>) -> BridgeState {
    BridgeState {
        webcam_running: true,
        detection_running: true,
        video_width: 640,
        video_height: 480,
        results: Some(TrackingResult {
            video_time,
            landmarks: hands,
        }),
    }
}
