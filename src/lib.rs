//! Hand landmark overlay.
//!
//! Draws the hand landmarks computed by an external hand tracker onto a small 256x256 pixel canvas,
//! once per frame, together with a few lines of status text. The tracker itself (webcam capture,
//! model inference, smoothing) runs elsewhere; this crate only polls its output through a
//! [`TrackingSource`].
//!
//! # Coordinates
//!
//! Landmarks arrive in normalized frame coordinates: X and Y in `[0, 1]`, with Y pointing *down*,
//! and Z holding relative depth. Before drawing they are corrected for the video's aspect ratio and
//! mirrored horizontally, see [`Hand`].
//!
//! # Environment Variables
//!
//! The `handmark` binary is configured through environment variables (see [`Options::from_env`]):
//!
//! * `HANDMARK_SOURCE`: where to read tracker snapshots from. `-` (the default) reads from *stdin*,
//!   `tcp://<host>:<port>` connects to a TCP server, anything else is treated as a file path.
//! * `HANDMARK_FPS`: target frame rate of the draw loop (default: 30).
//! * `HANDMARK_SCALE`: integer scale factor of the window (default: 3).
//! * `HANDMARK_CLEAR_STALE_HANDS`: if `1` or `true`, hands are removed from the canvas as soon as
//!   the tracker stops detecting them, instead of lingering at their last known pose.
//!
//! Logging can be configured with `RUST_LOG`, as usual for [`env_logger`].
//!
//! [`TrackingSource`]: bridge::TrackingSource
//! [`Hand`]: hand::Hand
//! [`Options::from_env`]: options::Options::from_env

use log::LevelFilter;

pub mod app;
pub mod bridge;
pub mod canvas;
pub mod geometry;
pub mod gui;
pub mod hand;
pub mod host;
pub mod options;
pub mod resolution;
pub mod session;
pub mod timer;

#[cfg(test)]
mod test;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .filter(Some("wgpu"), LevelFilter::Warn)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and `handmark` will log at *debug* level, `wgpu` at *warn* level. `RUST_LOG`
/// overrides these defaults.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
