//! The hand overlay application.

use crate::bridge::TrackingSource;
use crate::canvas::{draw, Canvas, Color};
use crate::host::Scene;
use crate::session::TrackingSession;

const TEXT_COLOR: Color = Color::WHITE;
const BACKGROUND: Color = Color::BLACK;

/// Which phase the application is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// The tracker has not reported a running webcam and detector yet.
    WaitingForCamera,
    /// Landmarks are polled and drawn every frame.
    Tracking,
}

/// Draws the hands found by the tracker, plus a status line at the bottom of the canvas.
pub struct App<S> {
    session: TrackingSession<S>,
}

impl<S: TrackingSource> App<S> {
    pub fn new(session: TrackingSession<S>) -> Self {
        Self { session }
    }

    pub fn state(&self) -> AppState {
        if self.session.is_connected() {
            AppState::Tracking
        } else {
            AppState::WaitingForCamera
        }
    }

    pub fn session(&self) -> &TrackingSession<S> {
        &self.session
    }

    /// Advances the application by one frame.
    ///
    /// While waiting for the camera, only a connection attempt is made; landmarks are first
    /// processed in the frame after the connection succeeds.
    pub fn update(&mut self) {
        match self.state() {
            AppState::WaitingForCamera => self.session.connect(),
            AppState::Tracking => self.session.update(),
        }
    }

    /// Redraws the whole canvas.
    pub fn draw(&mut self, canvas: &mut Canvas) {
        canvas.clear(BACKGROUND);

        let (w, h) = (canvas.width() as i32, canvas.height() as i32);
        let y = h - 10;
        match self.state() {
            AppState::Tracking => {
                let camera = match self.session.source().video_dimensions() {
                    Some(res) => format!("CAMERA {res}"),
                    None => "CAMERA -".to_string(),
                };
                draw::text(canvas, w / 4, y, &camera).color(TEXT_COLOR);

                let status = if self.session.is_detected() {
                    "HAND: found"
                } else {
                    "HAND: not found"
                };
                draw::text(canvas, w / 2 + 10, y, status).color(TEXT_COLOR);
            }
            AppState::WaitingForCamera => {
                draw::text(canvas, w / 4, y, "Waiting for camera to connect").color(TEXT_COLOR);
            }
        }

        self.session.draw(canvas);
    }
}

impl<S: TrackingSource> Scene for App<S> {
    fn update(&mut self) {
        App::update(self);
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        App::draw(self, canvas);
    }
}
