//! Typed access to the external hand tracker.
//!
//! The tracker (typically a browser page running a hand landmark model next to the webcam)
//! publishes snapshots of its state as JSON objects, one per line:
//!
//! ```json
//! {"webcamRunning": true, "detectionRunning": true, "videoWidth": 640, "videoHeight": 480,
//!  "results": {"videoTime": 1.25, "landmarks": [[{"x": 0.5, "y": 0.5, "z": 0.0}, ...]]}}
//! ```
//!
//! Snapshots are converted into [`BridgeState`] at the edge, so everything past this module works
//! with typed data only. Missing fields count as "not running" or "not available".

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    net::TcpStream,
    path::PathBuf,
    str::FromStr,
    sync::{Arc, Mutex, PoisonError},
    thread::{self, JoinHandle},
};

use anyhow::Context;
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::resolution::Resolution;

/// Read-only view of the tracker's current state.
///
/// Every method returns a snapshot; the tracker may change its state between calls.
pub trait TrackingSource {
    /// Returns whether the webcam is streaming.
    fn is_webcam_active(&self) -> bool;

    /// Returns whether the landmark detector is running on the webcam stream.
    fn is_detector_active(&self) -> bool;

    /// Returns the resolution of the webcam video, or `None` if it is unknown.
    fn video_dimensions(&self) -> Option<Resolution>;

    /// Returns the most recent detection result, if the tracker has produced one.
    fn latest_result(&self) -> Option<TrackingResult>;
}

/// A single landmark as reported by the tracker.
///
/// `x` and `y` are normalized to the video frame (`0.0..=1.0`), `z` is relative depth. All three
/// must be finite.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawLandmark {
    #[serde(deserialize_with = "finite")]
    pub x: f64,
    #[serde(deserialize_with = "finite")]
    pub y: f64,
    #[serde(deserialize_with = "finite")]
    pub z: f64,
}

fn finite<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(de::Error::invalid_value(
            de::Unexpected::Float(value),
            &"a finite landmark coordinate",
        ))
    }
}

/// Landmarks of all hands found in one video frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingResult {
    /// Timestamp of the video frame the landmarks were computed from.
    pub video_time: f64,
    /// One entry per detected hand, each holding that hand's landmarks in joint order.
    #[serde(default)]
    pub landmarks: Vec<Vec<RawLandmark>>,
}

/// One snapshot of the tracker's state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BridgeState {
    pub webcam_running: bool,
    pub detection_running: bool,
    pub video_width: u32,
    pub video_height: u32,
    pub results: Option<TrackingResult>,
}

impl TrackingSource for BridgeState {
    fn is_webcam_active(&self) -> bool {
        self.webcam_running
    }

    fn is_detector_active(&self) -> bool {
        self.detection_running
    }

    fn video_dimensions(&self) -> Option<Resolution> {
        let res = Resolution::new(self.video_width, self.video_height);
        res.aspect_ratio().map(|_| res)
    }

    fn latest_result(&self) -> Option<TrackingResult> {
        self.results.clone()
    }
}

/// Parses one JSON snapshot.
///
/// Fails if the message is not valid JSON or does not have the expected shape (for example, a
/// landmark lacking its `y` coordinate, or a non-numeric `videoTime`).
pub fn parse_message(line: &str) -> Result<BridgeState, serde_json::Error> {
    serde_json::from_str(line)
}

/// Shared handle to the latest [`BridgeState`].
///
/// Clones refer to the same state. A writer (usually [`spawn_reader`]) replaces the whole snapshot
/// with [`SharedBridge::publish`], readers observe it through [`TrackingSource`].
#[derive(Debug, Clone, Default)]
pub struct SharedBridge {
    state: Arc<Mutex<BridgeState>>,
}

impl SharedBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current snapshot.
    pub fn publish(&self, state: BridgeState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }

    /// Returns a copy of the current snapshot.
    #[cfg(test)]
    fn snapshot(&self) -> BridgeState {
        self.with(BridgeState::clone)
    }

    fn with<R>(&self, f: impl FnOnce(&BridgeState) -> R) -> R {
        f(&*self.state.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl TrackingSource for SharedBridge {
    fn is_webcam_active(&self) -> bool {
        self.with(|s| s.is_webcam_active())
    }

    fn is_detector_active(&self) -> bool {
        self.with(|s| s.is_detector_active())
    }

    fn video_dimensions(&self) -> Option<Resolution> {
        self.with(|s| s.video_dimensions())
    }

    fn latest_result(&self) -> Option<TrackingResult> {
        self.with(|s| s.latest_result())
    }
}

/// Reads newline-delimited JSON snapshots from `reader` and publishes each one to `bridge`.
///
/// Malformed lines (invalid UTF-8 or JSON) are logged and skipped; the previously published
/// snapshot stays in place. Returns the number of published snapshots once `reader` reaches EOF,
/// or the first I/O error.
pub fn read_messages<R: BufRead>(mut reader: R, bridge: &SharedBridge) -> io::Result<usize> {
    let mut published = 0;
    let mut buf = Vec::new();
    for line_no in 1.. {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(e) => {
                log::error!("malformed tracker message on line {line_no}: {e}");
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        match parse_message(line) {
            Ok(state) => {
                log::trace!("tracker snapshot: {:?}", state);
                bridge.publish(state);
                published += 1;
            }
            Err(e) => log::error!("malformed tracker message on line {line_no}: {e}"),
        }
    }
    Ok(published)
}

/// Spawns a thread that runs [`read_messages`] until the input ends.
pub fn spawn_reader<R>(reader: R, bridge: SharedBridge) -> io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new()
        .name("bridge reader".into())
        .spawn(move || match read_messages(reader, &bridge) {
            Ok(count) => log::info!("tracker input closed after {count} snapshots"),
            Err(e) => log::error!("failed to read tracker input: {e}"),
        })
}

/// Where tracker snapshots are read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Source {
    #[default]
    Stdin,
    File(PathBuf),
    /// A TCP server at `host:port` that streams snapshots after connecting.
    Tcp(String),
}

impl Source {
    /// Opens the source for reading.
    pub fn open(&self) -> anyhow::Result<Box<dyn BufRead + Send>> {
        Ok(match self {
            Source::Stdin => Box::new(BufReader::new(io::stdin())),
            Source::File(path) => Box::new(BufReader::new(
                File::open(path)
                    .with_context(|| format!("failed to open tracker input {}", path.display()))?,
            )),
            Source::Tcp(addr) => {
                let stream = TcpStream::connect(addr.as_str())
                    .with_context(|| format!("failed to connect to tracker at {addr}"))?;
                log::debug!("connected to tracker at {}", addr);
                Box::new(BufReader::new(stream))
            }
        })
    }
}

/// Parses `-` as [`Source::Stdin`], `tcp://host:port` as [`Source::Tcp`], and anything else as a
/// file path.
impl FromStr for Source {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            anyhow::bail!("tracker source must not be empty");
        }
        if s == "-" {
            return Ok(Source::Stdin);
        }
        if let Some(addr) = s.strip_prefix("tcp://") {
            if !addr.contains(':') {
                anyhow::bail!("tracker address `{addr}` is missing a port");
            }
            return Ok(Source::Tcp(addr.to_string()));
        }
        Ok(Source::File(s.into()))
    }
}
