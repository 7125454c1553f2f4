use std::{cell::Cell, io::Cursor, rc::Rc};

use handmark::{
    app::{App, AppState},
    bridge::{self, BridgeState, RawLandmark, SharedBridge, TrackingResult, TrackingSource},
    canvas::{Canvas, Color},
    hand::Hand,
    host,
    resolution::Resolution,
    session::{StaleHands, TrackingSession},
};

/// Plays back a fixed list of tracker states, one per frame.
struct Script {
    states: Vec<BridgeState>,
    frame: Rc<Cell<usize>>,
}

impl Script {
    fn current(&self) -> &BridgeState {
        let index = self.frame.get().min(self.states.len() - 1);
        &self.states[index]
    }
}

impl TrackingSource for Script {
    fn is_webcam_active(&self) -> bool {
        self.current().webcam_running
    }

    fn is_detector_active(&self) -> bool {
        self.current().detection_running
    }

    fn video_dimensions(&self) -> Option<Resolution> {
        self.current().video_dimensions()
    }

    fn latest_result(&self) -> Option<TrackingResult> {
        self.current().results.clone()
    }
}

fn hand_at(cx: f64, cy: f64) -> Vec<RawLandmark> {
    (0..21)
        .map(|i| RawLandmark {
            x: cx + (i % 3) as f64 * 0.01,
            y: cy + (i / 3) as f64 * 0.01,
            z: 0.0,
        })
        .collect()
}

fn state(video_time: f64, hands: Vec<Vec<RawLandmark>>) -> BridgeState {
    BridgeState {
        webcam_running: true,
        detection_running: true,
        video_width: 1280,
        video_height: 720,
        results: Some(TrackingResult {
            video_time,
            landmarks: hands,
        }),
    }
}

fn waiting() -> BridgeState {
    BridgeState {
        webcam_running: true,
        ..BridgeState::default()
    }
}

fn run_script(
    states: Vec<BridgeState>,
    policy: StaleHands,
    mut each_frame: impl FnMut(usize, &App<Script>, &Canvas),
) {
    let frame = Rc::new(Cell::new(0));
    let frames = states.len();
    let mut session = TrackingSession::new(Script {
        states,
        frame: frame.clone(),
    });
    session.set_stale_hands(policy);
    let mut app = App::new(session);
    let mut canvas = Canvas::default();

    for i in 0..frames {
        frame.set(i);
        host::step(&mut app, &mut canvas);
        each_frame(i, &app, &canvas);
    }
}

fn hand_pixels(canvas: &Canvas) -> usize {
    // Status text sits in the bottom 16 rows, hands in these tests stay above it.
    (0..240)
        .flat_map(|y| (0..256).map(move |x| (x, y)))
        .filter(|&(x, y)| canvas.get(x, y) == Hand::POINT_COLOR)
        .count()
}

#[test]
fn full_session() {
    let states = vec![
        waiting(),
        waiting(),
        state(100.0, vec![]),                    // connects
        state(100.0, vec![]),                    // first processed result
        state(133.0, vec![hand_at(0.4, 0.4)]),   // hand appears
        state(133.0, vec![hand_at(0.6, 0.6)]),   // same frame polled again
        state(166.0, vec![hand_at(0.3, 0.3), hand_at(0.6, 0.3)]),
        state(200.0, vec![]),                    // hand lost
    ];

    run_script(states, StaleHands::Keep, |frame, app, canvas| {
        let session = app.session();
        match frame {
            0 | 1 => {
                assert_eq!(app.state(), AppState::WaitingForCamera);
                assert_eq!(hand_pixels(canvas), 0);
            }
            2 => {
                assert_eq!(app.state(), AppState::Tracking);
                assert_eq!(session.last_video_time(), None);
                assert_eq!(session.aspect().to_string(), "16:9");
            }
            3 => {
                assert_eq!(session.last_video_time(), Some(100.0));
                assert!(!session.is_detected());
                assert_eq!(hand_pixels(canvas), 0);
            }
            4 | 5 => {
                assert!(session.is_detected());
                assert_eq!(session.hands().len(), 1);
                assert_eq!(session.hands()[0].time(), 133.0);
                assert!(hand_pixels(canvas) > 0);
            }
            6 => {
                assert_eq!(session.hands().len(), 2);
                assert_eq!(session.processing_time(), 33.0);
            }
            7 => {
                assert!(!session.is_detected());
                // The last pose lingers.
                assert_eq!(session.hands().len(), 2);
                assert!(hand_pixels(canvas) > 0);
            }
            _ => unreachable!(),
        }
    });
}

#[test]
fn cleared_hands_disappear_from_canvas() {
    let states = vec![
        state(1.0, vec![]),
        state(2.0, vec![hand_at(0.5, 0.5)]),
        state(3.0, vec![]),
    ];

    let mut lit = Vec::new();
    run_script(states, StaleHands::Clear, |_, app, canvas| {
        lit.push((app.session().is_detected(), hand_pixels(canvas)));
    });

    assert_eq!(lit[0], (false, 0));
    assert!(lit[1].0 && lit[1].1 > 0);
    assert_eq!(lit[2], (false, 0));
}

#[test]
fn drop_of_webcam_does_not_disconnect() {
    let states = vec![
        state(1.0, vec![hand_at(0.5, 0.5)]),
        state(1.0, vec![hand_at(0.5, 0.5)]),
        BridgeState::default(),
        BridgeState::default(),
    ];
    run_script(states, StaleHands::Keep, |_, app, _| {
        assert_eq!(app.state(), AppState::Tracking);
    });
}

#[test]
fn replayed_recording() {
    let recording = r#"
{"webcamRunning": false, "detectionRunning": false}
{"webcamRunning": true, "detectionRunning": true, "videoWidth": 640, "videoHeight": 480, "results": {"videoTime": 0.5, "landmarks": [[{"x": 0.5, "y": 0.5, "z": 0.0}]]}}
"#;
    let bridge = SharedBridge::new();
    let mut app = App::new(TrackingSession::new(bridge.clone()));
    let mut canvas = Canvas::default();

    host::step(&mut app, &mut canvas);
    assert_eq!(app.state(), AppState::WaitingForCamera);

    let published = bridge::read_messages(Cursor::new(recording), &bridge).unwrap();
    assert_eq!(published, 2);

    host::step(&mut app, &mut canvas);
    host::step(&mut app, &mut canvas);
    assert!(app.session().is_detected());

    // A single landmark at the frame center is drawn at the canvas center.
    assert_eq!(canvas.get(128, 128), Hand::POINT_COLOR);
    assert_eq!(canvas.get(20, 20), Color::BLACK);
}

#[test]
fn huge_coordinates_do_not_break_the_frame() {
    let recording = concat!(
        r#"{"webcamRunning":true,"detectionRunning":true,"videoWidth":640,"videoHeight":480,"#,
        r#""results":{"videoTime":1.0,"landmarks":[[{"x":1e39,"y":0.5,"z":0.0},"#,
        r#"{"x":0.5,"y":-1e300,"z":0.0},{"x":-1e39,"y":0.5,"z":1e39}]]}}"#,
    );
    let bridge = SharedBridge::new();
    assert_eq!(bridge::read_messages(Cursor::new(recording), &bridge).unwrap(), 1);

    let mut app = App::new(TrackingSession::new(bridge));
    let mut canvas = Canvas::default();
    host::step(&mut app, &mut canvas);
    host::step(&mut app, &mut canvas);

    assert!(app.session().is_detected());
    assert_eq!(hand_pixels(&canvas), 0);
}
