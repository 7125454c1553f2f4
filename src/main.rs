use anyhow::Context;
use handmark::{
    app::App,
    bridge::{self, SharedBridge},
    gui,
    options::Options,
    session::TrackingSession,
};

fn main() -> anyhow::Result<()> {
    handmark::init_logger!();

    let options = Options::from_env()?;
    log::debug!("{:?}", options);

    let bridge = SharedBridge::new();
    let input = options.get_source().open()?;
    bridge::spawn_reader(input, bridge.clone()).context("failed to spawn bridge reader")?;

    let mut session = TrackingSession::new(bridge);
    session.set_stale_hands(options.get_stale_hands());

    gui::run(App::new(session), &options)
}
