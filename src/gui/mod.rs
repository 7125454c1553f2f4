//! Native window host.
//!
//! Opens a window, drives a [`Scene`] at a fixed frame rate, and shows the canvas it draws.

mod gpu;
mod renderer;

use std::{rc::Rc, time::Instant};

use winit::{
    event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
};

use crate::{
    canvas::Canvas,
    host::{self, FramePacer, Scene},
    options::Options,
    timer::{FpsCounter, Timer},
};

use self::{
    gpu::Gpu,
    renderer::{Renderer, Window},
};

/// Runs `scene` in a window until the window is closed or Escape is pressed.
///
/// Never returns on success; the process exits when the window closes.
pub fn run<S: Scene + 'static>(mut scene: S, options: &Options) -> anyhow::Result<()> {
    let event_loop = EventLoop::new();

    let mut canvas = Canvas::default();
    let window_res = canvas.resolution().scaled(options.get_scale());
    let window = Window::open(&*event_loop, options.get_title(), window_res)?;
    let gpu = Rc::new(pollster::block_on(Gpu::open())?);
    let mut renderer = Renderer::new(window, gpu, canvas.resolution())?;

    let mut pacer = FramePacer::new(options.get_fps(), Instant::now());
    let mut fps = FpsCounter::new("frame loop");
    let t_frame = Timer::new("frame");
    let t_upload = Timer::new("upload");

    log::info!(
        "showing {} canvas in {} window at {} FPS",
        canvas.resolution(),
        window_res,
        options.get_fps()
    );

    event_loop.run(move |event, _target, flow| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(VirtualKeyCode::Escape),
                        ..
                    },
                ..
            } => {
                log::debug!("window closed");
                flow.set_exit();
            }
            _ => {}
        },
        Event::MainEventsCleared if !matches!(flow, ControlFlow::ExitWithCode(_)) => {
            let now = Instant::now();
            if pacer.is_due(now) {
                t_frame.time(|| host::step(&mut scene, &mut canvas));
                t_upload.time(|| renderer.update_texture(canvas.resolution(), &canvas.to_rgba8()));
                renderer.window().request_redraw();
                pacer.advance(now);
                fps.tick_with([&t_frame, &t_upload]);
            }
            flow.set_wait_until(pacer.deadline());
        }
        Event::RedrawRequested(_) => renderer.redraw(),
        _ => {}
    })
}
