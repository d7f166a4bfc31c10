use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use winit::{
    dpi,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use laneswitch::config::{self, gameplay, logging};
use laneswitch::core::{
    clock::{Clock, FramePacer, SystemClock},
    display::WindowRenderer,
    input::InputHandler,
};
use laneswitch::game::{road::RoadLayout, Flow, GameLoop, Sprites};

fn main() -> Result<()> {
    let env = env_logger::Env::default()
        .filter_or(logging::LEVEL_ENV, logging::DEFAULT_LEVEL)
        .write_style_or(logging::STYLE_ENV, "auto");
    env_logger::init_from_env(env);

    log::info!("Starting Lane Switch...");

    let layout = RoadLayout::new(config::window::WIDTH, config::window::HEIGHT);
    let sprites = Sprites::load()?;
    let mut game = GameLoop::new(layout, sprites, StdRng::from_entropy(), SystemClock)?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(config::window::TITLE)
        .with_inner_size(dpi::LogicalSize::new(
            config::window::WIDTH as f64,
            config::window::HEIGHT as f64,
        ))
        .with_resizable(false)
        .build(&event_loop)?;

    let mut renderer = WindowRenderer::new(
        &window,
        config::window::WIDTH as u32,
        config::window::HEIGHT as u32,
    )?;
    let mut input_handler = InputHandler::new();

    let clock = SystemClock;
    let mut pacer = FramePacer::new(gameplay::FRAME_RATE, clock.now());
    let mut outcome = Ok(());

    event_loop.run(|event, eltw| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                if let Err(e) = renderer.resize(size.width, size.height) {
                    log::warn!("{:#}", e);
                }
            }
            WindowEvent::CloseRequested | WindowEvent::KeyboardInput { .. } => {
                input_handler.handle_window_event(&event);
            }
            _ => (),
        },
        Event::AboutToWait => {
            let now = clock.now();

            if pacer.is_due(now) {
                let commands = input_handler.drain();
                match game.tick(&commands, &mut renderer) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Exit) => eltw.exit(),
                    Err(e) => {
                        log::error!("{:#}", e);
                        outcome = Err(e);
                        eltw.exit();
                    }
                }
                pacer.frame_done(now);
            }

            eltw.set_control_flow(ControlFlow::WaitUntil(pacer.next_deadline()));
        }
        _ => (),
    })?;

    log::info!("Exiting at level {}", game.level());
    outcome
}
