//! Interactive glider: steer with the mouse, Space shows the force vectors.
//!
//! The glider stays at the center of the window while the cloud layer
//! scrolls past. Every frame samples the latest pointer position and
//! advances the flight model by one fixed step.

mod render;

use anyhow::{Context, Result};
use clap::Parser;
use glider::{Config, FlightState, Simulation, Sky, Target, Vector};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::render::Canvas;
use sdl2::ttf::Font;
use sdl2::video::Window;
use std::thread;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Window title displayed in the title bar
const TITLE: &str = "Glider";

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Renders one frame of the current state.
fn draw_frame(
    canvas: &mut Canvas<Window>,
    sky: &Sky,
    font: Option<&Font>,
    center: Vector,
    state: &FlightState,
) -> Result<()> {
    canvas.set_draw_color(render::SKY);
    canvas.clear();

    render::draw_sky(canvas, sky, state.position).map_err(anyhow::Error::msg)?;
    render::draw_glider(canvas, center, state.direction).map_err(anyhow::Error::msg)?;
    if state.debug {
        render::draw_debug_vectors(canvas, center, state).map_err(anyhow::Error::msg)?;
    }
    if let Some(font) = font {
        render::draw_readout(canvas, font, state).map_err(anyhow::Error::msg)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(&config);
    config.validate()?;

    let sdl_context = sdl2::init().map_err(anyhow::Error::msg).context("initializing SDL")?;
    let video_subsystem = sdl_context.video().map_err(anyhow::Error::msg)?;
    let ttf_context = sdl2::ttf::init()
        .map_err(anyhow::Error::msg)
        .context("initializing SDL_ttf")?;

    let window = video_subsystem
        .window(TITLE, config.width, config.height)
        .position_centered()
        .resizable()
        .build()
        .context("creating window")?;
    let font = match &config.font {
        Some(path) => Some(
            ttf_context
                .load_font(path, config.font_size)
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("loading font {}", path.display()))?,
        ),
        None => None,
    };
    let mut canvas = window.into_canvas().build().context("creating canvas")?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sky = Sky::generate(&mut rng, config.clouds, config.width as f64, config.height as f64);
    info!(seed, clouds = config.clouds, "sky generated");

    let initial = FlightState { debug: config.debug, ..FlightState::initial() };
    let mut simulation = Simulation::new(initial);
    let input = simulation.sender();
    // No frames are simulated until the pointer has been seen once.
    let mut pointer: Option<Vector> = None;

    let frame_period = config.frame_period();
    let mut event_pump = sdl_context.event_pump().map_err(anyhow::Error::msg)?;
    info!(width = config.width, height = config.height, fps = config.fps, "running");

    'running: loop {
        let frame_start = Instant::now();
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } | Event::KeyDown { keycode: Some(Keycode::Escape), .. } => {
                    break 'running;
                }
                Event::KeyDown { keycode: Some(Keycode::Space), .. } => input.toggle_debug()?,
                Event::MouseMotion { x, y, .. } => {
                    pointer = Some(Vector::new(x as f64, y as f64));
                }
                Event::Window { win_event: WindowEvent::SizeChanged(width, height), .. } => {
                    debug!(width, height, "window resized");
                    sky = Sky::generate(&mut rng, config.clouds, width.max(1) as f64, height.max(1) as f64);
                }
                _ => {}
            }
        }

        let (width, height) = canvas.output_size().map_err(anyhow::Error::msg)?;
        let center = Vector::new(width as f64 / 2.0, height as f64 / 2.0);
        if let Some(point) = pointer {
            input.frame(Target::new(point, center))?;
        }
        simulation.pump();

        draw_frame(&mut canvas, &sky, font.as_ref(), center, simulation.state())?;
        canvas.present();

        if let Some(rest) = frame_period.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    info!(frames = simulation.frames(), "exiting");
    Ok(())
}
