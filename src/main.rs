//! Interactive device simulator (default binary).
//!
//! Keyboard keys stand in for the four physical buttons; the terminal shows
//! the strip and the LCD. The game logic runs exactly as it would on the
//! device. Logs go to stderr, so `RUST_LOG=debug color-match 2>game.log`
//! keeps them out of the screen.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use color_match::config::GameConfig;
use color_match::core::Phase;
use color_match::fsm::StateMachine;
use color_match::game::{build_machine, GameController};
use color_match::hw::{LightStrip, VirtualDisplay, VirtualStrip};
use color_match::input::{handle_key_event, should_quit};
use color_match::term::{DeviceView, TerminalRenderer, Viewport};
use color_match::types::ButtonId;

/// Period of the state machine's `do` tick
const TICK: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    init_tracing();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "colormatch.toml".to_string());
    let config =
        GameConfig::load(Path::new(&config_path)).with_context(|| format!("loading {config_path}"))?;

    let seed = config.game.seed.unwrap_or_else(clock_seed);
    tracing::info!(seed, pixels = config.device.pixels, "device starting");

    let mut strip = VirtualStrip::new(config.device.pixels);
    strip.set_brightness(config.device.brightness);
    let mut controller = GameController::new(strip, VirtualDisplay::new(), config.game.lives, seed);
    let mut machine = build_machine();
    machine.start(&mut controller);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut machine, &mut controller);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    machine: &mut StateMachine<Phase, ButtonId>,
    controller: &mut GameController<VirtualStrip, VirtualDisplay>,
) -> Result<()> {
    let view = DeviceView::default();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(controller.strip(), controller.display(), Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = TICK
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(button) = handle_key_event(key) {
                        machine.dispatch(button, controller);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= TICK {
            last_tick = Instant::now();
            machine.tick(controller);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}

fn clock_seed() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
