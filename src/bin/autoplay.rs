//! Headless exerciser: plays a seeded pseudo-random button sequence through
//! the full machine/controller stack and prints the outcome.
//!
//! Usage: `autoplay [presses] [seed]`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use color_match::core::Phase;
use color_match::core::SimpleRng;
use color_match::game::{build_machine, GameController};
use color_match::hw::{VirtualDisplay, VirtualStrip};
use color_match::types::{ButtonId, DEFAULT_LIVES, DEFAULT_PIXELS};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = std::env::args().skip(1);
    let presses: u32 = args
        .next()
        .map(|s| s.parse::<u32>())
        .transpose()?
        .unwrap_or(200);
    let seed: u32 = args
        .next()
        .map(|s| s.parse::<u32>())
        .transpose()?
        .unwrap_or(0x00C0_FFEE);

    let strip = VirtualStrip::new(DEFAULT_PIXELS);
    let mut controller = GameController::new(strip, VirtualDisplay::new(), DEFAULT_LIVES, seed);
    let mut machine = build_machine();
    machine.start(&mut controller);

    // Independent press stream so button choice does not track the refills.
    let mut presser = SimpleRng::new(seed ^ 0x9E37_79B9);
    let mut games = 0u32;
    let mut best = 0u32;

    for _ in 0..presses {
        let button = presser.choose(&ButtonId::ALL);
        let was_running = machine.current() == Phase::Running;
        let score_before = controller.score();

        machine.dispatch(button, &mut controller);

        // A Running -> Start hop is a finished game; the depleting miss
        // never changes the score, so the pre-dispatch score is final.
        if was_running && machine.current() == Phase::Start {
            games += 1;
            best = best.max(score_before);
        }
    }

    println!(
        "{presses} presses, {games} games finished, best score {best}, ending in {:?}",
        machine.current()
    );
    Ok(())
}
