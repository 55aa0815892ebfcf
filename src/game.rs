//! Game controller - ties board, session state, and the device together
//!
//! The controller is the single entry point for game behavior: the state
//! machine calls back into it on entry/exit and hands it button events while
//! the game is running. Nothing else mutates the board or the session.

use tracing::{debug, info};

use crate::core::{Board, GameState, MissOutcome, Phase, SimpleRng};
use crate::fsm::{StateHooks, StateMachine};
use crate::hw::{LightStrip, TextDisplay};
use crate::input;
use crate::types::{ButtonId, Color};

/// Build the two-state machine: any button leaves the title screen; the jump
/// back to Start comes from the controller itself on depletion.
pub fn build_machine() -> StateMachine<Phase, ButtonId> {
    let mut machine = StateMachine::new(Phase::Start);
    machine.add_transition(Phase::Start, &ButtonId::ALL, Phase::Running);
    machine
}

/// Orchestrates one device: owns the board, the session bookkeeping, the
/// refill RNG, and the strip/display collaborators.
pub struct GameController<S: LightStrip, D: TextDisplay> {
    board: Board,
    state: GameState,
    rng: SimpleRng,
    strip: S,
    display: D,
}

impl<S: LightStrip, D: TextDisplay> GameController<S, D> {
    /// Wire a controller to its devices. The board takes its length from the
    /// strip; `lives` and `seed` come from configuration.
    pub fn new(strip: S, display: D, lives: u8, seed: u32) -> Self {
        Self {
            board: Board::new(strip.len()),
            state: GameState::new(lives),
            rng: SimpleRng::new(seed),
            strip,
            display,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    pub fn lives(&self) -> u8 {
        self.state.lives()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn strip(&self) -> &S {
        &self.strip
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    #[cfg(test)]
    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Handle a button press while the game is running. Returns the state
    /// the machine should jump to, if any.
    fn on_button(&mut self, button: ButtonId) -> Option<Phase> {
        let color = input::button_color(button);
        debug!(button = button.as_str(), color = color.as_str(), "button press");
        self.process_move(color)
    }

    /// One move: scan for a run of `color`, then either clear-and-refill or
    /// burn a life. The status display is refreshed either way.
    fn process_move(&mut self, color: Color) -> Option<Phase> {
        let jump = match self.board.find_match(color) {
            Some(run) => {
                let points = self.state.apply_match(run.len());
                self.board.clear(&run);
                self.board.refill(&mut self.rng);
                self.sync_strip();
                info!(
                    points,
                    score = self.state.score(),
                    run_len = run.len(),
                    "match cleared"
                );
                None
            }
            None => {
                let outcome = self.state.apply_miss();
                info!(lives = self.state.lives(), "miss");
                match outcome {
                    MissOutcome::Depleted => Some(Phase::Start),
                    MissOutcome::Playing => None,
                }
            }
        };
        self.show_status();
        jump
    }

    /// Mirror the board onto the strip, then flush once
    fn sync_strip(&mut self) {
        for (i, &color) in self.board.cells().iter().enumerate() {
            self.strip.set_pixel(i, color, false);
        }
        self.strip.show();
    }

    fn show_status(&mut self) {
        self.display.show_text(0, 0, &format!("Score: {}", self.state.score()));
        self.display.show_text(1, 0, &format!("Lives: {}", self.state.lives()));
    }

    fn show_title(&mut self) {
        self.display.reset();
        self.display.show_text(0, 3, "Color Match");
        self.display.show_text(1, 0, "Press any key");
    }

    fn show_game_over(&mut self) {
        self.display.reset();
        self.display.show_text(0, 3, "Game Over");
        self.display.show_text(1, 3, &format!("Score: {}", self.state.score()));
    }
}

impl<S: LightStrip, D: TextDisplay> StateHooks for GameController<S, D> {
    type State = Phase;
    type Event = ButtonId;

    fn state_entered(&mut self, state: Phase, cause: Option<ButtonId>) {
        info!(?state, ?cause, "entered state");
        match state {
            Phase::Start => {
                self.state.reset();
                self.strip.off();
                self.show_title();
            }
            Phase::Running => {
                self.state.begin_run();
                self.board.reset();
                self.board.refill(&mut self.rng);
                self.sync_strip();
                self.display.reset();
                self.show_status();
            }
        }
    }

    fn state_left(&mut self, state: Phase, cause: Option<ButtonId>) {
        info!(?state, ?cause, "left state");
        if state == Phase::Running {
            self.strip.off();
            self.show_game_over();
            info!(score = self.state.score(), "game over");
        }
    }

    // state_do: the game has no periodic work, so the default no-op stands.

    fn handle_event(&mut self, state: Phase, event: ButtonId) -> Option<Phase> {
        match state {
            Phase::Running => self.on_button(event),
            // Title-screen buttons are table transitions; anything reaching
            // here is ignored.
            Phase::Start => None,
        }
    }
}
