//! Color Match: a matching game for an LED-strip device, with a terminal
//! simulator standing in for the hardware.
//!
//! `core` holds the pure game rules; `fsm` the state machine driver; `game`
//! the controller tying them to the device; `hw` the hardware capability
//! traits and virtual devices; `term` the terminal frontend.

pub mod config;
pub mod core;
pub mod fsm;
pub mod game;
pub mod hw;
pub mod input;
pub mod term;
pub mod types;
