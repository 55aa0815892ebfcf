//! Hardware capability seams
//!
//! The controller drives the device through these narrow traits. Real
//! drivers (neopixel, I2C LCD) and the virtual devices both sit behind them.

use crate::types::Color;

pub mod virt;

pub use virt::{VirtualDisplay, VirtualStrip};

/// An addressable strip of RGB pixels
pub trait LightStrip {
    /// Number of pixels on the strip
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stage `color` at `index`; flush immediately when `auto_flush` is set
    fn set_pixel(&mut self, index: usize, color: Color, auto_flush: bool);

    /// Push staged pixel state out to the LEDs
    fn show(&mut self);

    /// Blank the whole strip (takes effect immediately)
    fn off(&mut self);

    /// Output brightness in `0.0..=1.0`
    fn set_brightness(&mut self, level: f32);
}

/// A small fixed-width character display
pub trait TextDisplay {
    /// Write `text` on `line` starting at `column`, clipped to the panel
    fn show_text(&mut self, line: usize, column: usize, text: &str);

    /// Clear the panel
    fn reset(&mut self);
}
