//! In-memory device doubles
//!
//! `VirtualStrip` and `VirtualDisplay` record everything the controller does
//! to them. The terminal frontend renders them; tests read them back.

use crate::hw::{LightStrip, TextDisplay};
use crate::types::{Color, DISPLAY_COLS, DISPLAY_LINES};

/// LED strip model: pixel colors, brightness, and a flush counter
#[derive(Debug, Clone)]
pub struct VirtualStrip {
    pixels: Vec<Color>,
    brightness: f32,
    flushes: u64,
}

impl VirtualStrip {
    pub fn new(len: usize) -> Self {
        Self {
            pixels: vec![Color::Empty; len],
            brightness: 1.0,
            flushes: 0,
        }
    }

    /// Current pixel colors in strip order
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Number of flushes (`show` or `off`) so far
    pub fn flushes(&self) -> u64 {
        self.flushes
    }
}

impl LightStrip for VirtualStrip {
    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel(&mut self, index: usize, color: Color, auto_flush: bool) {
        if let Some(px) = self.pixels.get_mut(index) {
            *px = color;
        }
        if auto_flush {
            self.show();
        }
    }

    fn show(&mut self) {
        self.flushes += 1;
    }

    fn off(&mut self) {
        self.pixels.fill(Color::Empty);
        self.flushes += 1;
    }

    fn set_brightness(&mut self, level: f32) {
        self.brightness = level.clamp(0.0, 1.0);
    }
}

/// LCD model: the visible character matrix plus a log of every write
#[derive(Debug, Clone)]
pub struct VirtualDisplay {
    lines: Vec<Vec<char>>,
    writes: Vec<String>,
}

impl VirtualDisplay {
    pub fn new() -> Self {
        Self {
            lines: vec![vec![' '; DISPLAY_COLS]; DISPLAY_LINES],
            writes: Vec::new(),
        }
    }

    /// Visible text of `line`, right-trimmed
    pub fn line(&self, line: usize) -> String {
        self.lines
            .get(line)
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    /// Full-width text of `line`, padding included
    pub fn row_text(&self, line: usize) -> String {
        self.lines
            .get(line)
            .map(|row| row.iter().collect())
            .unwrap_or_default()
    }

    /// Every string ever written, oldest first. Survives `reset`.
    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl Default for VirtualDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDisplay for VirtualDisplay {
    fn show_text(&mut self, line: usize, column: usize, text: &str) {
        self.writes.push(text.to_string());
        let Some(row) = self.lines.get_mut(line) else {
            return;
        };
        for (i, ch) in text.chars().enumerate() {
            let col = column + i;
            if col >= DISPLAY_COLS {
                break;
            }
            row[col] = ch;
        }
    }

    fn reset(&mut self) {
        for row in &mut self.lines {
            row.fill(' ');
        }
    }
}
