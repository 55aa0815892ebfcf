//! DeviceView: draws the virtual device into a terminal framebuffer
//!
//! Pure (no I/O), so it can be unit-tested. The strip appears as a row of
//! colored blocks, the LCD as a bordered panel below it.

use crate::hw::{VirtualDisplay, VirtualStrip};
use crate::term::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Color, DISPLAY_COLS, DISPLAY_LINES};

/// Terminal viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the strip, the LCD, and the key legend
pub struct DeviceView {
    /// Terminal columns per LED
    led_w: u16,
}

impl Default for DeviceView {
    fn default() -> Self {
        // Two columns per LED reads roughly square in most terminals.
        Self { led_w: 2 }
    }
}

impl DeviceView {
    pub fn new(led_w: u16) -> Self {
        Self { led_w: led_w.max(1) }
    }

    /// Render the device into a framebuffer
    pub fn render(
        &self,
        strip: &VirtualStrip,
        display: &VirtualDisplay,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Style::default());

        let strip_w = (strip.pixels().len() as u16) * self.led_w + 2;
        let lcd_w = DISPLAY_COLS as u16 + 2;
        let lcd_h = DISPLAY_LINES as u16 + 2;

        // Strip box, gap, LCD box, gap, legend.
        let total_h = 3 + 1 + lcd_h + 1 + 1;
        let top = viewport.height.saturating_sub(total_h) / 2;

        let border = Style {
            fg: Rgb::new(200, 200, 200),
            ..Style::default()
        };

        // LED strip.
        let strip_x = viewport.width.saturating_sub(strip_w) / 2;
        draw_border(&mut fb, strip_x, top, strip_w, 3, border);
        for (i, &color) in strip.pixels().iter().enumerate() {
            let (ch, style) = led_style(color, strip.brightness());
            let px = strip_x + 1 + (i as u16) * self.led_w;
            fb.fill_rect(px, top + 1, self.led_w, 1, ch, style);
        }

        // LCD panel.
        let lcd_x = viewport.width.saturating_sub(lcd_w) / 2;
        let lcd_y = top + 4;
        draw_border(&mut fb, lcd_x, lcd_y, lcd_w, lcd_h, border);
        let lcd = Style {
            fg: Rgb::new(20, 30, 10),
            bg: Rgb::new(130, 170, 70),
            bold: true,
        };
        for line in 0..DISPLAY_LINES {
            fb.put_str(
                lcd_x + 1,
                lcd_y + 1 + line as u16,
                &display.row_text(line),
                lcd,
            );
        }

        // Legend.
        let legend = "R/B/Y/W or 1-4: buttons   Q: quit";
        let legend_x = viewport
            .width
            .saturating_sub(legend.chars().count() as u16)
            / 2;
        let dim = Style {
            fg: Rgb::new(120, 120, 130),
            ..Style::default()
        };
        fb.put_str(legend_x, lcd_y + lcd_h + 1, legend, dim);

        fb
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn led_style(color: Color, brightness: f32) -> (char, Style) {
    if color.is_empty() {
        let style = Style {
            fg: Rgb::new(70, 70, 80),
            ..Style::default()
        };
        return ('·', style);
    }

    let (r, g, b) = color.rgb();
    let scale = |v: u8| (v as f32 * brightness.clamp(0.0, 1.0)) as u8;
    let style = Style {
        fg: Rgb::new(scale(r), scale(g), scale(b)),
        bold: true,
        ..Style::default()
    };
    ('█', style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw::LightStrip;

    // 16 LEDs at 2 columns each: strip frame is 34 wide. In a 40x12
    // viewport it sits at x=3, y=1; the LCD frame at x=11, y=5.
    fn render_default() -> (FrameBuffer, VirtualStrip, VirtualDisplay) {
        let strip = VirtualStrip::new(16);
        let display = VirtualDisplay::new();
        let fb = DeviceView::default().render(&strip, &display, Viewport::new(40, 12));
        (fb, strip, display)
    }

    #[test]
    fn test_strip_frame_corners() {
        let (fb, _, _) = render_default();
        assert_eq!(fb.get(3, 1).unwrap().ch, '┌');
        assert_eq!(fb.get(36, 1).unwrap().ch, '┐');
        assert_eq!(fb.get(3, 3).unwrap().ch, '└');
        assert_eq!(fb.get(36, 3).unwrap().ch, '┘');
    }

    #[test]
    fn test_empty_pixels_render_as_dots() {
        let (fb, _, _) = render_default();
        assert_eq!(fb.get(4, 2).unwrap().ch, '·');
        assert_eq!(fb.get(5, 2).unwrap().ch, '·');
    }

    #[test]
    fn test_lit_pixel_renders_as_block_with_color() {
        let mut strip = VirtualStrip::new(16);
        strip.set_brightness(1.0);
        strip.set_pixel(0, Color::Red, false);
        let display = VirtualDisplay::new();
        let fb = DeviceView::default().render(&strip, &display, Viewport::new(40, 12));

        let cell = fb.get(4, 2).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_brightness_scales_led_color() {
        let mut strip = VirtualStrip::new(16);
        strip.set_brightness(0.5);
        strip.set_pixel(0, Color::White, false);
        let display = VirtualDisplay::new();
        let fb = DeviceView::default().render(&strip, &display, Viewport::new(40, 12));

        assert_eq!(fb.get(4, 2).unwrap().style.fg, Rgb::new(127, 127, 127));
    }

    #[test]
    fn test_lcd_shows_display_text() {
        let strip = VirtualStrip::new(16);
        let mut display = VirtualDisplay::new();
        use crate::hw::TextDisplay;
        display.show_text(0, 0, "Score: 20");
        let fb = DeviceView::default().render(&strip, &display, Viewport::new(40, 12));

        let text: String = (0..9).map(|i| fb.get(12 + i, 6).unwrap().ch).collect();
        assert_eq!(text, "Score: 20");
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let strip = VirtualStrip::new(16);
        let display = VirtualDisplay::new();
        let fb = DeviceView::default().render(&strip, &display, Viewport::new(5, 2));
        assert_eq!(fb.width(), 5);
    }
}
