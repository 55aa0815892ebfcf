//! Terminal frontend: framebuffer, renderer, and the device view

pub mod device_view;
pub mod fb;
pub mod renderer;

pub use device_view::{DeviceView, Viewport};
pub use fb::{FrameBuffer, Rgb, Style};
pub use renderer::TerminalRenderer;
