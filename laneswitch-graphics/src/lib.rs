pub mod canvas;
pub mod image;
pub mod rect;
pub mod renderer;

pub use canvas::Canvas;
pub use image::Image;
pub use rect::Rect;
pub use renderer::{Renderer, TextAnchor};

/// 24-bit RGB color used by every drawing call.
pub type Color = embedded_graphics::pixelcolor::Rgb888;
