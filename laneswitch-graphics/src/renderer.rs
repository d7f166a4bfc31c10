use anyhow::Result;

use crate::{Color, Image, Rect};

/// Where a line of text is placed relative to the given point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft(i32, i32),
    Center(i32, i32),
}

/// Pixel output used by the game. Drawing calls only touch the back buffer,
/// nothing reaches the screen until `present`.
pub trait Renderer {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws `image` with its top-left corner at `(x, y)`.
    fn draw_image(&mut self, image: &Image, x: i32, y: i32);

    fn draw_text(&mut self, text: &str, color: Color, anchor: TextAnchor);

    fn present(&mut self) -> Result<()>;
}
