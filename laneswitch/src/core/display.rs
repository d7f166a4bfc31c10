use anyhow::{Context, Result};
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use laneswitch_graphics::{Canvas, Color, Image, Rect, Renderer, TextAnchor};

/// Draws into a software canvas and pushes it to the window on `present`.
pub struct WindowRenderer {
    canvas: Canvas,
    pixels: Pixels,
}

impl WindowRenderer {
    pub fn new(window: &Window, width: u32, height: u32) -> Result<Self> {
        let window_size = window.inner_size();
        let surface = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(width, height, surface).context("creating pixel surface")?;

        Ok(Self {
            canvas: Canvas::new(width, height),
            pixels,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels
            .resize_surface(width, height)
            .context("resizing pixel surface")?;
        Ok(())
    }
}

impl Renderer for WindowRenderer {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.canvas.fill_rect(rect, color);
    }

    fn draw_image(&mut self, image: &Image, x: i32, y: i32) {
        self.canvas.draw_image(image, x, y);
    }

    fn draw_text(&mut self, text: &str, color: Color, anchor: TextAnchor) {
        self.canvas.draw_text(text, color, anchor);
    }

    fn present(&mut self) -> Result<()> {
        self.pixels.frame_mut().copy_from_slice(self.canvas.frame());
        self.pixels.render().context("presenting frame")?;
        Ok(())
    }
}
