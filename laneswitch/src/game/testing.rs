use anyhow::Result;

use laneswitch_graphics::{Color, Image, Rect, Renderer, TextAnchor};

/// Renderer that remembers what it was asked to draw.
#[derive(Default)]
pub(crate) struct RecordingRenderer {
    pub(crate) rects: Vec<(Rect, Color)>,
    pub(crate) images: Vec<(i32, i32)>,
    pub(crate) texts: Vec<(String, TextAnchor)>,
    pub(crate) presents: usize,
}

impl RecordingRenderer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn drew_text(&self, needle: &str) -> bool {
        self.texts.iter().any(|(text, _)| text.contains(needle))
    }
}

impl Renderer for RecordingRenderer {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.rects.push((rect, color));
    }

    fn draw_image(&mut self, _image: &Image, x: i32, y: i32) {
        self.images.push((x, y));
    }

    fn draw_text(&mut self, text: &str, _color: Color, anchor: TextAnchor) {
        self.texts.push((text.to_string(), anchor));
    }

    fn present(&mut self) -> Result<()> {
        self.presents += 1;
        Ok(())
    }
}
