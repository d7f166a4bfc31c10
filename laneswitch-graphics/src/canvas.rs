use std::convert::Infallible;

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Point, Size},
    mono_font::{ascii::FONT_10X20, MonoTextStyle},
    pixelcolor::{Rgb888, RgbColor},
    primitives::Rectangle,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
    Drawable, Pixel,
};

use crate::{Color, Image, Rect, TextAnchor};

const BYTES_PER_PIXEL: usize = 4;

/// RGBA8 software framebuffer, row-major, alpha always opaque.
pub struct Canvas {
    width: u32,
    height: u32,
    frame: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let mut frame = vec![0; width as usize * height as usize * BYTES_PER_PIXEL];
        frame
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .for_each(|p| p[3] = u8::MAX);

        Self {
            width,
            height,
            frame,
        }
    }

    /// Raw RGBA8 bytes, ready to be copied into a presentation surface.
    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let offset = self.offset(x, y)?;
        let p = &self.frame[offset..offset + 3];
        Some(Rgb888::new(p[0], p[1], p[2]))
    }

    pub fn clear(&mut self, color: Color) {
        infallible(DrawTarget::clear(self, color));
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }

        let area = Rectangle::new(
            Point::new(rect.x, rect.y),
            Size::new(rect.w as u32, rect.h as u32),
        );
        infallible(self.fill_solid(&area, color));
    }

    /// Copies `image` with its top-left corner at `(x, y)`. Fully transparent pixels are
    /// skipped, partially transparent ones are blended over the current contents.
    pub fn draw_image(&mut self, image: &Image, x: i32, y: i32) {
        for (row, pixels) in image.rows().enumerate() {
            for (column, &[r, g, b, a]) in pixels.iter().enumerate() {
                if a == 0 {
                    continue;
                }

                let Some(offset) = self.offset(x + column as i32, y + row as i32) else {
                    continue;
                };

                let dst = &mut self.frame[offset..offset + 3];
                if a == u8::MAX {
                    dst.copy_from_slice(&[r, g, b]);
                } else {
                    for (d, s) in dst.iter_mut().zip([r, g, b]) {
                        *d = blend(*d, s, a);
                    }
                }
            }
        }
    }

    pub fn draw_text(&mut self, text: &str, color: Color, anchor: TextAnchor) {
        let character_style = MonoTextStyle::new(&FONT_10X20, color);

        let (position, alignment, baseline) = match anchor {
            TextAnchor::TopLeft(x, y) => (Point::new(x, y), Alignment::Left, Baseline::Top),
            TextAnchor::Center(x, y) => (Point::new(x, y), Alignment::Center, Baseline::Middle),
        };
        let text_style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(baseline)
            .build();

        infallible(Text::with_text_style(text, position, character_style, text_style).draw(self));
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(offset) = self.offset(point.x, point.y) {
                self.frame[offset..offset + 3].copy_from_slice(&[color.r(), color.g(), color.b()]);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };

        let rgb = [color.r(), color.g(), color.b()];
        for y in area.top_left.y..=bottom_right.y {
            for x in area.top_left.x..=bottom_right.x {
                if let Some(offset) = self.offset(x, y) {
                    self.frame[offset..offset + 3].copy_from_slice(&rgb);
                }
            }
        }
        Ok(())
    }
}

fn blend(dst: u8, src: u8, alpha: u8) -> u8 {
    let alpha = alpha as u16;
    ((src as u16 * alpha + dst as u16 * (255 - alpha)) / 255) as u8
}

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
