use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::Color;

/// Decoded RGBA8 sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Image {
    /// Loads a PNG from disk. Any decoding failure is reported with the path attached.
    pub fn load_png<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("opening image {}", path.display()))?;
        let image = Self::decode_png(BufReader::new(file))
            .with_context(|| format!("decoding image {}", path.display()))?;

        log::debug!(
            "Loaded {} ({}x{})",
            path.display(),
            image.width,
            image.height
        );

        Ok(image)
    }

    pub fn decode_png<R: Read>(reader: R) -> Result<Self> {
        use png::ColorType::*;

        let mut decoder = png::Decoder::new(reader);
        decoder.set_transformations(png::Transformations::normalize_to_color8());
        let mut reader = decoder.read_info()?;

        let mut buffer = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buffer)?;
        let bytes = &buffer[..info.buffer_size()];

        let pixels = match info.color_type {
            Rgba => bytes
                .chunks_exact(4)
                .map(|p| [p[0], p[1], p[2], p[3]])
                .collect(),
            Rgb => bytes
                .chunks_exact(3)
                .map(|p| [p[0], p[1], p[2], u8::MAX])
                .collect(),
            GrayscaleAlpha => bytes
                .chunks_exact(2)
                .map(|p| [p[0], p[0], p[0], p[1]])
                .collect(),
            Grayscale => bytes.iter().map(|&g| [g, g, g, u8::MAX]).collect(),
            Indexed => return Err(anyhow!("Palette was not expanded while decoding")),
        };

        Ok(Self {
            width: info.width,
            height: info.height,
            pixels,
        })
    }

    /// Fully opaque single-color image.
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        use embedded_graphics::pixelcolor::RgbColor;

        Self {
            width,
            height,
            pixels: vec![[color.r(), color.g(), color.b(), u8::MAX]; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA value at `(x, y)`, `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    pub(crate) fn rows(&self) -> std::slice::ChunksExact<'_, [u8; 4]> {
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }
}
