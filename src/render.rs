use std::io::Cursor;
use std::ops::Deref;

use ab_glyph::{FontRef, PxScale};
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use crate::error::EncodingResult;

// Image bytes
//------------------------------------------------------------------------------

/// A PNG encoded raster, ready to be previewed or written out as a download.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageBytes(Vec<u8>);

impl ImageBytes {
    pub const MIME: &'static str = "image/png";

    pub fn encode(img: &RgbImage) -> EncodingResult<Self> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png)?;
        Ok(Self(buf.into_inner()))
    }
}

impl Deref for ImageBytes {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for ImageBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// Units
//------------------------------------------------------------------------------

pub const DPI: f32 = 300.0;

pub fn mm_to_px(mm: f32) -> u32 {
    ((mm * DPI / 25.4).round() as u32).max(1)
}

pub fn pt_to_px(pt: f32) -> u32 {
    ((pt * DPI / 72.0).round() as u32).max(1)
}

// Painting
//------------------------------------------------------------------------------

pub fn fill_rect(canvas: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    if w == 0 || h == 0 {
        return;
    }
    draw_filled_rect_mut(canvas, Rect::at(x as i32, y as i32).of_size(w, h), color);
}

static FONT_DATA: &[u8] = include_bytes!("../assets/fonts/DejaVuSansMono.ttf");

pub fn load_font() -> EncodingResult<FontRef<'static>> {
    Ok(FontRef::try_from_slice(FONT_DATA)?)
}

/// Width and height in pixels of `text` at `px` pixel height.
pub fn measure_text(font: &FontRef, px: u32, text: &str) -> (u32, u32) {
    text_size(PxScale::from(px as f32), font, text)
}

/// Draws `text` horizontally centered on the canvas with its top edge at `y`.
pub fn draw_centered_text(canvas: &mut RgbImage, font: &FontRef, px: u32, y: u32, text: &str, color: Rgb<u8>) {
    let (w, _) = measure_text(font, px, text);
    let x = (canvas.width() as i32 - w as i32) / 2;
    draw_text_mut(canvas, color, x, y as i32, PxScale::from(px as f32), font, text);
}
