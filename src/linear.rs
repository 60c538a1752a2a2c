use std::ops::RangeInclusive;

use image::RgbImage;
use log::debug;

use crate::color::HexColor;
use crate::error::{EncodingError, EncodingResult};
use crate::render::{draw_centered_text, fill_rect, load_font, mm_to_px, pt_to_px, ImageBytes};
use crate::symbology::{Encoded, Symbology};

// Bounds
//------------------------------------------------------------------------------

pub const BAR_WIDTH_MM: RangeInclusive<f32> = 0.1..=1.0;
pub const BAR_HEIGHT_MM: RangeInclusive<f32> = 5.0..=30.0;
pub const FONT_SIZE: RangeInclusive<u32> = 5..=20;
pub const QUIET_ZONE_MM: RangeInclusive<f32> = 1.0..=10.0;

const TEXT_DISTANCE_MM: f32 = 5.0;
const MARGIN_MM: f32 = 1.0;

// Style
//------------------------------------------------------------------------------

/// Appearance of a linear barcode. Lengths are in millimetres and converted to
/// pixels at [`DPI`](crate::render::DPI), the font size is in points.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearStyle {
    pub bar_width_mm: f32,
    pub bar_height_mm: f32,
    pub font_size: u32,
    pub quiet_zone_mm: f32,
    pub text_distance_mm: f32,
    pub show_text: bool,
    pub foreground: String,
    pub background: String,
}

impl Default for LinearStyle {
    fn default() -> Self {
        Self {
            bar_width_mm: 0.2,
            bar_height_mm: 15.0,
            font_size: 10,
            quiet_zone_mm: 6.5,
            text_distance_mm: TEXT_DISTANCE_MM,
            show_text: true,
            foreground: HexColor::BLACK.to_string(),
            background: HexColor::WHITE.to_string(),
        }
    }
}

impl LinearStyle {
    fn check(&self) -> EncodingResult<()> {
        check_range("bar width", self.bar_width_mm, &BAR_WIDTH_MM)?;
        check_range("bar height", self.bar_height_mm, &BAR_HEIGHT_MM)?;
        check_range("font size", self.font_size, &FONT_SIZE)?;
        check_range("quiet zone", self.quiet_zone_mm, &QUIET_ZONE_MM)?;
        if !(self.text_distance_mm >= 0.0) {
            return Err(EncodingError::InvalidParameter(format!(
                "text distance {} must be non-negative",
                self.text_distance_mm
            )));
        }
        Ok(())
    }
}

pub(crate) fn check_range<T>(name: &str, value: T, range: &RangeInclusive<T>) -> EncodingResult<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(EncodingError::InvalidParameter(format!(
            "{name} {value} is outside {}..={}",
            range.start(),
            range.end()
        )))
    }
}

// Request
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct LinearEncodeRequest {
    pub content: String,
    pub symbology: Symbology,
    pub style: LinearStyle,
}

impl LinearEncodeRequest {
    pub fn new(content: impl Into<String>, symbology: Symbology) -> Self {
        Self { content: content.into(), symbology, style: LinearStyle::default() }
    }

    pub fn style(&mut self, style: LinearStyle) -> &mut Self {
        self.style = style;
        self
    }

    pub fn bar_width(&mut self, mm: f32) -> &mut Self {
        self.style.bar_width_mm = mm;
        self
    }

    pub fn bar_height(&mut self, mm: f32) -> &mut Self {
        self.style.bar_height_mm = mm;
        self
    }

    pub fn font_size(&mut self, pt: u32) -> &mut Self {
        self.style.font_size = pt;
        self
    }

    pub fn quiet_zone(&mut self, mm: f32) -> &mut Self {
        self.style.quiet_zone_mm = mm;
        self
    }

    pub fn show_text(&mut self, show: bool) -> &mut Self {
        self.style.show_text = show;
        self
    }

    pub fn colors(&mut self, foreground: &str, background: &str) -> &mut Self {
        self.style.foreground = foreground.to_string();
        self.style.background = background.to_string();
        self
    }

    pub fn encode(&self) -> EncodingResult<ImageBytes> {
        encode_linear(self)
    }
}

// Adapter
//------------------------------------------------------------------------------

/// Encodes the request with its symbology and renders the result as a PNG.
///
/// Every failure, whether from the symbology rules or from rendering, comes back
/// as an [`EncodingError`]; nothing panics on bad input.
pub fn encode_linear(req: &LinearEncodeRequest) -> EncodingResult<ImageBytes> {
    debug!("Encoding {} barcode for {:?}", req.symbology, req.content);

    req.style.check()?;
    let encoded = req.symbology.encode(&req.content)?;
    debug!("Encoded {} modules, text {:?}", encoded.width(), encoded.text);

    let img = render_linear(&encoded, &req.style)?;
    debug!("Rendered {}x{} image", img.width(), img.height());

    ImageBytes::encode(&img)
}

pub(crate) struct LinearLayout {
    pub module_px: u32,
    pub quiet_px: u32,
    pub margin_px: u32,
    pub bar_px: u32,
    pub text_gap_px: u32,
    pub font_px: u32,
}

impl LinearLayout {
    pub fn new(style: &LinearStyle) -> Self {
        let (text_gap_px, font_px) = if style.show_text {
            (mm_to_px(style.text_distance_mm) / 2, pt_to_px(style.font_size as f32))
        } else {
            (0, 0)
        };
        Self {
            module_px: mm_to_px(style.bar_width_mm),
            quiet_px: mm_to_px(style.quiet_zone_mm),
            margin_px: mm_to_px(MARGIN_MM),
            bar_px: mm_to_px(style.bar_height_mm),
            text_gap_px,
            font_px,
        }
    }

    pub fn dimensions(&self, modules: usize) -> (u32, u32) {
        let w = 2 * self.quiet_px + modules as u32 * self.module_px;
        let h = 2 * self.margin_px + self.bar_px + self.text_gap_px + self.font_px;
        (w, h)
    }
}

fn render_linear(encoded: &Encoded, style: &LinearStyle) -> EncodingResult<RgbImage> {
    let fg = HexColor::parse(&style.foreground)?.to_rgb();
    let bg = HexColor::parse(&style.background)?.to_rgb();

    let layout = LinearLayout::new(style);
    let (w, h) = layout.dimensions(encoded.width());
    let mut canvas = RgbImage::from_pixel(w, h, bg);

    // Paint each run of adjacent bars as one rectangle
    let mut i = 0;
    while i < encoded.modules.len() {
        if !encoded.modules[i] {
            i += 1;
            continue;
        }
        let run = encoded.modules[i..].iter().take_while(|&&m| m).count();
        let x = layout.quiet_px + i as u32 * layout.module_px;
        fill_rect(&mut canvas, x, layout.margin_px, run as u32 * layout.module_px, layout.bar_px, fg);
        i += run;
    }

    if style.show_text && !encoded.text.is_empty() {
        let font = load_font()?;
        let y = layout.margin_px + layout.bar_px + layout.text_gap_px;
        draw_centered_text(&mut canvas, &font, layout.font_px, y, &encoded.text, fg);
    }

    Ok(canvas)
}
