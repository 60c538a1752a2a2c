use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;
use std::str::FromStr;

use image::RgbImage;
use log::debug;
use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};

use crate::color::HexColor;
use crate::error::{EncodingError, EncodingResult};
use crate::linear::check_range;
use crate::render::{fill_rect, ImageBytes};

// Bounds
//------------------------------------------------------------------------------

pub const BOX_SIZE: RangeInclusive<u32> = 1..=20;
pub const BORDER: RangeInclusive<u32> = 0..=10;

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub enum ErrorCorrection {
    L,
    M,
    Q,
    H,
}

impl ErrorCorrection {
    pub const ALL: [ErrorCorrection; 4] = [Self::L, Self::M, Self::Q, Self::H];

    pub const fn letter(self) -> char {
        match self {
            Self::L => 'L',
            Self::M => 'M',
            Self::Q => 'Q',
            Self::H => 'H',
        }
    }

    /// Label shown next to the level, with its approximate recovery capacity.
    pub const fn label(self) -> &'static str {
        match self {
            Self::L => "Low (7%)",
            Self::M => "Medium (15%)",
            Self::Q => "Quartile (25%)",
            Self::H => "High (30%)",
        }
    }

    pub const fn ec_level(self) -> EcLevel {
        match self {
            Self::L => EcLevel::L,
            Self::M => EcLevel::M,
            Self::Q => EcLevel::Q,
            Self::H => EcLevel::H,
        }
    }
}

impl Display for ErrorCorrection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for ErrorCorrection {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" | "LOW" => Ok(Self::L),
            "M" | "MEDIUM" => Ok(Self::M),
            "Q" | "QUARTILE" => Ok(Self::Q),
            "H" | "HIGH" => Ok(Self::H),
            _ => Err(EncodingError::InvalidParameter(format!(
                "unknown error correction level {s:?}, expected L, M, Q or H"
            ))),
        }
    }
}

// Style
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixStyle {
    pub fill: String,
    pub background: String,
    pub box_size: u32,
    pub border: u32,
    pub error_correction: ErrorCorrection,
}

impl Default for MatrixStyle {
    fn default() -> Self {
        Self {
            fill: HexColor::BLACK.to_string(),
            background: HexColor::WHITE.to_string(),
            box_size: 10,
            border: 4,
            error_correction: ErrorCorrection::M,
        }
    }
}

// Request
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixEncodeRequest {
    pub content: String,
    pub style: MatrixStyle,
}

impl MatrixEncodeRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into(), style: MatrixStyle::default() }
    }

    pub fn style(&mut self, style: MatrixStyle) -> &mut Self {
        self.style = style;
        self
    }

    pub fn box_size(&mut self, px: u32) -> &mut Self {
        self.style.box_size = px;
        self
    }

    pub fn border(&mut self, modules: u32) -> &mut Self {
        self.style.border = modules;
        self
    }

    pub fn error_correction(&mut self, ecl: ErrorCorrection) -> &mut Self {
        self.style.error_correction = ecl;
        self
    }

    pub fn colors(&mut self, fill: &str, background: &str) -> &mut Self {
        self.style.fill = fill.to_string();
        self.style.background = background.to_string();
        self
    }

    pub fn encode(&self) -> EncodingResult<ImageBytes> {
        encode_matrix(self)
    }
}

// Adapter
//------------------------------------------------------------------------------

/// Encodes the content as a QR code in the smallest version that fits at the
/// requested error correction level and renders it as a PNG.
///
/// The image side is `(module_count + 2 * border) * box_size` pixels.
pub fn encode_matrix(req: &MatrixEncodeRequest) -> EncodingResult<ImageBytes> {
    let style = &req.style;
    debug!("Encoding QR at level {} for {} bytes", style.error_correction.label(), req.content.len());

    check_range("box size", style.box_size, &BOX_SIZE)?;
    check_range("border", style.border, &BORDER)?;
    let fill = HexColor::parse(&style.fill)?;
    let background = HexColor::parse(&style.background)?;

    let code = QrCode::with_error_correction_level(req.content.as_bytes(), style.error_correction.ec_level())
        .map_err(|e| match e {
            QrError::DataTooLong => EncodingError::DataTooLong(style.error_correction.letter()),
            e => EncodingError::Matrix(e),
        })?;
    debug!("Fitted QR version {:?} with {} modules per side", code.version(), code.width());

    let img = render_matrix(&code, style.box_size, style.border, fill, background);
    ImageBytes::encode(&img)
}

fn render_matrix(code: &QrCode, box_size: u32, border: u32, fill: HexColor, background: HexColor) -> RgbImage {
    let w = code.width() as u32;
    let total_sz = (w + 2 * border) * box_size;

    let mut canvas = RgbImage::from_pixel(total_sz, total_sz, background.to_rgb());
    let fill = fill.to_rgb();
    for (i, clr) in code.to_colors().into_iter().enumerate() {
        if clr == Color::Dark {
            let r = i as u32 / w;
            let c = i as u32 % w;
            fill_rect(&mut canvas, (c + border) * box_size, (r + border) * box_size, box_size, box_size, fill);
        }
    }
    canvas
}
