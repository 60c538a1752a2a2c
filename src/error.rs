use thiserror::Error;

// Error
//------------------------------------------------------------------------------

/// Failure raised while turning a request into an image.
///
/// The `Display` text is what the presentation layer shows to the user, so every
/// message is written to stand on its own.
#[derive(Debug, Error)]
pub enum EncodingError {
    // Rejected input
    #[error("{symbology} requires {expected}, got {actual} characters")]
    InvalidLength { symbology: &'static str, expected: &'static str, actual: usize },
    #[error("character {ch:?} is not allowed in {symbology}")]
    InvalidCharacter { symbology: &'static str, ch: char },
    #[error("invalid check digit for {symbology}: expected {expected}, found {found}")]
    InvalidChecksum { symbology: &'static str, expected: u8, found: u8 },
    #[error("{symbology} must start with {expected}")]
    InvalidPrefix { symbology: &'static str, expected: &'static str },
    #[error("unsupported barcode type {0:?}")]
    UnsupportedSymbology(String),
    #[error("data too long for a QR code at error correction level {0}")]
    DataTooLong(char),
    #[error("invalid color {0:?}, expected a hex value like #1A2B3C")]
    InvalidColor(String),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    // Encoder or codec failure
    #[error("QR encoder failed: {0}")]
    Matrix(#[from] qrcode::types::QrError),
    #[error("failed to load font: {0}")]
    Font(#[from] ab_glyph::InvalidFont),
    #[error("failed to write PNG: {0}")]
    Image(#[from] image::ImageError),
}

impl EncodingError {
    /// True when the error stems from what the user asked for rather than from
    /// a fault inside an encoder or codec.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Matrix(_) | Self::Font(_) | Self::Image(_))
    }
}

pub type EncodingResult<T> = Result<T, EncodingError>;
