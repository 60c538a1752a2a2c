//! Presentation layer: turns the current form values into what the user sees.
//!
//! [`present`] is a pure function of the form. Empty content never reaches an
//! encoder, successful renders carry the PNG for both the preview and the
//! download, and encoder failures become an alert (plus a usage hint for
//! linear barcodes).

use log::{debug, warn};

use crate::error::EncodingError;
use crate::linear::{encode_linear, LinearEncodeRequest, LinearStyle};
use crate::matrix::{encode_matrix, MatrixEncodeRequest, MatrixStyle};
use crate::render::ImageBytes;
use crate::symbology::Symbology;

pub const LINEAR_WARNING: &str = "Please enter some data to generate a barcode.";
pub const MATRIX_WARNING: &str = "Please enter text or a URL to generate a QR code.";
pub const LINEAR_HINT: &str = "Tip: EAN-13 requires exactly 12 or 13 digits. UPC-A requires 11 or 12 digits. For text/mixed data, use 'code128'.";
pub const MATRIX_CAPTION: &str = "Generated QR Code";
pub const MATRIX_FILE_NAME: &str = "qrcode.png";

// Form
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Linear { symbology: Symbology, style: LinearStyle },
    Matrix(MatrixStyle),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub content: String,
    pub mode: FormMode,
}

impl Form {
    pub fn linear(content: impl Into<String>, symbology: Symbology, style: LinearStyle) -> Self {
        Self { content: content.into(), mode: FormMode::Linear { symbology, style } }
    }

    pub fn matrix(content: impl Into<String>, style: MatrixStyle) -> Self {
        Self { content: content.into(), mode: FormMode::Matrix(style) }
    }
}

// Presentation
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: ImageBytes,
}

impl Download {
    /// The file name with path separators and other characters no file
    /// system accepts replaced by `_`, safe to join onto an output directory.
    pub fn local_file_name(&self) -> String {
        self.file_name
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    Warning(&'static str),
    Image { caption: String, download: Download },
    Error { alert: String, hint: Option<&'static str>, input_error: bool },
}

pub fn present(form: &Form) -> Presentation {
    match &form.mode {
        FormMode::Linear { symbology, style } => present_linear(&form.content, *symbology, style),
        FormMode::Matrix(style) => present_matrix(&form.content, style),
    }
}

fn present_linear(content: &str, symbology: Symbology, style: &LinearStyle) -> Presentation {
    if content.is_empty() {
        return Presentation::Warning(LINEAR_WARNING);
    }

    let mut req = LinearEncodeRequest::new(content, symbology);
    req.style(style.clone());
    match encode_linear(&req) {
        Ok(bytes) => Presentation::Image {
            caption: format!("Type: {symbology} | Data: {content}"),
            download: Download {
                file_name: linear_file_name(symbology, content),
                mime: ImageBytes::MIME,
                bytes,
            },
        },
        Err(e) => failed("Error generating barcode", e, Some(LINEAR_HINT)),
    }
}

fn present_matrix(content: &str, style: &MatrixStyle) -> Presentation {
    if content.is_empty() {
        return Presentation::Warning(MATRIX_WARNING);
    }

    let mut req = MatrixEncodeRequest::new(content);
    req.style(style.clone());
    match encode_matrix(&req) {
        Ok(bytes) => Presentation::Image {
            caption: MATRIX_CAPTION.to_string(),
            download: Download { file_name: MATRIX_FILE_NAME.to_string(), mime: ImageBytes::MIME, bytes },
        },
        Err(e) => failed("Error generating QR Code", e, None),
    }
}

fn failed(prefix: &str, e: EncodingError, hint: Option<&'static str>) -> Presentation {
    if e.is_input_error() {
        debug!("{prefix}: {e}");
    } else {
        warn!("{prefix}: {e}");
    }
    Presentation::Error { alert: format!("{prefix}: {e}"), hint, input_error: e.is_input_error() }
}

/// `barcode_{symbology}_{first ten characters of content}.png`
pub fn linear_file_name(symbology: Symbology, content: &str) -> String {
    let head: String = content.chars().take(10).collect();
    format!("barcode_{symbology}_{head}.png")
}
