//! # barqr
//!
//! A Rust library for rendering linear barcodes and QR codes as PNG images.
//!
//! ## Features
//!
//! - **Linear barcodes**: Code 128, Code 39, EAN-13, EAN-8, UPC-A, ISBN-13 and ITF with
//!   check digits, configurable bar size, quiet zone, colors and human readable text
//! - **QR codes**: Smallest version that fits the data, four error correction levels,
//!   configurable box size, border and colors
//! - **Explicit errors**: Invalid content comes back as an [`EncodingError`] with a message
//!   fit to show to a user, never as a panic
//! - **Presentation helpers**: Captions, alerts, hints and download file names for a front end
//!
//! ## Quick Start
//!
//! ### Linear Barcode
//!
//! ```rust
//! use barqr::{LinearEncodeRequest, Symbology};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let png = LinearEncodeRequest::new("400638133393", Symbology::Ean13)
//!     .bar_width(0.3)          // Module width in mm - defaults to 0.2
//!     .bar_height(20.0)        // Bar height in mm - defaults to 15.0
//!     .colors("#1A237E", "#FFFFFF")
//!     .encode()?;
//!
//! std::fs::write("ean13.png", &*png)?;
//! # std::fs::remove_file("ean13.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ### QR Code
//!
//! ```rust
//! use barqr::{ErrorCorrection, MatrixEncodeRequest};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let png = MatrixEncodeRequest::new("https://example.com")
//!     .error_correction(ErrorCorrection::Q)  // Defaults to ErrorCorrection::M
//!     .box_size(8)                           // Pixels per module - defaults to 10
//!     .border(4)                             // Quiet zone in modules - defaults to 4
//!     .encode()?;
//!
//! assert!(!png.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ### Handling Invalid Content
//!
//! ```rust
//! use barqr::{LinearEncodeRequest, Symbology};
//!
//! let err = LinearEncodeRequest::new("12", Symbology::Ean13).encode().unwrap_err();
//! assert!(err.is_input_error());
//! println!("{err}"); // ean13 requires 12 or 13 digits, got 2 characters
//! ```
//!
//! ## Symbologies
//!
//! | Name      | Content                                   | Check digit        |
//! |-----------|-------------------------------------------|--------------------|
//! | `code128` | Any ASCII text                            | mod 103, implicit  |
//! | `code39`  | `0-9 A-Z - . space $ / + %`               | mod 43, appended   |
//! | `ean13`   | 12 or 13 digits                           | computed/verified  |
//! | `ean8`    | 7 or 8 digits                             | computed/verified  |
//! | `upca`    | 11 or 12 digits                           | computed/verified  |
//! | `isbn13`  | 12 or 13 digits starting 978/979, hyphens allowed | computed/verified |
//! | `itf`     | Digits, odd lengths padded with a leading 0 | none             |

pub mod color;
pub mod error;
pub mod linear;
pub mod matrix;
pub mod render;
pub mod shell;
pub mod symbology;

pub use color::HexColor;
pub use error::{EncodingError, EncodingResult};
pub use linear::{encode_linear, LinearEncodeRequest, LinearStyle};
pub use matrix::{encode_matrix, ErrorCorrection, MatrixEncodeRequest, MatrixStyle};
pub use render::ImageBytes;
pub use shell::{present, Download, Form, FormMode, Presentation};
pub use symbology::Symbology;
