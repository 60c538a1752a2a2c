use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::{debug, info};

use barqr::linear::{BAR_HEIGHT_MM, BAR_WIDTH_MM, FONT_SIZE, QUIET_ZONE_MM};
use barqr::matrix::{BORDER, BOX_SIZE};
use barqr::{present, Download, ErrorCorrection, Form, HexColor, LinearStyle, MatrixStyle, Presentation, Symbology};

#[derive(Parser)]
#[command(name = "barqr")]
#[command(version, about = "Generate barcodes and QR codes as PNG images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Subcommand)]
enum Mode {
    /// Linear barcode (1D)
    Linear {
        /// Text, numbers or product id to encode
        content: String,

        /// Barcode type: code128, code39, ean13, ean8, upca, isbn13 or itf
        #[arg(short, long, default_value = "code128", value_parser = parse_symbology)]
        symbology: Symbology,

        /// Bar width in mm (0.1-1.0)
        #[arg(long, value_name = "MM", default_value = "0.2", value_parser = parse_bar_width)]
        bar_width: f32,

        /// Bar height in mm (5.0-30.0)
        #[arg(long, value_name = "MM", default_value = "15.0", value_parser = parse_bar_height)]
        bar_height: f32,

        /// Font size of the text below the bars (5-20)
        #[arg(long, value_name = "PT", default_value = "10", value_parser = clap::value_parser!(u32).range(*FONT_SIZE.start() as i64..=*FONT_SIZE.end() as i64))]
        font_size: u32,

        /// Quiet zone on each side in mm (1.0-10.0)
        #[arg(long, value_name = "MM", default_value = "6.5", value_parser = parse_quiet_zone)]
        quiet_zone: f32,

        /// Do not print the text below the bars
        #[arg(long)]
        hide_text: bool,

        /// Bar color
        #[arg(long, value_name = "HEX", default_value = "#000000", value_parser = parse_color)]
        foreground: HexColor,

        /// Background color
        #[arg(long, value_name = "HEX", default_value = "#FFFFFF", value_parser = parse_color)]
        background: HexColor,
    },

    /// QR code (2D)
    Matrix {
        /// URL, text or any other content to encode
        content: String,

        /// Module color
        #[arg(long, value_name = "HEX", default_value = "#000000", value_parser = parse_color)]
        fill: HexColor,

        /// Background color
        #[arg(long, value_name = "HEX", default_value = "#FFFFFF", value_parser = parse_color)]
        background: HexColor,

        /// Pixels per module (1-20)
        #[arg(long, value_name = "PX", default_value = "10", value_parser = clap::value_parser!(u32).range(*BOX_SIZE.start() as i64..=*BOX_SIZE.end() as i64))]
        box_size: u32,

        /// Quiet zone in modules (0-10)
        #[arg(long, value_name = "MODULES", default_value = "4", value_parser = clap::value_parser!(u32).range(*BORDER.start() as i64..=*BORDER.end() as i64))]
        border: u32,

        /// Error correction: L (7%), M (15%), Q (25%) or H (30%)
        #[arg(short, long, value_name = "LEVEL", default_value = "M", value_parser = parse_error_correction)]
        error_correction: ErrorCorrection,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Directory the image is saved to
    #[arg(short, long, value_name = "DIR", default_value = ".", global = true)]
    out_dir: PathBuf,

    /// Write the PNG to stdout instead of a file
    #[arg(long, global = true)]
    stdout: bool,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] io::Error),
}

fn parse_symbology(s: &str) -> Result<Symbology, String> {
    s.parse().map_err(|e: barqr::EncodingError| e.to_string())
}

fn parse_color(s: &str) -> Result<HexColor, String> {
    s.parse().map_err(|e: barqr::EncodingError| e.to_string())
}

fn parse_error_correction(s: &str) -> Result<ErrorCorrection, String> {
    s.parse().map_err(|e: barqr::EncodingError| e.to_string())
}

fn parse_bounded(s: &str, start: f32, end: f32) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if (start..=end).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not in {start}..={end}"))
    }
}

fn parse_bar_width(s: &str) -> Result<f32, String> {
    parse_bounded(s, *BAR_WIDTH_MM.start(), *BAR_WIDTH_MM.end())
}

fn parse_bar_height(s: &str) -> Result<f32, String> {
    parse_bounded(s, *BAR_HEIGHT_MM.start(), *BAR_HEIGHT_MM.end())
}

fn parse_quiet_zone(s: &str) -> Result<f32, String> {
    parse_bounded(s, *QUIET_ZONE_MM.start(), *QUIET_ZONE_MM.end())
}

impl Mode {
    fn into_form(self) -> Form {
        match self {
            Mode::Linear {
                content,
                symbology,
                bar_width,
                bar_height,
                font_size,
                quiet_zone,
                hide_text,
                foreground,
                background,
            } => {
                let style = LinearStyle {
                    bar_width_mm: bar_width,
                    bar_height_mm: bar_height,
                    font_size,
                    quiet_zone_mm: quiet_zone,
                    show_text: !hide_text,
                    foreground: foreground.to_string(),
                    background: background.to_string(),
                    ..LinearStyle::default()
                };
                Form::linear(content, symbology, style)
            }
            Mode::Matrix { content, fill, background, box_size, border, error_correction } => {
                let style = MatrixStyle {
                    fill: fill.to_string(),
                    background: background.to_string(),
                    box_size,
                    border,
                    error_correction,
                };
                Form::matrix(content, style)
            }
        }
    }
}

fn save(output: &OutputArgs, download: &Download) -> Result<(), AppError> {
    if output.stdout {
        return io::stdout().lock().write_all(&download.bytes).map_err(AppError::Stdout);
    }

    let path = output.out_dir.join(download.local_file_name());
    if let Err(source) = fs::write(&path, &*download.bytes) {
        return Err(AppError::Write { path, source });
    }
    info!("Saved {} bytes to {}", download.bytes.len(), path.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let form = cli.mode.into_form();
    debug!("Presenting {:?}", form.mode);

    match present(&form) {
        Presentation::Image { caption, download } => match save(&cli.output, &download) {
            Ok(()) => {
                eprintln!("{caption}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
        Presentation::Error { alert, hint, .. } => {
            eprintln!("{alert}");
            if let Some(hint) = hint {
                eprintln!("{hint}");
            }
            ExitCode::FAILURE
        }
        Presentation::Warning(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}
