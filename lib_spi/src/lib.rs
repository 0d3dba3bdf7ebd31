pub mod color;
pub mod config;
pub mod constants;
pub mod convert;
pub mod literal;

use log::*;
use std::io::Write;

pub use crate::color::{quantize, BitLayout};
pub use crate::config::{ConfigError, ConversionConfig, ResizeFilter};
pub use crate::convert::{convert, convert_image, convert_with, Conversion, ConversionError};
pub use crate::literal::{format_literal, parse_literal};

/// Sends log output to stderr so stdout only carries the emitted array.
///
/// `level` applies to this library and the binary; `RUST_LOG` overrides it.
pub fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter(Some("lib_spi332"), level)
        .filter(Some("spi332"), level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
