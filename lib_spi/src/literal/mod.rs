pub mod decoder;
pub mod encoder;
pub mod format;

pub use decoder::{parse_literal, LiteralParseError};
pub use encoder::format_literal;
pub use format::{LiteralFormat, ParsedLiteral};
