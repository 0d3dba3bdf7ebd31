use log::{debug, error, info};
use thiserror::Error;

use super::format::{LiteralFormat, ParsedLiteral};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LiteralParseError {
    #[error("Missing or malformed array declaration")]
    MissingHeader,
    #[error("Invalid array length {0:?}")]
    InvalidLength(String),
    #[error("Invalid value {token:?} on line {line}")]
    InvalidValue { line: usize, token: String },
    #[error("Array declares {declared} values but contains {found}")]
    LengthMismatch { declared: usize, found: usize },
    #[error("Missing closing brace")]
    MissingClosingBrace,
}

/// Reads a literal produced by [`format_literal`](super::format_literal)
/// back into bytes.
pub fn parse_literal(text: &str) -> Result<ParsedLiteral, LiteralParseError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (_, header) = lines.next().ok_or_else(|| {
        error!("Empty literal");
        LiteralParseError::MissingHeader
    })?;
    let (element_type, array_name, declared) = parse_header(header)?;
    debug!(
        "Header parsed: type={} name={} len={}",
        element_type, array_name, declared
    );

    let mut bytes = Vec::with_capacity(declared);
    let mut closed = false;
    for (line_number, line) in lines {
        if line == LiteralFormat::CLOSING {
            closed = true;
            break;
        }
        for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            bytes.push(parse_value(token).ok_or_else(|| {
                error!("Invalid value {:?} on line {}", token, line_number);
                LiteralParseError::InvalidValue {
                    line: line_number,
                    token: token.to_string(),
                }
            })?);
        }
    }

    if !closed {
        error!("Literal is missing its closing brace");
        return Err(LiteralParseError::MissingClosingBrace);
    }
    if bytes.len() != declared {
        error!(
            "Declared length {} does not match {} parsed values",
            declared,
            bytes.len()
        );
        return Err(LiteralParseError::LengthMismatch {
            declared,
            found: bytes.len(),
        });
    }

    info!("Parsed {} values from literal", bytes.len());
    Ok(ParsedLiteral {
        element_type,
        array_name,
        bytes,
    })
}

/// Splits `<type> <name>[<len>] = {` into its parts.
fn parse_header(header: &str) -> Result<(String, String, usize), LiteralParseError> {
    let declaration = header
        .strip_suffix('{')
        .map(str::trim_end)
        .and_then(|rest| rest.strip_suffix('='))
        .map(str::trim_end)
        .ok_or(LiteralParseError::MissingHeader)?;

    let declaration = declaration
        .strip_suffix(']')
        .ok_or(LiteralParseError::MissingHeader)?;
    let (declarator, length) = declaration
        .rsplit_once('[')
        .ok_or(LiteralParseError::MissingHeader)?;
    let declared = length
        .trim()
        .parse::<usize>()
        .map_err(|_| LiteralParseError::InvalidLength(length.to_string()))?;

    let mut words: Vec<&str> = declarator.split_whitespace().collect();
    let array_name = words.pop().ok_or(LiteralParseError::MissingHeader)?;
    if words.is_empty() {
        return Err(LiteralParseError::MissingHeader);
    }

    Ok((words.join(" "), array_name.to_string(), declared))
}

fn parse_value(token: &str) -> Option<u8> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))?;
    u8::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let parsed =
            parse_literal("uint8_t image_data[3] = {\n    0x00, 0x1C,\n    0xE0,\n};").unwrap();
        assert_eq!(parsed.element_type, "uint8_t");
        assert_eq!(parsed.array_name, "image_data");
        assert_eq!(parsed.bytes, vec![0x00, 0x1C, 0xE0]);
    }

    #[test]
    fn test_parse_qualified_type_and_lowercase() {
        let parsed = parse_literal("const uint8_t logo[2]={\n0xab,0Xcd\n};\n").unwrap();
        assert_eq!(parsed.element_type, "const uint8_t");
        assert_eq!(parsed.array_name, "logo");
        assert_eq!(parsed.bytes, vec![0xAB, 0xCD]);
    }

    #[test]
    fn test_parse_missing_header() {
        assert_eq!(parse_literal(""), Err(LiteralParseError::MissingHeader));
        assert_eq!(
            parse_literal("image_data[1] = {\n0x00,\n};"),
            Err(LiteralParseError::MissingHeader)
        );
        assert_eq!(
            parse_literal("uint8_t image_data[1];\n"),
            Err(LiteralParseError::MissingHeader)
        );
    }

    #[test]
    fn test_parse_invalid_length() {
        assert_eq!(
            parse_literal("uint8_t a[x] = {\n};"),
            Err(LiteralParseError::InvalidLength("x".to_string()))
        );
    }

    #[test]
    fn test_parse_invalid_value() {
        assert_eq!(
            parse_literal("uint8_t a[2] = {\n    0x01, 0x100,\n};"),
            Err(LiteralParseError::InvalidValue {
                line: 2,
                token: "0x100".to_string()
            })
        );
        assert_eq!(
            parse_literal("uint8_t a[1] = {\n    12,\n};"),
            Err(LiteralParseError::InvalidValue {
                line: 2,
                token: "12".to_string()
            })
        );
    }

    #[test]
    fn test_parse_length_mismatch() {
        assert_eq!(
            parse_literal("uint8_t a[3] = {\n    0x01, 0x02,\n};"),
            Err(LiteralParseError::LengthMismatch {
                declared: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_parse_missing_closing_brace() {
        assert_eq!(
            parse_literal("uint8_t a[1] = {\n    0x01,\n"),
            Err(LiteralParseError::MissingClosingBrace)
        );
    }
}
