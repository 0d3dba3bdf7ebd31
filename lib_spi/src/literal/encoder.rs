use log::{debug, info};

use super::format::LiteralFormat;

/// Renders bytes as a C initializer list.
///
/// Every body line holds `values_per_line` values (the last one may hold
/// fewer) and ends with a trailing comma. The text ends with `};` and no
/// newline. A `values_per_line` of 0 is treated as 1.
pub fn format_literal(bytes: &[u8], format: &LiteralFormat) -> String {
    info!(
        "Formatting {} bytes as {}[{}]",
        bytes.len(),
        format.array_name,
        bytes.len()
    );

    let per_line = format.values_per_line.max(1);
    let mut literal = format.header(bytes.len());
    literal.push('\n');

    let mut lines = 0;
    for chunk in bytes.chunks(per_line) {
        let values: Vec<String> = chunk.iter().map(|byte| format!("0x{:02X}", byte)).collect();
        literal.push_str(LiteralFormat::INDENT);
        literal.push_str(&values.join(", "));
        literal.push_str(",\n");
        lines += 1;
    }
    debug!("Wrote {} body lines of up to {} values", lines, per_line);

    literal.push_str(LiteralFormat::CLOSING);
    literal
}
