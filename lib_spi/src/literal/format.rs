use crate::constants::{ARRAY_NAME, ELEMENT_TYPE, INDENT, VALUES_PER_LINE};

/// Declaration details of the emitted C array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralFormat {
    pub element_type: String,
    pub array_name: String,
    pub values_per_line: usize,
}

impl Default for LiteralFormat {
    fn default() -> Self {
        Self {
            element_type: ELEMENT_TYPE.to_string(),
            array_name: ARRAY_NAME.to_string(),
            values_per_line: VALUES_PER_LINE,
        }
    }
}

impl LiteralFormat {
    pub const CLOSING: &'static str = "};";
    pub const INDENT: &'static str = INDENT;

    /// `uint8_t image_data[1200] = {`
    pub fn header(&self, len: usize) -> String {
        format!("{} {}[{}] = {{", self.element_type, self.array_name, len)
    }
}

/// A literal read back from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLiteral {
    pub element_type: String,
    pub array_name: String,
    pub bytes: Vec<u8>,
}
