pub const DEFAULT_WIDTH: u32 = 40;
pub const DEFAULT_HEIGHT: u32 = 30;

pub const RED_BITS: u8 = 3;
pub const GREEN_BITS: u8 = 3;
pub const BLUE_BITS: u8 = 2;

/// Number of hex values on each body line of the emitted array.
pub const VALUES_PER_LINE: usize = 30;

pub const ARRAY_NAME: &str = "image_data";
pub const ELEMENT_TYPE: &str = "uint8_t";
pub const INDENT: &str = "    ";
