use image::imageops::FilterType;
use thiserror::Error;

use crate::color::{BitLayout, LayoutError};
use crate::constants::{
    ARRAY_NAME, DEFAULT_HEIGHT, DEFAULT_WIDTH, ELEMENT_TYPE, VALUES_PER_LINE,
};
use crate::literal::LiteralFormat;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Target dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
    #[error("Invalid bit layout")]
    InvalidBitLayout(#[from] LayoutError),
    #[error("Values per line must be at least 1")]
    ZeroValuesPerLine,
    #[error("Array name {0:?} is not a valid C identifier")]
    InvalidArrayName(String),
}

/// Resampling filter used for the resize step.
///
/// The default is `CatmullRom` (bicubic). Output bytes depend on this choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    pub width: u32,
    pub height: u32,
    pub layout: BitLayout,
    pub values_per_line: usize,
    pub array_name: String,
    pub filter: ResizeFilter,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            layout: BitLayout::RGB332,
            values_per_line: VALUES_PER_LINE,
            array_name: ARRAY_NAME.to_string(),
            filter: ResizeFilter::default(),
        }
    }
}

impl ConversionConfig {
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_layout(mut self, layout: BitLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the layout from raw bit widths, which must add up to 8.
    pub fn with_bits(self, red: u8, green: u8, blue: u8) -> Result<Self, ConfigError> {
        Ok(self.with_layout(BitLayout::new(red, green, blue)?))
    }

    pub fn with_values_per_line(mut self, values_per_line: usize) -> Self {
        self.values_per_line = values_per_line;
        self
    }

    pub fn with_array_name(mut self, name: impl Into<String>) -> Self {
        self.array_name = name.into();
        self
    }

    pub fn with_filter(mut self, filter: ResizeFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Number of bytes a conversion with this config produces.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.values_per_line == 0 {
            return Err(ConfigError::ZeroValuesPerLine);
        }
        if !is_c_identifier(&self.array_name) {
            return Err(ConfigError::InvalidArrayName(self.array_name.clone()));
        }
        Ok(())
    }

    pub fn literal_format(&self) -> LiteralFormat {
        LiteralFormat {
            element_type: ELEMENT_TYPE.to_string(),
            array_name: self.array_name.clone(),
            values_per_line: self.values_per_line,
        }
    }
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
