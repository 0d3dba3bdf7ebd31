pub mod preview;
pub mod quantize;

pub use preview::{reconstruct, save_preview, upscale, PreviewError};
pub use quantize::{quantize, BitLayout, LayoutError};
