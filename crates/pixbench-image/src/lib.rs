#![deny(missing_docs)]
//! Image types for the pixbench kernels

/// image representation for the pixel kernels.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Channel, Image, ImageSize};
