#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image reductions module.
pub mod core;

/// image enhancement module.
pub mod enhance;

/// synthetic image data module.
pub mod generate;

/// module containing parallelization utilities.
pub mod parallel;

/// the timed benchmark pipeline.
pub mod pipeline;

/// operations to threshold images.
pub mod threshold;
