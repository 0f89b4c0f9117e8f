#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use pixbench_image as image;

#[doc(inline)]
pub use pixbench_imgproc as imgproc;
