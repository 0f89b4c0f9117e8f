use pixbench_image::Image;

use crate::parallel::{self, ExecutionStrategy, ParallelError};

/// Define the RGB weights for the grayscale conversion.
const RW: f64 = 0.299;
const GW: f64 = 0.587;
const BW: f64 = 0.114;

/// Gray level of a single RGB pixel.
///
/// The weighted sum is evaluated in `f64` and narrowed to `u8` by truncation,
/// so the fractional part is discarded rather than rounded.
///
/// # Example
///
/// ```
/// use pixbench_imgproc::color::gray_value;
///
/// assert_eq!(gray_value(123, 200, 21), 156);
/// assert_eq!(gray_value(255, 255, 255), 255);
/// ```
#[inline]
pub fn gray_value(r: u8, g: u8, b: u8) -> u8 {
    (RW * r as f64 + GW * g as f64 + BW * b as f64) as u8
}

/// Convert the RGB channels of an image to its gray channel using the formula:
///
/// Y = 0.299 * R + 0.587 * G + 0.114 * B
///
/// # Arguments
///
/// * `image` - The image whose red, green and blue channels are read and
///   whose gray channel is written.
/// * `strategy` - The execution strategy.
///
/// # Example
///
/// ```
/// use pixbench_image::{Image, ImageSize};
/// use pixbench_imgproc::color::gray_from_rgb;
/// use pixbench_imgproc::parallel::ExecutionStrategy;
///
/// let size = ImageSize { width: 2, height: 1 };
/// let mut image =
///     Image::from_channels(size, vec![255, 10], vec![255, 10], vec![255, 10], vec![0, 0])
///         .unwrap();
///
/// gray_from_rgb(&mut image, ExecutionStrategy::Serial).unwrap();
/// assert_eq!(image.gray(), &[255, 10]);
/// ```
pub fn gray_from_rgb(image: &mut Image, strategy: ExecutionStrategy) -> Result<(), ParallelError> {
    let (red, green, blue, gray) = image.split_rgb_gray_mut();

    parallel::zip3_into(red, green, blue, gray, strategy, |&r, &g, &b, dst| {
        *dst = gray_value(r, g, b);
    })
}
