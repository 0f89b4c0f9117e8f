use pixbench_image::Image;

use crate::parallel::{self, ExecutionStrategy, ParallelError};

/// Apply a binary threshold to the gray channel in place.
///
/// Pixels greater than or equal to `threshold` become 255, all others 0.
/// The output is already binary, so applying the same threshold again
/// leaves it unchanged.
///
/// # Arguments
///
/// * `image` - The image whose gray channel is thresholded.
/// * `threshold` - The threshold value, inclusive.
/// * `strategy` - The execution strategy.
///
/// # Examples
///
/// ```
/// use pixbench_image::{Image, ImageSize};
/// use pixbench_imgproc::parallel::ExecutionStrategy;
/// use pixbench_imgproc::threshold::threshold_binary;
///
/// let size = ImageSize { width: 4, height: 1 };
/// let mut image = Image::from_gray(size, vec![0, 127, 128, 255]).unwrap();
///
/// threshold_binary(&mut image, 128, ExecutionStrategy::Serial).unwrap();
/// assert_eq!(image.gray(), &[0, 0, 255, 255]);
/// ```
pub fn threshold_binary(
    image: &mut Image,
    threshold: u8,
    strategy: ExecutionStrategy,
) -> Result<(), ParallelError> {
    // run the thresholding operation with the requested strategy
    parallel::for_each_in_place(image.gray_mut(), strategy, |v| {
        *v = if *v >= threshold { u8::MAX } else { 0 };
    })
}
