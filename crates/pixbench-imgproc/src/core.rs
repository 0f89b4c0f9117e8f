use pixbench_image::Image;

use crate::parallel::{self, ExecutionStrategy, ParallelError};

/// Sum of all gray values.
///
/// The accumulator is a `u64`, wide enough for any image that fits in memory.
pub fn sum_gray(image: &Image, strategy: ExecutionStrategy) -> Result<u64, ParallelError> {
    parallel::sum_u64(image.gray(), strategy, |&v| v as u64)
}

/// Compute the mean of the gray channel.
///
/// The integer sum over all pixels is divided once by the pixel count, so
/// every strategy returns exactly the same value.
///
/// # Arguments
///
/// * `image` - The input image with a populated gray channel.
/// * `strategy` - The execution strategy.
///
/// # Returns
///
/// The arithmetic mean of the gray values.
///
/// # Example
///
/// ```
/// use pixbench_image::{Image, ImageSize};
/// use pixbench_imgproc::core::mean_gray;
/// use pixbench_imgproc::parallel::ExecutionStrategy;
///
/// let size = ImageSize { width: 2, height: 2 };
/// let image = Image::from_gray(size, vec![0, 156, 162, 92]).unwrap();
///
/// assert_eq!(mean_gray(&image, ExecutionStrategy::Serial).unwrap(), 102.5);
/// ```
pub fn mean_gray(image: &Image, strategy: ExecutionStrategy) -> Result<f64, ParallelError> {
    let sum = sum_gray(image, strategy)?;
    Ok(sum as f64 / image.num_pixels() as f64)
}
