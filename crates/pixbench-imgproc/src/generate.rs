use pixbench_image::Image;

use crate::parallel::{self, ExecutionStrategy, ParallelError};

const RED_STEP: usize = 123;
const GREEN_STEP: usize = 456;
const BLUE_STEP: usize = 789;

#[inline]
fn pattern(i: usize, step: usize) -> u8 {
    // only the low byte survives the modulo, so wrapping is exact
    (i.wrapping_mul(step) & 0xff) as u8
}

/// Fill the color channels with a deterministic synthetic pattern.
///
/// For every linear index `i`:
///
/// red = (i * 123) mod 256, green = (i * 456) mod 256, blue = (i * 789) mod 256
///
/// The gray channel is left untouched.
///
/// # Arguments
///
/// * `image` - The image to fill.
/// * `strategy` - The execution strategy.
///
/// # Example
///
/// ```
/// use pixbench_image::{Image, ImageSize};
/// use pixbench_imgproc::generate::generate_image_data;
/// use pixbench_imgproc::parallel::ExecutionStrategy;
///
/// let mut image = Image::new(ImageSize { width: 2, height: 2 }).unwrap();
/// generate_image_data(&mut image, ExecutionStrategy::Serial).unwrap();
///
/// assert_eq!(image.red(), &[0, 123, 246, 113]);
/// assert_eq!(image.gray(), &[0, 0, 0, 0]);
/// ```
pub fn generate_image_data(
    image: &mut Image,
    strategy: ExecutionStrategy,
) -> Result<(), ParallelError> {
    let (red, green, blue) = image.rgb_mut();
    parallel::for_each_indexed(red, strategy, |i, v| *v = pattern(i, RED_STEP))?;
    parallel::for_each_indexed(green, strategy, |i, v| *v = pattern(i, GREEN_STEP))?;
    parallel::for_each_indexed(blue, strategy, |i, v| *v = pattern(i, BLUE_STEP))?;
    Ok(())
}
