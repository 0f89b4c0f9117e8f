use pixbench_image::Image;

use crate::parallel::{self, ExecutionStrategy, ParallelError};

/// Add an offset to a gray level, clamped to `[0, 255]`.
#[inline]
pub fn brighten_value(value: u8, offset: i32) -> u8 {
    (value as i32).saturating_add(offset).clamp(0, 255) as u8
}

/// Adjust the brightness of the gray channel in place.
///
/// dst(x,y) = clamp(src(x,y) + offset, 0, 255)
///
/// Clamping makes the operation lossy: brightening by a large offset and
/// darkening by the same amount does not restore the original values.
///
/// # Arguments
///
/// * `image` - The image whose gray channel is adjusted.
/// * `offset` - The signed brightness offset added to each pixel.
/// * `strategy` - The execution strategy.
///
/// # Example
///
/// ```
/// use pixbench_image::{Image, ImageSize};
/// use pixbench_imgproc::enhance::adjust_brightness;
/// use pixbench_imgproc::parallel::ExecutionStrategy;
///
/// let size = ImageSize { width: 3, height: 1 };
/// let mut image = Image::from_gray(size, vec![0, 100, 250]).unwrap();
///
/// adjust_brightness(&mut image, 20, ExecutionStrategy::Serial).unwrap();
/// assert_eq!(image.gray(), &[20, 120, 255]);
///
/// adjust_brightness(&mut image, -50, ExecutionStrategy::Serial).unwrap();
/// assert_eq!(image.gray(), &[0, 70, 205]);
/// ```
pub fn adjust_brightness(
    image: &mut Image,
    offset: i32,
    strategy: ExecutionStrategy,
) -> Result<(), ParallelError> {
    parallel::for_each_in_place(image.gray_mut(), strategy, |v| {
        *v = brighten_value(*v, offset);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixbench_image::ImageSize;

    fn ramp() -> Result<Image, Box<dyn std::error::Error>> {
        let size = ImageSize {
            width: 16,
            height: 16,
        };
        Ok(Image::from_gray(size, (0..=255).collect())?)
    }

    #[test]
    fn brighten_value_clamps() {
        assert_eq!(brighten_value(250, 20), 255);
        assert_eq!(brighten_value(10, -20), 0);
        assert_eq!(brighten_value(100, 20), 120);
        assert_eq!(brighten_value(0, i32::MAX), 255);
        assert_eq!(brighten_value(255, i32::MIN), 0);
    }

    #[test]
    fn adjust_brightness_zero_is_identity() -> Result<(), Box<dyn std::error::Error>> {
        let mut image = ramp()?;
        let expected = image.clone();
        adjust_brightness(&mut image, 0, ExecutionStrategy::Serial)?;
        assert_eq!(image, expected);
        Ok(())
    }

    #[test]
    fn adjust_brightness_not_invertible() -> Result<(), Box<dyn std::error::Error>> {
        let mut image = ramp()?;

        adjust_brightness(&mut image, 1000, ExecutionStrategy::Serial)?;
        assert!(image.gray().iter().all(|&v| v == 255));

        adjust_brightness(&mut image, -1000, ExecutionStrategy::Serial)?;
        assert!(image.gray().iter().all(|&v| v == 0));

        Ok(())
    }

    #[test]
    fn adjust_brightness_is_monotone() -> Result<(), Box<dyn std::error::Error>> {
        let mut image = ramp()?;
        adjust_brightness(&mut image, 37, ExecutionStrategy::Serial)?;
        assert!(image.gray().windows(2).all(|w| w[0] <= w[1]));
        Ok(())
    }

    #[test]
    fn adjust_brightness_strategies_agree() -> Result<(), Box<dyn std::error::Error>> {
        let mut expected = ramp()?;
        adjust_brightness(&mut expected, -42, ExecutionStrategy::Serial)?;

        for strategy in [
            ExecutionStrategy::ParallelElements,
            ExecutionStrategy::AutoRows(16),
            ExecutionStrategy::Fixed(2),
        ] {
            let mut image = ramp()?;
            adjust_brightness(&mut image, -42, strategy)?;
            assert_eq!(image, expected, "{strategy}");
        }

        Ok(())
    }
}
