use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use pixbench_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// assert_eq!(image_size.num_pixels(), 200);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Create a validated image size.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidDimensions`] if either side is zero or if
    /// the pixel count does not fit in `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::InvalidDimensions(format!(
                "width and height must be positive, got {width}x{height}"
            )));
        }

        if width.checked_mul(height).is_none() {
            return Err(ImageError::InvalidDimensions(format!(
                "{width}x{height} pixels overflow the addressable buffer size"
            )));
        }

        Ok(Self { width, height })
    }

    /// Parse an image size from its textual width and height.
    ///
    /// Both values must be integers greater than zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixbench_image::ImageSize;
    ///
    /// let size = ImageSize::parse("640", "480").unwrap();
    /// assert_eq!(size, ImageSize { width: 640, height: 480 });
    ///
    /// assert!(ImageSize::parse("640", "-1").is_err());
    /// assert!(ImageSize::parse("abc", "480").is_err());
    /// ```
    pub fn parse(width: &str, height: &str) -> Result<Self, ImageError> {
        let width = parse_dimension("width", width)?;
        let height = parse_dimension("height", height)?;
        Self::new(width, height)
    }

    /// Number of pixels covered by the size.
    pub fn num_pixels(&self) -> usize {
        self.width * self.height
    }
}

fn parse_dimension(name: &str, value: &str) -> Result<usize, ImageError> {
    let parsed = value.trim().parse::<i64>().map_err(|e| {
        ImageError::InvalidDimensions(format!("{name} '{value}' is not an integer: {e}"))
    })?;

    if parsed <= 0 {
        return Err(ImageError::InvalidDimensions(format!(
            "{name} must be positive, got {parsed}"
        )));
    }

    usize::try_from(parsed)
        .map_err(|_| ImageError::InvalidDimensions(format!("{name} {parsed} is too large")))
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// One of the four planes stored by an [`Image`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Red plane.
    Red,
    /// Green plane.
    Green,
    /// Blue plane.
    Blue,
    /// Gray plane, filled by the grayscale conversion.
    Gray,
}

/// Represents an image with planar pixel data.
///
/// Every channel is a flat `u8` buffer of `width * height` elements addressed
/// by the row-major linear index `y * width + x`, without row padding. The
/// size is fixed at construction, so the four channels always keep the same
/// length.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    size: ImageSize,
    red: Vec<u8>,
    green: Vec<u8>,
    blue: Vec<u8>,
    gray: Vec<u8>,
}

impl Image {
    /// Create a new image with all channels set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidDimensions`] if the size has a zero side
    /// or its pixel count overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixbench_image::{Channel, Image, ImageSize};
    ///
    /// let image = Image::new(ImageSize { width: 4, height: 5 }).unwrap();
    ///
    /// assert_eq!(image.width(), 4);
    /// assert_eq!(image.height(), 5);
    /// assert!(image.channel(Channel::Gray).iter().all(|&v| v == 0));
    ///
    /// assert!(Image::new(ImageSize { width: 0, height: 5 }).is_err());
    /// ```
    pub fn new(size: ImageSize) -> Result<Self, ImageError> {
        let size = ImageSize::new(size.width, size.height)?;
        let n = size.num_pixels();
        Ok(Self {
            size,
            red: vec![0; n],
            green: vec![0; n],
            blue: vec![0; n],
            gray: vec![0; n],
        })
    }

    /// Create an image from existing channel data.
    ///
    /// # Errors
    ///
    /// If the size is invalid or the length of any channel does not match
    /// the image size, an error is returned.
    pub fn from_channels(
        size: ImageSize,
        red: Vec<u8>,
        green: Vec<u8>,
        blue: Vec<u8>,
        gray: Vec<u8>,
    ) -> Result<Self, ImageError> {
        let size = ImageSize::new(size.width, size.height)?;
        let n = size.num_pixels();
        for channel in [&red, &green, &blue, &gray] {
            if channel.len() != n {
                return Err(ImageError::InvalidChannelShape(channel.len(), n));
            }
        }

        Ok(Self {
            size,
            red,
            green,
            blue,
            gray,
        })
    }

    /// Create an image whose gray channel holds the given data and whose
    /// color channels are zero.
    ///
    /// # Errors
    ///
    /// If the size is invalid or the length of the data does not match the
    /// image size, an error is returned.
    pub fn from_gray(size: ImageSize, gray: Vec<u8>) -> Result<Self, ImageError> {
        let size = ImageSize::new(size.width, size.height)?;
        let n = size.num_pixels();
        Self::from_channels(size, vec![0; n], vec![0; n], vec![0; n], gray)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Number of pixels, which is also the length of every channel.
    pub fn num_pixels(&self) -> usize {
        self.gray.len()
    }

    /// Linear index of the pixel at column `x` and row `y`.
    ///
    /// # Errors
    ///
    /// If the coordinates are out of bounds, an error is returned.
    pub fn linear_index(&self, x: usize, y: usize) -> Result<usize, ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }
        Ok(y * self.width() + x)
    }

    /// Get the value of a pixel in one channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixbench_image::{Channel, Image, ImageSize};
    ///
    /// let size = ImageSize { width: 2, height: 2 };
    /// let image = Image::from_gray(size, vec![1, 2, 3, 4]).unwrap();
    ///
    /// assert_eq!(image.get_pixel(1, 1, Channel::Gray).unwrap(), 4);
    /// assert!(image.get_pixel(2, 0, Channel::Gray).is_err());
    /// ```
    pub fn get_pixel(&self, x: usize, y: usize, channel: Channel) -> Result<u8, ImageError> {
        let idx = self.linear_index(x, y)?;
        Ok(self.channel(channel)[idx])
    }

    /// Borrow one channel as a flat slice.
    pub fn channel(&self, channel: Channel) -> &[u8] {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
            Channel::Gray => &self.gray,
        }
    }

    /// Borrow one channel as a mutable flat slice.
    pub fn channel_mut(&mut self, channel: Channel) -> &mut [u8] {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
            Channel::Gray => &mut self.gray,
        }
    }

    /// Red channel.
    pub fn red(&self) -> &[u8] {
        &self.red
    }

    /// Green channel.
    pub fn green(&self) -> &[u8] {
        &self.green
    }

    /// Blue channel.
    pub fn blue(&self) -> &[u8] {
        &self.blue
    }

    /// Gray channel.
    pub fn gray(&self) -> &[u8] {
        &self.gray
    }

    /// Mutable gray channel.
    pub fn gray_mut(&mut self) -> &mut [u8] {
        &mut self.gray
    }

    /// Mutable red, green and blue channels at once.
    pub fn rgb_mut(&mut self) -> (&mut [u8], &mut [u8], &mut [u8]) {
        (&mut self.red, &mut self.green, &mut self.blue)
    }

    /// The color channels for reading together with the gray channel for writing.
    pub fn split_rgb_gray_mut(&mut self) -> (&[u8], &[u8], &[u8], &mut [u8]) {
        (&self.red, &self.green, &self.blue, &mut self.gray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(image_size.to_string(), "10x20");
        assert_eq!(ImageSize::from([10, 20]), image_size);
    }

    #[test]
    fn image_size_rejects_zero() {
        assert!(matches!(
            ImageSize::new(0, 10),
            Err(ImageError::InvalidDimensions(_))
        ));
        assert!(matches!(
            ImageSize::new(10, 0),
            Err(ImageError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn image_size_rejects_overflow() {
        assert!(matches!(
            ImageSize::new(usize::MAX, 2),
            Err(ImageError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn image_size_parse() -> Result<(), ImageError> {
        assert_eq!(
            ImageSize::parse("1024", " 768 ")?,
            ImageSize {
                width: 1024,
                height: 768
            }
        );

        for (w, h) in [("0", "10"), ("-3", "10"), ("10", "x"), ("", "10"), ("1.5", "2")] {
            assert!(
                matches!(
                    ImageSize::parse(w, h),
                    Err(ImageError::InvalidDimensions(_))
                ),
                "{w}x{h} should be rejected"
            );
        }

        Ok(())
    }

    #[test]
    fn image_new_zeroed() -> Result<(), ImageError> {
        let image = Image::new(ImageSize {
            width: 3,
            height: 2,
        })?;
        assert_eq!(image.num_pixels(), 6);
        for channel in [Channel::Red, Channel::Green, Channel::Blue, Channel::Gray] {
            assert_eq!(image.channel(channel), &[0u8; 6]);
        }
        Ok(())
    }

    #[test]
    fn image_new_rejects_unvalidated_size() {
        for size in [
            ImageSize {
                width: 0,
                height: 5,
            },
            ImageSize {
                width: usize::MAX,
                height: 2,
            },
        ] {
            assert!(
                matches!(Image::new(size), Err(ImageError::InvalidDimensions(_))),
                "{size:?} should be rejected"
            );
        }
    }

    #[test]
    fn image_from_channels_rejects_empty_size() {
        let size = ImageSize {
            width: 4,
            height: 0,
        };
        let res = Image::from_channels(size, vec![], vec![], vec![], vec![]);
        assert!(matches!(res, Err(ImageError::InvalidDimensions(_))));
    }

    #[test]
    fn image_from_gray_rejects_empty_size() {
        let size = ImageSize {
            width: 0,
            height: 0,
        };
        assert!(matches!(
            Image::from_gray(size, vec![]),
            Err(ImageError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn image_from_channels_length_mismatch() {
        let size = ImageSize {
            width: 2,
            height: 2,
        };
        let res = Image::from_channels(size, vec![0; 4], vec![0; 3], vec![0; 4], vec![0; 4]);
        assert_eq!(res, Err(ImageError::InvalidChannelShape(3, 4)));
    }

    #[test]
    fn image_linear_index() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 3,
            height: 2,
        };
        let image = Image::from_gray(size, vec![0, 1, 2, 3, 4, 5])?;

        assert_eq!(image.linear_index(0, 0)?, 0);
        assert_eq!(image.linear_index(2, 0)?, 2);
        assert_eq!(image.linear_index(0, 1)?, 3);
        assert_eq!(image.get_pixel(1, 1, Channel::Gray)?, 4);
        assert_eq!(
            image.linear_index(0, 2),
            Err(ImageError::PixelIndexOutOfBounds(0, 2, 3, 2))
        );

        Ok(())
    }

    #[test]
    fn image_channel_mut() -> Result<(), ImageError> {
        let mut image = Image::new(ImageSize {
            width: 2,
            height: 1,
        })?;
        image.channel_mut(Channel::Blue)[1] = 7;
        {
            let (r, _, _) = image.rgb_mut();
            r[0] = 3;
        }
        let (r, _, b, gray) = image.split_rgb_gray_mut();
        gray[0] = r[0] + b[1];

        assert_eq!(image.red(), &[3, 0]);
        assert_eq!(image.blue(), &[0, 7]);
        assert_eq!(image.gray(), &[10, 0]);
        Ok(())
    }
}
