use std::time::{Duration, Instant};

use pixbench_image::{Image, ImageError, ImageSize};

use crate::color::gray_from_rgb;
use crate::core::mean_gray;
use crate::enhance::adjust_brightness;
use crate::generate::generate_image_data;
use crate::parallel::{ExecutionStrategy, ParallelError};
use crate::threshold::threshold_binary;

/// An error type for the benchmark pipeline.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PipelineError {
    /// The requested image size is invalid.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// A kernel could not be scheduled with the requested strategy.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}

/// Parameters of a benchmark run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Offset passed to the brightness adjustment.
    pub brightness_offset: i32,
    /// Inclusive threshold of the binary quantization.
    pub threshold: u8,
    /// How each kernel is executed.
    pub strategy: ExecutionStrategy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            brightness_offset: 20,
            threshold: 128,
            strategy: ExecutionStrategy::Serial,
        }
    }
}

/// The stages of the benchmark, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Synthetic RGB data generation.
    Generate,
    /// RGB to gray conversion.
    Grayscale,
    /// Mean of the gray channel.
    Average,
    /// Brightness offset on the gray channel.
    Brightness,
    /// Binary threshold on the gray channel.
    Threshold,
}

impl Stage {
    /// All stages in execution order.
    pub const ALL: [Stage; 5] = [
        Stage::Generate,
        Stage::Grayscale,
        Stage::Average,
        Stage::Brightness,
        Stage::Threshold,
    ];
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Stage::Generate => "Data generation",
            Stage::Grayscale => "Grayscale conversion",
            Stage::Average => "Average calculation",
            Stage::Brightness => "Brightness adjustment",
            Stage::Threshold => "Threshold application",
        };
        f.write_str(name)
    }
}

/// Wall-clock time spent in one stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageTiming {
    /// The timed stage.
    pub stage: Stage,
    /// Time elapsed between the start and the end of the stage.
    pub elapsed: Duration,
}

/// Timings and results of a benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    /// Size of the processed image.
    pub size: ImageSize,
    /// Per-stage timings, in execution order.
    pub timings: Vec<StageTiming>,
    /// Mean gray value computed by the average stage.
    pub average_gray: f64,
}

impl PipelineReport {
    /// Timing of a given stage, if it ran.
    pub fn timing(&self, stage: Stage) -> Option<Duration> {
        self.timings
            .iter()
            .find(|t| t.stage == stage)
            .map(|t| t.elapsed)
    }

    /// Sum of all stage timings.
    pub fn total(&self) -> Duration {
        self.timings.iter().map(|t| t.elapsed).sum()
    }
}

/// Format a value with at most `digits` significant digits and no trailing
/// zeros, the way a default-precision stream prints a double.
fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }

    let exponent = value.abs().log10().floor() as i64;
    let decimals = (digits as i64 - 1 - exponent).max(0) as usize;
    let formatted = format!("{value:.decimals$}");
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

impl std::fmt::Display for PipelineReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "=== Sequential Image Processing Benchmark ===")?;
        writeln!(f, "Image size: {} pixels", self.size)?;
        writeln!(f, "Total pixels: {}", self.size.num_pixels())?;
        writeln!(f)?;
        for timing in &self.timings {
            write!(f, "{}: {} ms", timing.stage, timing.elapsed.as_millis())?;
            if timing.stage == Stage::Average {
                write!(f, " (avg = {})", format_significant(self.average_gray, 6))?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        write!(f, "=== Processing Complete ===")
    }
}

/// Result of [`run_pipeline`]: the final image and the report.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// The image after the last stage; its gray channel is binary.
    pub image: Image,
    /// Timings and the computed average.
    pub report: PipelineReport,
}

fn timed<R>(
    timings: &mut Vec<StageTiming>,
    stage: Stage,
    f: impl FnOnce() -> Result<R, ParallelError>,
) -> Result<R, ParallelError> {
    let start = Instant::now();
    let out = f()?;
    let elapsed = start.elapsed();
    log::debug!("{stage} finished in {elapsed:?}");
    timings.push(StageTiming { stage, elapsed });
    Ok(out)
}

/// Run the five benchmark stages on a fresh image of the given size.
///
/// The stages run strictly one after the other: each one reads what the
/// previous one wrote to the image, so only the work inside a stage may be
/// parallelized.
///
/// # Errors
///
/// Returns [`PipelineError::Image`] if the size has a zero side and
/// [`PipelineError::Parallel`] if the strategy is invalid.
///
/// # Example
///
/// ```
/// use pixbench_image::ImageSize;
/// use pixbench_imgproc::pipeline::{run_pipeline, PipelineConfig};
///
/// let size = ImageSize { width: 2, height: 2 };
/// let output = run_pipeline(size, &PipelineConfig::default()).unwrap();
///
/// assert_eq!(output.report.average_gray, 102.5);
/// assert_eq!(output.image.gray(), &[0, 255, 255, 0]);
/// ```
pub fn run_pipeline(
    size: ImageSize,
    config: &PipelineConfig,
) -> Result<PipelineOutput, PipelineError> {
    let size = ImageSize::new(size.width, size.height)?;
    let strategy = config.strategy;
    strategy.validate()?;

    log::debug!(
        "running pipeline on {size} ({} pixels) with strategy {strategy}",
        size.num_pixels()
    );

    let mut image = Image::new(size)?;
    let mut timings = Vec::with_capacity(Stage::ALL.len());

    timed(&mut timings, Stage::Generate, || {
        generate_image_data(&mut image, strategy)
    })?;
    timed(&mut timings, Stage::Grayscale, || {
        gray_from_rgb(&mut image, strategy)
    })?;
    let average_gray = timed(&mut timings, Stage::Average, || mean_gray(&image, strategy))?;
    timed(&mut timings, Stage::Brightness, || {
        adjust_brightness(&mut image, config.brightness_offset, strategy)
    })?;
    timed(&mut timings, Stage::Threshold, || {
        threshold_binary(&mut image, config.threshold, strategy)
    })?;

    Ok(PipelineOutput {
        image,
        report: PipelineReport {
            size,
            timings,
            average_gray,
        },
    })
}
