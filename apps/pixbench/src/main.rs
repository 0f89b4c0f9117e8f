use argh::FromArgs;

use pixbench::image::{ImageError, ImageSize};
use pixbench::imgproc::pipeline::{run_pipeline, PipelineConfig};

const DEFAULT_SIZE: ImageSize = ImageSize {
    width: 1024,
    height: 1024,
};

#[derive(FromArgs, Debug)]
/// Time grayscale, average, brightness and threshold kernels on a synthetic image.
struct Args {
    /// image width and height in pixels, both or neither (default 1024 1024)
    #[argh(positional)]
    dims: Vec<String>,
}

impl Args {
    fn image_size(&self) -> Result<ImageSize, ImageError> {
        match self.dims.as_slice() {
            [] => Ok(DEFAULT_SIZE),
            [width, height] => ImageSize::parse(width, height),
            other => Err(ImageError::InvalidDimensions(format!(
                "expected a width and a height, got {} argument(s)",
                other.len()
            ))),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    let size = args.image_size()?;
    log::debug!("parsed arguments: {args:?}");

    let output = run_pipeline(size, &PipelineConfig::default())?;
    println!("{}", output.report);

    log::info!("total time: {:?}", output.report.total());

    Ok(())
}
