#[macro_use]
extern crate log;

use clap::Parser;
use renderkit_core::common::Float;
use renderkit_post::transform_depth;

/// Command line options.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Options {
    /// Path to the depth image to process.
    #[clap(value_name = "FILE", help = "Depth image to process.")]
    image_file: String,

    /// Path to the transformed output image.
    #[clap(
        long = "outfile",
        short = 'o',
        value_name = "FILE",
        help = "Write the transformed image to the given filename."
    )]
    output_file: String,

    /// Field of view of the camera the depth image was rendered with.
    #[clap(
        long = "fov",
        value_name = "ANGLE",
        help = "Field of view angle of the camera used for the depth render."
    )]
    fov: Float,
}

fn main() {
    // Initialize `env_logger`.
    env_logger::init();

    let options = Options::parse();

    if let Err(e) = transform_depth(&options.image_file, &options.output_file, options.fov) {
        error!("{e}");
        std::process::exit(1);
    }
}
