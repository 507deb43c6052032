//! CLI entry point for halftoning raw grayscale and RGB images

use clap::Parser;
use halftone::io::cli::{Cli, HalftoneProcessor};

fn main() -> halftone::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut processor = HalftoneProcessor::new(cli);
    processor.process()?;
    Ok(())
}
