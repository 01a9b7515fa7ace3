//! CLI entry point for the pixel art rarity scoring tool

use clap::Parser;
use pixelforge::io::cli::{Cli, FileProcessor};

fn main() -> pixelforge::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
