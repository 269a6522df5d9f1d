use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;

use corridor_gen::cli::Cli;
use corridor_gen::config::CorridorConfig;
use corridor_gen::scene;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CorridorConfig::from_file(path)?,
        None => CorridorConfig::default(),
    };
    if let Some(blocks) = cli.blocks {
        config.total_blocks = blocks;
    }
    if let Some(duration) = cli.duration {
        config.duration_s = duration;
    }

    let scene = scene::generate(&config)?;

    let file = File::create(&cli.output)
        .context(format!("Failed to create output file: {:?}", cli.output))?;
    let writer = BufWriter::new(file);
    if cli.pretty {
        serde_json::to_writer_pretty(writer, &scene)
            .context("Failed to serialize scene")?;
    } else {
        serde_json::to_writer(writer, &scene).context("Failed to serialize scene")?;
    }

    println!("Scene written to {:?}", cli.output);
    Ok(())
}
