// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "corridor-gen")]
#[command(about = "Procedural curved-corridor scene generator", long_about = None)]
pub struct Cli {
    /// JSON config file; missing fields fall back to defaults
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Where to write the generated scene
    #[arg(long = "output", default_value = "corridor_scene.json")]
    pub output: PathBuf,

    /// Override the corridor block count
    #[arg(long = "blocks")]
    pub blocks: Option<usize>,

    /// Override the fly-through duration in seconds
    #[arg(long = "duration")]
    pub duration: Option<f32>,

    /// Pretty-print the output JSON
    #[arg(long = "pretty", default_value = "false")]
    pub pretty: bool,
}
