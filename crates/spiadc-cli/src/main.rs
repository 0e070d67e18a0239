// crates/spiadc-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "spiadc-cli")]
#[command(about = "Daisy-chained 24-bit ADC acquisition CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read frames from a device or file, decode and rescale every channel
    Acquire(cmd::acquire::AcquireArgs),

    /// Decode a capture file (.spc) through the same pipeline
    Replay(cmd::replay::ReplayArgs),

    /// Inspect a capture file (magic/crc, frame shape, counts)
    Inspect(cmd::inspect::InspectArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Acquire(args) => cmd::acquire::run(args),
        Commands::Replay(args) => cmd::replay::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
    }
}
