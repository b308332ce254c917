use anyhow::Result;
use clap::{Parser, Subcommand};
use palign::align::AlignMode;
use palign::input::AlignArgs;
use palign::run;

#[derive(Parser)]
#[command(name = "palign")]
#[command(version = "0.1.0")]
#[command(about = "Pairwise global/local sequence alignment", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// End-to-end alignment (Needleman-Wunsch)
    Global(AlignArgs),

    /// Best-scoring local alignment (Smith-Waterman)
    Local(AlignArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Global(args) => {
            run::run(args, AlignMode::Global)?;
        }
        Commands::Local(args) => {
            run::run(args, AlignMode::Local)?;
        }
    }
    Ok(())
}
