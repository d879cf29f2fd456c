//! Soundboard CLI - a command-line sound board.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "soundboard")]
#[command(author, version, about = "Synthesized tone sound board", long_about = None)]
struct Cli {
    /// Board config file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the sounds on the board
    Sounds(commands::sounds::SoundsArgs),

    /// Play a sound from the board
    Play(commands::play::PlayArgs),

    /// Play an ad-hoc tone
    Tone(commands::play::ToneArgs),

    /// Render a sound or tone to a WAV file
    Render(commands::render::RenderArgs),

    /// Show WAV file information
    Info(commands::info::InfoArgs),

    /// List audio output devices
    Devices(commands::devices::DevicesArgs),

    /// Manage the board config file
    Config(commands::config::ConfigArgs),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Sounds(args) => commands::sounds::run(args, config),
        Commands::Play(args) => commands::play::run(args, config),
        Commands::Tone(args) => commands::play::run_tone(args, config),
        Commands::Render(args) => commands::render::run(args, config),
        Commands::Info(args) => commands::info::run(args),
        Commands::Devices(args) => commands::devices::run(args),
        Commands::Config(args) => commands::config::run(args, config),
    }
}
