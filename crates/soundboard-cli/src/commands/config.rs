//! Board config file management.

use clap::{Args, Subcommand};
use soundboard_config::{BoardConfig, default_config_path};
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the effective config as TOML
    Show,

    /// Print the config file path
    Path,

    /// Persist the playback volume (0.0 - 1.0)
    SetVolume {
        /// New volume
        volume: f32,
    },
}

pub fn run(args: ConfigArgs, config: Option<&Path>) -> anyhow::Result<()> {
    let path = config_path(config);

    match args.command {
        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file '{}' already exists. Use --force to overwrite.",
                    path.display()
                );
            }
            BoardConfig::default()
                .save(&path)
                .map_err(|e| anyhow::anyhow!("{}", e))?;
            println!("Wrote {}", path.display());
        }
        ConfigCommand::Show => {
            let board = BoardConfig::load_or_default(config).map_err(|e| anyhow::anyhow!("{}", e))?;
            print!("{}", board.to_toml().map_err(|e| anyhow::anyhow!("{}", e))?);
        }
        ConfigCommand::Path => {
            let exists = if path.exists() { "" } else { " (not created)" };
            println!("{}{}", path.display(), exists);
        }
        ConfigCommand::SetVolume { volume } => {
            let board = if path.is_file() {
                BoardConfig::load(&path).map_err(|e| anyhow::anyhow!("{}", e))?
            } else {
                BoardConfig::default()
            };
            let board = board.with_volume(volume);
            board.validate().map_err(|e| anyhow::anyhow!("{}", e))?;
            board.save(&path).map_err(|e| anyhow::anyhow!("{}", e))?;
            println!("Volume set to {} in {}", volume, path.display());
        }
    }

    Ok(())
}

fn config_path(config: Option<&Path>) -> PathBuf {
    config.map_or_else(default_config_path, Path::to_path_buf)
}
