//! Render a board sound or an ad-hoc tone to a WAV file.

use super::common::{format_bytes, load_board};
use clap::Args;
use soundboard_config::{validate_frequency, validate_sample_rate};
use soundboard_core::ToneRequest;
use soundboard_io::write_container;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct RenderArgs {
    /// Sound id or label (omit to render --freq/--duration instead)
    #[arg(value_name = "SOUND", required_unless_present_all = ["freq", "duration"])]
    sound: Option<String>,

    /// Tone frequency in Hz
    #[arg(short, long, conflicts_with = "sound", requires = "duration")]
    freq: Option<f64>,

    /// Tone duration in milliseconds
    #[arg(short, long, value_name = "MS", conflicts_with = "sound", requires = "freq")]
    duration: Option<u32>,

    /// Output WAV file
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Sample rate in Hz (overrides the config)
    #[arg(long)]
    sample_rate: Option<u32>,
}

pub fn run(args: RenderArgs, config: Option<&Path>) -> anyhow::Result<()> {
    let board = load_board(config)?;
    let sample_rate = args.sample_rate.unwrap_or(board.sample_rate);
    validate_sample_rate(sample_rate)?;

    let (name, request) = match (&args.sound, args.freq, args.duration) {
        (Some(sound), _, _) => {
            let preset = board.require_sound(sound).map_err(|e| anyhow::anyhow!("{}", e))?;
            (preset.label.clone(), preset.request())
        }
        (None, Some(freq), Some(duration)) => {
            validate_frequency("tone", freq)?;
            (format!("{freq} Hz tone"), ToneRequest::new(freq, duration))
        }
        _ => anyhow::bail!("Give a sound name or both --freq and --duration"),
    };

    let wav = request.encode(sample_rate);
    write_container(&args.output, &wav)?;

    let header = wav.header();
    println!("Rendered {} to {}", name, args.output.display());
    println!(
        "  {} samples, {} Hz, {:.3}s, {}",
        header.num_samples(),
        header.sample_rate,
        header.duration_secs(),
        format_bytes(wav.len() as u64)
    );

    Ok(())
}
