//! Live playback of board sounds and ad-hoc tones.

use super::common::{load_board, wait_for_playback};
use clap::Args;
use soundboard_config::{BoardConfig, validate_frequency, validate_sample_rate, validate_volume};
use soundboard_core::ToneRequest;
use soundboard_io::{CpalBackend, Player};
use std::path::Path;

#[derive(Args)]
pub struct PlayArgs {
    /// Sound id or label (see `soundboard sounds`)
    #[arg(value_name = "SOUND")]
    sound: String,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
pub struct ToneArgs {
    /// Tone frequency in Hz
    #[arg(short, long)]
    freq: f64,

    /// Tone duration in milliseconds
    #[arg(short, long, value_name = "MS")]
    duration: u32,

    #[command(flatten)]
    output: OutputArgs,
}

/// Output options shared by `play` and `tone`.
#[derive(Args)]
pub struct OutputArgs {
    /// Playback volume 0.0 - 1.0 (overrides the config)
    #[arg(long)]
    volume: Option<f32>,

    /// Output device name or partial name (overrides the config)
    #[arg(long)]
    device: Option<String>,

    /// Synthesis sample rate in Hz (overrides the config)
    #[arg(long)]
    sample_rate: Option<u32>,
}

pub fn run(args: PlayArgs, config: Option<&Path>) -> anyhow::Result<()> {
    let board = load_board(config)?;
    let sound = board
        .require_sound(&args.sound)
        .map_err(|e| anyhow::anyhow!("{}. Run `soundboard sounds` to list them.", e))?;

    println!(
        "Playing {} ({} Hz, {} ms)",
        sound.label, sound.frequency_hz, sound.duration_ms
    );
    play_request(sound.request(), &args.output, &board)
}

pub fn run_tone(args: ToneArgs, config: Option<&Path>) -> anyhow::Result<()> {
    validate_frequency("tone", args.freq)?;

    let board = load_board(config)?;
    println!("Playing tone ({} Hz, {} ms)", args.freq, args.duration);
    play_request(ToneRequest::new(args.freq, args.duration), &args.output, &board)
}

fn play_request(
    request: ToneRequest,
    output: &OutputArgs,
    board: &BoardConfig,
) -> anyhow::Result<()> {
    let sample_rate = output.sample_rate.unwrap_or(board.sample_rate);
    let volume = output.volume.unwrap_or(board.volume);
    validate_sample_rate(sample_rate)?;
    validate_volume(volume)?;
    let device = output.device.clone().or_else(|| board.output_device.clone());

    tracing::debug!(sample_rate, volume, device = ?device, "starting playback");

    let mut player = Player::new(CpalBackend::new()).with_device(device);
    let playback = player.play_tone(request, sample_rate, volume)?;
    wait_for_playback(&mut player, &playback)?;

    println!("Done.");
    Ok(())
}
