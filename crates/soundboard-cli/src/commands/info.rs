//! WAV file information command.

use super::common::format_bytes;
use clap::Args;
use soundboard_core::{HEADER_LEN, WavHeader};
use soundboard_io::{WavFormat, read_wav_info};
use std::io::Read;
use std::path::PathBuf;

#[derive(Args)]
pub struct InfoArgs {
    /// WAV file to inspect
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let info = read_wav_info(&args.file)?;
    let metadata = std::fs::metadata(&args.file)?;

    let format_str = match info.format {
        WavFormat::Pcm => "PCM",
        WavFormat::IeeeFloat => "IEEE Float",
    };
    let channels_str = match info.channels {
        1 => "Mono".to_string(),
        2 => "Stereo".to_string(),
        n => format!("{n} channels"),
    };

    println!("File:        {}", args.file.display());
    println!("Format:      {} {}-bit", format_str, info.bits_per_sample);
    println!("Channels:    {}", channels_str);
    println!("Sample Rate: {} Hz", info.sample_rate);
    println!("Duration:    {:.3}s", info.duration_secs);
    println!("Frames:      {}", info.num_frames);
    println!("File Size:   {}", format_bytes(metadata.len()));
    println!("Layout:      {}", describe_layout(&args.file)?);

    Ok(())
}

/// Report whether the file uses the canonical 44-byte header layout.
fn describe_layout(path: &std::path::Path) -> anyhow::Result<String> {
    let mut head = Vec::with_capacity(HEADER_LEN);
    std::fs::File::open(path)?
        .take(HEADER_LEN as u64)
        .read_to_end(&mut head)?;

    Ok(match WavHeader::parse(&head) {
        Ok(_) => "canonical 44-byte header".to_string(),
        Err(e) => format!("extended ({e})"),
    })
}
