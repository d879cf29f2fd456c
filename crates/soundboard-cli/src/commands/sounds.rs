//! List the sounds on the board.

use super::common::load_board;
use clap::Args;
use soundboard_config::is_factory_sound;
use std::path::Path;

#[derive(Args)]
pub struct SoundsArgs {
    /// Only list sound ids, one per line
    #[arg(short, long)]
    quiet: bool,
}

pub fn run(args: SoundsArgs, config: Option<&Path>) -> anyhow::Result<()> {
    let board = load_board(config)?;
    let sounds = board.sounds();

    if args.quiet {
        for sound in &sounds {
            println!("{}", sound.id);
        }
        return Ok(());
    }

    println!("Sounds");
    println!("======");
    println!();

    if sounds.is_empty() {
        println!("  (none)");
        return Ok(());
    }

    let id_width = sounds.iter().map(|s| s.id.len()).max().unwrap_or(0);
    let label_width = sounds.iter().map(|s| s.label.len()).max().unwrap_or(0);

    for sound in &sounds {
        let user = board.sounds.iter().any(|u| u.id.eq_ignore_ascii_case(&sound.id));
        let origin = match (is_factory_sound(&sound.id), user) {
            (true, false) => "factory",
            (true, true) => "override",
            (false, _) => "user",
        };
        println!(
            "  {:<id_width$}  {:<label_width$}  {:>7.1} Hz  {:>5} ms  ({})",
            sound.id, sound.label, sound.frequency_hz, sound.duration_ms, origin
        );
    }

    println!();
    println!("Play one with: soundboard play <ID>");
    Ok(())
}
