//! Shared CLI helpers used across multiple commands.

use soundboard_config::BoardConfig;
use soundboard_io::{AudioBackend, Playback, Player};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Extra time after the nominal end before giving up on the device.
const FINISH_GRACE: Duration = Duration::from_secs(2);

/// Time for the device to drain its last buffer before the stream is dropped.
///
/// The finished flag is raised when the last sample is handed to the device
/// buffer, not when it is heard. Default buffers on the supported hosts hold
/// well under this much audio.
const DRAIN_TIME: Duration = Duration::from_millis(150);

/// Load the board config from `path`, or the user default.
pub fn load_board(path: Option<&Path>) -> anyhow::Result<BoardConfig> {
    BoardConfig::load_or_default(path).map_err(|e| anyhow::anyhow!("{}", e))
}

/// Block until `playback` finishes, stopping early on Ctrl+C.
pub fn wait_for_playback<B: AudioBackend>(
    player: &mut Player<B>,
    playback: &Playback,
) -> anyhow::Result<()> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
    })?;

    let limit = playback.duration() + FINISH_GRACE;
    let started = Instant::now();

    while !playback.wait_timeout(Duration::from_millis(50)) {
        if interrupted.load(Ordering::SeqCst) {
            println!("\nStopping...");
            player.stop();
            return Ok(());
        }
        if started.elapsed() > limit {
            tracing::warn!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                "device stopped pulling audio, giving up"
            );
            player.stop();
            return Ok(());
        }
    }

    std::thread::sleep(DRAIN_TIME);
    player.stop();
    Ok(())
}

/// Format a byte count for display.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
