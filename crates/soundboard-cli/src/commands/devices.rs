//! Audio device listing command.

use clap::Args;
use soundboard_io::{default_output_device, list_output_devices};

#[derive(Args)]
pub struct DevicesArgs {
    /// Only show the default output device
    #[arg(long)]
    default: bool,
}

pub fn run(args: DevicesArgs) -> anyhow::Result<()> {
    if args.default {
        match default_output_device()? {
            Some(device) => println!(
                "{} ({} Hz, {} ch)",
                device.name, device.default_sample_rate, device.channels
            ),
            None => anyhow::bail!("No default output device available"),
        }
        return Ok(());
    }

    let devices = list_output_devices()?;

    println!("Available Output Devices");
    println!("========================");
    println!();

    if devices.is_empty() {
        println!("  (none)");
        return Ok(());
    }

    for (index, device) in devices.iter().enumerate() {
        let marker = if device.is_default { " [default]" } else { "" };
        println!(
            "  {}: {}{} ({} Hz, {} ch)",
            index, device.name, marker, device.default_sample_rate, device.channels
        );
    }

    Ok(())
}
