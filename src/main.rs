use anyhow::Result;
use clap::Parser;

/// Read SMC temperature sensors and print them color-coded by threshold.
#[derive(Parser)]
#[command(name = "smc-temperature")]
struct Args {
    /// Print readings with one decimal place
    #[arg(short = 'f')]
    fractional: bool,

    /// Blink the case indicator until interrupted instead of reading sensors
    #[arg(long)]
    blink: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    run(&args)
}

#[cfg(target_os = "macos")]
fn run(args: &Args) -> Result<()> {
    use anyhow::Context;
    use smc_temperature::iokit::IoKitController;
    use smc_temperature::sensors::{SENSOR_TABLE, is_separator};
    use smc_temperature::{BatchValueReader, SensorKey};

    let reader = BatchValueReader::new(IoKitController::new());

    if args.blink {
        return blink(&reader);
    }

    let keys = SENSOR_TABLE
        .iter()
        .filter(|entry| !is_separator(entry))
        .map(|entry| SensorKey::new(entry.1))
        .collect::<Result<Vec<_>, _>>()?;
    let readings = reader.read_all(&keys)?;

    let prec = if args.fractional { 1 } else { 0 };
    let mut remaining = readings.iter();
    for entry in SENSOR_TABLE {
        if is_separator(entry) {
            println!();
            continue;
        }
        let reading = remaining
            .next()
            .context("sensor table and readings out of step")?;
        print_row(entry.0, reading, prec);
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn blink(
    reader: &smc_temperature::BatchValueReader<smc_temperature::iokit::IoKitController>,
) -> Result<()> {
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;
    use std::time::Duration;

    let stop = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGTERM, stop.clone())?;
    signal_hook::flag::register(signal_hook::consts::SIGINT, stop.clone())?;

    tracing::info!("blinking case indicator, interrupt to stop");
    reader.blink_indicator(&stop, Duration::from_millis(100))?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn print_row(name: &str, reading: &smc_temperature::Reading, prec: usize) {
    use crossterm::style::Stylize;

    match reading {
        Ok(value) => {
            let line = format!("{name}: {value:.prec$}°C");
            let degrees = *value as i32;
            if name.contains("Battery") && degrees >= 40 {
                println!("{}", line.yellow());
            } else if degrees >= 100 {
                println!("{}", line.magenta());
            } else if degrees >= 90 {
                println!("{}", line.red());
            } else if degrees >= 80 {
                println!("{}", line.yellow());
            } else if degrees <= 15 {
                println!("{}", line.cyan());
            } else {
                println!("{line}");
            }
        }
        Err(err) => println!("{}", format!("{name}: unavailable ({err})").dark_grey()),
    }
}

#[cfg(not(target_os = "macos"))]
fn run(_args: &Args) -> Result<()> {
    anyhow::bail!("the SMC is only reachable through IOKit on macOS")
}
