//! battery-monitor-rs: battery level notification daemon for Linux.

mod battery;
mod config;
mod level;
mod monitor;
mod notifier;
mod sound;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "battery-monitor-rs", about = "Battery level notification daemon")]
struct Args {
    /// Path to the YAML config file
    #[arg(default_value = "battery-monitor.yaml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("battery-monitor-rs starting");

    let config_path = config::expand_home(&args.config);
    let config = config::Config::load(&config_path)?;

    let battery = battery::SysfsBattery::discover()?;
    let notifier = notifier::DesktopNotifier::new(&config.app_name)?;

    let mut monitor =
        monitor::BatteryMonitor::new(config, battery, notifier, sound::CommandSoundPlayer);
    monitor.run().await;

    Ok(())
}
