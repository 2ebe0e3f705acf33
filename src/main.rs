use anyhow::Context;
use clap::Parser;
use tokio::signal::unix::{signal, SignalKind};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use keystream::{Config, KeystreamError, Monitor};

#[tokio::main]
async fn main() {
    // Log to stderr, stdout may be carrying the captured text.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    if let Err(err) = run(config).await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    if !config.allow_unprivileged && unsafe { libc::geteuid() } != 0 {
        return Err(KeystreamError::NotPrivileged.into());
    }

    let keyboards = config.open_devices().context("failed to open input devices")?;

    if keyboards.is_empty() {
        return Err(KeystreamError::NoDevicesFound.into());
    }

    info!("detected {} keyboard-like devices", keyboards.len());

    let sink = config.open_sink().context("failed to open the output")?;
    let mut handle = Monitor::new(sink).start(keyboards)?;

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::select! {
        _ = sigterm.recv() => info!("received SIGTERM"),
        _ = sigint.recv() => info!("received SIGINT"),
        _ = handle.wait_idle(), if config.exit_when_idle => {
            info!("all devices closed, exiting");
            return Ok(());
        }
    }

    let exits = handle.stop().await;
    info!("stopped {} device readers", exits.len());

    Ok(())
}
