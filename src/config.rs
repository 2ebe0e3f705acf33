use clap::Parser;
use std::path::PathBuf;

use crate::sink::OutputSink;
use crate::{find_keyboards, open_keyboard, KeyboardDevice, KeystreamResult};

/// Reconstruct the text typed on every keyboard attached to this host.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "keystream", version, about)]
pub struct Config {
    /// Append the text to this file instead of writing it to stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Directory scanned for keyboard devices
    #[arg(long, default_value = "/dev/input")]
    pub input_dir: PathBuf,

    /// Monitor this device instead of auto-detecting keyboards (repeatable)
    #[arg(long = "device", short = 'd')]
    pub devices: Vec<PathBuf>,

    /// Exit once every device has been closed instead of idling until terminated
    #[arg(long)]
    pub exit_when_idle: bool,

    /// Don't refuse to run without superuser privileges
    #[arg(long)]
    pub allow_unprivileged: bool,
}

impl Config {
    /// Open the configured output sink.
    pub fn open_sink(&self) -> KeystreamResult<OutputSink> {
        match &self.output {
            Some(path) => OutputSink::file(path),
            None => Ok(OutputSink::stdout()),
        }
    }

    /// Open the explicitly configured devices, or auto-detect the keyboards if there are none.
    ///
    /// An explicitly configured device that can't be opened is an error.
    pub fn open_devices(&self) -> KeystreamResult<Vec<KeyboardDevice>> {
        if self.devices.is_empty() {
            return find_keyboards(&self.input_dir);
        }

        self.devices.iter().map(open_keyboard).collect()
    }
}
