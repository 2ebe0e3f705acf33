//! This crate reconstructs the text typed on the keyboards of a Linux host.
//!
//! The installed [`KeyboardDevice`]s can be detected using [`find_keyboards`]. [`KeyboardDevice`]
//! implements [`Stream`], where each element is a [`KeyEvent`]. A [`Monitor`] reads several
//! devices at once, translating their events into text with a shared shift/caps lock state, and
//! appends the text to an [`OutputSink`].
//!
//! # Example
//!
//! Print everything typed on any keyboard to stdout. Note the input devices are usually only
//! readable by root.
//!
//! ```no_run
//! use keystream::{find_keyboards, KeystreamError, Monitor, OutputSink};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), KeystreamError> {
//!     let keyboards = find_keyboards("/dev/input")?;
//!     let mut handle = Monitor::new(OutputSink::stdout()).start(keyboards)?;
//!
//!     handle.wait_idle().await;
//!
//!     Ok(())
//! }
//! ```

#[cfg(not(target_os = "linux"))]
compile_error!("This crate only works on Linux");

mod config;
mod error;
mod key_code;
mod keyboard;
mod modifiers;
mod monitor;
mod reader;
mod sink;
mod translate;

pub use config::Config;
pub use error::KeystreamError;
pub use key_code::KeyCode;
pub use keyboard::{KeyEvent, KeyEventCause};
pub use modifiers::{ModifierState, Modifiers};
pub use monitor::{KeyEventSource, Monitor, MonitorHandle};
pub use reader::{DeviceReader, ReaderExit};
pub use sink::OutputSink;
pub use translate::{render, translate, Fragment, Translation};

use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use pin_project::pin_project;

use keyboard::{find_keyboard_devices, Keyboard};

pub type KeystreamResult<T> = Result<T, KeystreamError>;

/// Auto-detect the keyboard devices in `input_dir` (usually `/dev/input`).
pub fn find_keyboards(input_dir: impl AsRef<Path>) -> KeystreamResult<Vec<KeyboardDevice>> {
    let keyboards = find_keyboard_devices(input_dir.as_ref())?
        .into_iter()
        .map(KeyboardDevice)
        .collect();

    Ok(keyboards)
}

/// Open the input device at `path`, without checking whether it looks like a keyboard.
pub fn open_keyboard(path: impl AsRef<Path>) -> KeystreamResult<KeyboardDevice> {
    Keyboard::open(path.as_ref()).map(KeyboardDevice)
}

#[pin_project]
#[derive(Debug)]
pub struct KeyboardDevice(#[pin] Keyboard);

impl KeyboardDevice {
    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn path(&self) -> &Path {
        &self.0.path
    }
}

impl Stream for KeyboardDevice {
    type Item = KeystreamResult<KeyEvent>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().0.poll_next(cx)
    }
}

impl KeyEventSource for KeyboardDevice {
    fn name(&self) -> &str {
        KeyboardDevice::name(self)
    }
}
