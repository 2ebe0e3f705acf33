use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeystreamError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("device {path} is unavailable: {source}")]
    DeviceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("not a keyboard device: {0}")]
    NotAKeyboard(PathBuf),
    #[error("no keyboard devices found")]
    NoDevicesFound,
    #[error("unsupported event type: {0}")]
    UnsupportedEventType(u16),
    #[error("invalid key event: {0}")]
    InvalidKeyEvent(String),
    #[error("invalid timestamp: {0}s {1}us")]
    InvalidTimestamp(libc::time_t, libc::suseconds_t),
    #[error("unknown key code: {0}")]
    UnknownKeyCode(u16),
    #[error("failed to read from {device}: {source}")]
    DeviceRead {
        device: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write to the output sink: {0}")]
    SinkWrite(#[source] io::Error),
    #[error("no active devices remain")]
    NoActiveDevices,
    #[error("superuser privileges are required to read input devices")]
    NotPrivileged,
}
