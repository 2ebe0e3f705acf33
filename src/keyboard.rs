pub(crate) mod device;
pub(crate) mod event_codes;

use crate::error::KeystreamError;
use crate::key_code::KeyCode;
use crate::KeystreamResult;
use chrono::{DateTime, Utc};
use event_codes::*;
use futures::{ready, Stream};
use std::collections::VecDeque;
use std::convert::TryFrom;
use std::fs::File;
use std::os::fd::AsRawFd;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::unix::AsyncFd;
use tracing::debug;

use device::EventDecoder;
pub(crate) use device::find_keyboard_devices;

/// A keyboard device.
///
/// The device is read through its non-blocking file descriptor, which is closed when the
/// `Keyboard` is dropped.
#[derive(Debug)]
pub(crate) struct Keyboard {
    /// The name of the device.
    pub(crate) name: String,
    /// The path of the input device (e.g. `/dev/input/event0`).
    pub(crate) path: PathBuf,
    /// The file descriptor of the open input device file.
    async_fd: AsyncFd<File>,
    /// Events read from the device that haven't been yielded yet.
    pending: VecDeque<KeyEvent>,
    /// Decoding state carried between batches.
    decoder: EventDecoder,
    /// Set once the device reported an error or the end of the stream.
    done: bool,
}

impl TryFrom<&Path> for Keyboard {
    type Error = KeystreamError;

    /// Open the device at `path`, failing if it doesn't look like a keyboard.
    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let file = open(path)?;
        let flags = device::read_event_flags(&file)?;

        if !has_keyboard_flags(flags) {
            return Err(KeystreamError::NotAKeyboard(path.into()));
        }

        let name = device::read_name(&file)?;

        Keyboard::from_file(name, path.into(), file)
    }
}

impl Keyboard {
    /// Open the device at `path` without checking whether it is a keyboard.
    pub(crate) fn open(path: &Path) -> KeystreamResult<Self> {
        let file = open(path)?;
        let name = device::read_name(&file).unwrap_or_else(|_| path.display().to_string());

        Keyboard::from_file(name, path.into(), file)
    }

    pub(crate) fn from_file(name: String, path: PathBuf, file: File) -> KeystreamResult<Self> {
        device::set_nonblocking(&file)?;

        Ok(Keyboard {
            name,
            path,
            async_fd: AsyncFd::new(file)?,
            pending: VecDeque::new(),
            decoder: EventDecoder::default(),
            done: false,
        })
    }

    fn read_error(&self, source: std::io::Error) -> KeystreamError {
        KeystreamError::DeviceRead {
            device: self.path.clone(),
            source,
        }
    }
}

fn open(path: &Path) -> KeystreamResult<File> {
    File::open(path).map_err(|source| KeystreamError::DeviceUnavailable {
        path: path.into(),
        source,
    })
}

/// A key event (EV_KEY).
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// The timestamp of the event.
    pub ts: DateTime<Utc>,
    /// The action that triggered the event.
    pub cause: KeyEventCause,
    /// The key code of the key that triggered the event.
    pub code: KeyCode,
}

impl KeyEvent {
    /// Create a `KeyEvent` timestamped with the current time.
    pub fn new(cause: KeyEventCause, code: KeyCode) -> Self {
        Self {
            ts: Utc::now(),
            cause,
            code,
        }
    }

    pub fn press(code: KeyCode) -> Self {
        Self::new(KeyEventCause::Press, code)
    }

    pub fn release(code: KeyCode) -> Self {
        Self::new(KeyEventCause::Release, code)
    }

    pub fn repeat(code: KeyCode) -> Self {
        Self::new(KeyEventCause::Repeat, code)
    }
}

/// The reason a `KeyEvent` fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventCause {
    /// The key was released.
    Release,
    /// The key was pressed.
    Press,
    /// The key is being held down (autorepeat).
    Repeat,
}

impl TryFrom<&libc::input_event> for KeyEvent {
    type Error = KeystreamError;

    fn try_from(ev: &libc::input_event) -> Result<Self, Self::Error> {
        // Only EV_KEY carries keystrokes
        if ev.type_ != EV_KEY as u16 {
            return Err(KeystreamError::UnsupportedEventType(ev.type_));
        }

        let cause = match ev.value {
            EV_KEY_RELEASE => KeyEventCause::Release,
            EV_KEY_PRESS => KeyEventCause::Press,
            EV_KEY_REPEAT => KeyEventCause::Repeat,
            n => {
                return Err(KeystreamError::InvalidKeyEvent(format!(
                    "invalid value for EV_KEY: {n}"
                )))
            }
        };

        let ts = u32::try_from(ev.time.tv_usec)
            .ok()
            .and_then(|usec| usec.checked_mul(1000))
            .and_then(|nsec| DateTime::<Utc>::from_timestamp(i64::from(ev.time.tv_sec), nsec))
            .ok_or(KeystreamError::InvalidTimestamp(
                ev.time.tv_sec,
                ev.time.tv_usec,
            ))?;

        Ok(Self {
            ts,
            cause,
            code: KeyCode::try_from(ev.code)?,
        })
    }
}

impl Stream for Keyboard {
    type Item = KeystreamResult<KeyEvent>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        loop {
            if let Some(ev) = this.pending.pop_front() {
                return Poll::Ready(Some(Ok(ev)));
            }

            if this.done {
                return Poll::Ready(None);
            }

            let mut guard = match ready!(this.async_fd.poll_read_ready(cx)) {
                Ok(guard) => guard,
                Err(e) => {
                    this.done = true;
                    return Poll::Ready(Some(Err(this.read_error(e))));
                }
            };

            let result = guard.try_io(|inner| device::read_input_events(inner.as_raw_fd()));

            match result {
                Ok(Ok(events)) if events.is_empty() => this.done = true,
                Ok(Ok(events)) => {
                    let file = this.async_fd.get_ref();
                    let decoded = this.decoder.decode(&events, || resync_shift(file));

                    this.pending.extend(decoded);
                }
                Ok(Err(e)) => {
                    drop(guard);
                    this.done = true;
                    return Poll::Ready(Some(Err(this.read_error(e))));
                }
                // Spurious wakeup, wait for the device to become readable again
                Err(_would_block) => continue,
            }
        }
    }
}

/// Rebuild the shift state of a device after the kernel dropped some of its events.
///
/// A shift release may have been lost, so the current key state is queried and reported as a
/// shift press or release.
fn resync_shift(file: &File) -> Option<KeyEvent> {
    match device::read_key_state(file) {
        Ok(state) => {
            let held = [KeyCode::LeftShift, KeyCode::RightShift]
                .iter()
                .any(|code| is_key_down(&state, *code));

            Some(if held {
                KeyEvent::press(KeyCode::LeftShift)
            } else {
                KeyEvent::release(KeyCode::LeftShift)
            })
        }
        Err(err) => {
            debug!(%err, "failed to read the key state");
            None
        }
    }
}

fn is_key_down(state: &[u8], code: KeyCode) -> bool {
    let code = code as usize;

    state
        .get(code / 8)
        .map_or(false, |byte| byte & (1 << (code % 8)) != 0)
}

/// Check whether the specified `flags` indicate the device is a keyboard.
///
/// Keyboards report key events but none of the event types of pointers, tablets, switches or
/// force-feedback devices.
fn has_keyboard_flags(flags: libc::c_ulong) -> bool {
    const REQUIRED_FLAGS: libc::c_ulong = 1 << EV_KEY;
    const EXCLUDED_FLAGS: libc::c_ulong = (1 << EV_REL)
        | (1 << EV_ABS)
        | (1 << EV_SW)
        | (1 << EV_FF)
        | (1 << EV_PWR)
        | (1 << EV_FF_STATUS);

    (flags & REQUIRED_FLAGS) == REQUIRED_FLAGS && (flags & EXCLUDED_FLAGS) == 0
}
