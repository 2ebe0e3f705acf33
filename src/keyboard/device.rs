use crate::error::KeystreamError;
use crate::keyboard::event_codes::{EV_SYN, KEY_MAX, SYN_DROPPED, SYN_REPORT};
use crate::keyboard::{KeyEvent, Keyboard};
use crate::KeystreamResult;
use std::convert::TryFrom;
use std::fs::{self, File};
use std::io;
use std::mem;
use std::os::fd::{AsRawFd, RawFd};
use std::os::unix::fs::FileTypeExt;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

const IOC_NRBITS: libc::c_ulong = 8;
const IOC_TYPEBITS: libc::c_ulong = 8;
const IOC_SIZEBITS: libc::c_ulong = 14;
const IOC_NRSHIFT: libc::c_ulong = 0;
const IOC_TYPESHIFT: libc::c_ulong = IOC_NRSHIFT + IOC_NRBITS;
const IOC_SIZESHIFT: libc::c_ulong = IOC_TYPESHIFT + IOC_TYPEBITS;
const IOC_DIRSHIFT: libc::c_ulong = IOC_SIZESHIFT + IOC_SIZEBITS;
const IOC_READ: libc::c_ulong = 2;

/// Decodes the batches of events read from a device.
///
/// When the kernel's event buffer overflows it reports `SYN_DROPPED`. Every event up to and
/// including the next `SYN_REPORT` belongs to an incomplete report and is discarded. The device
/// is then resynchronized through the `resync` callback passed to [`EventDecoder::decode`],
/// whose event (if any) is yielded in place of the discarded ones.
#[derive(Debug, Default)]
pub(crate) struct EventDecoder {
    dropping: bool,
}

impl EventDecoder {
    /// Decode the `EV_KEY` events of a batch, dropping everything else.
    pub(crate) fn decode(
        &mut self,
        events: &[libc::input_event],
        mut resync: impl FnMut() -> Option<KeyEvent>,
    ) -> Vec<KeyEvent> {
        let mut decoded = Vec::new();

        for e in events {
            if e.type_ == EV_SYN as u16 {
                match e.code {
                    SYN_DROPPED => {
                        debug!("the kernel dropped events, discarding until the next report");
                        self.dropping = true;
                    }
                    SYN_REPORT if self.dropping => {
                        self.dropping = false;
                        decoded.extend(resync());
                    }
                    _ => {}
                }

                continue;
            }

            if self.dropping {
                continue;
            }

            match KeyEvent::try_from(e) {
                Ok(ev) => decoded.push(ev),
                Err(KeystreamError::UnsupportedEventType(_)) => {}
                Err(err) => trace!(%err, "dropping key event"),
            }
        }

        decoded
    }
}

/// Read a batch of [`libc::input_event`s](libc::input_event) from the specified file descriptor.
///
/// An empty batch means the end of the stream was reached.
pub(crate) fn read_input_events(fd: RawFd) -> io::Result<Vec<libc::input_event>> {
    const MAX_INPUT_EV: usize = 128;

    let mut input_events = [mem::MaybeUninit::<libc::input_event>::uninit(); MAX_INPUT_EV];

    let n = unsafe {
        libc::read(
            fd,
            input_events.as_mut_ptr() as *mut _,
            MAX_INPUT_EV * mem::size_of::<libc::input_event>(),
        )
    };

    if n < 0 {
        return Err(io::Error::last_os_error());
    }

    let n = (n as usize) / mem::size_of::<libc::input_event>();

    // The first n elements of the array are initialized:
    Ok(input_events[..n]
        .iter()
        .map(|e| unsafe { e.assume_init() })
        .collect())
}

/// Find all the keyboard-like devices in `input_dir`.
///
/// Devices that can't be opened or don't look like keyboards are skipped.
pub(crate) fn find_keyboard_devices(input_dir: &Path) -> KeystreamResult<Vec<Keyboard>> {
    Ok(find_event_devices(input_dir)?
        .into_iter()
        .filter_map(|path| match Keyboard::try_from(path.as_path()) {
            Ok(kb) => {
                debug!(device = %path.display(), name = %kb.name, "found keyboard");
                Some(kb)
            }
            Err(err) => {
                debug!(device = %path.display(), %err, "skipping device");
                None
            }
        })
        .collect())
}

/// Set the `O_NONBLOCK` flag for the specified file descriptor.
pub(crate) fn set_nonblocking(f: &File) -> KeystreamResult<()> {
    let flags = unsafe { libc::fcntl(f.as_raw_fd(), libc::F_GETFL) };

    if flags < 0 {
        return Err(io::Error::last_os_error().into());
    }

    let res = unsafe { libc::fcntl(f.as_raw_fd(), libc::F_SETFL, flags | libc::O_NONBLOCK) };

    if res < 0 {
        return Err(io::Error::last_os_error().into());
    }

    Ok(())
}

/// Read the name of the specified keyboard device using the `EVIOCGNAME` ioctl.
pub(crate) fn read_name(f: &File) -> KeystreamResult<String> {
    const DEVICE_NAME_MAX_LEN: usize = 512;

    let mut device_name = [0u8; DEVICE_NAME_MAX_LEN];

    let eviocgname = (IOC_READ << IOC_DIRSHIFT)
        | (('E' as libc::c_ulong) << IOC_TYPESHIFT)
        | (0x06 << IOC_NRSHIFT)
        | ((device_name.len() as libc::c_ulong) << IOC_SIZESHIFT);

    ioctl(
        f.as_raw_fd(),
        eviocgname,
        device_name.as_mut_ptr() as *mut libc::c_ulong,
    )?;

    let len = device_name
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(device_name.len());

    Ok(String::from_utf8_lossy(&device_name[..len]).into())
}

/// Read the event types supported by the specified device using the `EVIOCGBIT` ioctl.
pub(crate) fn read_event_flags(f: &File) -> KeystreamResult<libc::c_ulong> {
    let mut ev_flags: libc::c_ulong = 0;

    let eviocgbit = (IOC_READ << IOC_DIRSHIFT)
        | (('E' as libc::c_ulong) << IOC_TYPESHIFT)
        | (0x20 << IOC_NRSHIFT)
        | (((mem::size_of::<libc::c_ulong>()) as libc::c_ulong) << IOC_SIZESHIFT);

    ioctl(
        f.as_raw_fd(),
        eviocgbit,
        (&mut ev_flags) as *mut libc::c_ulong,
    )?;

    Ok(ev_flags)
}

/// The size of the key state bitmask returned by `EVIOCGKEY`.
pub(crate) const KEY_STATE_LEN: usize = KEY_MAX as usize / 8 + 1;

/// Read which keys are currently held down using the `EVIOCGKEY` ioctl.
///
/// Bit `n` of the returned mask is set if the key with code `n` is down.
pub(crate) fn read_key_state(f: &File) -> KeystreamResult<[u8; KEY_STATE_LEN]> {
    let mut state = [0u8; KEY_STATE_LEN];

    let eviocgkey = (IOC_READ << IOC_DIRSHIFT)
        | (('E' as libc::c_ulong) << IOC_TYPESHIFT)
        | (0x18 << IOC_NRSHIFT)
        | ((state.len() as libc::c_ulong) << IOC_SIZESHIFT);

    ioctl(
        f.as_raw_fd(),
        eviocgkey,
        state.as_mut_ptr() as *mut libc::c_ulong,
    )?;

    Ok(state)
}

/// Get the `event*` character devices from `input_dir`, sorted by path.
fn find_event_devices(input_dir: &Path) -> KeystreamResult<Vec<PathBuf>> {
    let mut devices = fs::read_dir(input_dir)?
        .filter_map(|entry| {
            let entry = entry.ok()?;

            if !entry.file_name().to_string_lossy().starts_with("event") {
                return None;
            }

            let file_type = fs::metadata(entry.path()).ok()?.file_type();

            if file_type.is_char_device() {
                Some(entry.path())
            } else {
                None
            }
        })
        .collect::<Vec<_>>();

    devices.sort();

    Ok(devices)
}

fn ioctl(fd: RawFd, request: libc::c_ulong, buf: *mut libc::c_ulong) -> KeystreamResult<()> {
    let res = unsafe { libc::ioctl(fd, request as _, buf) };

    if res < 0 {
        Err(io::Error::last_os_error().into())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key_code::KeyCode;
    use crate::keyboard::event_codes::{EV_KEY, EV_MSC};
    use crate::keyboard::KeyEventCause;
    use crate::translate::{render, Fragment};
    use crate::Modifiers;

    fn input_event(type_: libc::c_ulong, code: u16, value: i32) -> libc::input_event {
        libc::input_event {
            time: libc::timeval {
                tv_sec: 1_700_000_000,
                tv_usec: 250,
            },
            type_: type_ as u16,
            code,
            value,
        }
    }

    #[test]
    fn decode_keeps_only_key_events() {
        let batch = [
            input_event(EV_MSC, 4, 0x70004),
            input_event(EV_KEY, KeyCode::A as u16, 1),
            input_event(EV_SYN, 0, 0),
            input_event(EV_KEY, 84, 1),
            input_event(EV_KEY, KeyCode::A as u16, 0),
        ];

        let events = EventDecoder::default().decode(&batch, || None);

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].code, KeyCode::A);
        assert_eq!(events[0].cause, KeyEventCause::Press);
        assert_eq!(events[1].cause, KeyEventCause::Release);
    }

    #[test]
    fn decode_extended_key_codes() {
        let codes = [
            (152, "SCREENLOCK"),
            (179, "KPLEFTPAREN"),
            (182, "REDO"),
            (248, "MICMUTE"),
            (0x1d0, "FN"),
        ];
        let batch = codes
            .iter()
            .map(|(code, _)| input_event(EV_KEY, *code, 1))
            .collect::<Vec<_>>();

        let events = EventDecoder::default().decode(&batch, || None);

        assert_eq!(events.len(), codes.len());

        for (ev, (code, name)) in events.iter().zip(codes) {
            assert_eq!(ev.code as u16, code);
            assert_eq!(
                render(ev.code, Modifiers::default()),
                Fragment::Symbol(name)
            );
        }
    }

    #[test]
    fn decode_discards_the_report_after_dropped_events() {
        let batch = [
            input_event(EV_KEY, KeyCode::A as u16, 1),
            input_event(EV_SYN, SYN_REPORT, 0),
            input_event(EV_SYN, SYN_DROPPED, 0),
            input_event(EV_KEY, KeyCode::B as u16, 1),
            input_event(EV_KEY, KeyCode::LeftShift as u16, 0),
            input_event(EV_SYN, SYN_REPORT, 0),
            input_event(EV_KEY, KeyCode::C as u16, 1),
        ];
        let mut resyncs = 0;

        let events = EventDecoder::default().decode(&batch, || {
            resyncs += 1;
            Some(KeyEvent::release(KeyCode::LeftShift))
        });

        let events = events
            .into_iter()
            .map(|ev| (ev.cause, ev.code))
            .collect::<Vec<_>>();

        assert_eq!(resyncs, 1);
        assert_eq!(
            events,
            vec![
                (KeyEventCause::Press, KeyCode::A),
                (KeyEventCause::Release, KeyCode::LeftShift),
                (KeyEventCause::Press, KeyCode::C),
            ]
        );
    }

    #[test]
    fn dropped_events_are_discarded_across_batches() {
        let mut decoder = EventDecoder::default();

        let first = decoder.decode(
            &[
                input_event(EV_SYN, SYN_DROPPED, 0),
                input_event(EV_KEY, KeyCode::B as u16, 1),
            ],
            || None,
        );
        let second = decoder.decode(
            &[
                input_event(EV_KEY, KeyCode::B as u16, 0),
                input_event(EV_SYN, SYN_REPORT, 0),
                input_event(EV_KEY, KeyCode::D as u16, 1),
            ],
            || None,
        );

        assert!(first.is_empty());
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].code, KeyCode::D);
    }

    #[test]
    fn missing_input_dir_is_an_error() {
        let res = find_keyboard_devices(Path::new("/nonexistent/keystream/input"));

        assert!(matches!(res, Err(KeystreamError::Io(_))));
    }

    #[test]
    fn regular_files_are_not_event_devices() {
        let dir = std::env::temp_dir().join(format!("keystream-devices-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("event0"), b"").unwrap();

        let devices = find_event_devices(&dir).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert!(devices.is_empty());
    }
}
