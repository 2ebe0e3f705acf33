// Event types (see [input-event-codes.h] and the [kernel docs]).
//
// [input-event-codes.h]: https://elixir.bootlin.com/linux/v5.19.17/source/include/uapi/linux/input-event-codes.h#L38)
// [kernel docs]: https://www.kernel.org/doc/html/latest/input/event-codes.html
pub(crate) const EV_SYN: libc::c_ulong = 0x00;
pub(crate) const EV_KEY: libc::c_ulong = 0x01;
pub(crate) const EV_REL: libc::c_ulong = 0x02;
pub(crate) const EV_ABS: libc::c_ulong = 0x03;
pub(crate) const EV_MSC: libc::c_ulong = 0x04;
pub(crate) const EV_SW: libc::c_ulong = 0x05;
pub(crate) const EV_REP: libc::c_ulong = 0x14;
pub(crate) const EV_FF: libc::c_ulong = 0x15;
pub(crate) const EV_PWR: libc::c_ulong = 0x16;
pub(crate) const EV_FF_STATUS: libc::c_ulong = 0x17;

/// End of a report (an EV_SYN code).
pub(crate) const SYN_REPORT: u16 = 0;
/// The kernel's event buffer overflowed and events were lost (an EV_SYN code).
pub(crate) const SYN_DROPPED: u16 = 3;

/// The highest key code.
pub(crate) const KEY_MAX: u16 = 0x2ff;

/// The `value` of an EV_KEY caused by a key being released.
pub(crate) const EV_KEY_RELEASE: i32 = 0;
/// The `value` of an EV_KEY caused by a key press.
pub(crate) const EV_KEY_PRESS: i32 = 1;
/// The `value` of an EV_KEY caused by a key being held down.
pub(crate) const EV_KEY_REPEAT: i32 = 2;
