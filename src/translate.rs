//! Turn key events into text.
//!
//! Keys whose name is a single character (letters and digits) are written as that character, in
//! uppercase when exactly one of shift and caps lock is active. Every other key is written as its
//! bracketed name (e.g. `<TAB>`), and the enter keys are also followed by a newline.

use std::borrow::Cow;

use crate::key_code::KeyCode;
use crate::keyboard::{KeyEvent, KeyEventCause};
use crate::modifiers::{ModifierState, Modifiers};

/// A unit of output text produced by a single key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    /// A case-adjusted character.
    Char(char),
    /// The name of a key with no single-character rendering, written as `<NAME>`.
    Symbol(&'static str),
    /// The line break that follows an enter key.
    Newline,
}

impl Fragment {
    pub fn to_bytes(&self) -> Cow<'static, [u8]> {
        match self {
            Fragment::Char(c) => {
                let mut buf = [0; 4];
                Cow::Owned(c.encode_utf8(&mut buf).as_bytes().to_vec())
            }
            Fragment::Symbol(name) => Cow::Owned(format!("<{name}>").into_bytes()),
            Fragment::Newline => Cow::Borrowed(b"\n"),
        }
    }
}

/// The fragments produced by one key event, in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation(Vec<Fragment>);

impl Translation {
    pub fn fragments(&self) -> &[Fragment] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The concatenated bytes of all the fragments.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.iter().flat_map(|f| f.to_bytes().into_owned()).collect()
    }
}

/// Translate `event`, updating the shared `modifiers` if it is a shift or caps lock event.
///
/// The modifier update always happens before the snapshot used for rendering is taken.
pub fn translate(event: &KeyEvent, modifiers: &ModifierState) -> Translation {
    if event.code.is_shift() {
        modifiers.set_shift(event.cause != KeyEventCause::Release);
        return Translation::default();
    }

    match event.cause {
        KeyEventCause::Release => return Translation::default(),
        KeyEventCause::Press if event.code == KeyCode::CapsLock => {
            modifiers.toggle_caps_lock();
        }
        // Autorepeat doesn't toggle caps lock, but the key is still echoed
        KeyEventCause::Press | KeyEventCause::Repeat => {}
    }

    let mut fragments = vec![render(event.code, modifiers.read())];

    if event.code.is_enter() {
        fragments.push(Fragment::Newline);
    }

    Translation(fragments)
}

/// Render the key `code` given a snapshot of the modifier keys.
pub fn render(code: KeyCode, modifiers: Modifiers) -> Fragment {
    let name = code.name();
    let mut chars = name.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) if modifiers.uppercase() => Fragment::Char(c.to_ascii_uppercase()),
        (Some(c), None) => Fragment::Char(c.to_ascii_lowercase()),
        _ => Fragment::Symbol(name),
    }
}
