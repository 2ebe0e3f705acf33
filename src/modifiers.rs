use std::sync::{Mutex, MutexGuard, PoisonError};

/// A snapshot of the modifier keys that affect case translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Whether a shift key is currently held down.
    pub shift: bool,
    /// Whether caps lock is on.
    pub caps_lock: bool,
}

impl Modifiers {
    /// Letters are uppercase when exactly one of shift and caps lock is active.
    pub fn uppercase(&self) -> bool {
        self.shift ^ self.caps_lock
    }
}

/// The modifier state shared by every device reader.
///
/// All operations take the same lock, so a reader never observes a half-updated state. The lock
/// is only held for the duration of a copy or a flag update.
#[derive(Debug, Default)]
pub struct ModifierState(Mutex<Modifiers>);

impl ModifierState {
    /// Create a new `ModifierState` with shift released and caps lock off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a consistent snapshot of the current state.
    pub fn read(&self) -> Modifiers {
        *self.lock()
    }

    pub fn set_shift(&self, active: bool) {
        self.lock().shift = active;
    }

    /// Toggle caps lock, returning its new value.
    pub fn toggle_caps_lock(&self) -> bool {
        let mut modifiers = self.lock();
        modifiers.caps_lock = !modifiers.caps_lock;
        modifiers.caps_lock
    }

    fn lock(&self) -> MutexGuard<'_, Modifiers> {
        // The guarded value is always valid, even if a holder panicked.
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
