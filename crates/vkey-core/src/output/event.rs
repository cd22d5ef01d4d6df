// Vkey Low-Level Event Record
// One `struct input_event` as written to a uinput device

use std::fmt;
use std::mem::size_of;

use crate::{Action, Key};

/// Event type for synchronization markers
pub const EV_SYN: u16 = 0x00;
/// Event type for key presses and releases
pub const EV_KEY: u16 = 0x01;
/// Code of the end-of-batch sync marker
pub const SYN_REPORT: u16 = 0;

/// Size in bytes of one encoded record (24 on 64-bit Linux)
pub const RECORD_SIZE: usize = size_of::<libc::input_event>();

const TIME_SIZE: usize = size_of::<libc::timeval>();

/// A single input event: type, code and value. The timestamp is left to the
/// kernel and always encoded as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEventRecord {
    pub kind: u16,
    pub code: u16,
    pub value: i32,
}

impl InputEventRecord {
    /// A key press or release
    pub fn key(key: Key, action: Action) -> Self {
        Self {
            kind: EV_KEY,
            code: key.code(),
            value: action.value(),
        }
    }

    /// The SYN_REPORT marker that ends a batch
    pub fn sync() -> Self {
        Self {
            kind: EV_SYN,
            code: SYN_REPORT,
            value: 0,
        }
    }

    pub fn is_sync(&self) -> bool {
        self.kind == EV_SYN && self.code == SYN_REPORT
    }

    /// Key and action, if this is a key event for a known key
    pub fn key_action(&self) -> Option<(Key, Action)> {
        if self.kind != EV_KEY {
            return None;
        }
        Some((Key::from_code(self.code)?, Action::from_value(self.value)?))
    }

    /// Encode in the native `struct input_event` layout
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut buf = [0u8; RECORD_SIZE];
        buf[TIME_SIZE..TIME_SIZE + 2].copy_from_slice(&self.kind.to_ne_bytes());
        buf[TIME_SIZE + 2..TIME_SIZE + 4].copy_from_slice(&self.code.to_ne_bytes());
        buf[TIME_SIZE + 4..TIME_SIZE + 8].copy_from_slice(&self.value.to_ne_bytes());
        buf
    }
}

impl fmt::Display for InputEventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sync() {
            return write!(f, "EV_SYN SYN_REPORT");
        }
        match self.key_action() {
            Some((key, action)) => write!(f, "EV_KEY {} {}", key, action),
            None => write!(f, "type={} code={} value={}", self.kind, self.code, self.value),
        }
    }
}
