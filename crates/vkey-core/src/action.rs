use std::fmt;

/// Direction of a key event, stored in the `value` field of a record.
///
/// Autorepeat (value 2) is left to the kernel and never produced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Action {
    Release = 0,
    Press = 1,
}

impl Action {
    pub fn is_pressed(self) -> bool {
        matches!(self, Action::Press)
    }

    pub fn is_released(self) -> bool {
        matches!(self, Action::Release)
    }

    /// Record value written to the device
    pub fn value(self) -> i32 {
        self as i32
    }

    /// Decode a record value; repeats and unknown values give `None`
    pub fn from_value(value: i32) -> Option<Self> {
        Self::try_from(value).ok()
    }
}

impl TryFrom<i32> for Action {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::Release),
            1 => Ok(Action::Press),
            other => Err(other),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Release => "release",
            Action::Press => "press",
        })
    }
}
