// Vkey uinput Output Layer
// Virtual keyboard creation and event delivery through evdev

use std::path::Path;

use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{AttributeSet, EventType, InputEvent};

use super::event::InputEventRecord;
use super::sink::{EventSink, OutputError};
use crate::key::all_keys;

/// Node used by some older distributions; evdev only opens /dev/uinput
const ALTERNATE_UINPUT_PATH: &str = "/dev/input/uinput";

/// Event sink backed by a uinput virtual keyboard.
///
/// Key records are queued and handed to the device when a sync record
/// arrives; evdev terminates each batch with its own SYN_REPORT.
pub struct UInputSink {
    device: VirtualDevice,
    pending: Vec<InputEvent>,
}

impl UInputSink {
    /// Create the virtual device, declaring EV_KEY and every supported key
    pub fn open(name: &str) -> Result<Self, OutputError> {
        let mut keys = AttributeSet::<evdev::Key>::new();
        for key in all_keys() {
            keys.insert(evdev::Key::new(key.code()));
        }

        let device = VirtualDeviceBuilder::new()
            .map_err(|err| {
                if err.kind() == std::io::ErrorKind::NotFound
                    && Path::new(ALTERNATE_UINPUT_PATH).exists()
                {
                    log::warn!(
                        "/dev/uinput is missing but {} exists; link it to /dev/uinput",
                        ALTERNATE_UINPUT_PATH
                    );
                }
                OutputError::DeviceUnavailable(err)
            })?
            .name(name)
            .with_keys(&keys)
            .map_err(OutputError::DeviceUnavailable)?
            .build()
            .map_err(OutputError::DeviceUnavailable)?;

        log::debug!("virtual uinput device '{}' created", name);
        Ok(Self {
            device,
            pending: Vec::new(),
        })
    }

    fn flush(&mut self) -> Result<(), OutputError> {
        log::trace!("emitting batch of {} events", self.pending.len());
        let result = self.device.emit(&self.pending);
        self.pending.clear();
        result.map_err(OutputError::WriteFailed)
    }
}

impl EventSink for UInputSink {
    fn write(&mut self, record: &InputEventRecord) -> Result<(), OutputError> {
        if record.is_sync() {
            return self.flush();
        }
        self.pending
            .push(InputEvent::new(EventType(record.kind), record.code, record.value));
        Ok(())
    }

    fn close(mut self) -> Result<(), OutputError> {
        if !self.pending.is_empty() {
            self.flush()?;
        }
        log::debug!("virtual uinput device closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DEFAULT_DEVICE_NAME;

    #[test]
    fn test_uinput_sink_creation() {
        // Requires /dev/uinput access; may fail in containers
        match UInputSink::open(DEFAULT_DEVICE_NAME) {
            Ok(mut sink) => {
                sink.write(&InputEventRecord::sync()).unwrap();
                sink.close().unwrap();
            }
            Err(err) => {
                assert!(matches!(err, OutputError::DeviceUnavailable(_)));
            }
        }
    }
}
