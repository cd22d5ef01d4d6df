// Vkey Event Sink
// Destination for low-level events: the uinput device or an in-memory record

use super::event::InputEventRecord;

/// Error types for output operations
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to create virtual keyboard: {0} (need root or input group permission)")]
    DeviceUnavailable(#[source] std::io::Error),

    #[error("failed to write event: {0}")]
    WriteFailed(#[source] std::io::Error),
}

/// Something that accepts input event records in order.
///
/// Implementations own their underlying resource exclusively; it is released
/// by [`EventSink::close`] or, failing that, on drop.
pub trait EventSink {
    /// Write one record. Records must be delivered in call order.
    fn write(&mut self, record: &InputEventRecord) -> Result<(), OutputError>;

    /// Release the underlying resource
    fn close(self) -> Result<(), OutputError>
    where
        Self: Sized,
    {
        Ok(())
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn write(&mut self, record: &InputEventRecord) -> Result<(), OutputError> {
        (**self).write(record)
    }
}

/// Sink that keeps every record in memory (used for `--dry-run`)
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Vec<InputEventRecord>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every record written so far
    pub fn events(&self) -> &[InputEventRecord] {
        &self.events
    }

    /// Number of sync markers written
    pub fn sync_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_sync()).count()
    }

    /// Concatenated wire encoding of all records
    pub fn to_bytes(&self) -> Vec<u8> {
        self.events.iter().flat_map(|e| e.to_bytes()).collect()
    }
}

impl EventSink for RecordingSink {
    fn write(&mut self, record: &InputEventRecord) -> Result<(), OutputError> {
        self.events.push(*record);
        Ok(())
    }
}
