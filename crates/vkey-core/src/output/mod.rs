// Vkey Output Layer
// Event records, sinks and the emitter that drives them

mod emitter;
mod event;
mod sink;
mod state;

#[cfg(feature = "uinput")]
mod uinput;

pub use emitter::Emitter;
pub use event::{InputEventRecord, EV_KEY, EV_SYN, RECORD_SIZE, SYN_REPORT};
pub use sink::{EventSink, OutputError, RecordingSink};
pub use state::HeldKeys;

#[cfg(feature = "uinput")]
pub use uinput::UInputSink;
