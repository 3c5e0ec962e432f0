//! Notification adapters.

mod recording_notifier;
mod tracing_notifier;

pub use recording_notifier::RecordingNotifier;
pub use tracing_notifier::TracingNotifier;
