pub mod host;

pub use host::{HostCall, RecordingHost};
