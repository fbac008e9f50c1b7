pub mod error;
pub mod params;
pub mod registry;
pub mod selector;
pub mod session;
pub mod traits;
pub mod types;

pub use error::{DriverError, Result};
pub use params::{DriverParams, DriverSelection};
pub use registry::{
    DriverConstructor, DriverFactory, DriverRegistry, MusicDriverFactory, MusicDriverRegistry,
};
pub use selector::select_driver;
pub use session::MusicSession;
pub use traits::{Driver, MusicDriver};
pub use types::{
    normalize_volume, DriverType, MusicSongInfo, MusicTrackType, PlaybackState,
    DEFAULT_MUSIC_VOLUME, MAX_MUSIC_VOLUME,
};
