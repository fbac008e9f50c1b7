#[cfg(not(target_arch = "wasm32"))]
pub mod extmidi;
pub mod host;
pub mod null;

#[cfg(not(target_arch = "wasm32"))]
pub use extmidi::ExternalMidiDriver;
pub use host::{HostCapabilities, HostFunction, HostMusicDriver, MusicHost};
pub use null::NullMusicDriver;

use crate::driver::{MusicDriverFactory, MusicDriverRegistry};

/// Register every music driver that needs no host environment
///
/// Host-backed drivers are registered by the crate providing the host.
pub fn register_music_drivers(registry: &mut MusicDriverRegistry) {
    #[cfg(not(target_arch = "wasm32"))]
    registry.register(MusicDriverFactory::music(
        ExternalMidiDriver::PRIORITY,
        ExternalMidiDriver::NAME,
        ExternalMidiDriver::DESCRIPTION,
        || Box::new(ExternalMidiDriver::new()),
    ));

    registry.register(MusicDriverFactory::music(
        NullMusicDriver::PRIORITY,
        NullMusicDriver::NAME,
        NullMusicDriver::DESCRIPTION,
        || Box::new(NullMusicDriver::new()),
    ));
}

/// Register a host-backed music driver built by `make_host`
pub fn register_host_driver<H, F>(registry: &mut MusicDriverRegistry, make_host: F)
where
    H: MusicHost + 'static,
    F: Fn() -> H + Send + Sync + 'static,
{
    registry.register(MusicDriverFactory::music(
        HostMusicDriver::<H>::PRIORITY,
        HostMusicDriver::<H>::NAME,
        HostMusicDriver::<H>::DESCRIPTION,
        move || Box::new(HostMusicDriver::new(make_host())),
    ));
}
