use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use musicdrv::config::MusicConfig;
use musicdrv::driver::{DriverType, MusicDriverRegistry, MusicSession, MusicSongInfo};

/// Usage: musicdrv [config.json] [song.mid]
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "musicdrv=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let config_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("music.json"));
    let song_path = args.next().map(PathBuf::from);

    let config = MusicConfig::load(&config_path)?;
    let registry = MusicDriverRegistry::with_defaults();
    print!("{}", registry.describe(DriverType::Music));

    let mut session = MusicSession::new(registry);
    session.set_volume(config.volume);
    let driver = session
        .select(&config.selection())
        .context("Failed to select music driver")?
        .to_string();
    info!("Using music driver '{}'", driver);

    if let Some(path) = song_path {
        let title = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        session.play_song(&MusicSongInfo::standard_midi(title, path));

        let mut ticker = tokio::time::interval(Duration::from_millis(250));
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if !session.is_song_playing() {
                        info!("Song finished");
                        break;
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted, stopping song");
                    session.stop_song();
                    break;
                }
            }
        }
    }

    session.shutdown();
    Ok(())
}
