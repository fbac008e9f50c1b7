pub mod config;
pub mod driver;
pub mod drivers;
pub mod mock;
pub mod song;
