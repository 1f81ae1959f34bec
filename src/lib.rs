pub mod config;
pub mod error;
pub mod playback;
pub mod server;
pub mod spotify;

pub use config::Config;
pub use error::{AppError, Result};
pub use playback::{Artist, PlaybackStatusHandler, PlaybackSummary};
pub use spotify::{PlaybackSession, PlaybackSource, SpotifyConnector};
