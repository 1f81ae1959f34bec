pub mod client;
pub mod models;

pub use client::{PlaybackSession, PlaybackSource, SpotifyConnector, SpotifySession};
pub use models::{ArtistRef, PlaybackState, PlayedTrack, PlayingType};
