pub mod handler;
pub mod summary;

#[cfg(test)]
pub(crate) mod fake;

pub use handler::PlaybackStatusHandler;
pub use summary::{ALBUM_ART_INDEX, Artist, PlaybackSummary};
