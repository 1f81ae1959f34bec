use tracing::debug;

use crate::error::{AppError, Result};
use crate::playback::summary::PlaybackSummary;
use crate::spotify::client::{PlaybackSession, PlaybackSource};

pub struct PlaybackStatusHandler<S> {
    source: S,
}

impl<S: PlaybackSource> PlaybackStatusHandler<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Current track if one is playing, otherwise the last played track.
    pub async fn summary(&self) -> Result<PlaybackSummary> {
        let session = self.source.connect().await?;
        let state = session.current_playback().await?;

        match state {
            Some(state) if state.is_playing_track() => {
                debug!("Track is playing, using current item");
                let track = state.track.ok_or(AppError::MissingField("item"))?;
                PlaybackSummary::from_track(track, true)
            }
            _ => {
                debug!("Nothing playing, falling back to recently played");
                let track = session
                    .recently_played(1)
                    .await?
                    .into_iter()
                    .next()
                    .ok_or(AppError::NoRecentTracks)?;
                PlaybackSummary::from_track(track, false)
            }
        }
    }
}
