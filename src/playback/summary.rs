use serde::Serialize;

use crate::error::{AppError, Result};
use crate::spotify::models::{ArtistRef, PlayedTrack};

/// Spotify lists album images largest first; index 1 is the mid-size rendition.
pub const ALBUM_ART_INDEX: usize = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artist {
    #[serde(rename = "artist_name")]
    pub name: String,
    #[serde(rename = "artist_url")]
    pub profile_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackSummary {
    pub is_playing: bool,
    pub album_art: String,
    pub artist: Vec<Artist>,
    pub song_name: String,
    pub song_url: String,
}

impl PlaybackSummary {
    pub fn from_track(track: PlayedTrack, is_playing: bool) -> Result<Self> {
        let album_art = select_album_art(&track.image_urls)?;
        let song_url = track.url.ok_or(AppError::MissingField("track url"))?;
        let artist = track
            .artists
            .into_iter()
            .map(Artist::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            is_playing,
            album_art,
            artist,
            song_name: track.name,
            song_url,
        })
    }
}

impl TryFrom<ArtistRef> for Artist {
    type Error = AppError;

    fn try_from(artist: ArtistRef) -> Result<Self> {
        Ok(Self {
            profile_url: artist.url.ok_or(AppError::MissingField("artist url"))?,
            name: artist.name,
        })
    }
}

/// Picks the image at [`ALBUM_ART_INDEX`], falling back to the smallest
/// available one when the album has fewer images.
pub fn select_album_art(image_urls: &[String]) -> Result<String> {
    image_urls
        .get(ALBUM_ART_INDEX)
        .or_else(|| image_urls.last())
        .cloned()
        .ok_or(AppError::MissingField("album images"))
}
