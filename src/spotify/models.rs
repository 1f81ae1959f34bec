use std::collections::HashMap;

use rspotify::model::{
    CurrentPlaybackContext, CurrentlyPlayingType, FullTrack, PlayableItem, SimplifiedArtist,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayingType {
    Track,
    Episode,
    Advertisement,
    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArtistRef {
    pub name: String,
    pub url: Option<String>,
}

/// A track as reported by either the playback or the recently played endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayedTrack {
    pub name: String,
    pub url: Option<String>,
    /// Album images, largest first.
    pub image_urls: Vec<String>,
    pub artists: Vec<ArtistRef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub playing_type: PlayingType,
    pub track: Option<PlayedTrack>,
}

impl PlaybackState {
    pub fn is_playing_track(&self) -> bool {
        self.is_playing && self.playing_type == PlayingType::Track
    }
}

fn spotify_url(external_urls: &HashMap<String, String>) -> Option<String> {
    external_urls.get("spotify").cloned()
}

impl From<CurrentlyPlayingType> for PlayingType {
    fn from(kind: CurrentlyPlayingType) -> Self {
        match kind {
            CurrentlyPlayingType::Track => PlayingType::Track,
            CurrentlyPlayingType::Episode => PlayingType::Episode,
            CurrentlyPlayingType::Advertisement => PlayingType::Advertisement,
            CurrentlyPlayingType::Unknown => PlayingType::Unknown,
        }
    }
}

impl From<&SimplifiedArtist> for ArtistRef {
    fn from(artist: &SimplifiedArtist) -> Self {
        Self {
            name: artist.name.clone(),
            url: spotify_url(&artist.external_urls),
        }
    }
}

impl From<FullTrack> for PlayedTrack {
    fn from(track: FullTrack) -> Self {
        Self {
            url: spotify_url(&track.external_urls),
            image_urls: track.album.images.into_iter().map(|i| i.url).collect(),
            artists: track.artists.iter().map(ArtistRef::from).collect(),
            name: track.name,
        }
    }
}

impl From<CurrentPlaybackContext> for PlaybackState {
    fn from(context: CurrentPlaybackContext) -> Self {
        Self {
            is_playing: context.is_playing,
            playing_type: context.currently_playing_type.into(),
            track: match context.item {
                Some(PlayableItem::Track(track)) => Some(track.into()),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
impl PlayedTrack {
    pub fn mock(name: &str, artist: &str) -> Self {
        Self {
            name: name.to_string(),
            url: Some(format!("https://open.spotify.com/track/{}", name)),
            image_urls: vec![
                "https://i.scdn.co/image/640".to_string(),
                "https://i.scdn.co/image/300".to_string(),
                "https://i.scdn.co/image/64".to_string(),
            ],
            artists: vec![ArtistRef {
                name: artist.to_string(),
                url: Some(format!("https://open.spotify.com/artist/{}", artist)),
            }],
        }
    }
}
