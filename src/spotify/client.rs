use std::future::Future;
use std::sync::Arc;

use rspotify::{
    model::AdditionalType,
    prelude::*,
    AuthCodeSpotify, Config as SpotifyConfig, Credentials, OAuth, Token,
};
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::spotify::models::{PlaybackState, PlayedTrack};

/// Something that can hand out an authorized, request-scoped playback session.
pub trait PlaybackSource: Send + Sync {
    type Session: PlaybackSession;

    fn connect(&self) -> impl Future<Output = Result<Self::Session>> + Send;
}

pub trait PlaybackSession: Send + Sync {
    /// `None` means nothing is active on any device.
    fn current_playback(&self) -> impl Future<Output = Result<Option<PlaybackState>>> + Send;

    /// Most recent first.
    fn recently_played(&self, limit: u32) -> impl Future<Output = Result<Vec<PlayedTrack>>> + Send;
}

/// Builds a fresh Spotify client for every session, so access tokens never
/// leak between concurrent requests.
#[derive(Clone)]
pub struct SpotifyConnector {
    config: Arc<Config>,
}

impl SpotifyConnector {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl PlaybackSource for SpotifyConnector {
    type Session = SpotifySession;

    async fn connect(&self) -> Result<SpotifySession> {
        let creds = Credentials::new(
            &self.config.spotify_client_id,
            &self.config.spotify_client_secret,
        );

        // Without a refresh token Spotify rejects the session on first use.
        let token = Token {
            refresh_token: self.config.spotify_refresh_token.clone(),
            ..Default::default()
        };

        let client = AuthCodeSpotify::from_token_with_config(
            token,
            creds,
            OAuth::default(),
            SpotifyConfig::default(),
        );

        client.refresh_token().await?;
        debug!("Refreshed Spotify access token");

        Ok(SpotifySession { client })
    }
}

pub struct SpotifySession {
    client: AuthCodeSpotify,
}

impl PlaybackSession for SpotifySession {
    async fn current_playback(&self) -> Result<Option<PlaybackState>> {
        let additional_types = [AdditionalType::Track, AdditionalType::Episode];

        let context = self
            .client
            .current_playback(None, Some(&additional_types))
            .await?;

        Ok(context.map(PlaybackState::from))
    }

    async fn recently_played(&self, limit: u32) -> Result<Vec<PlayedTrack>> {
        let page = self
            .client
            .current_user_recently_played(Some(limit), None)
            .await?;

        debug!("Fetched {} recently played tracks", page.items.len());

        Ok(page
            .items
            .into_iter()
            .map(|history| history.track.into())
            .collect())
    }
}
