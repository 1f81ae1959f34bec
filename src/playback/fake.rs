//! In-memory [`PlaybackSource`] for exercising the handler and the router.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use crate::error::{AppError, Result};
use crate::spotify::client::{PlaybackSession, PlaybackSource};
use crate::spotify::models::{PlaybackState, PlayedTrack};

#[derive(Debug, Default)]
pub struct Calls {
    connect: AtomicUsize,
    current_playback: AtomicUsize,
    recently_played: AtomicUsize,
    last_limit: AtomicU32,
}

impl Calls {
    pub fn connect(&self) -> usize {
        self.connect.load(Ordering::SeqCst)
    }

    pub fn current_playback(&self) -> usize {
        self.current_playback.load(Ordering::SeqCst)
    }

    pub fn recently_played(&self) -> usize {
        self.recently_played.load(Ordering::SeqCst)
    }

    pub fn last_limit(&self) -> u32 {
        self.last_limit.load(Ordering::SeqCst)
    }
}

/// Which upstream step returns an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Nowhere,
    Connect,
    CurrentPlayback,
    RecentlyPlayed,
}

fn upstream_error(step: &str) -> AppError {
    AppError::Io(std::io::Error::other(format!("{} unreachable", step)))
}

pub struct FakeSource {
    state: Option<PlaybackState>,
    recent: Vec<PlayedTrack>,
    fail_at: FailAt,
    calls: Arc<Calls>,
}

impl FakeSource {
    pub fn new(state: Option<PlaybackState>, recent: Vec<PlayedTrack>) -> Self {
        Self {
            state,
            recent,
            fail_at: FailAt::Nowhere,
            calls: Arc::new(Calls::default()),
        }
    }

    pub fn failing() -> Self {
        Self::new(None, Vec::new()).failing_at(FailAt::Connect)
    }

    pub fn failing_at(self, fail_at: FailAt) -> Self {
        Self { fail_at, ..self }
    }

    pub fn calls(&self) -> Arc<Calls> {
        Arc::clone(&self.calls)
    }
}

pub struct FakeSession {
    state: Option<PlaybackState>,
    recent: Vec<PlayedTrack>,
    fail_at: FailAt,
    calls: Arc<Calls>,
}

impl PlaybackSource for FakeSource {
    type Session = FakeSession;

    async fn connect(&self) -> Result<FakeSession> {
        self.calls.connect.fetch_add(1, Ordering::SeqCst);

        if self.fail_at == FailAt::Connect {
            return Err(upstream_error("token endpoint"));
        }

        Ok(FakeSession {
            state: self.state.clone(),
            recent: self.recent.clone(),
            fail_at: self.fail_at,
            calls: Arc::clone(&self.calls),
        })
    }
}

impl PlaybackSession for FakeSession {
    async fn current_playback(&self) -> Result<Option<PlaybackState>> {
        self.calls.current_playback.fetch_add(1, Ordering::SeqCst);

        if self.fail_at == FailAt::CurrentPlayback {
            return Err(upstream_error("player endpoint"));
        }

        Ok(self.state.clone())
    }

    async fn recently_played(&self, limit: u32) -> Result<Vec<PlayedTrack>> {
        self.calls.recently_played.fetch_add(1, Ordering::SeqCst);
        self.calls.last_limit.store(limit, Ordering::SeqCst);

        if self.fail_at == FailAt::RecentlyPlayed {
            return Err(upstream_error("recently played endpoint"));
        }

        Ok(self.recent.iter().take(limit as usize).cloned().collect())
    }
}
