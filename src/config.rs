use crate::error::{AppError, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub spotify_refresh_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let spotify_client_id =
            lookup("CLIENT_ID").ok_or_else(|| AppError::Config("CLIENT_ID not set".into()))?;

        let spotify_client_secret = lookup("CLIENT_SECRET")
            .ok_or_else(|| AppError::Config("CLIENT_SECRET not set".into()))?;

        let spotify_refresh_token = lookup("REFRESH_TOKEN").filter(|token| !token.is_empty());

        Ok(Self {
            spotify_client_id,
            spotify_client_secret,
            spotify_refresh_token,
        })
    }

    pub fn get_missing_config(&self) -> Vec<String> {
        let mut missing = Vec::new();

        if self.spotify_client_id.is_empty() {
            missing.push("CLIENT_ID".to_string());
        }
        if self.spotify_client_secret.is_empty() {
            missing.push("CLIENT_SECRET".to_string());
        }

        missing
    }

    pub fn has_refresh_token(&self) -> bool {
        self.spotify_refresh_token.is_some()
    }
}
