use crate::api::endpoints::BASE_URL;
use crate::error::{ApiError, ApiResult};
use std::time::Duration;
use url::Url;

/// Upper bound for a single request, connect through body read.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client configuration. Read-only once handed to a client.
#[derive(Debug, Clone)]
pub struct Config {
    game: String,
    platform: String,
    username: String,
    base_url: Url,
    timeout: Duration,
}

impl Config {
    pub fn new(game: &str, platform: &str, username: &str) -> ApiResult<Self> {
        let base_url = Url::parse(BASE_URL).map_err(ApiError::Construction)?;

        Ok(Config {
            game: game.to_string(),
            platform: platform.to_string(),
            username: username.to_string(),
            base_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Point the client at another host. A trailing `/` is added when missing
    /// so relative endpoints resolve below the given path instead of replacing
    /// its last segment.
    pub fn with_base_url(mut self, base_url: &str) -> ApiResult<Self> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        self.base_url = Url::parse(&base).map_err(ApiError::Construction)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn game(&self) -> &str {
        &self.game
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_fixed_base_url_and_default_timeout() {
        let config = Config::new("bo4", "psn", "some player").unwrap();

        assert_eq!(config.base_url().as_str(), "https://cod-api.theapinetwork.com/api/");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.game(), "bo4");
        assert_eq!(config.platform(), "psn");
        assert_eq!(config.username(), "some player");
    }

    #[test]
    fn new_accepts_any_identifiers() {
        for (game, platform, username) in [
            ("", "", ""),
            ("bo4", "xbl", "Name#1234"),
            ("wwii", "steam", "ünïcödé / ?&="),
        ] {
            assert!(Config::new(game, platform, username).is_ok());
        }
    }

    #[test]
    fn with_base_url_appends_trailing_slash() {
        let config = Config::new("bo4", "psn", "player")
            .unwrap()
            .with_base_url("http://127.0.0.1:8080/api")
            .unwrap();

        assert_eq!(config.base_url().as_str(), "http://127.0.0.1:8080/api/");
    }

    #[test]
    fn with_base_url_rejects_garbage() {
        let err = Config::new("bo4", "psn", "player")
            .unwrap()
            .with_base_url("not a url")
            .unwrap_err();

        assert!(matches!(err, ApiError::Construction(_)));
    }
}
