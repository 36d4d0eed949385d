use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use serde::de::DeserializeOwned;
use std::io::{self, Read};
use ureq::{Agent, AgentBuilder};
use url::Url;

use super::endpoints;
use super::models::*;

const USER_AGENT: &str = concat!("cod_stats/", env!("CARGO_PKG_VERSION"));

pub struct CodApiClient {
    config: Config,
    agent: Agent,
}

impl CodApiClient {
    pub fn new(game: &str, platform: &str, username: &str) -> ApiResult<Self> {
        Ok(Self::with_config(Config::new(game, platform, username)?))
    }

    pub fn with_config(config: Config) -> Self {
        let agent = AgentBuilder::new()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build();

        CodApiClient { config, agent }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve a relative path (query string included) against the base URL.
    ///
    /// Paths with a `.` or `..` segment, escaped or not, are rejected: URL
    /// resolution would collapse them and hit a different endpoint.
    pub fn endpoint(&self, path: &str) -> ApiResult<Url> {
        if has_dot_segment(path) {
            return Err(ApiError::DotSegment(path.to_string()));
        }

        self.config
            .base_url()
            .join(path)
            .map_err(|source| ApiError::MalformedUrl {
                path: path.to_string(),
                source,
            })
    }

    fn execute_request<T: DeserializeOwned>(&self, url: &Url) -> ApiResult<T> {
        tracing::debug!(%url, "GET");

        let response = match self
            .agent
            .get(url.as_str())
            .set("Accept", "application/json")
            .call()
        {
            Ok(resp) => resp,
            // The upstream reports failures in the body, decode it like any other.
            Err(ureq::Error::Status(status, resp)) => {
                tracing::warn!(%url, status, "non-success status");
                resp
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(ApiError::Network(Box::new(transport)));
            }
        };

        let mut body = String::new();
        response
            .into_reader()
            .read_to_string(&mut body)
            .map_err(|e| match e.kind() {
                // the agent timeout also covers the body
                io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => {
                    ApiError::Network(Box::new(e))
                }
                _ => ApiError::BodyRead(e),
            })?;
        tracing::trace!(%url, %body, "response body");

        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch any endpoint and decode it into `T`.
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.endpoint(path)?;
        self.execute_request(&url)
    }

    pub fn validate_user(&self) -> ApiResult<Validation> {
        self.get(&endpoints::validate(
            self.config.game(),
            self.config.username(),
            self.config.platform(),
        ))
    }

    pub fn get_user_stats(&self, match_type: &str) -> ApiResult<UserStats> {
        self.get(&endpoints::user_stats(
            self.config.game(),
            self.config.username(),
            self.config.platform(),
            match_type,
        ))
    }

    pub fn get_recent_matches(&self, rows: u32) -> ApiResult<RecentMatches> {
        self.get(&endpoints::recent_matches(rows))
    }

    pub fn get_match(&self, mid: &str) -> ApiResult<MatchDetails> {
        self.get(&endpoints::match_by_id(mid))
    }

    pub fn get_leaderboard(&self, scope: &str, rows: u32) -> ApiResult<Leaderboard> {
        self.get(&endpoints::leaderboard(
            self.config.game(),
            self.config.platform(),
            scope,
            rows,
        ))
    }

    pub fn get_user_names(&self, ids: &[u64]) -> ApiResult<UserNames> {
        self.get(&endpoints::user_names(ids))
    }
}

fn has_dot_segment(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').any(|segment| {
        let decoded = urlencoding::decode(segment).unwrap_or(segment.into());
        decoded == "." || decoded == ".."
    })
}
