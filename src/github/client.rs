use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use super::RelationSource;
use crate::config::GithubConfig;
use crate::error::{FollowgraphError, Result};
use crate::graph::{Identity, ProfileMetrics};

/// Upper bound for a single backoff sleep.
const MAX_RETRY_DELAY: Duration = Duration::from_secs(60);

/// Double the backoff delay, saturating at `MAX_RETRY_DELAY`.
fn next_delay(delay: Duration) -> Duration {
    delay.saturating_mul(2).min(MAX_RETRY_DELAY)
}

/// Subset of `GET /users/{id}` we care about
#[derive(Deserialize)]
struct UserResponse {
    #[serde(default)]
    followers: u64,
    #[serde(default)]
    following: u64,
    #[serde(default)]
    public_repos: u64,
}

/// Entry in a followers/following listing
#[derive(Deserialize)]
struct UserSummary {
    login: String,
}

/// GitHub REST client
///
/// Sends bearer-authenticated GET requests and decodes JSON. Only the first
/// page of each relation listing is requested. Retries are off unless
/// `max_retries > 0`.
pub struct GithubClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
    per_page: u32,
    max_retries: usize,
    retry_delay: Duration,
}

impl GithubClient {
    /// Create a new GitHub client
    ///
    /// # Arguments
    ///
    /// * `base_url` - API root, e.g. `https://api.github.com`
    /// * `token` - Optional bearer token; requests are unauthenticated without it
    /// * `per_page` - Page size for relation listings (capped at 100)
    /// * `timeout` - Per-request timeout
    /// * `user_agent` - Sent on every request (GitHub rejects requests without one)
    pub fn new(
        base_url: &str,
        token: Option<String>,
        per_page: u32,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            FollowgraphError::Config(format!("Invalid base URL {}: {}", base_url, e))
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| FollowgraphError::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            token,
            per_page: per_page.clamp(1, 100),
            max_retries: 0,
            retry_delay: Duration::from_secs(1),
        })
    }

    /// Build a client from the `[github]` config section.
    pub fn from_config(config: &GithubConfig, token: Option<String>) -> Result<Self> {
        Ok(Self::new(
            &config.base_url,
            token,
            config.per_page,
            Duration::from_secs(config.timeout_secs),
            &config.user_agent,
        )?
        .with_retries(config.max_retries))
    }

    /// Retry 429/5xx responses up to `max_retries` times with exponential backoff.
    pub fn with_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Initial backoff delay; doubles on every retry.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    fn endpoint(&self, segments: &[&str], paged: bool) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                FollowgraphError::Config(format!("Base URL cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        if paged {
            url.query_pairs_mut()
                .append_pair("per_page", &self.per_page.to_string());
        }
        Ok(url)
    }

    /// Single GET request, no retries
    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        let mut request = self
            .client
            .get(url.clone())
            .header("Accept", "application/vnd.github.v3+json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| FollowgraphError::Http(format!("Network error: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());

            return Err(FollowgraphError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| {
                FollowgraphError::Parse(format!("Failed to parse response from {}: {}", url, e))
            })
    }

    async fn get_with_retry<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let mut attempt = 0;
        let mut delay = self.retry_delay;

        loop {
            match self.get_json(&url).await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.max_retries && e.is_retryable() => {
                    log::warn!(
                        "Retry {}/{} for {} after error: {}",
                        attempt + 1,
                        self.max_retries,
                        url,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    delay = next_delay(delay);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn fetch_relation(&self, identity: &str, relation: &str) -> Result<Vec<Identity>> {
        let url = self.endpoint(&["users", identity, relation], true)?;
        let users: Vec<UserSummary> = self.get_with_retry(url).await?;
        let logins: Vec<Identity> = users.into_iter().map(|u| u.login).collect();
        log::info!("Fetched {} {} for {}", logins.len(), relation, identity);
        Ok(logins)
    }
}

#[async_trait]
impl RelationSource for GithubClient {
    async fn fetch_user(&self, identity: &str) -> Result<ProfileMetrics> {
        let url = self.endpoint(&["users", identity], false)?;
        let user: UserResponse = self.get_with_retry(url).await?;
        Ok(ProfileMetrics {
            followers_count: user.followers,
            following_count: user.following,
            public_repos: user.public_repos,
        })
    }

    async fn fetch_followers(&self, identity: &str) -> Result<Vec<Identity>> {
        self.fetch_relation(identity, "followers").await
    }

    async fn fetch_following(&self, identity: &str) -> Result<Vec<Identity>> {
        self.fetch_relation(identity, "following").await
    }
}
