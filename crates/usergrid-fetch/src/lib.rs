//! Usergrid Fetch - loads the initial member dataset over HTTP
//!
//! This is the only place network or payload failures can happen. A grid is
//! only ever built from a dataset that loaded successfully.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use usergrid_core::{GridConfig, GridError, GridState, User};

/// The admin members resource the grid is normally populated from
pub const MEMBERS_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {0}")]
    Status(u16),

    #[error("Malformed members payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Grid(#[from] GridError),
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Parse the members JSON array
pub fn parse_members(body: &str) -> FetchResult<Vec<User>> {
    Ok(serde_json::from_str(body)?)
}

/// Fetches the member list from a JSON endpoint
#[derive(Debug, Clone)]
pub struct MemberFetcher {
    client: Client,
    url: String,
}

impl MemberFetcher {
    /// Fetcher for the default members resource
    pub fn new() -> FetchResult<Self> {
        Self::with_url(MEMBERS_URL)
    }

    pub fn with_url(url: impl Into<String>) -> FetchResult<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch(&self) -> FetchResult<Vec<User>> {
        tracing::debug!("Fetching members from {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Members request to {} failed with {}", self.url, status);
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let users = parse_members(&body)?;
        tracing::info!("Fetched {} members", users.len());
        Ok(users)
    }

    /// Fetch the members and build a grid over them
    pub async fn load_grid(&self, config: GridConfig) -> FetchResult<GridState<User>> {
        let users = self.fetch().await?;
        Ok(GridState::new(users, config)?)
    }
}
