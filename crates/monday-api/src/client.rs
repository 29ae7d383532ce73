//! HTTP implementation of [`MondayApi`].

use std::time::Duration;

use async_trait::async_trait;
use monday::{
    ApiError, Board, BoardId, ColumnDefinition, Group, GroupId, MondayApi, Pulse, PulseId, User,
    UserId,
};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use crate::Credentials;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://api.monday.com";

/// Number of pulses requested per page when listing a board.
pub const PULSE_PAGE_SIZE: usize = 25;

/// Upper bound on the pages fetched for a single listing.
pub const MAX_PULSE_PAGES: u32 = 1000;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Transport settings for [`MondayClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Scheme and host the `/v1/...` paths are appended to.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
    /// Page size for pulse listings. A page shorter than this ends the listing.
    pub page_size: usize,
    /// Pages fetched before a listing is abandoned.
    pub max_pages: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("monday-automator/", env!("CARGO_PKG_VERSION")).to_string(),
            page_size: PULSE_PAGE_SIZE,
            max_pages: MAX_PULSE_PAGES,
        }
    }
}

impl ClientConfig {
    /// Default settings pointed at another host (e.g. a mock server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Authenticated client for the Monday v1 REST API.
///
/// Every request carries the `api_key` and `user_id` query parameters. Calls
/// are made once; failures are mapped to [`ApiError`] and returned.
#[derive(Debug, Clone)]
pub struct MondayClient {
    http: Client,
    config: ClientConfig,
    credentials: Credentials,
}

impl MondayClient {
    /// Builds a client.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidConfig`] if `page_size` is zero.
    /// [`ApiError::Transport`] if the underlying HTTP client cannot be
    /// constructed (e.g. the TLS backend fails to initialise).
    pub fn new(credentials: Credentials, config: ClientConfig) -> Result<Self, ApiError> {
        if config.page_size == 0 {
            return Err(ApiError::InvalidConfig {
                message: "page_size must be at least 1".to_string(),
            });
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            http,
            config,
            credentials,
        })
    }

    /// Returns the transport settings in use.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, resource: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), resource)
    }

    /// Sends one request and returns the body of a successful response.
    async fn send(
        &self,
        method: Method,
        resource: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<u8>, ApiError> {
        debug!(%method, resource, "Sending Monday request");
        let response = self
            .http
            .request(method, self.url(resource))
            .query(params)
            .query(&self.credentials.query_params())
            .send()
            .await
            .map_err(transport_error)?;

        check_status(response.status(), resource)?;

        let body = response.bytes().await.map_err(transport_error)?;
        Ok(body.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let body = self.send(Method::GET, resource, params).await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            resource: resource.to_string(),
            message: e.to_string(),
        })
    }
}

/// Maps a response status onto the API's error taxonomy.
///
/// 200 and 201 are the only successful outcomes.
pub fn check_status(status: StatusCode, resource: &str) -> Result<(), ApiError> {
    match status.as_u16() {
        200 | 201 => Ok(()),
        401 => Err(ApiError::InvalidApiKey),
        402 => Err(ApiError::PaymentRequired),
        404 => Err(ApiError::NotFound {
            resource: resource.to_string(),
        }),
        other => Err(ApiError::UnexpectedStatus { status: other }),
    }
}

// Request URLs carry the API key; strip them before the message is kept.
fn transport_error(err: reqwest::Error) -> ApiError {
    ApiError::Transport {
        message: err.without_url().to_string(),
    }
}

#[async_trait]
impl MondayApi for MondayClient {
    #[instrument(skip(self))]
    async fn boards(&self) -> Result<Vec<Board>, ApiError> {
        let boards: Vec<Board> = self.get_json("/v1/boards.json", &[]).await?;
        debug!(count = boards.len(), "Fetched boards");
        Ok(boards)
    }

    #[instrument(skip(self), fields(board = %board))]
    async fn board(&self, board: BoardId) -> Result<Board, ApiError> {
        self.get_json(&format!("/v1/boards/{board}.json"), &[]).await
    }

    #[instrument(skip(self), fields(board = %board))]
    async fn board_groups(&self, board: BoardId) -> Result<Vec<Group>, ApiError> {
        let groups: Vec<Group> = self
            .get_json(
                &format!("/v1/boards/{board}/groups.json"),
                &[
                    ("show_archived", "false".to_string()),
                    ("show_deleted", "false".to_string()),
                ],
            )
            .await?;

        Ok(groups
            .into_iter()
            .filter(Group::is_active)
            .map(|mut group| {
                group.board_id = Some(board);
                group
            })
            .collect())
    }

    #[instrument(skip(self), fields(board = %board))]
    async fn board_columns(&self, board: BoardId) -> Result<Vec<ColumnDefinition>, ApiError> {
        self.get_json(
            &format!("/v1/boards/{board}/columns.json"),
            &[("all_columns", "false".to_string())],
        )
        .await
    }

    #[instrument(skip(self), fields(board = %board))]
    async fn board_pulses(&self, board: BoardId) -> Result<Vec<Pulse>, ApiError> {
        let resource = format!("/v1/boards/{board}/pulses.json");
        let page_size = self.config.page_size;
        let mut pulses = Vec::new();

        for page in 1..=self.config.max_pages {
            let batch: Vec<Pulse> = self
                .get_json(
                    &resource,
                    &[
                        ("per_page", page_size.to_string()),
                        ("page", page.to_string()),
                    ],
                )
                .await?;
            let fetched = batch.len();
            debug!(page, fetched, "Fetched pulse page");
            pulses.extend(batch);

            if fetched != page_size {
                debug!(total = pulses.len(), pages = page, "Pulse listing complete");
                return Ok(pulses);
            }
        }

        Err(ApiError::PageLimitExceeded {
            resource,
            pages: self.config.max_pages,
        })
    }

    #[instrument(skip(self, pulses), fields(board = %board, group = %group, count = pulses.len()))]
    async fn move_pulses(
        &self,
        board: BoardId,
        pulses: &[PulseId],
        group: &GroupId,
    ) -> Result<(), ApiError> {
        if pulses.is_empty() {
            debug!("No pulses to move");
            return Ok(());
        }

        let ids = pulses
            .iter()
            .map(PulseId::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.send(
            Method::POST,
            &format!("/v1/boards/{board}/pulses/move.json"),
            &[("group_id", group.to_string()), ("pulse_ids", ids)],
        )
        .await?;

        info!("Moved pulses");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/v1/users.json", &[]).await
    }

    #[instrument(skip(self), fields(user = %user))]
    async fn user(&self, user: UserId) -> Result<User, ApiError> {
        self.get_json(&format!("/v1/users/{user}.json"), &[]).await
    }
}
