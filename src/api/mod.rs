//! Client for the public REST API that owns events, speakers, blog posts,
//! team members and newsletter subscriptions.
//!
//! Every call is a single request with the static API key in the
//! `Authorization` header. Responses use a `{ success, data, message }`
//! envelope; a non-2xx status or `success: false` is an [`ApiError`].
//! There is no caching and no retry.

pub mod blog;
pub mod events;
pub mod newsletter;
pub mod speakers;
pub mod team;

pub use blog::LikesUpdate;
pub use newsletter::Subscription;

use std::time::Duration;

use reqwest::{header, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Standard response wrapper of the API.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    fn into_data(self, endpoint: &str, fallback: &str) -> Result<T, ApiError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(ApiError::Rejected {
                endpoint: endpoint.to_string(),
                message: self.message.unwrap_or_else(|| fallback.to_string()),
            }),
        }
    }
}

/// Only the fields needed to read an error body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    pub fn from_config(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and unwrap the envelope's `data`.
    async fn get_data<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T, ApiError> {
        let envelope: Envelope<T> = self.send(Method::GET, path, None::<&()>, fallback).await?;
        envelope.into_data(path, fallback)
    }

    /// Performs one request and decodes the body as `R`.
    ///
    /// Non-2xx statuses become [`ApiError::Status`] carrying the server's
    /// message when the body has one.
    async fn send<B, R>(&self, method: Method, path: &str, body: Option<&B>, fallback: &str) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, &self.api_key);
        if let Some(body) = body {
            request = request.json(body);
        }

        let transport = |source| ApiError::Transport {
            endpoint: path.to_string(),
            source,
        };
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(transport)?;

        if !status.is_success() {
            let err = ApiError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
                message: error_message(&bytes, status, fallback),
            };
            error!("{}", err);
            return Err(err);
        }

        serde_json::from_slice(&bytes).map_err(|source| {
            let err = ApiError::Decode {
                endpoint: path.to_string(),
                source,
            };
            error!("{}", err);
            err
        })
    }
}

fn error_message(body: &[u8], status: StatusCode, fallback: &str) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            format!(
                "{}: {}",
                fallback,
                status.canonical_reason().unwrap_or("unexpected status")
            )
        })
}
