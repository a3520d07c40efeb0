use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Service banner served at `/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    pub message: String,
    pub version: String,
    pub documentation: String,
    pub note: String,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status. `body` is the raw JSON error.
    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the service banner.
    pub async fn banner(&self) -> Result<Banner, ClientError> {
        self.get_json("/", &[]).await
    }

    /// Fetch the health summary as raw JSON.
    pub async fn health(&self) -> Result<serde_json::Value, ClientError> {
        self.get_json("/health", &[]).await
    }

    /// List a collection, e.g. `list::<Ticket>("/tickets", &[("priority", "High")])`.
    pub async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, ClientError> {
        self.get_json(path, query).await
    }

    /// GET `path` with `query` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let resp = self.get(path, query).await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await?;
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.json::<T>().await?)
    }

    /// Raw GET, for callers that need headers or non-JSON handling.
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Response, reqwest::Error> {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await
    }
}
