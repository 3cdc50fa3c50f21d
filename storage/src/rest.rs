//! Hosted `items` table reached through its PostgREST API.

use std::time::Duration;

use async_trait::async_trait;
use brain_core::{Item, ItemId, ItemStatus, ItemStore, NewItem};
use config::StoreConfig;
use errors::StoreError;
use reqwest::{Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

const BACKEND: &str = "postgrest";

/// Error body returned by PostgREST on a rejected request.
#[derive(Debug, Deserialize)]
struct PostgrestErrorBody {
    message: String,
}

#[derive(Debug, Serialize)]
struct StatusPatch {
    status: ItemStatus,
}

/// REST client for the hosted table.
///
/// Every request carries the API key both as `apikey` and as a bearer token,
/// which is what the hosted store expects for anonymous-key access.
pub struct RestItemStore {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl RestItemStore {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let url = config.url.as_deref().ok_or_else(|| StoreError::Unavailable {
            backend: format!("{BACKEND} (no store url configured)"),
        })?;
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| StoreError::Unavailable {
                backend: format!("{BACKEND} (no api key configured)"),
            })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| StoreError::Connection {
                backend: BACKEND.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self::with_client(client, url, api_key, &config.table))
    }

    /// Builds a store around an existing client. `base_url` is the project
    /// URL; the REST path and table are appended.
    pub fn with_client(
        client: reqwest::Client,
        base_url: &str,
        api_key: &str,
        table: &str,
    ) -> Self {
        Self {
            client,
            endpoint: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table),
            api_key: api_key.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, StoreError> {
        let response = builder.send().await.map_err(|e| StoreError::Connection {
            backend: BACKEND.to_string(),
            reason: e.to_string(),
        })?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<PostgrestErrorBody>(&body)
            .map(|b| b.message)
            .ok()
            .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .map_or_else(|| status.to_string(), str::to_string)
            });

        Err(StoreError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode_rows(response: Response) -> Result<Vec<Item>, StoreError> {
        response
            .json::<Vec<Item>>()
            .await
            .map_err(|e| StoreError::Serialization {
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl ItemStore for RestItemStore {
    type Error = StoreError;

    async fn insert(&self, item: NewItem) -> Result<Vec<Item>, Self::Error> {
        tracing::debug!(title = %item.title, item_type = %item.item_type, "Inserting item");

        let builder = self
            .request(Method::POST, &self.endpoint)
            .header("Prefer", "return=representation")
            .json(&[item]);

        let rows = Self::decode_rows(self.send(builder).await?).await?;
        tracing::debug!(row_count = rows.len(), "Inserted item");
        Ok(rows)
    }

    async fn list_recent(&self) -> Result<Vec<Item>, Self::Error> {
        let url = format!("{}?select=*&order=created_at.desc", self.endpoint);
        let rows = Self::decode_rows(self.send(self.request(Method::GET, &url)).await?).await?;

        tracing::debug!(row_count = rows.len(), "Fetched items");
        Ok(rows)
    }

    async fn archive(&self, id: ItemId) -> Result<(), Self::Error> {
        let url = format!("{}?id=eq.{}", self.endpoint, id);
        let builder = self
            .request(Method::PATCH, &url)
            .header("Prefer", "return=minimal")
            .json(&StatusPatch {
                status: ItemStatus::Archived,
            });

        self.send(builder).await?;
        tracing::debug!(item_id = %id, "Archived item");
        Ok(())
    }
}
