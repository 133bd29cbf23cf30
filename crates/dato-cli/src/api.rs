//! Dato API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

/// API Client for Dato
pub struct DatoClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct DatoResponse {
    pub id: Option<String>,
    pub information: String,
}

#[derive(Debug, Serialize)]
pub struct CreateDatoRequest {
    pub information: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateDatoResponse {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl DatoClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check the server health endpoint
    pub async fn health(&self) -> Result<HealthResponse> {
        let resp = self
            .client
            .get(self.url("/health"))
            .send()
            .await
            .context("Failed to connect to Dato API")?;

        parse(resp).await
    }

    /// List all Datos
    pub async fn list_datos(&self) -> Result<Vec<DatoResponse>> {
        let resp = self
            .client
            .get(self.url("/datos"))
            .send()
            .await
            .context("Failed to connect to Dato API")?;

        parse(resp).await
    }

    /// Create a Dato, returning its id
    pub async fn create_dato(&self, information: &str) -> Result<String> {
        let request = CreateDatoRequest {
            information: information.to_string(),
        };

        let resp = self
            .client
            .post(self.url("/datos"))
            .json(&request)
            .send()
            .await
            .context("Failed to connect to Dato API")?;

        let created: CreateDatoResponse = parse(resp).await?;
        Ok(created.id)
    }
}

async fn parse<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("API error ({}): {}", status, body);
    }

    resp.json().await.context("Failed to parse response")
}
