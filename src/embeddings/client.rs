// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Embedding endpoint client via OpenAI-compatible API

use crate::config::ProbeConfig;
use crate::embeddings::error::EmbeddingError;
use crate::embeddings::request::EmbeddingRequest;
use crate::embeddings::response::EmbeddingResponse;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tracing::{debug, info};
use url::Url;

/// Client for calling an OpenAI-compatible embeddings endpoint
#[derive(Debug)]
pub struct EmbeddingClient {
    client: Client,
    endpoint: String,
    api_token: String,
    model: String,
}

impl EmbeddingClient {
    /// Create a new embedding client
    ///
    /// Validates the endpoint URL and builds the underlying HTTP client
    /// with the configured total timeout.
    pub fn new(config: ProbeConfig) -> Result<Self, EmbeddingError> {
        let url = Url::parse(&config.endpoint).map_err(|e| {
            EmbeddingError::RequestConstruction(format!(
                "invalid endpoint '{}': {}",
                config.endpoint, e
            ))
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(EmbeddingError::RequestConstruction(format!(
                "endpoint scheme must be http or https, got '{}'",
                url.scheme()
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EmbeddingError::RequestConstruction(e.to_string()))?;

        let endpoint = config.endpoint.trim_end_matches('/').to_string();
        info!(
            "embedding client configured: endpoint={}, model={}",
            endpoint, config.model
        );

        Ok(Self {
            client,
            endpoint,
            api_token: config.api_token,
            model: config.model,
        })
    }

    /// Get the configured model identifier
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get the configured endpoint base URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request embeddings for a batch of texts
    ///
    /// Issues one POST to `/v1/embeddings` and parses the response. The
    /// batch is passed through unvalidated. Any failure is terminal for
    /// the call; see [`EmbeddingError`] for the taxonomy.
    pub async fn get_embeddings(
        &self,
        texts: &[String],
    ) -> Result<EmbeddingResponse, EmbeddingError> {
        let request = EmbeddingRequest {
            model: self.model.clone(),
            input: texts.to_vec(),
        };

        let body = serde_json::to_vec(&request).map_err(EmbeddingError::Serialization)?;

        debug!(
            "requesting embeddings: model={}, batch={}",
            self.model,
            request.input.len()
        );

        let response = self
            .client
            .post(format!("{}/v1/embeddings", self.endpoint))
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(&self.api_token)
            .body(body)
            .send()
            .await
            .map_err(EmbeddingError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            // A body read failure is folded into the diagnostic text
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read error body: {}>", e));
            return Err(EmbeddingError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(EmbeddingError::Read)?;
        let parsed: EmbeddingResponse =
            serde_json::from_slice(&bytes).map_err(EmbeddingError::Deserialization)?;

        debug!(
            "received {} embeddings, {} total tokens",
            parsed.data.len(),
            parsed.usage.total_tokens
        );

        Ok(parsed)
    }
}
