// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Error types for the embedding client
//!
//! One variant per failure point of the single request/response cycle:
//! - Serialization (request encoding)
//! - RequestConstruction (endpoint/client setup)
//! - Transport (connect, DNS, timeout)
//! - UnexpectedStatus (non-200, carries status code and body text)
//! - Read (response body could not be consumed)
//! - Deserialization (body is not the expected shape)

use thiserror::Error;

/// Errors from a single embedding request
///
/// Every variant is terminal for the call; nothing is retried and no
/// partial response is returned.
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// Request body could not be encoded as JSON
    #[error("failed to serialize request: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Endpoint URL was invalid or the HTTP client could not be built
    #[error("failed to build request: {0}")]
    RequestConstruction(String),

    /// Connection could not be established, or the timeout elapsed
    #[error("failed to send request: {0}")]
    Transport(#[source] reqwest::Error),

    /// Server answered with a non-200 status; body is opaque diagnostic text
    #[error("embedding API returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Response body could not be fully read
    #[error("failed to read response body: {0}")]
    Read(#[source] reqwest::Error),

    /// Response body was not valid JSON of the expected shape
    #[error("failed to parse response: {0}")]
    Deserialization(#[source] serde_json::Error),
}
