// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! EmbeddingRequest type for POST /v1/embeddings

use serde::{Deserialize, Serialize};

/// Request body for POST /v1/embeddings
///
/// # Fields
/// - `model`: Embedding model identifier
/// - `input`: Texts to embed, in batch order
///
/// # Example
/// ```json
/// {
///   "model": "qwen-embedding",
///   "input": ["Hello world", "Another text"]
/// }
/// ```
///
/// The batch is passed through unvalidated; an empty `input` is sent as-is
/// and left to the server to accept or reject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingRequest {
    /// Embedding model identifier
    pub model: String,

    /// Texts to embed, in batch order
    pub input: Vec<String>,
}
