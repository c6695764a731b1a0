// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! EmbeddingResponse types for POST /v1/embeddings
//!
//! Wire shapes as returned by OpenAI-compatible servers: a list envelope,
//! one entry per input text, and a usage block with token counts.

use serde::{Deserialize, Serialize};

/// One embedding result, aligned positionally with the request batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingData {
    /// Object tag (typically "embedding")
    pub object: String,

    /// The embedding vector
    pub embedding: Vec<f64>,

    /// Zero-based position of this entry within the request batch
    pub index: usize,
}

/// Token usage reported by the server for the whole batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens consumed by the input texts
    pub prompt_tokens: u32,

    /// Total tokens billed for the request
    pub total_tokens: u32,
}

/// Response body for POST /v1/embeddings
///
/// # Example
/// ```json
/// {
///   "object": "list",
///   "data": [
///     {"object": "embedding", "embedding": [0.1, 0.2], "index": 0}
///   ],
///   "model": "qwen-embedding",
///   "usage": {"prompt_tokens": 5, "total_tokens": 5}
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    /// Object tag (typically "list")
    pub object: String,

    /// Embedding results, expected to align with the request's `input`
    pub data: Vec<EmbeddingData>,

    /// Model identifier as echoed by the server
    pub model: String,

    /// Token usage for the batch
    pub usage: Usage,
}

impl EmbeddingResponse {
    /// Dimensionality of the first returned vector, if any
    pub fn dimension(&self) -> Option<usize> {
        self.data.first().map(|d| d.embedding.len())
    }
}
