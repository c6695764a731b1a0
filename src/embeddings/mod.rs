// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Embedding API client module
//!
//! This module provides a client for an OpenAI-compatible POST
//! /v1/embeddings endpoint: typed wire shapes, an error taxonomy for the
//! single request/response cycle, and the client itself.

pub mod client;
pub mod error;
pub mod request;
pub mod response;

pub use client::EmbeddingClient;
pub use error::EmbeddingError;
pub use request::EmbeddingRequest;
pub use response::{EmbeddingData, EmbeddingResponse, Usage};
