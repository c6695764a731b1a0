// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Console report for a completed probe run

use crate::embeddings::EmbeddingResponse;

/// Render the success report for one batch
///
/// Lists the echoed model, embedding count, dimensionality of the first
/// vector, total token usage, and for each input text its first five
/// embedding dimensions (when the vector has at least five).
pub fn render(texts: &[String], response: &EmbeddingResponse) -> String {
    let mut out = String::new();

    out.push_str(&format!("Model used: {}\n", response.model));
    out.push_str(&format!("Number of embeddings: {}\n", response.data.len()));
    if let Some(dimension) = response.dimension() {
        out.push_str(&format!("Embedding dimension: {}\n", dimension));
    }
    out.push_str(&format!(
        "Total tokens used: {}\n",
        response.usage.total_tokens
    ));

    for (i, data) in response.data.iter().enumerate() {
        let text = texts.get(i).map(String::as_str).unwrap_or("<unknown>");
        out.push_str(&format!("\nText {}: '{}'\n", i + 1, text));
        if data.embedding.len() >= 5 {
            let dims: Vec<String> = data.embedding[..5]
                .iter()
                .map(|v| format!("{:.6}", v))
                .collect();
            out.push_str(&format!(
                "Embedding (first 5 dims): {}\n",
                dims.join(", ")
            ));
        }
    }

    out
}
