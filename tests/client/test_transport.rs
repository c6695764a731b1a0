// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Failure-path tests: non-200 statuses, malformed bodies, unreachable
//! endpoints, slow servers.

use super::support;
use axum::http::{header, StatusCode};
use axum::routing::post;
use axum::Router;
use embed_probe::config::ProbeConfig;
use embed_probe::embeddings::{EmbeddingClient, EmbeddingError};
use std::time::{Duration, Instant};
use tokio::net::TcpListener;

#[tokio::test]
async fn test_500_surfaces_status_and_body() {
    let app = Router::new().route(
        "/v1/embeddings",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "internal error") }),
    );
    let addr = support::serve(app).await;
    let client = EmbeddingClient::new(support::config_for(addr)).unwrap();

    let err = client
        .get_embeddings(&support::sample_batch())
        .await
        .unwrap_err();
    assert!(matches!(
        &err,
        EmbeddingError::UnexpectedStatus { status: 500, .. }
    ));
    let message = err.to_string();
    assert!(message.contains("500"));
    assert!(message.contains("internal error"));
}

#[tokio::test]
async fn test_malformed_json_is_deserialization_error() {
    let app = Router::new().route(
        "/v1/embeddings",
        post(|| async {
            (
                [(header::CONTENT_TYPE, "application/json")],
                r#"{"object": "list", "data": [{"obj"#,
            )
        }),
    );
    let addr = support::serve(app).await;
    let client = EmbeddingClient::new(support::config_for(addr)).unwrap();

    let err = client
        .get_embeddings(&support::sample_batch())
        .await
        .unwrap_err();
    assert!(matches!(err, EmbeddingError::Deserialization(_)));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop a listener so the port is free but unserved
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ProbeConfig {
        endpoint: format!("http://{}", addr),
        timeout: Duration::from_secs(5),
        ..ProbeConfig::default()
    };
    let client = EmbeddingClient::new(config).unwrap();

    let start = Instant::now();
    let err = client
        .get_embeddings(&support::sample_batch())
        .await
        .unwrap_err();
    assert!(matches!(err, EmbeddingError::Transport(_)));
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_slow_server_hits_timeout() {
    let app = Router::new().route(
        "/v1/embeddings",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            (StatusCode::OK, "{}")
        }),
    );
    let addr = support::serve(app).await;

    let config = ProbeConfig {
        timeout: Duration::from_secs(1),
        ..support::config_for(addr)
    };
    let client = EmbeddingClient::new(config).unwrap();

    let start = Instant::now();
    let err = client
        .get_embeddings(&support::sample_batch())
        .await
        .unwrap_err();
    assert!(matches!(err, EmbeddingError::Transport(_)));
    assert!(start.elapsed() < Duration::from_secs(5));
}
