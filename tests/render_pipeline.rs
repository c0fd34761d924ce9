//! End-to-end behaviour of the render pipeline behind the full middleware chain.

use std::time::Duration;

use axum::http::StatusCode;
use ssr_server::http::FAILURE_MESSAGE;

mod common;

use common::{response_time_ms, start_server, Script, ScriptedApp};

#[tokio::test]
async fn test_ping_constructs_no_store() {
    let app = ScriptedApp::new(Script::Emit);
    let server = start_server(app.clone(), |_| {}).await;

    for _ in 0..3 {
        let res = server.get("/ping").await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.text().await.unwrap(), "pong");
    }

    assert_eq!(app.stores_created(), 0);
}

#[tokio::test]
async fn test_renders_snapshot_and_metadata() {
    let app = ScriptedApp::new(Script::Emit);
    let server = start_server(app.clone(), |_| {}).await;

    let res = server.get("/products").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let body = res.text().await.unwrap();
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("<title>page products</title>"));
    assert!(body.contains(r#"<meta name="description" content="page products">"#));
    assert!(body.contains("<h1>page products</h1><p>/products</p>"));
    assert!(body.contains(r#"window.__STATE__ = {"title":"page products","path":"/products"};"#));

    assert_eq!(app.stores_created(), 1);
}

#[tokio::test]
async fn test_root_path_renders() {
    let server = start_server(ScriptedApp::new(Script::Emit), |_| {}).await;

    let body = server.get("/").await.text().await.unwrap();
    assert!(body.contains("<title>page home</title>"));
}

#[tokio::test]
async fn test_only_first_snapshot_is_rendered() {
    let server = start_server(ScriptedApp::new(Script::EmitTwice), |_| {}).await;

    let body = server.get("/first").await.text().await.unwrap();
    assert!(body.contains("<title>page first</title>"));
    assert!(!body.contains("second snapshot"));
}

#[tokio::test]
async fn test_stream_error_is_contained() {
    let server = start_server(ScriptedApp::new(Script::Fail), |_| {}).await;

    let res = server.get("/broken").await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(res.headers().contains_key("response-time"));
    assert_eq!(res.text().await.unwrap(), FAILURE_MESSAGE);

    // The process keeps serving.
    let res = server.get("/ping").await;
    assert_eq!(res.text().await.unwrap(), "pong");
}

#[tokio::test]
async fn test_empty_stream_is_not_rendered() {
    let server = start_server(ScriptedApp::new(Script::Empty), |_| {}).await;

    let res = server.get("/nothing").await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.text().await.unwrap();
    assert_eq!(body, FAILURE_MESSAGE);
    assert!(!body.contains("<h1>"));
}

#[tokio::test]
async fn test_store_that_never_settles_times_out() {
    let server = start_server(ScriptedApp::new(Script::Hang), |config| {
        config.render.timeout_ms = 100;
    })
    .await;

    let started = std::time::Instant::now();
    let res = server.get("/stuck").await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(started.elapsed() < Duration::from_secs(5));
    assert!(response_time_ms(&res) >= 100.0);
    assert_eq!(res.text().await.unwrap(), FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_panicking_render_is_contained() {
    let server = start_server(ScriptedApp::new(Script::PanicInRender), |_| {}).await;

    let res = server.get("/explode").await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response_time_ms(&res) >= 0.0);
    assert!(res.headers().contains_key("x-request-id"));
    assert_eq!(res.text().await.unwrap(), FAILURE_MESSAGE);

    let res = server.get("/ping").await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_response_time_tracks_store_delay() {
    let server = start_server(ScriptedApp::new(Script::Emit), |_| {}).await;

    let fast = server.get("/timed").await;
    let fast_ms = response_time_ms(&fast);
    assert!(fast_ms >= 0.0);

    let slow = server.get("/timed?delay=60").await;
    let slow_ms = response_time_ms(&slow);
    assert_eq!(slow.status(), StatusCode::OK);
    assert!(slow_ms >= 60.0, "slow render took {}ms", slow_ms);
    assert!(slow_ms > fast_ms);
}

#[tokio::test]
async fn test_concurrent_renders_keep_their_own_metadata() {
    let app = ScriptedApp::new(Script::Emit);
    let server = start_server(app.clone(), |_| {}).await;

    // alpha settles after beta, so the two renders interleave.
    let (alpha, beta) = tokio::join!(
        server.get("/alpha?delay=80"),
        server.get("/beta?delay=10"),
    );
    let alpha = alpha.text().await.unwrap();
    let beta = beta.text().await.unwrap();

    assert!(alpha.contains("<title>page alpha</title>"));
    assert!(!alpha.contains("page beta"));
    assert!(beta.contains("<title>page beta</title>"));
    assert!(!beta.contains("page alpha"));

    assert_eq!(app.stores_created(), 2);
}
