//! `HttpInvoker` against an in-process stand-in for the backend.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use voisia_bridge::anthropic::{self, AnthropicModelParams};
use voisia_bridge::openai::OpenAIModelParams;
use voisia_bridge::{BridgeClient, BridgeError, HttpInvoker, VoisiaMessage};

type Seen = Arc<Mutex<Vec<(String, Value)>>>;

async fn handle_invoke(
    State(seen): State<Seen>,
    Path(command): Path<String>,
    Json(args): Json<Value>,
) -> Response {
    seen.lock().unwrap().push((command.clone(), args.clone()));

    match command.as_str() {
        "generate_anthropic_response" => Json(json!({
            "id": "msg_1",
            "type": "message",
            "role": "assistant",
            "model": args["model"],
            "content": [
                {"type": "thinking", "thinking": "hmm", "signature": "sig"},
                {"type": "text", "text": "echo: "},
                {"type": "text", "text": args["input"]}
            ],
            "stop_reason": "end_turn",
            "stop_sequence": null,
            "usage": {"input_tokens": 12, "output_tokens": 4}
        }))
        .into_response(),
        "generate_openai_response" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "OpenAI API call failed with status 401 Unauthorized: invalid api key",
        )
            .into_response(),
        "get_available_models" => StatusCode::SERVICE_UNAVAILABLE.into_response(),
        _ => (StatusCode::NOT_FOUND, "unknown command").into_response(),
    }
}

async fn spawn_backend() -> (String, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/invoke/:command", post(handle_invoke))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), seen)
}

fn client_for(base_url: &str) -> BridgeClient {
    let invoker = HttpInvoker::new(base_url, Duration::from_secs(5)).unwrap();
    BridgeClient::new(Arc::new(invoker))
}

#[tokio::test]
async fn test_anthropic_roundtrip_over_http() {
    let (base_url, seen) = spawn_backend().await;
    let client = client_for(&base_url);

    let conversation = vec![
        VoisiaMessage::user("Hello"),
        VoisiaMessage::assistant("Hi!"),
        VoisiaMessage::user("Repeat after me"),
    ];
    let resp = client
        .generate_anthropic_response(conversation, &AnthropicModelParams::default())
        .await
        .unwrap();

    assert_eq!(resp.model, "claude-3-7-sonnet-20250219");
    assert_eq!(
        anthropic::create_voisia_message(&resp),
        VoisiaMessage::assistant("echo: Repeat after me")
    );
    assert_eq!(anthropic::extract_token_usage(&resp).unwrap().total(), 16);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "generate_anthropic_response");
    assert_eq!(seen[0].1["convo_history"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_backend_error_text_is_surfaced() {
    let (base_url, _seen) = spawn_backend().await;
    let client = client_for(&format!("{base_url}/"));

    let err = client
        .generate_openai_response(VoisiaMessage::user("Hi"), &OpenAIModelParams::default())
        .await
        .unwrap_err();

    match err {
        BridgeError::Invoke { command, message } => {
            assert_eq!(command, "generate_openai_response");
            assert_eq!(
                message,
                "OpenAI API call failed with status 401 Unauthorized: invalid api key"
            );
        }
        other => panic!("expected invoke error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_error_body_still_has_message() {
    let (base_url, _seen) = spawn_backend().await;
    let client = client_for(&base_url);

    let err = client.available_models().await.unwrap_err();

    match err {
        BridgeError::Invoke { command, message } => {
            assert_eq!(command, "get_available_models");
            assert_eq!(message, "Unknown error (HTTP 503 Service Unavailable)");
        }
        other => panic!("expected invoke error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_backend_is_http_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{addr}"));
    let err = client
        .generate_anthropic_response(VoisiaMessage::user("Hi"), &AnthropicModelParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, BridgeError::Http(_)));
}
