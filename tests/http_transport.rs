//! Native HTTP transport against an in-process server that mimics the chat endpoints

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use steppy_web::domain::models::{Role, SendMessageRequest, SendReply, ServiceState, Transcript};
use steppy_web::domain::services::{ChatClient, ChatTransport, SendOutcome};
use steppy_web::shared::errors::AppError;
use steppy_web::shared::services::ApiService;

async fn spawn_server(router: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    Ok(format!("http://{}", addr))
}

async fn echo(Json(body): Json<Value>) -> Json<Value> {
    let message = body["message"].as_str().unwrap_or_default().to_string();
    Json(json!({
        "response": format!("echo: {}", message),
        "history": [
            {"role": "user", "content": message, "timestamp": "10:00:00"},
            {"role": "assistant", "content": "echo", "timestamp": "10:00:01"}
        ],
        "token_status": "valid"
    }))
}

fn chat_router() -> Router {
    Router::new()
        .route("/send_message", post(echo))
        .route(
            "/export_chat",
            get(|| async {
                Json(json!({
                    "session_id": "3f2c",
                    "exported_at": "2024-05-01T10:00:00",
                    "messages": [
                        {"role": "user", "content": "привет", "timestamp": "10:00:00"},
                        {"role": "assistant", "content": "Здравствуйте!", "timestamp": "10:00:02"}
                    ]
                }))
            }),
        )
        .route("/clear_chat", post(|| async { Json(json!({"success": true})) }))
        .route(
            "/token/status",
            get(|| async {
                Json(json!({"has_token": true, "expires_at": "2030-01-01T00:00:00", "is_valid": true}))
            }),
        )
}

#[tokio::test]
async fn test_send_message_success() -> anyhow::Result<()> {
    let base = spawn_server(chat_router()).await?;
    let api = ApiService::with_base_url(base);

    let reply = api.send_message(&SendMessageRequest::new("hi")).await?;

    match reply {
        SendReply::Ok(body) => {
            assert_eq!(body.response, "echo: hi");
            assert_eq!(body.history.len(), 2);
            assert_eq!(body.token_status.as_deref(), Some("valid"));
        }
        other => panic!("unexpected reply: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_send_message_json_error_body() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/send_message",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Пустое сообщение"})),
            )
        }),
    );
    let api = ApiService::with_base_url(spawn_server(router).await?);

    let reply = api.send_message(&SendMessageRequest::new("x")).await?;

    match reply {
        SendReply::Failed { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body.message(), "Пустое сообщение");
        }
        other => panic!("unexpected reply: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_send_message_plain_text_error_body() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/send_message",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream unavailable") }),
    );
    let api = ApiService::with_base_url(spawn_server(router).await?);

    let reply = api.send_message(&SendMessageRequest::new("x")).await?;

    match reply {
        SendReply::Failed { status, body } => {
            assert_eq!(status, 502);
            assert!(body.error.is_none());
        }
        other => panic!("unexpected reply: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() -> anyhow::Result<()> {
    // Reserve a port, then free it so nothing is listening there
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let api = ApiService::with_base_url(format!("http://{}", addr));
    let result = api.send_message(&SendMessageRequest::new("hi")).await;

    assert!(matches!(result, Err(AppError::Transport(_))));
    Ok(())
}

#[tokio::test]
async fn test_export_clear_and_status() -> anyhow::Result<()> {
    let api = ApiService::with_base_url(spawn_server(chat_router()).await?);

    let export = api.export_chat().await?;
    assert_eq!(export.session_id(), "3f2c");
    assert_eq!(export.messages().len(), 2);

    let cleared = api.clear_chat().await?;
    assert!(cleared.success);

    let status = api.token_status().await?;
    assert_eq!(ServiceState::from(&status), ServiceState::Ready);
    Ok(())
}

#[tokio::test]
async fn test_service_not_configured_maps_503() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/token/status",
        get(|| async {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"error": "Сервис GigaChat не настроен. Проверьте переменные окружения."})),
            )
        }),
    );
    let client = ChatClient::new(ApiService::with_base_url(spawn_server(router).await?));

    assert_eq!(client.service_state().await, ServiceState::NotConfigured);
    Ok(())
}

#[tokio::test]
async fn test_full_chat_cycle_over_http() -> anyhow::Result<()> {
    let client = ChatClient::new(ApiService::with_base_url(spawn_server(chat_router()).await?));
    let mut transcript = Transcript::new();

    let restored = client.restore_history(&mut transcript).await?;
    assert_eq!(restored, 2);

    transcript.input = "как дела?".to_string();
    let outcome = client.send_message(&mut transcript).await;

    assert_eq!(outcome, SendOutcome::Replied);
    assert_eq!(transcript.message_count(), 4);
    let last = transcript.messages().last().expect("assistant reply");
    assert_eq!(last.role, Role::Assistant);
    assert_eq!(last.content, "echo: как дела?");
    assert!(!transcript.typing);
    assert!(transcript.input.is_empty());
    Ok(())
}
