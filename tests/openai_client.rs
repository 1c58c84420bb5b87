use interview_practice::services::llm::{ChatMessage, ChatModel, ChatRequest, LlmError, OpenAIClient};
use interview_practice::types::{AppError, Session, SessionDefaults};
use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer) -> OpenAIClient {
    OpenAIClient::new(
        "sk-test",
        "gpt-4o-mini",
        format!("{}/v1/chat/completions", server.uri()),
    )
    .unwrap()
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn test_completion_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "temperature": 0.5,
            "messages": [
                { "role": "system", "content": "You are a coach." },
                { "role": "user", "content": "What is overfitting?" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Overfitting is...")))
        .expect(1)
        .mount(&server)
        .await;

    let request = ChatRequest {
        messages: vec![
            ChatMessage::system("You are a coach."),
            ChatMessage::user("What is overfitting?"),
        ],
        temperature: 0.5,
    };
    let reply = client_for(&server).complete(&request).await.unwrap();
    assert_eq!(reply.content, "Overfitting is...");
}

#[tokio::test]
async fn test_http_errors_are_classified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = ChatRequest {
        messages: vec![ChatMessage::user("hi")],
        temperature: 0.7,
    };

    let err = client.complete(&request).await.unwrap_err();
    assert!(matches!(err, LlmError::AuthenticationFailed { .. }));

    let err = client.complete(&request).await.unwrap_err();
    assert!(matches!(err, LlmError::RateLimited { message } if message == "quota exceeded"));
}

#[tokio::test]
async fn test_unknown_model_reports_model_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "message": "The model `gpt-4o-mini` does not exist", "code": "model_not_found" }
        })))
        .mount(&server)
        .await;

    let request = ChatRequest {
        messages: vec![ChatMessage::user("hi")],
        temperature: 0.7,
    };
    let err = client_for(&server).complete(&request).await.unwrap_err();
    assert_eq!(err.to_string(), "model not found: gpt-4o-mini");
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let request = ChatRequest {
        messages: vec![ChatMessage::user("hi")],
        temperature: 0.7,
    };
    let err = client_for(&server).complete(&request).await.unwrap_err();
    assert!(matches!(err, LlmError::ParseError { .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let client = OpenAIClient::new("sk-test", "gpt-4o-mini", "http://127.0.0.1:1/v1/chat/completions").unwrap();
    let request = ChatRequest {
        messages: vec![ChatMessage::user("hi")],
        temperature: 0.7,
    };
    let err = client.complete(&request).await.unwrap_err();
    assert!(matches!(err, LlmError::NetworkError { .. }));
}

#[tokio::test]
async fn test_session_turns_against_live_client() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Hi, I'm Alex.")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut session = Session::new(&SessionDefaults::default());

    let err = session.submit_user_message("Hi", &client).await.unwrap_err();
    assert!(matches!(err, AppError::ExternalCall(LlmError::ServerError { status: Some(500), .. })));
    assert_eq!(session.messages().len(), 1);

    let reply = session.submit_user_message("Hi again", &client).await.unwrap();
    assert_eq!(reply.content, "Hi, I'm Alex.");
    assert_eq!(session.messages().len(), 3);

    // Second request carried the full history behind a fresh system prompt.
    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[1]["content"], "Hi");
    assert_eq!(messages[2]["content"], "Hi again");
}
