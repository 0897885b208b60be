use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use waypoint_core::config::CompletionSettings;
use waypoint_core::{CompletionClient, CompletionRequest};
use waypoint_interaction::ChatCompletionClient;

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|window| window == b"\r\n\r\n")
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(header_end) = find_header_end(&buf) {
            let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
            let length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

/// Serves exactly one canned HTTP response and returns the raw request.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.expect("write response");
        let _ = socket.shutdown().await;
        request
    });

    (format!("http://{}/v1", addr), handle)
}

fn client_for(base_url: String) -> ChatCompletionClient {
    let settings = CompletionSettings {
        base_url,
        ..CompletionSettings::default()
    };
    let http = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("http client");
    ChatCompletionClient::new(settings, "test-key").with_http_client(http)
}

#[tokio::test]
async fn test_success_returns_message_content() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"choices":[{"message":{"role":"assistant","content":"{\"title\":\"T\"}"}}]}"#,
    )
    .await;

    let client = client_for(base_url);
    let text = client
        .complete(&CompletionRequest::json_only("Plan a unit"))
        .await
        .expect("completion");
    assert_eq!(text, "{\"title\":\"T\"}");

    let raw_request = server.await.expect("server task");
    assert!(raw_request.starts_with("POST /v1/chat/completions HTTP/1.1"));
    assert!(raw_request.to_lowercase().contains("authorization: bearer test-key"));

    let body_start = raw_request.find("\r\n\r\n").expect("body") + 4;
    let body: serde_json::Value =
        serde_json::from_str(&raw_request[body_start..]).expect("json body");
    assert_eq!(body["stream"], false);
    assert_eq!(body["max_tokens"], 2048);
    assert_eq!(body["messages"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["messages"][1]["content"], "Plan a unit");
}

#[tokio::test]
async fn test_status_500_without_json_is_network_error() {
    let (base_url, server) = serve_once("500 Internal Server Error", "").await;

    let err = client_for(base_url)
        .complete(&CompletionRequest::json_only("x"))
        .await
        .unwrap_err();

    assert!(err.is_network());
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "Network error: API error: 500");
    server.await.expect("server task");
}

#[tokio::test]
async fn test_error_status_carries_endpoint_message() {
    let (base_url, server) = serve_once(
        "401 Unauthorized",
        r#"{"error":{"message":"Invalid API key","type":"auth"}}"#,
    )
    .await;

    let err = client_for(base_url)
        .complete(&CompletionRequest::json_only("x"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "Network error: Invalid API key");
    server.await.expect("server task");
}

#[tokio::test]
async fn test_success_without_content_is_empty_response() {
    let (base_url, server) = serve_once("200 OK", r#"{"choices":[]}"#).await;

    let err = client_for(base_url)
        .complete(&CompletionRequest::json_only("x"))
        .await
        .unwrap_err();

    assert!(err.is_empty_response());
    server.await.expect("server task");
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = client_for(format!("http://{}/v1", addr))
        .complete(&CompletionRequest::json_only("x"))
        .await
        .unwrap_err();

    assert!(err.is_network());
    assert_eq!(err.status(), None);
}
