//! Executor behavior against a local mock server: retry budget,
//! error taxonomy, and auth headers.

use std::time::Duration;

use centavo::{Client, Config, CreateCharge, Error, PaymentMethod};

fn client_for(server: &mockito::ServerGuard, max_retries: u32) -> Client {
    let config = Config::new("sk_test_abc")
        .unwrap()
        .base_url(server.url())
        .unwrap()
        .timeout(Duration::from_secs(5))
        .max_retries(max_retries);
    Client::with_config(config)
}

#[tokio::test]
async fn test_5xx_exhausts_retry_budget_then_surfaces_api_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/balance")
        .with_status(500)
        .with_body(r#"{"error":{"message":"internal"}}"#)
        .expect(3) // initial attempt + 2 retries
        .create_async()
        .await;

    let client = client_for(&server, 2);
    let err = client.balance().retrieve().await.unwrap_err();

    match err {
        Error::Api { status, .. } => assert_eq!(status, 500),
        other => panic!("unexpected error: {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_429_is_retried_then_surfaces_rate_limit() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/balance")
        .with_status(429)
        .with_body(r#"{"error":{"message":"too many requests"}}"#)
        .expect(2) // initial attempt + 1 retry
        .create_async()
        .await;

    let client = client_for(&server, 1);
    let err = client.balance().retrieve().await.unwrap_err();

    assert!(matches!(err, Error::RateLimited { .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_400_surfaces_immediately_without_retry() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/charges")
        .with_status(400)
        .with_body(
            r#"{"error":{"code":"parameter_invalid","message":"amount must be positive","param":"amount"}}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, 3);
    let err = client
        .charges()
        .create(&CreateCharge::new(-5, "brl", PaymentMethod::Pix))
        .await
        .unwrap_err();

    match err {
        Error::InvalidRequest { param, .. } => assert_eq!(param.as_deref(), Some("amount")),
        other => panic!("unexpected error: {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_401_maps_to_authentication_without_retry() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/balance")
        .with_status(401)
        .with_body(r#"{"error":{"code":"invalid_key","message":"unknown key"}}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, 3);
    let err = client.balance().retrieve().await.unwrap_err();

    assert!(matches!(err, Error::Authentication { .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_requests_carry_bearer_auth_and_user_agent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/balance")
        .match_header("authorization", "Bearer sk_test_abc")
        .match_header("user-agent", mockito::Matcher::Regex("^centavo-rust/".into()))
        .with_status(200)
        .with_body(r#"{"available":1000,"pending":0,"currency":"brl"}"#)
        .create_async()
        .await;

    let client = client_for(&server, 0);
    let balance = client.balance().retrieve().await.unwrap();

    assert_eq!(balance.available, 1000);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_stalled_response_maps_to_timeout_and_is_retried() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    // Accept connections, count them, never write a response.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let server_hits = hits.clone();
    tokio::spawn(async move {
        loop {
            let Ok((socket, _)) = listener.accept().await else {
                break;
            };
            server_hits.fetch_add(1, Ordering::SeqCst);
            tokio::spawn(async move {
                let _socket = socket;
                tokio::time::sleep(Duration::from_secs(60)).await;
            });
        }
    });

    let config = Config::new("sk_test_abc")
        .unwrap()
        .base_url(format!("http://{addr}"))
        .unwrap()
        .timeout(Duration::from_millis(300))
        .max_retries(1);
    let client = Client::with_config(config);

    let err = client.balance().retrieve().await.unwrap_err();

    // Each attempt hit its deadline, and the timeout was retried once
    // before surfacing.
    assert!(matches!(err, Error::Timeout));
    assert!(hits.load(Ordering::SeqCst) >= 2);
}

#[tokio::test]
async fn test_unreachable_host_surfaces_network_error() {
    // Nothing listens on port 9; connect fails fast.
    let config = Config::new("sk_test_abc")
        .unwrap()
        .base_url("http://127.0.0.1:9")
        .unwrap()
        .timeout(Duration::from_secs(2))
        .max_retries(0);
    let client = Client::with_config(config);

    let err = client.balance().retrieve().await.unwrap_err();
    assert!(matches!(err, Error::Network(_) | Error::Timeout));
}
