use std::env;

use akshun::seatgeek::find_events;
use akshun::types::SearchParameters;
use chrono::NaiveDate;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// Helper function to create resolved search parameters
fn create_test_search() -> SearchParameters {
    SearchParameters {
        location: "90210".to_string(),
        range_miles: 12,
        from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        to: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
    }
}

// Serves exactly one canned HTTP response, then closes the connection
async fn spawn_one_shot_server(response: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 2048];
        let _ = socket.read(&mut buf).await;
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{}", addr)
}

// Every provider failure maps to the same fatal error, before any Rdio
// call can happen. One sequential test because the endpoint override is
// process-global.
#[tokio::test]
async fn test_find_events_provider_failures_are_service_unavailable() {
    // Transport error: nothing listens here
    unsafe { env::set_var("SEATGEEK_EVENTS_URL", "http://127.0.0.1:1") };
    let err = find_events(&create_test_search()).await.unwrap_err();
    assert_eq!(err.to_string(), "Seatgeek service unavailable");

    // Failure status reported by the provider
    let url = spawn_one_shot_server(
        "HTTP/1.1 503 Service Unavailable\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
    )
    .await;
    unsafe { env::set_var("SEATGEEK_EVENTS_URL", &url) };
    let err = find_events(&create_test_search()).await.unwrap_err();
    assert_eq!(err.to_string(), "Seatgeek service unavailable");

    // Success status but a body that is not the documented shape
    let url = spawn_one_shot_server(
        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 2\r\nconnection: close\r\n\r\n{}",
    )
    .await;
    unsafe { env::set_var("SEATGEEK_EVENTS_URL", &url) };
    let err = find_events(&create_test_search()).await.unwrap_err();
    assert_eq!(err.to_string(), "Seatgeek service unavailable");

    unsafe { env::remove_var("SEATGEEK_EVENTS_URL") };
}
