use layoffwatch_api::{Client, Error};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EXPORT_PATH: &str = "/spreadsheets/d/1vAjibxwMZ2n0AE91NageAMCwwDAfUICjTj8BiaPa8NE/export";

#[tokio::test]
async fn fetch_roster_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(EXPORT_PATH))
        .and(query_param("format", "csv"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("Company\nAcme Inc\nBeta LLC\n")
                .insert_header("content-type", "text/csv"),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.fetch_roster_csv().await;
    assert!(result.is_ok());

    let body = result.unwrap();
    assert!(body.starts_with("Company\n"));
    assert!(body.contains("Beta LLC"));
}

#[tokio::test]
async fn fetch_roster_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(EXPORT_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.fetch_roster_csv().await;

    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("Internal Server Error"));
        }
        other => panic!("expected HttpStatus error, got {:?}", other),
    }
}

#[tokio::test]
async fn fetch_roster_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(EXPORT_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.fetch_roster_csv().await;

    assert!(matches!(result, Err(Error::HttpStatus { status: 404, .. })));
}

#[tokio::test]
async fn error_body_snippet_is_truncated() {
    let mock_server = MockServer::start().await;
    let long_body = "x".repeat(5000);

    Mock::given(method("GET"))
        .and(path(EXPORT_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string(long_body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.fetch_roster_csv().await;

    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 503);
            assert!(body.ends_with("...[truncated]"));
            assert!(body.len() < 5000);
        }
        other => panic!("expected HttpStatus error, got {:?}", other),
    }
}
