use deck_viewer::{ApiClient, Config, DeckError, SlideApi, StagedFile};
use std::io::Read;
use std::sync::mpsc;
use std::thread;
use tempfile::TempDir;
use tiny_http::{Header, Method, Response, Server, StatusCode};

const DECK_JSON: &str = r##"{
  "template": {"font": "Lato", "color_scheme": {"primary": "#1a3c34", "background": "#f5f6f5"}},
  "slides": [
    {"type": "title", "title": "Q2 2025 Board Meeting", "subtitle": "Financial & Customer Insights"},
    {"type": "chart", "title": "Revenue Trends", "chart": {"type": "line", "data": {"labels": ["Q1", "Q2"], "datasets": []}, "options": {}}}
  ]
}"##;

/// A request as the mock backend saw it.
struct Recorded {
    method: Method,
    url: String,
    content_type: String,
    body: Vec<u8>,
}

/// Serve `responses` in order, one per request, and report what was received.
fn mock_backend(responses: Vec<(u16, &'static str)>) -> (String, mpsc::Receiver<Recorded>) {
    let server = Server::http("127.0.0.1:0").expect("Failed to start mock backend");
    let port = server
        .server_addr()
        .to_ip()
        .expect("Mock backend should listen on TCP")
        .port();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for (status, body) in responses {
            let mut request = match server.recv() {
                Ok(request) => request,
                Err(_) => return,
            };
            let mut received = Vec::new();
            let _ = request.as_reader().read_to_end(&mut received);
            let content_type = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Content-Type"))
                .map(|h| h.value.to_string())
                .unwrap_or_default();
            let _ = tx.send(Recorded {
                method: request.method().clone(),
                url: request.url().to_string(),
                content_type,
                body: received,
            });

            let header = Header::from_bytes("Content-Type", "application/json")
                .expect("Failed to create content-type header");
            let response = Response::from_string(body)
                .with_status_code(StatusCode(status))
                .with_header(header);
            let _ = request.respond(response);
        }
    });

    (format!("http://127.0.0.1:{}", port), rx)
}

fn client_for(base: &str) -> ApiClient {
    let config = Config {
        api_base_url: base.to_string(),
        request_timeout_ms: 5000,
        ..Config::default()
    };
    ApiClient::new(&config).expect("Failed to build client")
}

#[test]
fn test_list_templates() {
    let (base, rx) = mock_backend(vec![(200, r#"{"templates": ["saas", "finance", "retail"]}"#)]);
    let client = client_for(&base);

    let templates = client.list_templates().expect("Listing templates should succeed");
    assert_eq!(templates, vec!["saas", "finance", "retail"]);

    let request = rx.recv().unwrap();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, "/templates");
}

#[test]
fn test_fetch_sample_passes_template_id() {
    let (base, rx) = mock_backend(vec![(200, DECK_JSON)]);
    let client = client_for(&base);

    let deck = client.fetch_sample("finance").expect("Sample request should succeed");
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.template.font, "Lato");

    let request = rx.recv().unwrap();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, "/test?template_id=finance");
}

#[test]
fn test_upload_sends_multipart_files_in_order() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let first = dir.path().join("q2_financials.csv");
    let second = dir.path().join("feedback.pdf");
    std::fs::write(&first, "Quarter,Revenue\nQ1 2025,4400000\n").unwrap();
    std::fs::write(&second, "%PDF-1.4 feedback").unwrap();

    let (base, rx) = mock_backend(vec![(200, DECK_JSON)]);
    let client = client_for(&base);
    let files = vec![StagedFile::new(&first), StagedFile::new(&second)];

    let deck = client.upload(&files, "saas").expect("Upload should succeed");
    assert_eq!(deck.len(), 2);

    let request = rx.recv().unwrap();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, "/upload?template_id=saas");
    assert!(request.content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&request.body);
    assert_eq!(body.matches("name=\"files\"").count(), 2);
    let first_at = body.find("filename=\"q2_financials.csv\"").expect("first file part");
    let second_at = body.find("filename=\"feedback.pdf\"").expect("second file part");
    assert!(first_at < second_at);
    assert!(body.contains("Q1 2025,4400000"));
}

#[test]
fn test_upload_missing_file_fails_before_request() {
    let client = client_for("http://127.0.0.1:9");
    let files = vec![StagedFile::new("/definitely/not/here.csv")];
    assert!(matches!(
        client.upload(&files, "saas"),
        Err(DeckError::PathNotFoundError(_))
    ));
}

#[test]
fn test_http_error_carries_status_and_detail() {
    let (base, _rx) = mock_backend(vec![(
        500,
        r#"{"detail": "Error in test endpoint: boom"}"#,
    )]);
    let client = client_for(&base);

    match client.fetch_sample("saas") {
        Err(DeckError::HttpStatusError { status, detail, .. }) => {
            assert_eq!(status, 500);
            assert_eq!(detail, "Error in test endpoint: boom");
        }
        other => panic!("expected HTTP status error, got {:?}", other.map(|d| d.len())),
    }
}

#[test]
fn test_malformed_body_is_a_decode_error() {
    let (base, _rx) = mock_backend(vec![(200, "not json")]);
    let client = client_for(&base);
    assert!(matches!(
        client.list_templates(),
        Err(DeckError::DecodeError(_))
    ));
}

#[test]
fn test_unreachable_service_is_a_request_error() {
    // Bind and drop a listener to get a port nothing is serving
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = client_for(&format!("http://127.0.0.1:{}", port));
    assert!(matches!(
        client.list_templates(),
        Err(DeckError::RequestError(_))
    ));
}
