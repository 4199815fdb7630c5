use hltv_scrape::fetcher::{FetchError, HttpPageLoader, LoaderSettings, PageLoader};
use std::time::{Duration, Instant};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn loader() -> HttpPageLoader {
    HttpPageLoader::new(&LoaderSettings::default()).unwrap()
}

#[tokio::test]
async fn test_fetch_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ranking/teams"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(
                    "<html><head><title>Ranking</title></head><body>Natus Vincere</body></html>"
                        .as_bytes(),
                )
                .insert_header("Content-Type", "text/html; charset=utf-8"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/ranking/teams", mock_server.uri());
    let page = loader().fetch(&url).await.unwrap();

    assert!(page.status.is_success());
    assert!(page.body_utf8.contains("Natus Vincere"));
    assert_eq!(page.url_final.as_str(), url);

    let markup = loader().load_page(&url).await.unwrap();
    assert_eq!(markup, page.body_utf8);
}

#[tokio::test]
async fn test_fetch_404() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/team/0/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let url = format!("{}/team/0/missing", mock_server.uri());
    let result = loader().load_page(&url).await;

    match result {
        Err(FetchError::Http { status, retriable }) => {
            assert_eq!(status.as_u16(), 404);
            assert!(!retriable);
        }
        _ => panic!("Expected HTTP 404 error"),
    }
}

#[tokio::test]
async fn test_fetch_500_retryable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/results"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let url = format!("{}/results", mock_server.uri());
    let result = loader().load_page(&url).await;

    match result {
        Err(FetchError::Http { status, retriable }) => {
            assert_eq!(status.as_u16(), 500);
            assert!(retriable);
        }
        _ => panic!("Expected HTTP 500 error"),
    }
}

#[tokio::test]
async fn test_fetch_blocked_statuses() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forbidden"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/limited"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    for route in ["/forbidden", "/limited"] {
        let url = format!("{}{route}", mock_server.uri());
        match loader().load_page(&url).await {
            Err(err @ FetchError::Blocked { .. }) => assert!(!err.should_retry()),
            other => panic!("Expected Blocked for {route}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_fetch_redirect() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/team/4608/x"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/team/4608/natus-vincere"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/team/4608/natus-vincere"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes("<html><body>Final page</body></html>".as_bytes())
                .insert_header("Content-Type", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/team/4608/x", mock_server.uri());
    let page = loader().fetch(&url).await.unwrap();

    assert!(page.body_utf8.contains("Final page"));
    assert!(page.url_final.as_str().ends_with("/team/4608/natus-vincere"));
}

#[tokio::test]
async fn test_fetch_gzip_compression() {
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    let original_content =
        "<html><head><title>Compressed</title></head><body>This content is gzipped!</body></html>";

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(original_content.as_bytes()).unwrap();
    let compressed_data = encoder.finish().unwrap();

    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gzipped"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(compressed_data)
                .insert_header("Content-Type", "text/html; charset=utf-8")
                .insert_header("Content-Encoding", "gzip"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/gzipped", mock_server.uri());
    let markup = loader().load_page(&url).await.unwrap();

    assert!(markup.contains("This content is gzipped!"));
}

#[tokio::test]
async fn test_fetch_legacy_charset() {
    let mock_server = MockServer::start().await;

    // "Café" in windows-1252
    Mock::given(method("GET"))
        .and(path("/latin"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(b"<html><body>Caf\xe9</body></html>".to_vec())
                .insert_header("Content-Type", "text/html; charset=windows-1252"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/latin", mock_server.uri());
    let markup = loader().load_page(&url).await.unwrap();
    assert!(markup.contains("Café"));
}

#[tokio::test]
async fn test_fetch_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"[{"teams":[]}]"#)
                .insert_header("Content-Type", "application/json"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/search", mock_server.uri());
    let body = loader().load_page(&url).await.unwrap();
    assert_eq!(body, r#"[{"teams":[]}]"#);
}

#[tokio::test]
async fn test_fetch_unsupported_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/image"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(vec![0xFF, 0xD8, 0xFF])
                .insert_header("Content-Type", "image/jpeg"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/image", mock_server.uri());

    match loader().load_page(&url).await {
        Err(FetchError::UnsupportedContentType(content_type)) => {
            assert_eq!(content_type, "image/jpeg");
        }
        _ => panic!("Expected UnsupportedContentType error"),
    }
}

#[tokio::test]
async fn test_fetch_body_too_large() {
    let mock_server = MockServer::start().await;

    let large_body = "x".repeat(6 * 1024 * 1024);

    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(large_body.as_bytes())
                .insert_header("Content-Type", "text/html")
                .insert_header("Content-Length", &(6 * 1024 * 1024).to_string()),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/large", mock_server.uri());

    match loader().load_page(&url).await {
        Err(FetchError::BodyTooLarge(size)) => {
            assert_eq!(size, 6 * 1024 * 1024);
        }
        _ => panic!("Expected BodyTooLarge error"),
    }
}

#[tokio::test]
async fn test_fetch_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html></html>")
                .insert_header("Content-Type", "text/html")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let loader = HttpPageLoader::new(&LoaderSettings {
        page_timeout: Duration::from_millis(300),
        max_concurrent_loads: 1,
    })
    .unwrap();

    let url = format!("{}/slow", mock_server.uri());
    let err = loader.load_page(&url).await.unwrap_err();
    assert!(matches!(err, FetchError::RequestTimeout));
    assert!(err.should_retry());
}

#[tokio::test]
async fn test_loads_share_the_concurrency_budget() {
    let mock_server = MockServer::start().await;
    let delay = Duration::from_millis(200);

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body>events</body></html>")
                .insert_header("Content-Type", "text/html")
                .set_delay(delay),
        )
        .mount(&mock_server)
        .await;

    let loader = HttpPageLoader::new(&LoaderSettings {
        page_timeout: Duration::from_secs(5),
        max_concurrent_loads: 1,
    })
    .unwrap();
    let shared = loader.clone();
    let url = format!("{}/events", mock_server.uri());

    // With a single permit the two loads cannot overlap.
    let started = Instant::now();
    let (first, second) = tokio::join!(loader.load_page(&url), shared.load_page(&url));
    assert!(first.is_ok() && second.is_ok());
    assert!(started.elapsed() >= delay * 2);
}

#[tokio::test]
async fn test_fetch_invalid_url() {
    match loader().load_page("not-a-valid-url").await {
        Err(FetchError::InvalidUrl(_)) => {}
        _ => panic!("Expected InvalidUrl error"),
    }
}

#[tokio::test]
async fn test_error_retry_classification() {
    assert!(!FetchError::InvalidUrl(url::ParseError::EmptyHost).should_retry());
    assert!(!FetchError::BodyTooLarge(1000).should_retry());
    assert!(!FetchError::UnsupportedContentType("image/png".to_string()).should_retry());
    assert!(!FetchError::Charset("Invalid encoding".to_string()).should_retry());

    assert!(FetchError::Dns("DNS failure".to_string()).should_retry());
    assert!(FetchError::ConnectTimeout.should_retry());
    assert!(FetchError::RequestTimeout.should_retry());

    assert!(
        !FetchError::Http {
            status: reqwest::StatusCode::NOT_FOUND,
            retriable: false
        }
        .should_retry()
    );
    assert!(
        FetchError::Http {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            retriable: true
        }
        .should_retry()
    );
}
