use chrono::NaiveDate;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio_test::{assert_err, assert_ok};

use channel_catalog::config::{Config, SourceConfig};
use channel_catalog::errors::{AppError, SourceError};
use channel_catalog::pipeline::CatalogPipeline;
use channel_catalog::sources::{HttpPlaylistSource, PlaylistSource, PlaylistSourceFactory};

const PLAYLIST: &str = "#EXTM3U\n#EXTINF:-1 tvg-id=\"ZeeNews.in\",Zee News (720p)\nhttps://example.com/zee.m3u8\n#EXTINF:-1,Star Sports 1 HD\nhttp://example.com/stream.m3u8\n";

/// Serve one canned HTTP response and return the URL to request
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: audio/x-mpegurl\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{addr}/streams/in.m3u")
}

fn source_config(url: String) -> SourceConfig {
    SourceConfig {
        url,
        connect_timeout: Duration::from_secs(2),
        request_timeout: Duration::from_secs(5),
        user_agent: Some("channel-catalog-test".to_string()),
    }
}

#[tokio::test]
async fn test_fetch_and_generate_over_http() {
    let url = serve_once("200 OK", PLAYLIST).await;
    let source = assert_ok!(PlaylistSourceFactory::create(&source_config(url)));

    let output = CatalogPipeline::from_config(&Config::default())
        .run(source.as_ref(), NaiveDate::from_ymd_opt(2025, 2, 1).unwrap())
        .await
        .unwrap();

    let ids: Vec<&str> = output.dataset.channels.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["zee-news-720p", "star-sports-1-hd"]);
    assert_eq!(output.dataset.featured, ids);
    assert_eq!(output.summary.total_channels, 2);
    assert_eq!(output.summary.featured_channels, 2);
}

#[tokio::test]
async fn test_non_success_status_is_a_source_error() {
    let url = serve_once("404 Not Found", "missing").await;
    let source = HttpPlaylistSource::from_config(&source_config(url)).unwrap();

    let err = assert_err!(source.fetch_playlist().await);
    assert!(matches!(err, SourceError::Http { status: 404, .. }));
}

#[tokio::test]
async fn test_fetch_failure_aborts_the_run() {
    let url = serve_once("503 Service Unavailable", "").await;
    let source = HttpPlaylistSource::from_config(&source_config(url)).unwrap();

    let result = CatalogPipeline::from_config(&Config::default())
        .run(&source, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap())
        .await;

    let err = assert_err!(result);
    assert!(matches!(
        err,
        AppError::Source(SourceError::Http { status: 503, .. })
    ));
}

#[tokio::test]
async fn test_unreachable_host_is_reported() {
    // Bind then drop so the port is very likely closed
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source =
        HttpPlaylistSource::from_config(&source_config(format!("http://{addr}/in.m3u"))).unwrap();
    let err = assert_err!(source.fetch_playlist().await);
    assert!(matches!(err, SourceError::Unreachable { .. }));
}
