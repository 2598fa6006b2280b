//! Fixtures shared by the unit tests.

use crate::types::api_response::{Outputs, SeriesData};
use crate::types::month::{MonthCode, CANONICAL_MONTHS};
use std::collections::HashMap;

/// A recorded-style response for 40°N, 105°W with three series.
pub(crate) const SAMPLE_RESPONSE: &str = include_str!("../tests/data/sample_response.json");

/// A series whose month `i` has the value `base + i`.
pub(crate) fn ramp_series(base: f64) -> SeriesData {
    let monthly: HashMap<String, f64> = CANONICAL_MONTHS
        .iter()
        .enumerate()
        .map(|(i, m)| (m.code().to_string(), base + i as f64))
        .collect();
    SeriesData {
        annual: base + 5.5,
        monthly,
    }
}

pub(crate) fn ramp_outputs(names: &[&str]) -> Outputs {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.to_string(), ramp_series(100.0 * i as f64)))
        .collect()
}

/// A one-shot HTTP server on localhost.
pub(crate) struct TestServer {
    /// Endpoint URL pointing at the server, with the API path.
    pub base_url: String,
    /// Resolves to the request line the server received.
    pub request_line: tokio::task::JoinHandle<String>,
}

/// Answers exactly one request with the given status line, content type and body.
pub(crate) async fn serve_once(status: &str, content_type: &str, body: &str) -> TestServer {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        content_type,
        body.len(),
        body
    );

    let request_line = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut received = Vec::new();
        let mut buf = [0u8; 1024];
        while !received.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.expect("read request");
            if n == 0 {
                break;
            }
            received.extend_from_slice(&buf[..n]);
        }
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&received)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    TestServer {
        base_url: format!("http://{}/api/solar/solar_resource/v1.json", addr),
        request_line,
    }
}

/// URL of a localhost port nothing listens on.
pub(crate) fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}/api/solar/solar_resource/v1.json", addr)
}

/// HTTP client that ignores proxy settings from the environment.
pub(crate) fn local_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("build test client")
}
