//! Shared utilities for relay integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use cors_relay::config::RelayConfig;
use cors_relay::http::RelayServer;
use cors_relay::lifecycle::Shutdown;

/// One request as observed by a mock upstream.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// Case-insensitive header lookup.
    #[allow(dead_code)]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Start a mock upstream that answers every request with a fixed status,
/// content type and body, recording each request it sees.
pub async fn start_recording_upstream(
    addr: SocketAddr,
    status: u16,
    content_type: Option<&'static str>,
    body: &'static str,
) -> Arc<Mutex<Vec<RecordedRequest>>> {
    let listener = TcpListener::bind(addr).await.unwrap();
    let log = Arc::new(Mutex::new(Vec::new()));
    let log_handle = log.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let log = log_handle.clone();
                    tokio::spawn(async move {
                        if let Some(request) = read_request(&mut socket).await {
                            log.lock().unwrap().push(request);
                        }
                        let content_type_line = content_type
                            .map(|value| format!("Content-Type: {}\r\n", value))
                            .unwrap_or_default();
                        let response = format!(
                            "HTTP/1.1 {} {}\r\n{}Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status,
                            reason(status),
                            content_type_line,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    log
}

/// Start a relay on `relay_addr` forwarding to `http://<upstream_addr>`.
///
/// Returns the shutdown handle; trigger it to stop the server.
pub async fn start_relay(relay_addr: SocketAddr, upstream_addr: SocketAddr) -> Shutdown {
    let mut config = RelayConfig::default();
    config.listener.bind_address = relay_addr.to_string();
    config.upstream.origin = format!("http://{}", upstream_addr);
    start_relay_with_config(config).await
}

/// Start a relay with an explicit configuration.
pub async fn start_relay_with_config(config: RelayConfig) -> Shutdown {
    let shutdown = Shutdown::new();
    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let server = RelayServer::new(config);
    let receiver = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, receiver).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown
}

/// Non-pooled client so each test observes fresh connections.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Read and parse one HTTP/1.1 request off the socket.
async fn read_request(socket: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_subslice(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
        if buf.len() > 64 * 1024 {
            return None;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let mut lines = head.split("\r\n");
    let request_line = lines.next()?;
    let mut parts = request_line.split(' ');
    let method = parts.next()?.to_string();
    let target = parts.next()?.to_string();

    let mut headers = Vec::new();
    let mut content_length = 0usize;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim().to_string();
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.parse().unwrap_or(0);
            }
            headers.push((name.to_string(), value));
        }
    }

    let mut body = buf[header_end..].to_vec();
    while body.len() < content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }

    Some(RecordedRequest {
        method,
        target,
        headers,
        body,
    })
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "OK",
    }
}
