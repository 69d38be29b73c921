//! Minimal stand-in for the GitHub starred endpoint
//!
//! Serves one canned response per page over plain HTTP/1.1 and records the
//! head of every request it receives.

use anyhow::Result;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Function mapping a requested page number to (status code, body)
pub type Responder = Arc<dyn Fn(u32) -> (u16, String) + Send + Sync>;

pub struct MockGitHub {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl MockGitHub {
    pub async fn start(responder: Responder) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        let handle = tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut head = Vec::new();
                let mut buf = [0u8; 1024];
                while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => head.extend_from_slice(&buf[..n]),
                    }
                }
                let head = String::from_utf8_lossy(&head).to_string();
                let page = requested_page(&head);
                if let Ok(mut guard) = recorded.lock() {
                    guard.push(head);
                }

                let (status, body) = responder(page);
                let reason = match status {
                    200 => "OK",
                    403 => "Forbidden",
                    404 => "Not Found",
                    _ => "Error",
                };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Ok(Self {
            base_url,
            requests,
            handle,
        })
    }

    /// Raw request heads, in arrival order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Page numbers requested so far, in arrival order
    pub fn requested_pages(&self) -> Vec<u32> {
        self.requests().iter().map(|head| requested_page(head)).collect()
    }
}

impl Drop for MockGitHub {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Extracts the `page` query parameter from a request head
fn requested_page(head: &str) -> u32 {
    let request_line = head.lines().next().unwrap_or_default();
    let target = request_line.split_whitespace().nth(1).unwrap_or_default();
    let query = target.split_once('?').map(|(_, q)| q).unwrap_or_default();
    query
        .split('&')
        .find_map(|param| param.strip_prefix("page="))
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}
