//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::future::{ready, Future};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use glyph_monitor::lifecycle::Shutdown;
use glyph_monitor::probe::{Delay, HttpTransport};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        301 => "Moved Permanently",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// Production transport that ignores proxy settings from the environment.
pub fn transport() -> HttpTransport {
    HttpTransport::from_client(reqwest::Client::builder().no_proxy().build().unwrap())
}

/// Start a mock backend whose status is chosen per request by `f`.
pub async fn start_programmable_backend<F>(f: F) -> SocketAddr
where
    F: Fn() -> u16 + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;

                        let status = f();
                        let response = format!(
                            "HTTP/1.1 {} {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                            status,
                            reason(status)
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a mock backend that always answers `status`.
pub async fn start_status_backend(status: u16) -> SocketAddr {
    start_programmable_backend(move || status).await
}

/// Start a backend that accepts connections and never answers.
pub async fn start_silent_backend() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    addr
}

/// An address nothing is listening on.
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Delay that returns immediately and fires shutdown after `limit` waits.
pub struct StopAfter {
    limit: usize,
    waits: AtomicUsize,
    shutdown: Shutdown,
}

impl StopAfter {
    pub fn new(limit: usize, shutdown: Shutdown) -> Self {
        Self {
            limit,
            waits: AtomicUsize::new(0),
            shutdown,
        }
    }

    pub fn waits(&self) -> usize {
        self.waits.load(Ordering::SeqCst)
    }
}

impl Delay for StopAfter {
    fn wait(&self, _duration: Duration) -> impl Future<Output = ()> + Send {
        if self.waits.fetch_add(1, Ordering::SeqCst) + 1 >= self.limit {
            self.shutdown.trigger();
        }
        ready(())
    }
}
