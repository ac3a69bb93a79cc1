//! Minimal HTTP/1.1 server that serves canned directory listings for tests.
//!
//! Each path maps to a status code and an HTML body. Unknown paths get 404.
//! The server keeps track of how many requests are being handled at once so
//! tests can check the concurrency bound.
//!
//! `LogCapture` collects formatted log lines so tests can check what a run
//! would have printed.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use tracing::dispatcher::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::logging::default_directive;

#[derive(Debug, Clone)]
struct Page {
    status: u16,
    body: String,
}

/// Builder for the fixture server.
#[derive(Debug, Default)]
pub struct ListingServer {
    pages: HashMap<String, Page>,
    delay: Duration,
}

/// A running fixture server. It lives until the test process exits.
#[derive(Debug, Clone)]
pub struct RunningServer {
    base: String,
    active: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
    served: Arc<AtomicUsize>,
}

impl ListingServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `body` with 200 OK at `path`.
    pub fn page(self, path: &str, body: &str) -> Self {
        self.status(path, 200, body)
    }

    /// Serves `body` with the given status at `path`.
    pub fn status(mut self, path: &str, status: u16, body: &str) -> Self {
        self.pages.insert(
            path.to_string(),
            Page {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    /// Holds every response for `delay` before answering.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn start(self) -> RunningServer {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();

        let running = RunningServer {
            base: format!("http://127.0.0.1:{}/", port),
            active: Arc::new(AtomicUsize::new(0)),
            peak: Arc::new(AtomicUsize::new(0)),
            served: Arc::new(AtomicUsize::new(0)),
        };

        let pages = Arc::new(self.pages);
        let delay = self.delay;
        let counters = running.clone();
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let pages = Arc::clone(&pages);
                let counters = counters.clone();
                thread::spawn(move || handle(stream, &pages, delay, &counters));
            }
        });

        running
    }
}

impl RunningServer {
    /// Absolute URL for a path relative to the server root ("" is the root).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }

    /// Highest number of requests that were being handled at the same time.
    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    /// Total number of requests answered.
    pub fn served(&self) -> usize {
        self.served.load(Ordering::SeqCst)
    }
}

/// HTTP client for talking to the fixture server.
///
/// Same settings as a real run, but never routed through a proxy from the
/// environment.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .no_proxy()
        .build()
        .expect("build test client")
}

/// Returns a URL on a local port nothing is listening on.
pub fn unused_local_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(
    mut stream: TcpStream,
    pages: &HashMap<String, Page>,
    delay: Duration,
    counters: &RunningServer,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let Some(path) = read_request_path(&mut stream) else {
        return;
    };

    let now = counters.active.fetch_add(1, Ordering::SeqCst) + 1;
    counters.peak.fetch_max(now, Ordering::SeqCst);

    if !delay.is_zero() {
        thread::sleep(delay);
    }

    let (status, body) = match pages.get(&path) {
        Some(page) => (page.status, page.body.as_str()),
        None => (404, "<html><body>Not Found</body></html>"),
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        body.len(),
        body
    );

    counters.active.fetch_sub(1, Ordering::SeqCst);
    counters.served.fetch_add(1, Ordering::SeqCst);
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// Reads until the end of the request headers and returns the request path.
fn read_request_path(stream: &mut TcpStream) -> Option<String> {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    while !data.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 {
            return None;
        }
        data.extend_from_slice(&buf[..n]);
    }
    let request = String::from_utf8_lossy(&data);
    let line = request.lines().next()?;
    line.split_whitespace().nth(1).map(str::to_string)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        203 => "Non-Authoritative Information",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// Shared buffer that receives formatted log output.
#[derive(Debug, Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    /// Installs a subscriber with the default (non-verbose) filter for the
    /// current thread until the guard is dropped.
    pub fn install(&self) -> DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(default_directive(false)))
            .with_writer(self.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
