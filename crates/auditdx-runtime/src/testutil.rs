//! Test scaffolding: a scripted HTTP stub for exercising the probe and
//! exchange paths against a real socket, and builders for throwaway
//! project checkouts.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread::JoinHandle;
use std::time::Duration;

/// Serves a fixed list of responses in order, one connection each, then
/// stops listening. Every response closes its connection, so sequential
/// requests from fresh clients line up with the script.
pub(crate) struct StubBackend {
    base_url: String,
    handle: Option<JoinHandle<Vec<String>>>,
}

impl StubBackend {
    pub fn serve(responses: Vec<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = std::thread::spawn(move || {
            let mut request_lines = Vec::new();
            for response in responses {
                let Ok((mut stream, _)) = listener.accept() else {
                    break;
                };
                if let Some(request_line) = drain_request(&mut stream) {
                    request_lines.push(request_line);
                }
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
            request_lines
        });

        Self {
            base_url: format!("http://{}", addr),
            handle: Some(handle),
        }
    }

    /// Accepts one connection, reads the request, and never answers.
    /// The accept thread is left to finish on its own.
    pub fn serve_silent() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                drain_request(&mut stream);
                std::thread::sleep(Duration::from_secs(5));
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            handle: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request lines observed, in order ("GET /api/health HTTP/1.1" style).
    pub fn finish(mut self) -> Vec<String> {
        match self.handle.take() {
            Some(handle) => handle.join().unwrap(),
            None => Vec::new(),
        }
    }
}

/// Read one HTTP request off the stream: request line, headers, and as many
/// body bytes as Content-Length promises.
fn drain_request(stream: &mut std::net::TcpStream) -> Option<String> {
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .ok()?;
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;

    let mut content_length = 0usize;
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line).is_err() || line == "\r\n" || line.is_empty() {
            break;
        }
        if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
            content_length = value.trim().parse().unwrap_or(0);
        }
    }

    if content_length > 0 {
        let mut body = vec![0u8; content_length];
        let _ = reader.read_exact(&mut body);
    }

    Some(request_line.trim_end().to_string())
}

pub(crate) fn text_response(status_line: &str, body: &str) -> String {
    response_with_type(status_line, "text/plain", body)
}

pub(crate) fn json_response(status_line: &str, body: &str) -> String {
    response_with_type(status_line, "application/json", body)
}

fn response_with_type(status_line: &str, content_type: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        content_type,
        body.len(),
        body
    )
}

/// An address that refuses connections: bind an ephemeral port, then free it.
pub(crate) fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Write a service file padded to the requested line count.
pub(crate) fn write_service(services_dir: &Path, name: &str, lines: usize) {
    std::fs::write(services_dir.join(name), "// service line\n".repeat(lines)).unwrap();
}

/// Processor source of exactly `lines` lines, containing each given pattern.
pub(crate) fn processor_content(lines: usize, patterns: &[&str]) -> String {
    let mut content: Vec<String> = patterns.iter().map(|p| format!("// uses {}", p)).collect();
    while content.len() < lines {
        content.push("processAudit();".to_string());
    }
    content.truncate(lines);
    content.join("\n")
}

/// Checkout with every required path, comprehensive services, and a
/// processor that clears the size minimum with all patterns present.
pub(crate) fn build_healthy_project(root: &Path) {
    let services_dir = root.join("backend").join("services");
    std::fs::create_dir_all(&services_dir).unwrap();
    std::fs::create_dir_all(root.join("frontend")).unwrap();
    std::fs::write(
        root.join("backend").join("package.json"),
        "{\"name\": \"local-business-audit-backend\"}\n",
    )
    .unwrap();

    for name in auditdx_types::SERVICE_FILES {
        write_service(&services_dir, name, 150);
    }

    let patterns: Vec<&str> = auditdx_types::PROCESSOR_MARKERS
        .iter()
        .map(|(pattern, _)| *pattern)
        .collect();
    std::fs::write(
        services_dir.join(auditdx_types::PROCESSOR_FILE),
        processor_content(250, &patterns),
    )
    .unwrap();
}
