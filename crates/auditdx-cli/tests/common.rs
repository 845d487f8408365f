//! Shared fixtures for the CLI integration tests: a throwaway checkout
//! builder, a scripted single-thread HTTP stub standing in for the backend,
//! and a command builder pointing the binary at both.
//!
//! Note: Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)` annotation.
#![allow(dead_code)]

use assert_cmd::Command;
use auditdx_types::{CRITICAL_FIELDS, PROCESSOR_MARKERS, SERVICE_FILES};
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::JoinHandle;
use std::time::Duration;
use tempfile::TempDir;

pub struct TestFixture {
    temp_dir: TempDir,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let fixture = Self { temp_dir };

        fs::create_dir_all(fixture.project_root()).expect("Failed to create project root");
        fixture.write_config();
        fixture
    }

    pub fn project_root(&self) -> PathBuf {
        self.temp_dir.path().join("checkout")
    }

    pub fn scratch_path(&self) -> PathBuf {
        self.temp_dir.path().join("audit_response.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.toml")
    }

    /// Short network deadlines and a per-fixture scratch path, so tests
    /// never race each other on a shared file
    fn write_config(&self) {
        let content = format!(
            "[backend]\nhealth_timeout_secs = 2\nexchange_timeout_secs = 2\n\n\
             [scratch]\nresponse_path = \"{}\"\n",
            self.scratch_path().display()
        );
        fs::write(self.config_path(), content).expect("Failed to write config");
    }

    pub fn services_dir(&self) -> PathBuf {
        self.project_root().join("backend").join("services")
    }

    /// Checkout with every required path, comprehensive services, and a
    /// processor that clears the size minimum with all patterns present
    pub fn build_complete_project(&self) {
        fs::create_dir_all(self.services_dir()).expect("Failed to create services dir");
        fs::create_dir_all(self.project_root().join("frontend"))
            .expect("Failed to create frontend dir");
        fs::write(
            self.project_root().join("backend").join("package.json"),
            "{\"name\": \"local-business-audit-backend\"}\n",
        )
        .expect("Failed to write package.json");

        for name in SERVICE_FILES {
            self.write_service(name, 150);
        }

        let patterns: Vec<&str> = PROCESSOR_MARKERS.iter().map(|(p, _)| *p).collect();
        self.write_processor(250, &patterns);
    }

    pub fn write_service(&self, name: &str, lines: usize) {
        fs::write(
            self.services_dir().join(name),
            "// service line\n".repeat(lines),
        )
        .expect("Failed to write service file");
    }

    /// Processor source of exactly `lines` lines, containing each pattern
    pub fn write_processor(&self, lines: usize, patterns: &[&str]) {
        let mut content: Vec<String> =
            patterns.iter().map(|p| format!("// uses {}", p)).collect();
        while content.len() < lines {
            content.push("processAudit();".to_string());
        }
        content.truncate(lines);
        fs::write(
            self.services_dir().join("auditProcessor.js"),
            content.join("\n"),
        )
        .expect("Failed to write processor file");
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("auditdx").expect("Failed to find auditdx binary");
        cmd.arg("--config")
            .arg(self.config_path())
            .arg("--project-root")
            .arg(self.project_root());
        cmd
    }
}

/// Serves a fixed list of responses in order, one connection each. Every
/// response closes its connection, so sequential requests from the binary
/// line up with the script.
pub struct StubBackend {
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

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request lines observed, in order ("GET /api/health HTTP/1.1" style)
    pub fn finish(mut self) -> Vec<String> {
        match self.handle.take() {
            Some(handle) => handle.join().unwrap(),
            None => Vec::new(),
        }
    }
}

/// Read one HTTP request off the stream: request line, headers, and as many
/// body bytes as Content-Length promises
fn drain_request(stream: &mut std::net::TcpStream) -> Option<String> {
    stream.set_read_timeout(Some(Duration::from_secs(5))).ok()?;
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

pub fn text_response(status_line: &str, body: &str) -> String {
    response_with_type(status_line, "text/plain", body)
}

pub fn json_response(status_line: &str, body: &str) -> String {
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

/// An address that refuses connections: bind an ephemeral port, then free it
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Response body with every critical field populated
pub fn complete_audit_body() -> String {
    let mut map = serde_json::Map::new();
    for field in CRITICAL_FIELDS {
        map.insert(field.to_string(), serde_json::json!("populated"));
    }
    serde_json::Value::Object(map).to_string()
}
