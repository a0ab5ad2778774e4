#![allow(dead_code)]

use std::fs;
use std::sync::Arc;
use std::time::Duration;

use sstt::config::ServeConfig;
use tempfile::TempDir;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

pub const INDEX: &str = "<html><body>index</body></html>\n";
pub const STYLE: &str = "body { color: red; }\n";

/// Webroot with an index, a stylesheet, a file of unknown type and every
/// error page.
pub fn webroot() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), INDEX).unwrap();
    fs::create_dir(dir.path().join("css")).unwrap();
    fs::write(dir.path().join("css/style.css"), STYLE).unwrap();
    fs::write(dir.path().join("notes.txt"), "plain").unwrap();
    fs::create_dir(dir.path().join("errors")).unwrap();
    for code in [400, 403, 404, 405, 505] {
        fs::write(
            dir.path().join(format!("errors/error{}.html", code)),
            error_page(code),
        )
        .unwrap();
    }
    dir
}

pub fn error_page(code: u16) -> String {
    format!("<html><body><h1>Error {}</h1></body></html>\n", code)
}

pub fn serve_config(dir: &TempDir, idle_timeout: Duration) -> Arc<ServeConfig> {
    Arc::new(ServeConfig {
        webroot: dir.path().canonicalize().unwrap(),
        idle_timeout,
        server_name: "test.sstt".to_string(),
        require_host: false,
    })
}

/// A response split into status line, header lines and body.
pub struct RawResponse {
    pub status_line: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn header_names(&self) -> Vec<&str> {
        self.headers.iter().map(|(k, _)| k.as_str()).collect()
    }
}

/// Splits one complete response off the front of `bytes`. Returns `None`
/// until the headers and the whole body are there.
pub fn split_response(bytes: &[u8]) -> Option<(RawResponse, &[u8])> {
    let end = bytes.windows(4).position(|w| w == b"\r\n\r\n")?;
    let head = std::str::from_utf8(&bytes[..end]).unwrap();
    let mut lines = head.split("\r\n");
    let status_line = lines.next().unwrap().to_string();
    let headers: Vec<(String, String)> = lines
        .map(|l| {
            let (k, v) = l.split_once(": ").unwrap();
            (k.to_string(), v.to_string())
        })
        .collect();

    let length: usize = headers
        .iter()
        .find(|(k, _)| k == "Content-Length")
        .map(|(_, v)| v.parse().unwrap())
        .expect("no Content-Length");
    let body_start = end + 4;
    if bytes.len() < body_start + length {
        return None;
    }
    let body = bytes[body_start..body_start + length].to_vec();

    Some((
        RawResponse {
            status_line,
            headers,
            body,
        },
        &bytes[body_start + length..],
    ))
}

/// Reads exactly one response. Panics if anything follows it or the stream
/// ends first.
pub async fn read_response<R: AsyncRead + Unpin>(stream: &mut R) -> RawResponse {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        if let Some((response, rest)) = split_response(&buf) {
            assert!(rest.is_empty(), "unexpected bytes after response");
            return response;
        }
        let n = stream.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before a full response");
        buf.extend_from_slice(&chunk[..n]);
    }
}

/// Sends `request` and waits for its response.
pub async fn exchange<S: AsyncRead + AsyncWrite + Unpin>(stream: &mut S, request: &str) -> RawResponse {
    stream.write_all(request.as_bytes()).await.unwrap();
    read_response(stream).await
}

/// True when the other side closes without sending anything more.
pub async fn closed_silently<R: AsyncRead + Unpin>(stream: &mut R) -> bool {
    let mut buf = [0u8; 64];
    matches!(stream.read(&mut buf).await, Ok(0) | Err(_))
}
