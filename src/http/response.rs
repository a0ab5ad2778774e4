use std::time::SystemTime;

use crate::config::ServeConfig;

/// HTTP status codes the server answers with.
///
/// - `Ok` (200): File served
/// - `BadRequest` (400): Malformed request line
/// - `Forbidden` (403): Visit counter exhausted
/// - `NotFound` (404): No such file, or an unknown extension
/// - `MethodNotAllowed` (405): Anything but GET
/// - `HttpVersionNotSupported` (505): Anything but HTTP/1.1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 505 HTTP Version Not Supported
    HttpVersionNotSupported,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// ```
    /// # use sstt::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::HttpVersionNotSupported.as_u16(), 505);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::HttpVersionNotSupported => 505,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::HttpVersionNotSupported => "HTTP Version Not Supported",
        }
    }
}

/// A complete HTTP response ready to be sent to a client.
///
/// Headers keep the order they were added in, which is the order they go out
/// on the wire.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Headers as name/value pairs, in wire order
    pub headers: Vec<(String, String)>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/html; charset=utf-8")
///     .body(page)
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Adds a header, or replaces the value of an existing one in place.
    ///
    /// Names compare case-insensitively.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&key))
        {
            Some(slot) => slot.1 = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final Response.
    ///
    /// `Content-Length` always reflects the body actually attached. A value
    /// set earlier keeps its position but gets overwritten; without one, the
    /// header is appended.
    pub fn build(self) -> Response {
        let length = self.body.len().to_string();
        let builder = self.header("Content-Length", length);

        Response {
            status: builder.status,
            headers: builder.headers,
            body: builder.body,
        }
    }
}

impl Response {
    /// Response carrying the headers every answer shares.
    ///
    /// Order: `Date`, `Server`, `Content-Length`, `Connection`, `Keep-Alive`,
    /// `Content-Type`. Callers append anything else (e.g. `Set-Cookie`).
    pub fn standard(
        status: StatusCode,
        content_type: &str,
        body: Vec<u8>,
        cfg: &ServeConfig,
    ) -> ResponseBuilder {
        ResponseBuilder::new(status)
            .header("Date", httpdate::fmt_http_date(SystemTime::now()))
            .header("Server", cfg.server_name.as_str())
            .header("Content-Length", body.len().to_string())
            .header("Connection", "keep-alive")
            .header("Keep-Alive", format!("timeout={}", cfg.keep_alive_secs()))
            .header("Content-Type", format!("{}; charset=utf-8", content_type))
            .body(body)
    }

    /// Looks up a header by name, case-insensitively.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
