use crate::http::request::{Method, Request};
use thiserror::Error;

/// Reasons a message is rejected before it becomes a [`Request`].
///
/// All of them are answered with 400 Bad Request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed request line")]
    InvalidRequest,
    #[error("unknown method")]
    InvalidMethod,
    #[error("request target must start with '/'")]
    InvalidTarget,
    #[error("malformed HTTP version")]
    InvalidVersion,
}

/// Parses one decoded message into a [`Request`].
///
/// The request line must read `METHOD SP /path SP HTTP/d.d`. Any version that
/// fits the grammar is accepted here; rejecting versions other than 1.1 is left
/// to the caller so it can answer 505 instead of 400. Header lines are
/// everything after the request line up to the first blank line.
pub fn parse_http_request(message: &str) -> Result<Request, ParseError> {
    let mut lines = message.split("\r\n");

    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let (method, target, version) = parse_request_line(request_line)?;

    let (path, query) = match target.split_once('?') {
        Some((path, query)) => (path, Some(query.to_string())),
        None => (target, None),
    };

    let headers = lines
        .take_while(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    Ok(Request {
        method,
        path: path.to_string(),
        query,
        version: version.to_string(),
        headers,
    })
}

fn parse_request_line(line: &str) -> Result<(Method, &str, &str), ParseError> {
    let (method_str, rest) = line
        .split_once(' ')
        .ok_or(ParseError::InvalidRequest)?;
    let (target, version) = rest
        .rsplit_once(' ')
        .ok_or(ParseError::InvalidRequest)?;

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    if !target.starts_with('/') {
        return Err(ParseError::InvalidTarget);
    }

    if !is_version_token(version) {
        return Err(ParseError::InvalidVersion);
    }

    Ok((method, target, version))
}

/// `HTTP/` followed by exactly `digit.digit`.
fn is_version_token(token: &str) -> bool {
    match token.strip_prefix("HTTP/").map(str::as_bytes) {
        Some([major, b'.', minor]) => major.is_ascii_digit() && minor.is_ascii_digit(),
        _ => false,
    }
}
