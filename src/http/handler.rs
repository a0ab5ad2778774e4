//! Turns one decoded message into the response that answers it.

use tracing::{debug, info};

use crate::config::ServeConfig;
use crate::files::{load_error_page, resolve};
use crate::http::error::RequestError;
use crate::http::parser::parse_http_request;
use crate::http::request::Method;
use crate::http::response::{Response, StatusCode};

/// Answers `message`, falling back to the matching error page on any
/// per-request failure.
///
/// Only failing to load the error page itself is returned as an error; the
/// connection cannot continue after that.
pub async fn respond(cfg: &ServeConfig, message: &str) -> anyhow::Result<Response> {
    match serve(cfg, message).await {
        Ok(response) => Ok(response),
        Err(e) => {
            let status = e.status();
            info!(status = status.as_u16(), error = %e, "Error response");
            error_response(cfg, status).await
        }
    }
}

/// Runs the checks in order: request line, version, method, `Host` (when
/// required), visit counter, then the file itself. The counter is checked
/// before touching the filesystem.
pub async fn serve(cfg: &ServeConfig, message: &str) -> Result<Response, RequestError> {
    let request = parse_http_request(message)?;

    if !request.is_http11() {
        return Err(RequestError::VersionNotSupported(request.version));
    }
    if request.method != Method::GET {
        return Err(RequestError::MethodNotAllowed(request.method.as_str()));
    }
    if cfg.require_host && !request.has_header("Host") {
        return Err(RequestError::MissingHost);
    }

    let counter = request.cookie_counter();
    if counter.is_throttled() {
        return Err(RequestError::Forbidden(counter.current()));
    }

    let resource = resolve(&cfg.webroot, &request.path).await?;
    let body = resource
        .read()
        .await
        .map_err(|_| RequestError::NotFound(request.path.clone()))?;

    debug!(
        path = %request.path,
        bytes = body.len(),
        visits = counter.current(),
        "Serving file"
    );

    Ok(
        Response::standard(StatusCode::Ok, resource.content_type, body, cfg)
            .header("Set-Cookie", counter.set_cookie_value())
            .build(),
    )
}

/// Error page response for `status`. Carries no `Set-Cookie`.
pub async fn error_response(cfg: &ServeConfig, status: StatusCode) -> anyhow::Result<Response> {
    let body = load_error_page(&cfg.webroot, status).await?;
    Ok(Response::standard(status, "text/html", body, cfg).build())
}
