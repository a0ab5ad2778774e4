use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::http::response::StatusCode;

/// Location of the error page for `status`: `<webroot>/errors/error<code>.html`.
pub fn error_page_path(webroot: &Path, status: StatusCode) -> PathBuf {
    webroot
        .join("errors")
        .join(format!("error{}.html", status.as_u16()))
}

/// Loads the error page for `status` from disk.
///
/// A missing or unreadable page is an error for the whole connection.
pub async fn load_error_page(webroot: &Path, status: StatusCode) -> anyhow::Result<Vec<u8>> {
    let path = error_page_path(webroot, status);
    tokio::fs::read(&path)
        .await
        .with_context(|| format!("cannot read error page {}", path.display()))
}
