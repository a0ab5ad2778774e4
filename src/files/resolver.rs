use std::path::{Path, PathBuf};

use crate::http::error::RequestError;
use crate::http::mime;

/// Document served for `/`.
pub const INDEX_FILE: &str = "index.html";

/// A regular file under the webroot that can be served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub path: PathBuf,
    pub size: u64,
    pub content_type: &'static str,
}

impl Resource {
    /// Reads the whole file. The handle is closed before returning.
    pub async fn read(&self) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }
}

/// Maps a request path to a file under `webroot`.
///
/// Any `?query` is dropped and `/` becomes `/index.html`. The target must be
/// an existing regular file whose extension is in the MIME table. Paths with a
/// `..` segment never resolve.
pub async fn resolve(webroot: &Path, path: &str) -> Result<Resource, RequestError> {
    let not_found = || RequestError::NotFound(path.to_string());

    let path_only = path.split_once('?').map_or(path, |(p, _)| p);
    let relative = match path_only {
        "/" => INDEX_FILE,
        other => other.trim_start_matches('/'),
    };

    if relative.is_empty() || relative.split('/').any(|segment| segment == "..") {
        return Err(not_found());
    }

    let full = webroot.join(relative);
    let meta = tokio::fs::metadata(&full).await.map_err(|_| not_found())?;
    if !meta.is_file() {
        return Err(not_found());
    }

    let file_name = relative.rsplit('/').next().unwrap_or(relative);
    let content_type = mime::extension_of(file_name)
        .and_then(mime::content_type)
        .ok_or_else(not_found)?;

    Ok(Resource {
        path: full,
        size: meta.len(),
        content_type,
    })
}
