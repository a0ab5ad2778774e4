/// Extension to `Content-Type` table. Anything else is not served.
const MIME_TYPES: &[(&str, &str)] = &[
    ("gif", "image/gif"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("htm", "text/html"),
    ("html", "text/html"),
    ("css", "text/css"),
    ("js", "text/javascript"),
];

/// Looks up the content type for a file extension (without the dot).
///
/// ```
/// # use sstt::http::mime::content_type;
/// assert_eq!(content_type("html"), Some("text/html"));
/// assert_eq!(content_type("exe"), None);
/// ```
pub fn content_type(extension: &str) -> Option<&'static str> {
    MIME_TYPES
        .iter()
        .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
        .map(|(_, mime)| *mime)
}

/// Extension of a file name: everything after its first `.`.
///
/// `archive.tar.gz` yields `tar.gz`, which is not in the table.
pub fn extension_of(file_name: &str) -> Option<&str> {
    file_name
        .split_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}
