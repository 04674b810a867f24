//! Extension-based content type detection.

/// Recognized (suffix, content type) pairs. The table is scanned in
/// order and the first matching suffix wins, so order is load-bearing.
const EXTENSIONS: &[(&str, &str)] = &[
    ("gif", "image/gif"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("zip", "image/zip"),
    ("gz", "image/gz"),
    ("tar", "image/tar"),
    ("htm", "text/html"),
    ("html", "text/html"),
];

/// Content type for the resource's trailing extension.
///
/// Matching is a case-sensitive suffix comparison; a resource with no
/// recognized extension yields `None` and cannot be served.
///
/// # Example
///
/// ```
/// # use cloth::http::mime;
/// assert_eq!(mime::resolve("GET /index.html"), Some("text/html"));
/// assert_eq!(mime::resolve("GET /favicon.ico"), None);
/// ```
pub fn resolve(resource: &str) -> Option<&'static str> {
    EXTENSIONS
        .iter()
        .find(|(suffix, _)| resource.ends_with(suffix))
        .map(|&(_, filetype)| filetype)
}
