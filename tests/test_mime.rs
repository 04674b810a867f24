use cloth::http::mime;

#[test]
fn test_known_extensions_resolve() {
    assert_eq!(mime::resolve("GET /index.html"), Some("text/html"));
    assert_eq!(mime::resolve("GET /page.htm"), Some("text/html"));
    assert_eq!(mime::resolve("GET /logo.png"), Some("image/png"));
    assert_eq!(mime::resolve("GET /photo.jpg"), Some("image/jpeg"));
    assert_eq!(mime::resolve("GET /photo.jpeg"), Some("image/jpeg"));
    assert_eq!(mime::resolve("GET /anim.gif"), Some("image/gif"));
    assert_eq!(mime::resolve("GET /bundle.zip"), Some("image/zip"));
    assert_eq!(mime::resolve("GET /bundle.tar"), Some("image/tar"));
    assert_eq!(mime::resolve("GET /bundle.gz"), Some("image/gz"));
}

#[test]
fn test_unknown_extension_yields_none() {
    assert_eq!(mime::resolve("GET /favicon.ico"), None);
    assert_eq!(mime::resolve("GET /script.cgi"), None);
    assert_eq!(mime::resolve("GET /notes.txt"), None);
}

#[test]
fn test_no_extension_yields_none() {
    assert_eq!(mime::resolve("GET /directory"), None);
    assert_eq!(mime::resolve(""), None);
}

#[test]
fn test_match_is_case_sensitive() {
    assert_eq!(mime::resolve("GET /INDEX.HTML"), None);
    assert_eq!(mime::resolve("GET /logo.PNG"), None);
}

#[test]
fn test_match_is_pure_suffix_comparison() {
    // No dot is required before the suffix.
    assert_eq!(mime::resolve("GET /xhtml"), Some("text/html"));
    assert_eq!(mime::resolve("GET /archive.tar.gz"), Some("image/gz"));
}
