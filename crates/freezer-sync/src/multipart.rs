//! Multipart upload body for the remote file API.
//!
//! The store expects `multipart/related` with a fixed boundary token:
//! a JSON metadata part (`name`, `mimeType`) followed by the JSON
//! content part, each preceded by its own `Content-Type` line, joined
//! with CRLF and closed by the terminating boundary delimiter.

use serde::Serialize;

/// Fixed multipart boundary token.
pub const BOUNDARY: &str = "boundary";

/// Content type of the remote document.
pub const DOCUMENT_MIME_TYPE: &str = "application/json";

#[derive(Serialize)]
struct FileMetadata<'a> {
    name: &'a str,
    #[serde(rename = "mimeType")]
    mime_type: &'a str,
}

/// Value for the request's `Content-Type` header.
pub fn content_type() -> String {
    format!("multipart/related; boundary={BOUNDARY}")
}

/// Builds the multipart body carrying `content` as a document named `name`.
pub fn build_body(name: &str, content: &str) -> String {
    let metadata = FileMetadata {
        name,
        mime_type: DOCUMENT_MIME_TYPE,
    };
    // FileMetadata serialization cannot fail: two plain string fields.
    let metadata_json = serde_json::to_string(&metadata).unwrap_or_default();
    let delimiter = format!("--{BOUNDARY}");
    let close_delimiter = format!("--{BOUNDARY}--");

    [
        delimiter.as_str(),
        "Content-Type: application/json; charset=UTF-8",
        "",
        metadata_json.as_str(),
        delimiter.as_str(),
        "Content-Type: application/json",
        "",
        content,
        close_delimiter.as_str(),
    ]
    .join("\r\n")
}
