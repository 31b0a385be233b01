//! Slicing probe: allocating splits vs. borrowed subslices, JSON decoding
//!
//! Two families share this module because both compare owned-copy and
//! borrowed views of the same bytes:
//! - path splitting: `split().collect()` allocates a vector of owned
//!   segments, while slicing around the separator borrows from the input;
//! - JSON decoding: the same two-field document decoded into a typed struct,
//!   into an untyped `serde_json::Value` tree, and from a raw byte slice.

use serde::Deserialize;

/// Path input used by the splitting benches
pub const SAMPLE_PATH: &str = "hello/world";

/// Document decoded by the JSON benches
pub const GREETING_JSON: &str = r#"{
    "Hello": "Hello",
    "World": "world"
}"#;

/// Target shape for the typed decoders
#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Greeting {
    /// Salutation field
    pub hello: Option<String>,
    /// Subject field
    pub world: Option<String>,
}

/// Split on the separator into owned segments
///
/// Allocates the vector and one `String` per segment.
pub fn split_allocating(path: &str) -> Vec<String> {
    path.split('/').map(str::to_owned).collect()
}

/// Slice around the first separator without allocating
///
/// Returns `None` when the path has no separator.
pub fn split_borrowed(path: &str) -> Option<(&str, &str)> {
    let at = path.find('/')?;
    Some((&path[..at], &path[at + 1..]))
}

/// Decode into the typed struct
pub fn decode_typed(json: &str) -> serde_json::Result<Greeting> {
    serde_json::from_str(json)
}

/// Decode into an untyped value tree
pub fn decode_untyped(json: &str) -> serde_json::Result<serde_json::Value> {
    serde_json::from_str(json)
}

/// Decode the typed struct straight from bytes
pub fn decode_typed_bytes(json: &[u8]) -> serde_json::Result<Greeting> {
    serde_json::from_slice(json)
}
