use super::shared_data::{balanced_object, media_from_entry_data};
use super::types::MediaResult;

/// Marker that opens the secondary script blocks some page variants embed.
const ADDITIONAL_DATA_MARKER: &str = "window.__additionalDataLoaded(";

/// Secondary-blob strategy for posts.
///
/// Scans for every `window.__additionalDataLoaded(route, {...})` block and
/// applies the same key-path navigation as the shared-data strategy to each
/// payload in document order. Returns the first block that yields a video;
/// declines if no block parses or none contains one.
pub fn extract_post(html: &str) -> Option<MediaResult> {
    let mut rest = html;
    while let Some(pos) = rest.find(ADDITIONAL_DATA_MARKER) {
        rest = &rest[pos + ADDITIONAL_DATA_MARKER.len()..];
        // The first argument is a route string; the payload is the first
        // object literal after it.
        if let Some(result) = parse_block(rest) {
            return Some(result);
        }
    }
    None
}

fn parse_block(block: &str) -> Option<MediaResult> {
    let json_obj = balanced_object(block)?;
    let value: serde_json::Value = serde_json::from_str(json_obj).ok()?;
    media_from_entry_data(&value)
}
