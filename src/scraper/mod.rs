pub mod fetch;
pub mod types;

mod additional_data;
mod raw_pattern;
mod shared_data;

use types::{MediaResult, ProfileResult};

/// Post/reel extraction pipeline: shared-data blob -> additional-data blocks
/// -> raw pattern, first success wins.
///
/// The structured sources come first because they yield the richer fields
/// (caption, thumbnail, duration); the raw pattern trades those for
/// resilience to markup drift. Each strategy declines with `None` instead of
/// erroring, so one strategy's parse failure never aborts the rest. A pure
/// function of the document: no I/O, no state.
pub fn extract_post(html: &str) -> Option<MediaResult> {
    shared_data::extract_post(html)
        .or_else(|| additional_data::extract_post(html))
        .or_else(|| raw_pattern::extract_post(html))
}

/// Profile extraction pipeline: shared-data blob (picture plus counts and
/// bio) -> raw `profile_pic_url_hd` pattern (picture only).
pub fn extract_profile(html: &str, username: &str) -> Option<ProfileResult> {
    shared_data::extract_profile(html, username)
        .or_else(|| raw_pattern::extract_profile(html, username))
}
