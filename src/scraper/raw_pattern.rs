use url::Url;

use super::types::{MediaResult, ProfileResult};

/// Raw-pattern strategy for posts.
///
/// Last resort: scans the unparsed document for a literal `"video_url":"..."`
/// key/value pair, tolerating surrounding malformed JSON. Only the video URL
/// is recovered; caption, thumbnail, and duration are omitted rather than
/// fabricated.
pub fn extract_post(html: &str) -> Option<MediaResult> {
    let video_url = quoted_value(html, "video_url").map(unescape_embedded_url)?;
    Url::parse(&video_url).ok()?;

    Some(MediaResult {
        is_video: true,
        video_url,
        thumbnail_url: None,
        caption: None,
        duration_seconds: None,
    })
}

/// Raw-pattern strategy for profiles: first `"profile_pic_url_hd"` match.
pub fn extract_profile(html: &str, username: &str) -> Option<ProfileResult> {
    let profile_pic_url = quoted_value(html, "profile_pic_url_hd").map(unescape_embedded_url)?;
    Url::parse(&profile_pic_url).ok()?;

    Some(ProfileResult {
        username: username.to_string(),
        profile_pic_url,
        followers: None,
        following: None,
        post_count: None,
        bio: None,
    })
}

/// Finds `"key":"value"` in raw text and returns the value slice.
///
/// The closing quote scan is escape-aware so backslash sequences inside the
/// value don't terminate it early.
fn quoted_value<'a>(html: &'a str, key: &str) -> Option<&'a str> {
    let needle = format!("\"{key}\":\"");
    let start = html.find(&needle)? + needle.len();
    let bytes = html.as_bytes();

    let mut i = start;
    let mut escape = false;
    while i < bytes.len() {
        if escape {
            escape = false;
        } else if bytes[i] == b'\\' {
            escape = true;
        } else if bytes[i] == b'"' {
            let value = &html[start..i];
            return if value.is_empty() { None } else { Some(value) };
        }
        i += 1;
    }
    None
}

/// Undoes the JSON-in-HTML escaping Instagram applies to embedded URLs:
/// `&` back to `&` and `\/` back to `/`.
fn unescape_embedded_url(raw: &str) -> String {
    raw.replace("\\u0026", "&").replace("\\/", "/")
}
