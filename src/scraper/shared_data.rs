use url::Url;

use super::types::{MediaResult, ProfileResult};

const SHARED_DATA_MARKER: &str = "window._sharedData";

/// Caption sentinel for posts that carry no caption text.
const NO_CAPTION: &str = "No caption";

/// Structured-blob strategy for posts.
///
/// Locates the `window._sharedData = {...}` assignment, extracts the balanced
/// JSON object, and walks `entry_data -> PostPage -> [0] -> graphql ->
/// shortcode_media`. Declines (returns `None`) on any missing key, a parse
/// failure, or a non-video post.
pub fn extract_post(html: &str) -> Option<MediaResult> {
    let value = shared_data_value(html)?;
    media_from_entry_data(&value)
}

/// Structured-blob strategy for profiles.
///
/// Walks `entry_data -> ProfilePage -> [0] -> graphql -> user`. The profile
/// picture URL is required; counts and bio ride along when present.
pub fn extract_profile(html: &str, username: &str) -> Option<ProfileResult> {
    let value = shared_data_value(html)?;
    let user = value
        .get("entry_data")
        .and_then(|d| d.get("ProfilePage"))
        .and_then(|p| p.as_array())
        .and_then(|arr| arr.first())
        .and_then(|page| page.get("graphql"))
        .and_then(|g| g.get("user"))?;

    let profile_pic_url = user
        .get("profile_pic_url_hd")
        .or_else(|| user.get("profile_pic_url"))
        .and_then(|v| v.as_str())?
        .to_string();
    Url::parse(&profile_pic_url).ok()?;

    let followers = edge_count(user, "edge_followed_by");
    let following = edge_count(user, "edge_follow");
    let post_count = edge_count(user, "edge_owner_to_timeline_media");
    let bio = user
        .get("biography")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(String::from);

    Some(ProfileResult {
        username: username.to_string(),
        profile_pic_url,
        followers,
        following,
        post_count,
        bio,
    })
}

/// Parses the shared-data assignment into a JSON value.
fn shared_data_value(html: &str) -> Option<serde_json::Value> {
    let marker = html.find(SHARED_DATA_MARKER)?;
    let rest = &html[marker + SHARED_DATA_MARKER.len()..];
    let eq = rest.find('=')?;
    let json_obj = balanced_object(&rest[eq + 1..])?;
    serde_json::from_str(json_obj).ok()
}

/// Navigates a parsed blob to the `shortcode_media` record and converts it.
///
/// Accepts both the full entry-data wrapper and blobs that carry
/// `graphql.shortcode_media` at the top level (the additional-data blocks).
pub(super) fn media_from_entry_data(value: &serde_json::Value) -> Option<MediaResult> {
    let record = value
        .get("entry_data")
        .and_then(|d| d.get("PostPage"))
        .and_then(|p| p.as_array())
        .and_then(|arr| arr.first())
        .and_then(|page| page.get("graphql"))
        .and_then(|g| g.get("shortcode_media"))
        .or_else(|| value.get("graphql").and_then(|g| g.get("shortcode_media")))?;
    media_from_record(record)
}

/// Converts a `shortcode_media` record into a `MediaResult`.
///
/// Declines when `is_video` is false or absent: a success always carries a
/// playable video URL, never empty video fields for a still image.
fn media_from_record(record: &serde_json::Value) -> Option<MediaResult> {
    let is_video = record.get("is_video").and_then(|v| v.as_bool()).unwrap_or(false);
    if !is_video {
        return None;
    }

    let video_url = record.get("video_url").and_then(|v| v.as_str())?.to_string();
    Url::parse(&video_url).ok()?;

    let thumbnail_url = record
        .get("display_url")
        .and_then(|v| v.as_str())
        .map(String::from);

    let caption = record
        .get("edge_media_to_caption")
        .and_then(|c| c.get("edges"))
        .and_then(|e| e.as_array())
        .and_then(|arr| arr.first())
        .and_then(|edge| edge.get("node"))
        .and_then(|node| node.get("text"))
        .and_then(|t| t.as_str())
        .unwrap_or(NO_CAPTION)
        .to_string();

    let duration_seconds = record.get("video_duration").and_then(|v| v.as_f64());

    Some(MediaResult {
        is_video,
        video_url,
        thumbnail_url,
        caption: Some(caption),
        duration_seconds,
    })
}

/// Reads the `count` of a GraphQL edge object (`{"edge_x":{"count":N}}`).
fn edge_count(user: &serde_json::Value, edge: &str) -> Option<u64> {
    user.get(edge).and_then(|e| e.get("count")).and_then(|c| c.as_u64())
}

/// Extracts the first balanced `{...}` object from `text`.
///
/// Tracks brace depth while skipping over string literals and escape
/// sequences, so braces inside caption text don't terminate the object early.
pub(super) fn balanced_object(text: &str) -> Option<&str> {
    let brace = text.find('{')?;
    let body = &text[brace..];

    let mut depth: u32 = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in body.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        if ch == '\\' && in_string {
            escape_next = true;
            continue;
        }
        if ch == '"' {
            in_string = !in_string;
            continue;
        }
        if in_string {
            continue;
        }
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&body[..=i]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_page(media: &str) -> String {
        format!(
            r#"<html><script type="text/javascript">window._sharedData = {{"config":{{"csrf_token":"x"}},"entry_data":{{"PostPage":[{{"graphql":{{"shortcode_media":{media}}}}}]}}}};</script></html>"#
        )
    }

    #[test]
    fn extracts_video_with_all_fields() {
        let html = video_page(
            r#"{"is_video":true,"video_url":"https://cdn.example.com/v.mp4","display_url":"https://cdn.example.com/t.jpg","video_duration":12.5,"edge_media_to_caption":{"edges":[{"node":{"text":"hello world"}}]}}"#,
        );
        let result = extract_post(&html).unwrap();

        assert_eq!(result.video_url, "https://cdn.example.com/v.mp4");
        assert_eq!(result.thumbnail_url.as_deref(), Some("https://cdn.example.com/t.jpg"));
        assert_eq!(result.caption.as_deref(), Some("hello world"));
        assert_eq!(result.duration_seconds, Some(12.5));
        assert!(result.is_video);
    }

    #[test]
    fn caption_defaults_to_sentinel_when_absent() {
        let html = video_page(r#"{"is_video":true,"video_url":"https://cdn.example.com/v.mp4"}"#);
        let result = extract_post(&html).unwrap();
        assert_eq!(result.caption.as_deref(), Some("No caption"));
        assert_eq!(result.thumbnail_url, None);
        assert_eq!(result.duration_seconds, None);
    }

    #[test]
    fn declines_still_image_posts() {
        let html = video_page(
            r#"{"is_video":false,"display_url":"https://cdn.example.com/i.jpg"}"#,
        );
        assert_eq!(extract_post(&html), None);
    }

    #[test]
    fn declines_when_video_url_missing() {
        let html = video_page(r#"{"is_video":true}"#);
        assert_eq!(extract_post(&html), None);
    }

    #[test]
    fn declines_relative_video_url() {
        let html = video_page(r#"{"is_video":true,"video_url":"/v.mp4"}"#);
        assert_eq!(extract_post(&html), None);
    }

    #[test]
    fn declines_malformed_blob() {
        let html = r#"<script>window._sharedData = {"entry_data":{;</script>"#;
        assert_eq!(extract_post(html), None);
    }

    #[test]
    fn declines_without_marker() {
        assert_eq!(extract_post("<html><body>nothing here</body></html>"), None);
    }

    #[test]
    fn caption_braces_do_not_truncate_object() {
        let html = video_page(
            r#"{"is_video":true,"video_url":"https://cdn.example.com/v.mp4","edge_media_to_caption":{"edges":[{"node":{"text":"curly {braces} and \" quotes"}}]}}"#,
        );
        let result = extract_post(&html).unwrap();
        assert_eq!(result.caption.as_deref(), Some("curly {braces} and \" quotes"));
    }

    #[test]
    fn extracts_profile_with_counts() {
        let html = r#"<script>window._sharedData = {"entry_data":{"ProfilePage":[{"graphql":{"user":{"profile_pic_url_hd":"https://cdn.example.com/pic_hd.jpg","profile_pic_url":"https://cdn.example.com/pic.jpg","biography":"a bio","edge_followed_by":{"count":1200},"edge_follow":{"count":315},"edge_owner_to_timeline_media":{"count":42}}}}]}};</script>"#;
        let result = extract_profile(html, "someone").unwrap();

        assert_eq!(result.username, "someone");
        assert_eq!(result.profile_pic_url, "https://cdn.example.com/pic_hd.jpg");
        assert_eq!(result.followers, Some(1200));
        assert_eq!(result.following, Some(315));
        assert_eq!(result.post_count, Some(42));
        assert_eq!(result.bio.as_deref(), Some("a bio"));
    }

    #[test]
    fn profile_falls_back_to_standard_pic() {
        let html = r#"<script>window._sharedData = {"entry_data":{"ProfilePage":[{"graphql":{"user":{"profile_pic_url":"https://cdn.example.com/pic.jpg"}}}]}};</script>"#;
        let result = extract_profile(html, "someone").unwrap();
        assert_eq!(result.profile_pic_url, "https://cdn.example.com/pic.jpg");
        assert_eq!(result.followers, None);
        assert_eq!(result.bio, None);
    }

    #[test]
    fn profile_declines_without_pic() {
        let html = r#"<script>window._sharedData = {"entry_data":{"ProfilePage":[{"graphql":{"user":{"biography":"no pic"}}}]}};</script>"#;
        assert_eq!(extract_profile(html, "someone"), None);
    }

    #[test]
    fn balanced_object_handles_nesting() {
        let text = r#"junk {"a":{"b":[{"c":1}]},"d":"}"} trailing"#;
        assert_eq!(balanced_object(text), Some(r#"{"a":{"b":[{"c":1}]},"d":"}"}"#));
    }

    #[test]
    fn balanced_object_none_when_unterminated() {
        assert_eq!(balanced_object(r#"{"a":{"b":1}"#), None);
        assert_eq!(balanced_object("no braces at all"), None);
    }
}
