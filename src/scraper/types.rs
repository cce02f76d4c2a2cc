use serde::Serialize;

/// A successfully extracted video post.
///
/// Only the shared-data and additional-data strategies populate the optional
/// fields; the raw-pattern fallback yields the video URL alone. `is_video` is
/// an internal invariant (extraction never succeeds for still images) and is
/// not part of the wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaResult {
    #[serde(skip_serializing)]
    pub is_video: bool,
    #[serde(rename = "videoUrl")]
    pub video_url: String,
    #[serde(rename = "thumbnail", skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(rename = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
}

/// A successfully extracted profile.
///
/// Counts and bio are only available when the page still carries the
/// structured shared-data blob; the raw-pattern fallback recovers just the
/// profile picture URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileResult {
    pub username: String,
    #[serde(rename = "profilePicUrl")]
    pub profile_pic_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub following: Option<u64>,
    #[serde(rename = "posts", skip_serializing_if = "Option::is_none")]
    pub post_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}
