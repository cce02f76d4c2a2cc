/// Extracts the shortcode from an Instagram post or reel URL.
///
/// `/reel/` is checked before `/p/`; the first recognized segment wins. The
/// identifier runs up to the next `/`, `?`, or `#`. Returns `None` for URLs
/// matching neither pattern, or when the identifier segment is empty, so
/// callers can reject the request before any outbound fetch.
pub fn extract_shortcode(url: &str) -> Option<String> {
    let marker = if url.contains("/reel/") {
        "/reel/"
    } else if url.contains("/p/") {
        "/p/"
    } else {
        return None;
    };

    let start = url.find(marker)? + marker.len();
    let rest = &url[start..];
    let end = rest
        .find(|c| c == '/' || c == '?' || c == '#')
        .unwrap_or(rest.len());
    let code = &rest[..end];

    if code.is_empty() {
        None
    } else {
        Some(code.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_reel_shortcode() {
        assert_eq!(
            extract_shortcode("https://www.instagram.com/reel/ABC123/"),
            Some("ABC123".to_string())
        );
    }

    #[test]
    fn extracts_post_shortcode() {
        assert_eq!(
            extract_shortcode("https://www.instagram.com/p/DEF456/"),
            Some("DEF456".to_string())
        );
    }

    #[test]
    fn works_without_trailing_slash() {
        assert_eq!(
            extract_shortcode("https://x.com/reel/ABC123"),
            Some("ABC123".to_string())
        );
    }

    #[test]
    fn excludes_query_string() {
        assert_eq!(
            extract_shortcode("https://www.instagram.com/reel/ABC123?igsh=xyz"),
            Some("ABC123".to_string())
        );
        assert_eq!(
            extract_shortcode("https://www.instagram.com/p/DEF456/?utm_source=share"),
            Some("DEF456".to_string())
        );
    }

    #[test]
    fn reel_wins_over_p() {
        assert_eq!(
            extract_shortcode("https://x.com/p/FIRST/reel/SECOND/"),
            Some("SECOND".to_string())
        );
    }

    #[test]
    fn rejects_unrecognized_urls() {
        assert_eq!(extract_shortcode("https://www.instagram.com/someuser/"), None);
        assert_eq!(extract_shortcode("https://example.com/watch?v=abc"), None);
        assert_eq!(extract_shortcode(""), None);
    }

    #[test]
    fn rejects_empty_identifier() {
        assert_eq!(extract_shortcode("https://www.instagram.com/reel/"), None);
        assert_eq!(extract_shortcode("https://www.instagram.com/p//"), None);
    }
}
