use url::Url;

use crate::error::{InstagramError, Result};

pub const INSTAGRAM_BASE_URL: &str = "https://www.instagram.com";

/// Query that asks the profile page for its embedded JSON data instead of HTML.
const EMBEDDED_DATA_QUERY: &str = "__a=1";

/// Builds `{base_url}/{handle}/?__a=1`.
///
/// The handle is pushed as a single path segment, so characters such as `/`
/// or `?` are percent-encoded rather than changing the shape of the URL.
/// Dot segments would be resolved away by the URL parser, so they are rejected.
pub fn profile_url(base_url: &Url, handle: &str) -> Result<Url> {
    if is_dot_segment(handle) {
        return Err(InstagramError::InvalidHandle(handle.to_string()));
    }

    let mut url = base_url.clone();

    url.path_segments_mut()
        .map_err(|_| {
            InstagramError::Config(format!("Base URL cannot carry a path: {base_url}"))
        })?
        .pop_if_empty()
        .push(handle)
        .push("");

    url.set_query(Some(EMBEDDED_DATA_QUERY));
    url.set_fragment(None);

    Ok(url)
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(
        segment.to_ascii_lowercase().as_str(),
        "." | ".." | "%2e" | "%2e." | ".%2e" | "%2e%2e"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_url_default_host() {
        let base = Url::parse(INSTAGRAM_BASE_URL).unwrap();
        let url = profile_url(&base, "labnol").unwrap();
        assert_eq!(url.as_str(), "https://www.instagram.com/labnol/?__a=1");
    }

    #[test]
    fn test_profile_url_keeps_base_path() {
        let base = Url::parse("http://127.0.0.1:8080/proxy/").unwrap();
        let url = profile_url(&base, "demo").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/proxy/demo/?__a=1");
    }

    #[test]
    fn test_profile_url_encodes_handle() {
        let base = Url::parse(INSTAGRAM_BASE_URL).unwrap();
        let url = profile_url(&base, "a/b?c").unwrap();
        assert_eq!(url.path(), "/a%2Fb%3Fc/");
        assert_eq!(url.query(), Some("__a=1"));

        let url = profile_url(&base, "a..b").unwrap();
        assert_eq!(url.path(), "/a..b/");
    }

    #[test]
    fn test_profile_url_rejects_dot_segments() {
        let base = Url::parse("http://127.0.0.1:8080/proxy/").unwrap();
        for handle in [".", "..", "%2E", "%2e%2E", ".%2e"] {
            assert!(
                matches!(
                    profile_url(&base, handle),
                    Err(InstagramError::InvalidHandle(ref h)) if h == handle
                ),
                "{handle} should be rejected"
            );
        }
    }

    #[test]
    fn test_profile_url_drops_existing_query() {
        let base = Url::parse("https://www.instagram.com/?foo=bar#top").unwrap();
        let url = profile_url(&base, "demo").unwrap();
        assert_eq!(url.as_str(), "https://www.instagram.com/demo/?__a=1");
    }

    #[test]
    fn test_profile_url_rejects_cannot_be_a_base() {
        let base = Url::parse("mailto:someone@example.com").unwrap();
        assert!(matches!(
            profile_url(&base, "demo"),
            Err(InstagramError::Config(_))
        ));
    }
}
