
#[cfg(debug_assertions)]
const DEFAULT_BACKEND_URL: &str = "http://localhost:8000"; // Wagtail dev server when running locally

#[cfg(not(debug_assertions))]
const DEFAULT_BACKEND_URL: &str = ""; // Same origin as the CMS in production

/// Base URL of the CMS API, without a trailing slash.
///
/// `API_BASE_URL` set at build time overrides the per-profile default.
pub fn get_backend_url() -> &'static str {
    option_env!("API_BASE_URL")
        .unwrap_or(DEFAULT_BACKEND_URL)
        .trim_end_matches('/')
}

/// Turns a CMS media path into something an `<img>` can load.
pub fn resolve_media_url(url: &str) -> Option<String> {
    resolve_media_url_with(get_backend_url(), url)
}

pub fn resolve_media_url_with(base: &str, url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return Some(url.to_string());
    }

    let base = base.trim_end_matches('/');
    if url.starts_with('/') {
        Some(format!("{}{}", base, url))
    } else {
        Some(format!("{}/{}", base, url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_media_urls_are_untouched() {
        assert_eq!(
            resolve_media_url_with("https://cms.example", "HTTPS://cdn.example/a.jpg").as_deref(),
            Some("HTTPS://cdn.example/a.jpg")
        );
    }

    #[test]
    fn relative_media_urls_are_joined_to_the_base() {
        assert_eq!(
            resolve_media_url_with("https://cms.example/", "media/a.jpg").as_deref(),
            Some("https://cms.example/media/a.jpg")
        );
        assert_eq!(
            resolve_media_url_with("", "/media/a.jpg").as_deref(),
            Some("/media/a.jpg")
        );
        assert_eq!(resolve_media_url_with("", "media/a.jpg").as_deref(), Some("/media/a.jpg"));
    }

    #[test]
    fn blank_media_url_resolves_to_nothing() {
        assert_eq!(resolve_media_url_with("https://cms.example", "   "), None);
    }
}
