//! Small shared helpers.

/// Normalize a backend base URL: ensure an http(s) scheme and strip any
/// trailing slash so endpoint paths can be appended directly.
pub fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_adds_scheme() {
        assert_eq!(
            normalize_base_url("127.0.0.1:8000"),
            "http://127.0.0.1:8000"
        );
    }

    #[test]
    fn test_normalize_base_url_keeps_scheme() {
        assert_eq!(
            normalize_base_url("https://backend.example.com"),
            "https://backend.example.com"
        );
    }

    #[test]
    fn test_normalize_base_url_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://backend.example.com/"),
            "http://backend.example.com"
        );
    }
}
