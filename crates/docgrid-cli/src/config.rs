//! Input resolution.

/// Published document decoded when no URL is given.
pub const DEFAULT_DOCUMENT_URL: &str = "https://docs.google.com/document/d/e/2PACX-1vTER-wL5E8YC9pxDx43gk8eIds59GtUUk4nJo_ZWagbnrH0NFvMXIw6VWFLpf5tWTZIT9P9oLIoFJ6A/pub";

/// Resolve the document URL: the explicit argument, else the built-in default.
pub fn resolve_url(explicit: Option<&str>) -> String {
    match explicit {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_DOCUMENT_URL.to_string(),
    }
}

/// Build the log filter: `RUST_LOG` wins over the command-line level.
pub fn log_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_url_wins() {
        assert_eq!(
            resolve_url(Some("https://example.com/doc")),
            "https://example.com/doc"
        );
    }

    #[test]
    fn test_default_url() {
        assert_eq!(resolve_url(None), DEFAULT_DOCUMENT_URL);
        assert_eq!(resolve_url(Some("   ")), DEFAULT_DOCUMENT_URL);
    }

    #[test]
    fn test_explicit_url_trimmed() {
        assert_eq!(resolve_url(Some(" https://a.b/c \n")), "https://a.b/c");
    }
}
