//! Backend address resolution.
//!
//! The address is fixed at build time through `RECONFLOW_BACKEND_URL`. When the
//! variable is absent the shell talks to the `/api` router on its own origin.

/// Build-time variable naming the backend base URL.
pub const BACKEND_URL_ENV: &str = "RECONFLOW_BACKEND_URL";

/// Prefix the backend mounts its router under.
pub const API_PREFIX: &str = "/api";

/// Used when neither a configured URL nor a window origin is available.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001/api";

/// Backend URL baked in at compile time, if any.
#[must_use]
pub const fn configured_backend_url() -> Option<&'static str> {
    option_env!("RECONFLOW_BACKEND_URL")
}

/// Pick the backend base URL from the build-time value or the page origin.
///
/// Blank values are ignored and trailing slashes are trimmed so request paths
/// can always be appended with a leading `/`.
#[must_use]
pub fn resolve_backend_url(configured: Option<&str>, origin: Option<&str>) -> String {
    if let Some(url) = non_blank(configured) {
        return url.trim_end_matches('/').to_string();
    }
    non_blank(origin).map_or_else(
        || DEFAULT_BACKEND_URL.to_string(),
        |origin| format!("{}{API_PREFIX}", origin.trim_end_matches('/')),
    )
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_url_wins_and_is_trimmed() {
        assert_eq!(
            resolve_backend_url(Some("https://recon.example/api/"), Some("http://ui.local")),
            "https://recon.example/api"
        );
    }

    #[test]
    fn blank_configuration_falls_back_to_origin() {
        assert_eq!(
            resolve_backend_url(Some("   "), Some("http://ui.local:3000/")),
            "http://ui.local:3000/api"
        );
        assert_eq!(
            resolve_backend_url(None, Some("http://ui.local:3000")),
            "http://ui.local:3000/api"
        );
    }

    #[test]
    fn default_applies_without_any_source() {
        assert_eq!(resolve_backend_url(None, None), DEFAULT_BACKEND_URL);
        assert_eq!(resolve_backend_url(None, Some("")), DEFAULT_BACKEND_URL);
    }
}
