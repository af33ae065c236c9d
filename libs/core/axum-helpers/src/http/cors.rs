use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// Environment variable holding comma-separated allowed origins.
pub const CORS_ALLOWED_ORIGIN: &str = "CORS_ALLOWED_ORIGIN";

/// Creates a CORS layer restricted to the given origins.
///
/// The API is read-only, so only `GET`, `HEAD` and `OPTIONS` are allowed.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .max_age(Duration::from_secs(3600))
}

/// Creates a permissive CORS layer that accepts any origin.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Builds the CORS layer from `CORS_ALLOWED_ORIGIN`.
///
/// - unset, empty or `*`: permissive
/// - otherwise: a comma-separated list of exact origins
///
/// # Errors
/// Returns `InvalidInput` if any listed origin is not a valid header value.
pub fn cors_layer_from_env() -> io::Result<CorsLayer> {
    let raw = std::env::var(CORS_ALLOWED_ORIGIN).unwrap_or_default();
    cors_layer_from_value(&raw)
}

fn cors_layer_from_value(raw: &str) -> io::Result<CorsLayer> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "*" {
        warn!("CORS allows any origin; set {CORS_ALLOWED_ORIGIN} to restrict it");
        return Ok(create_permissive_cors_layer());
    }

    let origins = parse_origins(trimmed)?;
    info!("CORS configured with allowed origins: {}", trimmed);
    Ok(create_cors_layer(origins))
}

fn parse_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>().map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid {CORS_ALLOWED_ORIGIN} value '{s}': {e}"),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_skips_empty() {
        let origins = parse_origins("http://localhost:3000, ,https://example.com").unwrap();
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0], "http://localhost:3000");
        assert_eq!(origins[1], "https://example.com");
    }

    #[test]
    fn test_parse_origins_rejects_invalid_header() {
        let err = parse_origins("http://ok.example,bad\norigin").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_wildcard_and_unset_are_permissive() {
        assert!(cors_layer_from_value("*").is_ok());
        assert!(cors_layer_from_value("").is_ok());
    }

    #[test]
    fn test_from_env_with_list() {
        temp_env::with_var(
            CORS_ALLOWED_ORIGIN,
            Some("http://localhost:5173"),
            || {
                assert!(cors_layer_from_env().is_ok());
            },
        );
    }
}
