//! CORS layer configuration.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, WWW_AUTHENTICATE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use netadmin_core::config::CorsConfig;

/// Builds the CORS layer for the browser console.
///
/// Requests may carry `Authorization`, and `WWW-Authenticate` is exposed so
/// the console can tell an expired session from other failures. Entries that
/// do not parse are skipped with a warning.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(&config.allowed_origins))
        .allow_methods(parse_all::<Method>(&config.allowed_methods, "method"))
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .expose_headers([WWW_AUTHENTICATE])
        .max_age(Duration::from_secs(config.max_age_seconds))
}

fn allowed_origins(origins: &[String]) -> AllowOrigin {
    if origins.iter().any(|o| o == "*") {
        return AllowOrigin::any();
    }
    AllowOrigin::list(parse_all::<HeaderValue>(origins, "origin"))
}

fn parse_all<T: std::str::FromStr>(values: &[String], what: &str) -> Vec<T> {
    values
        .iter()
        .filter_map(|v| match v.parse() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                warn!(value = %v, "Ignoring invalid CORS {}", what);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_methods_are_skipped() {
        let methods = parse_all::<Method>(
            &["GET".to_string(), "NOT A METHOD".to_string(), "DELETE".to_string()],
            "method",
        );
        assert_eq!(methods, vec![Method::GET, Method::DELETE]);
    }
}
