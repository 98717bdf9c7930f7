use axum::http::{HeaderValue, Method, header};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

const ALLOWED_METHODS: [Method; 6] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
    Method::OPTIONS,
];

/// CORS layer restricted to `origins`.
pub fn create_cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Any origin, same methods. Used when the configured origin is `*`.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

/// Builds the layer from `CORS_ALLOWED_ORIGIN` as loaded into [`ServerConfig`].
///
/// # Errors
/// Returns `InvalidInput` if an origin is not a valid header value.
pub fn cors_layer_from_config(config: &ServerConfig) -> io::Result<CorsLayer> {
    if config.allows_any_origin() {
        info!("CORS configured for any origin");
        return Ok(create_permissive_cors_layer());
    }

    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|o| o.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    info!(origins = ?config.cors_allowed_origins, "CORS configured");
    Ok(create_cors_layer(origins))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_origin_builds_permissive_layer() {
        assert!(cors_layer_from_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn test_explicit_origins_build() {
        let mut config = ServerConfig::default();
        config.cors_allowed_origins = vec!["http://localhost:3000".to_string()];
        assert!(cors_layer_from_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let mut config = ServerConfig::default();
        config.cors_allowed_origins = vec!["http://bad\norigin".to_string()];
        let err = cors_layer_from_config(&config).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
