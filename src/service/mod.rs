//! HTTP service for SchemaCheck

pub mod config;
pub mod format_routes;
pub mod http_server;
pub mod schema_routes;
pub mod system_routes;
pub mod validate_routes;

pub use http_server::{AppState, SchemaCheckHttpServer};

use crate::error::SchemaCheckError;
use actix_web::HttpResponse;
use serde_json::json;

/// Map a service error to its HTTP response.
///
/// Usage and serialization problems are the caller's fault (400), registry
/// misses are 404, everything else (absent capability, startup errors that
/// leak this far) is a 500.
pub(crate) fn error_response(error: &SchemaCheckError) -> HttpResponse {
    let body = json!({"error": error.to_string()});
    match error {
        SchemaCheckError::UsageError(_) | SchemaCheckError::Serialization(_) => {
            HttpResponse::BadRequest().json(body)
        }
        SchemaCheckError::NotFound(_) => HttpResponse::NotFound().json(body),
        SchemaCheckError::CapabilityUnavailable(_)
        | SchemaCheckError::Config(_)
        | SchemaCheckError::Io(_) => HttpResponse::InternalServerError().json(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_error_taxonomy() {
        let cases = [
            (SchemaCheckError::usage("bad"), 400),
            (SchemaCheckError::Serialization("bad".into()), 400),
            (SchemaCheckError::not_found("x"), 404),
            (SchemaCheckError::CapabilityUnavailable("inference".into()), 500),
        ];
        for (error, status) in cases {
            assert_eq!(error_response(&error).status().as_u16(), status);
        }
    }
}
