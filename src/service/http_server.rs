use super::config::ServiceConfig;
use super::{format_routes, schema_routes, system_routes, validate_routes};
use crate::error::{SchemaCheckError, SchemaCheckResult};
use crate::inference::SchemaInferrer;
use crate::registry::SchemaRegistry;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer as ActixHttpServer};
use log::info;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;

/// HTTP server for the SchemaCheck service.
///
/// Exposes REST endpoints for single and batch JSON Schema validation,
/// JSON formatting, schema inference, and the named schema registry.
pub struct SchemaCheckHttpServer {
    config: ServiceConfig,
    state: web::Data<AppState>,
}

/// Shared application state for the HTTP server.
pub struct AppState {
    /// Named schema registry (process lifetime, non-persistent)
    pub registry: Arc<SchemaRegistry>,
    /// Schema-inference capability, absent when disabled in the config
    pub inferrer: Option<Arc<SchemaInferrer>>,
    /// Server start time, for the status endpoint
    pub started_at: Instant,
}

impl AppState {
    /// Build state from a service config. The inference capability is
    /// resolved once here; handlers branch on its presence, never probe.
    pub fn from_config(config: &ServiceConfig) -> Self {
        let inferrer = if config.inference.enabled {
            Some(Arc::new(SchemaInferrer::new()))
        } else {
            info!("Schema inference capability disabled by configuration");
            None
        };

        Self {
            registry: Arc::new(SchemaRegistry::new()),
            inferrer,
            started_at: Instant::now(),
        }
    }
}

impl SchemaCheckHttpServer {
    /// Create a new HTTP server bound to the address in `config`.
    pub fn new(config: ServiceConfig) -> Self {
        let state = web::Data::new(AppState::from_config(&config));
        Self { config, state }
    }

    /// Run the HTTP server until the process is stopped.
    ///
    /// # Errors
    ///
    /// Returns a `SchemaCheckError::Config` if the bind address is
    /// unavailable or the server fails while running.
    pub async fn run(&self) -> SchemaCheckResult<()> {
        info!("HTTP server running on {}", self.config.bind_address);

        let app_state = self.state.clone();
        let server = ActixHttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            // Malformed JSON bodies get the same {"error": ...} shape as
            // handler-level failures.
            let json_config = web::JsonConfig::default().error_handler(|err, _req| {
                let message = err.to_string();
                actix_web::error::InternalError::from_response(
                    err,
                    HttpResponse::BadRequest().json(json!({"error": message})),
                )
                .into()
            });

            App::new()
                .wrap(cors)
                .app_data(app_state.clone())
                .app_data(json_config)
                .route("/validate", web::post().to(validate_routes::validate))
                .route(
                    "/validate-batch",
                    web::post().to(validate_routes::validate_batch),
                )
                .route("/format", web::post().to(format_routes::format))
                .route(
                    "/generate-schema",
                    web::post().to(schema_routes::generate_schema),
                )
                .route("/schemas", web::get().to(schema_routes::list_schemas))
                .route("/schemas/{name}", web::put().to(schema_routes::put_schema))
                .route("/schemas/{name}", web::get().to(schema_routes::get_schema))
                .service(
                    web::scope("/system")
                        .route("/status", web::get().to(system_routes::get_system_status)),
                )
        })
        .bind(&self.config.bind_address)
        .map_err(|e| SchemaCheckError::Config(format!("Failed to bind HTTP server: {}", e)))?
        .run();

        server
            .await
            .map_err(|e| SchemaCheckError::Config(format!("HTTP server error: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inference_capability_follows_config() {
        let enabled = AppState::from_config(&ServiceConfig::default());
        assert!(enabled.inferrer.is_some());

        let disabled = AppState::from_config(&ServiceConfig::default().without_inference());
        assert!(disabled.inferrer.is_none());
    }
}
