use super::error_response;
use super::http_server::AppState;
use crate::error::SchemaCheckError;
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::{json, Value};

/// Infer a schema from an example document.
#[derive(Deserialize)]
pub struct GenerateSchemaRequest {
    example: Value,
}

pub async fn generate_schema(
    request: web::Json<GenerateSchemaRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let inferrer = match &state.inferrer {
        Some(inferrer) => inferrer,
        None => {
            let e = SchemaCheckError::CapabilityUnavailable(
                "schema inference is not enabled in this process".to_string(),
            );
            log::error!("Generate-schema request failed: {}", e);
            return error_response(&e);
        }
    };

    let schema = inferrer.infer(&request.example);
    HttpResponse::Ok().json(json!({ "schema": schema }))
}

/// Store or replace a named schema. The body is the schema itself.
pub async fn put_schema(
    path: web::Path<String>,
    schema: web::Json<Value>,
    state: web::Data<AppState>,
) -> impl Responder {
    let name = path.into_inner();

    match state.registry.put(&name, schema.into_inner()).await {
        Ok(_replaced) => HttpResponse::Ok().json(json!({"ok": true, "name": name})),
        Err(e) => {
            log::warn!("Rejected schema store for '{}': {}", name, e);
            error_response(&e)
        }
    }
}

/// Fetch a stored schema by name.
pub async fn get_schema(path: web::Path<String>, state: web::Data<AppState>) -> impl Responder {
    let name = path.into_inner();

    match state.registry.get(&name).await {
        Ok(schema) => HttpResponse::Ok().json(json!({"name": name, "schema": schema})),
        Err(e) => error_response(&e),
    }
}

/// List the names of all stored schemas.
pub async fn list_schemas(state: web::Data<AppState>) -> impl Responder {
    let names = state.registry.names().await;
    HttpResponse::Ok().json(json!({ "schemas": names }))
}
