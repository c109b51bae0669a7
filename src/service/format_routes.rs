use super::error_response;
use crate::engine;
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::{json, Value};

/// Pretty-print a JSON document.
#[derive(Deserialize)]
pub struct FormatRequest {
    data: Value,
    /// Spaces per nesting level, default 2
    indent: Option<u8>,
    /// Sort object keys in the output, default false
    sort_keys: Option<bool>,
}

pub async fn format(request: web::Json<FormatRequest>) -> impl Responder {
    let FormatRequest {
        data,
        indent,
        sort_keys,
    } = request.into_inner();

    let indent = indent.unwrap_or(2) as usize;
    let sort_keys = sort_keys.unwrap_or(false);

    match engine::format_document(&data, indent, sort_keys) {
        Ok(formatted) => HttpResponse::Ok().json(json!({ "formatted": formatted })),
        Err(e) => {
            log::warn!("Rejected format request: {}", e);
            error_response(&e)
        }
    }
}
