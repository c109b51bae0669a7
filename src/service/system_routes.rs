use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use super::http_server::AppState;

/// Get service status information
pub async fn get_system_status(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "running",
        "uptime_seconds": state.started_at.elapsed().as_secs(),
        "version": env!("CARGO_PKG_VERSION"),
        "stored_schemas": state.registry.len().await,
        "inference_enabled": state.inferrer.is_some(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::config::ServiceConfig;
    use actix_web::body::to_bytes;
    use actix_web::test;
    use serde_json::Value;

    #[tokio::test]
    async fn status_reports_running_and_capabilities() {
        let state = web::Data::new(AppState::from_config(&ServiceConfig::default()));
        state
            .registry
            .put("x", json!({"type": "object"}))
            .await
            .unwrap();

        let req = test::TestRequest::get().to_http_request();
        let resp = get_system_status(state).await.respond_to(&req);
        assert_eq!(resp.status(), 200);

        let bytes = to_bytes(resp.into_body())
            .await
            .map_err(|_| "failed to read response body")
            .unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["status"], json!("running"));
        assert_eq!(value["stored_schemas"], json!(1));
        assert_eq!(value["inference_enabled"], json!(true));
        assert_eq!(value["version"], json!(env!("CARGO_PKG_VERSION")));
    }
}
