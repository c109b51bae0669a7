use super::error_response;
use crate::engine;
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::{json, Value};

/// Validate a single document against an optional schema.
#[derive(Deserialize)]
pub struct ValidateRequest {
    instance: Value,
    #[serde(default)]
    schema: Option<Value>,
}

pub async fn validate(request: web::Json<ValidateRequest>) -> impl Responder {
    let ValidateRequest { instance, schema } = request.into_inner();

    match engine::validate_one(&instance, schema.as_ref()) {
        Ok(verdict) => HttpResponse::Ok().json(verdict),
        Err(e) => {
            log::warn!("Rejected validate request: {}", e);
            error_response(&e)
        }
    }
}

/// Validate each document in `data` against the same schema.
///
/// The schema is required here; its absence is a malformed request, not an
/// unconditional pass.
#[derive(Deserialize)]
pub struct ValidateBatchRequest {
    schema: Value,
    data: Vec<Value>,
}

pub async fn validate_batch(request: web::Json<ValidateBatchRequest>) -> impl Responder {
    let ValidateBatchRequest { schema, data } = request.into_inner();

    match engine::validate_batch(&schema, &data) {
        Ok(results) => HttpResponse::Ok().json(json!({ "results": results })),
        Err(e) => {
            log::warn!("Rejected validate-batch request: {}", e);
            error_response(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::test;
    use serde_json::json;

    async fn body_json<B: actix_web::body::MessageBody>(resp: HttpResponse<B>) -> Value {
        let bytes = to_bytes(resp.into_body())
            .await
            .map_err(|_| "failed to read response body")
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validate_without_schema_passes() {
        let req = test::TestRequest::post().to_http_request();
        let body = ValidateRequest {
            instance: json!({"anything": true}),
            schema: None,
        };

        let resp = validate(web::Json(body)).await.respond_to(&req);
        assert_eq!(resp.status(), 200);
        let value = body_json(resp).await;
        assert_eq!(value, json!({"valid": true, "errors": []}));
    }

    #[tokio::test]
    async fn validate_reports_first_violation() {
        let req = test::TestRequest::post().to_http_request();
        let body = ValidateRequest {
            instance: json!("hello"),
            schema: Some(json!({"type": "integer"})),
        };

        let resp = validate(web::Json(body)).await.respond_to(&req);
        assert_eq!(resp.status(), 200);
        let value = body_json(resp).await;
        assert_eq!(value["valid"], json!(false));
        assert_eq!(value["errors"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn bad_schema_is_a_client_error() {
        let req = test::TestRequest::post().to_http_request();
        let body = ValidateRequest {
            instance: json!(1),
            schema: Some(json!("not a schema")),
        };

        let resp = validate(web::Json(body)).await.respond_to(&req);
        assert_eq!(resp.status(), 400);
        assert!(body_json(resp).await["error"].is_string());
    }

    #[tokio::test]
    async fn batch_tags_results_with_indices() {
        let req = test::TestRequest::post().to_http_request();
        let body = ValidateBatchRequest {
            schema: json!({"type": "integer"}),
            data: vec![json!(1), json!("x")],
        };

        let resp = validate_batch(web::Json(body)).await.respond_to(&req);
        assert_eq!(resp.status(), 200);
        let value = body_json(resp).await;
        let results = value["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["index"], json!(0));
        assert_eq!(results[0]["valid"], json!(true));
        assert_eq!(results[1]["index"], json!(1));
        assert_eq!(results[1]["valid"], json!(false));
    }

    #[tokio::test]
    async fn empty_batch_returns_no_results() {
        let req = test::TestRequest::post().to_http_request();
        let body = ValidateBatchRequest {
            schema: json!({"type": "integer"}),
            data: vec![],
        };

        let resp = validate_batch(web::Json(body)).await.respond_to(&req);
        assert_eq!(resp.status(), 200);
        let value = body_json(resp).await;
        assert_eq!(value["results"], json!([]));
    }
}
