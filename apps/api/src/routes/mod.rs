use actix_web::{web, HttpResponse};

use crate::error::AppError;

pub mod songs;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(songs::configure_routes);
}

/// Fallback for every method/path combination outside the dispatch table.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "Not Found" }))
}

/// Malformed JSON bodies render through the same `{"error": ...}` shape as
/// every other caller mistake.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::invalid_data(format!("Invalid JSON body: {err}")).into())
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::invalid_data(format!("Invalid query string: {err}")).into()
    })
}
