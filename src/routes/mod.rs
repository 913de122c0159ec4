use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

pub mod categories;
pub mod certificates;
pub mod skills;

/// Fixed-shape error body returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: message.to_string(),
    })
}

/// JSON extractor settings: malformed bodies produce a 400 with the
/// standard error body instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| {
            let response = error_response(StatusCode::BAD_REQUEST, &err.to_string());
            InternalError::from_response(err, response).into()
        })
}

/// Register every API route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(certificates::list_certificates)
        .service(certificates::create_certificate)
        .service(certificates::show_certificate)
        .service(certificates::update_certificate)
        .service(certificates::delete_certificate)
        .service(categories::list_categories)
        .service(categories::add_category)
        .service(skills::list_skills);
}
