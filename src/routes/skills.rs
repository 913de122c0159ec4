use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::skills::list_skills as list_skills_service;

#[get("/skills")]
pub async fn list_skills(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_skills_service(repo.get_ref()) {
        Ok(skills) => HttpResponse::Ok().json(skills),
        Err(_) => error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch skills"),
    }
}
