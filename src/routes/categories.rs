use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::categories::{AddCategoryForm, AddCategoryFormPayload};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::categories::{
    add_category as add_category_service, list_categories as list_categories_service,
};

#[get("/categories")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_categories_service(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(_) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to fetch categories",
        ),
    }
}

#[post("/categories")]
pub async fn add_category(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddCategoryForm>,
) -> impl Responder {
    let payload: AddCategoryFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            let err = ServiceError::from(e);
            return error_response(StatusCode::BAD_REQUEST, &err.to_string());
        }
    };

    match add_category_service(payload, repo.get_ref()) {
        Ok(category) => HttpResponse::Created().json(category),
        Err(_) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to create category",
        ),
    }
}
