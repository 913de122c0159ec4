use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::certificates::MessageDto;
use crate::forms::certificates::{CertificateForm, CertificateFormPayload};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::certificates::{
    create_certificate as create_certificate_service,
    delete_certificate as delete_certificate_service,
    list_certificates as list_certificates_service,
    show_certificate as show_certificate_service,
    update_certificate as update_certificate_service,
};

fn parse_form(form: CertificateForm) -> Result<CertificateFormPayload, HttpResponse> {
    form.try_into().map_err(|e| {
        let err = ServiceError::from(e);
        error_response(StatusCode::BAD_REQUEST, &err.to_string())
    })
}

#[get("/certificates")]
pub async fn list_certificates(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_certificates_service(repo.get_ref()) {
        Ok(certificates) => HttpResponse::Ok().json(certificates),
        Err(_) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to fetch certificates",
        ),
    }
}

#[post("/certificates")]
pub async fn create_certificate(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CertificateForm>,
) -> impl Responder {
    let payload = match parse_form(form) {
        Ok(payload) => payload,
        Err(response) => return response,
    };

    match create_certificate_service(payload, repo.get_ref()) {
        Ok(certificate) => HttpResponse::Created().json(certificate),
        Err(_) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to create certificate",
        ),
    }
}

#[get("/certificates/{certificate_id}")]
pub async fn show_certificate(
    certificate_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_certificate_service(&certificate_id, repo.get_ref()) {
        Ok(certificate) => HttpResponse::Ok().json(certificate),
        Err(ServiceError::NotFound) => {
            error_response(StatusCode::NOT_FOUND, "Certificate not found")
        }
        Err(_) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to fetch certificate",
        ),
    }
}

#[put("/certificates/{certificate_id}")]
pub async fn update_certificate(
    certificate_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CertificateForm>,
) -> impl Responder {
    let payload = match parse_form(form) {
        Ok(payload) => payload,
        Err(response) => return response,
    };

    // Unknown ids are reported like any other store failure.
    match update_certificate_service(&certificate_id, payload, repo.get_ref()) {
        Ok(certificate) => HttpResponse::Ok().json(certificate),
        Err(_) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to update certificate",
        ),
    }
}

#[delete("/certificates/{certificate_id}")]
pub async fn delete_certificate(
    certificate_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_certificate_service(&certificate_id, repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(MessageDto {
            message: "Certificate deleted successfully".to_string(),
        }),
        Err(_) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to delete certificate",
        ),
    }
}
