use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use pushkind_portfolio::routes;
use serde_json::{Value, json};

mod common;

macro_rules! app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($test_db.repo()))
                .configure(routes::configure),
        )
        .await
    };
}

fn certificate_body(category_id: &str, skills: &[&str]) -> Value {
    json!({
        "title": "Go Basics",
        "issuer": "Gophers",
        "imageUrl": "https://example.com/go.png",
        "issuedDate": "2024-01-15",
        "categoryId": category_id,
        "skills": skills,
    })
}

#[actix_web::test]
async fn create_then_fetch_certificate() {
    let test_db = common::TestDb::new();
    common::insert_category(&test_db.repo(), "web-dev", "Web Development");
    let app = app!(test_db);

    let req = test::TestRequest::post()
        .uri("/certificates")
        .set_json(certificate_body("web-dev", &["Go"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["featured"], json!(false));
    assert_eq!(created["viewCount"], json!(0));
    assert_eq!(created["issuedDate"], json!("2024-01-15"));

    let id = created["id"].as_str().expect("id").to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/certificates/{id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["category"]["name"], json!("Web Development"));
    assert_eq!(fetched["categoryId"], json!("web-dev"));
    assert_eq!(fetched["skills"][0]["name"], json!("Go"));
    assert_eq!(fetched["skills"][0]["color"], json!("#6B7280"));

    let req = test::TestRequest::get().uri("/certificates").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::get().uri("/categories").to_request();
    let categories: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(categories[0]["_count"]["certificates"], json!(1));

    let req = test::TestRequest::get().uri("/skills").to_request();
    let skills: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(skills[0]["name"], json!("Go"));
}

#[actix_web::test]
async fn update_replaces_skills_and_delete_removes() {
    let test_db = common::TestDb::new();
    common::insert_category(&test_db.repo(), "web-dev", "Web Development");
    let app = app!(test_db);

    let req = test::TestRequest::post()
        .uri("/certificates")
        .set_json(certificate_body("web-dev", &["Go", "Rust"]))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().expect("id").to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/certificates/{id}"))
        .set_json(certificate_body("web-dev", &[]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["skills"], json!([]));

    let req = test::TestRequest::delete()
        .uri(&format!("/certificates/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"message": "Certificate deleted successfully"}));

    let req = test::TestRequest::get()
        .uri(&format!("/certificates/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Certificate not found"}));

    let req = test::TestRequest::delete()
        .uri(&format!("/certificates/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Failed to delete certificate"}));
}

#[actix_web::test]
async fn update_without_optional_fields_keeps_them() {
    let test_db = common::TestDb::new();
    common::insert_category(&test_db.repo(), "web-dev", "Web Development");
    let app = app!(test_db);

    let mut body = certificate_body("web-dev", &["Go"]);
    body["featured"] = json!(true);
    body["description"] = json!("keep me");
    let req = test::TestRequest::post()
        .uri("/certificates")
        .set_json(&body)
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().expect("id").to_string();

    let mut body = certificate_body("web-dev", &["Go"]);
    body["title"] = json!("Go Advanced");
    let req = test::TestRequest::put()
        .uri(&format!("/certificates/{id}"))
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["title"], json!("Go Advanced"));
    assert_eq!(updated["featured"], json!(true));
    assert_eq!(updated["description"], json!("keep me"));

    body["featured"] = json!(false);
    body["description"] = json!("");
    let req = test::TestRequest::put()
        .uri(&format!("/certificates/{id}"))
        .set_json(&body)
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["featured"], json!(false));
    assert_eq!(updated["description"], Value::Null);
}

#[actix_web::test]
async fn invalid_bodies_are_bad_requests() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);

    let mut body = certificate_body("web-dev", &[]);
    body["title"] = json!("");
    let req = test::TestRequest::post()
        .uri("/certificates")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/certificates")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn unknown_category_is_server_error() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);

    let req = test::TestRequest::post()
        .uri("/certificates")
        .set_json(certificate_body("missing", &["Go"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Failed to create certificate"}));
}

#[actix_web::test]
async fn create_category_defaults_color() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({"name": "Cloud & DevOps"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["color"], json!("#3B82F6"));

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({"name": "Cloud & DevOps"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn minimal_certificate_appears_in_listing() {
    let test_db = common::TestDb::new();
    common::insert_category(&test_db.repo(), "web-dev", "Web Development");
    let app = app!(test_db);

    let req = test::TestRequest::post()
        .uri("/certificates")
        .set_json(json!({
            "title": "A",
            "issuer": "B",
            "imageUrl": "http://x",
            "issuedDate": "2024-01-01",
            "categoryId": "web-dev",
            "skills": ["Go"],
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get().uri("/certificates").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed[0]["title"], json!("A"));
    assert_eq!(listed[0]["category"]["id"], json!("web-dev"));
    assert_eq!(listed[0]["skills"][0]["name"], json!("Go"));
}
