//! Integration tests for the customer registration and verification flow.

mod common;

use actix_web::test;
use serde_json::{json, Value};

use common::test_app;

fn register_body(email: &str) -> Value {
    json!({
        "first_name": "Fern",
        "last_name": "Gully",
        "email": email,
        "phone": "0412000111",
        "password": "leafy-green-8"
    })
}

#[actix_web::test]
async fn test_register_returns_pending_account_with_code_preview() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/customers/register")
        .set_json(register_body("fern@plantera.dev"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["verification_required"], true);
    assert_eq!(body["data"]["renewed"], false);
    assert_eq!(body["data"]["customer"]["is_verified"], false);
    assert!(!body["data"]["message"].as_str().unwrap().is_empty());

    let code = body["data"]["code_preview"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));

    // Secrets never appear in the response
    let raw = body.to_string();
    assert!(!raw.contains("password_hash"));
    assert!(!raw.contains("verification_code_hash"));
}

#[actix_web::test]
async fn test_register_rejects_invalid_body() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/customers/register")
        .set_json(json!({
            "first_name": "Fern",
            "last_name": "Gully",
            "email": "not-an-email",
            "password": "leafy-green-8"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_full_verification_flow() {
    let app = test::init_service(test_app()).await;

    // Register and capture the previewed code
    let req = test::TestRequest::post()
        .uri("/api/v1/customers/register")
        .set_json(register_body("fern@plantera.dev"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let code = body["data"]["code_preview"].as_str().unwrap().to_string();

    // A wrong code is rejected with the taxonomy code
    let wrong = if code == "000000" { "111111" } else { "000000" };
    let req = test::TestRequest::post()
        .uri("/api/v1/customers/verify")
        .set_json(json!({ "email": "fern@plantera.dev", "code": wrong }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "CODE_MISMATCH");

    // The right code verifies the account
    let req = test::TestRequest::post()
        .uri("/api/v1/customers/verify")
        .set_json(json!({ "email": "fern@plantera.dev", "code": code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["already_verified"], false);
    assert_eq!(body["data"]["customer"]["is_verified"], true);

    // Re-verifying is an idempotent success
    let req = test::TestRequest::post()
        .uri("/api/v1/customers/verify")
        .set_json(json!({ "email": "fern@plantera.dev", "code": "999999" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["already_verified"], true);

    // Resending for a verified account is rejected
    let req = test::TestRequest::post()
        .uri("/api/v1/customers/resend-code")
        .set_json(json!({ "email": "fern@plantera.dev" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "ALREADY_VERIFIED");

    // Registering the verified email again is a duplicate
    let req = test::TestRequest::post()
        .uri("/api/v1/customers/register")
        .set_json(register_body("fern@plantera.dev"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "DUPLICATE_EMAIL");
}

#[actix_web::test]
async fn test_reregistering_pending_email_invalidates_old_code() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/customers/register")
        .set_json(register_body("fern@plantera.dev"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let first_code = body["data"]["code_preview"].as_str().unwrap().to_string();

    // Second registration overwrites the pending profile
    let req = test::TestRequest::post()
        .uri("/api/v1/customers/register")
        .set_json(json!({
            "first_name": "Ivy",
            "last_name": "Wall",
            "email": "fern@plantera.dev",
            "password": "mossier-password"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["renewed"], true);
    assert_eq!(body["data"]["customer"]["first_name"], "Ivy");
    let second_code = body["data"]["code_preview"].as_str().unwrap().to_string();

    if first_code != second_code {
        let req = test::TestRequest::post()
            .uri("/api/v1/customers/verify")
            .set_json(json!({ "email": "fern@plantera.dev", "code": first_code }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    let req = test::TestRequest::post()
        .uri("/api/v1/customers/verify")
        .set_json(json!({ "email": "fern@plantera.dev", "code": second_code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_wrong_length_code_is_a_mismatch() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/customers/register")
        .set_json(register_body("fern@plantera.dev"))
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, req).await;

    // Too-short and too-long codes fall to the same hash comparison as
    // any other wrong code
    for code in ["123", "1234567890"] {
        let req = test::TestRequest::post()
            .uri("/api/v1/customers/verify")
            .set_json(json!({ "email": "fern@plantera.dev", "code": code }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "CODE_MISMATCH");
    }
}

#[actix_web::test]
async fn test_verify_and_resend_unknown_email_are_not_found() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/customers/verify")
        .set_json(json!({ "email": "nobody@plantera.dev", "code": "123456" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::post()
        .uri("/api/v1/customers/resend-code")
        .set_json(json!({ "email": "nobody@plantera.dev" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_resend_issues_code_that_verifies() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/customers/register")
        .set_json(register_body("fern@plantera.dev"))
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/customers/resend-code")
        .set_json(json!({ "email": "fern@plantera.dev" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["renewed"], true);
    let code = body["data"]["code_preview"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/v1/customers/verify")
        .set_json(json!({ "email": "fern@plantera.dev", "code": code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "plantera-api");
}

#[actix_web::test]
async fn test_unknown_route_is_standard_404() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::get().uri("/api/v1/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
