//! Integration tests for stores, inventory, cart, favorites, feedback
//! and admin endpoints.

mod common;

use actix_web::test;
use serde_json::{json, Value};
use uuid::Uuid;

use common::test_app;

fn store_body(name: &str, email: &str) -> Value {
    json!({
        "name": name,
        "email": email,
        "phone": "0299998888",
        "bio": "Succulents and ferns",
        "address": "12 Greenhouse Ln"
    })
}

fn plant_body(name: &str, featured: bool) -> Value {
    json!({
        "plant_name": name,
        "description": "Low light friendly",
        "price": 24.5,
        "stock": 10,
        "image_url": "https://img.plantera.dev/monstera.jpg",
        "is_featured": featured
    })
}

async fn create_store<S, B>(app: &S, name: &str, email: &str) -> Value
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/v1/stores")
        .set_json(store_body(name, email))
        .to_request();
    let body: Value = test::call_and_read_body_json(app, req).await;
    body["data"].clone()
}

async fn add_plant<S, B>(app: &S, store_id: &str, name: &str, featured: bool) -> Value
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody,
{
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/stores/{store_id}/inventory"))
        .set_json(plant_body(name, featured))
        .to_request();
    let body: Value = test::call_and_read_body_json(app, req).await;
    body["data"].clone()
}

#[actix_web::test]
async fn test_create_and_fetch_store() {
    let app = test::init_service(test_app()).await;

    let store = create_store(&app, "Leafy Things", "hello@leafy.example").await;
    assert_eq!(store["name"], "Leafy Things");
    let id = store["id"].as_str().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/stores/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["email"], "hello@leafy.example");

    let req = test::TestRequest::get().uri("/api/v1/stores").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_duplicate_store_email_is_conflict() {
    let app = test::init_service(test_app()).await;

    create_store(&app, "Leafy Things", "hello@leafy.example").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/stores")
        .set_json(store_body("Copycat", "hello@leafy.example"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[actix_web::test]
async fn test_update_store_merges_fields() {
    let app = test::init_service(test_app()).await;

    let store = create_store(&app, "Leafy Things", "hello@leafy.example").await;
    let id = store["id"].as_str().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/stores/{id}"))
        .set_json(json!({ "bio": "Rare tropicals" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["bio"], "Rare tropicals");
    // Untouched fields survive the merge
    assert_eq!(body["data"]["name"], "Leafy Things");
    assert_eq!(body["data"]["phone"], "0299998888");
}

#[actix_web::test]
async fn test_update_unknown_store_is_not_found() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/stores/{}", Uuid::new_v4()))
        .set_json(json!({ "bio": "Ghost town" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_inventory_listing_and_featured_shelf() {
    let app = test::init_service(test_app()).await;

    let store = create_store(&app, "Leafy Things", "hello@leafy.example").await;
    let store_id = store["id"].as_str().unwrap();

    add_plant(&app, store_id, "Monstera", true).await;
    add_plant(&app, store_id, "Pothos", false).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/stores/{store_id}/inventory"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    // Only the featured plant surfaces on the shelf, with its store name
    let req = test::TestRequest::get()
        .uri("/api/v1/plants/featured")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let shelf = body["data"].as_array().unwrap();
    assert_eq!(shelf.len(), 1);
    assert_eq!(shelf[0]["title"], "Monstera");
    assert_eq!(shelf[0]["store_name"], "Leafy Things");
}

#[actix_web::test]
async fn test_add_inventory_to_unknown_store_is_not_found() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/stores/{}/inventory", Uuid::new_v4()))
        .set_json(plant_body("Monstera", false))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_cart_accumulates_quantity_for_repeated_plant() {
    let app = test::init_service(test_app()).await;

    let store = create_store(&app, "Leafy Things", "hello@leafy.example").await;
    let plant = add_plant(&app, store["id"].as_str().unwrap(), "Monstera", false).await;
    let plant_id = plant["id"].as_str().unwrap();
    let customer_id = Uuid::new_v4();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/customers/{customer_id}/cart"))
        .set_json(json!({ "inventory_item_id": plant_id, "quantity": 2 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    // Quantity omitted defaults to one and folds into the same line
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/customers/{customer_id}/cart"))
        .set_json(json!({ "inventory_item_id": plant_id }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["quantity"], 3);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/customers/{customer_id}/cart"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let lines = body["data"].as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["plant"]["title"], "Monstera");
}

#[actix_web::test]
async fn test_cart_rejects_zero_quantity_and_unknown_plant() {
    let app = test::init_service(test_app()).await;

    let store = create_store(&app, "Leafy Things", "hello@leafy.example").await;
    let plant = add_plant(&app, store["id"].as_str().unwrap(), "Monstera", false).await;
    let customer_id = Uuid::new_v4();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/customers/{customer_id}/cart"))
        .set_json(json!({
            "inventory_item_id": plant["id"].as_str().unwrap(),
            "quantity": 0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/customers/{customer_id}/cart"))
        .set_json(json!({ "inventory_item_id": Uuid::new_v4(), "quantity": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_remove_cart_line() {
    let app = test::init_service(test_app()).await;

    let store = create_store(&app, "Leafy Things", "hello@leafy.example").await;
    let plant = add_plant(&app, store["id"].as_str().unwrap(), "Monstera", false).await;
    let customer_id = Uuid::new_v4();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/customers/{customer_id}/cart"))
        .set_json(json!({ "inventory_item_id": plant["id"].as_str().unwrap() }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let line_id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/customers/{customer_id}/cart/{line_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);

    // Deleting the same line again is a miss
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/customers/{customer_id}/cart/{line_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_favorites_are_idempotent() {
    let app = test::init_service(test_app()).await;

    let store = create_store(&app, "Leafy Things", "hello@leafy.example").await;
    let plant = add_plant(&app, store["id"].as_str().unwrap(), "Monstera", false).await;
    let plant_id = plant["id"].as_str().unwrap();
    let customer_id = Uuid::new_v4();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/customers/{customer_id}/favorites"))
        .set_json(json!({ "inventory_item_id": plant_id }))
        .to_request();
    let first: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/customers/{customer_id}/favorites"))
        .set_json(json!({ "inventory_item_id": plant_id }))
        .to_request();
    let second: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(first["data"]["id"], second["data"]["id"]);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/customers/{customer_id}/favorites"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let favorites = body["data"].as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["plant"]["store_name"], "Leafy Things");

    let favorite_id = favorites[0]["id"].as_str().unwrap();
    let req = test::TestRequest::delete()
        .uri(&format!(
            "/api/v1/customers/{customer_id}/favorites/{favorite_id}"
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);
}

#[actix_web::test]
async fn test_feedback_listing_is_newest_first() {
    let app = test::init_service(test_app()).await;

    for message in ["First impressions", "Second thoughts"] {
        let req = test::TestRequest::post()
            .uri("/api/v1/feedback")
            .set_json(json!({ "name": "Fern", "message": message }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
    }

    let req = test::TestRequest::get().uri("/api/v1/feedback").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["message"], "Second thoughts");
}

#[actix_web::test]
async fn test_feedback_rejects_blank_message() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/feedback")
        .set_json(json!({ "name": "Fern", "message": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_admin_creation_and_view_preference() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/admins")
        .set_json(json!({ "display_name": "Root", "email": "root@plantera.dev" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["preferred_view"], "admin");
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/admins/{id}/view"))
        .set_json(json!({ "preferred_view": "storefront" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["preferred_view"], "storefront");

    let req = test::TestRequest::get().uri("/api/v1/admins").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}
