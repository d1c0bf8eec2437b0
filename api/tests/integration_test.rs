//! End-to-end flow over the full application

mod common;

use actix_web::test;
use contacts_api::create_app;
use serde_json::{json, Value};

#[actix_web::test]
async fn test_health_check() {
    let app = test::init_service(create_app(common::test_state())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_unknown_route_returns_error_body() {
    let app = test::init_service(create_app(common::test_state())).await;

    let req = test::TestRequest::get().uri("/api/v1/nothing").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_register_activate_authenticate_and_manage_contacts() {
    let app = test::init_service(create_app(common::test_state())).await;

    // Register
    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({ "email": "a@x.com", "password": "p1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    let activation_token = body["activation_token"].as_str().unwrap().to_string();

    // Login before activation is refused
    let req = test::TestRequest::post()
        .uri("/api/v1/token/auth")
        .set_json(json!({ "email": "a@x.com", "password": "p1" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);

    // Activate
    let req = test::TestRequest::post()
        .uri("/api/v1/users/activate")
        .set_json(json!({ "activation_token": activation_token }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    // The activation token does not open the contact endpoints
    let req = test::TestRequest::get()
        .uri("/api/v1/contacts")
        .insert_header(common::bearer(&activation_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);

    // Authenticate
    let req = test::TestRequest::post()
        .uri("/api/v1/token/auth")
        .set_json(json!({ "email": "a@x.com", "password": "p1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    let session = body["token"].as_str().unwrap().to_string();

    // Create a contact
    let req = test::TestRequest::post()
        .uri("/api/v1/contacts")
        .insert_header(common::bearer(&session))
        .set_json(json!({ "name": "Bob", "email": "b@x.com", "phone": "1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let contact: Value = test::read_body_json(resp).await;
    let contact_id = contact["id"].as_u64().unwrap();

    // A second user cannot see it
    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({ "email": "c@x.com", "password": "p2" }))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let req = test::TestRequest::post()
        .uri("/api/v1/users/activate")
        .set_json(json!({ "activation_token": body["activation_token"] }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);
    let req = test::TestRequest::post()
        .uri("/api/v1/token/auth")
        .set_json(json!({ "email": "c@x.com", "password": "p2" }))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let other_session = body["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/contacts/{}", contact_id))
        .insert_header(common::bearer(&other_session))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);

    // Owner lists and deletes it
    let req = test::TestRequest::get()
        .uri("/api/v1/contacts")
        .insert_header(common::bearer(&session))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["contacts"][0]["id"], contact_id);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/contacts/{}", contact_id))
        .insert_header(common::bearer(&session))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 204);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/contacts/{}", contact_id))
        .insert_header(common::bearer(&session))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}
