//! End-to-end behaviour of the user endpoints over the in-memory store.

#[path = "support/profile_app.rs"]
mod profile_app;

use actix_web::http::{StatusCode, header};
use actix_web::test::TestRequest;
use profile_app::{FIXTURE_TIME, assert_envelope, directory, init_app, send};
use rstest::rstest;
use serde_json::{Value, json};

fn alice() -> Value {
    json!({
        "username": "alice",
        "email": "alice@example.com",
        "first_name": "Alice",
        "last_name": "Wong",
        "age": 28,
    })
}

fn bob() -> Value {
    json!({
        "username": "bob",
        "email": "bob@example.com",
        "first_name": "Bob",
        "last_name": "Stone",
    })
}

fn post(body: &Value) -> actix_http::Request {
    TestRequest::post().uri("/api/users").set_json(body).to_request()
}

fn put(id: u64, body: &Value) -> actix_http::Request {
    TestRequest::put()
        .uri(&format!("/api/users/{id}"))
        .set_json(body)
        .to_request()
}

fn get(uri: &str) -> actix_http::Request {
    TestRequest::get().uri(uri).to_request()
}

#[actix_rt::test]
async fn first_create_on_a_fresh_store_gets_identifier_one() {
    let app = init_app(directory()).await;

    let reply = send(&app, post(&alice())).await;

    assert_eq!(reply.status, StatusCode::CREATED);
    assert_eq!(reply.body["message"], "User created successfully");
    assert_eq!(
        reply.body["user"],
        json!({
            "id": 1,
            "username": "alice",
            "first_name": "Alice",
            "last_name": "Wong",
            "age": 28,
            "created_at": FIXTURE_TIME,
        })
    );
    assert_eq!(reply.body["timestamp"], FIXTURE_TIME);
}

#[actix_rt::test]
async fn created_user_reads_back_without_email() {
    let app = init_app(directory()).await;
    send(&app, post(&alice())).await;

    let one = send(&app, get("/api/users/1")).await;
    assert_eq!(one.status, StatusCode::OK);
    assert_eq!(one.body["user"]["username"], "alice");
    assert!(one.body["user"].get("email").is_none());

    let all = send(&app, get("/api/users")).await;
    assert_eq!(all.body["count"], 1);
    assert!(!all.text.contains("alice@example.com"));
}

#[actix_rt::test]
async fn non_numeric_identifier_is_a_validation_error() {
    let app = init_app(directory()).await;
    let reply = send(&app, get("/api/users/abc")).await;
    assert_envelope(
        &reply,
        StatusCode::BAD_REQUEST,
        "Validation error",
        "User ID must be a valid integer",
    );
}

#[actix_rt::test]
async fn unknown_identifier_is_not_found() {
    let app = init_app(directory()).await;
    let reply = send(&app, get("/api/users/999")).await;
    assert_envelope(
        &reply,
        StatusCode::NOT_FOUND,
        "User not found",
        "User with ID 999 does not exist",
    );
}

#[actix_rt::test]
async fn missing_required_fields_are_listed_together() {
    let app = init_app(directory()).await;
    let reply = send(&app, post(&json!({"username": "test"}))).await;
    assert_envelope(
        &reply,
        StatusCode::BAD_REQUEST,
        "Bad request",
        "Missing required fields: email, first_name, last_name",
    );
}

#[rstest]
#[case(json!({"email": "invalid-email"}), "Invalid email format")]
#[case(json!({"username": "ab"}), "Username must be at least 3 characters long")]
#[case(json!({"username": "   "}), "Username must be at least 3 characters long")]
#[case(json!({"username": "bad-name"}), "Username can only contain letters, numbers, and underscores")]
#[case(json!({"first_name": "   "}), "First name cannot be empty")]
#[case(json!({"age": 151}), "Age must be between 0 and 150")]
#[case(json!({"age": "old"}), "Age must be a valid number")]
#[case(json!({"last_name": "  ", "age": 200}), "Age must be between 0 and 150")]
#[actix_rt::test]
async fn field_rules_reject_creates(#[case] overrides: Value, #[case] message: &str) {
    let app = init_app(directory()).await;
    let mut body = alice();
    for (key, value) in overrides.as_object().expect("object overrides") {
        body[key] = value.clone();
    }

    let reply = send(&app, post(&body)).await;

    assert_envelope(&reply, StatusCode::BAD_REQUEST, "Validation error", message);
    let all = send(&app, get("/api/users")).await;
    assert_eq!(all.body["count"], 0);
}

#[actix_rt::test]
async fn duplicate_username_and_email_conflict() {
    let app = init_app(directory()).await;
    send(&app, post(&alice())).await;

    let mut same_name = bob();
    same_name["username"] = json!("alice");
    let reply = send(&app, post(&same_name)).await;
    assert_envelope(&reply, StatusCode::CONFLICT, "Conflict", "Username already exists");

    let mut same_email = bob();
    same_email["email"] = json!("alice@example.com");
    let reply = send(&app, post(&same_email)).await;
    assert_envelope(&reply, StatusCode::CONFLICT, "Conflict", "Email already exists");

    let all = send(&app, get("/api/users")).await;
    assert_eq!(all.body["count"], 1);
}

#[actix_rt::test]
async fn email_uniqueness_is_case_sensitive() {
    let app = init_app(directory()).await;
    send(&app, post(&alice())).await;

    let mut shouting = bob();
    shouting["email"] = json!("ALICE@example.com");
    let reply = send(&app, post(&shouting)).await;

    assert_eq!(reply.status, StatusCode::CREATED);
}

#[actix_rt::test]
async fn non_json_body_is_a_bad_request() {
    let app = init_app(directory()).await;
    let req = TestRequest::post()
        .uri("/api/users")
        .insert_header((header::CONTENT_TYPE, "text/plain"))
        .set_payload("username=alice")
        .to_request();

    let reply = send(&app, req).await;

    assert_envelope(
        &reply,
        StatusCode::BAD_REQUEST,
        "Bad request",
        "Request must be in JSON format",
    );
}

#[actix_rt::test]
async fn partial_update_changes_only_supplied_fields() {
    let app = init_app(directory()).await;
    send(&app, post(&alice())).await;

    let reply = send(&app, put(1, &json!({"last_name": "  Smith ", "age": null}))).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["message"], "User updated successfully");
    assert_eq!(reply.body["user"]["last_name"], "Smith");
    assert_eq!(reply.body["user"]["first_name"], "Alice");
    assert_eq!(reply.body["user"]["age"], Value::Null);
    assert_eq!(reply.body["user"]["created_at"], FIXTURE_TIME);
}

#[actix_rt::test]
async fn rejected_update_leaves_record_untouched() {
    let app = init_app(directory()).await;
    send(&app, post(&alice())).await;
    send(&app, post(&bob())).await;

    let taken = send(&app, put(1, &json!({"first_name": "Al", "username": "bob"}))).await;
    assert_envelope(&taken, StatusCode::CONFLICT, "Conflict", "Username already exists");

    let invalid = send(&app, put(1, &json!({"first_name": "Al", "age": -1}))).await;
    assert_envelope(
        &invalid,
        StatusCode::BAD_REQUEST,
        "Validation error",
        "Age must be between 0 and 150",
    );

    let current = send(&app, get("/api/users/1")).await;
    assert_eq!(current.body["user"]["first_name"], "Alice");
    assert_eq!(current.body["user"]["username"], "alice");
    assert_eq!(current.body["user"]["age"], 28);
}

#[actix_rt::test]
async fn user_may_keep_their_own_username_on_update() {
    let app = init_app(directory()).await;
    send(&app, post(&alice())).await;

    let reply = send(&app, put(1, &json!({"username": "alice", "email": "alice@example.com"}))).await;

    assert_eq!(reply.status, StatusCode::OK);
}

#[actix_rt::test]
async fn update_of_missing_user_is_not_found() {
    let app = init_app(directory()).await;
    let reply = send(&app, put(5, &json!({"age": 40}))).await;
    assert_envelope(
        &reply,
        StatusCode::NOT_FOUND,
        "User not found",
        "User with ID 5 does not exist",
    );
}

#[actix_rt::test]
async fn deleted_identifiers_are_never_reused() {
    let app = init_app(directory()).await;
    send(&app, post(&alice())).await;
    send(&app, post(&bob())).await;

    let deleted = send(&app, TestRequest::delete().uri("/api/users/2").to_request()).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "User deleted successfully");
    assert_eq!(deleted.body["user_id"], 2);

    let gone = send(&app, get("/api/users/2")).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let again = send(&app, TestRequest::delete().uri("/api/users/2").to_request()).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let mut carol = bob();
    carol["username"] = json!("carol");
    carol["email"] = json!("carol@example.com");
    let created = send(&app, post(&carol)).await;
    assert_eq!(created.body["user"]["id"], 3);
}

#[actix_rt::test]
async fn list_keeps_creation_order() {
    let app = init_app(directory()).await;
    send(&app, post(&bob())).await;
    send(&app, post(&alice())).await;

    let all = send(&app, get("/api/users")).await;

    let names: Vec<&str> = all.body["users"]
        .as_array()
        .expect("users array")
        .iter()
        .filter_map(|user| user["username"].as_str())
        .collect();
    assert_eq!(names, ["bob", "alice"]);
    assert_eq!(all.body["count"], 2);
}

#[actix_rt::test]
async fn unknown_routes_use_the_error_envelope() {
    let app = init_app(directory()).await;
    let reply = send(&app, get("/api/nothing-here")).await;
    assert_envelope(
        &reply,
        StatusCode::NOT_FOUND,
        "Resource not found",
        "The requested resource could not be found",
    );
}

#[rstest]
#[case("/api/users")]
#[case("/api/users/abc")]
#[case("/missing")]
#[actix_rt::test]
async fn every_response_carries_a_trace_id(#[case] uri: &str) {
    let app = init_app(directory()).await;
    let reply = send(&app, get(uri)).await;
    assert!(reply.headers.contains_key("trace-id"));
}

#[actix_rt::test]
async fn cross_origin_requests_are_allowed_without_credentials() {
    let app = init_app(directory()).await;
    let req = TestRequest::get()
        .uri("/api/users")
        .insert_header((header::ORIGIN, "https://client.example"))
        .to_request();

    let reply = send(&app, req).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.headers.contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    assert!(!reply.headers.contains_key(header::ACCESS_CONTROL_ALLOW_CREDENTIALS));
}

#[actix_rt::test]
async fn health_and_index_respond() {
    let app = init_app(directory()).await;

    let health = send(&app, get("/api/health")).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "healthy");
    assert_eq!(health.body["message"], "API is running");

    let index = send(&app, get("/")).await;
    assert_eq!(index.status, StatusCode::OK);
    assert!(index.text.contains("/api/users/{id}"));
}
