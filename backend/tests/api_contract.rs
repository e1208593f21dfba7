//! HTTP contract tests against a real in-memory SQLite store.

use actix_web::http::{StatusCode, header};
use actix_web::test;
use rstest::rstest;
use serde_json::{Value, json};

mod support;

use support::{app, json as body_json, store};

/// `YYYY-MM-DD` with ASCII digits.
fn is_iso_date(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

#[actix_web::test]
async fn posted_user_round_trips_and_is_listed_last() {
    let db = store(true).await;
    let app = app(&db).await;
    let body = json!({
        "first_name": "A",
        "last_name": "B",
        "age": 30,
        "email": "a@b.com",
        "role": "client",
        "phone": "123"
    });

    let created = test::call_service(
        &app,
        test::TestRequest::post().uri("/users").set_json(&body).to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    assert!(test::read_body(created).await.is_empty());

    let listed = test::call_service(&app, test::TestRequest::get().uri("/users").to_request()).await;
    assert_eq!(listed.status(), StatusCode::OK);
    let users = body_json(&test::read_body(listed).await);
    let last = users
        .as_array()
        .and_then(|users| users.last())
        .expect("at least one user")
        .clone();
    let id = last["id"].as_i64().expect("integer id");
    let mut expected = body.clone();
    expected["id"] = json!(id);
    assert_eq!(last, expected);

    let fetched = test::call_service(
        &app,
        test::TestRequest::get().uri(&format!("/users/{id}")).to_request(),
    )
    .await;
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(body_json(&test::read_body(fetched).await), expected);
}

#[actix_web::test]
async fn serialised_user_keeps_column_order() {
    let db = store(false).await;
    let app = app(&db).await;
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_payload(r#"{"phone":"1","first_name":"Z"}"#)
            .to_request(),
    )
    .await;

    let fetched = test::call_service(&app, test::TestRequest::get().uri("/users/1").to_request()).await;
    let text = String::from_utf8(test::read_body(fetched).await.to_vec()).expect("utf8 body");
    assert_eq!(
        text,
        r#"{"id":1,"first_name":"Z","last_name":null,"age":null,"email":null,"role":null,"phone":"1"}"#
    );
}

#[rstest]
#[case("/users/1")]
#[case("/orders/1")]
#[case("/offers/1")]
#[actix_web::test]
async fn second_delete_is_not_found(#[case] uri: &str) {
    let db = store(true).await;
    let app = app(&db).await;

    let first = test::call_service(&app, test::TestRequest::delete().uri(uri).to_request()).await;
    assert!(first.status().is_success());

    let second = test::call_service(&app, test::TestRequest::delete().uri(uri).to_request()).await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    let error = body_json(&test::read_body(second).await);
    assert_eq!(error["code"], json!("not_found"));
}

#[actix_web::test]
async fn seeded_order_dates_are_iso_text() {
    let db = store(true).await;
    let app = app(&db).await;

    let listed = test::call_service(&app, test::TestRequest::get().uri("/orders").to_request()).await;
    let orders = body_json(&test::read_body(listed).await);
    let orders = orders.as_array().expect("order array");
    assert!(!orders.is_empty());
    for order in orders {
        for field in ["start_date", "end_date"] {
            let text = order[field].as_str().expect("date rendered as text");
            assert!(is_iso_date(text), "{field} = {text}");
        }
    }
    assert_eq!(orders[0]["start_date"], json!("2013-02-08"));
    assert_eq!(orders[0]["end_date"], json!("2038-05-25"));
}

#[actix_web::test]
async fn replaced_order_is_reflected_by_get() {
    let db = store(true).await;
    let app = app(&db).await;
    let replacement = json!({
        "name": "Hang shelves",
        "description": "Three oak shelves",
        "start_date": "2025-01-10",
        "end_date": "2025-01-12",
        "address": "12 Elm Road",
        "price": 4200,
        "customer_id": 3,
        "executor_id": 4
    });

    let replaced = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/orders/2")
            .set_json(&replacement)
            .to_request(),
    )
    .await;
    assert_eq!(replaced.status(), StatusCode::NO_CONTENT);

    let fetched = test::call_service(&app, test::TestRequest::get().uri("/orders/2").to_request()).await;
    let mut expected = replacement.clone();
    expected["id"] = json!(2);
    assert_eq!(body_json(&test::read_body(fetched).await), expected);
}

#[rstest]
#[case("/users/999")]
#[case("/orders/999")]
#[case("/offers/999")]
#[case("/offers999")]
#[actix_web::test]
async fn missing_ids_are_not_found_json(#[case] uri: &str) {
    let db = store(true).await;
    let app = app(&db).await;

    let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().contains_key("trace-id"));
    let error = body_json(&test::read_body(response).await);
    assert_eq!(error["code"], json!("not_found"));
    assert!(error["traceId"].is_string());
}

#[rstest]
#[case(test::TestRequest::post().uri("/users").set_json(json!({})), StatusCode::CREATED)]
#[case(test::TestRequest::put().uri("/users/1").set_json(json!({
    "first_name": null, "last_name": null, "age": null,
    "email": null, "role": null, "phone": null
})), StatusCode::OK)]
#[case(test::TestRequest::delete().uri("/users/2"), StatusCode::NO_CONTENT)]
#[case(test::TestRequest::post().uri("/orders").set_json(json!({})), StatusCode::CREATED)]
#[case(test::TestRequest::put().uri("/orders/1").set_json(json!({
    "name": null, "description": null, "start_date": null, "end_date": null,
    "address": null, "price": null, "customer_id": null, "executor_id": null
})), StatusCode::NO_CONTENT)]
#[case(test::TestRequest::delete().uri("/orders/2"), StatusCode::OK)]
#[case(test::TestRequest::post().uri("/offers").set_json(json!({})), StatusCode::CREATED)]
#[case(test::TestRequest::put().uri("/offers1").set_json(json!({"name": null})), StatusCode::NO_CONTENT)]
#[case(test::TestRequest::delete().uri("/offers2"), StatusCode::OK)]
#[actix_web::test]
async fn write_status_codes_match_contract(
    #[case] request: test::TestRequest,
    #[case] expected: StatusCode,
) {
    let db = store(true).await;
    let app = app(&db).await;

    let response = test::call_service(&app, request.to_request()).await;

    assert_eq!(response.status(), expected);
    assert!(test::read_body(response).await.is_empty());
}

#[rstest]
#[case("/users")]
#[case("/orders")]
#[case("/offers")]
#[case("/users/1")]
#[case("/orders/1")]
#[case("/offers1")]
#[actix_web::test]
async fn reads_declare_utf8_json(#[case] uri: &str) {
    let db = store(true).await;
    let app = app(&db).await;

    let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("application/json; charset=utf-8")
    );
}

#[actix_web::test]
async fn offer_update_stores_nothing() {
    let db = store(true).await;
    let app = app(&db).await;
    let before = test::call_service(&app, test::TestRequest::get().uri("/offers/1").to_request()).await;
    let before = body_json(&test::read_body(before).await);

    let response = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/offers/1")
            .set_json(json!({"name": "Renamed", "executor_id": 99}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let after = test::call_service(&app, test::TestRequest::get().uri("/offers1").to_request()).await;
    assert_eq!(body_json(&test::read_body(after).await), before);
}

#[actix_web::test]
async fn dangling_references_are_accepted() {
    let db = store(false).await;
    let app = app(&db).await;

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/offers")
            .set_json(json!({"order_id": 500, "executor_id": 600}))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let listed = test::call_service(&app, test::TestRequest::get().uri("/offers").to_request()).await;
    assert_eq!(
        body_json(&test::read_body(listed).await),
        json!([{"id": 1, "order_id": 500, "executor_id": 600}])
    );
}

#[rstest]
#[case("not json")]
#[case("[1, 2]")]
#[case(r#"{"age": "thirty"}"#)]
#[actix_web::test]
async fn malformed_bodies_are_bad_requests(#[case] payload: &'static str) {
    let db = store(false).await;
    let app = app(&db).await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_payload(payload)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: Value = body_json(&test::read_body(response).await);
    assert_eq!(error["code"], json!("invalid_request"));
}

#[rstest]
#[case("/offers+1")]
#[case("/offers/-1")]
#[case("/users/+1")]
#[case("/orders/abc")]
#[case("/users/99999999999")]
#[actix_web::test]
async fn ids_must_be_plain_integers(#[case] uri: &str) {
    let db = store(true).await;
    let app = app(&db).await;

    let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error = body_json(&test::read_body(response).await);
    assert_eq!(error["code"], json!("not_found"));
}

#[rstest]
#[case(test::TestRequest::patch().uri("/users/1"))]
#[case(test::TestRequest::delete().uri("/users"))]
#[case(test::TestRequest::put().uri("/orders"))]
#[case(test::TestRequest::post().uri("/orders/1"))]
#[case(test::TestRequest::post().uri("/offers1"))]
#[case(test::TestRequest::patch().uri("/offers/1"))]
#[actix_web::test]
async fn unsupported_methods_are_rejected(#[case] request: test::TestRequest) {
    let db = store(true).await;
    let app = app(&db).await;

    let response = test::call_service(&app, request.to_request()).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let error = body_json(&test::read_body(response).await);
    assert_eq!(error["code"], json!("method_not_allowed"));
}

#[actix_web::test]
async fn referenced_rows_can_be_deleted() {
    let db = store(true).await;
    let app = app(&db).await;

    // Seeded order 1 names user 1 as its customer and offers point at it.
    let user = test::call_service(&app, test::TestRequest::delete().uri("/users/1").to_request()).await;
    assert_eq!(user.status(), StatusCode::NO_CONTENT);
    let order = test::call_service(&app, test::TestRequest::delete().uri("/orders/1").to_request()).await;
    assert_eq!(order.status(), StatusCode::OK);

    let offers = test::call_service(&app, test::TestRequest::get().uri("/offers").to_request()).await;
    let offers = body_json(&test::read_body(offers).await);
    assert!(
        offers
            .as_array()
            .expect("offer array")
            .iter()
            .any(|offer| offer["order_id"] == json!(1))
    );
}
