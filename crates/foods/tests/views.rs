mod fixtures;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("read body");
    serde_json::from_slice(&bytes).expect("parse body")
}

#[tokio::test]
async fn food_list_returns_all_records_ordered_by_ndb_number() {
    let state = fixtures::api_state().await;
    // Seed out of order; the view must sort ascending.
    state.database.save(fixtures::cheddar()).await.expect("seed cheddar");
    state.database.save(fixtures::butter()).await.expect("seed butter");

    let app = fixtures::public_app(state);
    let response =
        app.oneshot(Request::get("/").body(Body::empty()).unwrap()).await.expect("request");

    assert_eq!(response.status(), StatusCode::OK);

    let foods = body_json(response).await;
    let numbers: Vec<i64> = foods
        .as_array()
        .expect("array body")
        .iter()
        .map(|f| f["ndbNumber"].as_i64().expect("ndbNumber"))
        .collect();
    assert_eq!(numbers, vec![1001, 1009]);
}

#[tokio::test]
async fn food_detail_returns_the_long_description() {
    let state = fixtures::api_state().await;
    state.database.save(fixtures::butter()).await.expect("seed butter");

    let app = fixtures::public_app(state);
    let response =
        app.oneshot(Request::get("/1001").body(Body::empty()).unwrap()).await.expect("request");

    assert_eq!(response.status(), StatusCode::OK);

    let food = body_json(response).await;
    assert_eq!(food["ndbNumber"], 1001);
    assert_eq!(food["longDescription"], "Butter, salted");
    assert_eq!(food["survey"], true);
}

#[tokio::test]
async fn missing_food_is_a_404() {
    let state = fixtures::api_state().await;
    state.database.save(fixtures::butter()).await.expect("seed butter");

    let app = fixtures::public_app(state);
    let response =
        app.oneshot(Request::get("/99999").body(Body::empty()).unwrap()).await.expect("request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_key_is_rejected() {
    let state = fixtures::api_state().await;

    let app = fixtures::public_app(state);
    let response =
        app.oneshot(Request::get("/butter").body(Body::empty()).unwrap()).await.expect("request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_database_lists_nothing() {
    let state = fixtures::api_state().await;

    let app = fixtures::public_app(state);
    let response =
        app.oneshot(Request::get("/").body(Body::empty()).unwrap()).await.expect("request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}
