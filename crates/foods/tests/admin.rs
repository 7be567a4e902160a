mod fixtures;

use axum::body::{Body, to_bytes};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use nhub_foods::models::FoodGroup;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("read body");
    serde_json::from_slice(&bytes).expect("parse body")
}

fn post_json(uri: &str, body: &impl serde::Serialize) -> Request<Body> {
    Request::post(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("serialize body")))
        .unwrap()
}

#[tokio::test]
async fn index_lists_all_registered_collections() {
    let state = fixtures::api_state().await;

    let app = fixtures::admin_app(state);
    let response =
        app.oneshot(Request::get("/").body(Body::empty()).unwrap()).await.expect("request");

    assert_eq!(response.status(), StatusCode::OK);

    let entries = body_json(response).await;
    let tables: Vec<&str> = entries
        .as_array()
        .expect("array body")
        .iter()
        .map(|e| e["table"].as_str().expect("table"))
        .collect();

    assert_eq!(tables.len(), 9);
    for table in [
        "food",
        "food_group",
        "weight",
        "nutrient",
        "footnote",
        "data_source",
        "data_derivation",
        "source",
        "nutrient_data",
    ] {
        assert!(tables.contains(&table), "missing collection {table}");
    }
}

#[tokio::test]
async fn edit_then_browse_roundtrip() {
    let state = fixtures::api_state().await;
    let app = fixtures::admin_app(state);

    let created = app
        .clone()
        .oneshot(post_json("/food", &fixtures::butter()))
        .await
        .expect("create request");
    assert_eq!(created.status(), StatusCode::NO_CONTENT);

    // Same NDB number: the record is replaced, not duplicated.
    let mut renamed = fixtures::butter();
    renamed.long_description = "Butter, salted (updated)".to_owned();
    let updated = app.clone().oneshot(post_json("/food", &renamed)).await.expect("update request");
    assert_eq!(updated.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(Request::get("/food").body(Body::empty()).unwrap())
        .await
        .expect("browse request");
    assert_eq!(response.status(), StatusCode::OK);

    let foods = body_json(response).await;
    let foods = foods.as_array().expect("array body");
    assert_eq!(foods.len(), 1);
    assert_eq!(foods[0]["longDescription"], "Butter, salted (updated)");
}

#[tokio::test]
async fn browse_follows_natural_order_and_paging() {
    let state = fixtures::api_state().await;

    for (code, description) in [(300, "Baby Foods"), (100, "Dairy and Egg Products"), (200, "Spices and Herbs")] {
        state
            .database
            .save(FoodGroup { code, description: description.to_owned() })
            .await
            .expect("seed group");
    }

    let app = fixtures::admin_app(state);
    let response = app
        .clone()
        .oneshot(Request::get("/food_group?limit=2").body(Body::empty()).unwrap())
        .await
        .expect("request");
    assert_eq!(response.status(), StatusCode::OK);

    let groups = body_json(response).await;
    let codes: Vec<i64> = groups
        .as_array()
        .expect("array body")
        .iter()
        .map(|g| g["code"].as_i64().expect("code"))
        .collect();
    assert_eq!(codes, vec![100, 200]);

    let response = app
        .oneshot(Request::get("/food_group?start=2").body(Body::empty()).unwrap())
        .await
        .expect("request");
    let groups = body_json(response).await;
    let codes: Vec<i64> = groups
        .as_array()
        .expect("array body")
        .iter()
        .map(|g| g["code"].as_i64().expect("code"))
        .collect();
    assert_eq!(codes, vec![300]);
}

#[tokio::test]
async fn oversized_field_is_rejected_by_the_store() {
    let state = fixtures::api_state().await;
    let app = fixtures::admin_app(state);

    let group = FoodGroup { code: 100, description: "x".repeat(61) };
    let response = app.oneshot(post_json("/food_group", &group)).await.expect("request");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
