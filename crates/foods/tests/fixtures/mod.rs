#![allow(dead_code)]

use axum::Router;
use nhub_database::Database;
use nhub_foods::models::{Food, FoodGroup};
use nhub_kernel::config::ApiConfig;
use nhub_kernel::server::ApiState;
use utoipa_axum::router::OpenApiRouter;

/// Connects an in-memory engine and assembles the shared state.
///
/// # Panics
/// * If the in-memory engine or the schema bootstrap fails.
pub async fn api_state() -> ApiState {
    let db = Database::builder()
        .url("mem://")
        .session("usda", "sr22")
        .init()
        .await
        .expect("connect to mem://");

    ApiState::builder().config(ApiConfig::default()).db(db).build().expect("api state")
}

/// The public food views as a ready-to-call service.
#[must_use]
pub fn public_app(state: ApiState) -> Router {
    let (router, _api) = OpenApiRouter::new()
        .merge(nhub_foods::router())
        .with_state(state)
        .split_for_parts();
    router
}

/// The admin surface as a ready-to-call service.
#[must_use]
pub fn admin_app(state: ApiState) -> Router {
    nhub_foods::admin::router().with_state(state)
}

#[must_use]
pub fn butter() -> Food {
    Food {
        ndb_number: 1001,
        food_group: 100,
        long_description: "Butter, salted".to_owned(),
        short_description: "BUTTER,WITH SALT".to_owned(),
        common_name: None,
        manufacturer_name: None,
        survey: true,
        refuse_description: None,
        refuse_percentage: Some(0),
        scientific_name: None,
        nitrogen_factor: Some(6.38),
        protein_factor: Some(4.27),
        fat_factor: Some(8.79),
        cho_factor: Some(3.87),
    }
}

#[must_use]
pub fn cheddar() -> Food {
    Food {
        ndb_number: 1009,
        food_group: 100,
        long_description: "Cheese, cheddar".to_owned(),
        short_description: "CHEESE,CHEDDAR".to_owned(),
        common_name: None,
        manufacturer_name: None,
        survey: true,
        refuse_description: None,
        refuse_percentage: Some(0),
        scientific_name: None,
        nitrogen_factor: Some(6.38),
        protein_factor: Some(4.27),
        fat_factor: Some(8.79),
        cho_factor: Some(3.87),
    }
}

#[must_use]
pub fn dairy_group() -> FoodGroup {
    FoodGroup { code: 100, description: "Dairy and Egg Products".to_owned() }
}
