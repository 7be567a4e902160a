use crate::error::FoodsError;
use crate::models::Food;
use crate::store::FoodStore;
use axum::Json;
use axum::extract::{Path, State};
use nhub_database::Database;
use nhub_kernel::constants::FOODS_TAG;
use nhub_kernel::server::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// The public food views: list and detail.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(food_list)).routes(routes!(food_detail))
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = OK, description = "All food records, ordered by NDB number", body = [Food])),
    tag = FOODS_TAG,
)]
async fn food_list(State(db): State<Database>) -> Result<Json<Vec<Food>>, FoodsError> {
    let foods = FoodStore::new(db).list().await?;
    Ok(Json(foods))
}

#[utoipa::path(
    get,
    path = "/{ndb_number}",
    params(("ndb_number" = i64, Path, description = "Nutrient Databank number")),
    responses(
        (status = OK, description = "The food record", body = Food),
        (status = NOT_FOUND, description = "No food with this NDB number"),
    ),
    tag = FOODS_TAG,
)]
async fn food_detail(
    State(db): State<Database>,
    Path(ndb_number): Path<i64>,
) -> Result<Json<Food>, FoodsError> {
    let food = FoodStore::new(db)
        .get(ndb_number)
        .await?
        .ok_or(FoodsError::NotFound { ndb_number })?;

    Ok(Json(food))
}
