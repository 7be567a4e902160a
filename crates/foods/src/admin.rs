//! Generic administrative surface.
//!
//! Each record type is registered once on an [`AdminSite`]; the browse and edit
//! handlers are generic over [`Record`], so registration is pure wiring with no
//! per-entity behavior.

use crate::error::FoodsError;
use crate::models::{
    DataDerivation, DataSource, Food, FoodGroup, Footnote, Nutrient, NutrientData, Source, Weight,
};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use nhub_database::{Database, Page, Record};
use nhub_kernel::server::ApiState;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// One registered collection, as shown on the admin index.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminEntry {
    pub table: &'static str,
    pub title: &'static str,
    pub order_by: &'static str,
}

/// Binds a generic browse/edit surface to each registered record type.
#[derive(Debug, Default)]
pub struct AdminSite {
    entries: Vec<AdminEntry>,
    router: Router<ApiState>,
}

impl AdminSite {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a record type: one browse route, one edit route.
    #[must_use]
    pub fn register<T>(mut self) -> Self
    where
        T: Record + Serialize + DeserializeOwned,
    {
        self.entries.push(AdminEntry { table: T::TABLE, title: T::TITLE, order_by: T::ORDER_BY });
        self.router =
            self.router.route(&format!("/{}", T::TABLE), get(browse::<T>).post(edit::<T>));
        self
    }

    /// Finalizes the site; `GET /` serves the index of registered collections.
    #[must_use]
    pub fn into_router(self) -> Router<ApiState> {
        let entries = self.entries;
        self.router.route(
            "/",
            get(move || {
                let entries = entries.clone();
                async move { Json(entries) }
            }),
        )
    }
}

async fn browse<T>(
    State(db): State<Database>,
    Query(page): Query<Page>,
) -> Result<Json<Vec<T>>, FoodsError>
where
    T: Record + Serialize,
{
    Ok(Json(db.browse::<T>(page).await?))
}

async fn edit<T>(State(db): State<Database>, Json(record): Json<T>) -> Result<StatusCode, FoodsError>
where
    T: Record + DeserializeOwned,
{
    db.save(record).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// The administrative surface with every USDA record type attached.
#[must_use]
pub fn router() -> Router<ApiState> {
    AdminSite::new()
        .register::<Food>()
        .register::<FoodGroup>()
        .register::<Weight>()
        .register::<Nutrient>()
        .register::<Footnote>()
        .register::<DataSource>()
        .register::<DataDerivation>()
        .register::<Source>()
        .register::<NutrientData>()
        .into_router()
}
