use crate::error::{FoodsError, FoodsErrorExt};
use crate::models::Food;
use nhub_database::Database;

/// Read access to the food collection.
#[derive(Debug, Clone)]
pub struct FoodStore {
    db: Database,
}

impl FoodStore {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// All food records, ordered by NDB number ascending.
    ///
    /// # Errors
    /// Returns [`FoodsError::Database`] if the query fails.
    pub async fn list(&self) -> Result<Vec<Food>, FoodsError> {
        let foods = self
            .db
            .query("SELECT * OMIT id FROM food ORDER BY ndb_number ASC")
            .await
            .context("Listing foods")?
            .take::<Vec<Food>>(0)
            .context("Parsing food list")?;

        Ok(foods)
    }

    /// The food record with the given NDB number, if present.
    ///
    /// # Errors
    /// Returns [`FoodsError::Database`] if the query fails.
    pub async fn get(&self, ndb_number: i64) -> Result<Option<Food>, FoodsError> {
        let food = self
            .db
            .query("SELECT * OMIT id FROM food WHERE ndb_number = $ndb_number LIMIT 1")
            .bind(("ndb_number", ndb_number))
            .await
            .context("Fetching food")?
            .take::<Option<Food>>(0)
            .context("Parsing food")?;

        Ok(food)
    }
}
