//! Foods feature slice.
//!
//! The nine USDA SR record schemas, the public food views (list + detail),
//! and the generic administrative surface they are registered on.

pub mod admin;
mod error;
pub mod models;
mod routes;
mod store;

pub use error::{FoodsError, FoodsErrorExt};
pub use routes::router;
pub use store::FoodStore;
