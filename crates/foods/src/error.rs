use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use nhub_database::DatabaseError;
use serde_json::json;
use std::borrow::Cow;

/// Foods feature error type.
#[derive(Debug, thiserror::Error)]
pub enum FoodsError {
    /// No food with the requested NDB number.
    #[error("Food {ndb_number} not found")]
    NotFound { ndb_number: i64 },

    /// A wrapper for infrastructure database errors.
    #[error("Database error{}: {source}", format_context(.context))]
    Database {
        #[source]
        source: DatabaseError,
        context: Option<Cow<'static, str>>,
    },
}

impl From<DatabaseError> for FoodsError {
    #[inline]
    fn from(source: DatabaseError) -> Self {
        Self::Database { source, context: None }
    }
}

impl From<surrealdb::Error> for FoodsError {
    #[inline]
    fn from(source: surrealdb::Error) -> Self {
        Self::Database { source: source.into(), context: None }
    }
}

/// Attaches context to results carrying feature errors.
pub trait FoodsErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, FoodsError>;
}

impl<T> FoodsErrorExt<T> for Result<T, surrealdb::Error> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, FoodsError> {
        self.map_err(|source| FoodsError::Database {
            source: source.into(),
            context: Some(context.into()),
        })
    }
}

impl<T> FoodsErrorExt<T> for Result<T, DatabaseError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, FoodsError> {
        self.map_err(|source| FoodsError::Database { source, context: Some(context.into()) })
    }
}

impl IntoResponse for FoodsError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound { .. } => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": self.to_string() }))).into_response()
            }
            Self::Database { .. } => {
                tracing::error!(error = %self, "Food query failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "internal error" })))
                    .into_response()
            }
        }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
