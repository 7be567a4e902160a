use crate::error::{DatabaseError, DatabaseErrorExt};
use sha2::{Digest, Sha256};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use surrealdb::types::SurrealValue;

/// Bootstrap script defining the nine USDA collections and their uniqueness invariants.
const SCHEMA: &str = include_str!("schema.surql");

/// Bump when `schema.surql` changes shape.
const SCHEMA_VERSION: i64 = 1;

/// Outcome of a bootstrap pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatus {
    /// The script was applied and the ledger updated.
    Applied { version: i64 },
    /// The ledger already records this version with a matching checksum.
    Current { version: i64 },
}

#[derive(Debug, SurrealValue)]
struct SchemaLedger {
    version: i64,
    checksum: String,
}

#[derive(Debug)]
pub(crate) struct SchemaBootstrap {
    db: Surreal<Any>,
}

impl SchemaBootstrap {
    #[must_use]
    pub(crate) const fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub(crate) async fn ensure(&self) -> Result<SchemaStatus, DatabaseError> {
        let checksum = hex::encode(Sha256::digest(SCHEMA.as_bytes()));

        if let Some(ledger) = self.ledger().await? {
            if ledger.version > SCHEMA_VERSION {
                return Err(DatabaseError::Schema {
                    message: format!(
                        "Database schema version {} is newer than this build ({SCHEMA_VERSION})",
                        ledger.version
                    )
                    .into(),
                    context: None,
                });
            }
            if ledger.version == SCHEMA_VERSION {
                ensure_checksum_match(&ledger, &checksum)?;
                return Ok(SchemaStatus::Current { version: ledger.version });
            }
        }

        self.apply(&checksum).await?;
        Ok(SchemaStatus::Applied { version: SCHEMA_VERSION })
    }

    async fn ledger(&self) -> Result<Option<SchemaLedger>, DatabaseError> {
        let ledger = self
            .db
            .query("SELECT version, checksum FROM meta:schema")
            .await
            .context("Reading schema ledger")?
            .take::<Option<SchemaLedger>>(0)
            .context("Parsing schema ledger")?;

        Ok(ledger)
    }

    async fn apply(&self, checksum: &str) -> Result<(), DatabaseError> {
        self.db
            .query(SCHEMA)
            .await
            .context("Applying schema script")?
            .check()
            .map_err(surrealdb::Error::from)?;

        self.db
            .query("UPSERT meta:schema CONTENT { version: $version, checksum: $checksum }")
            .bind(("version", SCHEMA_VERSION))
            .bind(("checksum", checksum.to_owned()))
            .await
            .context("Recording schema ledger")?
            .check()
            .map_err(surrealdb::Error::from)?;

        Ok(())
    }
}

fn ensure_checksum_match(ledger: &SchemaLedger, checksum: &str) -> Result<(), DatabaseError> {
    if ledger.checksum != checksum {
        return Err(DatabaseError::Schema {
            message: format!(
                "Checksum mismatch at version {} (recorded {}, built {})",
                ledger.version, ledger.checksum, checksum
            )
            .into(),
            context: Some("Schema already applied with a different script".into()),
        });
    }
    Ok(())
}
