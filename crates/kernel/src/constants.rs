//! Workspace-wide constants.

/// OpenAPI tag for system endpoints.
pub const SYSTEM_TAG: &str = "System";

/// OpenAPI tag for the public food views.
pub const FOODS_TAG: &str = "Foods";

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "NHUB";
