//! Kernel utilities shared across slices.
//!
//! Keep this crate lightweight: configuration types and loading, the shared
//! API state, and the system endpoints every deployment carries.
//!
//! ## Config loading
//! ```rust,ignore
//! use nhub_kernel::config::{ApiConfig, load_config};
//! let cfg: ApiConfig = load_config(Some("server")).unwrap();
//! ```

pub mod config;
pub mod constants;
pub mod server;
