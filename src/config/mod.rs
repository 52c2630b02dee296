//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)          API_BASE_URL (env)
//!     → loader.rs (parse & deserialize, env override)
//!     → validation.rs (semantic checks)
//!     → ResolverConfig (validated, immutable)
//!     → endpoint list + transport settings handed to the resolver
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no reload during a resolution
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_config_with_endpoints, load_from_env, ConfigError};
pub use schema::ResolverConfig;
pub use schema::{ClientConfig, EndpointsConfig, ObservabilityConfig, TimeoutConfig};
