//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! resolver / stream fetcher produce:
//!     → logging.rs (structured log events, resolve_id span)
//!     → metrics.rs (counters)
//!
//! Consumers:
//!     → stderr (fmt layer)
//!     → whatever metrics recorder the host installs
//! ```

pub mod logging;
pub mod metrics;
