//! # Observability & Tracing
//!
//! Every store logs through `tracing` with an `entity_type` field, so one line
//! identifies which collection it came from:
//!
//! ```text
//! INFO Actor started entity_type="Item" next_id=1
//! INFO Created entity_type="Item" id=1 size=1
//! WARN Conflict entity_type="User" existing_id=1 error=Username already registered
//! INFO Restored entity_type="Item" size=2 next_id=3
//! ```
//!
//! Full payloads are only logged at `debug` (`?params`, `?update`), so
//! `RUST_LOG=info` stays compact.
//!
//! ```bash
//! RUST_LOG=debug contract-api
//! RUST_LOG=resource_framework=debug,info contract-api
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global compact formatter.
///
/// `RUST_LOG` wins when set; otherwise `default_level` (e.g. `"info"`) is used.
/// Calling this more than once is harmless: later calls leave the first
/// subscriber in place.
pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type already says where a line comes from
        .compact()
        .try_init();
}
