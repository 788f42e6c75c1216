//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `api` - Tolerant decoding of backend list payloads
//! - `directory` - Author directory implementations (in-memory)

pub mod api;
pub mod directory;
