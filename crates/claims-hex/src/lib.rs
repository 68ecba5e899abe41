//! claims-hex: hexagonal Claims API library (core + inbound HTTP + outbound files)

pub mod config;
pub mod errors;

pub mod application;

pub use claims_types::{domain, ports};

pub mod inbound; // HTTP adapter (server + handlers)
pub mod outbound; // claim file writer
