//! claims-types: domain model and ports shared by the claims crates

pub mod domain;
pub mod ports;
