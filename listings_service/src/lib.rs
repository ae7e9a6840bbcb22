//! Listings service library.
//!
//! The binary in `main.rs` wires configuration and connections together;
//! everything else lives here so integration tests can assemble the same
//! router against their own database.

pub mod api;
pub mod config;
pub mod constants;
pub mod password;
pub mod reference;
