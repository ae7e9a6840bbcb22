//! Request-boundary plumbing shared by the listings service routers:
//! authentication guards, the read-through response cache, and the
//! envelope-shaped error responses.

pub mod auth;
pub mod cache;
pub mod error_handler;
