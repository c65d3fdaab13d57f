//! HTTP request handlers.
//!
//! Controllers resolve the caller, convert query strings into typed parameters,
//! call the service layer and convert domain models into DTOs.

pub mod category;
pub mod server;
