//! Domain models and operation parameters used by the service and data layers.
//!
//! Repositories convert SeaORM entity models into these types at their boundary,
//! and controllers convert them into DTOs from `crate::model` before responding.

pub mod caller;
pub mod category;
pub mod server;
pub mod user;
