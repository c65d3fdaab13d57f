//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models from
//! `server::model` so the service layer never depends on database structures. Every
//! operation here is a read; the listing never modifies persisted data.

pub mod category;
pub mod server;
pub mod user;
