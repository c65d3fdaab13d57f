//! Business logic layer between controllers and repositories.
//!
//! Services take typed parameters and the resolved caller, orchestrate repository
//! calls, and return domain models. They never touch HTTP types.

pub mod category;
pub mod server;
