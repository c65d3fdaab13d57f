//! Wire types shared by the HTTP layer.
//!
//! These DTOs define the JSON shapes the API accepts and returns. They carry no
//! database or domain logic; conversion happens in `server::model`.

pub mod api;
pub mod category;
pub mod server;
