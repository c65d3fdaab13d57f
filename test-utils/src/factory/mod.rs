//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Defaults are made
//! unique with a shared counter so tests never collide on unique columns.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let category = factory::create_category(&db).await?;
//! let server = factory::create_server(&db, user.id, category.id).await?;
//! factory::add_member(&db, server.id, user.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let server = factory::server::ServerFactory::new(&db, owner.id, gaming.id)
//!     .name("Speedrunners")
//!     .description(Some("Any% only".to_string()))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `category` - Create category entities
//! - `server` - Create server entities
//! - `server_member` - Create server membership entries
//! - `helpers` - Unique id counter and multi-entity convenience methods

pub mod category;
pub mod helpers;
pub mod server;
pub mod server_member;
pub mod user;

pub use category::create_category;
pub use helpers::create_server_with_dependencies;
pub use server::create_server;
pub use server_member::{add_member, add_members};
pub use user::create_user;
