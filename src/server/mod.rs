//! Server-side API backend.
//!
//! This module contains the backend for the server directory: the HTTP endpoints,
//! the listing logic, data access, and the infrastructure that wires them together.
//! The backend uses Axum as the web framework and SeaORM for database access.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Filtering pipeline and orchestration
//! - **Data Layer** (`data/`) - Database queries and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and typed operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Caller resolution and typed session access
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Database, session and CORS initialization
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Middleware** resolves the caller from the session
//! 3. **Controller** parses query parameters into typed params, calls the service
//! 4. **Service** runs the listing pipeline through the data layer
//! 5. **Data** queries the database, converts entities to domain models
//! 6. **Controller** converts domain models to DTOs and returns JSON

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
