//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules and transaction boundaries
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and validated parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Logging** (`logs`) - `tracing` subscriber setup
//! - **State** (`state`) - Shared application state (DB pool, token verifier)
//! - **Startup** (`startup`) - Database connection, migrations and the HTTP listener
//! - **Router** (`router`) - Route table, middleware layers and Swagger UI
//! - **Docs** (`docs`) - OpenAPI document metadata
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and applies tracing and CORS layers
//! 2. **Middleware** checks the bearer token
//! 3. **Controller** validates the body into params, calls the service
//! 4. **Service** applies business rules, opening a transaction for writes
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod docs;
pub mod error;
pub mod logs;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
