//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They
//! implement the business rules, own transaction boundaries for multi-step writes, and work
//! with domain models rather than DTOs or entity models.

pub mod player;
pub mod team;
