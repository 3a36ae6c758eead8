//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are produced by
//! validating request DTOs, so anything past the controller works with checked values.

pub mod player;
pub mod team;
