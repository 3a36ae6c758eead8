//! Wire-level data transfer objects.
//!
//! Everything in here is serialized to or deserialized from JSON request and response
//! bodies. The server converts these into domain models (`server::model`) at the
//! controller boundary.

pub mod api;
pub mod player;
pub mod team;
