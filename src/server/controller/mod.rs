//! HTTP request handlers.
//!
//! Controllers extract request data, convert DTOs into validated parameter types, call the
//! service layer and convert the resulting domain models back into DTOs. Authentication is
//! applied by the router as a middleware layer, not by individual handlers.

pub mod player;
pub mod team;

#[cfg(test)]
mod test;
