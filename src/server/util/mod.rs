//! Small helpers shared by controllers and tests.

pub mod parse;

#[cfg(test)]
pub(crate) mod test_server;
