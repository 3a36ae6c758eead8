use crate::server::error::player::PlayerError;

/// Parses a player id from a path segment
///
/// Ids that are not valid `i32` values cannot match any stored player, so they are
/// reported as not found rather than as a bad request.
///
/// # Arguments
/// - `value` - The raw path segment
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(PlayerError::NotFound)` - The segment is not an integer id
pub fn parse_player_id(value: String) -> Result<i32, PlayerError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| PlayerError::NotFound(value))
}
