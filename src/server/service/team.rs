use sea_orm::DatabaseConnection;
use std::cmp::Reverse;

use crate::server::{
    data::player::PlayerRepository,
    error::{team::TeamError, AppError},
    model::{player::Player, team::TeamCriterion},
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Selects players for each criterion in order and concatenates the results.
    ///
    /// Players may be selected by more than one criterion. Stops at the first criterion
    /// that cannot be filled; no partial team is returned.
    ///
    /// # Returns
    /// - `Ok(Vec<Player>)` - Selected players in criteria order
    /// - `Err(TeamError::InsufficientPlayers)` - A criterion matched fewer players than requested
    pub async fn select(&self, criteria: &[TeamCriterion]) -> Result<Vec<Player>, AppError> {
        let repo = PlayerRepository::new(self.db);

        let mut team = Vec::new();
        for criterion in criteria {
            let candidates = repo.get_by_position(criterion.position).await?;
            let selected = select_for_criterion(candidates, criterion);

            if selected.len() < criterion.number_of_players {
                return Err(TeamError::InsufficientPlayers(criterion.position).into());
            }

            tracing::debug!(
                "Selected {} {} player(s) for {}",
                selected.len(),
                criterion.position,
                criterion.main_skill
            );

            team.extend(selected);
        }

        Ok(team)
    }
}

/// Ranks the players of one position for a criterion and keeps the top entries.
///
/// Players holding the main skill are ranked by its value. Only when none of them holds it
/// are all players ranked by their best skill instead, players without skills last. A
/// partial primary match is returned as is and never topped up from the fallback ranking.
/// Ties go to the lower player id.
pub fn select_for_criterion(candidates: Vec<Player>, criterion: &TeamCriterion) -> Vec<Player> {
    let mut primary: Vec<(i32, Player)> = candidates
        .iter()
        .filter_map(|p| p.skill_value(criterion.main_skill).map(|v| (v, p.clone())))
        .collect();

    if !primary.is_empty() {
        primary.sort_by_key(|(value, player)| (Reverse(*value), player.id));
        return primary
            .into_iter()
            .take(criterion.number_of_players)
            .map(|(_, player)| player)
            .collect();
    }

    let mut fallback = candidates;
    fallback.sort_by_key(|player| (Reverse(player.best_value()), player.id));
    fallback.truncate(criterion.number_of_players);
    fallback
}
