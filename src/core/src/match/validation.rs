use crate::category::Category;
use crate::r#match::{MAX_SCORE, Match};
use crate::team::Team;
use crate::{MatchValidationError, StandingsError};

pub struct MatchValidator;

impl MatchValidator {
    /// Checks a match before it is written: distinct teams that exist and
    /// belong to the match's category and pool, and scores no higher than
    /// [`MAX_SCORE`].
    pub fn validate(
        m: &Match,
        category: &Category,
        home: Option<&Team>,
        away: Option<&Team>,
    ) -> Result<(), StandingsError> {
        category.validate_pool(m.pool.as_deref())?;

        if m.home_team_id == m.away_team_id {
            return Err(MatchValidationError::SameTeam(m.home_team_id).into());
        }

        if let Some(score) = [m.home_score, m.away_score].into_iter().flatten().find(|s| *s > MAX_SCORE) {
            return Err(MatchValidationError::ImplausibleScore(score).into());
        }

        let home = home.ok_or(MatchValidationError::UnknownTeam(m.home_team_id))?;
        let away = away.ok_or(MatchValidationError::UnknownTeam(m.away_team_id))?;

        for team in [home, away] {
            if team.category != m.category {
                return Err(MatchValidationError::CategoryMismatch {
                    team_id: team.id,
                    expected: m.category.clone(),
                    actual: team.category.clone(),
                }
                .into());
            }

            if category.has_pools && team.pool != m.pool {
                return Err(MatchValidationError::PoolMismatch {
                    team_id: team.id,
                    expected: m.pool.clone(),
                    actual: team.pool.clone(),
                }
                .into());
            }
        }

        Ok(())
    }
}
