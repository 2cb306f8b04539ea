use crate::standings::ResolutionError;
use crate::team::{Team, TeamId, TeamRef};
use crate::utils::names_equal;

/// Teams of a single category.
#[derive(Debug, Clone)]
pub struct TeamCollection {
    pub category: String,
    pub teams: Vec<Team>,
}

impl TeamCollection {
    pub fn new(category: &str, teams: Vec<Team>) -> Self {
        TeamCollection {
            category: category.to_string(),
            teams,
        }
    }

    pub fn by_id(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn with_pool(&self, pool: Option<&str>) -> Vec<TeamRef> {
        self.teams
            .iter()
            .filter(|t| t.pool.as_deref() == pool)
            .map(Team::to_ref)
            .collect()
    }

    /// Exact match on the trimmed, lower-cased name. No fuzzy fallback.
    pub fn find_by_name(&self, name: &str) -> Result<TeamRef, ResolutionError> {
        let mut found = self.teams.iter().filter(|t| names_equal(&t.name, name));

        match (found.next(), found.next()) {
            (Some(team), None) => Ok(team.to_ref()),
            (Some(_), Some(_)) => Err(ResolutionError::Ambiguous {
                name: name.to_string(),
                category: self.category.clone(),
            }),
            (None, _) => Err(ResolutionError::Unresolved {
                name: name.to_string(),
                category: self.category.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> TeamCollection {
        TeamCollection::new(
            "L1 MESSIEUR",
            vec![
                Team::new(1, "ELCIB FC", "L1 MESSIEUR", None),
                Team::new(2, "Phoenix", "L1 MESSIEUR", None),
            ],
        )
    }

    #[test]
    fn test_find_by_name_is_case_insensitive_and_trimmed() {
        let roster = roster();
        assert_eq!(roster.find_by_name("  elcib fc ").unwrap().id, 1);
        assert_eq!(roster.find_by_name("PHOENIX").unwrap().id, 2);
    }

    #[test]
    fn test_find_by_name_rejects_partial_names() {
        let roster = roster();
        assert_eq!(
            roster.find_by_name("Elcib"),
            Err(ResolutionError::Unresolved {
                name: "Elcib".to_string(),
                category: "L1 MESSIEUR".to_string(),
            })
        );
    }

    #[test]
    fn test_find_by_name_reports_duplicates() {
        let mut roster = roster();
        roster.teams.push(Team::new(3, "phoenix ", "L1 MESSIEUR", None));

        assert!(matches!(
            roster.find_by_name("Phoenix"),
            Err(ResolutionError::Ambiguous { .. })
        ));
    }
}
