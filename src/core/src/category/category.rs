use crate::StandingsError;
use crate::standings::StandingsScope;
use serde::{Deserialize, Serialize};

/// Competition division, e.g. "L1 MESSIEUR".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub has_pools: bool,
    #[serde(default)]
    pub pools: Vec<String>,
}

impl Category {
    pub fn new(name: &str) -> Self {
        Category {
            name: name.to_string(),
            has_pools: false,
            pools: Vec::new(),
        }
    }

    pub fn with_pools(name: &str, pools: &[&str]) -> Self {
        Category {
            name: name.to_string(),
            has_pools: true,
            pools: pools.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn declares_pool(&self, pool: &str) -> bool {
        self.has_pools && self.pools.iter().any(|p| p == pool)
    }

    /// Checks the pool carried by a team, match or calendar pool against this category.
    pub fn validate_pool(&self, pool: Option<&str>) -> Result<(), StandingsError> {
        match (self.has_pools, pool) {
            (true, Some(pool)) if self.declares_pool(pool) => Ok(()),
            (true, Some(pool)) => Err(StandingsError::UndeclaredPool {
                category: self.name.clone(),
                pool: pool.to_string(),
            }),
            (true, None) => Err(StandingsError::PoolRequired {
                category: self.name.clone(),
            }),
            (false, Some(pool)) => Err(StandingsError::PoolNotAllowed {
                category: self.name.clone(),
                pool: pool.to_string(),
            }),
            (false, None) => Ok(()),
        }
    }

    /// Scopes covered by a recalculation request. No pool on a pool-based
    /// category fans out to every declared pool.
    pub fn scopes(&self, pool: Option<&str>) -> Result<Vec<StandingsScope>, StandingsError> {
        if !self.has_pools {
            self.validate_pool(pool)?;
            return Ok(vec![StandingsScope::new(&self.name, None)]);
        }

        match pool {
            Some(pool) => {
                self.validate_pool(Some(pool))?;
                Ok(vec![StandingsScope::new(&self.name, Some(pool))])
            }
            None => Ok(self
                .pools
                .iter()
                .map(|p| StandingsScope::new(&self.name, Some(p)))
                .collect()),
        }
    }
}
