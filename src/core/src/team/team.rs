use crate::team::TeamRecord;
use serde::{Deserialize, Serialize};

pub type TeamId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub pool: Option<String>,
    #[serde(default)]
    pub aggregate_record: TeamRecord,
}

impl Team {
    pub fn new(id: TeamId, name: &str, category: &str, pool: Option<&str>) -> Self {
        Team {
            id,
            name: name.to_string(),
            category: category.to_string(),
            pool: pool.map(String::from),
            aggregate_record: TeamRecord::default(),
        }
    }

    pub fn to_ref(&self) -> TeamRef {
        TeamRef {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Identity plus display name, enough to build a standings row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: TeamId,
    pub name: String,
}

impl TeamRef {
    pub fn new(id: TeamId, name: &str) -> Self {
        TeamRef {
            id,
            name: name.to_string(),
        }
    }
}
