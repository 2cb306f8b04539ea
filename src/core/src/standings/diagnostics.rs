use crate::r#match::MatchId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticKind {
    UnresolvedTeam,
    AmbiguousTeam,
    UnknownTeam,
    MissingScore,
    NonNumericScore,
    ImplausibleScore,
    InvalidMatch,
    /// Canonical match left out because the category is driven by its calendar.
    IgnoredMatch,
}

/// Input problem that made the engine skip a match. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub pool: Option<String>,
    pub matchday: Option<u32>,
    pub match_id: Option<MatchId>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: String) -> Self {
        Diagnostic {
            kind,
            message,
            pool: None,
            matchday: None,
            match_id: None,
        }
    }

    pub fn in_pool(mut self, pool: Option<&str>) -> Self {
        self.pool = pool.map(String::from);
        self
    }

    pub fn on_matchday(mut self, matchday: u32) -> Self {
        self.matchday = Some(matchday);
        self
    }

    pub fn for_match(mut self, match_id: MatchId) -> Self {
        self.match_id = Some(match_id);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)?;

        if let Some(pool) = &self.pool {
            write!(f, " (pool {})", pool)?;
        }
        if let Some(matchday) = self.matchday {
            write!(f, " (matchday {})", matchday)?;
        }
        if let Some(match_id) = self.match_id {
            write!(f, " (match {})", match_id)?;
        }

        Ok(())
    }
}
