use std::fmt;

/// Errors that abort a single standings recalculation.
///
/// Input data problems (unknown teams, bad scores, unresolved calendar names)
/// never end up here; they are reported as [`crate::standings::Diagnostic`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StandingsError {
    CategoryNotFound(String),
    PoolRequired { category: String },
    UndeclaredPool { category: String, pool: String },
    PoolNotAllowed { category: String, pool: String },
    MatchNotFound(u32),
    InvalidMatch(MatchValidationError),
    Store(StoreError),
}

impl fmt::Display for StandingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StandingsError::CategoryNotFound(name) => write!(f, "category '{}' not found", name),
            StandingsError::PoolRequired { category } => {
                write!(f, "category '{}' is pool-based and requires a pool", category)
            }
            StandingsError::UndeclaredPool { category, pool } => {
                write!(f, "pool '{}' is not declared for category '{}'", pool, category)
            }
            StandingsError::PoolNotAllowed { category, pool } => {
                write!(f, "category '{}' has no pools, got pool '{}'", category, pool)
            }
            StandingsError::MatchNotFound(id) => write!(f, "match {} not found", id),
            StandingsError::InvalidMatch(err) => write!(f, "invalid match: {}", err),
            StandingsError::Store(err) => write!(f, "store error: {}", err),
        }
    }
}

impl std::error::Error for StandingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StandingsError::InvalidMatch(err) => Some(err),
            StandingsError::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for StandingsError {
    fn from(err: StoreError) -> Self {
        StandingsError::Store(err)
    }
}

impl From<MatchValidationError> for StandingsError {
    fn from(err: MatchValidationError) -> Self {
        StandingsError::InvalidMatch(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Unavailable(String),
    NotFound(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "store unavailable: {}", msg),
            StoreError::NotFound(msg) => write!(f, "not found: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchValidationError {
    SameTeam(u32),
    UnknownTeam(u32),
    CategoryMismatch { team_id: u32, expected: String, actual: String },
    PoolMismatch { team_id: u32, expected: Option<String>, actual: Option<String> },
    ImplausibleScore(u32),
}

impl fmt::Display for MatchValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchValidationError::SameTeam(id) => write!(f, "team {} cannot play itself", id),
            MatchValidationError::UnknownTeam(id) => write!(f, "team {} does not exist", id),
            MatchValidationError::CategoryMismatch { team_id, expected, actual } => write!(
                f,
                "team {} belongs to category '{}', match is in '{}'",
                team_id, actual, expected
            ),
            MatchValidationError::PoolMismatch { team_id, expected, actual } => write!(
                f,
                "team {} is in pool {:?}, match is in pool {:?}",
                team_id, actual, expected
            ),
            MatchValidationError::ImplausibleScore(score) => {
                write!(f, "score {} is above the maximum of {}", score, crate::r#match::MAX_SCORE)
            }
        }
    }
}

impl std::error::Error for MatchValidationError {}
