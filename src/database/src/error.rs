use std::fmt;

#[derive(Debug)]
pub enum DatabaseError {
    Io(std::io::Error),
    Json(serde_json::Error),
    MissingSeed(String),
    Duplicate(String),
}

impl fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseError::Io(err) => write!(f, "IO error: {}", err),
            DatabaseError::Json(err) => write!(f, "JSON error: {}", err),
            DatabaseError::MissingSeed(name) => write!(f, "seed file {} is missing", name),
            DatabaseError::Duplicate(what) => write!(f, "duplicate {}", what),
        }
    }
}

impl std::error::Error for DatabaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatabaseError::Io(err) => Some(err),
            DatabaseError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DatabaseError {
    fn from(err: std::io::Error) -> Self {
        DatabaseError::Io(err)
    }
}

impl From<serde_json::Error> for DatabaseError {
    fn from(err: serde_json::Error) -> Self {
        DatabaseError::Json(err)
    }
}
