use crate::r#match::MAX_SCORE;
use serde::{Deserialize, Serialize};

/// Score as typed into the bulk calendar: a number, or free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalendarScore {
    Number(i64),
    Text(String),
}

impl CalendarScore {
    /// Non-negative integer value up to [`MAX_SCORE`], `None` for anything else.
    pub fn value(&self) -> Option<u32> {
        self.parsed()
            .filter(|v| *v <= u64::from(MAX_SCORE))
            .and_then(|v| u32::try_from(v).ok())
    }

    /// A whole number, but too large to be a real score.
    pub fn is_out_of_range(&self) -> bool {
        self.parsed().is_some_and(|v| v > u64::from(MAX_SCORE))
    }

    fn parsed(&self) -> Option<u64> {
        match self {
            CalendarScore::Number(n) => u64::try_from(*n).ok(),
            CalendarScore::Text(text) => text.trim().parse::<u64>().ok(),
        }
    }
}

impl From<u32> for CalendarScore {
    fn from(value: u32) -> Self {
        CalendarScore::Number(i64::from(value))
    }
}
