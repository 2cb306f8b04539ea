use crate::r#match::MatchId;

/// Writes that make standings stale. Fired by the match and calendar
/// handlers right after their own write succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeagueEvent {
    MatchCompleted(MatchId),
    CalendarWritten(String),
}
