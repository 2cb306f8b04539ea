pub mod calendar;
pub mod category;
pub mod r#match;
pub mod standings;
pub mod store;
pub mod team;
pub mod utils;

mod error;

pub use error::*;

pub use calendar::{Calendar, CalendarMatch, CalendarPool, CalendarScore, Matchday};
pub use category::Category;
pub use r#match::{Forfeit, LegacyForfeit, Match, MatchId, MatchStatus, MatchValidator, Side};
pub use standings::{
    Diagnostic, DiagnosticKind, FormItem, FormResult, LeagueEvent, Recalculation, StandingsEngine,
    StandingsEntry, StandingsScope, StandingsSource,
};
pub use store::{LeagueSource, LeagueStore, StandingsSink};
pub use team::{Team, TeamCollection, TeamId, TeamRecord, TeamRef};
pub use utils::*;
