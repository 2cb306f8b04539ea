use crate::r#match::{Forfeit, Match};

/// Score the historical data used to mark a forfeit instead of a flag.
pub const LEGACY_FORFEIT_SCORE: u32 = 20;

pub struct LegacyForfeit;

impl LegacyForfeit {
    pub fn infer(home_score: u32, away_score: u32) -> Forfeit {
        match (home_score, away_score) {
            (LEGACY_FORFEIT_SCORE, 0) => Forfeit::Away,
            (0, LEGACY_FORFEIT_SCORE) => Forfeit::Home,
            _ => Forfeit::None,
        }
    }

    /// Writes an explicit forfeit on imported records that only carry the
    /// score pattern. Returns true when the match was changed.
    pub fn normalize(m: &mut Match) -> bool {
        if !m.imported || m.forfeit.is_forfeit() {
            return false;
        }

        let Some((home, away)) = m.final_score() else {
            return false;
        };

        let forfeit = Self::infer(home, away);
        if forfeit.is_forfeit() {
            m.forfeit = forfeit;
            return true;
        }

        false
    }
}
