use crate::r#match::{Forfeit, MatchId, Side};
use crate::standings::{FormItem, FormResult, StandingsEntry, StandingsScope};
use crate::team::{TeamId, TeamRef};
use chrono::NaiveDate;
use itertools::Itertools;
use std::collections::BTreeMap;

/// Competition points per result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsRules {
    pub win: u32,
    pub loss: u32,
    pub draw: u32,
    pub forfeit: u32,
}

/// A played loss still earns a point; a forfeit earns nothing. Draws earn
/// nothing either, as in the calendar-driven recalculation.
pub const POINTS: PointsRules = PointsRules {
    win: 2,
    loss: 1,
    draw: 0,
    forfeit: 0,
};

impl PointsRules {
    pub fn award(&self, result: FormResult) -> u32 {
        match result {
            FormResult::W => self.win,
            FormResult::L => self.loss,
            FormResult::D => self.draw,
            FormResult::F => self.forfeit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Forfeit { forfeiting: Side },
    Decisive { winner: Side },
    Draw,
}

impl Outcome {
    pub fn result_for(self, side: Side) -> FormResult {
        match self {
            Outcome::Forfeit { forfeiting } if forfeiting == side => FormResult::F,
            Outcome::Forfeit { .. } => FormResult::W,
            Outcome::Decisive { winner } if winner == side => FormResult::W,
            Outcome::Decisive { .. } => FormResult::L,
            Outcome::Draw => FormResult::D,
        }
    }
}

/// A completed match with both teams resolved to identities and both scores known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMatch {
    pub match_id: Option<MatchId>,
    pub home: TeamRef,
    pub away: TeamRef,
    pub home_score: u32,
    pub away_score: u32,
    pub forfeit: Forfeit,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
}

impl ResolvedMatch {
    pub fn new(home: TeamRef, away: TeamRef, home_score: u32, away_score: u32) -> Self {
        ResolvedMatch {
            match_id: None,
            home,
            away,
            home_score,
            away_score,
            forfeit: Forfeit::None,
            date: None,
            time: None,
        }
    }

    /// The explicit flag decides forfeits, whatever the score says.
    pub fn outcome(&self) -> Outcome {
        if let Some(forfeiting) = self.forfeit.forfeiting_side() {
            return Outcome::Forfeit { forfeiting };
        }

        match self.home_score.cmp(&self.away_score) {
            std::cmp::Ordering::Greater => Outcome::Decisive { winner: Side::Home },
            std::cmp::Ordering::Less => Outcome::Decisive { winner: Side::Away },
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    fn team(&self, side: Side) -> &TeamRef {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    fn score(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home_score,
            Side::Away => self.away_score,
        }
    }
}

pub struct ResultAggregator;

impl ResultAggregator {
    /// Builds every standings row of `scope` from scratch.
    ///
    /// `members` get a row even without a single processed game. Matches are
    /// applied oldest first so the form list ends up most-recent-first; games
    /// on the same date keep their input order.
    pub fn aggregate(
        matches: &[ResolvedMatch],
        scope: &StandingsScope,
        members: &[TeamRef],
    ) -> BTreeMap<TeamId, StandingsEntry> {
        let mut table: BTreeMap<TeamId, StandingsEntry> = members
            .iter()
            .map(|team| (team.id, StandingsEntry::new(team, scope)))
            .collect();

        let chronological = matches
            .iter()
            .sorted_by(|a, b| (a.date, &a.time).cmp(&(b.date, &b.time)));

        for m in chronological {
            Self::apply(&mut table, m, scope);
        }

        table
    }

    fn apply(table: &mut BTreeMap<TeamId, StandingsEntry>, m: &ResolvedMatch, scope: &StandingsScope) {
        let outcome = m.outcome();

        for side in [Side::Home, Side::Away] {
            let team = m.team(side);
            let opponent = m.team(side.opposite());
            let result = outcome.result_for(side);

            let item = FormItem {
                result,
                opponent: opponent.clone(),
                is_home: side == Side::Home,
                points_for: m.score(side),
                points_against: m.score(side.opposite()),
                date: m.date,
            };

            table
                .entry(team.id)
                .or_insert_with(|| StandingsEntry::new(team, scope))
                .record(item, POINTS.award(result));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standings::FORM_LENGTH;

    fn team(id: TeamId, name: &str) -> TeamRef {
        TeamRef::new(id, name)
    }

    fn played(home: &TeamRef, away: &TeamRef, hs: u32, as_: u32, day: u32) -> ResolvedMatch {
        let mut m = ResolvedMatch::new(home.clone(), away.clone(), hs, as_);
        m.date = NaiveDate::from_ymd_opt(2024, 10, day);
        m
    }

    fn scope() -> StandingsScope {
        StandingsScope::new("X", None)
    }

    #[test]
    fn test_decisive_and_forfeit_example() {
        let (a, b, c, d) = (team(1, "A"), team(2, "B"), team(3, "C"), team(4, "D"));

        let mut forfeit = played(&c, &d, 20, 0, 2);
        forfeit.forfeit = Forfeit::Away;

        let matches = vec![played(&a, &b, 60, 40, 1), forfeit];
        let table = ResultAggregator::aggregate(&matches, &scope(), &[]);

        let a = &table[&1];
        assert_eq!((a.won, a.points, a.point_difference), (1, 2, 20));

        let b = &table[&2];
        assert_eq!((b.lost, b.points, b.point_difference), (1, 1, -20));

        let c = &table[&3];
        assert_eq!((c.won, c.points, c.point_difference, c.forfeits), (1, 2, 20, 0));

        let d = &table[&4];
        assert_eq!((d.lost, d.points, d.point_difference, d.forfeits), (1, 0, -20, 1));
        assert_eq!(d.last5[0].result, FormResult::F);
    }

    #[test]
    fn test_points_are_conserved_per_game() {
        let (a, b) = (team(1, "A"), team(2, "B"));

        let decisive = ResultAggregator::aggregate(&[played(&a, &b, 71, 69, 1)], &scope(), &[]);
        assert_eq!(decisive.values().map(|e| e.points).sum::<u32>(), 3);

        let draw = ResultAggregator::aggregate(&[played(&a, &b, 50, 50, 1)], &scope(), &[]);
        assert_eq!(draw.values().map(|e| e.points).sum::<u32>(), 0);
        assert!(draw.values().all(|e| e.drawn == 1 && e.last5[0].result == FormResult::D));

        let mut forfeit = played(&a, &b, 0, 20, 1);
        forfeit.forfeit = Forfeit::Home;
        let forfeited = ResultAggregator::aggregate(&[forfeit], &scope(), &[]);
        assert_eq!(forfeited.values().map(|e| e.points).sum::<u32>(), 2);
    }

    #[test]
    fn test_forfeit_flag_beats_the_score() {
        let (a, b) = (team(1, "A"), team(2, "B"));

        let mut m = played(&a, &b, 45, 30, 1);
        m.forfeit = Forfeit::Home;

        let table = ResultAggregator::aggregate(&[m], &scope(), &[]);
        assert_eq!(table[&1].forfeits, 1);
        assert_eq!(table[&1].points, 0);
        assert_eq!(table[&2].won, 1);
    }

    #[test]
    fn test_members_without_games_get_empty_rows() {
        let (a, b, idle) = (team(1, "A"), team(2, "B"), team(9, "Idle"));

        let table = ResultAggregator::aggregate(
            &[played(&a, &b, 80, 62, 1)],
            &scope(),
            &[a.clone(), b.clone(), idle.clone()],
        );

        let idle = &table[&9];
        assert_eq!(idle.played, 0);
        assert_eq!(idle.points, 0);
        assert!(idle.last5.is_empty());
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_form_is_truncated_most_recent_first() {
        let (a, b) = (team(1, "A"), team(2, "B"));

        // Given out of order on purpose; day 7 is the latest.
        let matches: Vec<ResolvedMatch> = [3, 1, 7, 2, 6, 4, 5]
            .iter()
            .map(|&day| played(&a, &b, 60 + day, 50, day))
            .collect();

        let table = ResultAggregator::aggregate(&matches, &scope(), &[]);
        let form = &table[&1].last5;

        assert_eq!(form.len(), FORM_LENGTH);
        assert_eq!(form[0].points_for, 67);
        assert_eq!(form[4].points_for, 63);
        assert_eq!(table[&1].played, 7);
    }

    #[test]
    fn test_secondary_counters() {
        let (a, b) = (team(1, "A"), team(2, "B"));

        let mut forfeit = played(&a, &b, 20, 0, 1);
        forfeit.forfeit = Forfeit::Away;

        let table = ResultAggregator::aggregate(&[forfeit], &scope(), &[]);
        assert_eq!(table[&1].clean_sheets, 1);
        assert_eq!(table[&2].failed_to_score, 1);
        assert_eq!(table[&1].failed_to_score, 0);
    }

    #[test]
    fn test_aggregate_is_repeatable() {
        let (a, b, c) = (team(1, "A"), team(2, "B"), team(3, "C"));
        let matches = vec![
            played(&a, &b, 55, 54, 1),
            played(&b, &c, 40, 61, 2),
            played(&c, &a, 70, 70, 3),
        ];

        let first = ResultAggregator::aggregate(&matches, &scope(), &[]);
        let second = ResultAggregator::aggregate(&matches, &scope(), &[]);
        assert_eq!(first, second);
    }
}
