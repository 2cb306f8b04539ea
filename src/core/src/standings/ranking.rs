use crate::standings::StandingsEntry;
use itertools::Itertools;

pub struct StandingsRanking;

impl StandingsRanking {
    /// Orders by points, point difference, then points scored, all descending,
    /// and numbers the rows 1..N. Rows equal on all three keep their input
    /// order and still get distinct positions.
    pub fn rank(entries: Vec<StandingsEntry>) -> Vec<StandingsEntry> {
        entries
            .into_iter()
            .sorted_by(|a, b| b.rank_key().cmp(&a.rank_key()))
            .enumerate()
            .map(|(idx, mut entry)| {
                entry.position = idx as u32 + 1;
                entry
            })
            .collect()
    }
}
