use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Upcoming,
    Live,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

/// Which side, if any, forfeited the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Forfeit {
    #[default]
    None,
    Home,
    Away,
}

impl Forfeit {
    pub fn forfeiting_side(self) -> Option<Side> {
        match self {
            Forfeit::None => None,
            Forfeit::Home => Some(Side::Home),
            Forfeit::Away => Some(Side::Away),
        }
    }

    pub fn is_forfeit(self) -> bool {
        self != Forfeit::None
    }
}
