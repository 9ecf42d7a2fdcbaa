use urlencoding::encode;

use crate::domain::Match;

/// Detail page address of a match, built from raw references so it stays
/// stable when display names change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLink {
    /// `t`: tournament reference
    pub tournament: String,
    /// `m`: `home-vs-away`
    pub fixture: String,
    /// `d`: `dd-mm-yyyy`
    pub date: String,
}

impl DetailLink {
    pub fn for_match(game: &Match) -> Self {
        Self {
            tournament: game.tournament.to_string(),
            fixture: format!("{}-vs-{}", game.home, game.away),
            date: game.date().format("%d-%m-%Y").to_string(),
        }
    }

    pub fn to_query(&self) -> String {
        format!(
            "t={}&m={}&d={}",
            encode(&self.tournament),
            encode(&self.fixture),
            encode(&self.date)
        )
    }

    pub fn to_url(&self, base: &str) -> String {
        format!("{}?{}", base, self.to_query())
    }
}
