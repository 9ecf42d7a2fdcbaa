use serde::Serialize;

use crate::domain::Reference;

/// The two mutually exclusive ways of narrowing the list.
///
/// By day keeps the selected calendar day only. By team shows that team's
/// matches on every day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", content = "team", rename_all = "camelCase")]
pub enum FilterMode {
    #[default]
    ByDay,
    ByTeam(Reference),
}

impl FilterMode {
    pub fn team(&self) -> Option<&Reference> {
        match self {
            FilterMode::ByDay => None,
            FilterMode::ByTeam(team) => Some(team),
        }
    }
}

/// Value picked from the team chips
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamChoice {
    All,
    Team(Reference),
}

impl TeamChoice {
    pub fn parse(raw: &str) -> Self {
        match parse_choice(raw) {
            Some(reference) => TeamChoice::Team(reference),
            None => TeamChoice::All,
        }
    }
}

/// Value picked from the tournament select
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TournamentChoice {
    All,
    Tournament(Reference),
}

impl TournamentChoice {
    pub fn parse(raw: &str) -> Self {
        match parse_choice(raw) {
            Some(reference) => TournamentChoice::Tournament(reference),
            None => TournamentChoice::All,
        }
    }
}

/// `todos`, `all` and blank mean "no filter"
fn parse_choice(raw: &str) -> Option<Reference> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("todos") || raw.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(Reference::from(raw))
    }
}
