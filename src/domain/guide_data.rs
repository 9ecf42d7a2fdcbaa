use chrono::FixedOffset;
use log::debug;

use super::catalog::Catalog;
use super::models::{
    Match, MatchesDocument, Reference, Team, TeamsDocument, Tournament, TournamentsDocument,
};
use crate::errors::LoadError;

/// Everything loaded at startup. Immutable for the rest of the session.
#[derive(Debug, Clone, Default)]
pub struct GuideData {
    pub matches: Vec<Match>,
    pub teams: Catalog<Team>,
    pub tournaments: Catalog<Tournament>,
}

impl GuideData {
    pub fn new(matches: Vec<Match>, teams: Vec<Team>, tournaments: Vec<Tournament>) -> Self {
        Self {
            matches,
            teams: Catalog::new(teams),
            tournaments: Catalog::new(tournaments),
        }
    }

    /// Build from the three parsed documents, converting kickoffs to `offset`
    pub fn from_documents(
        matches: MatchesDocument,
        teams: TeamsDocument,
        tournaments: TournamentsDocument,
        offset: &FixedOffset,
    ) -> Result<Self, LoadError> {
        let matches = matches.into_matches(offset)?;
        debug!(
            "Indexed {} matches, {} teams, {} tournaments",
            matches.len(),
            teams.teams.len(),
            tournaments.tournaments.len()
        );
        Ok(Self::new(matches, teams.teams, tournaments.tournaments))
    }

    pub fn team(&self, reference: &Reference) -> Option<&Team> {
        self.teams.get(reference)
    }

    pub fn tournament(&self, reference: &Reference) -> Option<&Tournament> {
        self.tournaments.get(reference)
    }

    /// Display name of a team, or the raw reference when it does not resolve
    pub fn team_name<'a>(&'a self, reference: &'a Reference) -> &'a str {
        self.team(reference)
            .map(|team| team.name.as_str())
            .unwrap_or(reference.as_str())
    }

    /// Full tournament name, or the raw reference when it does not resolve
    pub fn tournament_name<'a>(&'a self, reference: &'a Reference) -> &'a str {
        self.tournament(reference)
            .map(|tournament| tournament.name.as_str())
            .unwrap_or(reference.as_str())
    }

    pub fn find_match(&self, id: &Reference) -> Option<&Match> {
        self.matches.iter().find(|game| &game.id == id)
    }
}
