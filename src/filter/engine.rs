use crate::domain::{GuideData, Match, Reference};
use crate::session::SessionState;

use super::mode::FilterMode;
use super::normalize::normalize;

/// Normalized free-text search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// `None` when there is nothing to search for
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        Some(Self { needle: normalize(raw) })
    }

    /// Match team names, tournament names or channel names against the term
    pub fn matches(&self, data: &GuideData, game: &Match) -> bool {
        let contains = |text: &str| normalize(text).contains(&self.needle);
        let short_name = data
            .tournament(&game.tournament)
            .and_then(|tournament| tournament.short_name.as_deref());

        contains(data.team_name(&game.home))
            || contains(data.team_name(&game.away))
            || contains(data.tournament_name(&game.tournament))
            || short_name.is_some_and(|name| contains(name))
            || game.broadcasts.iter().any(|broadcast| contains(&broadcast.name))
    }
}

/// Visible subset of the loaded matches, in source order
pub fn filter_matches<'a>(data: &'a GuideData, state: &SessionState) -> Vec<&'a Match> {
    let team_refs = state.mode.team().map(|team| team_aliases(data, team));
    let tournament_refs = state
        .tournament
        .as_ref()
        .map(|tournament| tournament_aliases(data, tournament));
    let query = SearchQuery::parse(&state.search);

    data.matches
        .iter()
        .filter(|game| match state.mode {
            FilterMode::ByDay => game.date() == state.selected_date,
            FilterMode::ByTeam(_) => true,
        })
        .filter(|game| {
            tournament_refs
                .as_ref()
                .is_none_or(|refs| refs.contains(&&game.tournament))
        })
        .filter(|game| {
            team_refs
                .as_ref()
                .is_none_or(|refs| refs.contains(&&game.home) || refs.contains(&&game.away))
        })
        .filter(|game| query.as_ref().is_none_or(|q| q.matches(data, game)))
        .collect()
}

/// The chosen reference plus the id and slug of the team it resolves to
fn team_aliases<'a>(data: &'a GuideData, team: &'a Reference) -> Vec<&'a Reference> {
    let mut refs = vec![team];
    if let Some(resolved) = data.team(team) {
        refs.push(&resolved.id);
        refs.push(resolved.slug());
    }
    refs
}

/// The chosen reference plus the id and slug of the tournament it resolves to
fn tournament_aliases<'a>(data: &'a GuideData, tournament: &'a Reference) -> Vec<&'a Reference> {
    let mut refs = vec![tournament];
    if let Some(resolved) = data.tournament(tournament) {
        refs.push(&resolved.id);
        refs.push(resolved.slug());
    }
    refs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MatchesDocument, TeamsDocument, TournamentsDocument};
    use crate::filter::{TeamChoice, TournamentChoice};
    use crate::testing::{brasilia, jan, sample_data};
    use serde_json::json;

    fn ids(matches: &[&Match]) -> Vec<String> {
        let mut ids: Vec<String> = matches.iter().map(|m| m.id.to_string()).collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_default_filters_keep_selected_day() {
        let data = sample_data();
        let state = SessionState::new(jan(16));

        let visible = filter_matches(&data, &state);

        assert_eq!(ids(&visible), vec!["1", "2", "3"]);
        assert!(visible.iter().all(|m| m.date() == jan(16)));
    }

    #[test]
    fn test_day_without_matches_is_empty() {
        let data = sample_data();
        let state = SessionState::new(jan(20));

        assert!(filter_matches(&data, &state).is_empty());
    }

    #[test]
    fn test_team_filter_ignores_date() {
        let data = sample_data();
        let mut state = SessionState::new(jan(1));
        state.select_team(TeamChoice::parse("flamengo"));

        assert_eq!(ids(&filter_matches(&data, &state)), vec!["1", "5"]);
    }

    #[test]
    fn test_team_filter_matches_id_or_slug() {
        let data = sample_data();
        let mut state = SessionState::new(jan(16));

        // Match 3 references São Paulo by slug, match 4 by numeric id
        state.select_team(TeamChoice::parse("sao-paulo"));
        let by_slug = ids(&filter_matches(&data, &state));

        state.select_team(TeamChoice::parse("7"));
        let by_id = ids(&filter_matches(&data, &state));

        assert_eq!(by_slug, vec!["3", "4"]);
        assert_eq!(by_slug, by_id);
    }

    #[test]
    fn test_unknown_team_only_matches_raw_reference() {
        let data = sample_data();
        let mut state = SessionState::new(jan(16));
        state.select_team(TeamChoice::parse("santos"));

        assert_eq!(ids(&filter_matches(&data, &state)), vec!["3"]);
    }

    #[test]
    fn test_tournament_filter_compares_reference() {
        let data = sample_data();
        let mut state = SessionState::new(jan(16));
        state.select_tournament(TournamentChoice::parse("carioca"));

        assert_eq!(ids(&filter_matches(&data, &state)), vec!["1"]);
    }

    #[test]
    fn test_tournament_filter_matches_id_or_slug() {
        let data = sample_data();
        let mut state = SessionState::new(jan(16));

        // Match 2 references Paulistão by slug, match 3 by id
        state.select_tournament(TournamentChoice::parse("paulistao"));
        let by_slug = ids(&filter_matches(&data, &state));

        state.select_tournament(TournamentChoice::parse("paulista"));
        let by_id = ids(&filter_matches(&data, &state));

        assert_eq!(by_slug, vec!["2", "3"]);
        assert_eq!(by_slug, by_id);
    }

    #[test]
    fn test_unknown_tournament_only_matches_raw_reference() {
        let data = sample_data();
        let mut state = SessionState::new(jan(18));
        state.select_tournament(TournamentChoice::parse("brasileirao"));

        assert_eq!(ids(&filter_matches(&data, &state)), vec!["5"]);
    }

    #[test]
    fn test_search_finds_tournament_short_name() {
        let matches: MatchesDocument = serde_json::from_value(json!({
            "matches": [{
                "id": 1, "home": "flamengo", "away": "palmeiras",
                "tournament": "serie-a", "date": "2026-01-18T19:00"
            }]
        }))
        .unwrap();
        let tournaments: TournamentsDocument = serde_json::from_value(json!({
            "tournaments": [{
                "id": "serie-a",
                "name": "Campeonato Brasileiro Série A",
                "shortName": "Brasileirão"
            }]
        }))
        .unwrap();
        let teams = TeamsDocument { teams: vec![] };
        let data = GuideData::from_documents(matches, teams, tournaments, &brasilia()).unwrap();
        let mut state = SessionState::new(jan(18));

        state.set_search("brasileirao");
        assert_eq!(ids(&filter_matches(&data, &state)), vec!["1"]);

        state.set_search("serie a");
        assert_eq!(ids(&filter_matches(&data, &state)), vec!["1"]);
    }

    #[test]
    fn test_search_is_case_and_accent_insensitive() {
        let data = sample_data();
        let mut state = SessionState::new(jan(16));

        let results: Vec<Vec<String>> = ["flamengo", "FLAMENGO", "flamêngo"]
            .iter()
            .map(|term| {
                state.set_search(*term);
                ids(&filter_matches(&data, &state))
            })
            .collect();

        assert_eq!(results[0], vec!["1"]);
        assert!(results.iter().all(|r| r == &results[0]));
    }

    #[test]
    fn test_search_covers_tournament_and_channels() {
        let data = sample_data();
        let mut state = SessionState::new(jan(16));

        state.set_search("paulistao");
        assert_eq!(ids(&filter_matches(&data, &state)), vec!["2", "3"]);

        state.set_search("cazetv");
        assert_eq!(ids(&filter_matches(&data, &state)), vec!["2"]);

        // Unresolved references are searched through their raw text
        state.set_search("santos");
        assert_eq!(ids(&filter_matches(&data, &state)), vec!["3"]);
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let data = sample_data();
        let mut state = SessionState::new(jan(16));
        state.set_search("   ");

        assert_eq!(filter_matches(&data, &state).len(), 3);
    }

    #[test]
    fn test_filters_combine() {
        let data = sample_data();
        let mut state = SessionState::new(jan(16));
        state.select_team(TeamChoice::parse("flamengo"));
        state.set_search("palmeiras");

        assert_eq!(ids(&filter_matches(&data, &state)), vec!["5"]);
    }
}
