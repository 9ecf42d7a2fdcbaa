mod date_label;
pub mod html;
pub mod text;
mod view;

pub use date_label::date_label;
pub use view::*;

use chrono::NaiveDate;

use crate::domain::{GuideData, Match, Reference};
use crate::filter::filter_matches;
use crate::navigation::DetailLink;
use crate::session::SessionState;

/// Turns session state into a view model
#[derive(Debug, Clone)]
pub struct Renderer {
    detail_base: String,
}

impl Renderer {
    pub fn new(detail_base: impl Into<String>) -> Self {
        Self {
            detail_base: detail_base.into(),
        }
    }

    pub fn detail_base(&self) -> &str {
        &self.detail_base
    }

    /// Filter, sort and resolve. Pure: the same inputs give the same view.
    pub fn render(&self, data: &GuideData, state: &SessionState, today: NaiveDate) -> ViewModel {
        let visible = filter_matches(data, state);
        let content = if visible.is_empty() {
            ViewContent::Empty {
                message: EMPTY_MESSAGE.to_string(),
            }
        } else {
            ViewContent::Cards {
                cards: self.cards(data, visible),
            }
        };

        ViewModel {
            date_label: date_label(state.selected_date, today),
            mode: state.mode.clone(),
            content,
        }
    }

    /// Cards in ascending kickoff order; ties keep their input order
    pub fn cards(&self, data: &GuideData, mut matches: Vec<&Match>) -> Vec<MatchCard> {
        matches.sort_by_key(|game| game.kickoff);
        matches.into_iter().map(|game| self.card(data, game)).collect()
    }

    fn card(&self, data: &GuideData, game: &Match) -> MatchCard {
        MatchCard {
            id: game.id.clone(),
            time: game.kickoff.format("%H:%M").to_string(),
            tournament: tournament_view(data, game),
            live: game.live,
            home: team_view(data, &game.home),
            away: team_view(data, &game.away),
            score: match game.score_pair() {
                Some((home, away)) => ScoreView::Score { home, away },
                None => ScoreView::Versus,
            },
            broadcasts: game
                .broadcasts
                .iter()
                .map(|broadcast| BroadcastBadge {
                    name: broadcast.name.clone(),
                    logo: broadcast.logo().map(str::to_string),
                })
                .collect(),
            detail_url: DetailLink::for_match(game).to_url(&self.detail_base),
        }
    }
}

fn team_view(data: &GuideData, reference: &Reference) -> TeamView {
    match data.team(reference) {
        Some(team) => TeamView {
            reference: reference.clone(),
            name: team.name.clone(),
            logo: team.logo().map(str::to_string),
        },
        None => TeamView {
            reference: reference.clone(),
            name: reference.to_string(),
            logo: None,
        },
    }
}

fn tournament_view(data: &GuideData, game: &Match) -> TournamentView {
    let name = data
        .tournament(&game.tournament)
        .map(|tournament| tournament.display_name().to_string())
        .unwrap_or_else(|| game.tournament.to_string());

    TournamentView {
        reference: game.tournament.clone(),
        name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TeamChoice;
    use crate::testing::{jan, sample_data};

    fn renderer() -> Renderer {
        Renderer::new("/jogo")
    }

    #[test]
    fn test_cards_sorted_by_kickoff() {
        let data = sample_data();
        let view = renderer().render(&data, &SessionState::new(jan(16)), jan(16));

        let times: Vec<&str> = view.cards().iter().map(|c| c.time.as_str()).collect();
        assert_eq!(times, vec!["11:00", "16:00", "18:30"]);
        assert_eq!(view.date_label, "Hoje, 16 de jan.");
    }

    #[test]
    fn test_render_is_idempotent() {
        let data = sample_data();
        let mut state = SessionState::new(jan(16));
        state.select_team(TeamChoice::parse("flamengo"));

        let first = renderer().render(&data, &state, jan(16));
        let second = renderer().render(&data, &state, jan(16));

        assert_eq!(first, second);
        let ids: Vec<&str> = first.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "5"]);
    }

    #[test]
    fn test_score_or_versus() {
        let data = sample_data();
        let view = renderer().render(&data, &SessionState::new(jan(16)), jan(16));

        let flamengo = view.cards().iter().find(|c| c.id.as_str() == "1").unwrap();
        let palmeiras = view.cards().iter().find(|c| c.id.as_str() == "2").unwrap();

        assert_eq!(flamengo.score, ScoreView::Score { home: 2, away: 1 });
        assert_eq!(flamengo.score.label(), "2 x 1");
        assert_eq!(palmeiras.score, ScoreView::Versus);
    }

    #[test]
    fn test_half_score_renders_versus() {
        let data = sample_data();
        let view = renderer().render(&data, &SessionState::new(jan(17)), jan(16));

        assert_eq!(view.cards()[0].score, ScoreView::Versus);
    }

    #[test]
    fn test_unresolved_references_fall_back_to_raw_text() {
        let data = sample_data();
        let view = renderer().render(&data, &SessionState::new(jan(16)), jan(16));
        let card = view.cards().iter().find(|c| c.id.as_str() == "3").unwrap();

        assert_eq!(card.home.name, "São Paulo");
        assert!(card.home.logo.is_some());
        assert_eq!(card.away.name, "santos");
        assert_eq!(card.away.logo, None);
        assert_eq!(card.tournament.name, "Paulistão");
    }

    #[test]
    fn test_unresolved_tournament_and_short_names() {
        let data = sample_data();
        let mut state = SessionState::new(jan(16));
        state.select_team(TeamChoice::parse("flamengo"));
        let view = renderer().render(&data, &state, jan(16));

        assert_eq!(view.cards()[0].tournament.name, "Carioca");
        assert_eq!(view.cards()[1].tournament.name, "brasileirao");
    }

    #[test]
    fn test_card_details() {
        let data = sample_data();
        let view = renderer().render(&data, &SessionState::new(jan(16)), jan(16));
        let card = view.cards().iter().find(|c| c.id.as_str() == "1").unwrap();

        assert!(card.live);
        assert_eq!(card.home.name, "Flamengo");
        assert_eq!(card.away.name, "Vasco");
        assert_eq!(card.away.logo, None);
        assert_eq!(card.broadcasts.len(), 2);
        assert_eq!(card.broadcasts[1].logo, None);
        assert_eq!(card.detail_url, "/jogo?t=carioca&m=flamengo-vs-vasco&d=16-01-2026");
    }

    #[test]
    fn test_empty_state() {
        let data = sample_data();
        let view = renderer().render(&data, &SessionState::new(jan(20)), jan(16));

        assert_eq!(
            view.content,
            ViewContent::Empty { message: EMPTY_MESSAGE.to_string() }
        );
        assert!(view.cards().is_empty());
    }
}
