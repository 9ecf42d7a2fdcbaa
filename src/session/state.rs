use chrono::NaiveDate;

use crate::domain::Reference;
use crate::filter::{FilterMode, TeamChoice, TournamentChoice};

/// Everything the user has picked so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Kept in both modes so the date label and day buttons keep working
    pub selected_date: NaiveDate,
    pub mode: FilterMode,
    pub tournament: Option<Reference>,
    pub search: String,
}

impl SessionState {
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            selected_date,
            mode: FilterMode::ByDay,
            tournament: None,
            search: String::new(),
        }
    }

    pub fn select_team(&mut self, choice: TeamChoice) {
        self.mode = match choice {
            TeamChoice::All => FilterMode::ByDay,
            TeamChoice::Team(team) => FilterMode::ByTeam(team),
        };
    }

    pub fn select_tournament(&mut self, choice: TournamentChoice) {
        self.tournament = match choice {
            TournamentChoice::All => None,
            TournamentChoice::Tournament(tournament) => Some(tournament),
        };
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn previous_day(&mut self) {
        if let Some(date) = self.selected_date.pred_opt() {
            self.selected_date = date;
        }
    }

    pub fn next_day(&mut self) {
        if let Some(date) = self.selected_date.succ_opt() {
            self.selected_date = date;
        }
    }
}
