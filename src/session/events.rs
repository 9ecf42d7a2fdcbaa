use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use super::state::SessionState;
use crate::domain::{GuideData, Reference};
use crate::filter::{TeamChoice, TournamentChoice};
use crate::navigation::DetailLink;
use crate::render::{Renderer, ViewModel};

/// Input from the page controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SearchChanged(String),
    PreviousDay,
    NextDay,
    TeamSelected(TeamChoice),
    TournamentSelected(TournamentChoice),
    CardClicked(Reference),
}

/// What the host should do after an event
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Render(ViewModel),
    Navigate(String),
    /// Click on a card whose match is not loaded
    Ignored,
}

/// Loaded data plus the user's choices
pub struct Session {
    data: Arc<GuideData>,
    state: SessionState,
    renderer: Renderer,
    today: NaiveDate,
}

impl Session {
    pub fn new(data: Arc<GuideData>, state: SessionState, renderer: Renderer, today: NaiveDate) -> Self {
        Self { data, state, renderer, today }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn view(&self) -> ViewModel {
        self.renderer.render(&self.data, &self.state, self.today)
    }

    pub fn dispatch(&mut self, event: UiEvent) -> Outcome {
        debug!("Handling {:?}", event);

        match event {
            UiEvent::SearchChanged(text) => self.state.set_search(text),
            UiEvent::PreviousDay => self.state.previous_day(),
            UiEvent::NextDay => self.state.next_day(),
            UiEvent::TeamSelected(choice) => self.state.select_team(choice),
            UiEvent::TournamentSelected(choice) => self.state.select_tournament(choice),
            UiEvent::CardClicked(id) => return self.navigate(&id),
        }

        Outcome::Render(self.view())
    }

    pub fn detail_url(&self, id: &Reference) -> Option<String> {
        self.data
            .find_match(id)
            .map(|game| DetailLink::for_match(game).to_url(self.renderer.detail_base()))
    }

    fn navigate(&self, id: &Reference) -> Outcome {
        match self.detail_url(id) {
            Some(url) => Outcome::Navigate(url),
            None => Outcome::Ignored,
        }
    }
}
