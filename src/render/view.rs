use serde::Serialize;

use crate::domain::Reference;
use crate::filter::FilterMode;

pub const EMPTY_MESSAGE: &str = "Nenhum jogo encontrado para os filtros selecionados.";
pub const FAILURE_MESSAGE: &str = "Não foi possível carregar os jogos. Tente novamente mais tarde.";

/// Everything a UI layer needs to draw the page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub date_label: String,
    pub mode: FilterMode,
    pub content: ViewContent,
}

impl ViewModel {
    pub fn loading(date_label: String, mode: FilterMode) -> Self {
        Self { date_label, mode, content: ViewContent::Loading }
    }

    /// Error view; replaces both the empty and the loading state
    pub fn failed(date_label: String, mode: FilterMode) -> Self {
        Self {
            date_label,
            mode,
            content: ViewContent::Failed {
                message: FAILURE_MESSAGE.to_string(),
            },
        }
    }

    pub fn cards(&self) -> &[MatchCard] {
        match &self.content {
            ViewContent::Cards { cards } => cards,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ViewContent {
    Loading,
    Cards { cards: Vec<MatchCard> },
    Empty { message: String },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCard {
    pub id: Reference,
    /// `HH:MM`
    pub time: String,
    pub tournament: TournamentView,
    pub live: bool,
    pub home: TeamView,
    pub away: TeamView,
    pub score: ScoreView,
    pub broadcasts: Vec<BroadcastBadge>,
    pub detail_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamView {
    pub reference: Reference,
    pub name: String,
    /// Absent when the team has no logo or the reference did not resolve
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentView {
    pub reference: Reference,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ScoreView {
    Score { home: i32, away: i32 },
    Versus,
}

impl ScoreView {
    pub fn label(&self) -> String {
        match self {
            ScoreView::Score { home, away } => format!("{} x {}", home, away),
            ScoreView::Versus => "VS".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastBadge {
    pub name: String,
    pub logo: Option<String>,
}
