use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::api::{DataClient, DataSource};
use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::domain::{GuideData, Reference};
use crate::errors::{self, LoadError};
use crate::filter::{TeamChoice, TournamentChoice};
use crate::render::{date_label, html, text, Renderer, ViewModel};
use crate::session::{Session, SessionState, UiEvent};

/// What `render` was asked to show
#[derive(Debug, Clone, Default)]
pub struct RenderRequest {
    pub date: Option<NaiveDate>,
    pub team: Option<String>,
    pub tournament: Option<String>,
    pub search: Option<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub struct GuideService {
    config: AppConfig,
    client: DataClient,
}

impl GuideService {
    pub fn new(config: AppConfig, source: Option<&str>) -> Result<Self> {
        let location = source.unwrap_or(&config.source.location);
        let source = DataSource::parse(location);
        let client = DataClient::new(source, &config.source, config.display.offset())?;
        Ok(Self { config, client })
    }

    /// Today in the display offset
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.config.display.offset()).date_naive()
    }

    pub async fn load(&self) -> Result<Arc<GuideData>, LoadError> {
        self.client.load().await.map(Arc::new)
    }

    /// Load the data and replay the request as UI events
    pub async fn open_session(&self, request: &RenderRequest) -> Result<Session, LoadError> {
        let today = self.today();
        let data = self.load().await?;
        let state = SessionState::new(request.date.unwrap_or(today));
        let mut session = Session::new(data, state, self.renderer(), today);

        for event in Self::events_for(request) {
            session.dispatch(event);
        }
        Ok(session)
    }

    pub async fn run_render(&self, request: RenderRequest) -> Result<()> {
        info!("=== Rendering matches ===");

        let view = match self.open_session(&request).await {
            Ok(session) => session.view(),
            Err(e) => {
                error!("Load failed: {}", e);
                let view = self.failed_view(&request);
                self.write_view(&view, request.format, request.output.as_deref())?;
                return Err(e).with_context(|| errors::load_context(&self.client.source().to_string()));
            }
        };

        info!("  → {} cards for {}", view.cards().len(), view.date_label);
        self.write_view(&view, request.format, request.output.as_deref())
    }

    pub async fn run_link(&self, match_id: &str) -> Result<()> {
        let request = RenderRequest::default();
        let session = self
            .open_session(&request)
            .await
            .with_context(|| errors::load_context(&self.client.source().to_string()))?;

        let url = session
            .detail_url(&Reference::from(match_id))
            .with_context(|| format!("No match with id {}", match_id))?;

        println!("{}", url);
        Ok(())
    }

    // --- Helper Methods ---

    fn renderer(&self) -> Renderer {
        Renderer::new(self.config.display.detail_base.clone())
    }

    fn events_for(request: &RenderRequest) -> Vec<UiEvent> {
        let mut events = Vec::new();
        if let Some(team) = &request.team {
            events.push(UiEvent::TeamSelected(TeamChoice::parse(team)));
        }
        if let Some(tournament) = &request.tournament {
            events.push(UiEvent::TournamentSelected(TournamentChoice::parse(tournament)));
        }
        if let Some(search) = &request.search {
            events.push(UiEvent::SearchChanged(search.clone()));
        }
        events
    }

    fn failed_view(&self, request: &RenderRequest) -> ViewModel {
        let today = self.today();
        let mut state = SessionState::new(request.date.unwrap_or(today));
        if let Some(team) = &request.team {
            state.select_team(TeamChoice::parse(team));
        }
        ViewModel::failed(date_label(state.selected_date, today), state.mode)
    }

    fn write_view(&self, view: &ViewModel, format: OutputFormat, output: Option<&Path>) -> Result<()> {
        let rendered = match format {
            OutputFormat::Html => html::to_html(view),
            OutputFormat::Json => serde_json::to_string_pretty(view).context("Failed to serialize view")?,
            OutputFormat::Text => text::to_text(view),
        };

        match output {
            Some(path) => {
                std::fs::write(path, rendered)
                    .with_context(|| errors::output_context(&path.display().to_string()))?;
                info!("Wrote view to {}", path.display());
            }
            None => println!("{}", rendered),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_becomes_events() {
        let request = RenderRequest {
            team: Some("flamengo".to_string()),
            search: Some("sportv".to_string()),
            ..RenderRequest::default()
        };

        assert_eq!(
            GuideService::events_for(&request),
            vec![
                UiEvent::TeamSelected(TeamChoice::Team("flamengo".into())),
                UiEvent::SearchChanged("sportv".to_string()),
            ]
        );
    }

    #[test]
    fn test_failed_view_keeps_mode() {
        let service = GuideService::new(AppConfig::default(), Some("does-not-exist")).unwrap();
        let request = RenderRequest {
            team: Some("vasco".to_string()),
            ..RenderRequest::default()
        };

        let view = service.failed_view(&request);

        assert_eq!(view.mode, crate::filter::FilterMode::ByTeam("vasco".into()));
        assert!(view.cards().is_empty());
    }
}
