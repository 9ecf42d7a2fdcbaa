use anyhow::Result;
use chrono::FixedOffset;
use log::{info, warn};
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::PathBuf;

use crate::api::parsers;
use crate::config::SourceSettings;
use crate::domain::{DocumentKind, GuideData, MatchesDocument, TeamsDocument, TournamentsDocument};
use crate::errors::LoadError;
use crate::http::JsonClient;

/// Where the three data documents are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Http { base_url: String },
    Directory { path: PathBuf },
}

impl DataSource {
    /// `http://` and `https://` locations are fetched, anything else is a directory
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            DataSource::Http {
                base_url: location.trim_end_matches('/').to_string(),
            }
        } else {
            DataSource::Directory {
                path: PathBuf::from(location),
            }
        }
    }

    fn document_url(base_url: &str, document: DocumentKind) -> String {
        format!("{}/{}", base_url, document.file_name())
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Http { base_url } => f.write_str(base_url),
            DataSource::Directory { path } => write!(f, "{}", path.display()),
        }
    }
}

/// Loads matches, teams and tournaments in one go
pub struct DataClient {
    source: DataSource,
    http: JsonClient,
    offset: FixedOffset,
}

impl DataClient {
    pub fn new(source: DataSource, settings: &SourceSettings, offset: FixedOffset) -> Result<Self> {
        let http = JsonClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self { source, http, offset })
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Fetch the three documents concurrently. The first failure aborts the load.
    pub async fn load(&self) -> Result<GuideData, LoadError> {
        info!("Loading match data from {}", self.source);

        let (matches, teams, tournaments) = tokio::try_join!(
            self.fetch_document::<MatchesDocument>(DocumentKind::Matches),
            self.fetch_document::<TeamsDocument>(DocumentKind::Teams),
            self.fetch_document::<TournamentsDocument>(DocumentKind::Tournaments),
        )?;

        let data = GuideData::from_documents(matches, teams, tournaments, &self.offset)?;
        info!(
            "Loaded {} matches, {} teams, {} tournaments",
            data.matches.len(),
            data.teams.len(),
            data.tournaments.len()
        );
        Ok(data)
    }

    async fn fetch_document<T: DeserializeOwned>(&self, document: DocumentKind) -> Result<T, LoadError> {
        let body = self.fetch_raw(document).await?;
        parsers::parse_document(document, &body)
    }

    async fn fetch_raw(&self, document: DocumentKind) -> Result<String, LoadError> {
        match &self.source {
            DataSource::Http { base_url } => self.fetch_url(base_url, document).await,
            DataSource::Directory { path } => Self::read_file(path.join(document.file_name()), document).await,
        }
    }

    async fn fetch_url(&self, base_url: &str, document: DocumentKind) -> Result<String, LoadError> {
        let url = DataSource::document_url(base_url, document);

        let response = self.http.get(&url).await.map_err(|source| LoadError::Request {
            document,
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Fetching {} returned {}", url, status);
            return Err(LoadError::Status { document, url, status });
        }

        response
            .text()
            .await
            .map_err(|source| LoadError::Request { document, url, source })
    }

    async fn read_file(path: PathBuf, document: DocumentKind) -> Result<String, LoadError> {
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| LoadError::Io { document, path, source })
    }
}
