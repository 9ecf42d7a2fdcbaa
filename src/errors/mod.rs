use std::path::PathBuf;

use thiserror::Error;

use crate::domain::DocumentKind;

/// Why the three data documents could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to fetch {document} from: {url}")]
    Request {
        document: DocumentKind,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Fetching {document} from {url} returned status: {status}")]
    Status {
        document: DocumentKind,
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read {document} from: {}", .path.display())]
    Io {
        document: DocumentKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {document}")]
    Parse {
        document: DocumentKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("Match {match_id} has an unreadable timestamp: {value}")]
    Timestamp { match_id: String, value: String },
}

impl LoadError {
    /// Document the failure concerns
    pub fn document(&self) -> DocumentKind {
        match self {
            LoadError::Request { document, .. }
            | LoadError::Status { document, .. }
            | LoadError::Io { document, .. }
            | LoadError::Parse { document, .. } => *document,
            LoadError::Timestamp { .. } => DocumentKind::Matches,
        }
    }
}

/// Add context to load errors
pub fn load_context(source: &str) -> String {
    format!("Failed to load match data from: {}", source)
}

/// Add context to output errors
pub fn output_context(target: &str) -> String {
    format!("Failed to write output to: {}", target)
}
