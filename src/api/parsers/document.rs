use serde::de::DeserializeOwned;

use crate::domain::DocumentKind;
use crate::errors::LoadError;

/// Parse one of the three data documents from its JSON body
pub fn parse_document<T: DeserializeOwned>(document: DocumentKind, body: &str) -> Result<T, LoadError> {
    serde_json::from_str(body).map_err(|source| LoadError::Parse { document, source })
}
