//! The generated `deals.json` document committed alongside the site.

use bkfresh_core::{Deal, LocalDealsLocation};
use serde::{Deserialize, Deserializer};

use crate::client::SourceClient;
use crate::error::SourceError;

/// Shape of `deals.json`. Unknown top-level keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalDealsDocument {
    /// A `null` list reads as empty.
    #[serde(default, deserialize_with = "null_as_empty_list")]
    pub deals: Vec<Deal>,
    /// Freshness label written by the generator, e.g. `"Feb 16, 2026"`.
    #[serde(default)]
    pub week_of: Option<String>,
}

fn null_as_empty_list<'de, D>(deserializer: D) -> Result<Vec<Deal>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Deal>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Read and decode the local deals document from a URL or a file.
///
/// # Errors
///
/// - [`SourceError::UnexpectedStatus`] / [`SourceError::Http`] for URL locations.
/// - [`SourceError::Io`] when the file cannot be read.
/// - [`SourceError::Deserialize`] when the body is not the expected JSON.
/// - [`SourceError::Empty`] when the `deals` list is missing or empty.
pub async fn fetch_local_deals(
    client: &SourceClient,
    location: &LocalDealsLocation,
) -> Result<LocalDealsDocument, SourceError> {
    let body = match location {
        LocalDealsLocation::Url(url) => client.fetch_text(url, "application/json").await?,
        LocalDealsLocation::Path(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| SourceError::Io {
                    path: path.display().to_string(),
                    source: e,
                })?
        }
    };

    let mut document: LocalDealsDocument =
        serde_json::from_str(&body).map_err(|e| SourceError::Deserialize {
            context: format!("local deals document {location}"),
            source: e,
        })?;

    if document.deals.is_empty() {
        return Err(SourceError::Empty {
            context: format!("local deals document {location}"),
        });
    }

    document.week_of = document.week_of.filter(|w| !w.trim().is_empty());
    Ok(document)
}
