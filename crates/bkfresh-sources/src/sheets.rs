//! Deals published from a Google Sheet as a CSV export.

use bkfresh_core::Deal;

use crate::client::SourceClient;
use crate::csv::parse_records;
use crate::error::SourceError;

/// Tab inside the spreadsheet holding the deal rows.
const DEALS_SHEET: &str = "deals";

/// Builds the `gviz` CSV export URL for the sheet's deals tab.
///
/// # Errors
///
/// Returns [`SourceError::InvalidUrl`] if `base_url` is not a usable base.
pub fn sheet_csv_url(base_url: &str, sheet_id: &str) -> Result<String, SourceError> {
    let invalid = |reason: String| SourceError::InvalidUrl {
        url: base_url.to_string(),
        reason,
    };

    let mut url = reqwest::Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| invalid("cannot be a base URL".to_string()))?
        .pop_if_empty()
        .extend(["spreadsheets", "d", sheet_id, "gviz", "tq"]);
    url.query_pairs_mut()
        .append_pair("tqx", "out:csv")
        .append_pair("sheet", DEALS_SHEET);

    Ok(url.to_string())
}

/// Fetch and parse the published deals sheet.
///
/// # Errors
///
/// - [`SourceError::UnexpectedStatus`] / [`SourceError::Http`] from the request.
/// - [`SourceError::Empty`] when the export has no data rows.
pub async fn fetch_sheet_deals(
    client: &SourceClient,
    url: &str,
) -> Result<Vec<Deal>, SourceError> {
    let body = client.fetch_text(url, "text/csv,text/plain;q=0.9,*/*;q=0.8").await?;
    let deals: Vec<Deal> = parse_records(&body)
        .iter()
        .map(|record| Deal::from_fields(|name| record.get_or_empty(name)))
        .collect();

    if deals.is_empty() {
        return Err(SourceError::Empty {
            context: "published deals sheet".to_string(),
        });
    }

    tracing::debug!(url, count = deals.len(), "parsed deals sheet");
    Ok(deals)
}
