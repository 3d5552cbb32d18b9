//! Deal source resolution.
//!
//! Tries the published sheet, then the local `deals.json`, and otherwise keeps
//! the compiled-in sample deals. Every stage is bounded by the client timeout
//! and runs at most once; the first stage to produce a non-empty list wins and
//! later stages are not attempted. Failures never reach the caller, they are
//! logged and recorded in [`Resolution::attempts`].

use std::future::Future;

use bkfresh_core::calendar::{date_label, today};
use bkfresh_core::{fallback_deals, AppConfig, Deal, LocalDealsLocation};
use serde::Serialize;

use crate::client::SourceClient;
use crate::error::SourceError;
use crate::local::fetch_local_deals;
use crate::sheets::{fetch_sheet_deals, sheet_csv_url};

/// Where the active deal list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DealSource {
    Remote,
    Local,
    Fallback,
}

impl DealSource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DealSource::Remote => "remote",
            DealSource::Local => "local",
            DealSource::Fallback => "fallback",
        }
    }

    /// Attribution line shown next to live data.
    #[must_use]
    pub fn display_label(self) -> &'static str {
        match self {
            DealSource::Remote => "Google Sheets",
            DealSource::Local => "GitHub Actions",
            DealSource::Fallback => "Sample data",
        }
    }
}

impl std::fmt::Display for DealSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active deal list together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealBoard {
    pub deals: Vec<Deal>,
    pub source: DealSource,
    /// Freshness label; `None` while showing fallback data.
    pub last_updated: Option<String>,
}

impl DealBoard {
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            deals: fallback_deals().to_vec(),
            source: DealSource::Fallback,
            last_updated: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    RemoteSheet,
    LocalFile,
}

/// Why a stage did not commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "status")]
pub enum StageFailure {
    /// No spreadsheet id configured (or still the placeholder).
    Disabled,
    Network,
    Timeout,
    Status(u16),
    /// The payload could not be decoded.
    Malformed,
    /// The payload decoded but held no deals.
    Empty,
    /// The local file could not be read.
    Io,
    /// The source location itself is unusable.
    InvalidUrl,
}

impl From<&SourceError> for StageFailure {
    fn from(err: &SourceError) -> Self {
        match err {
            SourceError::Http(e) if e.is_timeout() => StageFailure::Timeout,
            SourceError::Http(e) if e.is_decode() || e.is_body() => StageFailure::Malformed,
            SourceError::Http(_) => StageFailure::Network,
            SourceError::UnexpectedStatus { status, .. } => StageFailure::Status(*status),
            SourceError::Deserialize { .. } => StageFailure::Malformed,
            SourceError::Io { .. } => StageFailure::Io,
            SourceError::Empty { .. } => StageFailure::Empty,
            SourceError::Timeout { .. } => StageFailure::Timeout,
            SourceError::InvalidUrl { .. } => StageFailure::InvalidUrl,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageOutcome {
    Committed { count: usize },
    Failed(StageFailure),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageAttempt {
    pub stage: Stage,
    pub outcome: StageOutcome,
}

/// Result of one resolution run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub board: DealBoard,
    /// One entry per stage that was considered, in order.
    pub attempts: Vec<StageAttempt>,
}

impl Resolution {
    /// The failure recorded for `stage`, if that stage ran and failed.
    #[must_use]
    pub fn failure(&self, stage: Stage) -> Option<&StageFailure> {
        self.attempts.iter().find_map(|a| match &a.outcome {
            StageOutcome::Failed(f) if a.stage == stage => Some(f),
            _ => None,
        })
    }

    #[must_use]
    pub fn attempted(&self, stage: Stage) -> bool {
        self.attempts.iter().any(|a| a.stage == stage)
    }
}

/// Resolves the active deal list from the configured sources.
#[derive(Debug, Clone)]
pub struct DealResolver {
    client: SourceClient,
    sheet_url: Option<String>,
    local: LocalDealsLocation,
}

impl DealResolver {
    /// `sheet_url` is the full CSV export URL; `None` skips the remote stage.
    #[must_use]
    pub fn new(client: SourceClient, sheet_url: Option<String>, local: LocalDealsLocation) -> Self {
        Self {
            client,
            sheet_url,
            local,
        }
    }

    /// Build a resolver from application config.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Http`] if the HTTP client cannot be built.
    /// - [`SourceError::InvalidUrl`] if the sheets base URL is unusable.
    pub fn from_config(config: &AppConfig) -> Result<Self, SourceError> {
        let client = SourceClient::new(config.source_timeout_secs, &config.user_agent)?;
        let sheet_url = config
            .sheet_id
            .as_deref()
            .map(|id| sheet_csv_url(&config.sheets_base_url, id))
            .transpose()?;
        Ok(Self::new(client, sheet_url, config.local_deals.clone()))
    }

    /// Run the fallback chain once. Never fails.
    pub async fn resolve(&self) -> Resolution {
        let mut attempts = Vec::with_capacity(2);

        match self.remote_stage().await {
            Ok(deals) => {
                attempts.push(committed(Stage::RemoteSheet, deals.len()));
                tracing::info!(count = deals.len(), "using deals from published sheet");
                return Resolution {
                    board: DealBoard {
                        deals,
                        source: DealSource::Remote,
                        last_updated: Some(date_label(today())),
                    },
                    attempts,
                };
            }
            Err(failure) => attempts.push(failed(Stage::RemoteSheet, failure)),
        }

        match self.local_stage().await {
            Ok((deals, week_of)) => {
                attempts.push(committed(Stage::LocalFile, deals.len()));
                tracing::info!(
                    count = deals.len(),
                    location = %self.local,
                    "using deals from local document"
                );
                return Resolution {
                    board: DealBoard {
                        deals,
                        source: DealSource::Local,
                        last_updated: Some(week_of.unwrap_or_else(|| date_label(today()))),
                    },
                    attempts,
                };
            }
            Err(failure) => attempts.push(failed(Stage::LocalFile, failure)),
        }

        tracing::info!("no live deal source available; keeping sample deals");
        Resolution {
            board: DealBoard::fallback(),
            attempts,
        }
    }

    async fn remote_stage(&self) -> Result<Vec<Deal>, StageFailure> {
        let Some(url) = self.sheet_url.as_deref() else {
            tracing::debug!("no sheet id configured; skipping published sheet");
            return Err(StageFailure::Disabled);
        };
        self.bounded("published deals sheet", fetch_sheet_deals(&self.client, url))
            .await
    }

    async fn local_stage(&self) -> Result<(Vec<Deal>, Option<String>), StageFailure> {
        let document = self
            .bounded(
                "local deals document",
                fetch_local_deals(&self.client, &self.local),
            )
            .await?;
        Ok((document.deals, document.week_of))
    }

    /// Apply the stage timeout and fold any error into a logged [`StageFailure`].
    async fn bounded<T, Fut>(&self, context: &str, stage: Fut) -> Result<T, StageFailure>
    where
        Fut: Future<Output = Result<T, SourceError>>,
    {
        let limit = self.client.timeout();
        let result = match tokio::time::timeout(limit, stage).await {
            Ok(result) => result,
            Err(_) => Err(SourceError::Timeout {
                context: context.to_string(),
                timeout_secs: limit.as_secs(),
            }),
        };

        result.map_err(|err| {
            let failure = StageFailure::from(&err);
            tracing::warn!(error = %err, ?failure, "{context} unavailable");
            failure
        })
    }
}

fn committed(stage: Stage, count: usize) -> StageAttempt {
    StageAttempt {
        stage,
        outcome: StageOutcome::Committed { count },
    }
}

fn failed(stage: Stage, failure: StageFailure) -> StageAttempt {
    StageAttempt {
        stage,
        outcome: StageOutcome::Failed(failure),
    }
}
