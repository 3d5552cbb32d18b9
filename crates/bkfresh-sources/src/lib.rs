pub mod client;
pub mod csv;
pub mod error;
pub mod local;
pub mod resolver;
pub mod sheets;

pub use client::SourceClient;
pub use csv::{parse_records, Record};
pub use error::SourceError;
pub use local::{fetch_local_deals, LocalDealsDocument};
pub use resolver::{
    DealBoard, DealResolver, DealSource, Resolution, Stage, StageAttempt, StageFailure,
    StageOutcome,
};
pub use sheets::{fetch_sheet_deals, sheet_csv_url};
