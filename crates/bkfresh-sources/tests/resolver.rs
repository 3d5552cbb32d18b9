//! Integration tests for `DealResolver::resolve`.
//!
//! Uses `wiremock` for both the published sheet and an HTTP-hosted
//! `deals.json`, and `tempfile` for the on-disk variant, so no real network
//! traffic is made.

use std::io::Write;
use std::time::Duration;

use bkfresh_core::calendar::{date_label, today};
use bkfresh_core::{fallback_deals, LocalDealsLocation};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bkfresh_sources::{
    fetch_sheet_deals, sheet_csv_url, DealResolver, DealSource, SourceClient, Stage,
    StageFailure, StageOutcome,
};

const SHEET_PATH: &str = "/spreadsheets/d/test-sheet/gviz/tq";

const SHEET_CSV: &str = "\
\"store\",\"item\",\"price\",\"original_price\",\"category\",\"expires_in\",\"icon\",\"source\",\"sale_story\"
\"Food Bazaar\",\"Rice, Jasmine (5lb)\",\"$3.49\",\"$4.99\",\"Staples\",\"4 days\",\"🍚\",\"flipp\",\"Save $1.50\"
\"Lidl\",\"Whole Milk (gal)\",\"$2.89\",\"\",\"Dairy\",\"Always\",\"\",\"flipp\",\"\"
";

/// 5-second budget, descriptive UA.
fn test_client() -> SourceClient {
    SourceClient::new(5, "bkfresh-test/0.1").expect("failed to build test SourceClient")
}

fn local_deals_json(week_of: Option<&str>) -> serde_json::Value {
    let mut doc = json!({
        "deals": [{
            "store": "ALDI",
            "item": "Rolled Oats (42oz)",
            "price": "$2.79",
            "original_price": "$3.29",
            "category": "Staples",
            "expires_in": "6 days",
            "icon": "🥣",
            "source": "flipp"
        }]
    });
    if let Some(week_of) = week_of {
        doc["week_of"] = json!(week_of);
    }
    doc
}

async fn mount_sheet(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(SHEET_PATH))
        .and(query_param("tqx", "out:csv"))
        .and(query_param("sheet", "deals"))
        .respond_with(template)
        .mount(server)
        .await;
}

fn sheet_url(server: &MockServer) -> String {
    sheet_csv_url(&server.uri(), "test-sheet").expect("sheet url")
}

fn local_url(server: &MockServer) -> LocalDealsLocation {
    LocalDealsLocation::Url(format!("{}/deals.json", server.uri()))
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

#[tokio::test]
async fn falls_back_when_both_sources_fail() {
    let server = MockServer::start().await;
    mount_sheet(&server, ResponseTemplate::new(500)).await;
    Mock::given(method("GET"))
        .and(path("/deals.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let resolver = DealResolver::new(test_client(), Some(sheet_url(&server)), local_url(&server));
    let resolution = resolver.resolve().await;

    assert_eq!(resolution.board.source, DealSource::Fallback);
    assert_eq!(resolution.board.deals, fallback_deals());
    assert!(resolution.board.last_updated.is_none());
    assert_eq!(
        resolution.failure(Stage::RemoteSheet),
        Some(&StageFailure::Status(500))
    );
    assert_eq!(
        resolution.failure(Stage::LocalFile),
        Some(&StageFailure::Status(404))
    );
}

#[tokio::test]
async fn falls_back_on_network_errors() {
    // Nothing listens on the discard port.
    let resolver = DealResolver::new(
        test_client(),
        Some("http://127.0.0.1:9/spreadsheets/d/x/gviz/tq".to_string()),
        LocalDealsLocation::Url("http://127.0.0.1:9/deals.json".to_string()),
    );
    let resolution = resolver.resolve().await;

    assert_eq!(resolution.board.source, DealSource::Fallback);
    assert_eq!(
        resolution.failure(Stage::RemoteSheet),
        Some(&StageFailure::Network)
    );
    assert_eq!(
        resolution.failure(Stage::LocalFile),
        Some(&StageFailure::Network)
    );
}

#[tokio::test]
async fn missing_local_file_is_an_io_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let resolver = DealResolver::new(
        test_client(),
        None,
        LocalDealsLocation::Path(dir.path().join("deals.json")),
    );
    let resolution = resolver.resolve().await;

    assert_eq!(resolution.board.source, DealSource::Fallback);
    assert_eq!(
        resolution.failure(Stage::RemoteSheet),
        Some(&StageFailure::Disabled)
    );
    assert_eq!(resolution.failure(Stage::LocalFile), Some(&StageFailure::Io));
}

#[tokio::test]
async fn malformed_local_document_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/deals.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let resolver = DealResolver::new(test_client(), None, local_url(&server));
    let resolution = resolver.resolve().await;

    assert_eq!(resolution.board.source, DealSource::Fallback);
    assert_eq!(
        resolution.failure(Stage::LocalFile),
        Some(&StageFailure::Malformed)
    );
}

#[tokio::test]
async fn empty_local_deal_list_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/deals.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"week_of": "Feb 16", "deals": []})),
        )
        .mount(&server)
        .await;

    let resolver = DealResolver::new(test_client(), None, local_url(&server));
    let resolution = resolver.resolve().await;

    assert_eq!(resolution.board.source, DealSource::Fallback);
    assert_eq!(resolution.failure(Stage::LocalFile), Some(&StageFailure::Empty));
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

#[tokio::test]
async fn remote_wins_and_local_is_never_requested() {
    let server = MockServer::start().await;
    mount_sheet(&server, ResponseTemplate::new(200).set_body_string(SHEET_CSV)).await;
    Mock::given(method("GET"))
        .and(path("/deals.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(local_deals_json(Some("Feb 16"))))
        .expect(0)
        .mount(&server)
        .await;

    let resolver = DealResolver::new(test_client(), Some(sheet_url(&server)), local_url(&server));
    let resolution = resolver.resolve().await;

    assert_eq!(resolution.board.source, DealSource::Remote);
    assert_eq!(resolution.board.deals.len(), 2);
    assert_eq!(resolution.board.deals[0].item, "Rice, Jasmine (5lb)");
    assert_eq!(
        resolution.board.last_updated.as_deref(),
        Some(date_label(today()).as_str())
    );
    assert!(!resolution.attempted(Stage::LocalFile));
    assert_eq!(
        resolution.attempts[0].outcome,
        StageOutcome::Committed { count: 2 }
    );
}

#[tokio::test]
async fn empty_sheet_hands_over_to_local_document() {
    let server = MockServer::start().await;
    mount_sheet(
        &server,
        ResponseTemplate::new(200).set_body_string("store,item,price\n"),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/deals.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(local_deals_json(None)))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = DealResolver::new(test_client(), Some(sheet_url(&server)), local_url(&server));
    let resolution = resolver.resolve().await;

    assert_eq!(resolution.board.source, DealSource::Local);
    assert_eq!(resolution.board.deals[0].item, "Rolled Oats (42oz)");
    assert_eq!(
        resolution.failure(Stage::RemoteSheet),
        Some(&StageFailure::Empty)
    );
    // No `week_of` in the document: freshness falls back to today.
    assert_eq!(
        resolution.board.last_updated.as_deref(),
        Some(date_label(today()).as_str())
    );
}

#[tokio::test]
async fn local_file_week_of_is_the_freshness_label() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{}", local_deals_json(Some("Feb 16, 2026"))).expect("write deals.json");

    let resolver = DealResolver::new(
        test_client(),
        None,
        LocalDealsLocation::Path(file.path().to_path_buf()),
    );
    let resolution = resolver.resolve().await;

    assert_eq!(resolution.board.source, DealSource::Local);
    assert_eq!(resolution.board.last_updated.as_deref(), Some("Feb 16, 2026"));
    assert_eq!(
        resolution.failure(Stage::RemoteSheet),
        Some(&StageFailure::Disabled)
    );
}

#[tokio::test]
async fn local_document_with_null_fields_still_commits() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/deals.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "week_of": "Feb 16, 2026",
            "deals": [
                {"store": "ALDI", "item": "Rice", "price": null, "category": null},
                {"store": "Lidl", "item": "Eggs", "price": "$2.49", "original_price": null}
            ]
        })))
        .mount(&server)
        .await;

    let resolver = DealResolver::new(test_client(), None, local_url(&server));
    let resolution = resolver.resolve().await;

    assert_eq!(resolution.board.source, DealSource::Local);
    assert_eq!(resolution.board.deals.len(), 2);
    assert!(resolution.board.deals[0].price.is_empty());
    assert_eq!(
        resolution.attempts[1].outcome,
        StageOutcome::Committed { count: 2 }
    );
}

#[tokio::test]
async fn null_local_deal_list_is_empty_not_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/deals.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deals": null})))
        .mount(&server)
        .await;

    let resolver = DealResolver::new(test_client(), None, local_url(&server));
    let resolution = resolver.resolve().await;

    assert_eq!(resolution.board.source, DealSource::Fallback);
    assert_eq!(resolution.failure(Stage::LocalFile), Some(&StageFailure::Empty));
}

// ---------------------------------------------------------------------------
// Timeout
// ---------------------------------------------------------------------------

#[tokio::test]
async fn slow_sheet_times_out_and_falls_through() {
    let server = MockServer::start().await;
    mount_sheet(
        &server,
        ResponseTemplate::new(200)
            .set_body_string(SHEET_CSV)
            .set_delay(Duration::from_secs(3)),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/deals.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(local_deals_json(Some("Feb 16"))))
        .mount(&server)
        .await;

    let client = SourceClient::new(1, "bkfresh-test/0.1").expect("client");
    let resolver = DealResolver::new(client, Some(sheet_url(&server)), local_url(&server));
    let resolution = resolver.resolve().await;

    assert_eq!(
        resolution.failure(Stage::RemoteSheet),
        Some(&StageFailure::Timeout)
    );
    assert_eq!(resolution.board.source, DealSource::Local);
}

// ---------------------------------------------------------------------------
// Sheet column mapping
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sheet_rows_map_onto_deal_fields() {
    let server = MockServer::start().await;
    mount_sheet(&server, ResponseTemplate::new(200).set_body_string(SHEET_CSV)).await;

    let deals = fetch_sheet_deals(&test_client(), &sheet_url(&server))
        .await
        .expect("sheet deals");

    let rice = &deals[0];
    assert_eq!(rice.store, "Food Bazaar");
    assert_eq!(rice.price, "$3.49");
    assert_eq!(rice.original_price.as_deref(), Some("$4.99"));
    assert_eq!(rice.sale_story.as_deref(), Some("Save $1.50"));
    assert!(rice.has_savings());

    let milk = &deals[1];
    assert!(milk.original_price.is_none());
    assert!(milk.icon.is_none());
    assert!(milk.is_everyday());
    assert_eq!(milk.icon_or_default(), "🥛");
}
