use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "BKFRESH_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.sheet_id.is_none());
    assert!(!cfg.remote_enabled());
    assert_eq!(cfg.sheets_base_url, "https://docs.google.com");
    assert_eq!(
        cfg.local_deals,
        LocalDealsLocation::Path(PathBuf::from("./public/deals.json"))
    );
    assert_eq!(cfg.source_timeout_secs, 10);
    assert_eq!(cfg.user_agent, "bkfresh/0.1 (community-grocery)");
}

#[test]
fn sheet_id_placeholder_disables_remote_stage() {
    let mut map = HashMap::new();
    map.insert("BKFRESH_SHEET_ID", "YOUR_SHEET_ID_HERE");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.sheet_id.is_none());
    assert!(!cfg.remote_enabled());
}

#[test]
fn sheet_id_blank_disables_remote_stage() {
    let mut map = HashMap::new();
    map.insert("BKFRESH_SHEET_ID", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.sheet_id.is_none());
}

#[test]
fn sheet_id_real_value_enables_remote_stage() {
    let mut map = HashMap::new();
    map.insert("BKFRESH_SHEET_ID", " 1AbCdEf ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.sheet_id.as_deref(), Some("1AbCdEf"));
    assert!(cfg.remote_enabled());
}

#[test]
fn sheets_base_url_strips_trailing_slash() {
    let mut map = HashMap::new();
    map.insert("BKFRESH_SHEETS_BASE_URL", "http://127.0.0.1:9000/");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.sheets_base_url, "http://127.0.0.1:9000");
}

#[test]
fn local_deals_url_is_detected() {
    let mut map = HashMap::new();
    map.insert("BKFRESH_LOCAL_DEALS", "https://bkfresh.example.org/deals.json");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.local_deals,
        LocalDealsLocation::Url("https://bkfresh.example.org/deals.json".to_string())
    );
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("BKFRESH_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BKFRESH_BIND_ADDR"),
        "expected InvalidEnvVar(BKFRESH_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn source_timeout_override() {
    let mut map = HashMap::new();
    map.insert("BKFRESH_SOURCE_TIMEOUT_SECS", "3");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.source_timeout_secs, 3);
}

#[test]
fn source_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("BKFRESH_SOURCE_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BKFRESH_SOURCE_TIMEOUT_SECS"),
        "expected InvalidEnvVar(BKFRESH_SOURCE_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn source_timeout_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("BKFRESH_SOURCE_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn debug_output_redacts_sheet_id() {
    let mut map = HashMap::new();
    map.insert("BKFRESH_SHEET_ID", "secret-sheet-id");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("secret-sheet-id"));
    assert!(rendered.contains("[redacted]"));
}
