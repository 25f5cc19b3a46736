//! Tests for `config` module

use super::config::*;
use super::selector::SelectorStrategy;

#[test]
fn test_default_config() {
    let config = FlatknnConfig::default();

    assert_eq!(config.search.k, 10);
    assert_eq!(config.search.strategy, SelectorStrategy::BinaryHeap);
    assert_eq!(config.search.max_queries, 100);
    assert_eq!(config.data.output_dir, ".");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_from_toml_overrides_defaults() {
    let config = FlatknnConfig::from_toml(
        r#"
        [search]
        k = 5
        strategy = "sorted-list"

        [logging]
        level = "debug"
        "#,
    )
    .unwrap();

    assert_eq!(config.search.k, 5);
    assert_eq!(config.search.strategy, SelectorStrategy::SortedList);
    // Untouched sections keep their defaults.
    assert_eq!(config.search.max_queries, 100);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_from_toml_rejects_zero_k() {
    let result = FlatknnConfig::from_toml("[search]\nk = 0\n");

    match result {
        Err(ConfigError::InvalidValue { key, .. }) => assert_eq!(key, "search.k"),
        other => panic!("Expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn test_from_toml_rejects_zero_max_queries() {
    let result = FlatknnConfig::from_toml("[search]\nmax_queries = 0\n");
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_from_toml_rejects_unknown_strategy() {
    let result = FlatknnConfig::from_toml("[search]\nstrategy = \"quad-tree\"\n");
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn test_load_from_missing_path_uses_defaults() {
    // Toml::file on a missing path contributes nothing; defaults remain.
    let config = FlatknnConfig::load_from_path("/nonexistent/flatknn.toml").unwrap();
    assert_eq!(config.search.k, 10);
}

#[test]
fn test_to_toml_round_trip() {
    let mut config = FlatknnConfig::default();
    config.search.k = 25;
    config.data.points = "base.fvecs".to_string();

    let toml_str = config.to_toml().unwrap();
    let back = FlatknnConfig::from_toml(&toml_str).unwrap();

    assert_eq!(back.search.k, 25);
    assert_eq!(back.data.points, "base.fvecs");
}

#[test]
fn test_strategy_round_trips_through_serde() {
    for strategy in SelectorStrategy::ALL {
        let json = serde_json::to_string(&strategy).unwrap();
        let back: SelectorStrategy = serde_json::from_str(&json).unwrap();
        assert_eq!(strategy, back);
    }
    assert_eq!(
        serde_json::to_string(&SelectorStrategy::StdHeap).unwrap(),
        "\"std-heap\""
    );
}
