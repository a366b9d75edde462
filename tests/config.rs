use hive_spanish_search::config::{AppConfig, ConfigError};
use std::io::Write;

#[test]
fn defaults_match_the_public_node() {
    let config = AppConfig::default();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 4000);
    assert_eq!(config.hive.node_url, "https://api.hive.blog");
}

#[test]
fn reads_partial_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[hive]\nnode_url = \"https://api.deathwing.me\"").unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();

    assert_eq!(config.hive.node_url, "https://api.deathwing.me");
    assert_eq!(config.server.port, 4000);
}

#[test]
fn reports_malformed_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server]\nport = \"not a port\"").unwrap();

    let err = AppConfig::from_file(file.path()).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}
