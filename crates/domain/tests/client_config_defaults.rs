use sr_domain::config::ClientConfig;

#[test]
fn default_base_url_is_localhost() {
    let config = ClientConfig::default();
    assert_eq!(config.base_url, "http://localhost:4000");
}

#[test]
fn defaults_fill_missing_fields() {
    let toml_str = r#"
base_url = "https://api.studyremind.app"
"#;
    let config: ClientConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.base_url, "https://api.studyremind.app");
    assert_eq!(config.timeout_ms, 8000);
    assert_eq!(config.max_retries, 3);
    assert!(config.api_key.is_none());
}

#[test]
fn explicit_values_parse() {
    let toml_str = r#"
base_url = "http://10.0.0.5:4000"
api_key = "sk-test"
timeout_ms = 2500
max_retries = 1
"#;
    let config: ClientConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.api_key.as_deref(), Some("sk-test"));
    assert_eq!(config.timeout_ms, 2500);
    assert_eq!(config.max_retries, 1);
}
