//! Unit tests for the serde surface of store options and save policies
//!
//! Host applications embed these types in their own TOML configuration.

use inistore::{SavePolicy, StoreOptions, DEFAULT_HEADER};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct HostConfig {
    store: StoreOptions,
    on_save: SavePolicy,
}

#[test]
fn test_options_from_host_toml() {
    let config: HostConfig = toml::from_str(
        r##"
on_save = "reload"

[store]
header = "# managed by host"
atomic_writes = false
file_permissions = 384
"##,
    )
    .unwrap();

    assert_eq!(config.on_save, SavePolicy::Reload);
    assert_eq!(config.store.header, "# managed by host");
    assert!(!config.store.atomic_writes);
    assert_eq!(config.store.file_permissions, Some(0o600));
}

#[test]
fn test_missing_option_fields_use_defaults() {
    let config: HostConfig = toml::from_str(
        r#"
on_save = "keep"

[store]
"#,
    )
    .unwrap();

    assert_eq!(config.store, StoreOptions::default());
    assert_eq!(config.store.header, DEFAULT_HEADER);
}

#[test]
fn test_unknown_policy_is_rejected() {
    let result: Result<HostConfig, _> = toml::from_str("on_save = \"flush\"\n[store]\n");
    assert!(result.is_err());
}

#[test]
fn test_policy_serializes_lowercase() {
    #[derive(serde::Serialize)]
    struct Wrapper {
        policy: SavePolicy,
    }

    let text = toml::to_string(&Wrapper {
        policy: SavePolicy::Unload,
    })
    .unwrap();
    assert_eq!(text.trim(), "policy = \"unload\"");
}
