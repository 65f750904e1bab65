use super::*;

use std::{
    env,
    time::{SystemTime, UNIX_EPOCH},
};

#[test]
fn defaults_target_demo_backend() {
    let settings = Settings::default();
    assert_eq!(
        settings.list_url().expect("list url").as_str(),
        "https://fakestoreapi.com/products"
    );
    assert_eq!(
        settings.create_url().expect("create url").as_str(),
        "https://fakestoreapi.com/products"
    );
}

#[test]
fn joins_paths_without_doubling_slashes() {
    let settings = Settings {
        api_base_url: "http://127.0.0.1:9000/api/".into(),
        list_path: "product".into(),
        create_path: "/products".into(),
    };
    assert_eq!(
        settings.list_url().expect("list url").as_str(),
        "http://127.0.0.1:9000/api/product"
    );
    assert_eq!(
        settings.create_url().expect("create url").as_str(),
        "http://127.0.0.1:9000/api/products"
    );
}

#[test]
fn rejects_unparsable_base_url() {
    let settings = Settings {
        api_base_url: "not a url".into(),
        ..Settings::default()
    };
    let err = settings.list_url().expect_err("should fail");
    assert!(matches!(err, CatalogApiError::InvalidEndpoint { .. }));
}

#[test]
fn toml_overrides_only_present_keys() {
    let mut settings = Settings::default();
    settings
        .apply_toml("list_path = \"/product\"\n")
        .expect("apply toml");
    assert_eq!(settings.list_path, "/product");
    assert_eq!(settings.create_path, "/products");
    assert_eq!(settings.api_base_url, "https://fakestoreapi.com");
}

#[test]
fn app_prefixed_env_wins_over_catalog_prefix() {
    let mut settings = Settings::default();
    settings.apply_env(|name| match name {
        "CATALOG_API_BASE_URL" => Some("http://catalog.local".into()),
        "APP__API_BASE_URL" => Some("http://app.local".into()),
        "CATALOG_CREATE_PATH" => Some("/items".into()),
        _ => None,
    });
    assert_eq!(settings.api_base_url, "http://app.local");
    assert_eq!(settings.create_path, "/items");
    assert_eq!(settings.list_path, "/products");
}

fn temp_settings_path(label: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    env::temp_dir().join(format!("catalog_{label}_{suffix}.toml"))
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn explicit_missing_settings_file_is_an_error() {
    let path = temp_settings_path("missing");
    let fallback = temp_settings_path("unused_fallback");

    let err = load_settings_from(Some(&path), &fallback, no_env).expect_err("should fail");
    assert!(err.to_string().contains("failed to read settings file"));
}

#[test]
fn loads_settings_file_from_explicit_path() {
    let path = temp_settings_path("explicit");
    fs::write(&path, "create_path = \"/v2/products\"\n").expect("write settings");

    let settings =
        load_settings_from(Some(&path), Path::new("unused.toml"), no_env).expect("load settings");
    assert_eq!(settings.create_path, "/v2/products");
    assert_eq!(settings.list_path, "/products");

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn missing_default_settings_file_falls_back_to_defaults() {
    let fallback = temp_settings_path("absent_default");

    let settings = load_settings_from(None, &fallback, no_env).expect("load settings");
    assert_eq!(settings, Settings::default());
}

#[test]
fn default_settings_file_is_read_when_present() {
    let fallback = temp_settings_path("default");
    fs::write(&fallback, "api_base_url = \"http://127.0.0.1:8080\"\n").expect("write settings");

    let settings = load_settings_from(None, &fallback, no_env).expect("load settings");
    assert_eq!(settings.api_base_url, "http://127.0.0.1:8080");

    fs::remove_file(fallback).expect("cleanup");
}

#[test]
fn env_overrides_settings_file() {
    let path = temp_settings_path("env_override");
    fs::write(&path, "list_path = \"/from-file\"\n").expect("write settings");

    let settings = load_settings_from(Some(&path), Path::new("unused.toml"), |name| {
        (name == "CATALOG_LIST_PATH").then(|| "/from-env".to_string())
    })
    .expect("load settings");
    assert_eq!(settings.list_path, "/from-env");

    fs::remove_file(path).expect("cleanup");
}
