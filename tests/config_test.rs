//! Integration tests for Settings config loading with layered precedence.
//!
//! Defaults < global file < explicit file < BUDGET_* env vars.
//! Env vars are injected through `Environment::source` so tests never touch
//! the process environment.

use std::fs;
use std::path::Path;

use config::Environment;
use tempfile::TempDir;

use budget_tree::application::ApplicationError;
use budget_tree::config::{Settings, ENV_PREFIX, MAX_PRICE_DECIMALS};

fn env_with(vars: &[(&str, &str)]) -> Environment {
    let mut map = config::Map::new();
    for (k, v) in vars {
        map.insert(k.to_string(), v.to_string());
    }
    Environment::with_prefix(ENV_PREFIX).source(Some(map))
}

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn given_missing_global_file_when_load_then_defaults() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("budget.toml");

    let settings = Settings::load_layered(Some(&global), None, env_with(&[])).unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_global_and_explicit_files_when_load_then_explicit_wins_per_field() {
    let dir = TempDir::new().unwrap();
    let global = write_config(&dir, "global.toml", "indent = \"  \"\nprice_decimals = 1\n");
    let explicit = write_config(&dir, "local.toml", "price_decimals = 2\n");

    let settings =
        Settings::load_layered(Some(&global), Some(&explicit), env_with(&[])).unwrap();

    assert_eq!(settings.indent, "  ");
    assert_eq!(settings.price_decimals, Some(2));
    assert!(!settings.strict);
}

#[test]
fn given_env_vars_when_load_then_override_files() {
    let dir = TempDir::new().unwrap();
    let explicit = write_config(&dir, "local.toml", "strict = false\nindent = \"  \"\n");

    let env = env_with(&[
        ("BUDGET_STRICT", "true"),
        ("BUDGET_PRICE_DECIMALS", "3"),
        ("BUDGET_INDENT", "...."),
    ]);
    let settings = Settings::load_layered(None, Some(&explicit), env).unwrap();

    assert!(settings.strict);
    assert_eq!(settings.price_decimals, Some(3));
    assert_eq!(settings.indent, "....");
}

#[test]
fn given_unrelated_env_vars_when_load_then_ignored() {
    let env = env_with(&[("HOME", "/tmp"), ("BUDGETX", "1")]);
    let settings = Settings::load_layered(None, None, env).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_missing_explicit_file_when_load_then_config_error() {
    let result = Settings::load_layered(
        None,
        Some(Path::new("/nonexistent/budget.toml")),
        env_with(&[]),
    );
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_malformed_file_when_load_then_parse_error() {
    let dir = TempDir::new().unwrap();
    let explicit = write_config(&dir, "bad.toml", "price_decimals = \"two\"\n");

    let err = Settings::load_layered(None, Some(&explicit), env_with(&[])).unwrap_err();

    assert!(err.to_string().contains("parse"), "unexpected error: {err}");
}

#[test]
fn given_negative_decimals_in_env_when_load_then_config_error() {
    let env = env_with(&[("BUDGET_PRICE_DECIMALS", "-1")]);
    let result = Settings::load_layered(None, None, env);
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_oversized_decimals_in_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let explicit = write_config(&dir, "local.toml", "price_decimals = 70000\n");

    let err = Settings::load_layered(None, Some(&explicit), env_with(&[])).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("price_decimals"), "unexpected error: {err}");
}

#[test]
fn given_oversized_decimals_in_env_when_load_then_config_error() {
    let env = env_with(&[("BUDGET_PRICE_DECIMALS", "70000")]);
    let result = Settings::load_layered(None, None, env);
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_decimals_at_cap_in_env_when_load_then_accepted() {
    let cap = MAX_PRICE_DECIMALS.to_string();
    let env = env_with(&[("BUDGET_PRICE_DECIMALS", cap.as_str())]);
    let settings = Settings::load_layered(None, None, env).unwrap();
    assert_eq!(settings.price_decimals, Some(MAX_PRICE_DECIMALS));
}
