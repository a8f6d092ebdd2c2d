//! Integration tests for Settings config loading.
//!
//! Every source is passed explicitly through `Settings::load_from`: global and
//! explicit files live in temp directories and the environment is a fixed map,
//! so the machine's own config and `DOCTREE_*` variables never leak in.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use config::Environment;
use tempfile::TempDir;

use doctree::application::{company_document, ApplicationError, DisplayService};
use doctree::config::Settings;
use doctree::domain::{Language, RenderStyle};

fn env(vars: &[(&str, &str)]) -> Environment {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::env_source().source(Some(map))
}

fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn load(global: Option<&Path>, file: Option<&Path>) -> Result<Settings, ApplicationError> {
    Settings::load_from(global, file, env(&[]))
}

// ============================================================
// Defaults
// ============================================================

#[test]
fn given_no_sources_when_load_then_uses_defaults() {
    let settings = load(None, None).expect("load settings");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.indent_step, 2);
    assert_eq!(settings.language, Language::Ru);
    assert_eq!(settings.style, RenderStyle::Indent);
}

#[test]
fn given_missing_global_file_when_load_then_skipped() {
    let dir = TempDir::new().unwrap();
    let settings = load(Some(&dir.path().join("doctree.toml")), None).unwrap();
    assert_eq!(settings, Settings::default());
}

// ============================================================
// Layering
// ============================================================

#[test]
fn given_config_file_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "doctree.toml",
        r#"
indent_step = 4
language = "en"

[labels]
section = "Chapter: "
"#,
    );

    let settings = load(None, Some(&path)).expect("load settings");

    assert_eq!(settings.indent_step, 4);
    assert_eq!(settings.language, Language::En);
    assert_eq!(settings.style, RenderStyle::Indent);
    assert_eq!(settings.labels().section, "Chapter: ");
    assert_eq!(settings.labels().document, "Document: ");
}

#[test]
fn given_global_and_explicit_file_when_load_then_explicit_wins_per_field() {
    let dir = TempDir::new().unwrap();
    let global = write_config(&dir, "global.toml", "indent_step = 6\nstyle = \"tree\"\n");
    let explicit = write_config(&dir, "explicit.toml", "indent_step = 3\n");

    let settings = load(Some(&global), Some(&explicit)).unwrap();

    assert_eq!(settings.indent_step, 3);
    assert_eq!(settings.style, RenderStyle::Tree);
}

#[test]
fn given_env_vars_when_load_then_override_files() {
    let dir = TempDir::new().unwrap();
    let explicit = write_config(&dir, "explicit.toml", "indent_step = 3\nlanguage = \"en\"\n");

    let settings = Settings::load_from(
        None,
        Some(&explicit),
        env(&[("DOCTREE_INDENT_STEP", "5"), ("DOCTREE_LABELS__SECTION", "§ ")]),
    )
    .unwrap();

    assert_eq!(settings.indent_step, 5);
    assert_eq!(settings.language, Language::En);
    assert_eq!(settings.labels().section, "§ ");
}

#[test]
fn given_config_file_when_displaying_then_output_follows_settings() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "doctree.toml", "indent_step = 1\nlanguage = \"en\"\n");

    let settings = load(None, Some(&path)).unwrap();
    let rendered = DisplayService::new(&settings).render(&company_document().unwrap(), 0);

    assert!(rendered.starts_with("Document: Документ Компании\n Section: Введение\n  Это"));
}

// ============================================================
// Errors
// ============================================================

#[test]
fn given_missing_config_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let result = load(None, Some(&dir.path().join("absent.toml")));
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_invalid_toml_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "doctree.toml", "language = \"klingon\"\n");

    let err = load(None, Some(&path)).unwrap_err();
    assert!(err.to_string().starts_with("config error: parse"), "{err}");
}

#[test]
fn given_invalid_global_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let global = write_config(&dir, "global.toml", "indent_step = \"wide\"\n");
    assert!(matches!(
        load(Some(&global), None),
        Err(ApplicationError::Config { .. })
    ));
}
