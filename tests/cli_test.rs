//! Tests for CLI argument parsing

use std::path::PathBuf;

use clap::Parser;

use doctree::cli::args::{Cli, Commands, ConfigCommands};
use doctree::domain::{Language, RenderStyle};

#[test]
fn given_no_arguments_when_parsing_then_no_subcommand() {
    let cli = Cli::try_parse_from(["doctree"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.debug, 0);
}

#[test]
fn given_show_flags_when_parsing_then_values_typed() {
    let cli = Cli::try_parse_from([
        "doctree", "show", "--style", "tree", "--lang", "en", "--indent-step", "3", "-i", "2",
    ])
    .unwrap();

    match cli.command {
        Some(Commands::Show(args)) => {
            assert_eq!(args.style, Some(RenderStyle::Tree));
            assert_eq!(args.lang, Some(Language::En));
            assert_eq!(args.indent_step, Some(3));
            assert_eq!(args.indent, 2);
        }
        other => panic!("expected show, got {other:?}"),
    }
}

#[test]
fn given_unknown_style_when_parsing_then_error() {
    assert!(Cli::try_parse_from(["doctree", "show", "--style", "fancy"]).is_err());
}

#[test]
fn given_global_flags_after_subcommand_when_parsing_then_accepted() {
    let cli =
        Cli::try_parse_from(["doctree", "config", "show", "-dd", "--config", "x.toml"]).unwrap();
    assert_eq!(cli.debug, 2);
    assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    assert!(matches!(
        cli.command,
        Some(Commands::Config {
            command: ConfigCommands::Show
        })
    ));
}

// ============================================================
// Exit codes of the binary
// ============================================================

/// Runs the binary with a scrubbed environment and an empty config home.
fn run_doctree(args: &[&str]) -> std::process::Output {
    let home = tempfile::TempDir::new().unwrap();
    std::process::Command::new(env!("CARGO_BIN_EXE_doctree"))
        .args(args)
        .env_clear()
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .output()
        .unwrap()
}

#[test]
fn given_invalid_flag_value_when_running_then_exits_with_usage_code() {
    let output = run_doctree(&["show", "--style", "fancy"]);
    assert_eq!(output.status.code(), Some(doctree::exitcode::USAGE));
    assert!(String::from_utf8_lossy(&output.stderr).contains("fancy"));
}

#[test]
fn given_unknown_subcommand_when_running_then_exits_with_usage_code() {
    let output = run_doctree(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(doctree::exitcode::USAGE));
}

#[test]
fn given_help_flag_when_running_then_exits_successfully() {
    let output = run_doctree(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
}

#[test]
fn given_no_arguments_when_running_then_prints_company_document() {
    let output = run_doctree(&[]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "\
Документ: Документ Компании
  Раздел: Введение
    Это параграф введения.
  Раздел: Основной Раздел
    Это первый параграф основного раздела.
    Раздел: Подраздел
      Это параграф в подразделе.
"
    );
}

#[test]
fn given_missing_config_file_when_running_then_exits_with_config_code() {
    let output = run_doctree(&["--config", "/nonexistent/doctree.toml", "show"]);
    assert_eq!(output.status.code(), Some(doctree::exitcode::CONFIG));
}
