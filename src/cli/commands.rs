use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{company_document, ApplicationError, DisplayService};
use crate::cli::args::{Cli, Commands, ConfigCommands, ShowArgs};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::{global_config_path, Settings};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Show(args)) => _show(cli, args),
        Some(Commands::Stats) => _stats(),
        Some(Commands::Config { command }) => _config(cli, command),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => _show(cli, &ShowArgs::default()),
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    Ok(Settings::load(cli.config.as_deref())?)
}

/// Settings with command line flags applied on top.
pub fn apply_show_args(mut settings: Settings, args: &ShowArgs) -> Settings {
    if let Some(style) = args.style {
        settings.style = style;
    }
    if let Some(lang) = args.lang {
        settings.language = lang;
    }
    if let Some(step) = args.indent_step {
        settings.indent_step = step;
    }
    settings
}

#[instrument(skip(cli))]
fn _show(cli: &Cli, args: &ShowArgs) -> CliResult<()> {
    let settings = apply_show_args(load_settings(cli)?, args);
    debug!(?settings, "effective settings");

    let document = company_document().map_err(ApplicationError::from)?;
    let service = DisplayService::new(&settings);
    let stdout = io::stdout();
    service.write(&document, &mut stdout.lock(), args.indent)?;
    Ok(())
}

#[instrument]
fn _stats() -> CliResult<()> {
    let document = company_document().map_err(ApplicationError::from)?;
    let paragraphs = document.iter().filter(|(_, n)| n.is_leaf()).count();

    output::header(document.title().unwrap_or_default());
    output::detail(&format!("nodes:      {}", document.node_count()));
    output::detail(&format!("depth:      {}", document.depth()));
    output::detail(&format!("paragraphs: {}", paragraphs));
    Ok(())
}

#[instrument(skip(cli))]
fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => {
                if path.exists() {
                    output::info(&path.display());
                } else {
                    output::info(&format!("{} (not found)", path.display()));
                }
            }
            None => {
                return Err(ApplicationError::Config {
                    message: "cannot determine config directory".into(),
                }
                .into())
            }
        },
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Language, RenderStyle};

    #[test]
    fn given_show_flags_when_applied_then_override_settings() {
        let args = ShowArgs {
            style: Some(RenderStyle::Tree),
            lang: Some(Language::En),
            indent_step: Some(4),
            indent: 0,
        };
        let settings = apply_show_args(Settings::default(), &args);

        assert_eq!(settings.style, RenderStyle::Tree);
        assert_eq!(settings.language, Language::En);
        assert_eq!(settings.indent_step, 4);
    }

    #[test]
    fn given_no_flags_when_applied_then_settings_unchanged() {
        let settings = apply_show_args(Settings::default(), &ShowArgs::default());
        assert_eq!(settings, Settings::default());
    }
}
