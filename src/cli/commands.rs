use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{sample_house, BudgetService, IoResultExt};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::Part;

/// Run the parsed command against stdout.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_command_to(cli, &settings, &mut out)
}

/// Run the parsed command, writing its output to `out`.
pub fn execute_command_to(cli: &Cli, settings: &Settings, out: &mut dyn Write) -> CliResult<()> {
    let service = BudgetService::new(settings);
    let house = sample_house();

    match &cli.command {
        None | Some(Commands::Show) => _show(&service, &house, out),
        Some(Commands::Total) => _total(&service, &house, out),
        Some(Commands::Tree) => _tree(&service, &house, out),
        Some(Commands::Leaves) => _leaves(&service, &house, out),
        Some(Commands::Stats) => _stats(&service, &house, out),
        Some(Commands::Config { command }) => _config(command, settings, out),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, out);
            Ok(())
        }
    }
}

#[instrument(skip_all)]
fn _show(service: &BudgetService, house: &Part, out: &mut dyn Write) -> CliResult<()> {
    service.render_breakdown(house, out)?;
    Ok(())
}

#[instrument(skip_all)]
fn _total(service: &BudgetService, house: &Part, out: &mut dyn Write) -> CliResult<()> {
    service.render_total(house, out)?;
    Ok(())
}

#[instrument(skip_all)]
fn _tree(service: &BudgetService, house: &Part, out: &mut dyn Write) -> CliResult<()> {
    let tree = service.render_tree(house)?;
    write!(out, "{}", tree).with_context("write tree")?;
    Ok(())
}

#[instrument(skip_all)]
fn _leaves(service: &BudgetService, house: &Part, out: &mut dyn Write) -> CliResult<()> {
    let paths = service.leaf_paths(house)?;
    debug!("{} leaves", paths.len());
    for path in paths {
        writeln!(out, "{}", path).with_context("write leaves")?;
    }
    Ok(())
}

#[instrument(skip_all)]
fn _stats(service: &BudgetService, house: &Part, out: &mut dyn Write) -> CliResult<()> {
    let stats = service.stats(house)?;
    let prices = service.style().prices;
    let lines = [
        output::header(house.name()),
        output::labelled("nodes", &stats.nodes),
        output::labelled("leaves", &stats.leaves),
        output::labelled("composites", &stats.composites),
        output::labelled("depth", &stats.depth),
        output::labelled("total", &prices.render(stats.total)),
    ];
    for line in lines {
        writeln!(out, "{}", line).with_context("write stats")?;
    }
    Ok(())
}

#[instrument(skip(settings, out))]
fn _config(command: &ConfigCommands, settings: &Settings, out: &mut dyn Write) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            write!(out, "{}", settings.to_toml()?).with_context("write config")?;
        }
        ConfigCommands::Template => {
            write!(out, "{}", Settings::template()).with_context("write template")?;
        }
        ConfigCommands::Path => {
            let line = match global_config_path() {
                Some(path) => {
                    let state = if path.exists() { "" } else { " (not found)" };
                    output::labelled("global", &format!("{}{}", path.display(), state))
                }
                None => output::labelled("global", "unavailable"),
            };
            writeln!(out, "{}", line).with_context("write config path")?;
        }
    }
    Ok(())
}
