//! Command dispatch: maps parsed arguments onto services

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, LedgerCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{CategoryNode, TreeRender};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, see `relcat --help`".to_string(),
        ));
    };

    // Commands that must work without a loadable config or taxonomy
    match command {
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            return Ok(());
        }
        Commands::Config { command } => return cmd_config(cli, command),
        _ => {}
    }

    let settings = load_settings(cli)?;
    let container = ServiceContainer::new(settings)?;
    debug!("taxonomy source: {}", container.taxonomy.source());

    match command {
        Commands::Tree { path } => cmd_tree(&container, path.as_deref()),
        Commands::Flatten { prefix } => cmd_flatten(&container, prefix.as_deref()),
        Commands::Resolve { path } => cmd_resolve(&container, path),
        Commands::Ledger { command } => cmd_ledger(&container, command),
        Commands::Completion { .. } | Commands::Config { .. } => Ok(()),
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = match &cli.config {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::InvalidArgs(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            Settings::load_from(Some(path))?
        }
        None => Settings::load()?,
    };
    Ok(settings)
}

#[instrument(skip(container))]
fn cmd_tree(container: &ServiceContainer, path: Option<&str>) -> CliResult<()> {
    let (name, node) = match path {
        Some(p) => (p.to_string(), container.taxonomy.resolve(p)?),
        None => (
            container.taxonomy.source().to_string(),
            container.taxonomy.tree(),
        ),
    };
    output::info(&node.to_tree_string(&name));
    Ok(())
}

#[instrument(skip(container))]
fn cmd_flatten(container: &ServiceContainer, prefix: Option<&str>) -> CliResult<()> {
    let index = container.taxonomy.flatten(prefix)?;
    for (path, label) in &index {
        output::entry(path, label);
    }
    debug!("flatten: {} entries", index.len());
    Ok(())
}

#[instrument(skip(container))]
fn cmd_resolve(container: &ServiceContainer, path: &str) -> CliResult<()> {
    let node = container.taxonomy.resolve(path)?;
    match node {
        CategoryNode::Leaf(label) => output::info(label),
        CategoryNode::Branch(children) => {
            output::header(&format!(
                "{path} is a category ({} relationships)",
                node.leaf_count()
            ));
            let names = children.keys().join(", ");
            output::detail(&names);
        }
    }
    Ok(())
}

fn cmd_ledger(container: &ServiceContainer, command: &LedgerCommands) -> CliResult<()> {
    let ledger = &container.ledger;
    match command {
        LedgerCommands::Init { file, name } => {
            let path = ledger.init(file, name)?;
            output::success(&format!("Created ledger for {name}: {}", path.display()));
        }
        LedgerCommands::Add {
            file,
            person,
            relationship,
            category,
        } => {
            let record = ledger.add(
                file,
                container.taxonomy.tree(),
                person,
                relationship,
                category,
            )?;
            if !relationship.starts_with(category.as_str()) {
                output::warning(&format!(
                    "category {category:?} is not a prefix of {relationship:?}"
                ));
            }
            output::success(&format!(
                "Added {}: {}",
                record.person_name, record.relationship
            ));
        }
        LedgerCommands::Find { file, prefix } => {
            let prefix = prefix.as_deref().unwrap_or("");
            let records = ledger.find(file, prefix)?;
            if records.is_empty() {
                output::warning(&format!("no relationships under {prefix:?}"));
            }
            records.iter().for_each(output::record);
        }
        LedgerCommands::Show { file } => {
            let person = ledger.load(file)?;
            output::header(&format!(
                "{} ({} relationships)",
                person.name,
                person.relationships.len()
            ));
            person.relationships.iter().for_each(output::record);
        }
    }
    Ok(())
}

fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            let path = cli.config.clone().or_else(global_config_path);
            match path {
                Some(p) => {
                    let state = if p.exists() { "exists" } else { "not found" };
                    output::info(&format!("{} ({state})", p.display()));
                }
                None => output::warning("no config directory available on this platform"),
            }
        }
        ConfigCommands::Init { force } => {
            let path = cli
                .config
                .clone()
                .or_else(global_config_path)
                .ok_or_else(|| CliError::Usage("cannot determine config path".to_string()))?;
            write_template(&path, *force)?;
            output::success(&format!("Created config: {}", path.display()));
        }
    }
    Ok(())
}

fn write_template(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::Usage(format!(
            "config already exists: {} (use --force)",
            path.display()
        )));
    }
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| InfraError::io(format!("create {}", dir.display()), e))?;
    }
    std::fs::write(path, Settings::template())
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
    Ok(())
}
