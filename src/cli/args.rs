//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Relationship category taxonomy: browse, resolve, and keep per-person ledgers
#[derive(Parser, Debug)]
#[command(name = "relcat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Config file (default: $XDG_CONFIG_HOME/relcat/relcat.toml)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the taxonomy (or a subtree) as a tree
    Tree {
        /// Category path (default: whole taxonomy)
        path: Option<String>,
    },

    /// List every relationship as `path = Label`
    Flatten {
        /// Only relationships under this category path
        #[arg(short, long)]
        prefix: Option<String>,
    },

    /// Resolve a dotted path to a label or category
    Resolve {
        /// Dotted path, e.g. serviceProviders.health.medical.dentist
        path: String,
    },

    /// Manage person relationship ledgers
    Ledger {
        #[command(subcommand)]
        command: LedgerCommands,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum LedgerCommands {
    /// Create an empty ledger for a person
    Init {
        /// Ledger file (bare names go to ledger_dir)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Name of the person the ledger belongs to
        #[arg(short, long)]
        name: String,
    },

    /// Add a relationship resolved from the taxonomy
    Add {
        /// Ledger file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Name of the related person
        person: String,
        /// Path to a relationship label, e.g. serviceProviders.home.contractor
        relationship: String,
        /// Category to file the relationship under, e.g. serviceProviders.home
        category: String,
    },

    /// List relationships whose category starts with a prefix
    Find {
        /// Ledger file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Category prefix (plain string prefix, not segment-aware; default: all)
        prefix: Option<String>,
    },

    /// List all relationships in a ledger
    Show {
        /// Ledger file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config paths
    Path,
}
