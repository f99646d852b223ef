use anyhow::Result;
use clap::{Parser, Subcommand};
use testit_core::Mocker;

use crate::commands::{init_command, parse_type_command, scaffold_command};

#[derive(Parser, Debug)]
#[command(name = "testit")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a type signature and show how it is understood
    #[command(visible_alias = "p")]
    ParseType {
        /// Type signature, e.g. "Map<String, List<Data?>>?"
        signature: String,

        /// Print the parsed tree instead of the formatted spellings
        #[arg(short, long)]
        tree: bool,
    },
    /// Generate mock scaffolding from extracted metadata
    #[command(visible_alias = "s")]
    Scaffold {
        /// Metadata JSON file, or a directory searched for *.json files
        path: String,

        /// Mocking framework, overriding the config file
        #[arg(short, long, value_parser = parse_mocker)]
        mocker: Option<Mocker>,

        /// Config file to use instead of searching above the metadata path
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Write a default .testit.json
    Init {
        /// Specify the current working directory
        #[arg(long)]
        cwd: Option<String>,

        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_mocker(value: &str) -> Result<Mocker, String> {
    serde_json::from_value(serde_json::Value::String(value.to_string())).map_err(|e| e.to_string())
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::ParseType { signature, tree } => parse_type_command(&signature, tree),
            Commands::Scaffold {
                path,
                mocker,
                config,
            } => scaffold_command(&path, mocker, config.as_deref()),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
