//! Command-line interface.
//!
//! Each command lives in its own module with an `execute` function. Global
//! flags are folded into [`Options`] by [`GlobalArgs::options`].

pub mod edit;
pub mod generate_key;
pub mod get;
pub mod output;
pub mod show;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::core::config::Options;
use crate::core::format::Serializer;
use crate::error::Result;

/// Lockbox - encrypted configuration you can commit.
#[derive(Parser)]
#[command(
    name = "lockbox",
    about = "Encrypted configuration documents you can commit, read, and edit in place",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags shared by every command.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Options file (defaults to lockbox.toml if present)
    #[arg(long, global = true, value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Encrypted document path
    #[arg(long, global = true, value_name = "PATH")]
    pub content: Option<PathBuf>,

    /// Key file path
    #[arg(long, global = true, value_name = "PATH")]
    pub key: Option<PathBuf>,

    /// Environment variable holding the key
    #[arg(long, global = true, value_name = "NAME")]
    pub env_key: Option<String>,

    /// Plaintext format (yaml or json)
    #[arg(long, global = true, value_name = "FORMAT")]
    pub format: Option<Serializer>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Build options: the options file first, then flag overrides.
    pub fn options(&self) -> Result<Options> {
        let mut options = match &self.config {
            Some(path) => Options::load(path)?,
            None => {
                let default = Options::config_file();
                if default.is_file() {
                    Options::load(&default)?
                } else {
                    Options::default()
                }
            }
        };

        if let Some(content) = &self.content {
            options.config_path = content.clone();
        }
        if let Some(key) = &self.key {
            options.key_path = key.clone();
        }
        if let Some(env_key) = &self.env_key {
            options.env_key = Some(env_key.clone());
        }
        if let Some(format) = self.format {
            options.serializer = format;
        }

        options.validate()?;
        debug!(?options, "resolved options");
        Ok(options)
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a new key
    GenerateKey {
        /// Write the key to the key path instead of printing it
        #[arg(short, long)]
        write: bool,
    },

    /// Print the decrypted document
    Show,

    /// Print the value at a key path
    Get {
        /// Key path segments (e.g. `aws access_key_id`)
        #[arg(required = true)]
        path: Vec<String>,
    },

    /// Edit the decrypted document in $EDITOR
    Edit,
}

/// Execute a command.
///
/// # Errors
///
/// Returns error if option resolution or the command fails.
pub fn execute(command: Command, global: &GlobalArgs) -> Result<()> {
    let options = global.options()?;

    match command {
        Command::GenerateKey { write } => generate_key::execute(&options, write),
        Command::Show => show::execute(options),
        Command::Get { path } => get::execute(options, &path),
        Command::Edit => edit::execute(options),
    }
}
