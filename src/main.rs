//! Lockbox - encrypted configuration you can commit.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lockbox::cli::output;
use lockbox::cli::{execute, Cli};
use lockbox::error::{CipherError, Error, KeyError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("LOCKBOX_LOG").unwrap_or_else(|_| {
        if cli.global.verbose {
            EnvFilter::new("lockbox=debug")
        } else {
            EnvFilter::new("lockbox=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command, &cli.global) {
        let suggestion = match &e {
            Error::Key(KeyError::Unavailable { .. }) => {
                Some("run: lockbox generate-key --write, or set the env key")
            }
            Error::Key(KeyError::AlreadyExists(_)) => Some("remove the existing key file first"),
            Error::Cipher(CipherError::DecryptionFailed(_)) => {
                Some("check that the key matches the one the document was encrypted with")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
