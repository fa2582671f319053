mod log;

use std::{
	path::{Path, PathBuf},
	time::SystemTime,
};

use anyhow::Context;
use cax_token::{DEFAULT_ISSUER, DEFAULT_VALIDITY, PrivateKey, Token};
use clap::Parser;

use crate::log::Log;

const DEFAULT_KEY_PATH: &str = "./scripts/private_key.pem";

/// Issue a short-lived RS256 service token and print it to stdout.
#[derive(Parser, Clone, Debug)]
#[command(name = "cax-token", version, about)]
struct Cli {
	#[command(flatten)]
	log: Log,

	/// Path to the PEM encoded RSA private key.
	#[arg(long, env = "PRIVATE_KEY_PATH", default_value = DEFAULT_KEY_PATH)]
	key: PathBuf,
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	cli.log.init();

	let token = run(&cli.key, SystemTime::now())?;
	println!("{token}");

	Ok(())
}

fn run(path: &Path, now: SystemTime) -> anyhow::Result<Token> {
	tracing::debug!(path = %path.display(), "loading key");

	let key = PrivateKey::from_file(path).with_context(|| format!("failed to load key from {}", path.display()))?;
	let token = cax_token::issue(&key, DEFAULT_ISSUER, DEFAULT_VALIDITY, now).context("failed to issue token")?;

	tracing::info!(bits = key.bits(), issuer = DEFAULT_ISSUER, validity = ?DEFAULT_VALIDITY, "issued token");

	Ok(token)
}
