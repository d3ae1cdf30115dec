#![forbid(unsafe_code)]

use clap::Parser;
use serde::Deserialize;
use std::io;
use tracing_subscriber::prelude::*;

/// The configuration we may load from the filesystem. Every table is optional; an absent file
/// yields the defaults.
#[derive(Deserialize, Debug, Default)]
struct Configuration {
  /// The configuration used by our http server.
  #[serde(default)]
  http: crumb::server::Configuration,
}

#[derive(Parser)]
#[clap(version = option_env!("CRUMB_VERSION").unwrap_or("dev"))]
struct CommandLineArguments {
  /// Path to a toml configuration file.
  #[clap(long, short)]
  config: Option<String>,
}

fn parse(contents: &str) -> io::Result<Configuration> {
  let config = toml::from_str::<Configuration>(contents)?;
  Ok(config)
}

fn load(path: &str) -> io::Result<Configuration> {
  let contents = std::fs::read_to_string(path)?;
  parse(contents.as_str())
}

fn main() -> io::Result<()> {
  if let Err(error) = dotenv::dotenv() {
    eprintln!("no '.env' file found ({error})");
  }

  let arguments = CommandLineArguments::parse();
  let config = match arguments.config {
    Some(path) => load(&path)?,
    None => Configuration::default(),
  };

  let filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

  tracing_subscriber::registry()
    .with(tracing_subscriber::fmt::layer())
    .with(filter)
    .init();

  tracing::event!(tracing::Level::INFO, "configuration ready, running application");
  tracing::event!(tracing::Level::DEBUG, "{config:?}");

  async_std::task::block_on(crumb::server::start(config.http)).map_err(|error| {
    tracing::error!("http server terminated - {error}");
    error
  })
}
