use serde::Deserialize;

fn default_addr() -> String {
  super::constants::DEFAULT_ADDR.to_string()
}

/// The main configuration schema for the http server.
#[derive(Deserialize, Debug, Clone)]
pub struct Configuration {
  /// The address to bind our tcp stream to.
  #[serde(default = "default_addr")]
  pub(super) addr: String,
}

impl Default for Configuration {
  fn default() -> Self {
    Self { addr: default_addr() }
  }
}
