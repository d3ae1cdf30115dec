//! This module contains the `tide` server and the routes that read and write our cookie.

use std::io;

/// The routes that set, read and clear our cookie.
mod cookie_routes;

/// Contains configuration structure.
mod configuration;

/// Cookie literals and other compile-time constants.
mod constants;

/// The shared "request runtime" types.
mod shared_state;

pub use configuration::Configuration;
pub use shared_state::SharedState;

/// Builds the `tide` application with all of our routes registered. Every route accepts any
/// method.
pub fn app() -> tide::Server<SharedState> {
  let span = tracing::span!(tracing::Level::INFO, "http/web");

  let mut app = tide::with_state(SharedState { span });
  app.at("/set").all(cookie_routes::set);
  app.at("/get").all(cookie_routes::get);
  app.at("/clear").all(cookie_routes::clear);
  app
}

/// Binds the configured address and serves requests until the listener fails.
pub async fn start(config: Configuration) -> io::Result<()> {
  let Configuration { addr } = config;
  let app = app();

  // Browsers will not store a `Secure` cookie received over plain http, which is all we serve.
  tracing::warn!("'/set' marks its cookie Secure but this server does not terminate tls");
  tracing::info!("listening on {addr}");

  app.listen(&addr).await
}
