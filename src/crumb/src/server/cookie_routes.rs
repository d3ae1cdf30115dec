use super::{constants, shared_state};
use crate::cookies;
use tide::http::headers;

/// Builds a plain-text response with the given status.
fn text(status: u16, body: &str) -> tide::Response {
  tide::Response::builder(status).body(body).build()
}

/// route: writes our cookie with a fixed value and a one hour lifetime.
pub(super) async fn set(request: tide::Request<shared_state::SharedState>) -> tide::Result {
  let span = tracing::span!(parent: &request.state().span, tracing::Level::INFO, "set");

  let mut cookie = cookies::new(constants::COOKIE_NAME, constants::COOKIE_VALUE);
  cookie.set_path(constants::COOKIE_PATH);
  cookie.set_max_age(cookies::max_age(constants::COOKIE_MAX_AGE));
  cookie.set_http_only(true);
  cookie.set_secure(true);
  cookie.set_same_site(cookies::SameSite::Lax);

  tracing::event!(parent: &span, tracing::Level::INFO, "{cookie}");
  tracing::event!(parent: &span, tracing::Level::INFO, "valid: {:?}", cookies::valid(&cookie));
  tracing::event!(parent: &span, tracing::Level::INFO, "{}", cookie.value());

  let response = tide::Response::builder(200)
    .header(headers::SET_COOKIE, cookie.to_string())
    .body(constants::SET_MESSAGE)
    .build();

  Ok(response)
}

/// route: echoes the value of our cookie back to the client.
pub(super) async fn get(request: tide::Request<shared_state::SharedState>) -> tide::Result {
  let span = tracing::span!(parent: &request.state().span, tracing::Level::INFO, "get");

  let raw = request
    .header(headers::COOKIE)
    .map(|values| values.iter().map(|value| value.as_str()).collect::<Vec<&str>>())
    .unwrap_or_default();

  let response = match cookies::find(raw, constants::COOKIE_NAME) {
    Ok(value) => text(200, &value),
    Err(cookies::LookupError::NotFound) => {
      tracing::event!(parent: &span, tracing::Level::DEBUG, "request without '{}'", constants::COOKIE_NAME);
      text(400, constants::NOT_FOUND_MESSAGE)
    }
    Err(error) => {
      tracing::event!(parent: &span, tracing::Level::WARN, "{error}");
      text(500, constants::SERVER_ERROR_MESSAGE)
    }
  };

  Ok(response)
}

/// route: instructs the client to drop our cookie immediately.
pub(super) async fn clear(request: tide::Request<shared_state::SharedState>) -> tide::Result {
  let span = tracing::span!(parent: &request.state().span, tracing::Level::INFO, "clear");

  let mut cookie = cookies::new(constants::COOKIE_NAME, "");
  cookie.set_path(constants::COOKIE_PATH);
  cookie.set_max_age(cookies::max_age(-1));
  cookie.set_http_only(true);

  tracing::event!(parent: &span, tracing::Level::DEBUG, "clearing cookie via {cookie}");

  let response = tide::Response::builder(200)
    .header(headers::SET_COOKIE, cookie.to_string())
    .body(constants::CLEAR_MESSAGE)
    .build();

  Ok(response)
}
