//! Helpers around the `cookie` crate types re-exported by `tide`. Outgoing cookies are built as
//! `Cookie` values and rendered with its `Display`; incoming `Cookie` headers are searched for a
//! cookie by name.

pub use tide::http::cookies::{Cookie, SameSite};

/// Returns a cookie with no attributes whose value is quoted when it holds a space or comma, so
/// that browsers keep it as a single value.
pub fn new<N, V>(name: N, value: V) -> Cookie<'static>
where
  N: Into<String>,
  V: AsRef<str>,
{
  let value = value.as_ref();

  if value.contains(' ') || value.contains(',') {
    return Cookie::new(name.into(), format!("\"{value}\""));
  }

  Cookie::new(name.into(), value.to_string())
}

/// Maps a lifetime in seconds onto the `Max-Age` attribute: `0` means none, negative means
/// "delete now" (`Max-Age=0` on the wire) and positive is the lifetime itself.
pub fn max_age(seconds: i64) -> Option<time::Duration> {
  match seconds {
    0 => None,
    seconds if seconds < 0 => Some(time::Duration::seconds(0)),
    seconds => Some(time::Duration::seconds(seconds)),
  }
}

/// Checks that the name is an http token and that the unquoted value and the path hold nothing
/// that would break a `Set-Cookie` header. Purely diagnostic.
pub fn valid(cookie: &Cookie) -> Result<(), String> {
  let name = cookie.name();

  if name.is_empty() || !name.bytes().all(is_token_byte) {
    return Err(format!("invalid cookie name '{name}'"));
  }

  if let Some(byte) = unquote(cookie.value()).bytes().find(|b| !is_value_byte(*b)) {
    return Err(format!("invalid byte {byte:#04x} in cookie value"));
  }

  let path = cookie.path().unwrap_or_default();
  if let Some(byte) = path.bytes().find(|b| !(0x20..0x7f).contains(b) || *b == b';') {
    return Err(format!("invalid byte {byte:#04x} in cookie path"));
  }

  Ok(())
}

/// The two ways looking up a cookie in a request can go wrong.
#[derive(Debug, PartialEq, Eq)]
pub enum LookupError {
  /// The request did not carry the cookie at all.
  NotFound,

  /// The `Cookie` header could not be parsed. Holds a description of the failure that is meant
  /// for our logs, not the client.
  Internal(String),
}

impl std::fmt::Display for LookupError {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Self::NotFound => write!(formatter, "no such cookie"),
      Self::Internal(detail) => write!(formatter, "cookie lookup failed - {detail}"),
    }
  }
}

impl std::error::Error for LookupError {}

/// Searches the raw `Cookie` header values of a request for the cookie named `name`, returning its
/// value with any surrounding double quotes removed.
///
/// Pairs that fail to parse (including a bare name without `=`) are skipped while searching; they
/// only surface as a `LookupError::Internal` when the cookie we are after is not found among the
/// rest.
pub fn find<'a, I>(headers: I, name: &str) -> Result<String, LookupError>
where
  I: IntoIterator<Item = &'a str>,
{
  let mut failure = None;

  for header in headers {
    for pair in header.split(';').map(str::trim).filter(|pair| !pair.is_empty()) {
      let parsed = match Cookie::parse(pair) {
        Ok(parsed) => parsed,
        Err(error) => {
          failure = Some(format!("unable to parse cookie pair '{pair}' - {error}"));
          continue;
        }
      };

      if parsed.name() == name {
        return Ok(unquote(parsed.value()).to_string());
      }
    }
  }

  match failure {
    Some(detail) => Err(LookupError::Internal(detail)),
    None => Err(LookupError::NotFound),
  }
}

fn unquote(value: &str) -> &str {
  if value.len() > 1 && value.starts_with('"') && value.ends_with('"') {
    return &value[1..value.len() - 1];
  }

  value
}

/// The `token` grammar used by http header names.
fn is_token_byte(byte: u8) -> bool {
  byte.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&byte)
}

/// Printable ascii minus the characters that would break a `Set-Cookie` header.
fn is_value_byte(byte: u8) -> bool {
  (0x20..0x7f).contains(&byte) && byte != b'"' && byte != b';' && byte != b'\\'
}

#[cfg(test)]
mod tests {
  use super::{find, max_age, new, valid, LookupError, SameSite};

  #[test]
  fn quotes_values_with_spaces() {
    assert_eq!(new("exampleCookie", "Hello Shubham Mishra!").value(), "\"Hello Shubham Mishra!\"");
    assert_eq!(new("a", "plain").value(), "plain");
    assert_eq!(new("a", "one,two").value(), "\"one,two\"");
  }

  #[test]
  fn renders_through_the_cookie_crate() {
    let mut cookie = new("exampleCookie", "");
    cookie.set_path("/");
    cookie.set_max_age(max_age(-1));
    cookie.set_http_only(true);

    let rendered = cookie.to_string();
    let mut attributes = rendered.split("; ").collect::<Vec<&str>>();
    assert_eq!(attributes.remove(0), "exampleCookie=");
    attributes.sort_unstable();
    assert_eq!(attributes, vec!["HttpOnly", "Max-Age=0", "Path=/"]);
  }

  #[test]
  fn max_age_semantics() {
    assert_eq!(max_age(0), None);
    assert_eq!(max_age(-1), Some(time::Duration::seconds(0)));
    assert_eq!(max_age(3600), Some(time::Duration::seconds(3600)));
  }

  #[test]
  fn validity() {
    let mut cookie = new("exampleCookie", "Hello Shubham Mishra!");
    cookie.set_path("/");
    cookie.set_same_site(SameSite::Lax);
    assert_eq!(valid(&cookie), Ok(()));

    assert!(valid(&new("bad name", "value")).is_err());
    assert!(valid(&new("a", "back\\slash")).is_err());

    let mut cookie = new("a", "b");
    cookie.set_path("/a\u{7f}");
    assert!(valid(&cookie).is_err());
  }

  #[test]
  fn find_strips_quotes() {
    let headers = ["other=1; exampleCookie=\"Hello Shubham Mishra!\""];
    assert_eq!(
      find(headers, "exampleCookie"),
      Ok("Hello Shubham Mishra!".to_string())
    );
  }

  #[test]
  fn find_searches_every_header_value() {
    let headers = ["first=1", "second=2;", "exampleCookie=three"];
    assert_eq!(find(headers, "exampleCookie"), Ok("three".to_string()));
  }

  #[test]
  fn find_missing() {
    assert_eq!(find(["a=b; c=d"], "exampleCookie"), Err(LookupError::NotFound));
    assert_eq!(find(Vec::<&str>::new(), "exampleCookie"), Err(LookupError::NotFound));
    assert_eq!(find([" ; ;"], "exampleCookie"), Err(LookupError::NotFound));
  }

  #[test]
  fn find_empty_value() {
    assert_eq!(find(["exampleCookie="], "exampleCookie"), Ok(String::new()));
  }

  #[test]
  fn find_malformed() {
    let result = find(["=nameless"], "exampleCookie");
    assert!(matches!(result, Err(LookupError::Internal(_))));

    let result = find(["exampleCookie"], "exampleCookie");
    assert!(matches!(result, Err(LookupError::Internal(_))));

    // A malformed neighbour does not hide a well formed match.
    assert_eq!(find(["garbage; exampleCookie=ok"], "exampleCookie"), Ok("ok".to_string()));
  }
}
