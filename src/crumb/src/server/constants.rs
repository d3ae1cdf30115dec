/// The name of the one cookie our routes deal with.
pub(super) const COOKIE_NAME: &str = "exampleCookie";

/// The value written by the `/set` route.
pub(super) const COOKIE_VALUE: &str = "Hello Shubham Mishra!";

/// Lifetime of the cookie written by `/set`, in seconds.
pub(super) const COOKIE_MAX_AGE: i64 = 3600;

/// Cookies are scoped to the whole site.
pub(super) const COOKIE_PATH: &str = "/";

pub(super) const SET_MESSAGE: &str = "cookie set!";
pub(super) const CLEAR_MESSAGE: &str = "Cookies Cleard Now!";
pub(super) const NOT_FOUND_MESSAGE: &str = "cookie not found";
pub(super) const SERVER_ERROR_MESSAGE: &str = "server error";

/// Used when the configuration does not name an address to bind to.
pub(super) const DEFAULT_ADDR: &str = "0.0.0.0:3000";
