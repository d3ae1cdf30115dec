#![forbid(unsafe_code)]

//! A small http server that sets, reads and clears a single cookie.

/// The outgoing cookie model, its `Set-Cookie` rendering and lookup of cookies by name in a
/// request's `Cookie` header.
pub mod cookies;

/// The `tide` application and its routes.
pub mod server;
