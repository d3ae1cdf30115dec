//! This module contains the type that is shared across request tasks.

/// Nothing in here is mutable; every request works off its own clone.
#[derive(Clone)]
pub struct SharedState {
  /// The server-wide span that each route parents its own span on.
  pub(super) span: tracing::Span,
}
