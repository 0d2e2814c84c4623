// ── Degradable listings ──

use crate::error::CoreError;

/// Result of a listing that degrades instead of failing.
///
/// `Degraded` keeps the swallowed error so callers that care can tell
/// "legitimately empty" from "could not determine".
#[derive(Debug)]
pub enum Listing<T> {
    Found(Vec<T>),
    Degraded(CoreError),
}

impl<T> Listing<T> {
    /// The items, or an empty list when degraded.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Found(items) => items,
            Self::Degraded(_) => Vec::new(),
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Self::Found(items) => items,
            Self::Degraded(_) => &[],
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded(_))
    }

    pub fn error(&self) -> Option<&CoreError> {
        match self {
            Self::Found(_) => None,
            Self::Degraded(err) => Some(err),
        }
    }
}

impl<T> From<Result<Vec<T>, CoreError>> for Listing<T> {
    fn from(result: Result<Vec<T>, CoreError>) -> Self {
        match result {
            Ok(items) => Self::Found(items),
            Err(err) => Self::Degraded(err),
        }
    }
}
