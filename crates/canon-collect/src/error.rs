// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Collection errors.

use std::fmt;

/// A value was compared by an [`ExplicitOrdering`](crate::ExplicitOrdering)
/// that does not rank it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("cannot compare value: {value:?}")]
pub struct IncomparableValueError<T: fmt::Debug> {
    value: T,
}

impl<T: fmt::Debug> IncomparableValueError<T> {
    pub(crate) fn new(value: T) -> Self {
        Self { value }
    }

    /// The value that has no rank.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume the error, returning the offending value.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Errors raised by immutable-set construction and copy-out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectError {
    /// A required element was absent.
    #[error("element must be present")]
    MissingElement,
    /// Copy-out offset past the end of the destination.
    #[error("offset {offset} out of bounds for destination of length {len}")]
    OutOfRange {
        /// Requested write offset.
        offset: usize,
        /// Destination length.
        len: usize,
    },
}
