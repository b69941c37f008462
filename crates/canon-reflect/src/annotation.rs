// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Type-erased annotation values.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::TypeToken;

/// An annotation attached to a declaration.
///
/// Any `'static + Send + Sync` value can serve as an annotation; callers
/// recover it by type with [`downcast_ref`](Annotation::downcast_ref).
/// Clones share the same value.
#[derive(Clone)]
pub struct Annotation {
    value: Arc<dyn Any + Send + Sync>,
    ty: TypeToken,
}

impl Annotation {
    /// Erase `value` into an annotation.
    pub fn new<A: Any + Send + Sync>(value: A) -> Self {
        Self {
            value: Arc::new(value),
            ty: TypeToken::of::<A>(),
        }
    }

    /// The annotation's concrete type.
    pub const fn annotation_type(&self) -> TypeToken {
        self.ty
    }

    /// Returns `true` if the annotation is an `A`.
    pub fn is<A: Any>(&self) -> bool {
        self.value.is::<A>()
    }

    /// The annotation as an `A`, if it is one.
    pub fn downcast_ref<A: Any>(&self) -> Option<&A> {
        self.value.downcast_ref::<A>()
    }
}

impl fmt::Debug for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Named(&'static str);

    #[test]
    fn downcasts_to_original_type() {
        let a = Annotation::new(Named("id"));
        assert!(a.is::<Named>());
        assert!(!a.is::<u8>());
        assert_eq!(a.downcast_ref::<Named>(), Some(&Named("id")));
        assert_eq!(a.downcast_ref::<u8>(), None);
        assert!(a.annotation_type().is::<Named>());
    }

    #[test]
    fn clones_share_value() {
        let a = Annotation::new(7u32);
        let b = a.clone();
        assert!(std::ptr::eq(
            a.downcast_ref::<u32>().unwrap_or(&0),
            b.downcast_ref::<u32>().unwrap_or(&1)
        ));
    }
}
