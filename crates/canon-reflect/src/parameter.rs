// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! One parameter of a declared callable.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::{Annotation, Invokable, TypeToken};

/// A parameter of an [`Invokable`], obtained from
/// [`Invokable::parameters`] or [`Invokable::parameter`].
///
/// Two parameters are equal when they sit at the same position of equal
/// invokables. The hash is the position alone, so parameters at one position
/// of different invokables collide but never compare equal.
#[derive(Clone)]
pub struct Parameter {
    declaration: Invokable,
    position: usize,
    ty: TypeToken,
    annotations: Arc<[Annotation]>,
}

impl Parameter {
    pub(crate) fn new(
        declaration: Invokable,
        position: usize,
        ty: TypeToken,
        annotations: Arc<[Annotation]>,
    ) -> Self {
        Self {
            declaration,
            position,
            ty,
            annotations,
        }
    }

    /// Declared type.
    pub const fn type_token(&self) -> TypeToken {
        self.ty
    }

    /// The callable that declares this parameter.
    pub const fn declaring_invokable(&self) -> &Invokable {
        &self.declaration
    }

    /// Zero-based position in the parameter list.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// First annotation of type `A`, if any.
    pub fn annotation<A: Any>(&self) -> Option<&A> {
        self.annotations
            .iter()
            .find_map(Annotation::downcast_ref::<A>)
    }

    /// Returns `true` if an annotation of type `A` is present.
    pub fn is_annotation_present<A: Any>(&self) -> bool {
        self.annotations.iter().any(Annotation::is::<A>)
    }

    /// Every annotation of type `A`, in declaration order.
    pub fn annotations_by_type<A: Any>(&self) -> Vec<&A> {
        self.annotations
            .iter()
            .filter_map(Annotation::downcast_ref::<A>)
            .collect()
    }

    /// All annotations, in declaration order.
    pub fn declared_annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.declaration == other.declaration
    }
}

impl Eq for Parameter {}

impl Hash for Parameter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("position", &self.position)
            .field("type", &self.ty)
            .field("annotations", &self.annotations)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} arg{}", self.ty, self.position)
    }
}
