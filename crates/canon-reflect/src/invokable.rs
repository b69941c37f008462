// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Declared callables.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::{Annotation, Parameter, ReflectError, TypeToken};

#[derive(Clone)]
struct Declared {
    ty: TypeToken,
    annotations: Arc<[Annotation]>,
}

#[derive(Clone)]
struct Signature {
    owner: TypeToken,
    name: String,
    params: Vec<Declared>,
}

/// A callable declared on some owner type.
///
/// Cheap to clone; clones share one declaration. Two invokables are equal
/// when owner, name and parameter types match. Annotations do not take part.
#[derive(Clone)]
pub struct Invokable {
    sig: Arc<Signature>,
}

impl Invokable {
    /// A callable named `name` on `owner`, with no parameters yet.
    pub fn new(owner: TypeToken, name: impl Into<String>) -> Self {
        Self {
            sig: Arc::new(Signature {
                owner,
                name: name.into(),
                params: Vec::new(),
            }),
        }
    }

    /// Append a parameter of type `ty` carrying `annotations`.
    #[must_use]
    pub fn with_parameter<I>(mut self, ty: TypeToken, annotations: I) -> Self
    where
        I: IntoIterator<Item = Annotation>,
    {
        Arc::make_mut(&mut self.sig).params.push(Declared {
            ty,
            annotations: annotations.into_iter().collect(),
        });
        self
    }

    /// The declaring type.
    pub fn owner(&self) -> TypeToken {
        self.sig.owner
    }

    /// The callable's name.
    pub fn name(&self) -> &str {
        &self.sig.name
    }

    /// Number of declared parameters.
    pub fn parameter_count(&self) -> usize {
        self.sig.params.len()
    }

    /// Declared parameter types, in order.
    pub fn parameter_types(&self) -> impl Iterator<Item = TypeToken> + '_ {
        self.sig.params.iter().map(|p| p.ty)
    }

    /// All parameters, in declaration order.
    pub fn parameters(&self) -> Vec<Parameter> {
        self.sig
            .params
            .iter()
            .enumerate()
            .map(|(position, p)| self.make_parameter(position, p))
            .collect()
    }

    /// The parameter at `position`.
    pub fn parameter(&self, position: usize) -> Result<Parameter, ReflectError> {
        self.sig
            .params
            .get(position)
            .map(|p| self.make_parameter(position, p))
            .ok_or(ReflectError::PositionOutOfRange {
                position,
                len: self.sig.params.len(),
            })
    }

    fn make_parameter(&self, position: usize, declared: &Declared) -> Parameter {
        Parameter::new(
            self.clone(),
            position,
            declared.ty,
            Arc::clone(&declared.annotations),
        )
    }
}

impl PartialEq for Invokable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.sig, &other.sig)
            || (self.sig.owner == other.sig.owner
                && self.sig.name == other.sig.name
                && self.parameter_types().eq(other.parameter_types()))
    }
}

impl Eq for Invokable {}

impl Hash for Invokable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sig.owner.hash(state);
        self.sig.name.hash(state);
        for ty in self.parameter_types() {
            ty.hash(state);
        }
    }
}

impl fmt::Debug for Invokable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invokable")
            .field("owner", &self.sig.owner)
            .field("name", &self.sig.name)
            .field("params", &self.parameter_types().collect::<Vec<_>>())
            .finish()
    }
}

impl fmt::Display for Invokable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}(", self.sig.owner, self.sig.name)?;
        for (i, ty) in self.parameter_types().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{ty}")?;
        }
        f.write_str(")")
    }
}
