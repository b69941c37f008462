// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Parameter descriptors for declared callables.
//!
//! An [`Invokable`] describes a callable: the type that owns it, its name and
//! the declared type and annotations of each parameter. [`Parameter`] is one
//! of those parameters seen from the outside, carrying a handle back to its
//! declaring invokable.
//!
//! Types are identified by [`TypeToken`] (a `TypeId` plus the type name) and
//! annotations are arbitrary `'static` values erased behind [`Annotation`].
//!
//! ```
//! use canon_reflect::{Annotation, Invokable, TypeToken};
//!
//! struct Store;
//! struct Nullable;
//!
//! let get = Invokable::new(TypeToken::of::<Store>(), "get")
//!     .with_parameter(TypeToken::of::<u64>(), [])
//!     .with_parameter(TypeToken::of::<String>(), [Annotation::new(Nullable)]);
//!
//! let params = get.parameters();
//! assert_eq!(params.len(), 2);
//! assert!(!params[0].is_annotation_present::<Nullable>());
//! assert!(params[1].is_annotation_present::<Nullable>());
//! assert_eq!(params[0].to_string(), "u64 arg0");
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self,
    clippy::cognitive_complexity,
    clippy::option_if_let_else,
    clippy::significant_drop_tightening,
    clippy::doc_markdown,
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    clippy::needless_collect,
    clippy::too_long_first_doc_paragraph,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::similar_names,
    clippy::trivially_copy_pass_by_ref,
    clippy::manual_let_else,
    clippy::needless_pass_by_value
)]

mod annotation;
mod invokable;
mod parameter;
mod token;

pub use annotation::Annotation;
pub use invokable::Invokable;
pub use parameter::Parameter;
pub use token::TypeToken;

/// Errors raised when looking up parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReflectError {
    /// Requested parameter position is past the last declared parameter.
    #[error("parameter position {position} out of range for {len} parameter(s)")]
    PositionOutOfRange {
        /// Requested position.
        position: usize,
        /// Number of declared parameters.
        len: usize,
    },
}
