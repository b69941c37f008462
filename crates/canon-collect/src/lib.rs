// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Immutable collection primitives.
//!
//! - [`ExplicitOrdering`]: a total order over an explicit list of values,
//!   comparing by rank. Values outside the list are incomparable and every
//!   operation that meets one fails with [`IncomparableValueError`].
//! - [`SingletonSet`]: the one-element [`ImmutableSet`].
//!
//! Everything here is immutable after construction and safe to share across
//! threads when the element type is.
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

mod error;
mod ordering;
mod set;
mod singleton;

pub use error::{CollectError, IncomparableValueError};
pub use ordering::{ExplicitOrdering, ReverseOrdering};
pub use set::ImmutableSet;
pub use singleton::SingletonSet;
