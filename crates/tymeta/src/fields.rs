// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Field enumeration for named structs.
//!
//! [`Fields`] hands downstream compile-time code a struct's field layout as a
//! descriptor sequence plus the matching names, in declaration order. It is
//! normally implemented with `#[derive(Fields)]` rather than by hand; the
//! derive lives in `tymeta-codegen` and is re-exported at the crate root.
//!
//! ```
//! use tymeta::{CountMatching, False, Fields, Sequence, True, TypeFn};
//!
//! #[derive(Fields)]
//! struct Person {
//!     fullname: String,
//!     height: f32,
//!     age: f32,
//! }
//!
//! assert_eq!(<<Person as Fields>::Members as Sequence>::LEN, 3);
//! assert_eq!(<Person as Fields>::NAMES, &["fullname", "height", "age"][..]);
//!
//! // The member sequence feeds straight into the sequence algebra:
//! struct IsFloat;
//! impl TypeFn<String> for IsFloat { type Output = False; }
//! impl TypeFn<f32> for IsFloat { type Output = True; }
//!
//! assert_eq!(<<Person as Fields>::Members as CountMatching<IsFloat>>::MATCHES, 2);
//! ```

use crate::seq::Sequence;

/// Compile-time enumeration of a struct's fields.
pub trait Fields {
    /// Field value types in declaration order.
    type Members: Sequence;
    /// Field names, index-aligned with [`Members`](Fields::Members).
    const NAMES: &'static [&'static str];
}
