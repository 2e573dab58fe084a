// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # tymeta - Compile-Time Type Introspection
//!
//! Type-level sequences plus structural descriptors for callables, members,
//! and struct fields, all resolved while the program is translated. Nothing
//! in this crate produces runtime code or data; it is the foundation layer
//! for reflection-style tooling (serializers, dependency injectors, ORMs)
//! that enumerates a type's fields and methods without runtime cost.
//!
//! ## Quick Start
//!
//! ```rust
//! # #![allow(dead_code)]
//! use tymeta::{Callable, Fields, Member, Owner, Sequence};
//!
//! #[derive(Fields)]
//! struct Person {
//!     fullname: String,
//!     height: f32,
//!     age: f32,
//! }
//!
//! impl Person {
//!     fn introduce(&self, _audience: i32) {}
//! }
//!
//! // Fields, in declaration order:
//! assert_eq!(<Person as Fields>::NAMES, &["fullname", "height", "age"][..]);
//! assert_eq!(<<Person as Fields>::Members as Sequence>::LEN, 3);
//!
//! // A method, described through its universal-function form:
//! type Introduce = fn(&Person, i32);
//! assert!(<Introduce as Callable>::IS_BOUND);
//! assert!(<Introduce as Callable>::IS_READONLY);
//! let _: <Introduce as Callable>::Pointer = Person::introduce;
//!
//! // A field projection is a bound member:
//! type Height = fn(&Person) -> &f32;
//! assert!(<Height as Member>::IS_BOUND);
//! let _: core::marker::PhantomData<Owner<Height>> = core::marker::PhantomData::<Person>;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +---------------------------------------------------------------+
//! |                 Downstream compile-time code                  |
//! |        serializers | injectors | ORMs | codegen output        |
//! +---------------------------------------------------------------+
//! |                       Descriptor layer                        |
//! |  Callable (fn shapes) | Member (ptr shapes) | Fields (derive) |
//! +---------------------------------------------------------------+
//! |                       Sequence algebra                        |
//! |  Nil/Cons | head/tail | nth | count | concat | map | filter   |
//! +---------------------------------------------------------------+
//! |                         Foundations                           |
//! |   logic: True/False/Select    fns: TypeFn    index: Z/S<N>    |
//! +---------------------------------------------------------------+
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Sequence`] | Ordered, immutable, zero-sized list of type descriptors |
//! | [`Callable`] | Return/parameters/owner/mutability of a fn-pointer shape |
//! | [`Member`] | Value/owner/addressability of a pointer or projection shape |
//! | [`Fields`] | A struct's field types and names, via `#[derive(Fields)]` |
//! | [`TypeFn`] | One-type-in, one-type-out function for map/filter/count |
//!
//! ## Features
//!
//! - **Zero runtime footprint** - descriptors resolve during type checking
//!   and every carrier type is zero-sized
//! - **Total recursion** - every operation has an explicit base case; no
//!   unbounded generic expansion
//! - **Structural matching** - callable and member shapes select their
//!   descriptors without registration or tagging
//! - **Build-time failure** - out-of-range access and unrecognized shapes
//!   stop the build at the offending call site, never at runtime
//! - **`no_std`** - nothing here needs an operating system, or even an
//!   allocator
//!
//! ## Modules Overview
//!
//! - [`seq`] - sequence construction and the operation set (start here)
//! - [`callable`] - callable descriptor extraction
//! - [`member`] - member descriptor extraction
//! - [`fields`] - field enumeration for named structs
//! - [`logic`] / [`fns`] - the type-level boolean and function vocabulary
//!
//! ## See Also
//!
//! - [Function pointer types](https://doc.rust-lang.org/reference/types/function-pointer.html)
//! - [Higher-ranked trait bounds](https://doc.rust-lang.org/nomicon/hrtb.html)
//! - [`core::marker::PhantomData`](https://doc.rust-lang.org/core/marker/struct.PhantomData.html)

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]
// The free-function and receiver-bound fn shapes are kept disjoint by the
// higher-ranked leak check (a plain parameter can never capture the
// receiver's bound lifetime), which rustc accepts but reports.
#![allow(coherence_leak_check)]

// Allow the derive macro to work inside this crate's tests
extern crate self as tymeta;

/// Callable descriptor extraction (free functions, methods, read-only methods).
pub mod callable;
/// Field enumeration for named structs.
pub mod fields;
/// Type-level functions: transformers and predicates.
pub mod fns;
/// Type-level booleans and conditional selection.
pub mod logic;
/// Member descriptor extraction (free variables, bound members).
pub mod member;
/// Owner extraction for bound declarations.
pub mod owner;
/// Ordered compile-time sequences of type descriptors.
pub mod seq;

pub use callable::Callable;
pub use fns::{Always, Identity, Never, RawPtr, TypeFn};
pub use logic::{Boolean, False, If, Select, True};
pub use member::Member;
pub use owner::{HasOwner, Owner};
pub use seq::index::{Peano, S, Z, U0, U1, U2, U3, U4, U5, U6, U7, U8, U9, U10, U11, U12};
pub use seq::ops::{
    Append, Appended, At, Concat, Concatenated, Count, CountMatching, Filter, Filtered, Head, Map,
    Mapped, NonEmpty, Nth, Prepended, Tail,
};
pub use seq::{length, Cons, Nil, Sequence};

// Re-export Fields trait and derive macro
pub use fields::Fields; // Trait (for type bounds)
pub use tymeta_codegen::Fields; // Derive macro (for #[derive(tymeta::Fields)])

/// tymeta version string.
pub const VERSION: &str = "0.4.2";
