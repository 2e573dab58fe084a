// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Member descriptor extraction.
//!
//! [`Member`] derives a structural descriptor from an addressable-value
//! declaration. Two shapes are recognized:
//!
//! - **Free variable**: a raw pointer, `*const V` or `*mut V`. Addressable on
//!   its own, no owner.
//! - **Bound member**: a field projection, `fn(&Owner) -> &V` or
//!   `fn(&mut Owner) -> &mut V`. Addressable only through an owner instance;
//!   the mutable shape also writes.
//!
//! The recorded [`Value`](Member::Value) is the bare value type: the
//! `*const`/`*mut` qualifier of a free variable and the reference wrapper of
//! a projection are both stripped.
//!
//! ```
//! use core::marker::PhantomData;
//! use tymeta::{Member, Owner};
//!
//! struct Person {
//!     height: f32,
//! }
//!
//! type Height = fn(&Person) -> &f32;
//! assert!(<Height as Member>::IS_BOUND);
//! let value: PhantomData<<Height as Member>::Value> = PhantomData::<f32>;
//! let owner: PhantomData<Owner<Height>> = PhantomData::<Person>;
//! let _ = (value, owner);
//!
//! // A projection is an ordinary value; given an owner it reads the member.
//! let height: Height = |p| &p.height;
//! assert_eq!(*height(&Person { height: 1.75 }), 1.75);
//!
//! type Free = *const f32;
//! assert!(!<Free as Member>::IS_BOUND);
//! let value: PhantomData<<Free as Member>::Value> = PhantomData::<f32>;
//! let _ = value;
//! ```
//!
//! ## What Won't Compile
//!
//! Plain value types are not addressable declarations:
//!
//! ```compile_fail
//! use core::marker::PhantomData;
//! use tymeta::Member;
//!
//! let _ = PhantomData::<<f32 as Member>::Value>;
//! ```
//!
//! A free variable has no owner:
//!
//! ```compile_fail
//! use core::marker::PhantomData;
//! use tymeta::Owner;
//!
//! let _ = PhantomData::<Owner<*const f32>>;
//! ```

use crate::owner::HasOwner;

/// Structural descriptor of a data-member or plain-value declaration.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a recognized member shape",
    label = "expected a raw pointer or a field projection `fn(&Owner) -> &Value`"
)]
pub trait Member {
    /// Value type with top-level qualifiers stripped.
    type Value;
    /// Reference shape matching the declaration exactly.
    type Reference;
    /// Whether the value is addressable only through an owner instance.
    const IS_BOUND: bool;
}

// ===== free variables =====

impl<V> Member for *const V {
    type Value = V;
    type Reference = Self;
    const IS_BOUND: bool = false;
}

impl<V> Member for *mut V {
    type Value = V;
    type Reference = Self;
    const IS_BOUND: bool = false;
}

// ===== bound members =====

impl<O, V> Member for for<'o> fn(&'o O) -> &'o V {
    type Value = V;
    type Reference = Self;
    const IS_BOUND: bool = true;
}

impl<O, V> Member for for<'o> fn(&'o mut O) -> &'o mut V {
    type Value = V;
    type Reference = Self;
    const IS_BOUND: bool = true;
}

impl<O, V> HasOwner for for<'o> fn(&'o O) -> &'o V {
    type Owner = O;
}

impl<O, V> HasOwner for for<'o> fn(&'o mut O) -> &'o mut V {
    type Owner = O;
}
