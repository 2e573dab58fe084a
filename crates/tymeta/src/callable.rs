// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Callable descriptor extraction.
//!
//! ## Overview
//!
//! [`Callable`] derives a structural descriptor from a function-pointer type:
//! return type, declared parameters as a sequence, the canonical owner-free
//! signature, the exact-shape pointer, and the bound/read-only flags. No
//! tagging by the caller: the shape alone selects the impl.
//!
//! Three mutually exclusive shapes are recognized:
//!
//! | Shape | Example | `IS_BOUND` | `IS_READONLY` | Owner |
//! |-------|---------|------------|---------------|-------|
//! | Free function | `fn(String, f32) -> i32` | `false` | `false` | none |
//! | Bound method | `fn(&mut Person, i32)` | `true` | `false` | `Person` |
//! | Bound read-only method | `fn(&Person, i32)` | `true` | `true` | `Person` |
//!
//! A method's pointer shape is its universal-function form, the receiver
//! spelled as the explicit first parameter. That is how a method coerces to a
//! fn pointer, so descriptors line up with what `Person::introduce` actually
//! produces:
//!
//! ```
//! use tymeta::{seq, Callable, Cons, Owner};
//!
//! struct Person {
//!     age: f32,
//! }
//!
//! impl Person {
//!     fn grow(&mut self, years: i32) {
//!         self.age += years as f32;
//!     }
//! }
//!
//! type Grow = fn(&mut Person, i32);
//! let pointer: <Grow as Callable>::Pointer = Person::grow;
//! let _ = pointer;
//!
//! assert!(<Grow as Callable>::IS_BOUND);
//! assert!(!<Grow as Callable>::IS_READONLY);
//!
//! let owner: core::marker::PhantomData<Owner<Grow>> = core::marker::PhantomData::<Person>;
//! let params: core::marker::PhantomData<<Grow as Callable>::Params> =
//!     core::marker::PhantomData::<seq![i32]>;
//! let with_owner: core::marker::PhantomData<<Grow as Callable>::ParamsWithOwner> =
//!     core::marker::PhantomData::<Cons<*mut Person, seq![i32]>>;
//! let _ = (owner, params, with_owner);
//! ```
//!
//! ## What Won't Compile
//!
//! Only the three shapes above are callables; anything else has no impl:
//!
//! ```compile_fail
//! use core::marker::PhantomData;
//! use tymeta::Callable;
//!
//! let _ = PhantomData::<<u8 as Callable>::Ret>;
//! ```
//!
//! A free function has no owner to extract:
//!
//! ```compile_fail
//! use core::marker::PhantomData;
//! use tymeta::Owner;
//!
//! let _ = PhantomData::<Owner<fn(String, f32) -> i32>>;
//! ```
//!
//! ## Notes
//!
//! A plain function whose first parameter borrows some type is structurally
//! identical to a method on that type in universal-function form; the
//! descriptor reports it as bound. Likewise a method returning a borrow of
//! its receiver is structurally a field projection and is matched by
//! [`Member`](crate::member::Member), not by [`Callable`].

use crate::owner::HasOwner;
use crate::seq::Cons;

/// Structural descriptor of a callable declaration.
///
/// Implemented for fn-pointer shapes with up to twelve declared parameters,
/// the receiver not counted.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a recognized callable shape",
    label = "expected a fn pointer, optionally with a `&Owner` or `&mut Owner` receiver"
)]
pub trait Callable {
    /// Return type.
    type Ret;
    /// Declared parameter types in order, the receiver excluded.
    type Params;
    /// Parameter sequence as invoked with an explicit owner: the owner
    /// pointer in front of [`Params`](Callable::Params) for bound shapes,
    /// [`Params`](Callable::Params) itself for free functions.
    type ParamsWithOwner;
    /// Canonical owner-free signature `fn(params..) -> ret`.
    type Signature;
    /// Pointer matching the declared shape exactly.
    type Pointer;
    /// Whether the callable is bound to an owning type.
    const IS_BOUND: bool;
    /// Whether invoking it is guaranteed to leave the owner unmodified.
    const IS_READONLY: bool;
}

/// Implement the three callable shapes for one parameter-list arity
/// (eliminates per-arity duplication).
macro_rules! impl_callable_arity {
    ($($p:ident),*) => {
        impl<R $(, $p)*> Callable for fn($($p),*) -> R {
            type Ret = R;
            type Params = crate::seq![$($p),*];
            type ParamsWithOwner = crate::seq![$($p),*];
            type Signature = fn($($p),*) -> R;
            type Pointer = Self;
            const IS_BOUND: bool = false;
            const IS_READONLY: bool = false;
        }

        impl<R, O $(, $p)*> Callable for for<'o> fn(&'o O $(, $p)*) -> R {
            type Ret = R;
            type Params = crate::seq![$($p),*];
            type ParamsWithOwner = Cons<*const O, crate::seq![$($p),*]>;
            type Signature = fn($($p),*) -> R;
            type Pointer = Self;
            const IS_BOUND: bool = true;
            const IS_READONLY: bool = true;
        }

        impl<R, O $(, $p)*> Callable for for<'o> fn(&'o mut O $(, $p)*) -> R {
            type Ret = R;
            type Params = crate::seq![$($p),*];
            type ParamsWithOwner = Cons<*mut O, crate::seq![$($p),*]>;
            type Signature = fn($($p),*) -> R;
            type Pointer = Self;
            const IS_BOUND: bool = true;
            const IS_READONLY: bool = false;
        }

        impl<R, O $(, $p)*> HasOwner for for<'o> fn(&'o O $(, $p)*) -> R {
            type Owner = O;
        }

        impl<R, O $(, $p)*> HasOwner for for<'o> fn(&'o mut O $(, $p)*) -> R {
            type Owner = O;
        }
    };
}

impl_callable_arity!();
impl_callable_arity!(A0);
impl_callable_arity!(A0, A1);
impl_callable_arity!(A0, A1, A2);
impl_callable_arity!(A0, A1, A2, A3);
impl_callable_arity!(A0, A1, A2, A3, A4);
impl_callable_arity!(A0, A1, A2, A3, A4, A5);
impl_callable_arity!(A0, A1, A2, A3, A4, A5, A6);
impl_callable_arity!(A0, A1, A2, A3, A4, A5, A6, A7);
impl_callable_arity!(A0, A1, A2, A3, A4, A5, A6, A7, A8);
impl_callable_arity!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9);
impl_callable_arity!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10);
impl_callable_arity!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11);
