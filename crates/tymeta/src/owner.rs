// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Owner extraction for bound declarations.
//!
//! A bound method or a bound member can only be addressed through an instance
//! of its owning type; [`HasOwner`] names that type. Free functions and free
//! variables have no impl, so asking for their owner is rejected during type
//! checking.
//!
//! ```
//! use core::marker::PhantomData;
//! use tymeta::Owner;
//!
//! struct Sensor;
//! type Read = fn(&Sensor) -> f32;
//!
//! let owner: PhantomData<Owner<Read>> = PhantomData::<Sensor>;
//! let _ = owner;
//! ```
//!
//! A free function is not bound to anything:
//!
//! ```compile_fail
//! use core::marker::PhantomData;
//! use tymeta::Owner;
//!
//! type Free = fn(i32) -> bool;
//! let _ = PhantomData::<Owner<Free>>;
//! ```

/// The owning type of a bound callable or member.
///
/// Implemented only for bound shapes; the owner of a free declaration does
/// not exist and querying it fails to compile.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not bound to an owning type",
    label = "only bound methods and bound members have an owner"
)]
pub trait HasOwner {
    /// The type the declaration is bound to.
    type Owner;
}

/// Owner of the bound declaration `T`.
pub type Owner<T> = <T as HasOwner>::Owner;
