// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type-level functions: transformers and predicates.
//!
//! A [`TypeFn`] takes one type in and produces one type out. Two usages are
//! conventional:
//!
//! - **Transformer**: `Output` is an arbitrary type; used by
//!   [`Map`](crate::seq::ops::Map).
//! - **Predicate**: `Output` is [`True`](crate::logic::True) or
//!   [`False`](crate::logic::False); used by
//!   [`Filter`](crate::seq::ops::Filter) and
//!   [`Count`](crate::seq::ops::Count).
//!
//! Callers write their own predicates as closed impl tables over the element
//! types they care about:
//!
//! ```
//! use tymeta::{seq, CountMatching, False, True, TypeFn};
//!
//! struct IsFloat;
//! impl TypeFn<f32> for IsFloat { type Output = True; }
//! impl TypeFn<f64> for IsFloat { type Output = True; }
//! impl TypeFn<i32> for IsFloat { type Output = False; }
//!
//! type Row = seq![i32, f32, f64];
//! assert_eq!(<Row as CountMatching<IsFloat>>::MATCHES, 2);
//! ```

use crate::logic::{False, True};

/// A compile-time function from one type to one type.
pub trait TypeFn<In> {
    /// Result of applying the function to `In`.
    type Output;
}

/// Transformer that leaves every element unchanged.
pub struct Identity;

impl<T> TypeFn<T> for Identity {
    type Output = T;
}

/// Transformer that wraps every element in a `*const` pointer.
pub struct RawPtr;

impl<T> TypeFn<T> for RawPtr {
    type Output = *const T;
}

/// Predicate that matches every element.
pub struct Always;

impl<T> TypeFn<T> for Always {
    type Output = True;
}

/// Predicate that matches no element.
pub struct Never;

impl<T> TypeFn<T> for Never {
    type Output = False;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::Boolean;

    trait Same<T> {}
    impl<T> Same<T> for T {}
    fn assert_same<A: Same<B>, B>() {}

    #[test]
    fn test_identity_keeps_the_input() {
        assert_same::<<Identity as TypeFn<u8>>::Output, u8>();
        assert_same::<<Identity as TypeFn<*mut u8>>::Output, *mut u8>();
    }

    #[test]
    fn test_raw_ptr_wraps_the_input() {
        assert_same::<<RawPtr as TypeFn<u8>>::Output, *const u8>();
        assert_same::<<RawPtr as TypeFn<*const u8>>::Output, *const *const u8>();
    }

    #[test]
    fn test_stock_predicates() {
        assert!(<<Always as TypeFn<u8>>::Output as Boolean>::VALUE);
        assert!(!<<Never as TypeFn<u8>>::Output as Boolean>::VALUE);
    }
}
