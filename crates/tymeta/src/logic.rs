// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type-level booleans and conditional selection.
//!
//! Predicates over type descriptors answer with the truth types [`True`] and
//! [`False`]; [`Select`] (alias [`If`]) turns such an answer into a choice
//! between two types. Everything here resolves during type checking and
//! occupies zero bytes.
//!
//! ```
//! use tymeta::{Boolean, If, True};
//!
//! assert!(True::VALUE);
//! let chosen: If<True, i32, f32> = 7;
//! assert_eq!(chosen, 7);
//! ```

/// Type-level `true`.
pub struct True;

/// Type-level `false`.
pub struct False;

/// Classifies the truth types and bridges them to a `const bool`.
pub trait Boolean {
    /// Value-level reading of the truth type.
    const VALUE: bool;
}

impl Boolean for True {
    const VALUE: bool = true;
}

impl Boolean for False {
    const VALUE: bool = false;
}

/// Compile-time two-way selection keyed by a truth type.
///
/// [`True`] selects the first branch, [`False`] the second.
pub trait Select<A, B> {
    /// The selected branch.
    type Output;
}

impl<A, B> Select<A, B> for True {
    type Output = A;
}

impl<A, B> Select<A, B> for False {
    type Output = B;
}

/// Alias form of [`Select`]: `If<C, A, B>` is `A` when `C` is [`True`],
/// otherwise `B`.
pub type If<C, A, B> = <C as Select<A, B>>::Output;

#[cfg(test)]
mod tests {
    use super::*;

    trait Same<T> {}
    impl<T> Same<T> for T {}
    fn assert_same<A: Same<B>, B>() {}

    #[test]
    fn test_truth_values() {
        assert!(True::VALUE);
        assert!(!False::VALUE);
    }

    #[test]
    fn test_select_branches() {
        assert_same::<If<True, i32, f32>, i32>();
        assert_same::<If<False, i32, f32>, f32>();
    }

    #[test]
    fn test_select_nests() {
        assert_same::<If<True, If<False, u8, u16>, u32>, u16>();
    }
}
