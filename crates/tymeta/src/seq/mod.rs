// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Ordered compile-time sequences of type descriptors.
//!
//! ## Overview
//!
//! A sequence is a nested cons cell: [`Nil`] is empty and [`Cons<H, T>`]
//! holds a first element `H` in front of a tail sequence `T`. Both are
//! zero-sized; a sequence of a thousand descriptors costs nothing after type
//! checking. Sequences are immutable by construction: every operation in
//! [`ops`] produces a new sequence type and never touches its input.
//!
//! The [`seq!`](crate::seq!) macro spells a sequence the way it reads:
//!
//! ```
//! use tymeta::{seq, length, Sequence};
//!
//! type Empty = seq![];
//! type Row = seq![u32, f32, bool];
//!
//! assert_eq!(length::<Empty>(), 0);
//! assert_eq!(length::<Row>(), 3);
//! assert_eq!(<Row as Sequence>::LEN, 3);
//! ```
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Nil`] | The empty sequence, length 0 |
//! | [`Cons<H, T>`] | `H` followed by the sequence `T` |
//! | [`Sequence`] | Classifier exposing `LEN` and the type-level `Len` |
//! | [`ops::NonEmpty`] | Head/tail split, length >= 1 only |
//!
//! ## See Also
//!
//! - [`ops`] for head/tail/nth/count/concat/map/filter
//! - [`index`] for the Peano index types used by positional access

pub mod index;
pub mod ops;

use core::marker::PhantomData;

use self::index::{Peano, S, Z};

/// The empty sequence.
///
/// Valid on its own (a sequence of zero descriptors) and the terminal case of
/// every recursive operation.
pub struct Nil;

/// A sequence with first element `H` and remainder `T`.
pub struct Cons<H, T>(PhantomData<(H, T)>);

/// Classifies every sequence type and exposes its length.
pub trait Sequence {
    /// Number of elements, equal to the count of descriptors the sequence was
    /// constructed with.
    const LEN: usize;
    /// The length as a Peano index type.
    type Len: Peano;
}

impl Sequence for Nil {
    const LEN: usize = 0;
    type Len = Z;
}

impl<H, T: Sequence> Sequence for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;
    type Len = S<T::Len>;
}

/// Reads a sequence's length in expression position.
///
/// ```
/// use tymeta::{length, seq};
///
/// assert_eq!(length::<seq![i64, i64]>(), 2);
/// ```
pub const fn length<Seq: Sequence>() -> usize {
    Seq::LEN
}

/// Builds a sequence type from a comma-separated list of element types.
///
/// `seq![]` is [`Nil`]; `seq![A, B]` is `Cons<A, Cons<B, Nil>>`. Usable
/// anywhere a type is expected.
///
/// ```
/// use tymeta::{seq, Cons, Nil, Sequence};
///
/// fn same<T>(_: core::marker::PhantomData<T>, _: core::marker::PhantomData<T>) {}
/// same(
///     core::marker::PhantomData::<seq![u8, u16]>,
///     core::marker::PhantomData::<Cons<u8, Cons<u16, Nil>>>,
/// );
/// assert_eq!(<seq![u8, u16] as Sequence>::LEN, 2);
/// ```
#[macro_export]
macro_rules! seq {
    () => { $crate::seq::Nil };
    ($head:ty $(, $rest:ty)* $(,)?) => {
        $crate::seq::Cons<$head, $crate::seq![$($rest),*]>
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Same<T> {}
    impl<T> Same<T> for T {}
    fn assert_same<A: Same<B>, B>() {}

    #[test]
    fn test_empty_sequence_is_valid() {
        assert_eq!(Nil::LEN, 0);
        assert_eq!(length::<crate::seq![]>(), 0);
    }

    #[test]
    fn test_lengths_track_construction() {
        assert_eq!(length::<crate::seq![u8]>(), 1);
        assert_eq!(length::<crate::seq![u8, i32, f32, bool, f64]>(), 5);
    }

    #[test]
    fn test_macro_matches_manual_spelling() {
        assert_same::<crate::seq![u8, u16], Cons<u8, Cons<u16, Nil>>>();
        assert_same::<crate::seq![], Nil>();
        assert_same::<crate::seq![u8,], Cons<u8, Nil>>();
    }

    #[test]
    fn test_type_level_length_agrees_with_const() {
        type Row = crate::seq![u8, i32, f32];
        assert_eq!(<Row as Sequence>::LEN, <<Row as Sequence>::Len as Peano>::USIZE);
    }
}
