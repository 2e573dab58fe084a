// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Sequence algebra laws, exercised through the public API.
//!
//! Covered:
//! - construction sizes for 0, 1, and 5 elements
//! - head of the k-th tail equals the element at position k
//! - concatenation length and per-position identities across the boundary
//! - map preserves length and applies per position
//! - filter preserves relative order; always/never predicates are the
//!   identity and the empty sequence
//! - whole-scan count equals the filtered length

use tymeta::{
    seq, length, Always, Appended, Concatenated, Count, CountMatching, False, Filtered, Head,
    Identity, Mapped, Never, Nil, Nth, Prepended, RawPtr, Tail, True, TypeFn, U0, U1, U2, U3, U4,
};

trait Same<T> {}
impl<T> Same<T> for T {}
fn assert_same<A: Same<B>, B>() {}

type Empty = seq![];
type One = seq![u8];
type Five = seq![u8, i32, f32, bool, f64];

/// Closed-world predicate over the element types of `Five`.
struct IsFloat;
impl TypeFn<u8> for IsFloat {
    type Output = False;
}
impl TypeFn<i32> for IsFloat {
    type Output = False;
}
impl TypeFn<f32> for IsFloat {
    type Output = True;
}
impl TypeFn<bool> for IsFloat {
    type Output = False;
}
impl TypeFn<f64> for IsFloat {
    type Output = True;
}

#[test]
fn construction_sizes() {
    assert_eq!(length::<Empty>(), 0);
    assert_eq!(length::<One>(), 1);
    assert_eq!(length::<Five>(), 5);
}

#[test]
fn head_of_kth_tail_is_nth() {
    assert_same::<Head<Five>, Nth<Five, U0>>();
    assert_same::<Head<Tail<Five>>, Nth<Five, U1>>();
    assert_same::<Head<Tail<Tail<Five>>>, Nth<Five, U2>>();
    assert_same::<Head<Tail<Tail<Tail<Five>>>>, Nth<Five, U3>>();
    assert_same::<Head<Tail<Tail<Tail<Tail<Five>>>>>, Nth<Five, U4>>();
}

#[test]
fn tail_shrinks_by_one() {
    assert_eq!(length::<Tail<Five>>(), 4);
    assert_eq!(length::<Tail<One>>(), 0);
    assert_same::<Tail<One>, Nil>();
}

#[test]
fn concat_length_and_order() {
    type A = seq![u8, i32];
    type B = seq![f32, bool, f64];
    type Ab = Concatenated<A, B>;

    assert_eq!(length::<Ab>(), length::<A>() + length::<B>());

    // positions below the boundary come from A
    assert_same::<Nth<Ab, U0>, Nth<A, U0>>();
    assert_same::<Nth<Ab, U1>, Nth<A, U1>>();

    // positions at and past the boundary come from B, shifted down
    assert_same::<Nth<Ab, U2>, Nth<B, U0>>();
    assert_same::<Nth<Ab, U3>, Nth<B, U1>>();
    assert_same::<Nth<Ab, U4>, Nth<B, U2>>();
}

#[test]
fn concat_single_descriptor_shapes() {
    type A = seq![u8, i32];

    assert_same::<Appended<A, f64>, seq![u8, i32, f64]>();
    assert_eq!(length::<Appended<A, f64>>(), 3);

    assert_same::<Prepended<f64, A>, seq![f64, u8, i32]>();
    assert_same::<Head<Prepended<f64, A>>, f64>();

    assert_same::<Appended<Empty, u8>, One>();
    assert_same::<Prepended<u8, Empty>, One>();
}

#[test]
fn map_preserves_length_and_applies_per_position() {
    type Ptrs = Mapped<Five, RawPtr>;

    assert_eq!(length::<Ptrs>(), length::<Five>());
    assert_same::<Nth<Ptrs, U0>, *const u8>();
    assert_same::<Nth<Ptrs, U1>, *const i32>();
    assert_same::<Nth<Ptrs, U2>, *const f32>();
    assert_same::<Nth<Ptrs, U3>, *const bool>();
    assert_same::<Nth<Ptrs, U4>, *const f64>();

    assert_same::<Mapped<Five, Identity>, Five>();
    assert_same::<Mapped<Empty, RawPtr>, Empty>();
}

#[test]
fn filter_keeps_matches_in_relative_order() {
    assert_same::<Filtered<Five, IsFloat>, seq![f32, f64]>();
    assert_eq!(length::<Filtered<Five, IsFloat>>(), 2);
}

#[test]
fn filter_extremes() {
    assert_same::<Filtered<Five, Always>, Five>();
    assert_same::<Filtered<Five, Never>, Empty>();
    assert_same::<Filtered<Empty, Always>, Empty>();
}

#[test]
fn prefix_counts_are_inclusive() {
    assert_eq!(<Five as Count<IsFloat, U0>>::MATCHES, 0);
    assert_eq!(<Five as Count<IsFloat, U1>>::MATCHES, 0);
    assert_eq!(<Five as Count<IsFloat, U2>>::MATCHES, 1);
    assert_eq!(<Five as Count<IsFloat, U3>>::MATCHES, 1);
    assert_eq!(<Five as Count<IsFloat, U4>>::MATCHES, 2);
}

#[test]
fn whole_scan_count_matches_filtered_length() {
    assert_eq!(
        <Five as CountMatching<IsFloat>>::MATCHES,
        length::<Filtered<Five, IsFloat>>()
    );
    assert_eq!(<Five as CountMatching<Always>>::MATCHES, length::<Five>());
    assert_eq!(<Five as CountMatching<Never>>::MATCHES, 0);
    assert_eq!(<One as CountMatching<IsFloat>>::MATCHES, 0);
}
