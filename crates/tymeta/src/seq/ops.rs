// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Operations over sequences: head/tail, positional access, counting,
//! concatenation, mapping, filtering.
//!
//! Every operation is a trait with one impl per structural case, so each
//! recursion has an explicit base case and terminates. Violating an
//! operation's precondition (head of the empty sequence, index past the end)
//! leaves no impl to select and the build fails at the offending call site.
//!
//! ```
//! use tymeta::{seq, Head, Nth, Tail, U1};
//!
//! type Row = seq![u8, i32, f32];
//!
//! let head: core::marker::PhantomData<Head<Row>> = core::marker::PhantomData::<u8>;
//! let second: core::marker::PhantomData<Nth<Row, U1>> = core::marker::PhantomData::<i32>;
//! let tail: core::marker::PhantomData<Tail<Row>> = core::marker::PhantomData::<seq![i32, f32]>;
//! let _ = (head, second, tail);
//! ```

use crate::fns::TypeFn;
use crate::logic::{Boolean, If, Select};
use crate::seq::index::{S, Z};
use crate::seq::{Cons, Nil, Sequence};

// ===== head / tail =====

/// A sequence with at least one element, split into head and tail.
///
/// [`Nil`] deliberately has no impl: taking the head or the tail of the
/// empty sequence is rejected while types are checked.
///
/// ```compile_fail
/// use core::marker::PhantomData;
/// use tymeta::{Head, Nil};
///
/// let _ = PhantomData::<Head<Nil>>;
/// ```
///
/// ```compile_fail
/// use core::marker::PhantomData;
/// use tymeta::{Nil, Tail};
///
/// let _ = PhantomData::<Tail<Nil>>;
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is the empty sequence",
    label = "head and tail require at least one element"
)]
pub trait NonEmpty: Sequence {
    /// The element at position 0.
    type Head;
    /// Everything after position 0; one element shorter than `Self`.
    type Tail: Sequence;
}

impl<H, T: Sequence> NonEmpty for Cons<H, T> {
    type Head = H;
    type Tail = T;
}

/// First element of `Seq`.
pub type Head<Seq> = <Seq as NonEmpty>::Head;

/// `Seq` without its first element.
pub type Tail<Seq> = <Seq as NonEmpty>::Tail;

// ===== positional access =====

/// Positional access by Peano index, zero-based.
///
/// Base case: position [`Z`] on a non-empty sequence is its head. Recursive
/// case: position `S<N>` is position `N` of the tail. An index at or past the
/// end bottoms out on [`Nil`], which has no impl.
#[diagnostic::on_unimplemented(
    message = "index `{N}` is out of range for `{Self}`",
    label = "valid positions are 0 <= index < LEN"
)]
pub trait At<N> {
    /// The element at position `N`.
    type Output;
}

impl<H, T> At<Z> for Cons<H, T> {
    type Output = H;
}

impl<H, T, N> At<S<N>> for Cons<H, T>
where
    T: At<N>,
{
    type Output = <T as At<N>>::Output;
}

/// Element of `Seq` at position `N` (see [`U0`](crate::seq::index::U0) and
/// friends).
///
/// ```compile_fail
/// use core::marker::PhantomData;
/// use tymeta::{seq, Nth, U5};
///
/// let _ = PhantomData::<Nth<seq![i32, f32], U5>>;
/// ```
pub type Nth<Seq, N> = <Seq as At<N>>::Output;

// ===== counting =====

/// Counts predicate matches over positions `[0, N]`, inclusive.
///
/// Base case: at [`Z`] the predicate is evaluated on the head alone.
/// Recursive case: the head's result is added to the tail's count over
/// `[0, N - 1]`. Scanning a whole sequence needs `N = LEN - 1`;
/// [`CountMatching`] spells that out. The empty sequence has no impl and a
/// count over it is rejected at the call site.
pub trait Count<F, N> {
    /// Number of elements in `[0, N]` whose predicate output is
    /// [`True`](crate::logic::True).
    const MATCHES: usize;
}

impl<F, H, T> Count<F, Z> for Cons<H, T>
where
    F: TypeFn<H>,
    <F as TypeFn<H>>::Output: Boolean,
{
    const MATCHES: usize = <<F as TypeFn<H>>::Output as Boolean>::VALUE as usize;
}

impl<F, H, T, N> Count<F, S<N>> for Cons<H, T>
where
    T: Count<F, N>,
    F: TypeFn<H>,
    <F as TypeFn<H>>::Output: Boolean,
{
    const MATCHES: usize =
        <<F as TypeFn<H>>::Output as Boolean>::VALUE as usize + <T as Count<F, N>>::MATCHES;
}

/// Whole-sequence counting: every position of a non-empty sequence scanned.
///
/// ```
/// use tymeta::{seq, Always, CountMatching, Never};
///
/// type Row = seq![u8, i32, f32];
/// assert_eq!(<Row as CountMatching<Always>>::MATCHES, 3);
/// assert_eq!(<Row as CountMatching<Never>>::MATCHES, 0);
/// ```
pub trait CountMatching<F>: Sequence {
    /// Number of elements whose predicate output is
    /// [`True`](crate::logic::True).
    const MATCHES: usize;
}

impl<F, H, T> CountMatching<F> for Cons<H, T>
where
    T: Sequence,
    Cons<H, T>: Count<F, <T as Sequence>::Len>,
{
    const MATCHES: usize = <Cons<H, T> as Count<F, <T as Sequence>::Len>>::MATCHES;
}

// ===== concatenation =====

/// Sequence-plus-sequence concatenation.
pub trait Concat<Rhs> {
    /// Elements of `Self` followed by the elements of `Rhs`, both orders
    /// preserved.
    type Output;
}

impl<Rhs> Concat<Rhs> for Nil {
    type Output = Rhs;
}

impl<H, T, Rhs> Concat<Rhs> for Cons<H, T>
where
    T: Concat<Rhs>,
{
    type Output = Cons<H, <T as Concat<Rhs>>::Output>;
}

/// `A` followed by `B`; length is the sum of both lengths.
pub type Concatenated<A, B> = <A as Concat<B>>::Output;

/// Sequence-plus-single-descriptor concatenation.
pub trait Append<X> {
    /// Elements of `Self` with `X` as the new last element.
    type Output;
}

impl<X> Append<X> for Nil {
    type Output = Cons<X, Nil>;
}

impl<H, T, X> Append<X> for Cons<H, T>
where
    T: Append<X>,
{
    type Output = Cons<H, <T as Append<X>>::Output>;
}

/// `Seq` with the single descriptor `X` appended at the end.
pub type Appended<Seq, X> = <Seq as Append<X>>::Output;

/// Single-descriptor-plus-sequence concatenation: `X` becomes the head.
pub type Prepended<X, Seq> = Cons<X, Seq>;

// ===== mapping =====

/// Element-wise transformation by a [`TypeFn`].
pub trait Map<F> {
    /// `F` applied to every element; order and length preserved.
    type Output;
}

impl<F> Map<F> for Nil {
    type Output = Nil;
}

impl<F, H, T> Map<F> for Cons<H, T>
where
    F: TypeFn<H>,
    T: Map<F>,
{
    type Output = Cons<<F as TypeFn<H>>::Output, <T as Map<F>>::Output>;
}

/// `Seq` with `F` applied to every element.
///
/// ```
/// use core::marker::PhantomData;
/// use tymeta::{seq, Mapped, RawPtr};
///
/// type Ptrs = Mapped<seq![u8, i32], RawPtr>;
/// let same: PhantomData<Ptrs> = PhantomData::<seq![*const u8, *const i32]>;
/// let _ = same;
/// ```
pub type Mapped<Seq, F> = <Seq as Map<F>>::Output;

// ===== filtering =====

/// Keeps the elements a predicate matches, in their original relative order.
///
/// Recursive descent: the head is placed in front of the filtered tail only
/// when the predicate answers [`True`](crate::logic::True); otherwise the
/// filtered tail stands alone.
pub trait Filter<F> {
    /// The matching elements; between 0 and `LEN` of them.
    type Output;
}

impl<F> Filter<F> for Nil {
    type Output = Nil;
}

impl<F, H, T> Filter<F> for Cons<H, T>
where
    T: Filter<F>,
    F: TypeFn<H>,
    <F as TypeFn<H>>::Output:
        Select<Cons<H, <T as Filter<F>>::Output>, <T as Filter<F>>::Output>,
{
    type Output = If<
        <F as TypeFn<H>>::Output,
        Cons<H, <T as Filter<F>>::Output>,
        <T as Filter<F>>::Output,
    >;
}

/// Elements of `Seq` whose predicate output is [`True`](crate::logic::True).
pub type Filtered<Seq, F> = <Seq as Filter<F>>::Output;
