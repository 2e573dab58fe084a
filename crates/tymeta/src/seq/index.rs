// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Peano index types for positional access.
//!
//! Stable Rust cannot recurse on a const generic (`At<{N - 1}>` is not
//! expressible), so positions are encoded as types: [`Z`] is index 0 and
//! [`S<N>`] is the successor of `N`. The [`U0`]..[`U12`] aliases cover the
//! indices the crate's operations are instantiated with in practice.
//!
//! ```
//! use tymeta::{Peano, U0, U3};
//!
//! assert_eq!(U0::USIZE, 0);
//! assert_eq!(U3::USIZE, 3);
//! ```

use core::marker::PhantomData;

/// Index zero.
pub struct Z;

/// Successor of the index `N`.
pub struct S<N>(PhantomData<N>);

/// Classifies the index types and reads them back as `usize`.
pub trait Peano {
    /// Value-level reading of the index.
    const USIZE: usize;
}

impl Peano for Z {
    const USIZE: usize = 0;
}

impl<N: Peano> Peano for S<N> {
    const USIZE: usize = 1 + N::USIZE;
}

/// Index 0.
pub type U0 = Z;
/// Index 1.
pub type U1 = S<U0>;
/// Index 2.
pub type U2 = S<U1>;
/// Index 3.
pub type U3 = S<U2>;
/// Index 4.
pub type U4 = S<U3>;
/// Index 5.
pub type U5 = S<U4>;
/// Index 6.
pub type U6 = S<U5>;
/// Index 7.
pub type U7 = S<U6>;
/// Index 8.
pub type U8 = S<U7>;
/// Index 9.
pub type U9 = S<U8>;
/// Index 10.
pub type U10 = S<U9>;
/// Index 11.
pub type U11 = S<U10>;
/// Index 12.
pub type U12 = S<U11>;
