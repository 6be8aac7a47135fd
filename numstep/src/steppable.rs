// © 2024, The numstep Developers and Contributors
//
// This Source Code Form is subject to the terms of the BSD-3-clause License.
// If a copy of the BSD-3-clause license was not distributed with this
// file, You can obtain one at https://opensource.org/license/bsd-3-clause/.

use std::fmt;

/// A numeric value that can be stepped from a start towards a stop bound.
///
/// Ordering comes from `PartialOrd`; the stepping loop only ever asks whether the current
/// value is greater than (ascending) or less than (descending) the stop bound, and whether
/// the step is greater than zero.
pub trait Steppable: Clone + PartialOrd + fmt::Debug {
    /// The zero of the same numeric kind as `self`.
    fn zero_like(&self) -> Self;

    /// The step used when none is given. Must be nonzero; a zero unit is rejected like any
    /// other zero step.
    fn unit() -> Self;

    /// Is this a floating-point value?
    fn is_float(&self) -> bool;

    /// The floating-point counterpart of this value.
    ///
    /// Types that cannot change kind at run time return `self`.
    fn to_float(self) -> Self {
        self
    }

    /// Add `step` to `self`.
    ///
    /// Returns `None` if stepping cannot reach a new representable value: an integer sum that
    /// overflows, or a float sum that is NaN, overflows a finite value to infinity, or leaves
    /// an infinite `self` unchanged. Every stop bound is representable, so the stepping loop
    /// treats this as having crossed the bound.
    ///
    /// A finite float that a tiny step cannot change (`1e16 + 1.0`) is returned unchanged.
    fn add_step(&self, step: &Self) -> Option<Self>;
}

/// Float addition with the advance rules of [`Steppable::add_step`].
macro_rules! advance_float {
    ($current:expr, $step:expr) => {{
        let current = $current;
        let sum = current + $step;
        if sum.is_nan()
            || (current.is_infinite() && sum == current)
            || (current.is_finite() && sum.is_infinite())
        {
            None
        } else {
            Some(sum)
        }
    }};
}

pub(crate) fn advance_f64(current: f64, step: f64) -> Option<f64> {
    advance_float!(current, step)
}

macro_rules! steppable_int {
    ($($t:ty),*) => {$(
        impl Steppable for $t {
            fn zero_like(&self) -> Self {
                0
            }

            fn unit() -> Self {
                1
            }

            fn is_float(&self) -> bool {
                false
            }

            fn add_step(&self, step: &Self) -> Option<Self> {
                <$t>::checked_add(*self, *step)
            }
        }
    )*};
}

macro_rules! steppable_float {
    ($($t:ty),*) => {$(
        impl Steppable for $t {
            fn zero_like(&self) -> Self {
                0.0
            }

            fn unit() -> Self {
                1.0
            }

            fn is_float(&self) -> bool {
                true
            }

            fn add_step(&self, step: &Self) -> Option<Self> {
                advance_float!(*self, *step)
            }
        }
    )*};
}

steppable_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
steppable_float!(f32, f64);
