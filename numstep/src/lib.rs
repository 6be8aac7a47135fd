// © 2024, The numstep Developers and Contributors
//
// This Source Code Form is subject to the terms of the BSD-3-clause License.
// If a copy of the BSD-3-clause license was not distributed with this
// file, You can obtain one at https://opensource.org/license/bsd-3-clause/.

//! Stepping a number from a start value towards a stop bound.
//!
//! The sequence begins at `start` and advances by `step` while the current value has not
//! crossed `stop`: for a positive step the bound is crossed once the value is greater than
//! `stop`, for a negative step once it is less than `stop`. The bound itself is included when
//! it is hit exactly.
//!
//! There are two ways to drive the sequence:
//! - [`each`] calls a closure for every element right away and returns the original `start`.
//! - [`step`] returns a [`StepSeq`] that produces the same elements lazily, as often as needed.
//!
//! ```
//! use numstep::Number;
//!
//! let seq = numstep::step(Number::Int(5), Number::Float(1.5), Number::Int(-1)).unwrap();
//! let values: Vec<String> = seq.iter().map(|n| n.to_string()).collect();
//! assert_eq!(values, ["5.0", "4.0", "3.0", "2.0"]);
//! ```

pub mod error;
pub mod number;
pub mod seq;
pub mod steppable;

pub use error::StepError;
pub use number::Number;
pub use seq::{StepIter, StepSeq};
pub use steppable::Steppable;

/// Call `f` with every element stepped from `start` to `stop`, then return `start`.
///
/// An error returned by `f` stops the iteration and is handed back unchanged.
///
/// # Errors
/// `StepError::InvalidArgument` (converted into `E`) if `step` is zero, before `f` is called;
/// otherwise the first error returned by `f`.
pub fn each<T, E, F>(start: T, stop: T, step: T, mut f: F) -> Result<T, E>
where
    T: Steppable,
    E: From<StepError>,
    F: FnMut(T) -> Result<(), E>,
{
    let seq = StepSeq::new(start.clone(), stop, step)?;
    for value in seq {
        f(value)?;
    }
    Ok(start)
}

/// [`each`] with the default step of one.
///
/// # Errors
/// The first error returned by `f`.
pub fn each_by_one<T, E, F>(start: T, stop: T, f: F) -> Result<T, E>
where
    T: Steppable,
    E: From<StepError>,
    F: FnMut(T) -> Result<(), E>,
{
    each(start, stop, T::unit(), f)
}

/// The lazy counterpart of [`each`].
///
/// # Errors
/// `StepError::InvalidArgument` if `step` is zero.
pub fn step<T: Steppable>(start: T, stop: T, step: T) -> Result<StepSeq<T>, StepError> {
    StepSeq::new(start, stop, step)
}

/// [`step`] with the default step of one.
///
/// # Errors
/// `StepError::InvalidArgument` if `T::unit()` is zero.
pub fn step_by_one<T: Steppable>(start: T, stop: T) -> Result<StepSeq<T>, StepError> {
    StepSeq::new(start, stop, T::unit())
}
