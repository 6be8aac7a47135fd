// © 2024, The numstep Developers and Contributors
//
// This Source Code Form is subject to the terms of the BSD-3-clause License.
// If a copy of the BSD-3-clause license was not distributed with this
// file, You can obtain one at https://opensource.org/license/bsd-3-clause/.

use std::iter::FusedIterator;

use log::{debug, trace};

use crate::error::StepError;
use crate::steppable::Steppable;

/// A validated `(start, stop, step)` triple that can be driven any number of times.
///
/// Constructing a `StepSeq` does not produce any element. Every call to [`StepSeq::iter`]
/// starts over from `start`.
#[derive(Clone, Debug)]
pub struct StepSeq<T> {
    start: T,
    stop: T,
    step: T,
    ascending: bool,
}

impl<T: Steppable> StepSeq<T> {
    /// Check the step and settle the kind of the produced elements.
    ///
    /// # Errors
    /// `StepError::InvalidArgument` if `step` is zero.
    pub fn new(start: T, stop: T, step: T) -> Result<Self, StepError> {
        if step == step.zero_like() {
            return Err(StepError::zero_step());
        }
        let ascending = step > step.zero_like();

        // one float among the three makes every element a float
        let start = if start.is_float() || stop.is_float() || step.is_float() {
            start.to_float()
        } else {
            start
        };

        debug!(
            "stepping from {:?} to {:?} by {:?} ({})",
            start,
            stop,
            step,
            if ascending { "ascending" } else { "descending" }
        );

        Ok(Self {
            start,
            stop,
            step,
            ascending,
        })
    }

    /// The first element candidate, after kind promotion.
    pub const fn start(&self) -> &T {
        &self.start
    }

    pub const fn stop(&self) -> &T {
        &self.stop
    }

    pub const fn step(&self) -> &T {
        &self.step
    }

    pub const fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Start a fresh drive of the sequence.
    #[must_use]
    pub fn iter(&self) -> StepIter<T> {
        self.clone().into_iter()
    }
}

impl<T: Steppable> IntoIterator for StepSeq<T> {
    type IntoIter = StepIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        StepIter {
            current: Some(self.start),
            stop: self.stop,
            step: self.step,
            ascending: self.ascending,
        }
    }
}

impl<T: Steppable> IntoIterator for &StepSeq<T> {
    type IntoIter = StepIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One drive of a [`StepSeq`].
#[derive(Clone, Debug)]
pub struct StepIter<T> {
    /// `None` once the stop bound has been crossed.
    current: Option<T>,
    stop: T,
    step: T,
    ascending: bool,
}

impl<T: Steppable> StepIter<T> {
    fn crossed(&self, value: &T) -> bool {
        if self.ascending {
            *value > self.stop
        } else {
            *value < self.stop
        }
    }
}

impl<T: Steppable> Iterator for StepIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.current.take()?;
        if self.crossed(&current) {
            trace!("{:?} crossed {:?}", current, self.stop);
            return None;
        }

        self.current = current.add_step(&self.step);
        trace!("yielding {:?}", current);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.current.is_none() { (0, Some(0)) } else { (0, None) }
    }
}

impl<T: Steppable> FusedIterator for StepIter<T> {}
