// © 2024, The numstep Developers and Contributors
//
// This Source Code Form is subject to the terms of the BSD-3-clause License.
// If a copy of the BSD-3-clause license was not distributed with this
// file, You can obtain one at https://opensource.org/license/bsd-3-clause/.

use std::error;

use derive_more::Display;

/// Error type raised by the stepping core.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum StepError {
    /// The step is zero, so the sequence would never make progress.
    #[display("Invalid Argument: {}", _0)]
    InvalidArgument(String),
    /// A textual number could not be parsed.
    #[display("Invalid Number: {:?}", _0)]
    InvalidNumber(String),
}

impl StepError {
    pub(crate) fn zero_step() -> Self {
        Self::InvalidArgument("step can't be 0".to_owned())
    }
}

impl error::Error for StepError {}
