// © 2024, The numstep Developers and Contributors
//
// This Source Code Form is subject to the terms of the BSD-3-clause License.
// If a copy of the BSD-3-clause license was not distributed with this
// file, You can obtain one at https://opensource.org/license/bsd-3-clause/.

//! A numeric value whose kind (exact integer or float) is only known at run time.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::StepError;
use crate::steppable::{advance_f64, Steppable};

/// An exact integer or a floating-point number.
///
/// Equality and ordering are numeric across kinds, so `Int(1) == Float(1.0)`.
/// Use [`Number::is_float`] when the kind matters.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// 2^63, the first float above `i64::MAX`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Exact comparison of an integer against a float.
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f >= I64_BOUND {
        return Some(Ordering::Less);
    }
    if f < -I64_BOUND {
        return Some(Ordering::Greater);
    }

    // `f` is within the range of i64 here, so its integral part converts losslessly
    let whole = f.trunc();
    #[allow(clippy::cast_possible_truncation)]
    let whole_int = whole as i64;
    match i.cmp(&whole_int) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(f - whole)),
        ord => Some(ord),
    }
}

impl Number {
    pub const INFINITY: Self = Self::Float(f64::INFINITY);
    pub const NEG_INFINITY: Self = Self::Float(f64::NEG_INFINITY);

    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// The value as a float, converting exact integers.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Add two numbers, promoting to float if either side is a float.
    ///
    /// Returns `None` if an integer addition overflows.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.checked_add(b).map(Self::Int),
            (a, b) => Some(Self::Float(a.as_f64() + b.as_f64())),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(&b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(&b),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(a, b),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) if x.is_nan() => write!(f, "NaN"),
            Self::Float(x) if x == f64::INFINITY => write!(f, "Infinity"),
            Self::Float(x) if x == f64::NEG_INFINITY => write!(f, "-Infinity"),
            // Debug keeps the fractional part of whole floats: `5.0` rather than `5`
            Self::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl FromStr for Number {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();

        match text.to_ascii_lowercase().as_str() {
            "inf" | "+inf" | "infinity" | "+infinity" => return Ok(Self::INFINITY),
            "-inf" | "-infinity" => return Ok(Self::NEG_INFINITY),
            "nan" => return Ok(Self::Float(f64::NAN)),
            _ => (),
        }

        if let Ok(i) = text.parse::<i64>() {
            return Ok(Self::Int(i));
        }
        text.parse::<f64>().map(Self::Float).map_err(|_| StepError::InvalidNumber(s.to_owned()))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl Steppable for Number {
    fn zero_like(&self) -> Self {
        match self {
            Self::Int(_) => Self::Int(0),
            Self::Float(_) => Self::Float(0.0),
        }
    }

    fn unit() -> Self {
        Self::Int(1)
    }

    fn is_float(&self) -> bool {
        Self::is_float(self)
    }

    fn to_float(self) -> Self {
        Self::Float(self.as_f64())
    }

    fn add_step(&self, step: &Self) -> Option<Self> {
        match (*self, *step) {
            (Self::Int(a), Self::Int(b)) => a.checked_add(b).map(Self::Int),
            (a, b) => advance_f64(a.as_f64(), b.as_f64()).map(Self::Float),
        }
    }
}
