// © 2024, The numstep Developers and Contributors
//
// This Source Code Form is subject to the terms of the BSD-3-clause License.
// If a copy of the BSD-3-clause license was not distributed with this
// file, You can obtain one at https://opensource.org/license/bsd-3-clause/.

use numstep::{Number, StepError};

const INF: f64 = f64::INFINITY;

fn num<N: Into<Number>>(value: N) -> Number {
    value.into()
}

/// Drive the eager form and collect what the closure saw.
fn collect<A, B, C>(start: A, stop: B, step: C) -> Vec<Number>
where
    A: Into<Number>,
    B: Into<Number>,
    C: Into<Number>,
{
    let mut out = Vec::new();
    let ret = numstep::each(num(start), num(stop), num(step), |x| {
        out.push(x);
        Ok::<(), StepError>(())
    });
    assert!(ret.is_ok());
    out
}

fn assert_ints(got: &[Number], expected: &[i64]) {
    assert!(got.iter().all(Number::is_int), "expected only integers, got {:?}", got);
    let expected: Vec<Number> = expected.iter().copied().map(Number::Int).collect();
    assert_eq!(got, expected.as_slice());
}

fn assert_floats(got: &[Number], expected: &[f64]) {
    assert!(got.iter().all(Number::is_float), "expected only floats, got {:?}", got);
    let expected: Vec<Number> = expected.iter().copied().map(Number::Float).collect();
    assert_eq!(got, expected.as_slice());
}

#[test]
fn zero_step_is_an_invalid_argument() {
    let mut called = false;
    let res = numstep::each(num(5), num(1), num(0), |_| {
        called = true;
        Ok::<(), StepError>(())
    });
    assert!(matches!(res, Err(StepError::InvalidArgument(_))));
    assert!(!called);

    assert!(matches!(numstep::step(num(1.1), num(2), num(0.0)), Err(StepError::InvalidArgument(_))));
    assert!(matches!(numstep::step(num(1), num(5), num(-0.0)), Err(StepError::InvalidArgument(_))));
}

#[test]
fn each_returns_the_original_start() {
    let ret = numstep::each(num(1), num(5.5), num(1), |_| Ok::<(), StepError>(()));
    assert!(matches!(ret, Ok(Number::Int(1))));

    let ret = numstep::each(7u16, 1, 1, |_| Ok::<(), StepError>(()));
    assert_eq!(ret, Ok(7));
}

#[test]
fn default_step_is_one() {
    let mut out = Vec::new();
    let ret = numstep::each_by_one(num(1), num(5), |x| {
        out.push(x);
        Ok::<(), StepError>(())
    });
    assert!(ret.is_ok());
    assert_ints(&out, &[1, 2, 3, 4, 5]);
    assert_eq!(out, collect(1, 5, 1));

    let lazy: Vec<Number> = numstep::step_by_one(num(1.5), num(3)).unwrap().iter().collect();
    assert_floats(&lazy, &[1.5, 2.5]);
}

#[test]
fn ascending_integers() {
    assert_ints(&collect(1, 5, 1), &[1, 2, 3, 4, 5]);
    assert_ints(&collect(1, 1, 1), &[1]);
    assert_ints(&collect(2, 1, 1), &[]);
}

#[test]
fn descending_integers() {
    assert_ints(&collect(5, 1, -1), &[5, 4, 3, 2, 1]);
    assert_ints(&collect(5, 5, -1), &[5]);
    assert_ints(&collect(1, 5, -1), &[]);
}

#[test]
fn any_float_makes_every_element_a_float() {
    assert_floats(&collect(1.5, 5, 1), &[1.5, 2.5, 3.5, 4.5]);
    assert_floats(&collect(1, 5.0, 1), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_floats(&collect(1, 5, 1.0), &[1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn ascending_floats() {
    assert_floats(&collect(1.5, 1.5, 1), &[1.5]);
    assert_floats(&collect(2.5, 1.5, 1), &[]);
}

#[test]
fn descending_floats() {
    assert_floats(&collect(5, 1.5, -1), &[5.0, 4.0, 3.0, 2.0]);
    assert_floats(&collect(1.5, 1.5, -1), &[1.5]);
    assert_floats(&collect(1, 5, -1.5), &[]);
}

#[test]
fn positive_infinite_step() {
    assert_floats(&collect(42, 100, INF), &[42.0]);
    assert_floats(&collect(42, INF, INF), &[42.0]);
    assert_floats(&collect(42, 42, INF), &[42.0]);
    assert_floats(&collect(INF, INF, INF), &[INF]);
    assert_floats(&collect(100, 42, INF), &[]);
    assert_floats(&collect(42, -INF, INF), &[]);
}

#[test]
fn negative_infinite_step() {
    assert_floats(&collect(42, 6, -INF), &[42.0]);
    assert_floats(&collect(42, -INF, -INF), &[42.0]);
    assert_floats(&collect(42, 42, -INF), &[42.0]);
    assert_floats(&collect(INF, INF, -INF), &[INF]);
    assert_floats(&collect(42, 100, -INF), &[]);
    assert_floats(&collect(42, INF, -INF), &[]);
}

#[test]
fn step_too_small_to_move_a_float_never_crosses() {
    let seq = numstep::step(num(1e16), num(1e16 + 4.0), num(1.0)).unwrap();
    let got: Vec<Number> = seq.iter().take(5).collect();
    assert_floats(&got, &[1e16; 5]);

    assert_floats(&collect(1e308, INF, 1e308), &[1e308]);
}

#[test]
fn lazy_form_matches_eager_form() {
    let cases: [(Number, Number, Number); 6] = [
        (num(1), num(5), num(1)),
        (num(5), num(1), num(-1)),
        (num(1.5), num(5), num(1)),
        (num(5), num(1.5), num(-1)),
        (num(42), num(100), num(INF)),
        (num(0), num(5), num(2)),
    ];

    for (start, stop, step) in cases {
        let seq = numstep::step(start, stop, step).unwrap();
        let first: Vec<Number> = seq.iter().collect();
        let second: Vec<Number> = seq.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, collect(start, stop, step));
    }
}

#[test]
fn lazy_form_uses_the_given_step() {
    let seq = numstep::step(num(0), num(5), num(2)).unwrap();
    assert_ints(&seq.into_iter().collect::<Vec<_>>(), &[0, 2, 4]);
}

#[derive(Debug, PartialEq)]
enum CallbackError {
    Step(StepError),
    Argument(&'static str),
    Type(&'static str),
}

impl From<StepError> for CallbackError {
    fn from(err: StepError) -> Self {
        Self::Step(err)
    }
}

#[test]
fn callback_errors_are_not_caught() {
    let mut seen = Vec::new();
    let res = numstep::each_by_one(num(1), num(2), |x| {
        seen.push(x);
        Err(CallbackError::Argument("oups"))
    });
    assert_eq!(res.unwrap_err(), CallbackError::Argument("oups"));
    assert_ints(&seen, &[1]);

    let res = numstep::each_by_one(num(1), num(2), |_| Err(CallbackError::Type("oups")));
    assert_eq!(res.unwrap_err(), CallbackError::Type("oups"));
}

#[test]
fn callback_error_stops_midway() {
    let mut seen = Vec::new();
    let res = numstep::each(num(1), num(10), num(1), |x| {
        if x == Number::Int(4) {
            return Err(CallbackError::Argument("stop"));
        }
        seen.push(x);
        Ok(())
    });
    assert_eq!(res.unwrap_err(), CallbackError::Argument("stop"));
    assert_ints(&seen, &[1, 2, 3]);
}

#[test]
fn primitive_types() {
    let ints: Vec<i32> = numstep::step(10, -2, -4).unwrap().into_iter().collect();
    assert_eq!(ints, vec![10, 6, 2, -2]);

    let floats: Vec<f64> = numstep::step(1.5, 5.0, 1.0).unwrap().into_iter().collect();
    assert_eq!(floats, vec![1.5, 2.5, 3.5, 4.5]);

    let once: Vec<f64> = numstep::step(42.0, INF, INF).unwrap().into_iter().collect();
    assert_eq!(once, vec![42.0]);
}
