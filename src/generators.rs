//! Input strategies for each function shape, for driving assertions with `proptest`.

use std::fmt::Debug;

use proptest::prelude::*;

/// `i32` inputs weighted toward bounds and small values.
pub fn int_inputs() -> impl Strategy<Value = i32> {
    prop_oneof![
        1 => Just(i32::MIN),
        1 => Just(-1_i32),
        1 => Just(0_i32),
        1 => Just(1_i32),
        1 => Just(i32::MAX),
        4 => any::<i32>(),
    ]
}

/// `i64` inputs weighted toward bounds and small values.
pub fn long_inputs() -> impl Strategy<Value = i64> {
    prop_oneof![
        1 => Just(i64::MIN),
        1 => Just(-1_i64),
        1 => Just(0_i64),
        1 => Just(1_i64),
        1 => Just(i64::MAX),
        4 => any::<i64>(),
    ]
}

/// Finite `f64` inputs including both zeros and the extremes.
///
/// NaN is excluded: a function returning its input can never satisfy
/// `returns(f(x))` for NaN under `PartialEq`.
pub fn double_inputs() -> impl Strategy<Value = f64> {
    prop_oneof![
        1 => Just(0.0_f64),
        1 => Just(-0.0_f64),
        1 => Just(1.0_f64),
        1 => Just(-1.0_f64),
        1 => Just(f64::MAX),
        1 => Just(f64::MIN),
        4 => any::<f64>().prop_filter("finite f64", |v| v.is_finite()),
    ]
}

/// Expected values for functions returning `Option<R>`; one in four is `None`.
pub fn optional_results<S: Strategy>(results: S) -> impl Strategy<Value = Option<S::Value>> {
    prop::option::weighted(0.75, results)
}

/// `(input, function(input))` pairs: calls that `returns` must accept.
pub fn calls<S, F, R>(inputs: S, function: F) -> impl Strategy<Value = (S::Value, R)>
where
    S: Strategy,
    S::Value: Clone,
    F: Fn(S::Value) -> R,
    R: Debug,
{
    inputs.prop_map(move |input| {
        let result = function(input.clone());
        (input, result)
    })
}
