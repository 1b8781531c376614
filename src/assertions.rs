//! Entry points, one per supported function shape.
//!
//! # Example
//!
//! ```rust
//! use function_assert::assertions::{assert_that_double_function, assert_that_function};
//!
//! assert_that_function(|s: &str| s.len()).on("four").returns(4);
//! assert_that_double_function(f64::sqrt).on(9.0).returns(3.0);
//! ```

use crate::function::{
    DoubleFunction, DoubleFunctionAssert, FunctionAssert, FunctionLikeAssert, IntFunction,
    IntFunctionAssert, LongFunction, LongFunctionAssert, UnaryFunction,
};

/// Start assertions on any `Fn(T) -> R`.
pub fn assert_that_function<F, T, R>(function: F) -> FunctionAssert<F, T>
where
    F: Fn(T) -> R,
{
    FunctionLikeAssert::new(Some(UnaryFunction::new(function)))
}

/// Start assertions on an `Fn(i32) -> R`.
pub fn assert_that_int_function<F, R>(function: F) -> IntFunctionAssert<F>
where
    F: Fn(i32) -> R,
{
    FunctionLikeAssert::new(Some(IntFunction::new(function)))
}

/// Start assertions on an `Fn(i64) -> R`.
pub fn assert_that_long_function<F, R>(function: F) -> LongFunctionAssert<F>
where
    F: Fn(i64) -> R,
{
    FunctionLikeAssert::new(Some(LongFunction::new(function)))
}

/// Start assertions on an `Fn(f64) -> R`.
pub fn assert_that_double_function<F, R>(function: F) -> DoubleFunctionAssert<F>
where
    F: Fn(f64) -> R,
{
    FunctionLikeAssert::new(Some(DoubleFunction::new(function)))
}
