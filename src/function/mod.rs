//! Assertions on unary function-like values.
//!
//! One chain implementation ([`FunctionLikeAssert`] and [`On`]) serves every
//! function shape; the shapes differ only in their [`FunctionLike`] adapter.
//! The aliases below name each specialization, and since `returns` hands back
//! `&FunctionLikeAssert<A>` for the caller's own `A`, a chain started on an
//! [`IntFunctionAssert`] stays an `IntFunctionAssert` throughout.

mod adapters;
mod assert;

pub use adapters::{DoubleFunction, FunctionLike, IntFunction, LongFunction, UnaryFunction};
pub use assert::{FunctionLikeAssert, On};

/// Assertions on any `Fn(T) -> R`.
pub type FunctionAssert<F, T> = FunctionLikeAssert<UnaryFunction<F, T>>;

/// Assertions on an `Fn(i32) -> R`.
pub type IntFunctionAssert<F> = FunctionLikeAssert<IntFunction<F>>;

/// Assertions on an `Fn(i64) -> R`.
pub type LongFunctionAssert<F> = FunctionLikeAssert<LongFunction<F>>;

/// Assertions on an `Fn(f64) -> R`.
pub type DoubleFunctionAssert<F> = FunctionLikeAssert<DoubleFunction<F>>;
