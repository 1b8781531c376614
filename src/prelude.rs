//! Entry points, specializations, generators and the `proptest` prelude in one import.
//!
//! # Example
//!
//! ```rust
//! use function_assert::prelude::*;
//!
//! assert_that_long_function(|l| u8::try_from(l).ok())
//!     .on(7).returns(Some(7)).on(-1).returns(None);
//!
//! let error = assert_that_function(|s: &str| s.len())
//!     .described_as("length")
//!     .on("abc")
//!     .try_returns(4)
//!     .unwrap_err();
//! assert!(error.to_string().starts_with("[length] "));
//! ```

// Re-export proptest
pub use proptest::prelude::*;

pub use crate::assertions::{
    assert_that_double_function, assert_that_function, assert_that_int_function,
    assert_that_long_function,
};
pub use crate::config::{AssertionConfig, TypeNameStyle};
pub use crate::error::AssertionError;
pub use crate::function::{
    DoubleFunction, DoubleFunctionAssert, FunctionAssert, FunctionLike, FunctionLikeAssert,
    IntFunction, IntFunctionAssert, LongFunction, LongFunctionAssert, On, UnaryFunction,
};
pub use crate::generators::{calls, double_inputs, int_inputs, long_inputs, optional_results};
