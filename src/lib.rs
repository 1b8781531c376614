//! # function-assert
//!
//! Fluent assertions for unary function-like values:
//!
//! ```rust
//! use function_assert::prelude::*;
//!
//! assert_that_int_function(|i| i.to_string())
//!     .on(123).returns("123".to_string())
//!     .on(456).returns("456".to_string());
//! ```
//!
//! Organized around:
//! - `function`: the shared `on(input).returns(expected)` chain and the per-shape adapters
//! - `assertions`: entry points for `Fn(T)`, `Fn(i32)`, `Fn(i64)` and `Fn(f64)`
//! - `error`: failure values and their messages
//! - `config` / `representation`: how failures render the function and its values
//! - `generators`: `proptest` input strategies per function shape

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub mod assertions;
pub mod config;
pub mod error;
pub mod function;
pub mod generators;
pub mod prelude;
pub mod representation;

pub use assertions::{
    assert_that_double_function, assert_that_function, assert_that_int_function,
    assert_that_long_function,
};
pub use error::AssertionError;

/// Re-export `proptest` for convenience.
pub use proptest;
