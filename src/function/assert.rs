//! The lazy `on(input).returns(expected)` assertion chain.

use std::fmt::{self, Debug};

use super::adapters::FunctionLike;
use crate::config::AssertionConfig;
use crate::error::AssertionError;
use crate::representation::{render_type_name, render_value};

/// Assertions about a function-like value.
///
/// The subject may be absent; that is only reported once an assertion is
/// evaluated, never at construction or at [`on`](Self::on).
pub struct FunctionLikeAssert<A> {
    subject: Option<A>,
    config: AssertionConfig,
}

impl<A: FunctionLike> FunctionLikeAssert<A> {
    /// Assert on `subject`, which may be `None`.
    pub fn new(subject: Option<A>) -> Self {
        Self {
            subject,
            config: AssertionConfig::default(),
        }
    }

    /// Assert on an absent function. Every evaluated assertion fails.
    pub fn null() -> Self {
        Self::new(None)
    }

    /// Assert on an optional raw function, wrapping it in its adapter.
    pub fn from_nullable<F>(function: Option<F>) -> Self
    where
        A: From<F>,
    {
        Self::new(function.map(A::from))
    }

    /// Replace the rendering configuration.
    pub fn with_config(mut self, config: AssertionConfig) -> Self {
        self.config = config;
        self
    }

    /// Prefix failure messages with `[description] `.
    pub fn described_as(mut self, description: impl Into<String>) -> Self {
        self.config.description = Some(description.into());
        self
    }

    /// The function under test.
    pub fn subject(&self) -> Option<&A> {
        self.subject.as_ref()
    }

    /// Active configuration.
    pub fn config(&self) -> &AssertionConfig {
        &self.config
    }

    /// Start a lazy assertion chain for `input`. Does not evaluate anything.
    pub fn on(&self, input: A::Input) -> On<'_, A> {
        On {
            assertion: self,
            input,
        }
    }

    /// Verify the subject is present.
    ///
    /// # Panics
    ///
    /// Panics with the null-subject message if the subject is absent.
    #[track_caller]
    pub fn is_not_null(&self) -> &Self {
        if let Err(error) = self.try_is_not_null() {
            fail(error);
        }
        self
    }

    /// Verify the subject is present, returning it.
    pub fn try_is_not_null(&self) -> Result<&A, AssertionError> {
        self.subject
            .as_ref()
            .ok_or_else(|| AssertionError::null_subject(self.config.description.as_deref()))
    }
}

impl<A: FunctionLike> Debug for FunctionLikeAssert<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionLikeAssert")
            .field("subject", &self.subject.as_ref().map(|subject| subject.type_name()))
            .field("config", &self.config)
            .finish()
    }
}

/// A pending call: one input bound to the assertion it came from.
///
/// Produced by [`FunctionLikeAssert::on`] and consumed by exactly one
/// [`returns`](Self::returns) or [`try_returns`](Self::try_returns).
#[must_use = "a pending call asserts nothing until `returns` is called"]
pub struct On<'a, A: FunctionLike> {
    assertion: &'a FunctionLikeAssert<A>,
    input: A::Input,
}

impl<'a, A> On<'a, A>
where
    A: FunctionLike,
    A::Input: Debug,
    A::Output: PartialEq + Debug,
{
    /// Verify the function maps the bound input to `expected`.
    ///
    /// Returns the originating assertion so the chain can continue with
    /// another `.on(...)`.
    ///
    /// # Panics
    ///
    /// Panics if the subject is absent, or if the function returns anything
    /// other than `expected`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use function_assert::assert_that_int_function;
    ///
    /// assert_that_int_function(|i| i.to_string())
    ///     .on(10).returns("10".to_string())
    ///     .on(11).returns("11".to_string());
    /// ```
    #[track_caller]
    pub fn returns(self, expected: A::Output) -> &'a FunctionLikeAssert<A> {
        match self.try_returns(expected) {
            Ok(assertion) => assertion,
            Err(error) => fail(error),
        }
    }

    /// Like [`returns`](Self::returns), but hands the failure back instead of panicking.
    pub fn try_returns(self, expected: A::Output) -> Result<&'a FunctionLikeAssert<A>, AssertionError> {
        let assertion = self.assertion;
        let function = assertion.try_is_not_null()?;

        // Rendered up front: evaluation consumes the input.
        let input = render_value(&self.input);
        let actual = function.apply(self.input);
        if actual == expected {
            return Ok(assertion);
        }

        Err(AssertionError::should_return(
            assertion.config.description.as_deref(),
            render_type_name(function.type_name(), assertion.config.type_names),
            input,
            render_value(&expected),
            render_value(&actual),
        ))
    }
}

impl<A: FunctionLike> On<'_, A> {
    /// The bound input.
    pub fn input(&self) -> &A::Input {
        &self.input
    }
}

#[track_caller]
fn fail(error: AssertionError) -> ! {
    panic!("{error}")
}
