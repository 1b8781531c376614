//! Adapters normalizing each supported function shape into [`FunctionLike`].

use std::marker::PhantomData;

/// A single-argument callable that assertions can evaluate.
///
/// Implementations are pure pass-through: no caching, and safe to apply any
/// number of times across a chain.
pub trait FunctionLike {
    /// Argument type accepted by `on(...)`.
    type Input;
    /// Result type compared by `returns(...)`.
    type Output;

    /// Evaluate the wrapped function.
    fn apply(&self, input: Self::Input) -> Self::Output;

    /// Runtime type name of the wrapped function, used in failure messages.
    fn type_name(&self) -> &'static str;
}

/// Any `Fn(T) -> R`.
pub struct UnaryFunction<F, T> {
    function: F,
    input: PhantomData<fn(T)>,
}

impl<F, T> UnaryFunction<F, T> {
    /// Wrap a function.
    pub fn new(function: F) -> Self {
        Self {
            function,
            input: PhantomData,
        }
    }

    /// Borrow the wrapped function.
    pub fn get_ref(&self) -> &F {
        &self.function
    }

    /// Unwrap the function.
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F, T> From<F> for UnaryFunction<F, T> {
    fn from(function: F) -> Self {
        Self::new(function)
    }
}

impl<F, T, R> FunctionLike for UnaryFunction<F, T>
where
    F: Fn(T) -> R,
{
    type Input = T;
    type Output = R;

    fn apply(&self, input: T) -> R {
        (self.function)(input)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<F>()
    }
}

macro_rules! primitive_function {
    ($(#[$meta:meta])* $name:ident, $primitive:ty) => {
        $(#[$meta])*
        pub struct $name<F> {
            function: F,
        }

        impl<F> $name<F> {
            /// Wrap a function.
            pub fn new(function: F) -> Self {
                Self { function }
            }

            /// Borrow the wrapped function.
            pub fn get_ref(&self) -> &F {
                &self.function
            }

            /// Unwrap the function.
            pub fn into_inner(self) -> F {
                self.function
            }
        }

        impl<F> From<F> for $name<F> {
            fn from(function: F) -> Self {
                Self::new(function)
            }
        }

        impl<F, R> FunctionLike for $name<F>
        where
            F: Fn($primitive) -> R,
        {
            type Input = $primitive;
            type Output = R;

            fn apply(&self, input: $primitive) -> R {
                (self.function)(input)
            }

            fn type_name(&self) -> &'static str {
                std::any::type_name::<F>()
            }
        }
    };
}

primitive_function!(
    /// A function taking an `i32`.
    IntFunction,
    i32
);
primitive_function!(
    /// A function taking an `i64`.
    LongFunction,
    i64
);
primitive_function!(
    /// A function taking an `f64`.
    DoubleFunction,
    f64
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn to_text(value: i32) -> String {
        value.to_string()
    }

    #[test]
    fn adapters_pass_input_through() {
        assert_eq!(UnaryFunction::<_, &str>::new(|s: &str| s.len()).apply("four"), 4);
        assert_eq!(IntFunction::new(to_text).apply(-7), "-7");
        assert_eq!(LongFunction::new(|l: i64| l * 2).apply(i64::MAX / 2), i64::MAX - 1);
        assert_eq!(DoubleFunction::new(|d: f64| d.floor()).apply(2.5), 2.0);
    }

    #[test]
    fn every_apply_invokes_the_function() {
        let calls = Cell::new(0);
        let counted = IntFunction::new(|i: i32| {
            calls.set(calls.get() + 1);
            i
        });

        counted.apply(1);
        counted.apply(1);
        counted.apply(1);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn type_name_reports_the_wrapped_function() {
        assert!(IntFunction::new(to_text).type_name().ends_with("to_text"));
        assert_eq!(
            IntFunction::new(to_text as fn(i32) -> String).type_name(),
            "fn(i32) -> alloc::string::String"
        );
    }

    #[test]
    fn accessors_expose_the_function() {
        let wrapped = LongFunction::new(|l: i64| l + 1);
        assert_eq!((wrapped.get_ref())(1), 2);
        assert_eq!((wrapped.into_inner())(2), 3);
    }
}
