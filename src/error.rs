//! Assertion failures and their messages.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A failed function assertion.
///
/// `Display` renders the full failure message; the panicking assertion methods
/// panic with exactly that text. Values are pre-rendered so the error carries
/// no borrow of the function or its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssertionError {
    /// The function under test was absent when the assertion was evaluated.
    #[error("{}\nExpecting actual not to be null", prefix(.description))]
    NullSubject {
        /// Description set through `described_as`, if any.
        description: Option<String>,
    },
    /// The function returned something other than the expected result.
    #[error(
        "{}\nExpecting:\n  <given {function}>\nto return <{expected}> on <{input}> but actual result was <{actual}>.",
        prefix(.description)
    )]
    ReturnMismatch {
        /// Description set through `described_as`, if any.
        description: Option<String>,
        /// Rendered type name of the function under test.
        function: String,
        /// Rendered input.
        input: String,
        /// Rendered expected result.
        expected: String,
        /// Rendered actual result.
        actual: String,
    },
}

impl AssertionError {
    /// Null-subject failure.
    pub fn null_subject(description: Option<&str>) -> Self {
        Self::NullSubject {
            description: description.map(str::to_string),
        }
    }

    /// Return mismatch failure built from already-rendered parts.
    pub fn should_return(
        description: Option<&str>,
        function: impl Into<String>,
        input: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::ReturnMismatch {
            description: description.map(str::to_string),
            function: function.into(),
            input: input.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Description attached to this failure.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::NullSubject { description } | Self::ReturnMismatch { description, .. } => {
                description.as_deref()
            }
        }
    }
}

fn prefix(description: &Option<String>) -> String {
    match description {
        Some(description) => format!("[{description}] "),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_subject_message_matches_framework_wording() {
        assert_eq!(
            AssertionError::null_subject(None).to_string(),
            "\nExpecting actual not to be null"
        );
    }

    #[test]
    fn mismatch_message_orders_expected_before_input() {
        let error = AssertionError::should_return(None, "{{closure}}", "123", "\"456\"", "\"123\"");
        assert_eq!(
            error.to_string(),
            "\nExpecting:\n  <given {{closure}}>\nto return <\"456\"> on <123> but actual result was <\"123\">."
        );
    }

    #[test]
    fn description_prefixes_message() {
        let error = AssertionError::null_subject(Some("formatter"));
        assert_eq!(
            error.to_string(),
            "[formatter] \nExpecting actual not to be null"
        );
        assert_eq!(error.description(), Some("formatter"));
    }

    #[test]
    fn json_roundtrip_preserves_error() {
        let error = AssertionError::should_return(Some("ids"), "fn(i64) -> u8", "7", "1", "2");
        let json = serde_json::to_string(&error).expect("error should serialize");
        assert!(json.contains("\"kind\":\"return_mismatch\""));
        let decoded: AssertionError = serde_json::from_str(&json).expect("error should parse");
        assert_eq!(decoded, error);
    }
}
