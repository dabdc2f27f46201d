//! Error types for polyglot-dataframe

use thiserror::Error;

/// The result type for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while lowering a function call into an expression
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The call combines arguments the SQL target cannot express
    #[error("Unsupported: {feature}")]
    Unsupported { feature: String },

    /// A typed node was built with slots that do not match its shape
    #[error("Cannot build {kind}: {message}")]
    InvalidNode { kind: String, message: String },

    /// The call shape itself is malformed (e.g. iterable followed by more arguments)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A function called by name received the wrong number of arguments
    #[error("{function} expects {expected} argument(s), got {got}")]
    Arity {
        function: String,
        expected: String,
        got: usize,
    },

    /// No catalog entry is registered under this name
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// The closure takes more parameters than there are names to bind
    #[error("Lambda takes {arity} parameter(s) but only {available} name(s) were supplied")]
    LambdaArity { arity: usize, available: usize },

    /// A higher-order function cannot be called without a closure
    #[error("{0} requires a lambda and cannot be called by name")]
    LambdaRequired(String),
}

impl Error {
    /// Create an unsupported feature error
    pub fn unsupported(feature: impl Into<String>) -> Self {
        let feature = feature.into();
        tracing::warn!(%feature, "rejecting unsupported function call");
        Error::Unsupported { feature }
    }

    /// Create an invalid node error
    pub fn invalid_node(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidNode {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    /// Create an arity error
    pub fn arity(function: impl Into<String>, expected: impl Into<String>, got: usize) -> Self {
        Error::Arity {
            function: function.into(),
            expected: expected.into(),
            got,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::unsupported("Product").to_string(),
            "Unsupported: Product"
        );
        assert_eq!(
            Error::arity("round", "1..2", 3).to_string(),
            "round expects 1..2 argument(s), got 3"
        );
        assert_eq!(
            Error::LambdaArity {
                arity: 3,
                available: 2
            }
            .to_string(),
            "Lambda takes 3 parameter(s) but only 2 name(s) were supplied"
        );
    }
}
