//! Polyglot Dataframe - dataframe function catalog over a SQL expression tree
//!
//! This library lowers dataframe-style function calls (`sum`, `split`,
//! `transform`, ...) into nodes of a dialect-neutral SQL AST. Each call returns
//! a [`Column`] wrapping exactly one [`Expression`]; rendering for a concrete
//! dialect is left to a downstream generator.
//!
//! # Architecture
//!
//! The library is organized in layers:
//! 1. **Normalizer** ([`column`]) - Turns raw values into columns or literals
//! 2. **Invokers** ([`invoke`], [`lambda`]) - Build typed nodes, generic calls
//!    and lambda nodes
//! 3. **Catalog** ([`functions`], [`catalog`]) - One entry per public function,
//!    as free functions and as a name-keyed table
//!
//! # Example
//! ```
//! use polyglot_dataframe::functions::*;
//!
//! let total = sum(col("price") * col("qty")).alias("total");
//! assert_eq!(total.sql(), "SUM(price * qty) AS total");
//! ```

pub mod catalog;
pub mod column;
pub mod error;
pub mod expressions;
pub mod flatten;
pub mod functions;
pub mod invoke;
pub mod lambda;

pub use catalog::{Catalog, CatalogConfig, FunctionNameCase, FunctionSpec, FUNCTION_SPECS};
pub use column::{col, ensure_column, lit, raw_expression, Column, Hintable, Value};
pub use error::{Error, Result};
pub use expressions::Expression;
pub use flatten::flatten_columns;
pub use invoke::{build_anonymous, build_typed, NodeKind, Slot, TypedArgs};
pub use lambda::{make_lambda, ElementLambda, LambdaFn};

/// Call a catalog function by name on the global catalog.
///
/// # Example
/// ```
/// use polyglot_dataframe::call;
///
/// let upper = call("upper", vec!["name".into()]).unwrap();
/// assert_eq!(upper.sql(), "UPPER(name)");
/// ```
pub fn call(name: &str, args: Vec<Value>) -> Result<Column> {
    Catalog::global().call(name, args)
}
