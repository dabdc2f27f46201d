//! Lambda synthesis for higher-order functions.
//!
//! Functions such as `transform` or `aggregate` take a Rust closure over
//! [`Column`]s. The closure is called exactly once with placeholder column
//! references, and the expression it returns becomes the body of a bound
//! `Lambda` node:
//!
//! ```
//! use polyglot_dataframe::column::Column;
//! use polyglot_dataframe::lambda::make_lambda;
//!
//! let lambda = make_lambda(&|acc: Column, x: Column| acc + x, &["acc", "x"]).unwrap();
//! assert_eq!(lambda.sql(), "(acc, x) -> acc + x");
//! ```
//!
//! Closures do not expose their parameter count at runtime, so the arity is
//! read from the closure's type through [`LambdaFn`]: one marker `Args` type
//! per supported arity, the same way handler traits dispatch on function
//! signatures.

use crate::column::Column;
use crate::error::{Error, Result};
use crate::expressions::{ColumnRef, Expression, Identifier, LambdaExpr};

/// Placeholder name that is never quoted when rendered.
pub const PLACEHOLDER: &str = "_";

/// Maximum number of parameters a synthesized lambda can bind.
pub const MAX_ARITY: usize = 3;

/// A closure over 1 to 3 columns that returns a column.
///
/// `Args` is a marker that makes the per-arity implementations disjoint; it
/// is always inferred.
pub trait LambdaFn<Args> {
    /// Number of parameters the closure declares.
    const ARITY: usize;

    /// Invoke the closure with the first `ARITY` entries of `params`.
    fn call(&self, params: [Column; MAX_ARITY]) -> Column;
}

impl<F> LambdaFn<(Column,)> for F
where
    F: Fn(Column) -> Column,
{
    const ARITY: usize = 1;

    fn call(&self, [x, _, _]: [Column; MAX_ARITY]) -> Column {
        self(x)
    }
}

impl<F> LambdaFn<(Column, Column)> for F
where
    F: Fn(Column, Column) -> Column,
{
    const ARITY: usize = 2;

    fn call(&self, [x, y, _]: [Column; MAX_ARITY]) -> Column {
        self(x, y)
    }
}

impl<F> LambdaFn<(Column, Column, Column)> for F
where
    F: Fn(Column, Column, Column) -> Column,
{
    const ARITY: usize = 3;

    fn call(&self, [x, y, z]: [Column; MAX_ARITY]) -> Column {
        self(x, y, z)
    }
}

/// Element-wise lambdas over an array: `x` or `(x, i)`.
pub trait ElementLambda<Args>: LambdaFn<Args> {}

impl<F> ElementLambda<(Column,)> for F where F: Fn(Column) -> Column {}

impl<F> ElementLambda<(Column, Column)> for F where F: Fn(Column, Column) -> Column {}

/// Identifier for a bound lambda parameter.
///
/// The placeholder `_` is explicitly unquoted; every other name leaves
/// quoting to the renderer.
pub fn parameter_identifier(name: &str) -> Identifier {
    if name == PLACEHOLDER {
        Identifier::unquoted(name)
    } else {
        Identifier::new(name)
    }
}

fn placeholder(name: &str) -> Column {
    Column::new(Expression::Column(ColumnRef {
        name: parameter_identifier(name),
        table: None,
    }))
}

/// Bind `body` to the first `F::ARITY` names of `names`.
///
/// The caller guarantees there are enough distinct names; [`make_lambda`] is
/// the checked entry point.
pub(crate) fn synthesize<F, Args>(body: &F, names: &[&str]) -> Column
where
    F: LambdaFn<Args> + ?Sized,
{
    let bound = &names[..F::ARITY.min(names.len())];
    tracing::trace!(arity = F::ARITY, names = ?bound, "synthesizing lambda");

    let params: [Column; MAX_ARITY] = std::array::from_fn(|i| match bound.get(i) {
        Some(name) => placeholder(name),
        None => Column::new(Expression::null()),
    });
    let body = body.call(params).into_column_node();

    Column::new(Expression::Lambda(Box::new(LambdaExpr {
        parameters: bound.iter().map(|name| parameter_identifier(name)).collect(),
        body,
    })))
}

/// Reify `body` into a `Lambda` node bound to the first `ARITY` names.
///
/// Fails with [`Error::LambdaArity`] when fewer names than the closure's
/// parameters are supplied, and with [`Error::InvalidArgument`] when the
/// bound names are not distinct.
pub fn make_lambda<F, Args>(body: &F, names: &[&str]) -> Result<Column>
where
    F: LambdaFn<Args> + ?Sized,
{
    if names.len() < F::ARITY {
        return Err(Error::LambdaArity {
            arity: F::ARITY,
            available: names.len(),
        });
    }
    let bound = &names[..F::ARITY];
    for (i, name) in bound.iter().enumerate() {
        if bound[..i].contains(name) {
            return Err(Error::invalid_argument(format!(
                "lambda parameter `{}` is bound more than once",
                name
            )));
        }
    }
    Ok(synthesize(body, bound))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parameters(lambda: &Column) -> Vec<Identifier> {
        match lambda.node() {
            Expression::Lambda(l) => l.parameters.clone(),
            other => panic!("expected lambda, got {:?}", other),
        }
    }

    #[test]
    fn test_arity_selects_names() {
        let one = make_lambda(&|x: Column| x + 1, &["x", "i"]).unwrap();
        assert_eq!(parameters(&one).len(), 1);
        assert_eq!(one.sql(), "x -> x + 1");

        let two = make_lambda(&|x: Column, i: Column| x + i, &["x", "i"]).unwrap();
        assert_eq!(parameters(&two).len(), 2);
        assert_eq!(two.sql(), "(x, i) -> x + i");
    }

    #[test]
    fn test_three_parameters() {
        let lambda = make_lambda(
            &|k: Column, v1: Column, v2: Column| k.eq(v1).and(v2.is_null()),
            &["k", "v1", "v2"],
        )
        .unwrap();
        assert_eq!(parameters(&lambda).len(), 3);
    }

    #[test]
    fn test_placeholder_is_unquoted() {
        let lambda = make_lambda(&|x: Column, _y: Column| x, &["_", "y"]).unwrap();
        let params = parameters(&lambda);
        assert_eq!(params[0].quoted, Some(false));
        assert_eq!(params[1].quoted, None);
    }

    #[test]
    fn test_too_few_names() {
        let err = make_lambda(&|a: Column, b: Column, _c: Column| a + b, &["a", "b"]).unwrap_err();
        assert_eq!(
            err,
            Error::LambdaArity {
                arity: 3,
                available: 2
            }
        );
    }

    #[test]
    fn test_duplicate_names() {
        let err = make_lambda(&|a: Column, b: Column| a + b, &["a", "a"]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_alias_in_body_is_stripped() {
        let lambda = make_lambda(&|x: Column| (x * 2).alias("doubled"), &["x"]).unwrap();
        assert_eq!(lambda.sql(), "x -> x * 2");
    }
}
