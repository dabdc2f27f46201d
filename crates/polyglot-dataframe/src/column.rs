//! The `Column` handle and the value normalizer.
//!
//! Every catalog entry returns a [`Column`]: an owned wrapper around exactly one
//! [`Expression`] node. Arguments arrive as [`Value`]s, which are normalized in
//! one of two ways:
//!
//! - [`lit`] treats a string as a **string constant** (`lit("a")` is `'a'`).
//! - [`ensure_column`] treats a string as a **column name** (`"a"` is `a`).
//!
//! Both pass an existing `Column` through untouched, so normalization is
//! idempotent.
//!
//! # Examples
//!
//! ```
//! use polyglot_dataframe::column::{col, lit};
//!
//! let predicate = col("age").gte(18).and(col("name").neq(lit("")));
//! assert_eq!(predicate.sql(), "(age >= 18) AND (name <> '')");
//! ```

use std::fmt;
use std::ops;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::expressions::{
    Alias, ArrayConstructor, BinaryOp, Case, Expression, Hint, Identifier, IsNull, Literal, Ordered,
    Raw,
    SubstringFunc, UnaryOp,
};

/// A dataframe column expression.
///
/// The handle owns its node; embedding one column into another consumes it,
/// and reusing an input in several positions clones the node by value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Column {
    expression: Expression,
}

impl Column {
    /// Wrap an AST node.
    pub fn new(expression: Expression) -> Self {
        Self { expression }
    }

    /// The full node, including any alias or ordering wrapper.
    pub fn node(&self) -> &Expression {
        &self.expression
    }

    /// The node with a top-level alias stripped.
    ///
    /// This is the node used when a column is embedded into an ordering or a
    /// CASE branch, where an alias would not be valid SQL.
    pub fn column_node(&self) -> &Expression {
        self.expression.unalias()
    }

    /// Consume the handle and return the inner node.
    pub fn into_node(self) -> Expression {
        self.expression
    }

    pub(crate) fn into_column_node(self) -> Expression {
        match self.expression {
            Expression::Alias(alias) => alias.this,
            other => other,
        }
    }

    /// Render generic SQL for debugging.
    pub fn sql(&self) -> String {
        self.expression.to_string()
    }

    /// The alias attached to this column, if any.
    pub fn alias_name(&self) -> Option<&str> {
        match &self.expression {
            Expression::Alias(alias) => Some(alias.alias.name.as_str()),
            _ => None,
        }
    }

    /// Produce `self AS name`, replacing any existing alias.
    pub fn alias(self, name: &str) -> Column {
        let this = self.into_column_node();
        Column::new(Expression::Alias(Box::new(Alias::new(
            this,
            Identifier::new(name),
        ))))
    }

    fn ordered(self, desc: bool, nulls_first: bool) -> Column {
        Column::new(Expression::Ordered(Box::new(Ordered {
            this: self.into_column_node(),
            desc,
            nulls_first: Some(nulls_first),
        })))
    }

    /// Ascending sort, nulls first.
    pub fn asc(self) -> Column {
        self.ordered(false, true)
    }

    pub fn asc_nulls_first(self) -> Column {
        self.ordered(false, true)
    }

    pub fn asc_nulls_last(self) -> Column {
        self.ordered(false, false)
    }

    /// Descending sort, nulls last.
    pub fn desc(self) -> Column {
        self.ordered(true, false)
    }

    pub fn desc_nulls_first(self) -> Column {
        self.ordered(true, true)
    }

    pub fn desc_nulls_last(self) -> Column {
        self.ordered(true, false)
    }

    /// Produce `SUBSTRING(self, start, length)` with 1-based `start`.
    pub fn substr(self, start: impl Into<Value>, length: impl Into<Value>) -> Column {
        Column::new(Expression::Substring(Box::new(SubstringFunc {
            this: self.into_column_node(),
            start: lit(start).into_node(),
            length: Some(lit(length).into_node()),
        })))
    }

    /// Attach an optimizer hint such as `broadcast`.
    pub fn hint(self, name: &str) -> Column {
        Column::new(Expression::Hint(Box::new(Hint {
            this: self.expression,
            name: name.to_string(),
        })))
    }

    /// Add another `WHEN condition THEN value` branch to a CASE built by
    /// [`crate::functions::when`].
    pub fn when(self, condition: Column, value: impl Into<Value>) -> Result<Column> {
        match self.expression {
            Expression::Case(mut case) if case.else_.is_none() => {
                case.whens
                    .push((condition.into_column_node(), lit(value).into_column_node()));
                Ok(Column::new(Expression::Case(case)))
            }
            _ => Err(Error::invalid_argument(
                "when() can only be chained on an open CASE produced by when()",
            )),
        }
    }

    /// Close a CASE built by [`crate::functions::when`] with an ELSE branch.
    pub fn otherwise(self, value: impl Into<Value>) -> Result<Column> {
        match self.expression {
            Expression::Case(mut case) if case.else_.is_none() => {
                case.else_ = Some(lit(value).into_column_node());
                Ok(Column::new(Expression::Case(case)))
            }
            _ => Err(Error::invalid_argument(
                "otherwise() can only be applied on an open CASE produced by when()",
            )),
        }
    }

    // -- Comparison operators --

    /// Produce a `self = other` equality comparison.
    pub fn eq(self, other: impl Into<Value>) -> Column {
        self.binary(other, Expression::Eq)
    }

    /// Produce a `self <> other` inequality comparison.
    pub fn neq(self, other: impl Into<Value>) -> Column {
        self.binary(other, Expression::Neq)
    }

    pub fn lt(self, other: impl Into<Value>) -> Column {
        self.binary(other, Expression::Lt)
    }

    pub fn lte(self, other: impl Into<Value>) -> Column {
        self.binary(other, Expression::Lte)
    }

    pub fn gt(self, other: impl Into<Value>) -> Column {
        self.binary(other, Expression::Gt)
    }

    pub fn gte(self, other: impl Into<Value>) -> Column {
        self.binary(other, Expression::Gte)
    }

    // -- Logical operators --

    /// Produce a `self AND other` logical conjunction.
    pub fn and(self, other: impl Into<Value>) -> Column {
        self.binary(other, Expression::And)
    }

    /// Produce a `self OR other` logical disjunction.
    pub fn or(self, other: impl Into<Value>) -> Column {
        self.binary(other, Expression::Or)
    }

    /// Produce a `self IS NULL` predicate.
    pub fn is_null(self) -> Column {
        Column::new(Expression::IsNull(Box::new(IsNull {
            this: self.into_column_node(),
            not: false,
        })))
    }

    /// Produce a `self IS NOT NULL` predicate.
    pub fn is_not_null(self) -> Column {
        Column::new(Expression::IsNull(Box::new(IsNull {
            this: self.into_column_node(),
            not: true,
        })))
    }

    fn binary(
        self,
        other: impl Into<Value>,
        variant: fn(Box<BinaryOp>) -> Expression,
    ) -> Column {
        let right = lit(other).into_column_node();
        Column::new(variant(Box::new(BinaryOp::new(
            self.into_column_node(),
            right,
        ))))
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

impl From<Expression> for Column {
    fn from(expression: Expression) -> Self {
        Column::new(expression)
    }
}

impl From<Column> for Expression {
    fn from(column: Column) -> Self {
        column.into_node()
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $variant:ident) => {
        impl<T: Into<Value>> ops::$trait<T> for Column {
            type Output = Column;

            fn $method(self, rhs: T) -> Column {
                self.binary(rhs, Expression::$variant)
            }
        }
    };
}

impl_binary_op!(Add, add, Add);
impl_binary_op!(Sub, sub, Sub);
impl_binary_op!(Mul, mul, Mul);
impl_binary_op!(Div, div, Div);
impl_binary_op!(Rem, rem, Mod);

impl ops::Neg for Column {
    type Output = Column;

    fn neg(self) -> Column {
        Column::new(Expression::Neg(Box::new(UnaryOp::new(
            self.into_column_node(),
        ))))
    }
}

impl ops::Not for Column {
    type Output = Column;

    fn not(self) -> Column {
        Column::new(Expression::Not(Box::new(UnaryOp::new(
            self.into_column_node(),
        ))))
    }
}

/// Anything a catalog function accepts in an argument position.
///
/// Whether a `Str` means a column name or a string constant depends on the
/// parameter: see [`ensure_column`] and [`lit`].
#[derive(Debug, Clone)]
pub enum Value {
    Column(Column),
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    List(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether the value counts as "set" for a flag-like optional argument.
    ///
    /// Zero, `false`, the empty string and the empty list count as unset;
    /// a column always counts as set.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Column(_) => true,
            Value::Str(s) => !s.is_empty(),
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Bool(b) => *b,
            Value::Null => false,
            Value::List(items) => !items.is_empty(),
        }
    }

    /// Returns the value as a bool if it is a boolean constant
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as an integer if it is an integer constant
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl From<Column> for Value {
    fn from(column: Column) -> Self {
        Value::Column(column)
    }
}

impl From<&Column> for Value {
    fn from(column: &Column) -> Self {
        Value::Column(column.clone())
    }
}

impl From<Expression> for Value {
    fn from(expression: Expression) -> Self {
        Value::Column(Column::new(expression))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Int(n as i64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

// Values past `i64::MAX` keep their digits as a numeric literal.
macro_rules! impl_from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    i64::try_from(n).map(Value::Int).unwrap_or_else(|_| {
                        Value::Column(Column::new(Expression::Literal(Literal::Number(
                            n.to_string(),
                        ))))
                    })
                }
            }
        )*
    };
}

impl_from_wide_int!(u64, usize, u128, i128);

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f as f64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

/// Build a column reference from a name.
///
/// A dotted name is split on its last dot into a qualified reference
/// (`"t.a"` becomes `t.a`), and `"*"` becomes a star.
pub fn col(name: &str) -> Column {
    if name == "*" {
        return Column::new(Expression::star());
    }
    match name.rsplit_once('.') {
        Some((table, "*")) => Column::new(Expression::Star(crate::expressions::Star {
            table: Some(Identifier::new(table)),
        })),
        Some((table, column)) => Column::new(Expression::qualified_column(table, column)),
        None => Column::new(Expression::column(name)),
    }
}

fn scalar(value: Value) -> Option<Expression> {
    match value {
        Value::Int(i) => Some(Expression::number(i)),
        Value::Float(f) => Some(Expression::float(f)),
        Value::Bool(b) => Some(Expression::boolean(b)),
        Value::Null => Some(Expression::null()),
        _ => None,
    }
}

/// Normalize a value into a constant.
///
/// Strings become string literals; an existing column passes through
/// unchanged; a list becomes an `ARRAY` of literals.
///
/// ```
/// use polyglot_dataframe::column::lit;
///
/// assert!(lit("x").node().is_string_literal());
/// assert!(!lit(3).node().is_string_literal());
/// ```
pub fn lit(value: impl Into<Value>) -> Column {
    match value.into() {
        Value::Column(column) => column,
        Value::Str(s) => Column::new(Expression::string(s)),
        Value::List(items) => array_of(items.into_iter().map(|item| lit(item))),
        other => Column::new(scalar(other).unwrap_or_else(Expression::null)),
    }
}

/// Normalize a value into a column.
///
/// Strings are column names (see [`col`]); other scalars are literals; an
/// existing column passes through unchanged; a list becomes an `ARRAY` of
/// ensured elements.
pub fn ensure_column(value: impl Into<Value>) -> Column {
    match value.into() {
        Value::Column(column) => column,
        Value::Str(s) => col(&s),
        Value::List(items) => array_of(items.into_iter().map(|item| ensure_column(item))),
        other => Column::new(scalar(other).unwrap_or_else(Expression::null)),
    }
}

/// Wrap pre-formed SQL text without any normalization.
pub fn raw_expression(sql: &str) -> Column {
    Column::new(Expression::Raw(Raw {
        sql: sql.to_string(),
    }))
}

fn array_of(items: impl Iterator<Item = Column>) -> Column {
    Column::new(Expression::Array(Box::new(ArrayConstructor {
        expressions: items.map(Column::into_column_node).collect(),
    })))
}

/// Build a searched CASE with a single branch.
pub(crate) fn case_when(condition: Column, value: Column) -> Column {
    Column::new(Expression::Case(Box::new(Case {
        operand: None,
        whens: vec![(condition.into_column_node(), value.into_column_node())],
        else_: None,
    })))
}

/// Types that can carry an optimizer hint.
///
/// Implemented for [`Column`]; a dataframe type would implement it to
/// accept `broadcast`.
pub trait Hintable: Sized {
    fn hint(self, name: &str) -> Self;
}

impl Hintable for Column {
    fn hint(self, name: &str) -> Self {
        Column::hint(self, name)
    }
}
