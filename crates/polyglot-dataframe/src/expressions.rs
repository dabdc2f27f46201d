//! SQL Expression AST (Abstract Syntax Tree).
//!
//! This module defines the AST node types produced by the dataframe function
//! catalog: an enum-based expression tree restricted to the nodes this layer
//! constructs.
//!
//! # Architecture
//!
//! The central type is [`Expression`], a tagged enum with one variant per
//! SQL construct. Inner structs carry the fields for each variant. Most
//! heap-allocated variants are wrapped in `Box` to keep the enum size small.
//!
//! # Variant Groups
//!
//! | Group | Examples | Purpose |
//! |---|---|---|
//! | **Literals** | `Literal`, `Boolean`, `Null` | Constant values |
//! | **References** | `Identifier`, `Column`, `Star`, `Raw` | Names and pre-formed SQL |
//! | **Generic calls** | `Function`, `Lambda` | Anonymous calls and bound lambdas |
//! | **Modifiers** | `Alias`, `Ordered`, `Hint`, `Case` | Wrappers around another node |
//! | **Operators** | `Add`, `Eq`, `And`, `Not` | Binary and unary operations |
//! | **Typed functions** | `Sum`, `Count`, `Coalesce`, `Split`, `Map` | Canonical cross-dialect functions |
//!
//! # SQL Rendering
//!
//! `Display` renders a dialect-agnostic SQL approximation of the tree. It is
//! meant for debugging and tests; dialect-correct generation belongs to a
//! downstream generator that matches on the typed variants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represent any SQL expression produced by the function catalog as a single,
/// recursive AST node.
///
/// Typed function variants (e.g. `Sum`, `Split`) never embed a function name:
/// the variant itself identifies the function, which lets a renderer choose
/// the dialect spelling. Everything else is a [`Function`] that carries its
/// name verbatim.
///
/// # Constructing Expressions
///
/// ```rust
/// use polyglot_dataframe::expressions::Expression;
///
/// let col = Expression::column("id");
/// let lit = Expression::number(42);
/// assert_eq!(col.to_string(), "id");
/// assert_eq!(lit.to_string(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    // Literals
    Literal(Literal),
    Boolean(BooleanLiteral),
    Null(Null),

    // References
    Identifier(Identifier),
    Column(ColumnRef),
    Star(Star),
    Raw(Raw),

    // Generic calls
    Function(Box<Function>),
    Lambda(Box<LambdaExpr>),

    // Modifiers
    Alias(Box<Alias>),
    Ordered(Box<Ordered>),
    Hint(Box<Hint>),
    Case(Box<Case>),

    // Binary operators
    Add(Box<BinaryOp>),
    Sub(Box<BinaryOp>),
    Mul(Box<BinaryOp>),
    Div(Box<BinaryOp>),
    Mod(Box<BinaryOp>),
    Eq(Box<BinaryOp>),
    Neq(Box<BinaryOp>),
    Lt(Box<BinaryOp>),
    Lte(Box<BinaryOp>),
    Gt(Box<BinaryOp>),
    Gte(Box<BinaryOp>),
    And(Box<BinaryOp>),
    Or(Box<BinaryOp>),

    // Unary operators
    Not(Box<UnaryOp>),
    Neg(Box<UnaryOp>),
    IsNull(Box<IsNull>),

    // Variadic functions
    Greatest(Box<VarArgFunc>),
    Least(Box<VarArgFunc>),
    Coalesce(Box<VarArgFunc>),

    // Aggregates
    Count(Box<CountFunc>),
    Sum(Box<AggFunc>),
    Avg(Box<AggFunc>),
    Max(Box<AggFunc>),
    Min(Box<AggFunc>),
    Stddev(Box<AggFunc>),
    StddevSamp(Box<AggFunc>),
    StddevPop(Box<AggFunc>),
    Variance(Box<AggFunc>),
    VariancePop(Box<AggFunc>),
    ApproxDistinct(Box<ApproxDistinctFunc>),

    // Unary scalar functions
    Sqrt(Box<UnaryFunc>),
    Abs(Box<UnaryFunc>),
    Ceil(Box<UnaryFunc>),
    Floor(Box<UnaryFunc>),
    Ln(Box<UnaryFunc>),
    Log10(Box<UnaryFunc>),
    Log2(Box<UnaryFunc>),
    BitwiseNot(Box<UnaryFunc>),
    Year(Box<UnaryFunc>),
    Month(Box<UnaryFunc>),
    Upper(Box<UnaryFunc>),
    Lower(Box<UnaryFunc>),
    Initcap(Box<UnaryFunc>),
    Length(Box<UnaryFunc>),
    Explode(Box<UnaryFunc>),
    Posexplode(Box<UnaryFunc>),
    ArraySort(Box<UnaryFunc>),

    // Binary scalar functions
    Log(Box<BinaryFunc>),
    BitwiseLeftShift(Box<BinaryFunc>),
    BitwiseRightShift(Box<BinaryFunc>),
    DateAdd(Box<BinaryFunc>),
    DateSub(Box<BinaryFunc>),
    DateDiff(Box<BinaryFunc>),
    Levenshtein(Box<BinaryFunc>),
    ArrayContains(Box<BinaryFunc>),

    // Constructors
    Struct(Box<StructConstructor>),
    Array(Box<ArrayConstructor>),
    Map(Box<MapConstructor>),

    // Date/time
    CurrentDate(CurrentDate),
    CurrentTimestamp(CurrentTimestamp),
    DateTrunc(Box<DateTruncFunc>),
    TimestampTrunc(Box<DateTruncFunc>),

    // Strings and JSON
    ConcatWs(Box<ConcatWs>),
    Split(Box<SplitFunc>),
    Substring(Box<SubstringFunc>),
    JsonExtract(Box<JsonExtractFunc>),
}

impl Expression {
    /// Create a literal number expression from an integer.
    pub fn number(n: i64) -> Self {
        Expression::Literal(Literal::Number(n.to_string()))
    }

    /// Create a literal number expression from a float.
    pub fn float(f: f64) -> Self {
        Expression::Literal(Literal::Number(f.to_string()))
    }

    /// Create a single-quoted literal string expression.
    pub fn string(s: impl Into<String>) -> Self {
        Expression::Literal(Literal::String(s.into()))
    }

    /// Create a TRUE or FALSE expression.
    pub fn boolean(value: bool) -> Self {
        Expression::Boolean(BooleanLiteral { value })
    }

    /// Create a NULL expression
    pub fn null() -> Self {
        Expression::Null(Null)
    }

    /// Create an unqualified column reference (e.g. `name`).
    pub fn column(name: impl Into<String>) -> Self {
        Expression::Column(ColumnRef {
            name: Identifier::new(name),
            table: None,
        })
    }

    /// Create a qualified column reference (`table.column`).
    pub fn qualified_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        Expression::Column(ColumnRef {
            name: Identifier::new(column),
            table: Some(Identifier::new(table)),
        })
    }

    /// Create a wildcard star (`*`) expression.
    pub fn star() -> Self {
        Expression::Star(Star { table: None })
    }

    /// Create an anonymous function call.
    pub fn function(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::Function(Box::new(Function::new(name, args)))
    }

    /// Check whether this is a literal tagged as a string.
    pub fn is_string_literal(&self) -> bool {
        matches!(self, Expression::Literal(Literal::String(_)))
    }

    /// Strip a top-level alias, returning the aliased expression.
    pub fn unalias(&self) -> &Expression {
        match self {
            Expression::Alias(a) => &a.this,
            other => other,
        }
    }

    /// The snake_case name of this node's variant, as used in serialized form.
    pub fn key(&self) -> &'static str {
        match self {
            Expression::Literal(_) => "literal",
            Expression::Boolean(_) => "boolean",
            Expression::Null(_) => "null",
            Expression::Identifier(_) => "identifier",
            Expression::Column(_) => "column",
            Expression::Star(_) => "star",
            Expression::Raw(_) => "raw",
            Expression::Function(_) => "function",
            Expression::Lambda(_) => "lambda",
            Expression::Alias(_) => "alias",
            Expression::Ordered(_) => "ordered",
            Expression::Hint(_) => "hint",
            Expression::Case(_) => "case",
            Expression::Add(_) => "add",
            Expression::Sub(_) => "sub",
            Expression::Mul(_) => "mul",
            Expression::Div(_) => "div",
            Expression::Mod(_) => "mod",
            Expression::Eq(_) => "eq",
            Expression::Neq(_) => "neq",
            Expression::Lt(_) => "lt",
            Expression::Lte(_) => "lte",
            Expression::Gt(_) => "gt",
            Expression::Gte(_) => "gte",
            Expression::And(_) => "and",
            Expression::Or(_) => "or",
            Expression::Not(_) => "not",
            Expression::Neg(_) => "neg",
            Expression::IsNull(_) => "is_null",
            Expression::Greatest(_) => "greatest",
            Expression::Least(_) => "least",
            Expression::Coalesce(_) => "coalesce",
            Expression::Count(_) => "count",
            Expression::Sum(_) => "sum",
            Expression::Avg(_) => "avg",
            Expression::Max(_) => "max",
            Expression::Min(_) => "min",
            Expression::Stddev(_) => "stddev",
            Expression::StddevSamp(_) => "stddev_samp",
            Expression::StddevPop(_) => "stddev_pop",
            Expression::Variance(_) => "variance",
            Expression::VariancePop(_) => "variance_pop",
            Expression::ApproxDistinct(_) => "approx_distinct",
            Expression::Sqrt(_) => "sqrt",
            Expression::Abs(_) => "abs",
            Expression::Ceil(_) => "ceil",
            Expression::Floor(_) => "floor",
            Expression::Ln(_) => "ln",
            Expression::Log10(_) => "log10",
            Expression::Log2(_) => "log2",
            Expression::BitwiseNot(_) => "bitwise_not",
            Expression::Year(_) => "year",
            Expression::Month(_) => "month",
            Expression::Upper(_) => "upper",
            Expression::Lower(_) => "lower",
            Expression::Initcap(_) => "initcap",
            Expression::Length(_) => "length",
            Expression::Explode(_) => "explode",
            Expression::Posexplode(_) => "posexplode",
            Expression::ArraySort(_) => "array_sort",
            Expression::Log(_) => "log",
            Expression::BitwiseLeftShift(_) => "bitwise_left_shift",
            Expression::BitwiseRightShift(_) => "bitwise_right_shift",
            Expression::DateAdd(_) => "date_add",
            Expression::DateSub(_) => "date_sub",
            Expression::DateDiff(_) => "date_diff",
            Expression::Levenshtein(_) => "levenshtein",
            Expression::ArrayContains(_) => "array_contains",
            Expression::Struct(_) => "struct",
            Expression::Array(_) => "array",
            Expression::Map(_) => "map",
            Expression::CurrentDate(_) => "current_date",
            Expression::CurrentTimestamp(_) => "current_timestamp",
            Expression::DateTrunc(_) => "date_trunc",
            Expression::TimestampTrunc(_) => "timestamp_trunc",
            Expression::ConcatWs(_) => "concat_ws",
            Expression::Split(_) => "split",
            Expression::Substring(_) => "substring",
            Expression::JsonExtract(_) => "json_extract",
        }
    }

    fn needs_parens(&self) -> bool {
        matches!(
            self,
            Expression::Add(_)
                | Expression::Sub(_)
                | Expression::Mul(_)
                | Expression::Div(_)
                | Expression::Mod(_)
                | Expression::Eq(_)
                | Expression::Neq(_)
                | Expression::Lt(_)
                | Expression::Lte(_)
                | Expression::Gt(_)
                | Expression::Gte(_)
                | Expression::And(_)
                | Expression::Or(_)
                | Expression::BitwiseLeftShift(_)
                | Expression::BitwiseRightShift(_)
        )
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Expression]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

fn write_call(f: &mut fmt::Formatter<'_>, name: &str, args: &[&Expression]) -> fmt::Result {
    write!(f, "{}(", name)?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", arg)?;
    }
    write!(f, ")")
}

fn write_binary_op(f: &mut fmt::Formatter<'_>, op: &str, node: &BinaryOp) -> fmt::Result {
    write_operand(f, &node.left)?;
    write!(f, " {} ", op)?;
    write_operand(f, &node.right)
}

fn write_aggregate(f: &mut fmt::Formatter<'_>, name: &str, agg: &AggFunc) -> fmt::Result {
    let distinct = if agg.distinct { "DISTINCT " } else { "" };
    write!(f, "{}({}{})", name, distinct, agg.this)
}

fn write_operand(f: &mut fmt::Formatter<'_>, operand: &Expression) -> fmt::Result {
    if operand.needs_parens() {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(lit) => write!(f, "{}", lit),
            Expression::Boolean(b) => write!(f, "{}", if b.value { "TRUE" } else { "FALSE" }),
            Expression::Null(_) => write!(f, "NULL"),
            Expression::Identifier(id) => write!(f, "{}", id),
            Expression::Column(col) => write!(f, "{}", col),
            Expression::Star(star) => match &star.table {
                Some(table) => write!(f, "{}.*", table),
                None => write!(f, "*"),
            },
            Expression::Raw(raw) => write!(f, "{}", raw.sql),
            Expression::Function(func) => {
                write!(f, "{}(", func.name)?;
                if func.distinct {
                    write!(f, "DISTINCT ")?;
                }
                write_list(f, &func.args)?;
                write!(f, ")")
            }
            Expression::Lambda(lambda) => write!(f, "{}", lambda),
            Expression::Alias(alias) => write!(f, "{} AS {}", alias.this, alias.alias),
            Expression::Ordered(ordered) => {
                write!(f, "{}", ordered.this)?;
                write!(f, "{}", if ordered.desc { " DESC" } else { " ASC" })?;
                match ordered.nulls_first {
                    Some(true) => write!(f, " NULLS FIRST"),
                    Some(false) => write!(f, " NULLS LAST"),
                    None => Ok(()),
                }
            }
            Expression::Hint(hint) => write!(f, "/*+ {} */ {}", hint.name.to_uppercase(), hint.this),
            Expression::Case(case) => {
                write!(f, "CASE")?;
                if let Some(operand) = &case.operand {
                    write!(f, " {}", operand)?;
                }
                for (condition, result) in &case.whens {
                    write!(f, " WHEN {} THEN {}", condition, result)?;
                }
                if let Some(else_) = &case.else_ {
                    write!(f, " ELSE {}", else_)?;
                }
                write!(f, " END")
            }
            Expression::Not(op) => {
                write!(f, "NOT ")?;
                write_operand(f, &op.this)
            }
            Expression::Neg(op) => {
                write!(f, "-")?;
                write_operand(f, &op.this)
            }
            Expression::IsNull(is_null) => {
                write_operand(f, &is_null.this)?;
                write!(f, "{}", if is_null.not { " IS NOT NULL" } else { " IS NULL" })
            }
            Expression::Greatest(func) => {
                write!(f, "GREATEST(")?;
                write_list(f, &func.expressions)?;
                write!(f, ")")
            }
            Expression::Least(func) => {
                write!(f, "LEAST(")?;
                write_list(f, &func.expressions)?;
                write!(f, ")")
            }
            Expression::Coalesce(func) => {
                write!(f, "COALESCE(")?;
                write_list(f, &func.expressions)?;
                write!(f, ")")
            }
            Expression::Count(count) => {
                write!(f, "COUNT(")?;
                if count.distinct {
                    write!(f, "DISTINCT ")?;
                }
                match &count.this {
                    Some(this) => write!(f, "{})", this),
                    None => write!(f, "*)"),
                }
            }
            Expression::ApproxDistinct(func) => match &func.accuracy {
                Some(accuracy) => write_call(f, "APPROX_COUNT_DISTINCT", &[&func.this, accuracy]),
                None => write_call(f, "APPROX_COUNT_DISTINCT", &[&func.this]),
            },
            Expression::BitwiseNot(func) => {
                write!(f, "~")?;
                write_operand(f, &func.this)
            }
            Expression::BitwiseLeftShift(func) => {
                write_operand(f, &func.this)?;
                write!(f, " << ")?;
                write_operand(f, &func.expression)
            }
            Expression::BitwiseRightShift(func) => {
                write_operand(f, &func.this)?;
                write!(f, " >> ")?;
                write_operand(f, &func.expression)
            }
            Expression::Struct(s) => {
                write!(f, "STRUCT(")?;
                for (i, (name, value)) in s.fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match name {
                        Some(name) => write!(f, "{} AS {}", value, name)?,
                        None => write!(f, "{}", value)?,
                    }
                }
                write!(f, ")")
            }
            Expression::Array(array) => {
                write!(f, "ARRAY(")?;
                write_list(f, &array.expressions)?;
                write!(f, ")")
            }
            Expression::Map(map) => {
                write!(f, "MAP(ARRAY(")?;
                write_list(f, &map.keys)?;
                write!(f, "), ARRAY(")?;
                write_list(f, &map.values)?;
                write!(f, "))")
            }
            Expression::CurrentDate(_) => write!(f, "CURRENT_DATE"),
            Expression::CurrentTimestamp(_) => write!(f, "CURRENT_TIMESTAMP()"),
            Expression::DateTrunc(func) => write_call(f, "DATE_TRUNC", &[&func.unit, &func.this]),
            Expression::TimestampTrunc(func) => {
                write_call(f, "TIMESTAMP_TRUNC", &[&func.this, &func.unit])
            }
            Expression::ConcatWs(func) => {
                write!(f, "CONCAT_WS({}", func.separator)?;
                for expr in &func.expressions {
                    write!(f, ", {}", expr)?;
                }
                write!(f, ")")
            }
            Expression::Split(func) => match &func.limit {
                Some(limit) => write_call(f, "SPLIT", &[&func.this, &func.delimiter, limit]),
                None => write_call(f, "SPLIT", &[&func.this, &func.delimiter]),
            },
            Expression::Substring(func) => match &func.length {
                Some(length) => write_call(f, "SUBSTRING", &[&func.this, &func.start, length]),
                None => write_call(f, "SUBSTRING", &[&func.this, &func.start]),
            },
            Expression::JsonExtract(func) => write_call(f, "JSON_EXTRACT", &[&func.this, &func.path]),
            Expression::Add(op) => write_binary_op(f, "+", op),
            Expression::Sub(op) => write_binary_op(f, "-", op),
            Expression::Mul(op) => write_binary_op(f, "*", op),
            Expression::Div(op) => write_binary_op(f, "/", op),
            Expression::Mod(op) => write_binary_op(f, "%", op),
            Expression::Eq(op) => write_binary_op(f, "=", op),
            Expression::Neq(op) => write_binary_op(f, "<>", op),
            Expression::Lt(op) => write_binary_op(f, "<", op),
            Expression::Lte(op) => write_binary_op(f, "<=", op),
            Expression::Gt(op) => write_binary_op(f, ">", op),
            Expression::Gte(op) => write_binary_op(f, ">=", op),
            Expression::And(op) => write_binary_op(f, "AND", op),
            Expression::Or(op) => write_binary_op(f, "OR", op),
            Expression::Sqrt(func) => write_call(f, "SQRT", &[&func.this]),
            Expression::Abs(func) => write_call(f, "ABS", &[&func.this]),
            Expression::Ceil(func) => write_call(f, "CEIL", &[&func.this]),
            Expression::Floor(func) => write_call(f, "FLOOR", &[&func.this]),
            Expression::Ln(func) => write_call(f, "LN", &[&func.this]),
            Expression::Log10(func) => write_call(f, "LOG10", &[&func.this]),
            Expression::Log2(func) => write_call(f, "LOG2", &[&func.this]),
            Expression::Year(func) => write_call(f, "YEAR", &[&func.this]),
            Expression::Month(func) => write_call(f, "MONTH", &[&func.this]),
            Expression::Upper(func) => write_call(f, "UPPER", &[&func.this]),
            Expression::Lower(func) => write_call(f, "LOWER", &[&func.this]),
            Expression::Initcap(func) => write_call(f, "INITCAP", &[&func.this]),
            Expression::Length(func) => write_call(f, "LENGTH", &[&func.this]),
            Expression::Explode(func) => write_call(f, "EXPLODE", &[&func.this]),
            Expression::Posexplode(func) => write_call(f, "POSEXPLODE", &[&func.this]),
            Expression::ArraySort(func) => write_call(f, "ARRAY_SORT", &[&func.this]),
            Expression::Log(func) => write_call(f, "LOG", &[&func.this, &func.expression]),
            Expression::DateAdd(func) => write_call(f, "DATE_ADD", &[&func.this, &func.expression]),
            Expression::DateSub(func) => write_call(f, "DATE_SUB", &[&func.this, &func.expression]),
            Expression::DateDiff(func) => write_call(f, "DATEDIFF", &[&func.this, &func.expression]),
            Expression::Levenshtein(func) => write_call(f, "LEVENSHTEIN", &[&func.this, &func.expression]),
            Expression::ArrayContains(func) => write_call(f, "ARRAY_CONTAINS", &[&func.this, &func.expression]),
            Expression::Sum(agg) => write_aggregate(f, "SUM", agg),
            Expression::Avg(agg) => write_aggregate(f, "AVG", agg),
            Expression::Max(agg) => write_aggregate(f, "MAX", agg),
            Expression::Min(agg) => write_aggregate(f, "MIN", agg),
            Expression::Stddev(agg) => write_aggregate(f, "STDDEV", agg),
            Expression::StddevSamp(agg) => write_aggregate(f, "STDDEV_SAMP", agg),
            Expression::StddevPop(agg) => write_aggregate(f, "STDDEV_POP", agg),
            Expression::Variance(agg) => write_aggregate(f, "VARIANCE", agg),
            Expression::VariancePop(agg) => write_aggregate(f, "VARIANCE_POP", agg),
        }
    }
}

/// Represent a SQL literal value.
///
/// Numeric values are stored as their text representation so that the
/// rendered SQL matches what the caller passed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "literal_type", content = "value", rename_all = "snake_case")]
pub enum Literal {
    /// Single-quoted string literal: `'hello'`
    String(String),
    /// Numeric literal, stored as text: `42`, `3.14`
    Number(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Literal::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Boolean literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanLiteral {
    pub value: bool,
}

/// NULL literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Null;

/// Represent a SQL identifier (column name, alias, lambda parameter).
///
/// `quoted` is tri-state: `Some(true)` always quotes, `Some(false)` never
/// quotes, and `None` leaves the decision to the renderer, which quotes only
/// names that are not plain `[A-Za-z_][A-Za-z0-9_]*` words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    /// The raw text of the identifier, without any quoting characters.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quoted: Option<bool>,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quoted: None,
        }
    }

    pub fn quoted(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quoted: Some(true),
        }
    }

    pub fn unquoted(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quoted: Some(false),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

pub(crate) fn is_safe_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if !(first == '_' || first.is_ascii_alphabetic()) {
        return false;
    }

    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quote = match self.quoted {
            Some(quoted) => quoted,
            None => !is_safe_identifier_name(&self.name),
        };
        if quote {
            write!(f, "\"{}\"", self.name.replace('"', "\"\""))
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// Represent a column reference, optionally qualified by a table name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRef {
    /// The column name.
    pub name: Identifier,
    /// Optional table qualifier (e.g. `t` in `t.col`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<Identifier>,
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(table) = &self.table {
            write!(f, "{}.", table)?;
        }
        write!(f, "{}", self.name)
    }
}

/// `*` or `table.*`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<Identifier>,
}

/// Pre-formed SQL text, emitted verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Raw {
    pub sql: String,
}

/// Represent a generic function call identified only by its name.
///
/// Functions without a dedicated typed variant are represented with this
/// struct and render as `NAME(arg1, arg2, ...)` on every dialect unless a
/// downstream transform rewrites them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Function {
    /// The function name, as it should be emitted.
    pub name: String,
    /// Positional arguments to the function.
    pub args: Vec<Expression>,
    /// Whether DISTINCT was specified inside the call.
    #[serde(default)]
    pub distinct: bool,
}

impl Function {
    pub fn new(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Self {
            name: name.into(),
            args,
            distinct: false,
        }
    }
}

/// Lambda expression: `x -> body` or `(acc, x) -> body`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LambdaExpr {
    pub parameters: Vec<Identifier>,
    pub body: Expression,
}

impl fmt::Display for LambdaExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parameters.as_slice() {
            [single] => write!(f, "{}", single)?,
            params => {
                write!(f, "(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", param)?;
                }
                write!(f, ")")?;
            }
        }
        write!(f, " -> {}", self.body)
    }
}

/// `expr AS alias`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alias {
    pub this: Expression,
    pub alias: Identifier,
}

impl Alias {
    pub fn new(this: Expression, alias: Identifier) -> Self {
        Self { this, alias }
    }
}

/// Represent an expression with sort direction and null ordering.
///
/// When `desc` is false the sort is ascending. `nulls_first` controls the
/// NULLS FIRST / NULLS LAST modifier; `None` means unspecified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ordered {
    /// The expression to sort by.
    pub this: Expression,
    /// Whether the sort direction is descending (true) or ascending (false).
    pub desc: bool,
    /// `Some(true)` = NULLS FIRST, `Some(false)` = NULLS LAST, `None` = unspecified.
    pub nulls_first: Option<bool>,
}

/// Optimizer hint attached to an expression (e.g. `BROADCAST`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hint {
    pub this: Expression,
    pub name: String,
}

/// Represent a CASE expression (both simple and searched forms).
///
/// When `operand` is `Some`, this is a simple CASE (`CASE x WHEN 1 THEN ...`).
/// When `operand` is `None`, this is a searched CASE (`CASE WHEN x > 0 THEN ...`).
/// Each entry in `whens` is a `(condition, result)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    /// The operand for simple CASE, or `None` for searched CASE.
    pub operand: Option<Expression>,
    /// Pairs of (WHEN condition, THEN result).
    pub whens: Vec<(Expression, Expression)>,
    /// Optional ELSE result.
    pub else_: Option<Expression>,
}

/// Represent a binary operation (two operands separated by an operator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryOp {
    pub left: Expression,
    pub right: Expression,
}

impl BinaryOp {
    pub fn new(left: Expression, right: Expression) -> Self {
        Self { left, right }
    }
}

/// Represent a unary operation (`NOT x`, `-x`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryOp {
    pub this: Expression,
}

impl UnaryOp {
    pub fn new(this: Expression) -> Self {
        Self { this }
    }
}

/// `x IS [NOT] NULL`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsNull {
    pub this: Expression,
    pub not: bool,
}

// ============================================================================
// Function expression types
// ============================================================================

/// Generic unary function (takes a single argument)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryFunc {
    pub this: Expression,
}

impl UnaryFunc {
    pub fn new(this: Expression) -> Self {
        Self { this }
    }
}

/// Generic binary function (takes two arguments)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryFunc {
    pub this: Expression,
    pub expression: Expression,
}

impl BinaryFunc {
    pub fn new(this: Expression, expression: Expression) -> Self {
        Self { this, expression }
    }
}

/// Variable argument function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarArgFunc {
    pub expressions: Vec<Expression>,
}

/// Generic aggregate function base type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggFunc {
    pub this: Expression,
    #[serde(default)]
    pub distinct: bool,
}

impl AggFunc {
    pub fn new(this: Expression) -> Self {
        Self {
            this,
            distinct: false,
        }
    }
}

/// COUNT function with optional star
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountFunc {
    pub this: Option<Expression>,
    #[serde(default)]
    pub distinct: bool,
}

/// APPROX_COUNT_DISTINCT with optional relative accuracy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproxDistinctFunc {
    pub this: Expression,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<Expression>,
}

/// STRUCT constructor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructConstructor {
    pub fields: Vec<(Option<Identifier>, Expression)>,
}

/// ARRAY constructor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayConstructor {
    pub expressions: Vec<Expression>,
}

/// MAP constructor from parallel key and value lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConstructor {
    pub keys: Vec<Expression>,
    pub values: Vec<Expression>,
}

/// CURRENT_DATE (no arguments)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentDate;

/// CURRENT_TIMESTAMP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentTimestamp;

/// DATE_TRUNC / TIMESTAMP_TRUNC with the unit given as an expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateTruncFunc {
    pub this: Expression,
    pub unit: Expression,
}

/// CONCAT_WS function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcatWs {
    pub separator: Expression,
    pub expressions: Vec<Expression>,
}

/// SPLIT function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitFunc {
    pub this: Expression,
    pub delimiter: Expression,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<Expression>,
}

/// SUBSTRING function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstringFunc {
    pub this: Expression,
    pub start: Expression,
    pub length: Option<Expression>,
}

/// JSON_EXTRACT function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonExtractFunc {
    pub this: Expression,
    pub path: Expression,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_display() {
        assert_eq!(Expression::string("it's").to_string(), "'it''s'");
        assert_eq!(Expression::number(7).to_string(), "7");
        assert_eq!(Expression::null().to_string(), "NULL");
        assert_eq!(Expression::boolean(true).to_string(), "TRUE");
    }

    #[test]
    fn test_identifier_quoting() {
        assert_eq!(Identifier::new("x").to_string(), "x");
        assert_eq!(Identifier::new("my col").to_string(), "\"my col\"");
        assert_eq!(Identifier::quoted("x").to_string(), "\"x\"");
        assert_eq!(Identifier::unquoted("_").to_string(), "_");
    }

    #[test]
    fn test_qualified_column() {
        assert_eq!(Expression::qualified_column("t", "a").to_string(), "t.a");
    }

    #[test]
    fn test_function_display() {
        let expr = Expression::function(
            "ROUND",
            vec![Expression::column("price"), Expression::number(2)],
        );
        assert_eq!(expr.to_string(), "ROUND(price, 2)");
    }

    #[test]
    fn test_typed_function_display() {
        let a = || Expression::column("a");
        let cases = [
            (Expression::Sqrt(Box::new(UnaryFunc::new(a()))), "SQRT(a)"),
            (Expression::ArraySort(Box::new(UnaryFunc::new(a()))), "ARRAY_SORT(a)"),
            (
                Expression::DateDiff(Box::new(BinaryFunc::new(a(), Expression::column("b")))),
                "DATEDIFF(a, b)",
            ),
            (Expression::VariancePop(Box::new(AggFunc::new(a()))), "VARIANCE_POP(a)"),
            (
                Expression::Mod(Box::new(BinaryOp::new(a(), Expression::number(2)))),
                "a % 2",
            ),
        ];
        for (expr, sql) in cases {
            assert_eq!(expr.to_string(), sql);
        }
    }

    #[test]
    fn test_nested_operator_parens() {
        let inner = Expression::Add(Box::new(BinaryOp::new(
            Expression::column("a"),
            Expression::number(1),
        )));
        let outer = Expression::Mul(Box::new(BinaryOp::new(inner, Expression::number(2))));
        assert_eq!(outer.to_string(), "(a + 1) * 2");
    }

    #[test]
    fn test_lambda_display() {
        let lambda = LambdaExpr {
            parameters: vec![Identifier::new("acc"), Identifier::new("x")],
            body: Expression::Add(Box::new(BinaryOp::new(
                Expression::column("acc"),
                Expression::column("x"),
            ))),
        };
        assert_eq!(lambda.to_string(), "(acc, x) -> acc + x");
    }

    #[test]
    fn test_key_matches_serde_tag() {
        let expr = Expression::Sum(Box::new(AggFunc::new(Expression::column("a"))));
        assert_eq!(expr.key(), "sum");
        assert_eq!(expr.to_string(), "SUM(a)");
    }

    #[test]
    fn test_unalias() {
        let aliased = Expression::Alias(Box::new(Alias::new(
            Expression::column("a"),
            Identifier::new("b"),
        )));
        assert_eq!(aliased.unalias(), &Expression::column("a"));
    }
}
