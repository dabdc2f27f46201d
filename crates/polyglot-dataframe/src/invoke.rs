//! Typed and anonymous expression invokers.
//!
//! Every catalog entry ends in one of two builders:
//!
//! - [`build_typed`] produces a canonical, dialect-neutral node (one
//!   [`Expression`] variant per [`NodeKind`]). The node carries no function
//!   name; the variant is the function.
//! - [`build_anonymous`] produces a generic [`Function`] call that carries its
//!   name verbatim, for the long tail of functions without a typed node.
//!
//! Typed nodes take their operands through named slots ([`TypedArgs`]). Each
//! kind declares which slots it requires and which it accepts; any mismatch is
//! reported as [`Error::InvalidNode`] instead of building a malformed node.

use std::fmt;

use crate::column::{ensure_column, Column, Value};
use crate::error::{Error, Result};
use crate::expressions::{
    AggFunc, ApproxDistinctFunc, ArrayConstructor, BinaryFunc, ConcatWs, CountFunc, CurrentDate,
    CurrentTimestamp, DateTruncFunc, Expression, Function, Identifier, JsonExtractFunc,
    MapConstructor, SplitFunc, StructConstructor, SubstringFunc, UnaryFunc, VarArgFunc,
};

/// The typed node kinds the catalog can construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Greatest,
    Least,
    Coalesce,
    Count,
    Sum,
    Avg,
    Max,
    Min,
    Sqrt,
    Abs,
    Ceil,
    Floor,
    Ln,
    Log,
    Log10,
    Log2,
    BitwiseNot,
    BitwiseLeftShift,
    BitwiseRightShift,
    Stddev,
    StddevSamp,
    StddevPop,
    Variance,
    VariancePop,
    ApproxDistinct,
    Struct,
    Array,
    Map,
    CurrentDate,
    CurrentTimestamp,
    Year,
    Month,
    DateAdd,
    DateSub,
    DateDiff,
    DateTrunc,
    TimestampTrunc,
    ConcatWs,
    Upper,
    Lower,
    Initcap,
    Length,
    Levenshtein,
    Split,
    ArrayContains,
    ArraySort,
    Explode,
    Posexplode,
    JsonExtract,
    Substring,
}

/// A named operand position of a typed node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The second operand of a binary node
    Expression,
    /// Trailing operands of a variadic node
    Expressions,
    /// Relative accuracy of an approximate aggregate
    Accuracy,
    /// Truncation unit
    Unit,
    /// Split limit, or substring length
    Limit,
    /// JSON path
    Path,
    /// Map keys
    Keys,
    /// Map values
    Values,
    /// DISTINCT flag
    Distinct,
}

impl Slot {
    pub fn name(self) -> &'static str {
        match self {
            Slot::Expression => "expression",
            Slot::Expressions => "expressions",
            Slot::Accuracy => "accuracy",
            Slot::Unit => "unit",
            Slot::Limit => "limit",
            Slot::Path => "path",
            Slot::Keys => "keys",
            Slot::Values => "values",
            Slot::Distinct => "distinct",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BaseRule {
    Required,
    Optional,
    Forbidden,
}

struct SlotRules {
    base: BaseRule,
    required: &'static [Slot],
    optional: &'static [Slot],
}

impl SlotRules {
    const fn new(base: BaseRule, required: &'static [Slot], optional: &'static [Slot]) -> Self {
        Self {
            base,
            required,
            optional,
        }
    }

    fn accepts(&self, slot: Slot) -> bool {
        self.required.contains(&slot) || self.optional.contains(&slot)
    }
}

const UNARY: SlotRules = SlotRules::new(BaseRule::Required, &[], &[]);
const BINARY: SlotRules = SlotRules::new(BaseRule::Required, &[Slot::Expression], &[]);
const AGGREGATE: SlotRules = SlotRules::new(BaseRule::Required, &[], &[Slot::Distinct]);
const VARIADIC: SlotRules = SlotRules::new(BaseRule::Optional, &[], &[Slot::Expressions]);
const NULLARY: SlotRules = SlotRules::new(BaseRule::Forbidden, &[], &[]);

impl NodeKind {
    /// The variant name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Greatest => "Greatest",
            NodeKind::Least => "Least",
            NodeKind::Coalesce => "Coalesce",
            NodeKind::Count => "Count",
            NodeKind::Sum => "Sum",
            NodeKind::Avg => "Avg",
            NodeKind::Max => "Max",
            NodeKind::Min => "Min",
            NodeKind::Sqrt => "Sqrt",
            NodeKind::Abs => "Abs",
            NodeKind::Ceil => "Ceil",
            NodeKind::Floor => "Floor",
            NodeKind::Ln => "Ln",
            NodeKind::Log => "Log",
            NodeKind::Log10 => "Log10",
            NodeKind::Log2 => "Log2",
            NodeKind::BitwiseNot => "BitwiseNot",
            NodeKind::BitwiseLeftShift => "BitwiseLeftShift",
            NodeKind::BitwiseRightShift => "BitwiseRightShift",
            NodeKind::Stddev => "Stddev",
            NodeKind::StddevSamp => "StddevSamp",
            NodeKind::StddevPop => "StddevPop",
            NodeKind::Variance => "Variance",
            NodeKind::VariancePop => "VariancePop",
            NodeKind::ApproxDistinct => "ApproxDistinct",
            NodeKind::Struct => "Struct",
            NodeKind::Array => "Array",
            NodeKind::Map => "Map",
            NodeKind::CurrentDate => "CurrentDate",
            NodeKind::CurrentTimestamp => "CurrentTimestamp",
            NodeKind::Year => "Year",
            NodeKind::Month => "Month",
            NodeKind::DateAdd => "DateAdd",
            NodeKind::DateSub => "DateSub",
            NodeKind::DateDiff => "DateDiff",
            NodeKind::DateTrunc => "DateTrunc",
            NodeKind::TimestampTrunc => "TimestampTrunc",
            NodeKind::ConcatWs => "ConcatWs",
            NodeKind::Upper => "Upper",
            NodeKind::Lower => "Lower",
            NodeKind::Initcap => "Initcap",
            NodeKind::Length => "Length",
            NodeKind::Levenshtein => "Levenshtein",
            NodeKind::Split => "Split",
            NodeKind::ArrayContains => "ArrayContains",
            NodeKind::ArraySort => "ArraySort",
            NodeKind::Explode => "Explode",
            NodeKind::Posexplode => "Posexplode",
            NodeKind::JsonExtract => "JsonExtract",
            NodeKind::Substring => "Substring",
        }
    }

    fn rules(self) -> SlotRules {
        match self {
            NodeKind::Greatest | NodeKind::Least | NodeKind::Coalesce => VARIADIC,
            NodeKind::ConcatWs => {
                SlotRules::new(BaseRule::Required, &[], &[Slot::Expressions])
            }
            NodeKind::Count => SlotRules::new(BaseRule::Optional, &[], &[Slot::Distinct]),
            NodeKind::Sum
            | NodeKind::Avg
            | NodeKind::Max
            | NodeKind::Min
            | NodeKind::Stddev
            | NodeKind::StddevSamp
            | NodeKind::StddevPop
            | NodeKind::Variance
            | NodeKind::VariancePop => AGGREGATE,
            NodeKind::ApproxDistinct => {
                SlotRules::new(BaseRule::Required, &[], &[Slot::Accuracy])
            }
            NodeKind::Sqrt
            | NodeKind::Abs
            | NodeKind::Ceil
            | NodeKind::Floor
            | NodeKind::Ln
            | NodeKind::Log10
            | NodeKind::Log2
            | NodeKind::BitwiseNot
            | NodeKind::Year
            | NodeKind::Month
            | NodeKind::Upper
            | NodeKind::Lower
            | NodeKind::Initcap
            | NodeKind::Length
            | NodeKind::ArraySort
            | NodeKind::Explode
            | NodeKind::Posexplode => UNARY,
            NodeKind::Log
            | NodeKind::BitwiseLeftShift
            | NodeKind::BitwiseRightShift
            | NodeKind::DateAdd
            | NodeKind::DateSub
            | NodeKind::DateDiff
            | NodeKind::Levenshtein
            | NodeKind::ArrayContains => BINARY,
            NodeKind::Struct | NodeKind::Array => {
                SlotRules::new(BaseRule::Forbidden, &[], &[Slot::Expressions])
            }
            NodeKind::Map => {
                SlotRules::new(BaseRule::Forbidden, &[Slot::Keys, Slot::Values], &[])
            }
            NodeKind::CurrentDate | NodeKind::CurrentTimestamp => NULLARY,
            NodeKind::DateTrunc | NodeKind::TimestampTrunc => {
                SlotRules::new(BaseRule::Required, &[Slot::Unit], &[])
            }
            NodeKind::Split => {
                SlotRules::new(BaseRule::Required, &[Slot::Expression], &[Slot::Limit])
            }
            NodeKind::JsonExtract => SlotRules::new(BaseRule::Required, &[Slot::Path], &[]),
            NodeKind::Substring => {
                SlotRules::new(BaseRule::Required, &[Slot::Expression], &[Slot::Limit])
            }
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named operands for [`build_typed`].
///
/// Builder methods normalize raw values with [`ensure_column`]; pass
/// [`crate::column::lit`] output where a string constant is meant.
///
/// ```
/// use polyglot_dataframe::column::{col, lit};
/// use polyglot_dataframe::invoke::{build_typed, NodeKind, TypedArgs};
///
/// let split = build_typed(
///     Some(col("s")),
///     NodeKind::Split,
///     TypedArgs::new().expression(lit(",")).limit(2),
/// )
/// .unwrap();
/// assert_eq!(split.sql(), "SPLIT(s, ',', 2)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypedArgs {
    expression: Option<Column>,
    expressions: Option<Vec<Column>>,
    accuracy: Option<Column>,
    unit: Option<Column>,
    limit: Option<Column>,
    path: Option<Column>,
    keys: Option<Vec<Column>>,
    values: Option<Vec<Column>>,
    distinct: bool,
}

impl TypedArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expression(mut self, value: impl Into<Value>) -> Self {
        self.expression = Some(ensure_column(value));
        self
    }

    pub fn expressions<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.expressions = Some(values.into_iter().map(|v| ensure_column(v)).collect());
        self
    }

    pub fn accuracy(mut self, value: impl Into<Value>) -> Self {
        self.accuracy = Some(ensure_column(value));
        self
    }

    pub fn unit(mut self, value: impl Into<Value>) -> Self {
        self.unit = Some(ensure_column(value));
        self
    }

    pub fn limit(mut self, value: impl Into<Value>) -> Self {
        self.limit = Some(ensure_column(value));
        self
    }

    pub fn path(mut self, value: impl Into<Value>) -> Self {
        self.path = Some(ensure_column(value));
        self
    }

    pub fn keys<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.keys = Some(values.into_iter().map(|v| ensure_column(v)).collect());
        self
    }

    pub fn values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.values = Some(values.into_iter().map(|v| ensure_column(v)).collect());
        self
    }

    pub fn distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }

    /// Fill a slot by name. List slots accumulate; scalar slots overwrite.
    pub fn set(mut self, slot: Slot, column: Column) -> Self {
        match slot {
            Slot::Expression => self.expression = Some(column),
            Slot::Expressions => self.expressions.get_or_insert_with(Vec::new).push(column),
            Slot::Accuracy => self.accuracy = Some(column),
            Slot::Unit => self.unit = Some(column),
            Slot::Limit => self.limit = Some(column),
            Slot::Path => self.path = Some(column),
            Slot::Keys => self.keys.get_or_insert_with(Vec::new).push(column),
            Slot::Values => self.values.get_or_insert_with(Vec::new).push(column),
            Slot::Distinct => self.distinct = true,
        }
        self
    }

    fn present(&self) -> Vec<Slot> {
        let mut slots = Vec::new();
        if self.expression.is_some() {
            slots.push(Slot::Expression);
        }
        if self.expressions.is_some() {
            slots.push(Slot::Expressions);
        }
        if self.accuracy.is_some() {
            slots.push(Slot::Accuracy);
        }
        if self.unit.is_some() {
            slots.push(Slot::Unit);
        }
        if self.limit.is_some() {
            slots.push(Slot::Limit);
        }
        if self.path.is_some() {
            slots.push(Slot::Path);
        }
        if self.keys.is_some() {
            slots.push(Slot::Keys);
        }
        if self.values.is_some() {
            slots.push(Slot::Values);
        }
        if self.distinct {
            slots.push(Slot::Distinct);
        }
        slots
    }
}

fn nodes(columns: Option<Vec<Column>>) -> Vec<Expression> {
    columns
        .unwrap_or_default()
        .into_iter()
        .map(Column::into_column_node)
        .collect()
}

fn node(column: Option<Column>) -> Expression {
    column
        .map(Column::into_column_node)
        .unwrap_or_else(Expression::null)
}

fn optional(column: Option<Column>) -> Option<Expression> {
    column.map(Column::into_column_node)
}

fn validate(kind: NodeKind, base: Option<&Column>, args: &TypedArgs) -> Result<()> {
    let rules = kind.rules();
    match (rules.base, base.is_some()) {
        (BaseRule::Required, false) => {
            return Err(Error::invalid_node(kind.name(), "missing base column"));
        }
        (BaseRule::Forbidden, true) => {
            return Err(Error::invalid_node(kind.name(), "does not take a base column"));
        }
        _ => {}
    }

    let present = args.present();
    if let Some(slot) = present.iter().find(|slot| !rules.accepts(**slot)) {
        return Err(Error::invalid_node(
            kind.name(),
            format!("unexpected `{}`", slot),
        ));
    }
    if let Some(slot) = rules.required.iter().find(|slot| !present.contains(*slot)) {
        return Err(Error::invalid_node(kind.name(), format!("missing `{}`", slot)));
    }

    let keys = args.keys.as_ref().map_or(0, Vec::len);
    let values = args.values.as_ref().map_or(0, Vec::len);
    if keys != values {
        return Err(Error::invalid_node(
            kind.name(),
            format!("{} key(s) but {} value(s)", keys, values),
        ));
    }
    Ok(())
}

/// Build a typed node of `kind` over `base` and the named slots in `args`.
///
/// Returns [`Error::InvalidNode`] when a required slot (or the base column) is
/// missing, or when a slot the kind does not accept is present.
pub fn build_typed(base: Option<Column>, kind: NodeKind, args: TypedArgs) -> Result<Column> {
    validate(kind, base.as_ref(), &args)?;
    Ok(construct(base, kind, args))
}

/// Assemble the node for an already well-formed call.
///
/// Catalog functions whose slot usage is fixed at compile time call this
/// directly; slots they leave empty are rendered as NULL.
pub(crate) fn construct(base: Option<Column>, kind: NodeKind, args: TypedArgs) -> Column {
    let this = base.map(Column::into_column_node);
    let TypedArgs {
        expression,
        expressions,
        accuracy,
        unit,
        limit,
        path,
        keys,
        values,
        distinct,
    } = args;

    let base = |this: Option<Expression>| this.unwrap_or_else(Expression::null);
    let unary = |this| Box::new(UnaryFunc::new(base(this)));
    let binary = |this, expression| Box::new(BinaryFunc::new(base(this), node(expression)));
    let aggregate = |this| {
        Box::new(AggFunc {
            this: base(this),
            distinct,
        })
    };
    let variadic = |this: Option<Expression>, rest| {
        let mut all: Vec<Expression> = this.into_iter().collect();
        all.extend(nodes(rest));
        Box::new(VarArgFunc { expressions: all })
    };

    let expr = match kind {
        NodeKind::Greatest => Expression::Greatest(variadic(this, expressions)),
        NodeKind::Least => Expression::Least(variadic(this, expressions)),
        NodeKind::Coalesce => Expression::Coalesce(variadic(this, expressions)),
        NodeKind::Count => Expression::Count(Box::new(CountFunc { this, distinct })),
        NodeKind::Sum => Expression::Sum(aggregate(this)),
        NodeKind::Avg => Expression::Avg(aggregate(this)),
        NodeKind::Max => Expression::Max(aggregate(this)),
        NodeKind::Min => Expression::Min(aggregate(this)),
        NodeKind::Stddev => Expression::Stddev(aggregate(this)),
        NodeKind::StddevSamp => Expression::StddevSamp(aggregate(this)),
        NodeKind::StddevPop => Expression::StddevPop(aggregate(this)),
        NodeKind::Variance => Expression::Variance(aggregate(this)),
        NodeKind::VariancePop => Expression::VariancePop(aggregate(this)),
        NodeKind::ApproxDistinct => Expression::ApproxDistinct(Box::new(ApproxDistinctFunc {
            this: base(this),
            accuracy: optional(accuracy),
        })),
        NodeKind::Sqrt => Expression::Sqrt(unary(this)),
        NodeKind::Abs => Expression::Abs(unary(this)),
        NodeKind::Ceil => Expression::Ceil(unary(this)),
        NodeKind::Floor => Expression::Floor(unary(this)),
        NodeKind::Ln => Expression::Ln(unary(this)),
        NodeKind::Log10 => Expression::Log10(unary(this)),
        NodeKind::Log2 => Expression::Log2(unary(this)),
        NodeKind::BitwiseNot => Expression::BitwiseNot(unary(this)),
        NodeKind::Year => Expression::Year(unary(this)),
        NodeKind::Month => Expression::Month(unary(this)),
        NodeKind::Upper => Expression::Upper(unary(this)),
        NodeKind::Lower => Expression::Lower(unary(this)),
        NodeKind::Initcap => Expression::Initcap(unary(this)),
        NodeKind::Length => Expression::Length(unary(this)),
        NodeKind::ArraySort => Expression::ArraySort(unary(this)),
        NodeKind::Explode => Expression::Explode(unary(this)),
        NodeKind::Posexplode => Expression::Posexplode(unary(this)),
        NodeKind::Log => Expression::Log(binary(this, expression)),
        NodeKind::BitwiseLeftShift => Expression::BitwiseLeftShift(binary(this, expression)),
        NodeKind::BitwiseRightShift => Expression::BitwiseRightShift(binary(this, expression)),
        NodeKind::DateAdd => Expression::DateAdd(binary(this, expression)),
        NodeKind::DateSub => Expression::DateSub(binary(this, expression)),
        NodeKind::DateDiff => Expression::DateDiff(binary(this, expression)),
        NodeKind::Levenshtein => Expression::Levenshtein(binary(this, expression)),
        NodeKind::ArrayContains => Expression::ArrayContains(binary(this, expression)),
        NodeKind::Struct => Expression::Struct(Box::new(StructConstructor {
            fields: expressions
                .unwrap_or_default()
                .into_iter()
                .map(struct_field)
                .collect(),
        })),
        NodeKind::Array => Expression::Array(Box::new(ArrayConstructor {
            expressions: nodes(expressions),
        })),
        NodeKind::Map => Expression::Map(Box::new(MapConstructor {
            keys: nodes(keys),
            values: nodes(values),
        })),
        NodeKind::CurrentDate => Expression::CurrentDate(CurrentDate),
        NodeKind::CurrentTimestamp => Expression::CurrentTimestamp(CurrentTimestamp),
        NodeKind::DateTrunc => Expression::DateTrunc(Box::new(DateTruncFunc {
            this: base(this),
            unit: node(unit),
        })),
        NodeKind::TimestampTrunc => Expression::TimestampTrunc(Box::new(DateTruncFunc {
            this: base(this),
            unit: node(unit),
        })),
        NodeKind::ConcatWs => Expression::ConcatWs(Box::new(ConcatWs {
            separator: base(this),
            expressions: nodes(expressions),
        })),
        NodeKind::Split => Expression::Split(Box::new(SplitFunc {
            this: base(this),
            delimiter: node(expression),
            limit: optional(limit),
        })),
        NodeKind::JsonExtract => Expression::JsonExtract(Box::new(JsonExtractFunc {
            this: base(this),
            path: node(path),
        })),
        NodeKind::Substring => Expression::Substring(Box::new(SubstringFunc {
            this: base(this),
            start: node(expression),
            length: optional(limit),
        })),
    };

    Column::new(expr)
}

/// Struct fields keep the alias of an aliased column as the field name.
fn struct_field(column: Column) -> (Option<Identifier>, Expression) {
    match column.into_node() {
        Expression::Alias(alias) => (Some(alias.alias), alias.this),
        other => (None, other),
    }
}

/// Build a generic `NAME(base, args...)` call.
///
/// Arguments are normalized with [`ensure_column`]; callers drop unset
/// optional arguments before calling.
pub fn build_anonymous(base: Option<Column>, name: &str, args: Vec<Value>) -> Column {
    let args = base
        .into_iter()
        .chain(args.into_iter().map(|arg| ensure_column(arg)))
        .map(Column::into_column_node)
        .collect();
    Column::new(Expression::Function(Box::new(Function::new(name, args))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{col, lit};

    #[test]
    fn test_typed_unary() {
        let c = build_typed(Some(col("a")), NodeKind::Sqrt, TypedArgs::new()).unwrap();
        assert!(matches!(c.node(), Expression::Sqrt(_)));
        assert_eq!(c.sql(), "SQRT(a)");
    }

    #[test]
    fn test_typed_variadic_prepends_base() {
        let c = build_typed(
            Some(col("a")),
            NodeKind::Coalesce,
            TypedArgs::new().expressions(["b", "c"]),
        )
        .unwrap();
        assert_eq!(c.sql(), "COALESCE(a, b, c)");
    }

    #[test]
    fn test_count_star_and_distinct() {
        let star = build_typed(None, NodeKind::Count, TypedArgs::new()).unwrap();
        assert_eq!(star.sql(), "COUNT(*)");
        let distinct =
            build_typed(Some(col("a")), NodeKind::Count, TypedArgs::new().distinct(true)).unwrap();
        assert_eq!(distinct.sql(), "COUNT(DISTINCT a)");
    }

    #[test]
    fn test_missing_slot() {
        let err = build_typed(Some(col("a")), NodeKind::DateAdd, TypedArgs::new()).unwrap_err();
        assert_eq!(
            err,
            Error::invalid_node("DateAdd", "missing `expression`")
        );
    }

    #[test]
    fn test_unexpected_slot() {
        let err = build_typed(Some(col("a")), NodeKind::Sqrt, TypedArgs::new().limit(1))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidNode { .. }));
    }

    #[test]
    fn test_base_rules() {
        assert!(build_typed(None, NodeKind::Upper, TypedArgs::new()).is_err());
        assert!(build_typed(Some(col("a")), NodeKind::CurrentDate, TypedArgs::new()).is_err());
        let now = build_typed(None, NodeKind::CurrentTimestamp, TypedArgs::new()).unwrap();
        assert_eq!(now.sql(), "CURRENT_TIMESTAMP()");
    }

    #[test]
    fn test_map_requires_matching_lengths() {
        let ok = build_typed(
            None,
            NodeKind::Map,
            TypedArgs::new().keys([lit("a")]).values(["x"]),
        )
        .unwrap();
        assert_eq!(ok.sql(), "MAP(ARRAY('a'), ARRAY(x))");
        let err = build_typed(
            None,
            NodeKind::Map,
            TypedArgs::new().keys([lit("a"), lit("b")]).values(["x"]),
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_struct_keeps_aliases() {
        let s = build_typed(
            None,
            NodeKind::Struct,
            TypedArgs::new().expressions([col("a").alias("x"), col("b")]),
        )
        .unwrap();
        assert_eq!(s.sql(), "STRUCT(a AS x, b)");
    }

    #[test]
    fn test_set_accumulates_lists() {
        let args = TypedArgs::new()
            .set(Slot::Expressions, col("b"))
            .set(Slot::Expressions, col("c"));
        let c = build_typed(Some(col("a")), NodeKind::Greatest, args).unwrap();
        assert_eq!(c.sql(), "GREATEST(a, b, c)");
    }

    #[test]
    fn test_anonymous() {
        let c = build_anonymous(Some(col("a")), "ROUND", vec![2.into()]);
        match c.node() {
            Expression::Function(f) => {
                assert_eq!(f.name, "ROUND");
                assert_eq!(f.args.len(), 2);
            }
            other => panic!("expected function, got {:?}", other),
        }
        assert_eq!(build_anonymous(None, "RAND", Vec::new()).sql(), "RAND()");
    }
}
