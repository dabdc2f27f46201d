//! Name-keyed function catalog.
//!
//! [`FUNCTION_SPECS`] describes every public dataframe function as data: how
//! its positional arguments are coerced, which of them may be omitted, and
//! which invoker builds the node. [`Catalog::call`] interprets an entry, so a
//! function can be invoked by name with a `Vec<Value>`:
//!
//! ```
//! use polyglot_dataframe::catalog::Catalog;
//!
//! let round = Catalog::global().call("round", vec!["price".into(), 2.into()]).unwrap();
//! assert_eq!(round.sql(), "ROUND(price, 2)");
//! ```
//!
//! The table is the single source of truth for names and aliases; the free
//! functions in [`crate::functions`] build the same nodes.

use std::collections::HashMap;
use std::sync::LazyLock;
use std::vec;

use crate::column::{col, ensure_column, lit, raw_expression, Column, Value};
use crate::error::{Error, Result};
use crate::flatten::flatten_columns;
use crate::functions;
use crate::invoke::{build_anonymous, build_typed, NodeKind, Slot, TypedArgs};

/// How a catalog entry builds its node.
#[derive(Debug, Clone, Copy)]
pub enum Invoker {
    /// A canonical typed node
    Typed(NodeKind),
    /// A generic call carrying this SQL name
    Anonymous(&'static str),
    /// Bespoke argument wiring
    Native(fn(CallArgs) -> Result<Column>),
    /// Needs a Rust closure; only reachable through [`crate::functions`]
    HigherOrder,
    /// Always rejected with this feature description
    Unsupported(&'static str),
}

/// Whether the argument list is flattened before binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgShape {
    Fixed,
    /// A single iterable argument is expanded one level
    FlattenFirst,
}

/// How a raw argument value becomes a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coerce {
    /// Strings are column names
    Column,
    /// Strings are string constants
    Literal,
}

impl Coerce {
    fn apply(self, value: Value) -> Column {
        match self {
            Coerce::Column => ensure_column(value),
            Coerce::Literal => lit(value),
        }
    }
}

/// A constant default for a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Const {
    Int(i64),
    Str(&'static str),
    Bool(bool),
}

impl Const {
    fn matches(self, value: &Value) -> bool {
        match (self, value) {
            (Const::Int(a), Value::Int(b)) => a == *b,
            (Const::Str(a), Value::Str(b)) => a == b,
            (Const::Bool(a), Value::Bool(b)) => a == *b,
            _ => false,
        }
    }

    fn value(self) -> Value {
        match self {
            Const::Int(i) => Value::Int(i),
            Const::Str(s) => Value::Str(s.to_string()),
            Const::Bool(b) => Value::Bool(b),
        }
    }
}

/// When a parameter is emitted into the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Always emitted
    Required,
    /// Emitted unless null
    Optional,
    /// Dropped when null or equal to the default, unless a later argument is
    /// emitted, in which case it is spelled out (filled with the default)
    Default(Const),
    /// Collects every remaining argument
    Variadic,
    /// Fails with `Unsupported` when set
    Rejected(&'static str),
}

/// One positional parameter of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub coerce: Coerce,
    pub presence: Presence,
    /// Typed slot the argument fills; `None` is the base column
    pub slot: Option<Slot>,
}

impl Param {
    pub const fn column(name: &'static str) -> Self {
        Self {
            name,
            coerce: Coerce::Column,
            presence: Presence::Required,
            slot: None,
        }
    }

    pub const fn literal(name: &'static str) -> Self {
        Self {
            name,
            coerce: Coerce::Literal,
            presence: Presence::Required,
            slot: None,
        }
    }

    pub const fn optional(mut self) -> Self {
        self.presence = Presence::Optional;
        self
    }

    pub const fn defaults_to(mut self, value: Const) -> Self {
        self.presence = Presence::Default(value);
        self
    }

    pub const fn variadic(mut self) -> Self {
        self.presence = Presence::Variadic;
        self
    }

    pub const fn rejected(mut self, feature: &'static str) -> Self {
        self.presence = Presence::Rejected(feature);
        self
    }

    pub const fn slot(mut self, slot: Slot) -> Self {
        self.slot = Some(slot);
        self
    }
}

/// A catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct FunctionSpec {
    pub name: &'static str,
    /// Legacy spellings that resolve to this entry
    pub aliases: &'static [&'static str],
    pub invoker: Invoker,
    pub shape: ArgShape,
    pub params: &'static [Param],
}

impl FunctionSpec {
    const fn new(name: &'static str, invoker: Invoker, params: &'static [Param]) -> Self {
        Self {
            name,
            aliases: &[],
            invoker,
            shape: ArgShape::Fixed,
            params,
        }
    }

    const fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    const fn flatten(mut self) -> Self {
        self.shape = ArgShape::FlattenFirst;
        self
    }

    /// Minimum and maximum positional argument counts (`None` is unbounded).
    pub fn arity(&self) -> (usize, Option<usize>) {
        let min = self
            .params
            .iter()
            .filter(|p| p.presence == Presence::Required)
            .count();
        let variadic = self.params.iter().any(|p| p.presence == Presence::Variadic);
        (min, (!variadic).then_some(self.params.len()))
    }

    fn check_arity(&self, got: usize) -> Result<()> {
        let (min, max) = self.arity();
        let within = got >= min && max.map_or(true, |max| got <= max);
        if within {
            return Ok(());
        }
        let expected = match max {
            Some(max) if max == min => min.to_string(),
            Some(max) => format!("{}..{}", min, max),
            None => format!("at least {}", min),
        };
        Err(Error::arity(self.name, expected, got))
    }

    /// Bind positional arguments to parameters and keep the ones that are
    /// emitted, coerced and in order.
    fn bind(&self, args: Vec<Value>) -> Result<Vec<(&'static Param, Column)>> {
        let mut args = args.into_iter();
        let mut bound: Vec<(&'static Param, Value)> = Vec::with_capacity(self.params.len());
        for param in self.params {
            match param.presence {
                Presence::Variadic => bound.extend(args.by_ref().map(|value| (param, value))),
                _ => bound.push((param, args.next().unwrap_or(Value::Null))),
            }
        }

        let mut emitted = Vec::with_capacity(bound.len());
        let mut later = false;
        for (param, value) in bound.into_iter().rev() {
            let value = match param.presence {
                Presence::Required | Presence::Variadic => Some(value),
                Presence::Optional => (!value.is_null()).then_some(value),
                Presence::Default(default) if later => Some(if value.is_null() {
                    default.value()
                } else {
                    value
                }),
                Presence::Default(default) => {
                    (!value.is_null() && !default.matches(&value)).then_some(value)
                }
                Presence::Rejected(feature) => {
                    if !value.is_null() {
                        return Err(Error::unsupported(feature));
                    }
                    None
                }
            };
            if let Some(value) = value {
                later = true;
                emitted.push((param, param.coerce.apply(value)));
            }
        }
        emitted.reverse();
        Ok(emitted)
    }

    /// Flattens and arity-checks the positional arguments.
    fn prepare(&self, args: Vec<Value>) -> Result<Vec<Value>> {
        let args = match self.shape {
            ArgShape::Fixed => args,
            ArgShape::FlattenFirst => flatten_columns(args)?
                .into_iter()
                .map(Value::Column)
                .collect(),
        };
        self.check_arity(args.len())?;
        Ok(args)
    }

    fn invoke(&self, args: Vec<Value>) -> Result<Column> {
        match self.invoker {
            Invoker::Typed(kind) => {
                let mut base = None;
                let mut typed = TypedArgs::new();
                for (param, column) in self.bind(self.prepare(args)?)? {
                    match param.slot {
                        Some(slot) => typed = typed.set(slot, column),
                        None if base.is_none() => base = Some(column),
                        None => typed = typed.set(Slot::Expressions, column),
                    }
                }
                build_typed(base, kind, typed)
            }
            Invoker::Anonymous(sql_name) => {
                let args = self
                    .bind(self.prepare(args)?)?
                    .into_iter()
                    .map(|(_, column)| Value::Column(column))
                    .collect();
                Ok(build_anonymous(None, sql_name, args))
            }
            Invoker::Native(native) => native(CallArgs::new(self.name, self.prepare(args)?)),
            // Neither is callable by name, whatever the argument count.
            Invoker::HigherOrder => Err(Error::LambdaRequired(self.name.to_string())),
            Invoker::Unsupported(feature) => Err(Error::unsupported(feature)),
        }
    }
}

/// Positional arguments handed to a native entry.
///
/// Reading past the end yields `Value::Null`, so optional trailing
/// parameters need no special casing.
#[derive(Debug)]
pub struct CallArgs {
    function: &'static str,
    args: vec::IntoIter<Value>,
}

impl CallArgs {
    fn new(function: &'static str, args: Vec<Value>) -> Self {
        Self {
            function,
            args: args.into_iter(),
        }
    }

    /// The next argument, or `Value::Null`.
    pub fn take(&mut self) -> Value {
        self.args.next().unwrap_or(Value::Null)
    }

    /// The next argument if it is set.
    pub fn optional(&mut self) -> Option<Value> {
        Some(self.take()).filter(|value| !value.is_null())
    }

    /// Every remaining argument.
    pub fn rest(&mut self) -> Vec<Value> {
        self.args.by_ref().collect()
    }

    /// The next argument as a string constant.
    pub fn string(&mut self, param: &str) -> Result<String> {
        match self.take() {
            Value::Str(s) => Ok(s),
            other => Err(Error::invalid_argument(format!(
                "{}: `{}` must be a string, got {:?}",
                self.function, param, other
            ))),
        }
    }

    pub fn optional_string(&mut self, param: &str) -> Result<Option<String>> {
        match self.take() {
            Value::Null => Ok(None),
            Value::Str(s) => Ok(Some(s)),
            other => Err(Error::invalid_argument(format!(
                "{}: `{}` must be a string, got {:?}",
                self.function, param, other
            ))),
        }
    }

    /// Reader/writer options as a list of `[key, value]` string pairs.
    pub fn options(&mut self) -> Result<Option<Vec<(String, String)>>> {
        let items = match self.take() {
            Value::Null => return Ok(None),
            Value::List(items) => items,
            other => {
                return Err(Error::invalid_argument(format!(
                    "{}: options must be a list of key/value pairs, got {:?}",
                    self.function, other
                )))
            }
        };
        items
            .into_iter()
            .map(|item| match item {
                Value::List(pair) => match <[Value; 2]>::try_from(pair) {
                    Ok([Value::Str(k), Value::Str(v)]) => Ok((k, v)),
                    _ => Err(Error::invalid_argument(format!(
                        "{}: each option must be a pair of strings",
                        self.function
                    ))),
                },
                other => Err(Error::invalid_argument(format!(
                    "{}: each option must be a pair of strings, got {:?}",
                    self.function, other
                ))),
            })
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }
}

fn with_options<F>(options: Option<Vec<(String, String)>>, build: F) -> Column
where
    F: FnOnce(Option<&[(&str, &str)]>) -> Column,
{
    let borrowed: Option<Vec<(&str, &str)>> = options.as_ref().map(|pairs| {
        pairs
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    });
    build(borrowed.as_deref())
}

// -- Native entries --

fn native_col(mut args: CallArgs) -> Result<Column> {
    match args.take() {
        Value::Str(name) => Ok(col(&name)),
        Value::Column(column) => Ok(column),
        other => Err(Error::invalid_argument(format!(
            "col: expected a column name, got {:?}",
            other
        ))),
    }
}

fn native_lit(mut args: CallArgs) -> Result<Column> {
    Ok(lit(args.take()))
}

fn native_expr(mut args: CallArgs) -> Result<Column> {
    let sql = args.string("str")?;
    Ok(raw_expression(&sql))
}

fn native_when(mut args: CallArgs) -> Result<Column> {
    let condition = ensure_column(args.take());
    Ok(functions::when(condition, args.take()))
}

fn native_asc(mut args: CallArgs) -> Result<Column> {
    Ok(functions::asc(args.take()))
}

fn native_desc(mut args: CallArgs) -> Result<Column> {
    Ok(functions::desc(args.take()))
}

fn native_asc_nulls_first(mut args: CallArgs) -> Result<Column> {
    Ok(functions::asc_nulls_first(args.take()))
}

fn native_asc_nulls_last(mut args: CallArgs) -> Result<Column> {
    Ok(functions::asc_nulls_last(args.take()))
}

fn native_desc_nulls_first(mut args: CallArgs) -> Result<Column> {
    Ok(functions::desc_nulls_first(args.take()))
}

fn native_desc_nulls_last(mut args: CallArgs) -> Result<Column> {
    Ok(functions::desc_nulls_last(args.take()))
}

fn native_broadcast(mut args: CallArgs) -> Result<Column> {
    Ok(functions::broadcast(ensure_column(args.take())))
}

fn native_count_distinct(mut args: CallArgs) -> Result<Column> {
    functions::count_distinct(args.rest())
}

fn native_log(mut args: CallArgs) -> Result<Column> {
    let arg1 = args.take();
    Ok(functions::log(arg1, args.optional()))
}

fn native_percentile_approx(mut args: CallArgs) -> Result<Column> {
    let column = args.take();
    let percentage = args.take();
    Ok(functions::percentile_approx(
        column,
        percentage,
        args.optional(),
    ))
}

fn native_window(mut args: CallArgs) -> Result<Column> {
    let time_column = args.take();
    let duration = args.string("windowDuration")?;
    let slide = args.optional_string("slideDuration")?;
    let start = args.optional_string("startTime")?;
    Ok(functions::window(
        time_column,
        &duration,
        slide.as_deref(),
        start.as_deref(),
    ))
}

fn native_sentences(mut args: CallArgs) -> Result<Column> {
    let string = args.take();
    let language = args.optional();
    Ok(functions::sentences(string, language, args.optional()))
}

fn native_create_map(mut args: CallArgs) -> Result<Column> {
    functions::create_map(args.rest())
}

fn native_from_json(mut args: CallArgs) -> Result<Column> {
    let column = args.take();
    let schema = args.take();
    let options = args.options()?;
    Ok(with_options(options, |o| functions::from_json(column, schema, o)))
}

fn native_from_csv(mut args: CallArgs) -> Result<Column> {
    let column = args.take();
    let schema = args.take();
    let options = args.options()?;
    Ok(with_options(options, |o| functions::from_csv(column, schema, o)))
}

fn native_to_json(mut args: CallArgs) -> Result<Column> {
    let column = args.take();
    let options = args.options()?;
    Ok(with_options(options, |o| functions::to_json(column, o)))
}

fn native_to_csv(mut args: CallArgs) -> Result<Column> {
    let column = args.take();
    let options = args.options()?;
    Ok(with_options(options, |o| functions::to_csv(column, o)))
}

fn native_schema_of_json(mut args: CallArgs) -> Result<Column> {
    let column = args.take();
    let options = args.options()?;
    Ok(with_options(options, |o| functions::schema_of_json(column, o)))
}

fn native_schema_of_csv(mut args: CallArgs) -> Result<Column> {
    let column = args.take();
    let options = args.options()?;
    Ok(with_options(options, |o| functions::schema_of_csv(column, o)))
}

// -- Entry constructors --

const fn typed(name: &'static str, kind: NodeKind, params: &'static [Param]) -> FunctionSpec {
    FunctionSpec::new(name, Invoker::Typed(kind), params)
}

const fn anonymous(
    name: &'static str,
    sql_name: &'static str,
    params: &'static [Param],
) -> FunctionSpec {
    FunctionSpec::new(name, Invoker::Anonymous(sql_name), params)
}

const fn native(
    name: &'static str,
    native: fn(CallArgs) -> Result<Column>,
    params: &'static [Param],
) -> FunctionSpec {
    FunctionSpec::new(name, Invoker::Native(native), params)
}

const fn higher_order(name: &'static str, params: &'static [Param]) -> FunctionSpec {
    FunctionSpec::new(name, Invoker::HigherOrder, params)
}

const fn unsupported(
    name: &'static str,
    feature: &'static str,
    params: &'static [Param],
) -> FunctionSpec {
    FunctionSpec::new(name, Invoker::Unsupported(feature), params)
}

// Common parameter lists
const NONE: &[Param] = &[];
const COL: &[Param] = &[Param::column("col")];
const COL_LITERAL: &[Param] = &[Param::literal("col")];
const COL1_COL2: &[Param] = &[Param::column("col1"), Param::column("col2")];
const COLS: &[Param] = &[Param::column("cols").variadic()];
const COL_BINARY: &[Param] = &[
    Param::column("col1"),
    Param::column("col2").slot(Slot::Expression),
];
const COL_FORMAT: &[Param] = &[Param::column("col"), Param::literal("format").optional()];
const COL_OPTIONS: &[Param] = &[Param::column("col"), Param::literal("options").optional()];
const COL_SCHEMA_OPTIONS: &[Param] = &[
    Param::column("col"),
    Param::literal("schema"),
    Param::literal("options").optional(),
];
const COL_VALUE: &[Param] = &[Param::column("col"), Param::literal("value")];
const COL_CHARSET: &[Param] = &[Param::column("col"), Param::literal("charset")];
const COL_SHIFT: &[Param] = &[
    Param::column("col"),
    Param::column("numBits").slot(Slot::Expression),
];
const COL_SCALE: &[Param] = &[Param::column("col"), Param::column("scale").optional()];
const SEED: &[Param] = &[Param::column("seed").optional()];
const OFFSET: &[Param] = &[
    Param::column("col"),
    Param::column("offset").defaults_to(Const::Int(1)),
    Param::column("default").optional(),
];
const COL_IGNORENULLS: &[Param] = &[Param::column("col"), Param::column("ignorenulls").optional()];
const COL_DAYS: &[Param] = &[
    Param::column("start"),
    Param::column("days").slot(Slot::Expression),
];
const TIMESTAMP_TZ: &[Param] = &[Param::column("timestamp"), Param::literal("tz")];
const SRC_MATCH_REPLACE: &[Param] = &[
    Param::column("srcCol"),
    Param::literal("matching"),
    Param::literal("replace"),
];
const COL_LEN_PAD: &[Param] = &[
    Param::column("col"),
    Param::literal("len"),
    Param::literal("pad"),
];
const COL_F: &[Param] = &[Param::column("col"), Param::column("f")];
const LEFT_RIGHT_F: &[Param] = &[
    Param::column("left"),
    Param::column("right"),
    Param::column("f"),
];

/// Every public dataframe function, in catalog order.
pub static FUNCTION_SPECS: &[FunctionSpec] = &[
    // Construction
    native("col", native_col, &[Param::column("col")]),
    native("lit", native_lit, &[Param::literal("value")]),
    native("expr", native_expr, &[Param::literal("str")]),
    native(
        "when",
        native_when,
        &[Param::column("condition"), Param::literal("value")],
    ),
    native("asc", native_asc, COL),
    native("desc", native_desc, COL),
    native("asc_nulls_first", native_asc_nulls_first, COL),
    native("asc_nulls_last", native_asc_nulls_last, COL),
    native("desc_nulls_first", native_desc_nulls_first, COL),
    native("desc_nulls_last", native_desc_nulls_last, COL),
    native("broadcast", native_broadcast, &[Param::column("df")]),
    // Aggregates
    typed("count", NodeKind::Count, COL),
    native("count_distinct", native_count_distinct, COLS).aliases(&["countDistinct"]),
    typed("sum", NodeKind::Sum, COL),
    unsupported("sum_distinct", "Sum distinct", COL).aliases(&["sumDistinct"]),
    unsupported("product", "Product", COL),
    typed("avg", NodeKind::Avg, COL),
    anonymous("mean", "MEAN", COL),
    typed("max", NodeKind::Max, COL),
    typed("min", NodeKind::Min, COL),
    anonymous("max_by", "MAX_BY", &[Param::column("col"), Param::column("ord")]),
    anonymous("min_by", "MIN_BY", &[Param::column("col"), Param::column("ord")]),
    typed("stddev", NodeKind::Stddev, COL),
    typed("stddev_samp", NodeKind::StddevSamp, COL),
    typed("stddev_pop", NodeKind::StddevPop, COL),
    typed("variance", NodeKind::Variance, COL),
    typed("var_samp", NodeKind::Variance, COL),
    typed("var_pop", NodeKind::VariancePop, COL),
    anonymous("skewness", "SKEWNESS", COL),
    anonymous("kurtosis", "KURTOSIS", COL),
    anonymous("collect_list", "COLLECT_LIST", COL),
    anonymous("collect_set", "COLLECT_SET", COL),
    anonymous("corr", "CORR", COL1_COL2),
    anonymous("covar_pop", "COVAR_POP", COL1_COL2),
    anonymous("covar_samp", "COVAR_SAMP", COL1_COL2),
    typed(
        "approx_count_distinct",
        NodeKind::ApproxDistinct,
        &[
            Param::column("col"),
            Param::column("rsd").optional().slot(Slot::Accuracy),
        ],
    )
    .aliases(&["approxCountDistinct"]),
    anonymous("first", "FIRST", COL_IGNORENULLS),
    anonymous("last", "LAST", COL_IGNORENULLS),
    anonymous("grouping_id", "GROUPING_ID", COLS),
    native(
        "percentile_approx",
        native_percentile_approx,
        &[
            Param::column("col"),
            Param::column("percentage"),
            Param::column("accuracy").optional(),
        ],
    ),
    // Math
    typed("sqrt", NodeKind::Sqrt, COL),
    typed("abs", NodeKind::Abs, COL),
    typed("ceil", NodeKind::Ceil, COL),
    typed("floor", NodeKind::Floor, COL),
    typed("log10", NodeKind::Log10, COL),
    typed("log2", NodeKind::Log2, COL),
    native(
        "log",
        native_log,
        &[Param::column("arg1"), Param::column("arg2").optional()],
    ),
    anonymous("acos", "ACOS", COL),
    anonymous("acosh", "ACOSH", COL),
    anonymous("asin", "ASIN", COL),
    anonymous("asinh", "ASINH", COL),
    anonymous("atan", "ATAN", COL),
    anonymous("atan2", "ATAN2", COL1_COL2),
    anonymous("atanh", "ATANH", COL),
    anonymous("cbrt", "CBRT", COL),
    anonymous("cos", "COS", COL),
    anonymous("cosh", "COSH", COL),
    anonymous("cot", "COT", COL),
    anonymous("csc", "CSC", COL),
    anonymous("exp", "EXP", COL),
    anonymous("expm1", "EXPM1", COL),
    anonymous("log1p", "LOG1P", COL),
    anonymous("rint", "RINT", COL),
    anonymous("sec", "SEC", COL),
    anonymous("signum", "SIGNUM", COL),
    anonymous("sin", "SIN", COL),
    anonymous("sinh", "SINH", COL),
    anonymous("tan", "TAN", COL),
    anonymous("tanh", "TANH", COL),
    anonymous("degrees", "DEGREES", COL).aliases(&["toDegrees"]),
    anonymous("radians", "RADIANS", COL).aliases(&["toRadians"]),
    anonymous("hypot", "HYPOT", COL1_COL2),
    anonymous("pow", "POW", COL1_COL2),
    anonymous("factorial", "FACTORIAL", COL),
    anonymous(
        "conv",
        "CONV",
        &[
            Param::column("col"),
            Param::column("fromBase"),
            Param::column("toBase"),
        ],
    ),
    anonymous("nanvl", "NANVL", COL1_COL2),
    anonymous("isnan", "ISNAN", COL),
    typed("bitwise_not", NodeKind::BitwiseNot, COL).aliases(&["bitwiseNOT"]),
    typed("shiftleft", NodeKind::BitwiseLeftShift, COL_SHIFT).aliases(&["shiftLeft"]),
    typed("shiftright", NodeKind::BitwiseRightShift, COL_SHIFT).aliases(&["shiftRight"]),
    anonymous(
        "shiftrightunsigned",
        "SHIFTRIGHTUNSIGNED",
        &[Param::column("col"), Param::column("numBits")],
    )
    .aliases(&["shiftRightUnsigned"]),
    anonymous("round", "ROUND", COL_SCALE),
    anonymous("bround", "BROUND", COL_SCALE),
    anonymous("rand", "RAND", SEED),
    anonymous("randn", "RANDN", SEED),
    typed("greatest", NodeKind::Greatest, COLS),
    typed("least", NodeKind::Least, COLS),
    typed("coalesce", NodeKind::Coalesce, COLS),
    // Window
    anonymous("row_number", "ROW_NUMBER", NONE),
    anonymous("dense_rank", "DENSE_RANK", NONE),
    anonymous("rank", "RANK", NONE),
    anonymous("cume_dist", "CUME_DIST", NONE),
    anonymous("percent_rank", "PERCENT_RANK", NONE),
    anonymous("ntile", "NTILE", &[Param::column("n")]),
    anonymous("lag", "LAG", OFFSET),
    anonymous("lead", "LEAD", OFFSET),
    anonymous(
        "nth_value",
        "NTH_VALUE",
        &[
            Param::column("col"),
            Param::column("offset").defaults_to(Const::Int(1)),
            Param::column("ignoreNulls").rejected("`ignoreNulls` parameter of nth_value"),
        ],
    ),
    anonymous(
        "monotonically_increasing_id",
        "MONOTONICALLY_INCREASING_ID",
        NONE,
    ),
    anonymous("input_file_name", "INPUT_FILE_NAME", NONE),
    // Null handling and misc
    anonymous("isnull", "ISNULL", COL),
    anonymous(
        "assert_true",
        "ASSERT_TRUE",
        &[Param::column("col"), Param::literal("errMsg").optional()],
    ),
    anonymous("raise_error", "RAISE_ERROR", &[Param::literal("errMsg")]),
    anonymous("crc32", "CRC32", COL_LITERAL),
    anonymous("md5", "MD5", COL_LITERAL),
    anonymous("sha1", "SHA1", COL_LITERAL),
    anonymous(
        "sha2",
        "SHA2",
        &[Param::literal("col"), Param::column("numBits")],
    ),
    anonymous("hash", "HASH", COLS),
    anonymous("xxhash64", "XXHASH64", COLS),
    // Date and time
    typed("current_date", NodeKind::CurrentDate, NONE),
    typed("current_timestamp", NodeKind::CurrentTimestamp, NONE),
    typed("year", NodeKind::Year, COL),
    typed("month", NodeKind::Month, COL),
    typed("date_add", NodeKind::DateAdd, COL_DAYS),
    typed("date_sub", NodeKind::DateSub, COL_DAYS),
    typed(
        "date_diff",
        NodeKind::DateDiff,
        &[
            Param::column("end"),
            Param::column("start").slot(Slot::Expression),
        ],
    ),
    typed(
        "trunc",
        NodeKind::DateTrunc,
        &[
            Param::column("date"),
            Param::literal("format").slot(Slot::Unit),
        ],
    ),
    typed(
        "date_trunc",
        NodeKind::TimestampTrunc,
        &[
            Param::literal("format").slot(Slot::Unit),
            Param::column("timestamp"),
        ],
    ),
    anonymous(
        "date_format",
        "DATE_FORMAT",
        &[Param::column("date"), Param::literal("format")],
    ),
    anonymous("quarter", "QUARTER", COL),
    anonymous("dayofweek", "DAYOFWEEK", COL),
    anonymous("dayofmonth", "DAYOFMONTH", COL),
    anonymous("dayofyear", "DAYOFYEAR", COL),
    anonymous("hour", "HOUR", COL),
    anonymous("minute", "MINUTE", COL),
    anonymous("second", "SECOND", COL),
    anonymous("weekofyear", "WEEKOFYEAR", COL),
    anonymous(
        "make_date",
        "MAKE_DATE",
        &[
            Param::column("year"),
            Param::column("month"),
            Param::column("day"),
        ],
    ),
    anonymous(
        "add_months",
        "ADD_MONTHS",
        &[Param::column("start"), Param::column("months")],
    ),
    anonymous(
        "months_between",
        "MONTHS_BETWEEN",
        &[
            Param::column("date1"),
            Param::column("date2"),
            Param::column("roundOff").optional(),
        ],
    ),
    anonymous("to_date", "TO_DATE", COL_FORMAT),
    anonymous("to_timestamp", "TO_TIMESTAMP", COL_FORMAT),
    anonymous(
        "next_day",
        "NEXT_DAY",
        &[Param::column("date"), Param::literal("dayOfWeek")],
    ),
    anonymous("last_day", "LAST_DAY", COL),
    anonymous("from_unixtime", "FROM_UNIXTIME", COL_FORMAT),
    anonymous(
        "unix_timestamp",
        "UNIX_TIMESTAMP",
        &[
            Param::column("timestamp").optional(),
            Param::literal("format").optional(),
        ],
    ),
    anonymous("from_utc_timestamp", "FROM_UTC_TIMESTAMP", TIMESTAMP_TZ),
    anonymous("to_utc_timestamp", "TO_UTC_TIMESTAMP", TIMESTAMP_TZ),
    anonymous("timestamp_seconds", "TIMESTAMP_SECONDS", COL),
    native(
        "window",
        native_window,
        &[
            Param::column("timeColumn"),
            Param::literal("windowDuration"),
            Param::literal("slideDuration").optional(),
            Param::literal("startTime").optional(),
        ],
    ),
    anonymous(
        "session_window",
        "SESSION_WINDOW",
        &[Param::column("timeColumn"), Param::literal("gapDuration")],
    ),
    // Strings
    typed("upper", NodeKind::Upper, COL),
    typed("lower", NodeKind::Lower, COL),
    typed("initcap", NodeKind::Initcap, COL),
    typed("length", NodeKind::Length, COL),
    typed("levenshtein", NodeKind::Levenshtein, COL_BINARY),
    typed(
        "split",
        NodeKind::Split,
        &[
            Param::column("str"),
            Param::literal("pattern").slot(Slot::Expression),
            Param::literal("limit").optional().slot(Slot::Limit),
        ],
    ),
    typed(
        "concat_ws",
        NodeKind::ConcatWs,
        &[
            Param::literal("sep"),
            Param::column("cols").variadic().slot(Slot::Expressions),
        ],
    ),
    typed(
        "substring",
        NodeKind::Substring,
        &[
            Param::column("str"),
            Param::literal("pos").slot(Slot::Expression),
            Param::literal("len").slot(Slot::Limit),
        ],
    ),
    anonymous("ascii", "ASCII", COL),
    anonymous("base64", "BASE64", COL),
    anonymous("unbase64", "UNBASE64", COL),
    anonymous("ltrim", "LTRIM", COL),
    anonymous("rtrim", "RTRIM", COL),
    anonymous("trim", "TRIM", COL),
    anonymous("decode", "DECODE", COL_CHARSET),
    anonymous("encode", "ENCODE", COL_CHARSET),
    anonymous(
        "format_number",
        "FORMAT_NUMBER",
        &[Param::column("col"), Param::literal("d")],
    ),
    anonymous(
        "format_string",
        "FORMAT_STRING",
        &[Param::literal("format"), Param::column("cols").variadic()],
    ),
    anonymous(
        "instr",
        "INSTR",
        &[Param::column("str"), Param::literal("substr")],
    ),
    anonymous(
        "overlay",
        "OVERLAY",
        &[
            Param::column("src"),
            Param::column("replace"),
            Param::column("pos"),
            Param::column("len").optional(),
        ],
    ),
    native(
        "sentences",
        native_sentences,
        &[
            Param::column("string"),
            Param::column("language").optional(),
            Param::column("country").optional(),
        ],
    ),
    anonymous(
        "substring_index",
        "SUBSTRING_INDEX",
        &[
            Param::column("str"),
            Param::literal("delim"),
            Param::literal("count"),
        ],
    ),
    anonymous(
        "locate",
        "LOCATE",
        &[
            Param::literal("substr"),
            Param::column("str"),
            Param::literal("pos").optional(),
        ],
    ),
    anonymous("lpad", "LPAD", COL_LEN_PAD),
    anonymous("rpad", "RPAD", COL_LEN_PAD),
    anonymous(
        "repeat",
        "REPEAT",
        &[Param::column("col"), Param::column("n")],
    ),
    anonymous(
        "regexp_extract",
        "REGEXP_EXTRACT",
        &[
            Param::column("str"),
            Param::literal("pattern"),
            Param::column("idx").optional(),
        ],
    ),
    anonymous(
        "regexp_replace",
        "REGEXP_REPLACE",
        &[
            Param::column("str"),
            Param::literal("pattern"),
            Param::literal("replacement"),
        ],
    ),
    anonymous("soundex", "SOUNDEX", COL),
    anonymous("bin", "BIN", COL),
    anonymous("hex", "HEX", COL),
    anonymous("unhex", "UNHEX", COL),
    anonymous("octet_length", "OCTET_LENGTH", COL),
    anonymous("bit_length", "BIT_LENGTH", COL),
    anonymous("translate", "TRANSLATE", SRC_MATCH_REPLACE),
    // Collections
    typed(
        "array",
        NodeKind::Array,
        &[Param::column("cols").variadic().slot(Slot::Expressions)],
    )
    .flatten(),
    native("create_map", native_create_map, COLS),
    typed(
        "struct",
        NodeKind::Struct,
        &[Param::column("cols").variadic().slot(Slot::Expressions)],
    )
    .flatten(),
    anonymous("map_concat", "MAP_CONCAT", COLS).flatten(),
    anonymous("map_from_arrays", "MAP_FROM_ARRAYS", COL1_COL2),
    typed(
        "array_contains",
        NodeKind::ArrayContains,
        &[
            Param::column("col"),
            Param::literal("value").slot(Slot::Expression),
        ],
    ),
    anonymous("arrays_overlap", "ARRAYS_OVERLAP", COL1_COL2),
    anonymous(
        "slice",
        "SLICE",
        &[
            Param::column("x"),
            Param::literal("start"),
            Param::literal("length"),
        ],
    ),
    anonymous(
        "array_join",
        "ARRAY_JOIN",
        &[
            Param::column("col"),
            Param::literal("delimiter"),
            Param::literal("null_replacement").optional(),
        ],
    ),
    anonymous("concat", "CONCAT", COLS),
    anonymous("array_position", "ARRAY_POSITION", COL_VALUE),
    anonymous("element_at", "ELEMENT_AT", COL_VALUE),
    anonymous("array_remove", "ARRAY_REMOVE", COL_VALUE),
    anonymous("array_distinct", "ARRAY_DISTINCT", COL),
    anonymous("array_intersect", "ARRAY_INTERSECT", COL1_COL2),
    anonymous("array_union", "ARRAY_UNION", COL1_COL2),
    anonymous("array_except", "ARRAY_EXCEPT", COL1_COL2),
    typed("explode", NodeKind::Explode, COL),
    typed("posexplode", NodeKind::Posexplode, COL),
    anonymous("explode_outer", "EXPLODE_OUTER", COL),
    anonymous("posexplode_outer", "POSEXPLODE_OUTER", COL),
    anonymous("size", "SIZE", COL),
    anonymous("array_min", "ARRAY_MIN", COL),
    anonymous("array_max", "ARRAY_MAX", COL),
    anonymous(
        "sort_array",
        "SORT_ARRAY",
        &[Param::column("col"), Param::literal("asc").optional()],
    ),
    typed("array_sort", NodeKind::ArraySort, COL),
    anonymous("shuffle", "SHUFFLE", COL),
    anonymous("reverse", "REVERSE", COL),
    anonymous("flatten", "FLATTEN", COL),
    anonymous("map_keys", "MAP_KEYS", COL),
    anonymous("map_values", "MAP_VALUES", COL),
    anonymous("map_entries", "MAP_ENTRIES", COL),
    anonymous("map_from_entries", "MAP_FROM_ENTRIES", COL),
    anonymous(
        "array_repeat",
        "ARRAY_REPEAT",
        &[Param::column("col"), Param::literal("count")],
    ),
    anonymous("array_zip", "ARRAY_ZIP", COLS),
    anonymous(
        "sequence",
        "SEQUENCE",
        &[
            Param::column("start"),
            Param::column("stop"),
            Param::column("step").optional(),
        ],
    ),
    // JSON and CSV
    typed(
        "get_json_object",
        NodeKind::JsonExtract,
        &[
            Param::column("col"),
            Param::literal("path").slot(Slot::Path),
        ],
    ),
    anonymous(
        "json_tuple",
        "JSON_TUPLE",
        &[Param::column("col"), Param::literal("fields").variadic()],
    ),
    native("from_json", native_from_json, COL_SCHEMA_OPTIONS),
    native("to_json", native_to_json, COL_OPTIONS),
    native("schema_of_json", native_schema_of_json, COL_OPTIONS),
    native("schema_of_csv", native_schema_of_csv, COL_OPTIONS),
    native("to_csv", native_to_csv, COL_OPTIONS),
    native("from_csv", native_from_csv, COL_SCHEMA_OPTIONS),
    // Higher-order
    higher_order(
        "aggregate",
        &[
            Param::column("col"),
            Param::column("initialValue"),
            Param::column("merge"),
            Param::column("finish").optional(),
        ],
    ),
    higher_order("transform", COL_F),
    higher_order("exists", COL_F),
    higher_order("forall", COL_F),
    higher_order("filter", COL_F),
    higher_order("zip_with", LEFT_RIGHT_F),
    higher_order("transform_keys", COL_F),
    higher_order("transform_values", COL_F),
    higher_order("map_filter", COL_F),
    higher_order(
        "map_zip_with",
        &[
            Param::column("col1"),
            Param::column("col2"),
            Param::column("f"),
        ],
    ),
];

/// How catalog lookups compare function names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FunctionNameCase {
    /// `ROUND`, `round` and `Round` all resolve
    #[default]
    Insensitive,
    /// Only the exact canonical or alias spelling resolves
    Sensitive,
}

/// Catalog lookup settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    pub name_case: FunctionNameCase,
}

/// Exact spellings (names and aliases) to table position.
static EXACT_INDEX: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    let mut index = HashMap::new();
    let mut aliases = 0;
    for (position, spec) in FUNCTION_SPECS.iter().enumerate() {
        index.insert(spec.name, position);
        for &alias in spec.aliases {
            index.insert(alias, position);
            aliases += 1;
        }
    }
    tracing::debug!(
        entries = FUNCTION_SPECS.len(),
        aliases,
        "built function catalog index"
    );
    index
});

/// Lowercased spellings to table position.
static FOLDED_INDEX: LazyLock<HashMap<String, usize>> = LazyLock::new(|| {
    EXACT_INDEX
        .iter()
        .map(|(name, position)| (name.to_lowercase(), *position))
        .collect()
});

static GLOBAL: Catalog = Catalog {
    config: CatalogConfig {
        name_case: FunctionNameCase::Insensitive,
    },
};

/// A view over [`FUNCTION_SPECS`] with its own lookup settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog {
    config: CatalogConfig,
}

impl Catalog {
    /// The process-wide, default-configured catalog.
    pub fn global() -> &'static Catalog {
        &GLOBAL
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> CatalogConfig {
        self.config
    }

    /// Find the entry registered under `name` or one of its aliases.
    pub fn lookup(&self, name: &str) -> Option<&'static FunctionSpec> {
        let position = match self.config.name_case {
            FunctionNameCase::Sensitive => EXACT_INDEX.get(name).copied(),
            FunctionNameCase::Insensitive => EXACT_INDEX
                .get(name)
                .or_else(|| FOLDED_INDEX.get(&name.to_lowercase()))
                .copied(),
        };
        position.map(|position| &FUNCTION_SPECS[position])
    }

    /// The canonical snake_case name for `name`.
    pub fn canonical_name(&self, name: &str) -> Option<&'static str> {
        self.lookup(name).map(|spec| spec.name)
    }

    /// Canonical names, in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        FUNCTION_SPECS.iter().map(|spec| spec.name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Invoke the function registered under `name` with positional arguments.
    ///
    /// Unset optional arguments may be passed as `Value::Null` or left off the
    /// end. String arguments follow the parameter's coercion: a column name
    /// for column parameters, a string constant for literal ones.
    pub fn call(&self, name: &str, args: Vec<Value>) -> Result<Column> {
        let spec = self
            .lookup(name)
            .ok_or_else(|| Error::UnknownFunction(name.to_string()))?;
        tracing::debug!(
            function = spec.name,
            requested = name,
            args = args.len(),
            "dispatching catalog call"
        );
        spec.invoke(args)
    }
}
