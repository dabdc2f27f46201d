//! The dataframe function catalog.
//!
//! One free function per public function name, mirroring the familiar
//! dataframe `functions` module. Every function lowers its arguments into a
//! single AST node and returns it as a [`Column`]:
//!
//! - functions with a canonical cross-dialect node build a typed node
//!   (`sum` is `Expression::Sum`, `split` is `Expression::Split`);
//! - everything else builds an anonymous call that carries the SQL name
//!   (`acos` is `ACOS(x)`).
//!
//! Column arguments accept anything convertible into [`Value`]: a `&str` is a
//! column name, a [`Column`] passes through, and numbers become literals.
//! Optional arguments that are `None` are dropped from the call entirely.
//!
//! ```
//! use polyglot_dataframe::functions::*;
//!
//! assert_eq!(sum("price").sql(), "SUM(price)");
//! assert_eq!(round("price", Some(2)).sql(), "ROUND(price, 2)");
//! assert_eq!(round("price", None).sql(), "ROUND(price)");
//! assert_eq!(transform("xs", |x: Column| x + 1).sql(), "TRANSFORM(xs, x -> x + 1)");
//! ```
//!
//! The legacy camelCase names are kept as aliases and forward
//! unchanged.

#![allow(non_snake_case)]

use crate::column::{case_when, ensure_column, raw_expression, Hintable};
use crate::error::{Error, Result};
use crate::flatten::flatten_columns;
use crate::invoke::{build_anonymous, construct, NodeKind, TypedArgs};
use crate::lambda::{make_lambda, synthesize, ElementLambda};

pub use crate::column::{col, lit, Column, Value};

fn typed(col: impl Into<Value>, kind: NodeKind) -> Column {
    construct(Some(ensure_column(col)), kind, TypedArgs::new())
}

fn typed_with(col: impl Into<Value>, kind: NodeKind, args: TypedArgs) -> Column {
    construct(Some(ensure_column(col)), kind, args)
}

fn anonymous(col: impl Into<Value>, name: &str) -> Column {
    build_anonymous(Some(ensure_column(col)), name, Vec::new())
}

fn anonymous_with(col: impl Into<Value>, name: &str, args: Vec<Value>) -> Column {
    build_anonymous(Some(ensure_column(col)), name, args)
}

fn nullary(name: &str) -> Column {
    build_anonymous(None, name, Vec::new())
}

/// Anonymous call over a variadic list: the first element is the base.
fn anonymous_variadic<I, V>(cols: I, name: &str) -> Column
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let mut cols = cols.into_iter().map(Into::<Value>::into);
    let base = cols.next().map(ensure_column);
    build_anonymous(base, name, cols.collect())
}

fn typed_variadic<I, V>(cols: I, kind: NodeKind) -> Column
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let mut cols = cols.into_iter().map(|v| ensure_column(v));
    let base = cols.next();
    let rest: Vec<Column> = cols.collect();
    let args = if rest.is_empty() {
        TypedArgs::new()
    } else {
        TypedArgs::new().expressions(rest)
    };
    construct(base, kind, args)
}

/// Append `value` when it is set.
fn push_some(args: &mut Vec<Value>, value: Option<impl Into<Value>>) {
    if let Some(value) = value {
        args.push(value.into());
    }
}

/// `MAP(ARRAY(k1, ...), ARRAY(v1, ...))` of string literals for reader/writer options.
pub(crate) fn options_map(options: &[(&str, &str)]) -> Column {
    let args = TypedArgs::new()
        .keys(options.iter().map(|(k, _)| lit(*k)))
        .values(options.iter().map(|(_, v)| lit(*v)));
    construct(None, NodeKind::Map, args)
}

// -- Construction --

/// Wrap pre-formed SQL text, e.g. `expr("a + 1")`.
pub fn expr(sql: &str) -> Column {
    raw_expression(sql)
}

/// Start a searched `CASE WHEN condition THEN value`.
///
/// Chain further branches with [`Column::when`] and close it with
/// [`Column::otherwise`].
pub fn when(condition: Column, value: impl Into<Value>) -> Column {
    case_when(condition, lit(value))
}

pub fn asc(col: impl Into<Value>) -> Column {
    ensure_column(col).asc()
}

pub fn desc(col: impl Into<Value>) -> Column {
    ensure_column(col).desc()
}

pub fn asc_nulls_first(col: impl Into<Value>) -> Column {
    ensure_column(col).asc_nulls_first()
}

pub fn asc_nulls_last(col: impl Into<Value>) -> Column {
    ensure_column(col).asc_nulls_last()
}

pub fn desc_nulls_first(col: impl Into<Value>) -> Column {
    ensure_column(col).desc_nulls_first()
}

pub fn desc_nulls_last(col: impl Into<Value>) -> Column {
    ensure_column(col).desc_nulls_last()
}

/// Mark a relation (or column) for broadcast joins.
pub fn broadcast<H: Hintable>(target: H) -> H {
    target.hint("broadcast")
}

// -- Aggregates --

pub fn count(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::Count)
}

/// `COUNT(DISTINCT col)`.
///
/// Only a single column is supported; more than one fails with
/// [`Error::Unsupported`].
pub fn count_distinct<I, V>(cols: I) -> Result<Column>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let mut cols: Vec<Column> = cols.into_iter().map(|v| ensure_column(v)).collect();
    match cols.len() {
        0 => Err(Error::arity("count_distinct", "at least 1", 0)),
        1 => Ok(construct(
            cols.pop(),
            NodeKind::Count,
            TypedArgs::new().distinct(true),
        )),
        _ => Err(Error::unsupported(
            "Multiple columns in a count distinct",
        )),
    }
}

pub fn countDistinct<I, V>(cols: I) -> Result<Column>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    count_distinct(cols)
}

pub fn sum(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::Sum)
}

/// Always fails: there is no portable `SUM(DISTINCT ...)` node.
pub fn sum_distinct(_col: impl Into<Value>) -> Result<Column> {
    Err(Error::unsupported("Sum distinct"))
}

pub fn sumDistinct(col: impl Into<Value>) -> Result<Column> {
    sum_distinct(col)
}

/// Always fails: there is no portable `PRODUCT` aggregate.
pub fn product(_col: impl Into<Value>) -> Result<Column> {
    Err(Error::unsupported("Product"))
}

pub fn avg(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::Avg)
}

pub fn mean(col: impl Into<Value>) -> Column {
    anonymous(col, "MEAN")
}

pub fn max(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::Max)
}

pub fn min(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::Min)
}

pub fn max_by(col: impl Into<Value>, ord: impl Into<Value>) -> Column {
    anonymous_with(col, "MAX_BY", vec![ord.into()])
}

pub fn min_by(col: impl Into<Value>, ord: impl Into<Value>) -> Column {
    anonymous_with(col, "MIN_BY", vec![ord.into()])
}

pub fn stddev(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::Stddev)
}

pub fn stddev_samp(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::StddevSamp)
}

pub fn stddev_pop(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::StddevPop)
}

pub fn variance(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::Variance)
}

/// Sample variance; same node as [`variance`].
pub fn var_samp(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::Variance)
}

pub fn var_pop(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::VariancePop)
}

pub fn skewness(col: impl Into<Value>) -> Column {
    anonymous(col, "SKEWNESS")
}

pub fn kurtosis(col: impl Into<Value>) -> Column {
    anonymous(col, "KURTOSIS")
}

pub fn collect_list(col: impl Into<Value>) -> Column {
    anonymous(col, "COLLECT_LIST")
}

pub fn collect_set(col: impl Into<Value>) -> Column {
    anonymous(col, "COLLECT_SET")
}

pub fn corr(col1: impl Into<Value>, col2: impl Into<Value>) -> Column {
    anonymous_with(col1, "CORR", vec![col2.into()])
}

pub fn covar_pop(col1: impl Into<Value>, col2: impl Into<Value>) -> Column {
    anonymous_with(col1, "COVAR_POP", vec![col2.into()])
}

pub fn covar_samp(col1: impl Into<Value>, col2: impl Into<Value>) -> Column {
    anonymous_with(col1, "COVAR_SAMP", vec![col2.into()])
}

/// `APPROX_COUNT_DISTINCT(col[, rsd])`.
pub fn approx_count_distinct(col: impl Into<Value>, rsd: Option<f64>) -> Column {
    let args = match rsd {
        Some(rsd) => TypedArgs::new().accuracy(rsd),
        None => TypedArgs::new(),
    };
    typed_with(col, NodeKind::ApproxDistinct, args)
}

pub fn approxCountDistinct(col: impl Into<Value>, rsd: Option<f64>) -> Column {
    approx_count_distinct(col, rsd)
}

pub fn first(col: impl Into<Value>, ignorenulls: Option<bool>) -> Column {
    let mut args = Vec::new();
    push_some(&mut args, ignorenulls);
    anonymous_with(col, "FIRST", args)
}

pub fn last(col: impl Into<Value>, ignorenulls: Option<bool>) -> Column {
    let mut args = Vec::new();
    push_some(&mut args, ignorenulls);
    anonymous_with(col, "LAST", args)
}

/// `GROUPING_ID(cols...)`; an empty list is allowed.
pub fn grouping_id<I, V>(cols: I) -> Column
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    anonymous_variadic(cols, "GROUPING_ID")
}

/// `PERCENTILE_APPROX(col, percentage[, accuracy])`.
///
/// An accuracy of zero or `false` is treated as absent.
pub fn percentile_approx(
    col: impl Into<Value>,
    percentage: impl Into<Value>,
    accuracy: Option<Value>,
) -> Column {
    let mut args = vec![percentage.into()];
    if let Some(accuracy) = accuracy.filter(Value::is_truthy) {
        args.push(accuracy);
    }
    anonymous_with(col, "PERCENTILE_APPROX", args)
}

// -- Math --

pub fn sqrt(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::Sqrt)
}

pub fn abs(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::Abs)
}

pub fn ceil(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::Ceil)
}

pub fn floor(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::Floor)
}

pub fn log10(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::Log10)
}

pub fn log2(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::Log2)
}

/// Natural logarithm of `arg1`, or the logarithm of `arg2` in base `arg1`.
pub fn log(arg1: impl Into<Value>, arg2: Option<Value>) -> Column {
    match arg2 {
        Some(arg2) if !arg2.is_null() => {
            typed_with(arg1, NodeKind::Log, TypedArgs::new().expression(arg2))
        }
        _ => typed(arg1, NodeKind::Ln),
    }
}

pub fn acos(col: impl Into<Value>) -> Column {
    anonymous(col, "ACOS")
}

pub fn acosh(col: impl Into<Value>) -> Column {
    anonymous(col, "ACOSH")
}

pub fn asin(col: impl Into<Value>) -> Column {
    anonymous(col, "ASIN")
}

pub fn asinh(col: impl Into<Value>) -> Column {
    anonymous(col, "ASINH")
}

pub fn atan(col: impl Into<Value>) -> Column {
    anonymous(col, "ATAN")
}

pub fn atan2(col1: impl Into<Value>, col2: impl Into<Value>) -> Column {
    anonymous_with(col1, "ATAN2", vec![col2.into()])
}

pub fn atanh(col: impl Into<Value>) -> Column {
    anonymous(col, "ATANH")
}

pub fn cbrt(col: impl Into<Value>) -> Column {
    anonymous(col, "CBRT")
}

pub fn cos(col: impl Into<Value>) -> Column {
    anonymous(col, "COS")
}

pub fn cosh(col: impl Into<Value>) -> Column {
    anonymous(col, "COSH")
}

pub fn cot(col: impl Into<Value>) -> Column {
    anonymous(col, "COT")
}

pub fn csc(col: impl Into<Value>) -> Column {
    anonymous(col, "CSC")
}

pub fn exp(col: impl Into<Value>) -> Column {
    anonymous(col, "EXP")
}

pub fn expm1(col: impl Into<Value>) -> Column {
    anonymous(col, "EXPM1")
}

pub fn log1p(col: impl Into<Value>) -> Column {
    anonymous(col, "LOG1P")
}

pub fn rint(col: impl Into<Value>) -> Column {
    anonymous(col, "RINT")
}

pub fn sec(col: impl Into<Value>) -> Column {
    anonymous(col, "SEC")
}

pub fn signum(col: impl Into<Value>) -> Column {
    anonymous(col, "SIGNUM")
}

pub fn sin(col: impl Into<Value>) -> Column {
    anonymous(col, "SIN")
}

pub fn sinh(col: impl Into<Value>) -> Column {
    anonymous(col, "SINH")
}

pub fn tan(col: impl Into<Value>) -> Column {
    anonymous(col, "TAN")
}

pub fn tanh(col: impl Into<Value>) -> Column {
    anonymous(col, "TANH")
}

pub fn degrees(col: impl Into<Value>) -> Column {
    anonymous(col, "DEGREES")
}

pub fn toDegrees(col: impl Into<Value>) -> Column {
    degrees(col)
}

pub fn radians(col: impl Into<Value>) -> Column {
    anonymous(col, "RADIANS")
}

pub fn toRadians(col: impl Into<Value>) -> Column {
    radians(col)
}

pub fn hypot(col1: impl Into<Value>, col2: impl Into<Value>) -> Column {
    anonymous_with(col1, "HYPOT", vec![col2.into()])
}

pub fn pow(col1: impl Into<Value>, col2: impl Into<Value>) -> Column {
    anonymous_with(col1, "POW", vec![col2.into()])
}

pub fn factorial(col: impl Into<Value>) -> Column {
    anonymous(col, "FACTORIAL")
}

pub fn conv(col: impl Into<Value>, from_base: i64, to_base: i64) -> Column {
    anonymous_with(col, "CONV", vec![from_base.into(), to_base.into()])
}

pub fn nanvl(col1: impl Into<Value>, col2: impl Into<Value>) -> Column {
    anonymous_with(col1, "NANVL", vec![col2.into()])
}

pub fn isnan(col: impl Into<Value>) -> Column {
    anonymous(col, "ISNAN")
}

pub fn bitwise_not(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::BitwiseNot)
}

pub fn bitwiseNOT(col: impl Into<Value>) -> Column {
    bitwise_not(col)
}

pub fn shiftleft(col: impl Into<Value>, num_bits: impl Into<Value>) -> Column {
    typed_with(
        col,
        NodeKind::BitwiseLeftShift,
        TypedArgs::new().expression(num_bits),
    )
}

pub fn shiftLeft(col: impl Into<Value>, num_bits: impl Into<Value>) -> Column {
    shiftleft(col, num_bits)
}

pub fn shiftright(col: impl Into<Value>, num_bits: impl Into<Value>) -> Column {
    typed_with(
        col,
        NodeKind::BitwiseRightShift,
        TypedArgs::new().expression(num_bits),
    )
}

pub fn shiftRight(col: impl Into<Value>, num_bits: impl Into<Value>) -> Column {
    shiftright(col, num_bits)
}

pub fn shiftrightunsigned(col: impl Into<Value>, num_bits: impl Into<Value>) -> Column {
    anonymous_with(col, "SHIFTRIGHTUNSIGNED", vec![num_bits.into()])
}

pub fn shiftRightUnsigned(col: impl Into<Value>, num_bits: impl Into<Value>) -> Column {
    shiftrightunsigned(col, num_bits)
}

/// `ROUND(col[, scale])`.
pub fn round(col: impl Into<Value>, scale: Option<i64>) -> Column {
    let mut args = Vec::new();
    push_some(&mut args, scale);
    anonymous_with(col, "ROUND", args)
}

/// Banker's rounding, `BROUND(col[, scale])`.
pub fn bround(col: impl Into<Value>, scale: Option<i64>) -> Column {
    let mut args = Vec::new();
    push_some(&mut args, scale);
    anonymous_with(col, "BROUND", args)
}

/// `RAND([seed])`
pub fn rand(seed: Option<i64>) -> Column {
    build_anonymous(seed.map(|s| ensure_column(s)), "RAND", Vec::new())
}

/// `RANDN([seed])`
pub fn randn(seed: Option<i64>) -> Column {
    build_anonymous(seed.map(|s| ensure_column(s)), "RANDN", Vec::new())
}

pub fn greatest<I, V>(cols: I) -> Column
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    typed_variadic(cols, NodeKind::Greatest)
}

pub fn least<I, V>(cols: I) -> Column
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    typed_variadic(cols, NodeKind::Least)
}

pub fn coalesce<I, V>(cols: I) -> Column
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    typed_variadic(cols, NodeKind::Coalesce)
}

// -- Window --

pub fn row_number() -> Column {
    nullary("ROW_NUMBER")
}

pub fn dense_rank() -> Column {
    nullary("DENSE_RANK")
}

pub fn rank() -> Column {
    nullary("RANK")
}

pub fn cume_dist() -> Column {
    nullary("CUME_DIST")
}

pub fn percent_rank() -> Column {
    nullary("PERCENT_RANK")
}

pub fn ntile(n: i64) -> Column {
    build_anonymous(None, "NTILE", vec![n.into()])
}

fn offset_call(
    col: impl Into<Value>,
    name: &str,
    offset: Option<i64>,
    default: Option<Value>,
) -> Column {
    let offset = offset.unwrap_or(1);
    let args = match default.filter(|d| !d.is_null()) {
        Some(default) => vec![offset.into(), default],
        None if offset != 1 => vec![offset.into()],
        None => Vec::new(),
    };
    anonymous_with(col, name, args)
}

/// `LAG(col[, offset[, default]])`.
///
/// The offset defaults to 1 and is omitted when it is 1, unless a default
/// value forces it to be spelled out.
pub fn lag(col: impl Into<Value>, offset: Option<i64>, default: Option<Value>) -> Column {
    offset_call(col, "LAG", offset, default)
}

/// `LEAD(col[, offset[, default]])`, with the same offset rules as [`lag`].
pub fn lead(col: impl Into<Value>, offset: Option<i64>, default: Option<Value>) -> Column {
    offset_call(col, "LEAD", offset, default)
}

/// `NTH_VALUE(col[, offset])`.
///
/// Setting `ignore_nulls` fails with [`Error::Unsupported`].
pub fn nth_value(
    col: impl Into<Value>,
    offset: Option<i64>,
    ignore_nulls: Option<bool>,
) -> Result<Column> {
    if ignore_nulls.is_some() {
        return Err(Error::unsupported("`ignoreNulls` parameter of nth_value"));
    }
    Ok(offset_call(col, "NTH_VALUE", offset, None))
}

pub fn monotonically_increasing_id() -> Column {
    nullary("MONOTONICALLY_INCREASING_ID")
}

pub fn input_file_name() -> Column {
    nullary("INPUT_FILE_NAME")
}

// -- Null handling and misc --

pub fn isnull(col: impl Into<Value>) -> Column {
    anonymous(col, "ISNULL")
}

/// `ASSERT_TRUE(col[, message])`; a string message is a literal.
pub fn assert_true(col: impl Into<Value>, error_msg: Option<Value>) -> Column {
    let mut args = Vec::new();
    push_some(&mut args, error_msg.map(lit));
    anonymous_with(col, "ASSERT_TRUE", args)
}

pub fn raise_error(error_msg: impl Into<Value>) -> Column {
    anonymous(lit(error_msg), "RAISE_ERROR")
}

pub fn crc32(col: impl Into<Value>) -> Column {
    anonymous(lit(col), "CRC32")
}

pub fn md5(col: impl Into<Value>) -> Column {
    anonymous(lit(col), "MD5")
}

pub fn sha1(col: impl Into<Value>) -> Column {
    anonymous(lit(col), "SHA1")
}

pub fn sha2(col: impl Into<Value>, num_bits: i64) -> Column {
    anonymous_with(lit(col), "SHA2", vec![num_bits.into()])
}

pub fn hash<I, V>(cols: I) -> Column
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    anonymous_variadic(cols, "HASH")
}

pub fn xxhash64<I, V>(cols: I) -> Column
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    anonymous_variadic(cols, "XXHASH64")
}

// -- Date and time --

pub fn current_date() -> Column {
    construct(None, NodeKind::CurrentDate, TypedArgs::new())
}

pub fn current_timestamp() -> Column {
    construct(None, NodeKind::CurrentTimestamp, TypedArgs::new())
}

pub fn year(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::Year)
}

pub fn month(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::Month)
}

pub fn date_add(col: impl Into<Value>, days: impl Into<Value>) -> Column {
    typed_with(col, NodeKind::DateAdd, TypedArgs::new().expression(days))
}

pub fn date_sub(col: impl Into<Value>, days: impl Into<Value>) -> Column {
    typed_with(col, NodeKind::DateSub, TypedArgs::new().expression(days))
}

pub fn date_diff(end: impl Into<Value>, start: impl Into<Value>) -> Column {
    typed_with(end, NodeKind::DateDiff, TypedArgs::new().expression(start))
}

/// Truncate a date to `format` (`"year"`, `"month"`, ...).
pub fn trunc(col: impl Into<Value>, format: &str) -> Column {
    typed_with(col, NodeKind::DateTrunc, TypedArgs::new().unit(lit(format)))
}

/// Truncate a timestamp to `format`. Note the argument order.
pub fn date_trunc(format: &str, timestamp: impl Into<Value>) -> Column {
    typed_with(
        timestamp,
        NodeKind::TimestampTrunc,
        TypedArgs::new().unit(lit(format)),
    )
}

pub fn date_format(col: impl Into<Value>, format: &str) -> Column {
    anonymous_with(col, "DATE_FORMAT", vec![lit(format).into()])
}

pub fn quarter(col: impl Into<Value>) -> Column {
    anonymous(col, "QUARTER")
}

pub fn dayofweek(col: impl Into<Value>) -> Column {
    anonymous(col, "DAYOFWEEK")
}

pub fn dayofmonth(col: impl Into<Value>) -> Column {
    anonymous(col, "DAYOFMONTH")
}

pub fn dayofyear(col: impl Into<Value>) -> Column {
    anonymous(col, "DAYOFYEAR")
}

pub fn hour(col: impl Into<Value>) -> Column {
    anonymous(col, "HOUR")
}

pub fn minute(col: impl Into<Value>) -> Column {
    anonymous(col, "MINUTE")
}

pub fn second(col: impl Into<Value>) -> Column {
    anonymous(col, "SECOND")
}

pub fn weekofyear(col: impl Into<Value>) -> Column {
    anonymous(col, "WEEKOFYEAR")
}

pub fn make_date(year: impl Into<Value>, month: impl Into<Value>, day: impl Into<Value>) -> Column {
    anonymous_with(year, "MAKE_DATE", vec![month.into(), day.into()])
}

pub fn add_months(start: impl Into<Value>, months: impl Into<Value>) -> Column {
    anonymous_with(start, "ADD_MONTHS", vec![months.into()])
}

pub fn months_between(
    date1: impl Into<Value>,
    date2: impl Into<Value>,
    round_off: Option<bool>,
) -> Column {
    let mut args = vec![date2.into()];
    push_some(&mut args, round_off);
    anonymous_with(date1, "MONTHS_BETWEEN", args)
}

pub fn to_date(col: impl Into<Value>, format: Option<&str>) -> Column {
    let mut args = Vec::new();
    push_some(&mut args, format.map(lit));
    anonymous_with(col, "TO_DATE", args)
}

pub fn to_timestamp(col: impl Into<Value>, format: Option<&str>) -> Column {
    let mut args = Vec::new();
    push_some(&mut args, format.map(lit));
    anonymous_with(col, "TO_TIMESTAMP", args)
}

pub fn next_day(col: impl Into<Value>, day_of_week: &str) -> Column {
    anonymous_with(col, "NEXT_DAY", vec![lit(day_of_week).into()])
}

pub fn last_day(col: impl Into<Value>) -> Column {
    anonymous(col, "LAST_DAY")
}

pub fn from_unixtime(col: impl Into<Value>, format: Option<&str>) -> Column {
    let mut args = Vec::new();
    push_some(&mut args, format.map(lit));
    anonymous_with(col, "FROM_UNIXTIME", args)
}

/// `UNIX_TIMESTAMP([timestamp][, format])`.
pub fn unix_timestamp(timestamp: Option<Value>, format: Option<&str>) -> Column {
    let mut args = Vec::new();
    push_some(&mut args, format.map(lit));
    build_anonymous(
        timestamp.filter(|t| !t.is_null()).map(ensure_column),
        "UNIX_TIMESTAMP",
        args,
    )
}

pub fn from_utc_timestamp(timestamp: impl Into<Value>, tz: impl Into<Value>) -> Column {
    anonymous_with(timestamp, "FROM_UTC_TIMESTAMP", vec![lit(tz).into()])
}

pub fn to_utc_timestamp(timestamp: impl Into<Value>, tz: impl Into<Value>) -> Column {
    anonymous_with(timestamp, "TO_UTC_TIMESTAMP", vec![lit(tz).into()])
}

pub fn timestamp_seconds(col: impl Into<Value>) -> Column {
    anonymous(col, "TIMESTAMP_SECONDS")
}

/// Tumbling or sliding time window, `WINDOW(time, duration[, slide[, start]])`.
///
/// A start time without a slide duration repeats the window duration as the
/// slide, which makes the window tumbling.
pub fn window(
    time_column: impl Into<Value>,
    window_duration: &str,
    slide_duration: Option<&str>,
    start_time: Option<&str>,
) -> Column {
    let mut args: Vec<Value> = vec![lit(window_duration).into()];
    match (slide_duration, start_time) {
        (Some(slide), Some(start)) => {
            args.push(lit(slide).into());
            args.push(lit(start).into());
        }
        (Some(slide), None) => args.push(lit(slide).into()),
        (None, Some(start)) => {
            args.push(lit(window_duration).into());
            args.push(lit(start).into());
        }
        (None, None) => {}
    }
    anonymous_with(time_column, "WINDOW", args)
}

pub fn session_window(time_column: impl Into<Value>, gap_duration: impl Into<Value>) -> Column {
    anonymous_with(time_column, "SESSION_WINDOW", vec![lit(gap_duration).into()])
}

// -- Strings --

pub fn upper(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::Upper)
}

pub fn lower(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::Lower)
}

pub fn initcap(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::Initcap)
}

pub fn length(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::Length)
}

pub fn levenshtein(left: impl Into<Value>, right: impl Into<Value>) -> Column {
    typed_with(left, NodeKind::Levenshtein, TypedArgs::new().expression(right))
}

/// `SPLIT(str, 'pattern'[, limit])`.
pub fn split(str: impl Into<Value>, pattern: &str, limit: Option<i64>) -> Column {
    let mut args = TypedArgs::new().expression(lit(pattern));
    if let Some(limit) = limit {
        args = args.limit(lit(limit));
    }
    typed_with(str, NodeKind::Split, args)
}

/// `CONCAT_WS('sep', cols...)`.
pub fn concat_ws<I, V>(sep: &str, cols: I) -> Column
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    construct(
        Some(lit(sep)),
        NodeKind::ConcatWs,
        TypedArgs::new().expressions(cols),
    )
}

/// 1-based `SUBSTRING(str, pos, len)`.
pub fn substring(str: impl Into<Value>, pos: i64, len: i64) -> Column {
    ensure_column(str).substr(pos, len)
}

pub fn ascii(col: impl Into<Value>) -> Column {
    anonymous(col, "ASCII")
}

pub fn base64(col: impl Into<Value>) -> Column {
    anonymous(col, "BASE64")
}

pub fn unbase64(col: impl Into<Value>) -> Column {
    anonymous(col, "UNBASE64")
}

pub fn ltrim(col: impl Into<Value>) -> Column {
    anonymous(col, "LTRIM")
}

pub fn rtrim(col: impl Into<Value>) -> Column {
    anonymous(col, "RTRIM")
}

pub fn trim(col: impl Into<Value>) -> Column {
    anonymous(col, "TRIM")
}

pub fn decode(col: impl Into<Value>, charset: &str) -> Column {
    anonymous_with(col, "DECODE", vec![lit(charset).into()])
}

pub fn encode(col: impl Into<Value>, charset: &str) -> Column {
    anonymous_with(col, "ENCODE", vec![lit(charset).into()])
}

pub fn format_number(col: impl Into<Value>, d: i64) -> Column {
    anonymous_with(col, "FORMAT_NUMBER", vec![lit(d).into()])
}

pub fn format_string<I, V>(format: &str, cols: I) -> Column
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    anonymous_with(
        lit(format),
        "FORMAT_STRING",
        cols.into_iter().map(Into::into).collect(),
    )
}

pub fn instr(col: impl Into<Value>, substr: &str) -> Column {
    anonymous_with(col, "INSTR", vec![lit(substr).into()])
}

pub fn overlay(
    src: impl Into<Value>,
    replace: impl Into<Value>,
    pos: impl Into<Value>,
    len: Option<Value>,
) -> Column {
    let mut args = vec![replace.into(), pos.into()];
    push_some(&mut args, len);
    anonymous_with(src, "OVERLAY", args)
}

/// `SENTENCES(string[, language[, country]])`.
///
/// A country without a language fills the language with `'en'`.
pub fn sentences(
    string: impl Into<Value>,
    language: Option<Value>,
    country: Option<Value>,
) -> Column {
    let args = match (language, country) {
        (Some(language), Some(country)) => vec![language, country],
        (Some(language), None) => vec![language],
        (None, Some(country)) => vec![lit("en").into(), country],
        (None, None) => Vec::new(),
    };
    anonymous_with(string, "SENTENCES", args)
}

pub fn substring_index(str: impl Into<Value>, delim: &str, count: i64) -> Column {
    anonymous_with(
        str,
        "SUBSTRING_INDEX",
        vec![lit(delim).into(), lit(count).into()],
    )
}

/// `LOCATE('substr', str[, pos])`.
pub fn locate(substr: &str, str: impl Into<Value>, pos: Option<i64>) -> Column {
    let mut args = vec![str.into()];
    push_some(&mut args, pos.map(lit));
    anonymous_with(lit(substr), "LOCATE", args)
}

pub fn lpad(col: impl Into<Value>, len: i64, pad: &str) -> Column {
    anonymous_with(col, "LPAD", vec![lit(len).into(), lit(pad).into()])
}

pub fn rpad(col: impl Into<Value>, len: i64, pad: &str) -> Column {
    anonymous_with(col, "RPAD", vec![lit(len).into(), lit(pad).into()])
}

pub fn repeat(col: impl Into<Value>, n: i64) -> Column {
    anonymous_with(col, "REPEAT", vec![n.into()])
}

pub fn regexp_extract(str: impl Into<Value>, pattern: &str, idx: Option<i64>) -> Column {
    let mut args = vec![lit(pattern).into()];
    push_some(&mut args, idx);
    anonymous_with(str, "REGEXP_EXTRACT", args)
}

pub fn regexp_replace(str: impl Into<Value>, pattern: &str, replacement: &str) -> Column {
    anonymous_with(
        str,
        "REGEXP_REPLACE",
        vec![lit(pattern).into(), lit(replacement).into()],
    )
}

pub fn soundex(col: impl Into<Value>) -> Column {
    anonymous(col, "SOUNDEX")
}

pub fn bin(col: impl Into<Value>) -> Column {
    anonymous(col, "BIN")
}

pub fn hex(col: impl Into<Value>) -> Column {
    anonymous(col, "HEX")
}

pub fn unhex(col: impl Into<Value>) -> Column {
    anonymous(col, "UNHEX")
}

pub fn octet_length(col: impl Into<Value>) -> Column {
    anonymous(col, "OCTET_LENGTH")
}

pub fn bit_length(col: impl Into<Value>) -> Column {
    anonymous(col, "BIT_LENGTH")
}

pub fn translate(src_col: impl Into<Value>, matching: &str, replace: &str) -> Column {
    anonymous_with(
        src_col,
        "TRANSLATE",
        vec![lit(matching).into(), lit(replace).into()],
    )
}

// -- Collections --

/// `ARRAY(cols...)`.
///
/// Accepts either the elements themselves or a single list of them, so
/// `array([1, 2, 3])` and `array([vec![1, 2, 3]])` build the same node. A list
/// followed by further arguments is rejected.
pub fn array<I, V>(cols: I) -> Result<Column>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let cols = flatten_columns(cols.into_iter().map(Into::into).collect())?;
    Ok(construct(
        None,
        NodeKind::Array,
        TypedArgs::new().expressions(cols),
    ))
}

/// `MAP(ARRAY(keys...), ARRAY(values...))` from alternating keys and values.
pub fn create_map<I, V>(cols: I) -> Result<Column>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let cols = flatten_columns(cols.into_iter().map(Into::into).collect())?;
    if cols.len() % 2 != 0 {
        return Err(Error::invalid_argument(format!(
            "create_map expects alternating keys and values, got {} argument(s)",
            cols.len()
        )));
    }
    let mut keys = Vec::with_capacity(cols.len() / 2);
    let mut values = Vec::with_capacity(cols.len() / 2);
    for (i, column) in cols.into_iter().enumerate() {
        if i % 2 == 0 {
            keys.push(column);
        } else {
            values.push(column);
        }
    }
    Ok(construct(
        None,
        NodeKind::Map,
        TypedArgs::new().keys(keys).values(values),
    ))
}

/// `MAP_CONCAT(maps...)`, flattening like [`array`].
pub fn map_concat<I, V>(cols: I) -> Result<Column>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let cols = flatten_columns(cols.into_iter().map(Into::into).collect())?;
    Ok(anonymous_variadic(cols, "MAP_CONCAT"))
}

/// `STRUCT(cols...)`, flattening like [`array`]. Aliased columns name their field.
pub fn r#struct<I, V>(cols: I) -> Result<Column>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let cols = flatten_columns(cols.into_iter().map(Into::into).collect())?;
    Ok(construct(
        None,
        NodeKind::Struct,
        TypedArgs::new().expressions(cols),
    ))
}

pub fn map_from_arrays(col1: impl Into<Value>, col2: impl Into<Value>) -> Column {
    anonymous_with(col1, "MAP_FROM_ARRAYS", vec![col2.into()])
}

/// `ARRAY_CONTAINS(col, value)`; a string value is a literal.
pub fn array_contains(col: impl Into<Value>, value: impl Into<Value>) -> Column {
    typed_with(
        col,
        NodeKind::ArrayContains,
        TypedArgs::new().expression(lit(value)),
    )
}

pub fn arrays_overlap(col1: impl Into<Value>, col2: impl Into<Value>) -> Column {
    anonymous_with(col1, "ARRAYS_OVERLAP", vec![col2.into()])
}

pub fn slice(x: impl Into<Value>, start: impl Into<Value>, length: impl Into<Value>) -> Column {
    anonymous_with(x, "SLICE", vec![lit(start).into(), lit(length).into()])
}

pub fn array_join(col: impl Into<Value>, delimiter: &str, null_replacement: Option<&str>) -> Column {
    let mut args = vec![lit(delimiter).into()];
    push_some(&mut args, null_replacement.map(lit));
    anonymous_with(col, "ARRAY_JOIN", args)
}

pub fn concat<I, V>(cols: I) -> Column
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    anonymous_variadic(cols, "CONCAT")
}

pub fn array_position(col: impl Into<Value>, value: impl Into<Value>) -> Column {
    anonymous_with(col, "ARRAY_POSITION", vec![lit(value).into()])
}

pub fn element_at(col: impl Into<Value>, value: impl Into<Value>) -> Column {
    anonymous_with(col, "ELEMENT_AT", vec![lit(value).into()])
}

pub fn array_remove(col: impl Into<Value>, value: impl Into<Value>) -> Column {
    anonymous_with(col, "ARRAY_REMOVE", vec![lit(value).into()])
}

pub fn array_distinct(col: impl Into<Value>) -> Column {
    anonymous(col, "ARRAY_DISTINCT")
}

pub fn array_intersect(col1: impl Into<Value>, col2: impl Into<Value>) -> Column {
    anonymous_with(col1, "ARRAY_INTERSECT", vec![col2.into()])
}

pub fn array_union(col1: impl Into<Value>, col2: impl Into<Value>) -> Column {
    anonymous_with(col1, "ARRAY_UNION", vec![col2.into()])
}

pub fn array_except(col1: impl Into<Value>, col2: impl Into<Value>) -> Column {
    anonymous_with(col1, "ARRAY_EXCEPT", vec![col2.into()])
}

pub fn explode(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::Explode)
}

pub fn posexplode(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::Posexplode)
}

pub fn explode_outer(col: impl Into<Value>) -> Column {
    anonymous(col, "EXPLODE_OUTER")
}

pub fn posexplode_outer(col: impl Into<Value>) -> Column {
    anonymous(col, "POSEXPLODE_OUTER")
}

pub fn size(col: impl Into<Value>) -> Column {
    anonymous(col, "SIZE")
}

pub fn array_min(col: impl Into<Value>) -> Column {
    anonymous(col, "ARRAY_MIN")
}

pub fn array_max(col: impl Into<Value>) -> Column {
    anonymous(col, "ARRAY_MAX")
}

pub fn sort_array(col: impl Into<Value>, asc: Option<bool>) -> Column {
    let mut args = Vec::new();
    push_some(&mut args, asc.map(lit));
    anonymous_with(col, "SORT_ARRAY", args)
}

pub fn array_sort(col: impl Into<Value>) -> Column {
    typed(col, NodeKind::ArraySort)
}

pub fn shuffle(col: impl Into<Value>) -> Column {
    anonymous(col, "SHUFFLE")
}

pub fn reverse(col: impl Into<Value>) -> Column {
    anonymous(col, "REVERSE")
}

pub fn flatten(col: impl Into<Value>) -> Column {
    anonymous(col, "FLATTEN")
}

pub fn map_keys(col: impl Into<Value>) -> Column {
    anonymous(col, "MAP_KEYS")
}

pub fn map_values(col: impl Into<Value>) -> Column {
    anonymous(col, "MAP_VALUES")
}

pub fn map_entries(col: impl Into<Value>) -> Column {
    anonymous(col, "MAP_ENTRIES")
}

pub fn map_from_entries(col: impl Into<Value>) -> Column {
    anonymous(col, "MAP_FROM_ENTRIES")
}

pub fn array_repeat(col: impl Into<Value>, count: impl Into<Value>) -> Column {
    anonymous_with(col, "ARRAY_REPEAT", vec![lit(count).into()])
}

pub fn array_zip<I, V>(cols: I) -> Column
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    anonymous_variadic(cols, "ARRAY_ZIP")
}

pub fn sequence(start: impl Into<Value>, stop: impl Into<Value>, step: Option<Value>) -> Column {
    let mut args = vec![stop.into()];
    push_some(&mut args, step);
    anonymous_with(start, "SEQUENCE", args)
}

// -- JSON and CSV --

/// `JSON_EXTRACT(col, 'path')`.
pub fn get_json_object(col: impl Into<Value>, path: &str) -> Column {
    typed_with(col, NodeKind::JsonExtract, TypedArgs::new().path(lit(path)))
}

pub fn json_tuple<'a, I>(col: impl Into<Value>, fields: I) -> Column
where
    I: IntoIterator<Item = &'a str>,
{
    anonymous_with(
        col,
        "JSON_TUPLE",
        fields.into_iter().map(|f| Value::from(lit(f))).collect(),
    )
}

fn with_options(mut args: Vec<Value>, options: Option<&[(&str, &str)]>) -> Vec<Value> {
    push_some(&mut args, options.map(options_map));
    args
}

/// `FROM_JSON(col, schema[, options])`. A string schema is a literal.
pub fn from_json(
    col: impl Into<Value>,
    schema: impl Into<Value>,
    options: Option<&[(&str, &str)]>,
) -> Column {
    let args = with_options(vec![lit(schema).into()], options);
    anonymous_with(col, "FROM_JSON", args)
}

pub fn to_json(col: impl Into<Value>, options: Option<&[(&str, &str)]>) -> Column {
    anonymous_with(col, "TO_JSON", with_options(Vec::new(), options))
}

pub fn schema_of_json(col: impl Into<Value>, options: Option<&[(&str, &str)]>) -> Column {
    anonymous_with(col, "SCHEMA_OF_JSON", with_options(Vec::new(), options))
}

pub fn schema_of_csv(col: impl Into<Value>, options: Option<&[(&str, &str)]>) -> Column {
    anonymous_with(col, "SCHEMA_OF_CSV", with_options(Vec::new(), options))
}

pub fn to_csv(col: impl Into<Value>, options: Option<&[(&str, &str)]>) -> Column {
    anonymous_with(col, "TO_CSV", with_options(Vec::new(), options))
}

pub fn from_csv(
    col: impl Into<Value>,
    schema: impl Into<Value>,
    options: Option<&[(&str, &str)]>,
) -> Column {
    let args = with_options(vec![lit(schema).into()], options);
    anonymous_with(col, "FROM_CSV", args)
}

// -- Higher-order functions --
//
// Each takes a closure that is called once with placeholder columns. The
// `*_with` variants bind custom parameter names instead of the defaults.

fn higher_order(base: impl Into<Value>, name: &str, mut args: Vec<Value>, lambda: Column) -> Column {
    args.push(lambda.into());
    anonymous_with(base, name, args)
}

/// `AGGREGATE(col, initial_value, (acc, x) -> merge)`.
pub fn aggregate<M>(col: impl Into<Value>, initial_value: impl Into<Value>, merge: M) -> Column
where
    M: Fn(Column, Column) -> Column,
{
    let merge = synthesize::<M, (Column, Column)>(&merge, &["acc", "x"]);
    higher_order(col, "AGGREGATE", vec![initial_value.into()], merge)
}

/// `AGGREGATE(col, initial_value, (acc, x) -> merge, acc -> finish)`.
pub fn aggregate_with_finish<M, F>(
    col: impl Into<Value>,
    initial_value: impl Into<Value>,
    merge: M,
    finish: F,
) -> Column
where
    M: Fn(Column, Column) -> Column,
    F: Fn(Column) -> Column,
{
    let merge = synthesize::<M, (Column, Column)>(&merge, &["acc", "x"]);
    let finish = synthesize::<F, (Column,)>(&finish, &["acc"]);
    higher_order(
        col,
        "AGGREGATE",
        vec![initial_value.into(), merge.into()],
        finish,
    )
}

/// [`aggregate`] with custom accumulator and element names, `[acc, x]`.
pub fn aggregate_with<M>(
    col: impl Into<Value>,
    initial_value: impl Into<Value>,
    merge: M,
    names: &[&str],
) -> Result<Column>
where
    M: Fn(Column, Column) -> Column,
{
    let merge = make_lambda::<M, (Column, Column)>(&merge, names)?;
    Ok(higher_order(col, "AGGREGATE", vec![initial_value.into()], merge))
}

/// [`aggregate_with_finish`] with custom names. The finisher binds the
/// first name, like the accumulator.
pub fn aggregate_with_finish_with<M, F>(
    col: impl Into<Value>,
    initial_value: impl Into<Value>,
    merge: M,
    finish: F,
    names: &[&str],
) -> Result<Column>
where
    M: Fn(Column, Column) -> Column,
    F: Fn(Column) -> Column,
{
    let merge = make_lambda::<M, (Column, Column)>(&merge, names)?;
    let finish = make_lambda::<F, (Column,)>(&finish, names)?;
    Ok(higher_order(
        col,
        "AGGREGATE",
        vec![initial_value.into(), merge.into()],
        finish,
    ))
}

/// `TRANSFORM(col, x -> f)` or `TRANSFORM(col, (x, i) -> f)`.
pub fn transform<F, Args>(col: impl Into<Value>, f: F) -> Column
where
    F: ElementLambda<Args>,
{
    higher_order(col, "TRANSFORM", Vec::new(), synthesize::<F, Args>(&f, &["x", "i"]))
}

pub fn transform_with<F, Args>(col: impl Into<Value>, f: F, names: &[&str]) -> Result<Column>
where
    F: ElementLambda<Args>,
{
    Ok(higher_order(col, "TRANSFORM", Vec::new(), make_lambda::<F, Args>(&f, names)?))
}

/// `FILTER(col, x -> f)` or `FILTER(col, (x, i) -> f)`.
pub fn filter<F, Args>(col: impl Into<Value>, f: F) -> Column
where
    F: ElementLambda<Args>,
{
    higher_order(col, "FILTER", Vec::new(), synthesize::<F, Args>(&f, &["x", "i"]))
}

pub fn filter_with<F, Args>(col: impl Into<Value>, f: F, names: &[&str]) -> Result<Column>
where
    F: ElementLambda<Args>,
{
    Ok(higher_order(col, "FILTER", Vec::new(), make_lambda::<F, Args>(&f, names)?))
}

pub fn exists<F>(col: impl Into<Value>, f: F) -> Column
where
    F: Fn(Column) -> Column,
{
    let lambda = synthesize::<F, (Column,)>(&f, &["x"]);
    higher_order(col, "EXISTS", Vec::new(), lambda)
}

pub fn exists_with<F>(col: impl Into<Value>, f: F, names: &[&str]) -> Result<Column>
where
    F: Fn(Column) -> Column,
{
    let lambda = make_lambda::<F, (Column,)>(&f, names)?;
    Ok(higher_order(col, "EXISTS", Vec::new(), lambda))
}

pub fn forall<F>(col: impl Into<Value>, f: F) -> Column
where
    F: Fn(Column) -> Column,
{
    let lambda = synthesize::<F, (Column,)>(&f, &["x"]);
    higher_order(col, "FORALL", Vec::new(), lambda)
}

pub fn forall_with<F>(col: impl Into<Value>, f: F, names: &[&str]) -> Result<Column>
where
    F: Fn(Column) -> Column,
{
    let lambda = make_lambda::<F, (Column,)>(&f, names)?;
    Ok(higher_order(col, "FORALL", Vec::new(), lambda))
}

/// `ZIP_WITH(left, right, (x, y) -> f)`.
pub fn zip_with<F>(left: impl Into<Value>, right: impl Into<Value>, f: F) -> Column
where
    F: Fn(Column, Column) -> Column,
{
    let lambda = synthesize::<F, (Column, Column)>(&f, &["x", "y"]);
    higher_order(left, "ZIP_WITH", vec![right.into()], lambda)
}

pub fn zip_with_with<F>(
    left: impl Into<Value>,
    right: impl Into<Value>,
    f: F,
    names: &[&str],
) -> Result<Column>
where
    F: Fn(Column, Column) -> Column,
{
    let lambda = make_lambda::<F, (Column, Column)>(&f, names)?;
    Ok(higher_order(left, "ZIP_WITH", vec![right.into()], lambda))
}

fn map_lambda<F>(col: impl Into<Value>, name: &str, f: F) -> Column
where
    F: Fn(Column, Column) -> Column,
{
    let lambda = synthesize::<F, (Column, Column)>(&f, &["k", "v"]);
    higher_order(col, name, Vec::new(), lambda)
}

fn map_lambda_with<F>(col: impl Into<Value>, name: &str, f: F, names: &[&str]) -> Result<Column>
where
    F: Fn(Column, Column) -> Column,
{
    let lambda = make_lambda::<F, (Column, Column)>(&f, names)?;
    Ok(higher_order(col, name, Vec::new(), lambda))
}

/// `TRANSFORM_KEYS(col, (k, v) -> f)`.
pub fn transform_keys<F>(col: impl Into<Value>, f: F) -> Column
where
    F: Fn(Column, Column) -> Column,
{
    map_lambda(col, "TRANSFORM_KEYS", f)
}

pub fn transform_keys_with<F>(col: impl Into<Value>, f: F, names: &[&str]) -> Result<Column>
where
    F: Fn(Column, Column) -> Column,
{
    map_lambda_with(col, "TRANSFORM_KEYS", f, names)
}

/// `TRANSFORM_VALUES(col, (k, v) -> f)`.
pub fn transform_values<F>(col: impl Into<Value>, f: F) -> Column
where
    F: Fn(Column, Column) -> Column,
{
    map_lambda(col, "TRANSFORM_VALUES", f)
}

pub fn transform_values_with<F>(col: impl Into<Value>, f: F, names: &[&str]) -> Result<Column>
where
    F: Fn(Column, Column) -> Column,
{
    map_lambda_with(col, "TRANSFORM_VALUES", f, names)
}

/// `MAP_FILTER(col, (k, v) -> predicate)`.
pub fn map_filter<F>(col: impl Into<Value>, f: F) -> Column
where
    F: Fn(Column, Column) -> Column,
{
    map_lambda(col, "MAP_FILTER", f)
}

pub fn map_filter_with<F>(col: impl Into<Value>, f: F, names: &[&str]) -> Result<Column>
where
    F: Fn(Column, Column) -> Column,
{
    map_lambda_with(col, "MAP_FILTER", f, names)
}

/// `MAP_ZIP_WITH(col1, col2, (k, v1, v2) -> f)`.
pub fn map_zip_with<F>(col1: impl Into<Value>, col2: impl Into<Value>, f: F) -> Column
where
    F: Fn(Column, Column, Column) -> Column,
{
    let lambda = synthesize::<F, (Column, Column, Column)>(&f, &["k", "v1", "v2"]);
    higher_order(col1, "MAP_ZIP_WITH", vec![col2.into()], lambda)
}

pub fn map_zip_with_with<F>(
    col1: impl Into<Value>,
    col2: impl Into<Value>,
    f: F,
    names: &[&str],
) -> Result<Column>
where
    F: Fn(Column, Column, Column) -> Column,
{
    let lambda = make_lambda::<F, (Column, Column, Column)>(&f, names)?;
    Ok(higher_order(col1, "MAP_ZIP_WITH", vec![col2.into()], lambda))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expressions::Expression;

    #[test]
    fn test_typed_entries() {
        assert!(matches!(sum("a").node(), Expression::Sum(_)));
        assert!(matches!(upper("a").node(), Expression::Upper(_)));
        assert!(matches!(var_samp("a").node(), Expression::Variance(_)));
        assert_eq!(count("*").sql(), "COUNT(*)");
    }

    #[test]
    fn test_anonymous_entries() {
        match acos("a").node() {
            Expression::Function(f) => assert_eq!(f.name, "ACOS"),
            other => panic!("expected anonymous call, got {:?}", other),
        }
        assert_eq!(row_number().sql(), "ROW_NUMBER()");
    }

    #[test]
    fn test_optional_suppression() {
        assert_eq!(round("c", None).sql(), "ROUND(c)");
        assert_eq!(round("c", Some(2)).sql(), "ROUND(c, 2)");
        assert_eq!(first("c", Some(true)).sql(), "FIRST(c, TRUE)");
    }

    #[test]
    fn test_log_variants() {
        assert!(matches!(log("x", None).node(), Expression::Ln(_)));
        assert_eq!(log(10, Some("x".into())).sql(), "LOG(10, x)");
    }

    #[test]
    fn test_lag_offsets() {
        assert_eq!(lag("a", None, None).sql(), "LAG(a)");
        assert_eq!(lag("a", Some(1), None).sql(), "LAG(a)");
        assert_eq!(lag("a", Some(2), None).sql(), "LAG(a, 2)");
        assert_eq!(lead("a", None, Some(0.into())).sql(), "LEAD(a, 1, 0)");
    }

    #[test]
    fn test_nth_value() {
        assert_eq!(nth_value("a", Some(3), None).unwrap().sql(), "NTH_VALUE(a, 3)");
        assert!(matches!(
            nth_value("a", None, Some(false)),
            Err(Error::Unsupported { .. })
        ));
    }

    #[test]
    fn test_count_distinct() {
        assert_eq!(count_distinct(["a"]).unwrap().sql(), "COUNT(DISTINCT a)");
        assert!(matches!(
            count_distinct(["a", "b"]),
            Err(Error::Unsupported { .. })
        ));
        assert_eq!(
            countDistinct(["a"]).unwrap().node(),
            count_distinct(["a"]).unwrap().node()
        );
    }

    #[test]
    fn test_value_or_literal() {
        assert_eq!(md5("a").sql(), "MD5('a')");
        assert_eq!(md5(col("a")).sql(), "MD5(a)");
        assert_eq!(array_contains("xs", "v").sql(), "ARRAY_CONTAINS(xs, 'v')");
        assert_eq!(from_utc_timestamp("ts", "UTC").sql(), "FROM_UTC_TIMESTAMP(ts, 'UTC')");
    }

    #[test]
    fn test_window_start_without_slide() {
        assert_eq!(
            window("ts", "10 minutes", None, Some("5 minutes")).sql(),
            "WINDOW(ts, '10 minutes', '10 minutes', '5 minutes')"
        );
    }

    #[test]
    fn test_sentences_default_language() {
        assert_eq!(
            sentences("s", None, Some(lit("US").into())).sql(),
            "SENTENCES(s, 'en', 'US')"
        );
    }

    #[test]
    fn test_percentile_accuracy_truthiness() {
        assert_eq!(
            percentile_approx("a", 0.5, Some(0.into())).sql(),
            "PERCENTILE_APPROX(a, 0.5)"
        );
        assert_eq!(
            percentile_approx("a", 0.5, Some(100.into())).sql(),
            "PERCENTILE_APPROX(a, 0.5, 100)"
        );
    }

    #[test]
    fn test_create_map() {
        let map = create_map([lit("a"), col("x"), lit("b"), col("y")]).unwrap();
        assert_eq!(map.sql(), "MAP(ARRAY('a', 'b'), ARRAY(x, y))");
        assert!(create_map(["a"]).is_err());
    }

    #[test]
    fn test_concat_ws_and_split() {
        assert_eq!(concat_ws("-", ["a", "b"]).sql(), "CONCAT_WS('-', a, b)");
        assert_eq!(split("s", ",", None).sql(), "SPLIT(s, ',')");
    }

    #[test]
    fn test_options_map() {
        assert_eq!(
            to_json("c", Some(&[("pretty", "true")][..])).sql(),
            "TO_JSON(c, MAP(ARRAY('pretty'), ARRAY('true')))"
        );
    }

    #[test]
    fn test_higher_order() {
        assert_eq!(
            aggregate("xs", 0, |acc, x| acc + x).sql(),
            "AGGREGATE(xs, 0, (acc, x) -> acc + x)"
        );
        assert_eq!(
            filter("xs", |x: Column, i: Column| x.gt(i)).sql(),
            "FILTER(xs, (x, i) -> x > i)"
        );
        assert_eq!(
            map_zip_with("m1", "m2", |k, v1, v2| k + v1 + v2).sql(),
            "MAP_ZIP_WITH(m1, m2, (k, v1, v2) -> (k + v1) + v2)"
        );
    }

    #[test]
    fn test_broadcast() {
        assert_eq!(broadcast(col("t")).sql(), "/*+ BROADCAST */ t");
    }
}
