//! Catalog Consistency Tests
//!
//! The name-keyed catalog and the free functions must build identical nodes,
//! and the table itself must be well-formed.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use polyglot_dataframe::catalog::{ArgShape, Catalog, Invoker, Presence, FUNCTION_SPECS};
use polyglot_dataframe::functions::{self, col, lit, Column, Value};
use polyglot_dataframe::Error;

type Case = (&'static str, fn() -> Vec<Value>, fn() -> Column);

/// (name, positional arguments, equivalent free-function call)
fn case(name: &'static str, args: fn() -> Vec<Value>, expected: fn() -> Column) -> Case {
    (name, args, expected)
}

static EQUIVALENT_CALLS: Lazy<Vec<Case>> = Lazy::new(|| {
    vec![
        case("sum", || vec!["a".into()], || functions::sum("a")),
        case("count", || vec!["*".into()], || functions::count("*")),
        case("acos", || vec!["a".into()], || functions::acos("a")),
        case("round", || vec!["a".into()], || functions::round("a", None)),
        case(
            "round",
            || vec!["a".into(), 2.into()],
            || functions::round("a", Some(2)),
        ),
        case(
            "log",
            || vec!["x".into()],
            || functions::log("x", None),
        ),
        case(
            "log",
            || vec![2.into(), "x".into()],
            || functions::log(2, Some("x".into())),
        ),
        case(
            "lag",
            || vec!["a".into(), 2.into()],
            || functions::lag("a", Some(2), None),
        ),
        case(
            "lead",
            || vec!["a".into(), Value::Null, "d".into()],
            || functions::lead("a", None, Some("d".into())),
        ),
        case(
            "nth_value",
            || vec!["a".into(), 3.into()],
            || functions::nth_value("a", Some(3), None).unwrap(),
        ),
        case(
            "split",
            || vec!["s".into(), ",".into(), 2.into()],
            || functions::split("s", ",", Some(2)),
        ),
        case(
            "concat_ws",
            || vec!["-".into(), "a".into(), "b".into()],
            || functions::concat_ws("-", ["a", "b"]),
        ),
        case(
            "substring",
            || vec!["s".into(), 2.into(), 3.into()],
            || functions::substring("s", 2, 3),
        ),
        case(
            "greatest",
            || vec!["a".into(), "b".into()],
            || functions::greatest(["a", "b"]),
        ),
        case(
            "trunc",
            || vec!["d".into(), "year".into()],
            || functions::trunc("d", "year"),
        ),
        case(
            "date_trunc",
            || vec!["hour".into(), "ts".into()],
            || functions::date_trunc("hour", "ts"),
        ),
        case(
            "locate",
            || vec!["b".into(), "s".into(), 4.into()],
            || functions::locate("b", "s", Some(4)),
        ),
        case(
            "window",
            || vec!["ts".into(), "1 hour".into(), Value::Null, "5 minutes".into()],
            || functions::window("ts", "1 hour", None, Some("5 minutes")),
        ),
        case(
            "sentences",
            || vec!["s".into(), Value::Null, lit("US").into()],
            || functions::sentences("s", None, Some(lit("US").into())),
        ),
        case(
            "percentile_approx",
            || vec!["a".into(), 0.5.into(), 0.into()],
            || functions::percentile_approx("a", 0.5, Some(0.into())),
        ),
        case(
            "unix_timestamp",
            || vec![Value::Null, "yyyy".into()],
            || functions::unix_timestamp(None, Some("yyyy")),
        ),
        case(
            "array",
            || vec![vec![1, 2, 3].into()],
            || functions::array([1, 2, 3]).unwrap(),
        ),
        case(
            "struct",
            || vec![col("a").alias("x").into(), "b".into()],
            || functions::r#struct([col("a").alias("x"), col("b")]).unwrap(),
        ),
        case(
            "create_map",
            || vec![lit("k").into(), "v".into()],
            || functions::create_map([lit("k"), col("v")]).unwrap(),
        ),
        case(
            "map_concat",
            || vec![vec!["m1", "m2"].into()],
            || functions::map_concat(["m1", "m2"]).unwrap(),
        ),
        case(
            "array_contains",
            || vec!["xs".into(), "v".into()],
            || functions::array_contains("xs", "v"),
        ),
        case(
            "json_tuple",
            || vec!["j".into(), "a".into(), "b".into()],
            || functions::json_tuple("j", ["a", "b"]),
        ),
        case(
            "to_json",
            || vec!["c".into(), Value::List(vec![vec!["k", "v"].into()])],
            || functions::to_json("c", Some(&[("k", "v")][..])),
        ),
        case("current_date", Vec::new, functions::current_date),
        case("row_number", Vec::new, functions::row_number),
        case("rand", || vec![7.into()], || functions::rand(Some(7))),
        case(
            "countDistinct",
            || vec!["a".into()],
            || functions::count_distinct(["a"]).unwrap(),
        ),
        case(
            "when",
            || vec![col("a").gt(1).into(), "big".into()],
            || functions::when(col("a").gt(1), "big"),
        ),
        case("desc", || vec!["a".into()], || functions::desc("a")),
        case("expr", || vec!["a + 1".into()], || functions::expr("a + 1")),
    ]
});

// ============================================================================
// Dynamic Calls
// ============================================================================

mod dynamic_calls {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_agrees_with_free_functions() {
        let catalog = Catalog::global();
        for (name, args, expected) in EQUIVALENT_CALLS.iter() {
            let actual = catalog
                .call(name, args())
                .unwrap_or_else(|e| panic!("{} failed: {}", name, e));
            assert_eq!(actual.node(), expected().node(), "mismatch for {}", name);
        }
    }

    #[test]
    fn test_names_are_case_insensitive_by_default() {
        let lower = Catalog::global().call("upper", vec!["a".into()]).unwrap();
        let shouted = Catalog::global().call("UPPER", vec!["a".into()]).unwrap();
        assert_eq!(lower.node(), shouted.node());
    }

    #[test]
    fn test_higher_order_by_name_needs_a_closure() {
        let catalog = Catalog::global();
        for (name, args) in [
            ("aggregate", vec![Value::from("xs")]),
            ("aggregate", vec!["xs".into(), 0.into()]),
            ("transform", vec!["xs".into()]),
            ("transform", Vec::new()),
            ("map_zip_with", vec!["a".into(), "b".into()]),
        ] {
            assert_eq!(
                catalog.call(name, args).unwrap_err(),
                Error::LambdaRequired(name.to_string()),
                "{}",
                name
            );
        }
    }

    #[test]
    fn test_unsupported_by_name_ignores_argument_count() {
        assert!(matches!(
            Catalog::global().call("product", Vec::new()),
            Err(Error::Unsupported { .. })
        ));
    }

    #[test]
    fn test_unknown_function() {
        assert_eq!(
            Catalog::global().call("no_such_fn", Vec::new()).unwrap_err(),
            Error::UnknownFunction("no_such_fn".to_string())
        );
    }
}

// ============================================================================
// Table Shape
// ============================================================================

mod table {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_duplicate_names() {
        let mut seen = HashSet::new();
        for spec in FUNCTION_SPECS {
            assert!(seen.insert(spec.name), "duplicate entry {}", spec.name);
            for alias in spec.aliases {
                assert!(seen.insert(*alias), "duplicate alias {}", alias);
            }
        }
    }

    #[test]
    fn test_every_alias_resolves_to_its_entry() {
        let catalog = Catalog::global();
        for spec in FUNCTION_SPECS {
            for alias in spec.aliases {
                assert_eq!(catalog.canonical_name(alias), Some(spec.name));
            }
        }
    }

    #[test]
    fn test_legacy_aliases_present() {
        let catalog = Catalog::global();
        for (alias, canonical) in [
            ("countDistinct", "count_distinct"),
            ("sumDistinct", "sum_distinct"),
            ("toDegrees", "degrees"),
            ("toRadians", "radians"),
            ("bitwiseNOT", "bitwise_not"),
            ("approxCountDistinct", "approx_count_distinct"),
            ("shiftLeft", "shiftleft"),
            ("shiftRight", "shiftright"),
            ("shiftRightUnsigned", "shiftrightunsigned"),
        ] {
            assert_eq!(catalog.canonical_name(alias), Some(canonical));
        }
    }

    #[test]
    fn test_flattening_entries() {
        let flattening: HashSet<&str> = FUNCTION_SPECS
            .iter()
            .filter(|spec| spec.shape == ArgShape::FlattenFirst)
            .map(|spec| spec.name)
            .collect();
        assert_eq!(flattening, HashSet::from(["array", "struct", "map_concat"]));
    }

    #[test]
    fn test_higher_order_entries() {
        let higher_order: Vec<&str> = FUNCTION_SPECS
            .iter()
            .filter(|spec| matches!(spec.invoker, Invoker::HigherOrder))
            .map(|spec| spec.name)
            .collect();
        assert_eq!(
            higher_order,
            vec![
                "aggregate",
                "transform",
                "exists",
                "forall",
                "filter",
                "zip_with",
                "transform_keys",
                "transform_values",
                "map_filter",
                "map_zip_with",
            ]
        );
    }

    #[test]
    fn test_rejected_parameters_are_trailing() {
        for spec in FUNCTION_SPECS {
            if let Some(position) = spec
                .params
                .iter()
                .position(|p| matches!(p.presence, Presence::Rejected(_)))
            {
                assert_eq!(position, spec.params.len() - 1, "{}", spec.name);
            }
        }
    }

    #[test]
    fn test_names_lists_canonical_entries() {
        let names: Vec<&str> = Catalog::global().names().collect();
        assert_eq!(names.len(), FUNCTION_SPECS.len());
        assert!(names.contains(&"get_json_object"));
        assert!(!names.contains(&"countDistinct"));
    }
}
