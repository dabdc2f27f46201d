//! Function Catalog Tests
//!
//! Node shapes produced by the free functions: typed vs anonymous entries,
//! argument coercion and optional-argument handling.

use polyglot_dataframe::expressions::{Expression, Literal};
use polyglot_dataframe::functions::*;

fn anonymous_name(column: &Column) -> &str {
    match column.node() {
        Expression::Function(f) => &f.name,
        other => panic!("expected anonymous function, got {:?}", other),
    }
}

fn anonymous_args(column: &Column) -> &[Expression] {
    match column.node() {
        Expression::Function(f) => &f.args,
        other => panic!("expected anonymous function, got {:?}", other),
    }
}

// ============================================================================
// Typed Entries
// ============================================================================

mod typed {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_aggregates_wrap_one_node() {
        assert!(matches!(sum("a").node(), Expression::Sum(_)));
        assert!(matches!(avg("a").node(), Expression::Avg(_)));
        assert!(matches!(stddev_pop("a").node(), Expression::StddevPop(_)));
        assert!(matches!(var_pop("a").node(), Expression::VariancePop(_)));
        assert!(matches!(
            approx_count_distinct("a", None).node(),
            Expression::ApproxDistinct(_)
        ));
    }

    #[test]
    fn test_approx_count_distinct_accuracy() {
        assert_eq!(
            approx_count_distinct("a", Some(0.05)).sql(),
            "APPROX_COUNT_DISTINCT(a, 0.05)"
        );
        assert_eq!(approx_count_distinct("a", None).sql(), "APPROX_COUNT_DISTINCT(a)");
    }

    #[test]
    fn test_date_functions() {
        assert!(matches!(current_date().node(), Expression::CurrentDate(_)));
        assert_eq!(date_add("d", 3).sql(), "DATE_ADD(d, 3)");
        assert_eq!(trunc("d", "month").sql(), "DATE_TRUNC('month', d)");
        assert_eq!(date_trunc("hour", "ts").sql(), "TIMESTAMP_TRUNC(ts, 'hour')");
    }

    #[test]
    fn test_shifts_are_typed() {
        assert!(matches!(
            shiftleft("a", 2).node(),
            Expression::BitwiseLeftShift(_)
        ));
        assert_eq!(shiftright("a", 1).sql(), "a >> 1");
        assert_eq!(anonymous_name(&shiftrightunsigned("a", 1)), "SHIFTRIGHTUNSIGNED");
    }

    #[test]
    fn test_variadic_typed() {
        assert_eq!(greatest(["a", "b", "c"]).sql(), "GREATEST(a, b, c)");
        assert_eq!(coalesce([col("a"), lit(0)]).sql(), "COALESCE(a, 0)");
        assert_eq!(least(Vec::<&str>::new()).sql(), "LEAST()");
    }

    #[test]
    fn test_substring_and_json() {
        assert_eq!(substring("s", 1, 3).sql(), "SUBSTRING(s, 1, 3)");
        assert_eq!(
            get_json_object("j", "$.a").sql(),
            "JSON_EXTRACT(j, '$.a')"
        );
    }
}

// ============================================================================
// Anonymous Entries
// ============================================================================

mod anonymous {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_names_are_declared_names() {
        assert_eq!(anonymous_name(&acos("a")), "ACOS");
        assert_eq!(anonymous_name(&collect_set("a")), "COLLECT_SET");
        assert_eq!(anonymous_name(&dayofweek("a")), "DAYOFWEEK");
        assert_eq!(anonymous_name(&map_keys("m")), "MAP_KEYS");
    }

    #[test]
    fn test_no_argument_window_functions() {
        for c in [row_number(), dense_rank(), rank(), cume_dist(), percent_rank()] {
            assert!(anonymous_args(&c).is_empty());
        }
        assert_eq!(ntile(4).sql(), "NTILE(4)");
    }

    #[test]
    fn test_seed_is_optional_base() {
        assert_eq!(rand(None).sql(), "RAND()");
        assert_eq!(randn(Some(42)).sql(), "RANDN(42)");
    }

    #[test]
    fn test_literal_parameters() {
        assert_eq!(lpad("s", 5, "*").sql(), "LPAD(s, 5, '*')");
        assert_eq!(translate("s", "abc", "xyz").sql(), "TRANSLATE(s, 'abc', 'xyz')");
        assert_eq!(locate("b", "s", None).sql(), "LOCATE('b', s)");
        assert_eq!(locate("b", "s", Some(2)).sql(), "LOCATE('b', s, 2)");
        assert_eq!(
            format_string("%d-%s", ["a", "b"]).sql(),
            "FORMAT_STRING('%d-%s', a, b)"
        );
        assert_eq!(json_tuple("j", ["a", "b"]).sql(), "JSON_TUPLE(j, 'a', 'b')");
    }

    #[test]
    fn test_string_literal_tag() {
        let formatted = date_format("d", "yyyy");
        assert_eq!(
            anonymous_args(&formatted)[1],
            Expression::Literal(Literal::String("yyyy".to_string()))
        );
        let repeated = repeat("s", 3);
        assert_eq!(
            anonymous_args(&repeated)[1],
            Expression::Literal(Literal::Number("3".to_string()))
        );
    }

    #[test]
    fn test_value_or_literal_keeps_columns() {
        assert_eq!(sha2("a", 256).sql(), "SHA2('a', 256)");
        assert_eq!(sha2(col("a"), 256).sql(), "SHA2(a, 256)");
        assert_eq!(element_at("xs", 1).sql(), "ELEMENT_AT(xs, 1)");
        assert_eq!(array_remove("xs", "v").sql(), "ARRAY_REMOVE(xs, 'v')");
        assert_eq!(raise_error("boom").sql(), "RAISE_ERROR('boom')");
    }

    #[test]
    fn test_hash_first_is_base() {
        assert_eq!(hash(["a", "b"]).sql(), "HASH(a, b)");
        assert_eq!(xxhash64(["a"]).sql(), "XXHASH64(a)");
        assert_eq!(grouping_id(Vec::<&str>::new()).sql(), "GROUPING_ID()");
    }
}

// ============================================================================
// Optional Arguments
// ============================================================================

mod optional_arguments {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_suppression() {
        let unscaled = round("c", None);
        assert_eq!(anonymous_args(&unscaled), &[col("c").into_node()][..]);

        let scaled = round("c", Some(2));
        assert_eq!(
            anonymous_args(&scaled),
            &[
                col("c").into_node(),
                Expression::Literal(Literal::Number("2".to_string()))
            ][..]
        );
        assert_eq!(scaled.sql(), "ROUND(c, 2)");
        assert_eq!(bround("c", Some(0)).sql(), "BROUND(c, 0)");
    }

    #[test]
    fn test_formats() {
        assert_eq!(to_date("d", None).sql(), "TO_DATE(d)");
        assert_eq!(to_date("d", Some("yyyy-MM-dd")).sql(), "TO_DATE(d, 'yyyy-MM-dd')");
        assert_eq!(unix_timestamp(None, None).sql(), "UNIX_TIMESTAMP()");
        assert_eq!(
            unix_timestamp(Some("ts".into()), Some("yyyy")).sql(),
            "UNIX_TIMESTAMP(ts, 'yyyy')"
        );
    }

    #[test]
    fn test_window_rewiring() {
        assert_eq!(window("ts", "1 hour", None, None).sql(), "WINDOW(ts, '1 hour')");
        assert_eq!(
            window("ts", "1 hour", Some("10 minutes"), None).sql(),
            "WINDOW(ts, '1 hour', '10 minutes')"
        );
        assert_eq!(
            window("ts", "1 hour", Some("10 minutes"), Some("5 minutes")).sql(),
            "WINDOW(ts, '1 hour', '10 minutes', '5 minutes')"
        );
    }

    #[test]
    fn test_sentences() {
        assert_eq!(sentences("s", None, None).sql(), "SENTENCES(s)");
        assert_eq!(
            sentences("s", Some(lit("de").into()), None).sql(),
            "SENTENCES(s, 'de')"
        );
    }

    #[test]
    fn test_offsets() {
        assert_eq!(lead("a", Some(3), None).sql(), "LEAD(a, 3)");
        assert_eq!(lag("a", Some(2), Some(lit("x").into())).sql(), "LAG(a, 2, 'x')");
        assert_eq!(nth_value("a", None, None).unwrap().sql(), "NTH_VALUE(a)");
    }

    #[test]
    fn test_collections() {
        assert_eq!(sort_array("xs", None).sql(), "SORT_ARRAY(xs)");
        assert_eq!(sort_array("xs", Some(false)).sql(), "SORT_ARRAY(xs, FALSE)");
        assert_eq!(array_join("xs", ",", Some("?")).sql(), "ARRAY_JOIN(xs, ',', '?')");
        assert_eq!(sequence(1, 10, None).sql(), "SEQUENCE(1, 10)");
        assert_eq!(sequence(1, 10, Some(2.into())).sql(), "SEQUENCE(1, 10, 2)");
    }
}

// ============================================================================
// Flattening
// ============================================================================

mod flattening {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_array_forms_agree() {
        let flat = array([1, 2, 3]).unwrap();
        let nested = array([vec![1, 2, 3]]).unwrap();
        assert_eq!(flat.node(), nested.node());
        assert_eq!(flat.sql(), "ARRAY(1, 2, 3)");
    }

    #[test]
    fn test_struct_uses_aliases() {
        let s = r#struct([col("a").alias("x"), col("b")]).unwrap();
        assert_eq!(s.sql(), "STRUCT(a AS x, b)");
    }

    #[test]
    fn test_map_concat() {
        assert_eq!(map_concat(["m1", "m2"]).unwrap().sql(), "MAP_CONCAT(m1, m2)");
        assert_eq!(
            map_concat([vec!["m1", "m2"]]).unwrap().sql(),
            "MAP_CONCAT(m1, m2)"
        );
    }

    #[test]
    fn test_create_map_from_list() {
        let map = create_map([vec![lit("k"), col("v")]]).unwrap();
        assert_eq!(map.sql(), "MAP(ARRAY('k'), ARRAY(v))");
    }
}

// ============================================================================
// Construction helpers
// ============================================================================

mod construction {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_when_otherwise() {
        let c = when(col("a").gt(0), "pos")
            .when(col("a").lt(0), "neg")
            .and_then(|c| c.otherwise("zero"))
            .unwrap();
        assert_eq!(
            c.sql(),
            "CASE WHEN a > 0 THEN 'pos' WHEN a < 0 THEN 'neg' ELSE 'zero' END"
        );
    }

    #[test]
    fn test_ordering() {
        assert_eq!(asc("a").sql(), "a ASC NULLS FIRST");
        assert_eq!(desc("a").sql(), "a DESC NULLS LAST");
        assert_eq!(desc_nulls_first("a").sql(), "a DESC NULLS FIRST");
    }

    #[test]
    fn test_expr_is_raw() {
        assert_eq!(expr("a + 1").node(), &Expression::Raw(polyglot_dataframe::expressions::Raw {
            sql: "a + 1".to_string()
        }));
    }

    #[test]
    fn test_aliases_forward() {
        assert_eq!(toDegrees("a").node(), degrees("a").node());
        assert_eq!(toRadians("a").node(), radians("a").node());
        assert_eq!(bitwiseNOT("a").node(), bitwise_not("a").node());
        assert_eq!(shiftLeft("a", 1).node(), shiftleft("a", 1).node());
        assert_eq!(
            approxCountDistinct("a", None).node(),
            approx_count_distinct("a", None).node()
        );
    }

    #[test]
    fn test_serializes_to_json() {
        let value = serde_json::to_value(upper("name")).unwrap();
        assert_eq!(value["upper"]["this"]["column"]["name"]["name"], "name");
        let back: Column = serde_json::from_value(value).unwrap();
        assert_eq!(back.node(), upper("name").node());
    }
}
