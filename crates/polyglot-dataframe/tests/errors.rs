//! Error Handling Tests
//!
//! Unsupported features, malformed call shapes and dynamic-call errors must
//! surface as typed errors with useful messages, never as panics.

use polyglot_dataframe::catalog::Catalog;
use polyglot_dataframe::functions::*;
use polyglot_dataframe::invoke::{build_typed, NodeKind, TypedArgs};
use polyglot_dataframe::Error;

// ============================================================================
// Unsupported Features
// ============================================================================

mod unsupported {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_count_distinct_multiple_columns() {
        let err = count_distinct(["a", "b"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported: Multiple columns in a count distinct"
        );
        assert!(countDistinct(["a", "b"]).is_err());
    }

    #[test]
    fn test_sum_distinct() {
        assert_eq!(
            sum_distinct("a").unwrap_err(),
            Error::unsupported("Sum distinct")
        );
        assert_eq!(sumDistinct("a").unwrap_err(), sum_distinct("a").unwrap_err());
    }

    #[test]
    fn test_product() {
        assert!(matches!(product("a"), Err(Error::Unsupported { .. })));
    }

    #[test]
    fn test_nth_value_ignore_nulls() {
        assert!(matches!(
            nth_value("a", Some(2), Some(true)),
            Err(Error::Unsupported { .. })
        ));
        assert!(nth_value("a", Some(2), None).is_ok());
    }

    #[test]
    fn test_dynamic_unsupported() {
        let catalog = Catalog::global();
        assert!(matches!(
            catalog.call("sumDistinct", vec!["a".into()]),
            Err(Error::Unsupported { .. })
        ));
        assert!(matches!(
            catalog.call("count_distinct", vec!["a".into(), "b".into()]),
            Err(Error::Unsupported { .. })
        ));
    }
}

// ============================================================================
// Malformed Calls
// ============================================================================

mod malformed {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_iterable_with_trailing_arguments() {
        let err = array([Value::from(vec![1, 2]), Value::from(3)]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(r#struct([Value::from(vec!["a"]), Value::from("b")]).is_err());
    }

    #[test]
    fn test_create_map_odd_arguments() {
        assert!(matches!(
            create_map(["k1", "v1", "k2"]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_count_distinct_empty() {
        assert_eq!(
            count_distinct(Vec::<&str>::new()).unwrap_err(),
            Error::arity("count_distinct", "at least 1", 0)
        );
    }

    #[test]
    fn test_typed_slot_mismatch() {
        let err = build_typed(Some(col("a")), NodeKind::Split, TypedArgs::new()).unwrap_err();
        assert_eq!(err.to_string(), "Cannot build Split: missing `expression`");
    }

    #[test]
    fn test_when_chain_on_plain_column() {
        assert!(matches!(
            col("a").otherwise(1),
            Err(Error::InvalidArgument(_))
        ));
        let closed = when(col("a").gt(0), 1).otherwise(0).unwrap();
        assert!(closed.when(col("b"), 2).is_err());
    }
}

// ============================================================================
// Dynamic Calls
// ============================================================================

mod dynamic {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_arity_messages() {
        let err = Catalog::global()
            .call("atan2", vec!["a".into()])
            .unwrap_err();
        assert_eq!(err.to_string(), "atan2 expects 2 argument(s), got 1");

        let err = Catalog::global()
            .call("concat_ws", Vec::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "concat_ws expects at least 1 argument(s), got 0");
    }

    #[test]
    fn test_lambda_required() {
        let err = Catalog::global()
            .call("aggregate", vec!["xs".into(), 0.into(), "f".into()])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "aggregate requires a lambda and cannot be called by name"
        );
    }

    #[test]
    fn test_string_parameters_are_checked() {
        let err = Catalog::global()
            .call("window", vec!["ts".into(), 5.into()])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(Catalog::global().call("expr", vec![1.into()]).is_err());
    }
}
