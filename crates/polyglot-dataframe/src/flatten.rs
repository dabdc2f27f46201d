//! Argument flattening for variadic constructors.
//!
//! Functions such as `array`, `create_map`, `map_concat` and `struct` accept
//! either a flat argument list (`array(a, b, c)`) or a single iterable
//! (`array([a, b, c])`). Both forms normalize to the same column sequence.

use crate::column::{ensure_column, Column, Value};
use crate::error::{Error, Result};

/// Normalize a variadic argument list into a flat sequence of columns.
///
/// - A `List` first argument is the exhaustive iterable; it is flattened one
///   level. Any further argument after it is rejected.
/// - Otherwise the arguments are already flat.
///
/// Every element goes through [`ensure_column`], so bare strings are column
/// names and scalars are literals.
pub fn flatten_columns(args: Vec<Value>) -> Result<Vec<Column>> {
    let mut args = args.into_iter();
    let Some(first) = args.next() else {
        return Ok(Vec::new());
    };

    match first {
        Value::List(items) => {
            let trailing = args.len();
            if trailing > 0 {
                return Err(Error::invalid_argument(format!(
                    "an iterable argument must be the only argument, found {} more",
                    trailing
                )));
            }
            Ok(items.into_iter().map(|value| ensure_column(value)).collect())
        }
        first => Ok(std::iter::once(first)
            .chain(args)
            .map(|value| ensure_column(value))
            .collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sql(columns: &[Column]) -> Vec<String> {
        columns.iter().map(Column::sql).collect()
    }

    #[test]
    fn test_flat_and_iterable_agree() {
        let flat = flatten_columns(vec![1.into(), 2.into(), 3.into()]).unwrap();
        let nested = flatten_columns(vec![vec![1, 2, 3].into()]).unwrap();
        assert_eq!(sql(&flat), sql(&nested));
        assert_eq!(sql(&flat), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_strings_are_columns() {
        let columns = flatten_columns(vec!["a".into(), "t.b".into()]).unwrap();
        assert_eq!(sql(&columns), vec!["a", "t.b"]);
    }

    #[test]
    fn test_empty() {
        assert!(flatten_columns(Vec::new()).unwrap().is_empty());
        assert!(flatten_columns(vec![Value::List(Vec::new())])
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_iterable_with_trailing_rejected() {
        let err = flatten_columns(vec![vec!["a", "b"].into(), "c".into()]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_only_one_level() {
        let columns = flatten_columns(vec![vec![vec![1, 2]].into()]).unwrap();
        assert_eq!(sql(&columns), vec!["ARRAY(1, 2)"]);
    }
}
