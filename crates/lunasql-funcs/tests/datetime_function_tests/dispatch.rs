//! Dispatch, aliasing, coercion and NULL-propagation behavior

use lunasql_funcs::eval_scalar_function;
use lunasql_types::{SqlValue, Timestamp};

fn ts(s: &str) -> SqlValue {
    SqlValue::Timestamp(s.parse::<Timestamp>().unwrap())
}

#[test]
fn test_function_names_are_case_insensitive() {
    let args = [ts("2024-03-15 14:30:45")];
    for name in ["YEAR", "year", "Year"] {
        assert_eq!(eval_scalar_function(name, &args).unwrap(), SqlValue::Integer(2024));
    }
}

#[test]
fn test_aliases_share_an_implementation() {
    let args = [ts("2024-03-15")];
    assert_eq!(
        eval_scalar_function("DAY", &args).unwrap(),
        eval_scalar_function("DAYOFMONTH", &args).unwrap(),
    );

    let args = [ts("2024-03-15"), SqlValue::Integer(3)];
    assert_eq!(
        eval_scalar_function("WEEKOFYEAR", &args[..1]).unwrap(),
        eval_scalar_function("WEEK", &args).unwrap(),
    );
}

#[test]
fn test_unknown_function_is_rejected() {
    let err = eval_scalar_function("FROBNICATE", &[]).unwrap_err();
    assert!(err.to_string().contains("FROBNICATE"));
}

#[test]
fn test_null_propagates_through_every_function() {
    for name in [
        "YEAR",
        "MONTH",
        "DAY",
        "HOUR",
        "MINUTE",
        "SECOND",
        "MICROSECOND",
        "DAYOFYEAR",
        "DAYOFWEEK",
        "WEEKDAY",
        "DAYNAME",
        "MONTHNAME",
        "DATE",
        "TIME_TO_SEC",
        "WEEK",
        "WEEKOFYEAR",
        "YEARWEEK",
    ] {
        assert_eq!(
            eval_scalar_function(name, &[SqlValue::Null]).unwrap(),
            SqlValue::Null,
            "{} should propagate NULL",
            name
        );
    }
}

#[test]
fn test_string_arguments_are_parsed() {
    let args = [SqlValue::Varchar("2024-03-15 14:30:45".into())];
    assert_eq!(eval_scalar_function("YEAR", &args).unwrap(), SqlValue::Integer(2024));
    assert_eq!(eval_scalar_function("HOUR", &args).unwrap(), SqlValue::Integer(14));

    let args = [SqlValue::Varchar("2024-03-15".into())];
    assert_eq!(eval_scalar_function("HOUR", &args).unwrap(), SqlValue::Integer(0));
}

#[test]
fn test_packed_integer_arguments_are_parsed() {
    let args = [SqlValue::Integer(20240315)];
    assert_eq!(eval_scalar_function("MONTH", &args).unwrap(), SqlValue::Integer(3));

    let args = [SqlValue::Integer(20240315143045)];
    assert_eq!(eval_scalar_function("MINUTE", &args).unwrap(), SqlValue::Integer(30));
}

#[test]
fn test_malformed_input_degrades_to_zero_instant() {
    let args = [SqlValue::Varchar("not a date".into())];
    assert_eq!(eval_scalar_function("YEAR", &args).unwrap(), SqlValue::Integer(0));
    assert_eq!(eval_scalar_function("DAYOFYEAR", &args).unwrap(), SqlValue::Integer(1));

    // Non-digit bytes in the fractional seconds, multibyte included
    let args = [SqlValue::Varchar("2024-01-01 00:00:00.ééééé".into())];
    assert_eq!(eval_scalar_function("YEAR", &args).unwrap(), SqlValue::Integer(0));

    // Years past 9999 are out of the supported calendar range
    let args = [SqlValue::Varchar("6000000-01-01".into())];
    assert_eq!(eval_scalar_function("YEAR", &args).unwrap(), SqlValue::Integer(0));
    assert_eq!(
        eval_scalar_function("DATE_FORMAT", &[args[0].clone(), SqlValue::Varchar("%Y".into())])
            .unwrap(),
        SqlValue::Varchar("0000".into())
    );
}

#[test]
fn test_date_returns_date_part() {
    let args = [ts("2024-03-15 14:30:45")];
    assert_eq!(
        eval_scalar_function("DATE", &args).unwrap(),
        SqlValue::Date("2024-03-15".parse().unwrap())
    );
}

#[test]
fn test_current_functions_return_expected_types() {
    assert!(matches!(
        eval_scalar_function("CURRENT_DATE", &[]).unwrap(),
        SqlValue::Date(_)
    ));
    assert!(matches!(eval_scalar_function("CURDATE", &[]).unwrap(), SqlValue::Date(_)));
    assert!(matches!(eval_scalar_function("CURTIME", &[]).unwrap(), SqlValue::Time(_)));
    assert!(matches!(eval_scalar_function("NOW", &[]).unwrap(), SqlValue::Timestamp(_)));
    assert!(matches!(
        eval_scalar_function("CURRENT_TIMESTAMP", &[SqlValue::Integer(6)]).unwrap(),
        SqlValue::Timestamp(_)
    ));
}
