//! WEEK, WEEKOFYEAR and YEARWEEK through the dispatch layer

use lunasql_funcs::eval_scalar_function;
use lunasql_types::SqlValue;

fn week(date: &str, mode: Option<i64>) -> SqlValue {
    let mut args = vec![SqlValue::Varchar(date.into())];
    if let Some(mode) = mode {
        args.push(SqlValue::Integer(mode));
    }
    eval_scalar_function("WEEK", &args).unwrap()
}

fn yearweek(date: &str, mode: Option<i64>) -> SqlValue {
    let mut args = vec![SqlValue::Varchar(date.into())];
    if let Some(mode) = mode {
        args.push(SqlValue::Integer(mode));
    }
    eval_scalar_function("YEARWEEK", &args).unwrap()
}

#[test]
fn test_week_clamps_to_calendar_year() {
    // 2005-01-01 belongs to 2004's last week in every mode, so WEEK
    // reports 0 rather than a week of the previous year.
    assert_eq!(week("2005-01-01", None), SqlValue::Integer(0));
    // 2008-12-29 belongs to 2009's first week under Monday-first modes,
    // so WEEK reports 53 rather than 1.
    assert_eq!(week("2008-12-29", Some(1)), SqlValue::Integer(53));
}

#[test]
fn test_week_default_mode_is_sunday_first() {
    assert_eq!(week("2005-01-02", None), SqlValue::Integer(1));
    assert_eq!(week("2020-02-03", None), SqlValue::Integer(5));
    assert_eq!(week("2020-02-03", Some(1)), SqlValue::Integer(6));
}

#[test]
fn test_week_mode_wraps_modulo_eight() {
    for date in ["2005-01-01", "2008-12-31", "2020-02-03"] {
        assert_eq!(week(date, Some(11)), week(date, Some(3)), "date {}", date);
    }
}

#[test]
fn test_weekofyear_is_iso_week() {
    let args = [SqlValue::Varchar("2008-12-29".into())];
    assert_eq!(eval_scalar_function("WEEKOFYEAR", &args).unwrap(), SqlValue::Integer(1));

    let args = [SqlValue::Varchar("2005-01-01".into())];
    assert_eq!(eval_scalar_function("WEEKOFYEAR", &args).unwrap(), SqlValue::Integer(53));
}

#[test]
fn test_yearweek_keeps_the_week_year() {
    // Unlike WEEK, YEARWEEK never clamps: the year digits move instead.
    assert_eq!(yearweek("2005-01-02", None), SqlValue::Integer(200501));
    assert_eq!(yearweek("2005-01-02", Some(1)), SqlValue::Integer(200453));
    assert_eq!(yearweek("2008-12-29", Some(1)), SqlValue::Integer(200901));
}

#[test]
fn test_out_of_range_year_degrades_instead_of_overflowing() {
    // A year past 9999 never reaches the day-count arithmetic; the value
    // degrades to the zero instant like any other malformed input.
    assert_eq!(week("6000000-01-01", None), week("0000-01-01", None));
    assert_eq!(yearweek("6000000-01-01", None), yearweek("0000-01-01", None));
}

#[test]
fn test_non_integer_mode_falls_back_to_default() {
    let args = [SqlValue::Varchar("2020-02-03".into()), SqlValue::Varchar("junk".into())];
    assert_eq!(eval_scalar_function("WEEK", &args).unwrap(), week("2020-02-03", None));
}
