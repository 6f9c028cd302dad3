//! DATE_FORMAT behavior across the year-boundary transition dates

use lunasql_funcs::eval_scalar_function;
use lunasql_types::SqlValue;

fn date_format(date: &str, format: &str) -> String {
    let args = [SqlValue::Varchar(date.into()), SqlValue::Varchar(format.into())];
    match eval_scalar_function("DATE_FORMAT", &args).unwrap() {
        SqlValue::Varchar(s) => s,
        other => panic!("expected VARCHAR, got {:?}", other),
    }
}

// Columns: date, %x-W%v, %X-W%V, %u, %U. The interesting rows are the first
// and last days of each year, where week-year and calendar year disagree.
const TRANSITIONS: &[(&str, &str, &str, &str, &str)] = &[
    ("2005-01-01", "2004-W53", "2004-W52", "00", "00"),
    ("2005-01-02", "2004-W53", "2005-W01", "00", "01"),
    ("2005-12-31", "2005-W52", "2005-W52", "52", "52"),
    ("2006-01-01", "2005-W52", "2006-W01", "00", "01"),
    ("2006-01-02", "2006-W01", "2006-W01", "01", "01"),
    ("2006-12-31", "2006-W52", "2006-W53", "52", "53"),
    ("2007-01-01", "2007-W01", "2006-W53", "01", "00"),
    ("2007-12-30", "2007-W52", "2007-W52", "52", "52"),
    ("2007-12-31", "2008-W01", "2007-W52", "53", "52"),
    ("2008-01-01", "2008-W01", "2007-W52", "01", "00"),
    ("2008-12-28", "2008-W52", "2008-W52", "52", "52"),
    ("2008-12-29", "2009-W01", "2008-W52", "53", "52"),
    ("2008-12-30", "2009-W01", "2008-W52", "53", "52"),
    ("2008-12-31", "2009-W01", "2008-W52", "53", "52"),
    ("2009-01-01", "2009-W01", "2008-W52", "01", "00"),
    ("2009-12-31", "2009-W53", "2009-W52", "53", "52"),
    ("2010-01-01", "2009-W53", "2009-W52", "00", "00"),
    ("2010-01-02", "2009-W53", "2009-W52", "00", "00"),
    ("2010-01-03", "2009-W53", "2010-W01", "00", "01"),
];

#[test]
fn test_week_year_starting_monday() {
    for (date, expected, _, _, _) in TRANSITIONS {
        assert_eq!(&date_format(date, "%x-W%v"), expected, "date {}", date);
    }
}

#[test]
fn test_week_year_starting_sunday() {
    for (date, _, expected, _, _) in TRANSITIONS {
        assert_eq!(&date_format(date, "%X-W%V"), expected, "date {}", date);
    }
}

#[test]
fn test_week_starting_monday() {
    for (date, _, _, expected, _) in TRANSITIONS {
        assert_eq!(&date_format(date, "%u"), expected, "date {}", date);
    }
}

#[test]
fn test_week_starting_sunday() {
    for (date, _, _, _, expected) in TRANSITIONS {
        assert_eq!(&date_format(date, "%U"), expected, "date {}", date);
    }
}

#[test]
fn test_typical_report_format() {
    assert_eq!(
        date_format("2020-02-03 04:05:06.000007", "%W, %M %D %Y at %r"),
        "Monday, February 3rd 2020 at 04:05:06 AM"
    );
}

#[test]
fn test_null_format_string_yields_null() {
    let args = [SqlValue::Varchar("2020-02-03".into()), SqlValue::Null];
    assert_eq!(eval_scalar_function("DATE_FORMAT", &args).unwrap(), SqlValue::Null);
}
