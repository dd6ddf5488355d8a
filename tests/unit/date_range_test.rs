// Date Range Resolver tests: strict day parsing, month boundary
// computation (including leap years), and range validation.

use kiloreport::core::dates::{resolve_day, resolve_month, ODOO_DATETIME_FORMAT};
use kiloreport::core::AppError;

fn fmt(ts: chrono::NaiveDateTime) -> String {
    ts.format(ODOO_DATETIME_FORMAT).to_string()
}

#[test]
fn test_resolve_day_produces_inclusive_bounds() {
    let (start, end) = resolve_day("2025-05-14").unwrap();
    assert_eq!(fmt(start), "2025-05-14 00:00:00");
    assert_eq!(fmt(end), "2025-05-14 23:59:59");
}

#[test]
fn test_resolve_day_rejects_malformed_input() {
    for bad in ["", "2025/05/14", "14-05-2025", "2025-02-30", "not-a-date"] {
        let err = resolve_day(bad).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "input: {bad}");
    }
}

#[test]
fn test_resolve_month_leap_year_february() {
    let (_, end) = resolve_month(2, 2024).unwrap();
    assert_eq!(fmt(end), "2024-02-29 23:59:59");

    let (_, end) = resolve_month(2, 2023).unwrap();
    assert_eq!(fmt(end), "2023-02-28 23:59:59");
}

#[test]
fn test_resolve_month_century_leap_rules() {
    // 2000 was a leap year, 1900 was not
    let (_, end) = resolve_month(2, 2000).unwrap();
    assert_eq!(fmt(end), "2000-02-29 23:59:59");

    let (_, end) = resolve_month(2, 1900).unwrap();
    assert_eq!(fmt(end), "1900-02-28 23:59:59");
}

#[test]
fn test_resolve_month_first_day_and_thirty_one_day_months() {
    let (start, end) = resolve_month(7, 2025).unwrap();
    assert_eq!(fmt(start), "2025-07-01 00:00:00");
    assert_eq!(fmt(end), "2025-07-31 23:59:59");
}

#[test]
fn test_resolve_month_rejects_out_of_range() {
    for (mes, anio) in [(0, 2025), (13, 2025), (5, 1899), (5, 2101), (5, 1800)] {
        let err = resolve_month(mes, anio).unwrap_err();
        assert!(
            matches!(err, AppError::Validation(_)),
            "mes={mes}, anio={anio}"
        );
    }
}

#[test]
fn test_resolved_ranges_start_before_end() {
    let (start, end) = resolve_month(12, 2100).unwrap();
    assert!(start <= end);

    let (start, end) = resolve_day("1900-01-01").unwrap();
    assert!(start <= end);
}
