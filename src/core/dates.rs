use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::core::{AppError, Result};

/// Timestamp format Odoo expects in `date_order` domain filters.
pub const ODOO_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Resolve a `YYYY-MM-DD` date string into the inclusive timestamp pair
/// `[date 00:00:00, date 23:59:59]`.
pub fn resolve_day(fecha: &str) -> Result<(NaiveDateTime, NaiveDateTime)> {
    let date = NaiveDate::parse_from_str(fecha, "%Y-%m-%d").map_err(|_| {
        AppError::validation(format!(
            "Invalid 'fecha' value '{fecha}', expected YYYY-MM-DD (e.g. fecha=2025-05-14)"
        ))
    })?;

    Ok(day_span(date, date))
}

/// Resolve a (month, year) pair into the inclusive timestamp pair
/// `[first-of-month 00:00:00, last-of-month 23:59:59]`.
///
/// The last calendar day is derived from the first day of the following
/// month, which keeps leap-year February correct.
pub fn resolve_month(mes: u32, anio: i32) -> Result<(NaiveDateTime, NaiveDateTime)> {
    if !(1..=12).contains(&mes) {
        return Err(AppError::validation(format!(
            "'mes' must be between 1 and 12, got {mes}"
        )));
    }
    if !(1900..=2100).contains(&anio) {
        return Err(AppError::validation(format!(
            "'anio' must be between 1900 and 2100, got {anio}"
        )));
    }

    let first = NaiveDate::from_ymd_opt(anio, mes, 1)
        .ok_or_else(|| AppError::validation(format!("Invalid month {mes}/{anio}")))?;

    let next_month = if mes == 12 {
        NaiveDate::from_ymd_opt(anio + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(anio, mes + 1, 1)
    };
    let last = next_month
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| AppError::validation(format!("Invalid month {mes}/{anio}")))?;

    Ok(day_span(first, last))
}

fn day_span(first: NaiveDate, last: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = first.and_time(NaiveTime::MIN);
    // 23:59:59 exists on every calendar day
    let end = last.and_hms_opt(23, 59, 59).expect("valid wall-clock time");
    (start, end)
}
