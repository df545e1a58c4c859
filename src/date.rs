use crate::scale::ScaleError;
use chrono::{Datelike, NaiveDate};

/// Parse une date `DD/MM/YYYY` par découpage direct des trois champs.
pub fn parse_date(input: &str) -> Result<NaiveDate, ScaleError> {
    let err = |reason| ScaleError::DateParsing {
        input: input.to_string(),
        reason,
    };

    let mut parts = input.trim().split('/');
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(err("expected DD/MM/YYYY"));
    };

    let day: u32 = day.trim().parse().map_err(|_| err("day is not a number"))?;
    let month: u32 = month
        .trim()
        .parse()
        .map_err(|_| err("month is not a number"))?;
    let year: i32 = year.trim().parse().map_err(|_| err("year is not a number"))?;

    if !(1..=12).contains(&month) {
        return Err(err("month out of range"));
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| err("day out of range"))
}

pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}
