// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::Date;
use time::macros::format_description;

/// The stored date format. ISO-8601 text orders lexicographically the same
/// way it orders chronologically, which the overdue query relies on.
const DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Joins a first name and surname into a display name.
///
/// # Errors
///
/// Returns `DomainError::BlankName` when either part is empty or whitespace.
pub fn validate_person_name(first_name: &str, surname: &str) -> Result<String, DomainError> {
    let first = first_name.trim();
    let last = surname.trim();
    if first.is_empty() || last.is_empty() {
        return Err(DomainError::BlankName);
    }
    Ok(format!("{first} {last}"))
}

/// Derives a project name from the building type and the customer's surname.
///
/// Used when the operator leaves the project name blank during creation.
///
/// # Errors
///
/// Returns `DomainError::MissingSurname` when the customer name is a single
/// word.
pub fn derive_project_name(building_type: &str, customer_name: &str) -> Result<String, DomainError> {
    customer_name
        .split_whitespace()
        .nth(1)
        .map(|surname| format!("{building_type} {surname}"))
        .ok_or_else(|| DomainError::MissingSurname(customer_name.to_string()))
}

/// Builds a date from operator-entered numeric day/month/year values.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` when the combination does not name a
/// real calendar date.
pub fn calendar_date(year: i32, month: u8, day: u8) -> Result<Date, DomainError> {
    let month = time::Month::try_from(month)
        .map_err(|_| DomainError::InvalidDate { year, month, day })?;
    Date::from_calendar_date(year, month, day).map_err(|_| DomainError::InvalidDate {
        year,
        month: month as u8,
        day,
    })
}

/// Parses a stored ISO-8601 date string.
///
/// # Errors
///
/// Returns `DomainError::DateParse` when the value is not a valid date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, DATE_FORMAT).map_err(|e| DomainError::DateParse {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Formats a date as stored ISO-8601 text.
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}
