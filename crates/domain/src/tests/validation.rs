// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, calendar_date, derive_project_name, format_iso_date, parse_iso_date,
    validate_person_name,
};
use time::macros::date;

#[test]
fn test_person_name_joins_parts() {
    let name = validate_person_name("Jane", "Mokoena").unwrap();
    assert_eq!(name, "Jane Mokoena");
}

#[test]
fn test_person_name_trims_parts() {
    let name = validate_person_name(" Jane ", " Mokoena ").unwrap();
    assert_eq!(name, "Jane Mokoena");
}

#[test]
fn test_person_name_rejects_blank_parts() {
    assert_eq!(validate_person_name("", "Mokoena"), Err(DomainError::BlankName));
    assert_eq!(validate_person_name("Jane", "  "), Err(DomainError::BlankName));
}

#[test]
fn test_derive_project_name_uses_customer_surname() {
    let name = derive_project_name("House", "Jane Mokoena").unwrap();
    assert_eq!(name, "House Mokoena");
}

#[test]
fn test_derive_project_name_needs_surname() {
    match derive_project_name("House", "Prince") {
        Err(DomainError::MissingSurname(name)) => assert_eq!(name, "Prince"),
        other => panic!("Expected MissingSurname error, got: {other:?}"),
    }
}

#[test]
fn test_calendar_date_builds_real_dates() {
    assert_eq!(calendar_date(2026, 12, 1).unwrap(), date!(2026 - 12 - 01));
}

#[test]
fn test_calendar_date_rejects_impossible_dates() {
    assert!(calendar_date(2026, 2, 30).is_err());
    assert!(calendar_date(2026, 13, 1).is_err());
    assert!(calendar_date(2026, 0, 1).is_err());
}

#[test]
fn test_iso_date_round_trip() {
    let date = date!(2026 - 08 - 07);
    let text = format_iso_date(date);
    assert_eq!(text, "2026-08-07");
    assert_eq!(parse_iso_date(&text).unwrap(), date);
}

#[test]
fn test_parse_iso_date_rejects_garbage() {
    assert!(parse_iso_date("yesterday").is_err());
    assert!(parse_iso_date("2026-13-40").is_err());
}
