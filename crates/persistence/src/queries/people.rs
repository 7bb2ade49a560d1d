// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stakeholder queries.
//!
//! The four role tables are structurally identical, so every query is
//! written once against a table alias and stamped out per role by the
//! `role_table!` macro (and per backend by `backend_fn!`).

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use poise_domain::{Person, Role};
use tracing::debug;

use crate::error::PersistenceError;

/// Row shape shared by all four role tables.
type PersonRow = (i64, String, String, String, String);

fn person_from_row(role: Role, row: PersonRow) -> Person {
    let (id, name, phone, email, address) = row;
    Person::with_id(id, role, name, phone, email, address)
}

backend_fn! {
/// Retrieves one stakeholder of the given role by identifier.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no row matches: a lookup miss is data, not a crash.
pub fn get_person(
    conn: &mut _,
    role: Role,
    person_id: i64,
) -> Result<Option<Person>, PersistenceError> {
    debug!("Looking up {} with id {}", role, person_id);

    let result: Result<PersonRow, diesel::result::Error> = role_table!(role, t => t::table
        .filter(t::id.eq(person_id))
        .select((t::id, t::name, t::phone, t::email, t::address))
        .first(conn));

    match result {
        Ok(row) => Ok(Some(person_from_row(role, row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all stakeholders of the given role in identifier order.
///
/// Feeds the 1-based selection menu in the creation flow: selection is by
/// display index over this list, so sparse identifier ranges cannot cause a
/// wrong row to be picked.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_people(conn: &mut _, role: Role) -> Result<Vec<Person>, PersistenceError> {
    debug!("Listing all rows for role {}", role);

    let rows: Vec<PersonRow> = role_table!(role, t => t::table
        .order(t::id.asc())
        .select((t::id, t::name, t::phone, t::email, t::address))
        .load(conn))?;

    Ok(rows
        .into_iter()
        .map(|row| person_from_row(role, row))
        .collect())
}
}

backend_fn! {
/// Assigns the next identifier for the given role's table.
///
/// Returns `max(existing id) + 1`, or `1` when the table is empty. Within a
/// session an identifier is never reused: rows are never deleted.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn next_person_id(conn: &mut _, role: Role) -> Result<i64, PersistenceError> {
    let max_id: Option<i64> =
        role_table!(role, t => t::table.select(diesel::dsl::max(t::id)).first(conn))?;

    Ok(max_id.unwrap_or(0) + 1)
}
}
