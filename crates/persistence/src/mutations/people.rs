// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stakeholder mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use poise_domain::{Person, PersonField, Role};
use tracing::{debug, info};

use crate::error::PersistenceError;

backend_fn! {
/// Inserts a new stakeholder row.
///
/// The person must already carry the identifier assigned for its role.
///
/// # Errors
///
/// Returns `PersistenceError::MissingIdentifier` if no identifier was
/// assigned, or a database error on constraint violation or connectivity
/// failure.
pub fn insert_person(conn: &mut _, person: &Person) -> Result<(), PersistenceError> {
    let person_id: i64 = person
        .id()
        .ok_or(PersistenceError::MissingIdentifier("person id"))?;

    info!("Inserting {} with id {}", person.role(), person_id);

    role_table!(person.role(), t => diesel::insert_into(t::table)
        .values((
            t::id.eq(person_id),
            t::name.eq(person.name()),
            t::phone.eq(person.phone()),
            t::email.eq(person.email()),
            t::address.eq(person.address()),
        ))
        .execute(conn))?;

    Ok(())
}
}

backend_fn! {
/// Updates exactly one named field of a stakeholder row.
///
/// Returns the number of rows affected. `0` means the identifier no longer
/// matches any row and must be surfaced to the operator as a failed update,
/// not as success.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_person_field(
    conn: &mut _,
    role: Role,
    person_id: i64,
    field: PersonField,
    value: &str,
) -> Result<usize, PersistenceError> {
    debug!("Updating {} field of {} id {}", field.label(), role, person_id);

    let rows: usize = role_table!(role, t => match field {
        PersonField::Name => diesel::update(t::table.filter(t::id.eq(person_id)))
            .set(t::name.eq(value))
            .execute(conn),
        PersonField::Phone => diesel::update(t::table.filter(t::id.eq(person_id)))
            .set(t::phone.eq(value))
            .execute(conn),
        PersonField::Email => diesel::update(t::table.filter(t::id.eq(person_id)))
            .set(t::email.eq(value))
            .execute(conn),
        PersonField::Address => diesel::update(t::table.filter(t::id.eq(person_id)))
            .set(t::address.eq(value))
            .execute(conn),
    })?;

    Ok(rows)
}
}
