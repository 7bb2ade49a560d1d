// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Project mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use poise_domain::{FieldValue, Money, Project, ProjectField, Settlement, format_iso_date};
use time::Date;
use tracing::{debug, info};

use crate::diesel_schema::projects;
use crate::error::PersistenceError;

/// The result of a finalisation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinaliseOutcome {
    /// The completion date was stamped. Carries the fee position so the
    /// caller can render an invoice or a paid-in-full notice.
    Finalised(Settlement),
    /// The project already had a completion date; no write was performed.
    AlreadyFinalised,
}

backend_fn! {
/// Inserts a new project row with a null completion date.
///
/// The project must already carry its assigned number and all four
/// stakeholder identifiers.
///
/// # Errors
///
/// Returns `PersistenceError::MissingIdentifier` if no number was assigned,
/// or a database error on constraint violation (including a duplicate
/// project name) or connectivity failure. The caller must not commit the
/// enclosing unit of work unless this succeeds.
pub fn insert_project(conn: &mut _, project: &Project) -> Result<(), PersistenceError> {
    let proj_num: i64 = project
        .number()
        .ok_or(PersistenceError::MissingIdentifier("project number"))?;

    info!("Inserting project {} ('{}')", proj_num, project.name());

    diesel::insert_into(projects::table)
        .values((
            projects::proj_num.eq(proj_num),
            projects::struc_eng_id.eq(project.stakeholders().structural_engineer),
            projects::proj_mgr_id.eq(project.stakeholders().project_manager),
            projects::architect_id.eq(project.stakeholders().architect),
            projects::cust_id.eq(project.stakeholders().customer),
            projects::proj_name.eq(project.name()),
            projects::building_type.eq(project.building_type()),
            projects::address.eq(project.address()),
            projects::erf_num.eq(project.erf_number()),
            projects::total_fee.eq(project.total_fee().cents()),
            projects::amount_paid.eq(project.amount_paid().cents()),
            projects::deadline.eq(format_iso_date(project.deadline())),
            projects::completion_date.eq(project.completion_date().map(format_iso_date)),
        ))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Updates exactly one named column of a project row.
///
/// Returns the number of rows affected; `0` means the project number no
/// longer matches any row. Editing the completion date of a project that has
/// not been finalised is refused with `ProjectNotFinalised`: only the store
/// knows the column's current value, so the guard lives here.
///
/// # Errors
///
/// Returns an error if the database update fails, the supplied value does
/// not match the field's type, or the completion-date guard refuses the
/// update.
pub fn update_project_field(
    conn: &mut _,
    proj_num: i64,
    field: ProjectField,
    value: &FieldValue,
) -> Result<usize, PersistenceError> {
    debug!("Updating {} of project {}", field.label(), proj_num);

    let rows: usize = match (field, value) {
        (ProjectField::Name, FieldValue::Text(text)) => {
            diesel::update(projects::table.filter(projects::proj_num.eq(proj_num)))
                .set(projects::proj_name.eq(text))
                .execute(conn)?
        }
        (ProjectField::BuildingType, FieldValue::Text(text)) => {
            diesel::update(projects::table.filter(projects::proj_num.eq(proj_num)))
                .set(projects::building_type.eq(text))
                .execute(conn)?
        }
        (ProjectField::Address, FieldValue::Text(text)) => {
            diesel::update(projects::table.filter(projects::proj_num.eq(proj_num)))
                .set(projects::address.eq(text))
                .execute(conn)?
        }
        (ProjectField::ErfNumber, FieldValue::Text(text)) => {
            diesel::update(projects::table.filter(projects::proj_num.eq(proj_num)))
                .set(projects::erf_num.eq(text))
                .execute(conn)?
        }
        (ProjectField::TotalFee, FieldValue::Amount(amount)) => {
            diesel::update(projects::table.filter(projects::proj_num.eq(proj_num)))
                .set(projects::total_fee.eq(amount.cents()))
                .execute(conn)?
        }
        (ProjectField::AmountPaid, FieldValue::Amount(amount)) => {
            diesel::update(projects::table.filter(projects::proj_num.eq(proj_num)))
                .set(projects::amount_paid.eq(amount.cents()))
                .execute(conn)?
        }
        (ProjectField::Deadline, FieldValue::Date(date)) => {
            diesel::update(projects::table.filter(projects::proj_num.eq(proj_num)))
                .set(projects::deadline.eq(format_iso_date(*date)))
                .execute(conn)?
        }
        (ProjectField::CompletionDate, FieldValue::Date(date)) => {
            let current: Option<Option<String>> = match projects::table
                .filter(projects::proj_num.eq(proj_num))
                .select(projects::completion_date)
                .first(conn)
            {
                Ok(value) => Some(value),
                Err(diesel::result::Error::NotFound) => None,
                Err(e) => return Err(PersistenceError::from(e)),
            };

            match current {
                // Project number matches no row; report a failed update.
                None => 0,
                Some(None) => return Err(PersistenceError::ProjectNotFinalised(proj_num)),
                Some(Some(_)) => {
                    diesel::update(projects::table.filter(projects::proj_num.eq(proj_num)))
                        .set(projects::completion_date.eq(format_iso_date(*date)))
                        .execute(conn)?
                }
            }
        }
        _ => return Err(PersistenceError::FieldValueMismatch(field.label())),
    };

    Ok(rows)
}
}

backend_fn! {
/// Stamps the completion date of an unfinalised project.
///
/// If the project already has a completion date, performs zero writes and
/// reports `AlreadyFinalised` so the operator sees a notice instead of a
/// silent re-finalisation. On success the project's fee position is
/// returned; `amount_due = total_fee - amount_paid` is exact in cents.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no project has the given number,
/// or a database error if the read or the update fails.
pub fn finalise_project(
    conn: &mut _,
    proj_num: i64,
    completion_date: Date,
) -> Result<FinaliseOutcome, PersistenceError> {
    let row: (Option<String>, i64, i64) = match projects::table
        .filter(projects::proj_num.eq(proj_num))
        .select((
            projects::completion_date,
            projects::total_fee,
            projects::amount_paid,
        ))
        .first(conn)
    {
        Ok(row) => row,
        Err(diesel::result::Error::NotFound) => {
            return Err(PersistenceError::NotFound(format!(
                "Project {proj_num} not found"
            )));
        }
        Err(e) => return Err(PersistenceError::from(e)),
    };

    let (current_completion, total_fee, amount_paid) = row;

    if current_completion.is_some() {
        debug!("Project {} is already finalised; no write", proj_num);
        return Ok(FinaliseOutcome::AlreadyFinalised);
    }

    diesel::update(projects::table.filter(projects::proj_num.eq(proj_num)))
        .set(projects::completion_date.eq(format_iso_date(completion_date)))
        .execute(conn)?;

    info!("Project {} finalised", proj_num);

    Ok(FinaliseOutcome::Finalised(Settlement::new(
        Money::from_cents(total_fee),
        Money::from_cents(amount_paid),
    )))
}
}
