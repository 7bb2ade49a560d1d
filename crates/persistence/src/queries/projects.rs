// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Project queries.
//!
//! All lookups are parameterized Diesel DSL expressions; no data-dependent
//! SQL is ever assembled from strings. Report queries are re-run on every
//! call, never cached.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use poise_domain::{Money, Project, Settlement, StakeholderIds, format_iso_date, parse_iso_date};
use time::Date;
use tracing::debug;

use crate::diesel_schema::projects;
use crate::error::PersistenceError;

/// Diesel Queryable struct for project rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = projects)]
pub(crate) struct ProjectRow {
    proj_num: i64,
    struc_eng_id: i64,
    proj_mgr_id: i64,
    architect_id: i64,
    cust_id: i64,
    proj_name: String,
    building_type: String,
    address: String,
    erf_num: String,
    total_fee: i64,
    amount_paid: i64,
    deadline: String,
    completion_date: Option<String>,
}

/// Converts a stored row back into a domain project.
pub(crate) fn project_from_row(row: ProjectRow) -> Result<Project, PersistenceError> {
    let deadline: Date = parse_iso_date(&row.deadline)?;
    let completion_date: Option<Date> = row
        .completion_date
        .as_deref()
        .map(parse_iso_date)
        .transpose()?;

    let project = Project::new(
        row.proj_name,
        row.building_type,
        row.address,
        row.erf_num,
        Settlement::new(
            Money::from_cents(row.total_fee),
            Money::from_cents(row.amount_paid),
        ),
        deadline,
        StakeholderIds {
            structural_engineer: row.struc_eng_id,
            project_manager: row.proj_mgr_id,
            architect: row.architect_id,
            customer: row.cust_id,
        },
    )
    .numbered(row.proj_num);

    Ok(match completion_date {
        Some(date) => project.completed(date),
        None => project,
    })
}

backend_fn! {
/// Returns whether a project with the exact given name exists.
///
/// Gates creation: the project name is unique across all projects.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn project_name_exists(conn: &mut _, name: &str) -> Result<bool, PersistenceError> {
    let count: i64 = projects::table
        .filter(projects::proj_name.eq(name))
        .count()
        .get_result(conn)?;

    Ok(count > 0)
}
}

backend_fn! {
/// Assigns the next project number.
///
/// Returns `max(proj_num) + 1`, or `1` when no projects exist.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn next_project_number(conn: &mut _) -> Result<i64, PersistenceError> {
    let max_num: Option<i64> = projects::table
        .select(diesel::dsl::max(projects::proj_num))
        .first(conn)?;

    Ok(max_num.unwrap_or(0) + 1)
}
}

backend_fn! {
/// Retrieves a project by exact name.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored row cannot be
/// converted back into a domain project.
/// Returns `Ok(None)` if no project matches.
pub fn find_project_by_name(
    conn: &mut _,
    name: &str,
) -> Result<Option<Project>, PersistenceError> {
    debug!("Looking up project by name");

    let result: Result<ProjectRow, diesel::result::Error> = projects::table
        .filter(projects::proj_name.eq(name))
        .select(ProjectRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(project_from_row(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves a project by number.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored row cannot be
/// converted back into a domain project.
/// Returns `Ok(None)` if no project matches.
pub fn find_project_by_id(
    conn: &mut _,
    proj_num: i64,
) -> Result<Option<Project>, PersistenceError> {
    debug!("Looking up project by number {}", proj_num);

    let result: Result<ProjectRow, diesel::result::Error> = projects::table
        .filter(projects::proj_num.eq(proj_num))
        .select(ProjectRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(project_from_row(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all projects whose completion date is still unset.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_incomplete_projects(conn: &mut _) -> Result<Vec<Project>, PersistenceError> {
    let rows: Vec<ProjectRow> = projects::table
        .filter(projects::completion_date.is_null())
        .select(ProjectRow::as_select())
        .load(conn)?;

    rows.into_iter().map(project_from_row).collect()
}
}

backend_fn! {
/// Lists all unfinalised projects whose deadline lies before `as_of`.
///
/// The comparison runs on the stored ISO-8601 text, whose lexicographic
/// order matches chronological order. A project finalised after its deadline
/// never appears: the completion-date filter excludes it.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_overdue_projects(
    conn: &mut _,
    as_of: Date,
) -> Result<Vec<Project>, PersistenceError> {
    let cutoff: String = format_iso_date(as_of);

    let rows: Vec<ProjectRow> = projects::table
        .filter(projects::deadline.lt(cutoff))
        .filter(projects::completion_date.is_null())
        .select(ProjectRow::as_select())
        .load(conn)?;

    rows.into_iter().map(project_from_row).collect()
}
}
