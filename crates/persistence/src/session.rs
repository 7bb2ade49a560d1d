// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session transaction control.
//!
//! The interactive session runs inside one long-lived transaction so that
//! auto-commit is effectively disabled: every write stays pending until the
//! operator's workflow explicitly commits or rolls back. A savepoint taken
//! before each menu iteration bounds the blast radius of a failure to that
//! iteration.
//!
//! Transaction control statements are raw SQL throughout. This is justified:
//! Diesel's transaction API is closure-scoped and cannot express a
//! transaction that stays open across menu iterations, and it has no
//! SAVEPOINT DSL. The statement syntax used here is identical on `SQLite`
//! and MySQL/MariaDB.
//!
//! Both backends treat re-issuing `SAVEPOINT` with the same name as
//! superseding the previous savepoint of that name, which is exactly the
//! per-iteration semantics the menu loop needs.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::error::PersistenceError;

/// The savepoint name re-established before every menu iteration.
const MENU_SAVEPOINT: &str = "menu_turn";

backend_fn! {
/// Opens the session transaction. Called once after connecting; from this
/// point on no write reaches the database until an explicit commit.
///
/// # Errors
///
/// Returns an error if the statement fails.
pub fn begin_session(conn: &mut _) -> Result<(), PersistenceError> {
    diesel::sql_query("BEGIN").execute(conn)?;
    Ok(())
}
}

backend_fn! {
/// Establishes (or supersedes) the per-iteration savepoint.
///
/// # Errors
///
/// Returns an error if the statement fails.
pub fn set_savepoint(conn: &mut _) -> Result<(), PersistenceError> {
    debug!("Setting savepoint '{}'", MENU_SAVEPOINT);
    diesel::sql_query(format!("SAVEPOINT {MENU_SAVEPOINT}")).execute(conn)?;
    Ok(())
}
}

backend_fn! {
/// Discards all work performed since the last per-iteration savepoint.
///
/// The session transaction stays open; the menu loop continues.
///
/// # Errors
///
/// Returns an error if the statement fails.
pub fn rollback_to_savepoint(conn: &mut _) -> Result<(), PersistenceError> {
    debug!("Rolling back to savepoint '{}'", MENU_SAVEPOINT);
    diesel::sql_query(format!("ROLLBACK TO SAVEPOINT {MENU_SAVEPOINT}")).execute(conn)?;
    Ok(())
}
}

backend_fn! {
/// Commits the current unit of work and immediately opens the next one so
/// the session continues.
///
/// # Errors
///
/// Returns an error if either statement fails.
pub fn commit_unit(conn: &mut _) -> Result<(), PersistenceError> {
    debug!("Committing unit of work");
    diesel::sql_query("COMMIT").execute(conn)?;
    diesel::sql_query("BEGIN").execute(conn)?;
    Ok(())
}
}

backend_fn! {
/// Rolls back the current unit of work and immediately opens the next one
/// so the session continues.
///
/// # Errors
///
/// Returns an error if either statement fails.
pub fn rollback_unit(conn: &mut _) -> Result<(), PersistenceError> {
    debug!("Rolling back unit of work");
    diesel::sql_query("ROLLBACK").execute(conn)?;
    diesel::sql_query("BEGIN").execute(conn)?;
    Ok(())
}
}

backend_fn! {
/// Ends the session transaction without committing.
///
/// On the normal exit path nothing is pending, because every workflow ends
/// in an explicit commit or rollback; exit never performs an implicit
/// commit.
///
/// # Errors
///
/// Returns an error if the statement fails.
pub fn end_session(conn: &mut _) -> Result<(), PersistenceError> {
    debug!("Ending session transaction");
    diesel::sql_query("ROLLBACK").execute(conn)?;
    Ok(())
}
}
