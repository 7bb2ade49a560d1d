// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend validation tests for multi-database support.
//!
//! These tests validate that the persistence layer works correctly on
//! MariaDB/MySQL in addition to the default `SQLite` backend. They focus on
//! infrastructure and schema compatibility, not business logic: migrations
//! apply cleanly, constraints are enforced, and the savepoint semantics the
//! menu loop relies on behave the same as on `SQLite`.
//!
//! ## Test Execution
//!
//! All tests here are marked `#[ignore]` and run only via
//! `cargo xtask test-mariadb`, which provisions a `MariaDB` container and
//! sets the required environment variables (`DATABASE_URL`,
//! `POISE_TEST_BACKEND=mariadb`). Tests fail fast if the infrastructure is
//! missing; none silently skip.

use std::env;

use crate::Persistence;
use crate::tests::{insert_test_person, insert_test_project, test_deadline};
use poise_domain::{Money, Project, Role, Settlement};

/// Helper to get the `MariaDB` connection URL from the environment.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set, indicating missing infrastructure.
fn mariadb_url() -> String {
    env::var("DATABASE_URL")
        .expect("DATABASE_URL not set - MariaDB tests must be run via `cargo xtask test-mariadb`")
}

/// Helper to verify we are running in the `MariaDB` test environment.
///
/// # Panics
///
/// Panics if `POISE_TEST_BACKEND` is not set to `mariadb`.
fn verify_mariadb_test_environment() {
    let backend = env::var("POISE_TEST_BACKEND").expect(
        "POISE_TEST_BACKEND not set - MariaDB tests must be run via `cargo xtask test-mariadb`",
    );
    assert_eq!(backend, "mariadb", "POISE_TEST_BACKEND must be 'mariadb'");
}

/// Clears all rows so tests share one database without interfering.
fn reset_tables(store: &mut Persistence) {
    // Delete children before parents to respect FK constraints.
    use diesel::RunQueryDsl;
    let crate::BackendConnection::Mysql(conn) = &mut store.conn else {
        panic!("MariaDB validation tests require the MySQL backend");
    };
    for table in [
        "projects",
        "customers",
        "architects",
        "project_managers",
        "structural_engineers",
    ] {
        diesel::sql_query(format!("DELETE FROM {table}"))
            .execute(conn)
            .expect("Failed to reset table");
    }
    store.commit().expect("Failed to commit table reset");
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_migrations_apply_and_session_opens() {
    verify_mariadb_test_environment();

    let store = Persistence::new_with_mysql(&mariadb_url());
    assert!(
        store.is_ok(),
        "Failed to initialize MariaDB store: {:?}",
        store.err()
    );
    store.unwrap().close().expect("Failed to close session");
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_unique_project_name_is_enforced() {
    verify_mariadb_test_environment();

    let mut store = Persistence::new_with_mysql(&mariadb_url()).expect("connect");
    reset_tables(&mut store);

    insert_test_project(&mut store, "Tower A", "1000.00", "0", test_deadline());

    let stakeholders = crate::tests::insert_test_stakeholders(&mut store);
    let number = store.next_project_number().expect("next number");
    let duplicate = Project::new(
        String::from("Tower A"),
        String::from("Apartment"),
        String::from("3 Hill Street"),
        String::from("1144"),
        Settlement::new(Money::ZERO, Money::ZERO),
        test_deadline(),
        stakeholders,
    )
    .numbered(number);

    assert!(store.insert_project(&duplicate).is_err());

    store.rollback().expect("rollback");
    store.close().expect("close");
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_savepoint_semantics_match_sqlite() {
    verify_mariadb_test_environment();

    let mut store = Persistence::new_with_mysql(&mariadb_url()).expect("connect");
    reset_tables(&mut store);

    store.savepoint().expect("savepoint");
    let id = insert_test_person(&mut store, Role::Customer, "Jane Mokoena");
    assert!(store.person(Role::Customer, id).expect("lookup").is_some());

    store.rollback_to_savepoint().expect("rollback to savepoint");
    assert!(store.person(Role::Customer, id).expect("lookup").is_none());

    store.rollback().expect("rollback");
    store.close().expect("close");
}
