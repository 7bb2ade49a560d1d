// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the new-project workflow.

use crate::tests::{create_project_inputs, lines, run_script};
use poise_domain::{Money, Role};
use poise_persistence::Persistence;
use time::macros::date;

#[test]
fn test_create_project_with_fresh_stakeholders() {
    let mut store = Persistence::new_in_memory().unwrap();

    let mut inputs = create_project_inputs("Tower A", "5000.00", "2000.00");
    inputs.push(String::from("5"));
    let output = run_script(&mut store, inputs);

    assert!(output.contains("Project added."));

    let project = store.find_project_by_name("Tower A").unwrap().unwrap();
    assert_eq!(project.number(), Some(1));
    assert_eq!(project.building_type(), "Office");
    assert_eq!(project.total_fee(), Money::parse("5000.00").unwrap());
    assert_eq!(project.amount_paid(), Money::parse("2000.00").unwrap());
    assert_eq!(project.deadline(), date!(2026 - 12 - 01));
    assert!(!project.is_finalised());

    // One fresh stakeholder per role, in the fixed order.
    for role in Role::ALL {
        assert_eq!(store.list_people(role).unwrap().len(), 1);
        assert_eq!(project.stakeholders().for_role(role), 1);
    }
    let customer = store.person(Role::Customer, 1).unwrap().unwrap();
    assert_eq!(customer.name(), "Jane Mokoena");
}

#[test]
fn test_create_project_survives_session_close() {
    let mut store = Persistence::new_in_memory().unwrap();

    let mut inputs = create_project_inputs("Tower A", "1000.00", "0");
    inputs.push(String::from("5"));
    run_script(&mut store, inputs);

    // The creation workflow committed; closing the session (which discards
    // uncommitted work) must not lose the project.
    assert!(store.project_name_exists("Tower A").unwrap());
    store.close().unwrap();
}

#[test]
fn test_duplicate_name_forces_retry() {
    let mut store = Persistence::new_in_memory().unwrap();

    let mut inputs = create_project_inputs("Tower A", "1000.00", "0");
    // Second creation: the taken name re-prompts, then existing stakeholders
    // are picked from the listing for every role.
    inputs.extend(lines(&[
        "1", "Tower A", "1", "Tower C", "Office", "12 Main Road", "8812", "1000.00", "0", "1",
        "12", "2026",
    ]));
    for _ in 0..4 {
        inputs.extend(lines(&["y", "1"]));
    }
    inputs.push(String::from("5"));

    let output = run_script(&mut store, inputs);
    assert!(output.contains("This name is already taken."));

    assert!(store.project_name_exists("Tower A").unwrap());
    assert!(store.project_name_exists("Tower C").unwrap());

    // Reusing existing stakeholders inserted no second person per role.
    for role in Role::ALL {
        assert_eq!(store.list_people(role).unwrap().len(), 1);
    }

    let tower_c = store.find_project_by_name("Tower C").unwrap().unwrap();
    assert_eq!(tower_c.stakeholders().for_role(Role::Customer), 1);
}

#[test]
fn test_cancelling_duplicate_name_creates_nothing() {
    let mut store = Persistence::new_in_memory().unwrap();

    let mut inputs = create_project_inputs("Tower A", "1000.00", "0");
    // "x" at the taken-name prompt cancels back to the menu.
    inputs.extend(lines(&["1", "Tower A", "x", "5"]));
    let output = run_script(&mut store, inputs);

    assert!(output.contains("This name is already taken."));
    assert_eq!(store.next_project_number().unwrap(), 2);
}

#[test]
fn test_invalid_fee_entries_reprompt() {
    let mut store = Persistence::new_in_memory().unwrap();

    let mut inputs = lines(&[
        "1",
        "Tower A",
        "Office",
        "12 Main Road",
        "8812",
        "lots",    // not an amount
        "-50",     // negative
        "1000.00", // accepted
        "0",
        "1",
        "12",
        "2026",
    ]);
    for (first, surname) in [
        ("Sipho", "Dlamini"),
        ("Anele", "Khumalo"),
        ("Lerato", "Nkosi"),
        ("Jane", "Mokoena"),
    ] {
        inputs.extend(lines(&[
            "n",
            first,
            surname,
            "082 555 0100",
            "person@example.com",
            "1 Quay Street",
        ]));
    }
    inputs.push(String::from("5"));

    let output = run_script(&mut store, inputs);
    assert!(output.contains("Invalid entry. Try again."));

    let project = store.find_project_by_name("Tower A").unwrap().unwrap();
    assert_eq!(project.total_fee(), Money::parse("1000.00").unwrap());
}

#[test]
fn test_blank_stakeholder_name_reprompts() {
    let mut store = Persistence::new_in_memory().unwrap();

    let mut inputs = lines(&[
        "1",
        "Tower A",
        "Office",
        "12 Main Road",
        "8812",
        "1000.00",
        "0",
        "1",
        "12",
        "2026",
        // Structural engineer: blank surname first, then valid names.
        "n",
        "Sipho",
        " ",
        "Sipho",
        "Dlamini",
        "082 555 0100",
        "person@example.com",
        "1 Quay Street",
    ]);
    for (first, surname) in [
        ("Anele", "Khumalo"),
        ("Lerato", "Nkosi"),
        ("Jane", "Mokoena"),
    ] {
        inputs.extend(lines(&[
            "n",
            first,
            surname,
            "082 555 0100",
            "person@example.com",
            "1 Quay Street",
        ]));
    }
    inputs.push(String::from("5"));

    let output = run_script(&mut store, inputs);
    assert!(output.contains("Invalid entry. Please enter name and surname."));

    let engineer = store.person(Role::StructuralEngineer, 1).unwrap().unwrap();
    assert_eq!(engineer.name(), "Sipho Dlamini");
}

#[test]
fn test_blank_project_name_is_derived_from_customer_surname() {
    let mut store = Persistence::new_in_memory().unwrap();

    let mut inputs = create_project_inputs("", "1000.00", "0");
    inputs.push(String::from("5"));
    run_script(&mut store, inputs);

    // Building type plus the customer's surname.
    assert!(store.project_name_exists("Office Mokoena").unwrap());
}
