// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod backend_validation_tests;

use crate::Persistence;
use poise_domain::{Money, Person, Project, Role, Settlement, StakeholderIds};
use time::Date;
use time::macros::date;

pub fn test_deadline() -> Date {
    date!(2026 - 12 - 01)
}

/// Inserts a stakeholder with the next id for its role and returns the id.
pub fn insert_test_person(store: &mut Persistence, role: Role, name: &str) -> i64 {
    let id = store.next_person_id(role).unwrap();
    let person = Person::with_id(
        id,
        role,
        String::from(name),
        String::from("082 555 0100"),
        String::from("person@example.com"),
        String::from("1 Quay Street"),
    );
    store.insert_person(&person).unwrap();
    id
}

/// Inserts one stakeholder per role and returns their ids.
pub fn insert_test_stakeholders(store: &mut Persistence) -> StakeholderIds {
    StakeholderIds {
        structural_engineer: insert_test_person(store, Role::StructuralEngineer, "Sipho Dlamini"),
        project_manager: insert_test_person(store, Role::ProjectManager, "Anele Khumalo"),
        architect: insert_test_person(store, Role::Architect, "Lerato Nkosi"),
        customer: insert_test_person(store, Role::Customer, "Jane Mokoena"),
    }
}

/// Inserts a project with fresh stakeholders and returns its number.
pub fn insert_test_project(
    store: &mut Persistence,
    name: &str,
    total_fee: &str,
    amount_paid: &str,
    deadline: Date,
) -> i64 {
    let stakeholders = insert_test_stakeholders(store);
    let number = store.next_project_number().unwrap();
    let project = Project::new(
        String::from(name),
        String::from("Office"),
        String::from("12 Main Road"),
        String::from("8812"),
        Settlement::new(
            Money::parse(total_fee).unwrap(),
            Money::parse(amount_paid).unwrap(),
        ),
        deadline,
        stakeholders,
    )
    .numbered(number);
    store.insert_project(&project).unwrap();
    number
}
