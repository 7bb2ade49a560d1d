// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end workflow tests.
//!
//! Sessions run against an in-memory store and a scripted console double,
//! so every menu transition is exercised exactly as an operator would drive
//! it, and the store can be inspected afterwards.

mod create_tests;

use poise_domain::{Money, Person, Project, Role, Settlement, StakeholderIds};
use poise_persistence::Persistence;
use std::collections::VecDeque;
use time::Date;
use time::macros::date;

use crate::console::{Console, ConsoleError};
use crate::menu;

/// Console double fed from a scripted list of operator entries.
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: String,
}

impl ScriptedConsole {
    pub fn new(inputs: Vec<String>) -> Self {
        Self {
            inputs: inputs.into(),
            output: String::new(),
        }
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.output.push_str(prompt);
        self.output.push('\n');
        self.inputs.pop_front().ok_or(ConsoleError::InputClosed)
    }

    fn say(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }
}

pub fn lines(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|entry| String::from(*entry)).collect()
}

/// Drives a full session from scripted input and returns everything shown
/// to the operator. The script must end with the exit command.
pub fn run_script(store: &mut Persistence, inputs: Vec<String>) -> String {
    let mut console = ScriptedConsole::new(inputs);
    menu::run_session(store, &mut console).expect("session should end at the exit command");
    console.into_output()
}

/// Operator entries that create a project with four freshly entered
/// stakeholders (deadline 2026-12-01).
pub fn create_project_inputs(name: &str, total_fee: &str, amount_paid: &str) -> Vec<String> {
    let mut inputs = lines(&[
        "1",
        name,
        "Office",
        "12 Main Road",
        "8812",
        total_fee,
        amount_paid,
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
    inputs
}

/// Operator entries that search a project by name and finalise it.
pub fn finalise_inputs(name: &str) -> Vec<String> {
    lines(&["2", "1", name, "2"])
}

/// Seeds a committed project directly through the store, bypassing the
/// console, and returns its number.
fn seed_person(store: &mut Persistence, role: Role, person_name: &str) -> i64 {
    let id = store.next_person_id(role).unwrap();
    let person = Person::with_id(
        id,
        role,
        String::from(person_name),
        String::from("082 555 0100"),
        String::from("person@example.com"),
        String::from("1 Quay Street"),
    );
    store.insert_person(&person).unwrap();
    id
}

pub fn seed_project(store: &mut Persistence, name: &str, deadline: Date) -> i64 {
    let stakeholders = StakeholderIds {
        structural_engineer: seed_person(store, Role::StructuralEngineer, "Sipho Dlamini"),
        project_manager: seed_person(store, Role::ProjectManager, "Anele Khumalo"),
        architect: seed_person(store, Role::Architect, "Lerato Nkosi"),
        customer: seed_person(store, Role::Customer, "Jane Mokoena"),
    };

    let number = store.next_project_number().unwrap();
    let project = Project::new(
        String::from(name),
        String::from("Office"),
        String::from("12 Main Road"),
        String::from("8812"),
        Settlement::new(
            Money::parse("5000.00").unwrap(),
            Money::parse("2000.00").unwrap(),
        ),
        deadline,
        stakeholders,
    )
    .numbered(number);
    store.insert_project(&project).unwrap();
    store.commit().unwrap();
    number
}

pub fn default_deadline() -> Date {
    date!(2026 - 12 - 01)
}
