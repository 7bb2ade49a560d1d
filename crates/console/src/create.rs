// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The new-project workflow.
//!
//! The project name is collected first and gated on uniqueness with a
//! re-prompt loop. Stakeholders are collected in the fixed role order, and a
//! fresh stakeholder row is inserted the moment its details are complete;
//! those inserts sit inside the per-iteration savepoint but are not tied to
//! the project row's own fate. The project number is assigned only once the
//! stakeholders are finalized, and the whole unit of work is committed after
//! the single project insert succeeds.

use poise_domain::{
    Person, Project, Role, Settlement, StakeholderIds, derive_project_name, validate_person_name,
};
use poise_persistence::{Persistence, PersistenceError};

use crate::console::{Console, prompt_amount, prompt_date};
use crate::menu::{FlowError, Transition};
use crate::render;

fn stakeholder_id(person: &Person) -> Result<i64, FlowError> {
    person
        .id()
        .ok_or(FlowError::Store(PersistenceError::MissingIdentifier(
            "person id",
        )))
}

/// Runs the creation workflow. Returns to the menu on completion or
/// cancellation.
pub fn new_project(
    store: &mut Persistence,
    console: &mut dyn Console,
) -> Result<Transition, FlowError> {
    console.say("\nCreate New Project\n----------------------");

    let mut name = console.read_line("Project name: ")?;
    while !name.trim().is_empty() && store.project_name_exists(name.trim())? {
        console.say("This name is already taken.");
        let option = console.read_line("Enter: 1 - Try again\nAny other key - back to Menu")?;
        if option.trim() == "1" {
            name = console.read_line("Project name: ")?;
        } else {
            return Ok(Transition::Continue);
        }
    }

    let building_type = console.read_line("Building type: ")?;
    let address = console.read_line("Address: ")?;
    let erf_number = console.read_line("ERF no.: ")?;
    let total_fee = prompt_amount(console, "Total Fee: ")?;
    let amount_paid = prompt_amount(console, "Amount Paid: ")?;
    let deadline = prompt_date(console, "Set Deadline (numeric):")?;

    console.say("\nProject Stakeholders");
    let mut people: Vec<Person> = Vec::with_capacity(Role::ALL.len());
    for role in Role::ALL {
        console.say(&format!("\nEnter details for:\n{role}"));
        people.push(collect_stakeholder(store, console, role)?);
    }

    let project_name = if name.trim().is_empty() {
        // Stored stakeholder names always carry a surname.
        derive_project_name(&building_type, people[3].name())
            .unwrap_or_else(|_| building_type.clone())
    } else {
        name.trim().to_string()
    };

    let stakeholders = StakeholderIds {
        structural_engineer: stakeholder_id(&people[0])?,
        project_manager: stakeholder_id(&people[1])?,
        architect: stakeholder_id(&people[2])?,
        customer: stakeholder_id(&people[3])?,
    };

    let number = store.next_project_number()?;
    let project = Project::new(
        project_name,
        building_type,
        address,
        erf_number,
        Settlement::new(total_fee, amount_paid),
        deadline,
        stakeholders,
    )
    .numbered(number);

    store.insert_project(&project)?;
    store.commit()?;

    console.say("\n__________________\nProject added.\n__________________");
    console.say(&render::project_details(&project));
    console.say(&render::stakeholder_block(store, project.stakeholders())?);

    Ok(Transition::Continue)
}

/// Collects one stakeholder for the given role: either an existing row
/// picked from a 1-based listing, or a freshly entered person persisted
/// immediately with the role's next identifier.
fn collect_stakeholder(
    store: &mut Persistence,
    console: &mut dyn Console,
    role: Role,
) -> Result<Person, FlowError> {
    loop {
        let choice = console.read_line(&format!("Select an existing {role} (Y/N)?"))?;
        match choice.trim().to_lowercase().as_str() {
            "y" => {
                let people = store.list_people(role)?;
                if people.is_empty() {
                    console.say(&format!("\nNo existing {role}s.\n"));
                    continue;
                }
                for (index, person) in people.iter().enumerate() {
                    console.say(&format!(
                        "{} - {} | {}",
                        index + 1,
                        person.name(),
                        person.phone()
                    ));
                }
                // Selection is by display index, not raw id, so sparse id
                // ranges cannot misselect.
                loop {
                    let option = console.read_line("Select an option (0 - to go back):")?;
                    match option.trim().parse::<usize>() {
                        Ok(0) => break,
                        Ok(index) if index <= people.len() => {
                            return Ok(people[index - 1].clone());
                        }
                        Ok(_) => console.say("Invalid input. Try again.\n"),
                        Err(_) => console.say("Invalid input. Enter a number.\n"),
                    }
                }
            }
            "n" => {
                let name = loop {
                    let first = console.read_line("First name: ")?;
                    let surname = console.read_line("Surname: ")?;
                    match validate_person_name(&first, &surname) {
                        Ok(name) => break name,
                        Err(_) => {
                            console.say("Invalid entry. Please enter name and surname.\n");
                        }
                    }
                };
                let phone = console.read_line("Phone number: ")?;
                let email = console.read_line("Email address: ")?;
                let address = console.read_line("Physical address: ")?;

                let id = store.next_person_id(role)?;
                let person = Person::with_id(id, role, name, phone, email, address);
                store.insert_person(&person)?;
                return Ok(person);
            }
            _ => console.say("\nInvalid input. Try again.\n"),
        }
    }
}
