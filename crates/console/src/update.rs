// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The update workflow.
//!
//! Each field update is applied to the store immediately, and the project is
//! re-read from the store after every write: persisted state is the source
//! of truth, never a cached copy. The fate of everything accumulated since
//! entering the sub-flow is decided once, at exit, by the save-changes
//! prompt.

use poise_domain::{FieldValue, PersonField, Project, ProjectField, Role, format_iso_date};
use poise_persistence::{Persistence, PersistenceError};

use crate::console::{Console, prompt_amount, prompt_date};
use crate::menu::FlowError;
use crate::render;

const UPDATE_OPTIONS: &str = "\nProject update options:\n---------------------\n\
1. Project name\n2. Building Type\n3. Address\n4. ERF number\n\
5. Total fee\n6. Amount paid\n7. Deadline\n8. Completion date\n\
9. Structural Engineer\n10. Project Manager\n11. Architect\n12. Customer";

/// Loops over the 12 update options until the operator exits, then resolves
/// the whole sub-flow with the save-changes prompt.
pub fn update_project_flow(
    store: &mut Persistence,
    console: &mut dyn Console,
    project: &Project,
) -> Result<(), FlowError> {
    console.say("\nUpdate project selected.");
    let Some(number) = project.number() else {
        console.say("Project not found.");
        return Ok(());
    };

    loop {
        let Some(current) = store.find_project_by_id(number)? else {
            console.say("Project not found.");
            break;
        };

        console.say(&render::project_details(&current));
        console.say(&render::stakeholder_block(store, current.stakeholders())?);
        console.say(UPDATE_OPTIONS);
        let choice =
            console.read_line("-- Select option (any other key - go back to Main Menu):")?;

        let option = choice.trim().parse::<usize>().ok();
        match option {
            Some(option @ 1..=8) => {
                let field = ProjectField::ALL[option - 1];
                update_field(store, console, &current, field)?;
            }
            Some(9) => {
                update_person_flow(
                    store,
                    console,
                    Role::StructuralEngineer,
                    current.stakeholders().structural_engineer,
                )?;
            }
            Some(10) => {
                update_person_flow(
                    store,
                    console,
                    Role::ProjectManager,
                    current.stakeholders().project_manager,
                )?;
            }
            Some(11) => {
                update_person_flow(
                    store,
                    console,
                    Role::Architect,
                    current.stakeholders().architect,
                )?;
            }
            Some(12) => {
                update_person_flow(
                    store,
                    console,
                    Role::Customer,
                    current.stakeholders().customer,
                )?;
            }
            _ => break,
        }
    }

    exit_updating(store, console)
}

/// The save-changes prompt that resolves the update sub-flow's unit of work.
fn exit_updating(store: &mut Persistence, console: &mut dyn Console) -> Result<(), FlowError> {
    loop {
        console.say("Exiting update...");
        let option = console.read_line("Do you want to save changes (Y/N) ?\nEnter option:")?;
        match option.trim().to_lowercase().as_str() {
            "y" => {
                console.say("Saving changes...");
                store.commit()?;
                return Ok(());
            }
            "n" => {
                console.say("Discarding changes...");
                store.rollback()?;
                return Ok(());
            }
            _ => console.say("Invalid input. Please select an option."),
        }
    }
}

/// Prompts for and applies one project field update, reporting
/// `old -> new` on success or a failed-update notice when no row matched.
fn update_field(
    store: &mut Persistence,
    console: &mut dyn Console,
    project: &Project,
    field: ProjectField,
) -> Result<(), FlowError> {
    let Some(number) = project.number() else {
        console.say("Project not found.");
        return Ok(());
    };

    // The store also guards this, but checking first spares the operator the
    // date prompts.
    if field == ProjectField::CompletionDate && !project.is_finalised() {
        console.say("\nCannot update Completion Date -- Project has not been finalised.\n");
        return Ok(());
    }

    let (old_text, new_text, value) = match field {
        ProjectField::Name
        | ProjectField::BuildingType
        | ProjectField::Address
        | ProjectField::ErfNumber => {
            let update = console.read_line("Enter update:")?;
            let old = match field {
                ProjectField::Name => project.name(),
                ProjectField::BuildingType => project.building_type(),
                ProjectField::Address => project.address(),
                _ => project.erf_number(),
            }
            .to_string();
            (old, update.clone(), FieldValue::Text(update))
        }
        ProjectField::TotalFee | ProjectField::AmountPaid => {
            let amount = prompt_amount(console, "Enter update:")?;
            let old = if field == ProjectField::TotalFee {
                project.total_fee()
            } else {
                project.amount_paid()
            };
            (
                format!("R{old}"),
                format!("R{amount}"),
                FieldValue::Amount(amount),
            )
        }
        ProjectField::Deadline => {
            let date = prompt_date(console, "Set Deadline (numeric):")?;
            (
                format_iso_date(project.deadline()),
                format_iso_date(date),
                FieldValue::Date(date),
            )
        }
        ProjectField::CompletionDate => {
            let date = prompt_date(console, "Set Completion date (numeric):")?;
            let old = project
                .completion_date()
                .map_or_else(String::new, format_iso_date);
            (old, format_iso_date(date), FieldValue::Date(date))
        }
    };

    match store.update_project_field(number, field, &value) {
        Ok(rows) if rows > 0 => {
            console.say(&format!("Update complete [{old_text} -> {new_text}].\n"));
        }
        Ok(_) => console.say("Update failed."),
        Err(PersistenceError::ProjectNotFinalised(_)) => {
            console.say("\nCannot update Completion Date -- Project has not been finalised.\n");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

/// The stakeholder-edit sub-loop: shows the four fields with their current
/// values, applies one update per pass, and returns to the project update
/// loop on any other key.
fn update_person_flow(
    store: &mut Persistence,
    console: &mut dyn Console,
    role: Role,
    person_id: i64,
) -> Result<(), FlowError> {
    loop {
        let Some(person) = store.person(role, person_id)? else {
            console.say(&format!("{role} not found."));
            return Ok(());
        };

        console.say(&format!("Update {role}:\n-------------------"));
        console.say(&format!(
            "1. Name         | {}\n2. Phone number | {}\n3. Email        | {}\n4. Address      | {}",
            person.name(),
            person.phone(),
            person.email(),
            person.address(),
        ));
        let choice = console.read_line("Enter option (any other key to go back):")?;

        let field = match choice.trim() {
            "1" => PersonField::Name,
            "2" => PersonField::Phone,
            "3" => PersonField::Email,
            "4" => PersonField::Address,
            _ => return Ok(()),
        };

        let update = console.read_line("Enter update:")?;
        let old = field.value_of(&person).to_string();
        let rows = store.update_person_field(role, person_id, field, &update)?;
        if rows > 0 {
            console.say(&format!("Stakeholder updated [ {old} -> '{update}'].\n"));
        } else {
            console.say("Update failed !");
        }
    }
}
