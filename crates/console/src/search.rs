// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The search/view/finalise workflow.
//!
//! A lookup miss prints "Project not found." and returns to the menu; it is
//! informational, never an error. Finalising an already-finalised project
//! performs zero writes and shows a notice instead.

use poise_domain::{Project, Role, format_iso_date};
use poise_persistence::{FinaliseOutcome, Persistence};

use crate::console::Console;
use crate::menu::{FlowError, Transition, today};
use crate::render;
use crate::update;

/// Runs the search workflow: select a project, view it, then update it,
/// finalise it, or go back.
pub fn search_flow(
    store: &mut Persistence,
    console: &mut dyn Console,
) -> Result<Transition, FlowError> {
    let found = select_project(store, console)?;
    let Some(project) = found else {
        console.say("Project not found.");
        return Ok(Transition::Continue);
    };

    console.say(&render::project_details(&project));
    console.say(&render::stakeholder_block(store, project.stakeholders())?);

    let option = console.read_line(
        "\n-- Options:\n1 - Update\n2 - Mark as finalised\nEnter option (any other key to go back):",
    )?;
    match option.trim() {
        "1" => update::update_project_flow(store, console, &project)?,
        "2" => finalise_flow(store, console, &project)?,
        _ => console.say("Back to Main menu..."),
    }

    Ok(Transition::Continue)
}

/// Prompts for a search key and looks the project up with a parameterized
/// query. Non-numeric input for a project number re-prompts in place.
fn select_project(
    store: &mut Persistence,
    console: &mut dyn Console,
) -> Result<Option<Project>, FlowError> {
    loop {
        console.say("Search for project by:\t1 - Project name\t2 - Project number");
        let choice = console.read_line("Enter option (1 or 2):")?;
        match choice.trim() {
            "1" => {
                let name = console.read_line("Search by project name:")?;
                return Ok(store.find_project_by_name(name.trim())?);
            }
            "2" => {
                let number_text = console.read_line("Search by project number:")?;
                match number_text.trim().parse::<i64>() {
                    Ok(number) => return Ok(store.find_project_by_id(number)?),
                    Err(_) => console.say("Invalid input. Enter a number.\n"),
                }
            }
            _ => console.say("Incorrect input. Please select an option.\n"),
        }
    }
}

/// Finalises the selected project: stamps today's date, renders the
/// customer's details, then either an invoice or a paid-in-full notice, and
/// commits the unit of work.
fn finalise_flow(
    store: &mut Persistence,
    console: &mut dyn Console,
    project: &Project,
) -> Result<(), FlowError> {
    let Some(number) = project.number() else {
        console.say("Project not found.");
        return Ok(());
    };

    let completion_date = today();
    match store.finalise_project(number, completion_date)? {
        FinaliseOutcome::AlreadyFinalised => {
            console.say("\nProject has already been finalised!");
        }
        FinaliseOutcome::Finalised(settlement) => {
            console.say(&format!(
                "\nProject Finalised.\n___________________________________\nProject: {number}"
            ));
            console.say(project.name());
            console.say(&format!(
                "Completion date: {}",
                format_iso_date(completion_date)
            ));

            match store.person(Role::Customer, project.stakeholders().customer)? {
                Some(customer) => console.say(&render::person_details(&customer)),
                None => console.say("Customer not on record."),
            }

            if settlement.amount_due().is_positive() {
                console.say(&render::invoice(&settlement));
            } else {
                console.say(&format!(
                    "Customer has paid total fee [R{}].\n",
                    settlement.total_fee()
                ));
            }

            store.commit()?;
        }
    }

    Ok(())
}
