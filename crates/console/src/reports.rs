// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only reports: incomplete projects and projects past their deadline.
//!
//! Both reports re-query the store on every call and return to the menu.

use poise_persistence::Persistence;

use crate::console::{Console, ConsoleError};
use crate::menu::{FlowError, Transition, today};
use crate::render;

/// Lists all projects that still have to be completed.
pub fn list_incomplete(
    store: &mut Persistence,
    console: &mut dyn Console,
) -> Result<Transition, FlowError> {
    console.say("\n_________________________\nProjects to be completed:\n_________________________");

    for project in store.list_incomplete_projects()? {
        console.say(&render::project_details(&project));
        console.say("-----------------------------------------------------------");
    }

    return_to_menu(console)?;
    Ok(Transition::Continue)
}

/// Lists all unfinalised projects whose deadline has passed.
pub fn list_overdue(
    store: &mut Persistence,
    console: &mut dyn Console,
) -> Result<Transition, FlowError> {
    console.say("\n________________________\nProjects Past Deadline:\n________________________");

    for project in store.list_overdue_projects(today())? {
        console.say(&render::project_details(&project));
        console.say("-----------------------------------------------------------");
    }

    return_to_menu(console)?;
    Ok(Transition::Continue)
}

fn return_to_menu(console: &mut dyn Console) -> Result<(), ConsoleError> {
    console.read_line("\nPress Enter to go back to Menu.")?;
    console.say("Returning to Menu...");
    Ok(())
}
