// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operator-facing text rendering for projects, stakeholders, and invoices.

use poise_domain::{Person, Project, Role, Settlement, StakeholderIds, format_iso_date};
use poise_persistence::{Persistence, PersistenceError};

/// Renders the full detail block for a project.
#[must_use]
pub fn project_details(project: &Project) -> String {
    let number = project
        .number()
        .map_or_else(|| String::from("-"), |n| n.to_string());

    let mut info = format!(
        "\nProject details:\n-----------------\n[Project no.: {number}]\nName: {}\nBuilding type: {}\nAddress: {}\nERF no.: {}\nTotal fee: R{}\nAmount paid: R{}\nDeadline: {}",
        project.name(),
        project.building_type(),
        project.address(),
        project.erf_number(),
        project.total_fee(),
        project.amount_paid(),
        format_iso_date(project.deadline()),
    );

    match project.completion_date() {
        Some(date) => {
            info.push_str(&format!("\nCompletion date: {}", format_iso_date(date)));
            info.push_str("\nFinalised: Yes");
        }
        None => info.push_str("\nFinalised: No"),
    }

    info
}

/// Renders the detail block for one stakeholder.
#[must_use]
pub fn person_details(person: &Person) -> String {
    format!(
        "[{}]\nName: {}\nPhone Number: {}\nE-mail Address: {}\nPhysical Address: {}",
        person.role(),
        person.name(),
        person.phone(),
        person.email(),
        person.address(),
    )
}

/// Renders all four stakeholders of a project, fetched from the store.
///
/// A missing stakeholder row renders as a notice line; a lookup miss is
/// informational, never a failure.
///
/// # Errors
///
/// Returns an error if a lookup itself fails.
pub fn stakeholder_block(
    store: &mut Persistence,
    ids: &StakeholderIds,
) -> Result<String, PersistenceError> {
    let mut block = String::from("\n\nStakeholders\n-------------\n");

    for (index, role) in Role::ALL.into_iter().enumerate() {
        if index > 0 {
            block.push_str("\n\n");
        }
        match store.person(role, ids.for_role(role))? {
            Some(person) => block.push_str(&person_details(&person)),
            None => block.push_str(&format!("[{role}]\nNot on record.")),
        }
    }

    Ok(block)
}

/// Renders the invoice block for an outstanding amount due.
#[must_use]
pub fn invoice(settlement: &Settlement) -> String {
    format!(
        "\nInvoice\n______________\nProject Fee\n___________________________________\nTotal fee: R{}\nAmount paid: R{}\n___________________________________\nAmount due: R{}\n___________________________________\n",
        settlement.total_fee(),
        settlement.amount_paid(),
        settlement.amount_due(),
    )
}
