// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::money::Money;
use crate::role::Role;
use serde::{Deserialize, Serialize};
use time::Date;

/// The four stakeholder identifiers attached to a project, one per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeholderIds {
    pub structural_engineer: i64,
    pub project_manager: i64,
    pub architect: i64,
    pub customer: i64,
}

impl StakeholderIds {
    /// Returns the identifier attached for the given role.
    #[must_use]
    pub const fn for_role(&self, role: Role) -> i64 {
        match role {
            Role::StructuralEngineer => self.structural_engineer,
            Role::ProjectManager => self.project_manager,
            Role::Architect => self.architect,
            Role::Customer => self.customer,
        }
    }
}

/// The fee position of a project: total fee against amount paid to date.
///
/// Settlement arithmetic is exact in cents. A project is settled when the
/// amount due is zero or negative (overpaid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    total_fee: Money,
    amount_paid: Money,
}

impl Settlement {
    #[must_use]
    pub const fn new(total_fee: Money, amount_paid: Money) -> Self {
        Self {
            total_fee,
            amount_paid,
        }
    }

    #[must_use]
    pub const fn total_fee(&self) -> Money {
        self.total_fee
    }

    #[must_use]
    pub const fn amount_paid(&self) -> Money {
        self.amount_paid
    }

    /// Returns `total_fee - amount_paid`.
    #[must_use]
    pub const fn amount_due(&self) -> Money {
        self.total_fee.minus(self.amount_paid)
    }

    /// Returns whether the customer owes nothing.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        !self.amount_due().is_positive()
    }
}

/// A project record.
///
/// The project number is `None` until assigned by the store, which happens
/// only once the stakeholders are finalized during creation. The completion
/// date is `None` until the project is finalised and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    number: Option<i64>,
    name: String,
    building_type: String,
    address: String,
    erf_number: String,
    fees: Settlement,
    deadline: Date,
    completion_date: Option<Date>,
    stakeholders: StakeholderIds,
}

impl Project {
    /// Creates a new, not-yet-persisted project with no completion date.
    #[must_use]
    pub const fn new(
        name: String,
        building_type: String,
        address: String,
        erf_number: String,
        fees: Settlement,
        deadline: Date,
        stakeholders: StakeholderIds,
    ) -> Self {
        Self {
            number: None,
            name,
            building_type,
            address,
            erf_number,
            fees,
            deadline,
            completion_date: None,
            stakeholders,
        }
    }

    /// Returns the project with its assigned number.
    #[must_use]
    pub const fn numbered(mut self, number: i64) -> Self {
        self.number = Some(number);
        self
    }

    /// Returns the project with a completion date set. Used when
    /// reconstructing a finalised project from its stored row.
    #[must_use]
    pub const fn completed(mut self, completion_date: Date) -> Self {
        self.completion_date = Some(completion_date);
        self
    }

    #[must_use]
    pub const fn number(&self) -> Option<i64> {
        self.number
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn building_type(&self) -> &str {
        &self.building_type
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn erf_number(&self) -> &str {
        &self.erf_number
    }

    #[must_use]
    pub const fn fees(&self) -> Settlement {
        self.fees
    }

    #[must_use]
    pub const fn total_fee(&self) -> Money {
        self.fees.total_fee()
    }

    #[must_use]
    pub const fn amount_paid(&self) -> Money {
        self.fees.amount_paid()
    }

    #[must_use]
    pub const fn deadline(&self) -> Date {
        self.deadline
    }

    #[must_use]
    pub const fn completion_date(&self) -> Option<Date> {
        self.completion_date
    }

    #[must_use]
    pub const fn stakeholders(&self) -> &StakeholderIds {
        &self.stakeholders
    }

    /// Returns whether the project has been finalised.
    #[must_use]
    pub const fn is_finalised(&self) -> bool {
        self.completion_date.is_some()
    }
}

/// The single project column targeted by an update operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectField {
    Name,
    BuildingType,
    Address,
    ErfNumber,
    TotalFee,
    AmountPaid,
    Deadline,
    CompletionDate,
}

impl ProjectField {
    /// Update menu order (options 1 through 8).
    pub const ALL: [Self; 8] = [
        Self::Name,
        Self::BuildingType,
        Self::Address,
        Self::ErfNumber,
        Self::TotalFee,
        Self::AmountPaid,
        Self::Deadline,
        Self::CompletionDate,
    ];

    /// Returns the operator-facing field label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Project name",
            Self::BuildingType => "Building type",
            Self::Address => "Address",
            Self::ErfNumber => "ERF number",
            Self::TotalFee => "Total fee",
            Self::AmountPaid => "Amount paid",
            Self::Deadline => "Deadline",
            Self::CompletionDate => "Completion date",
        }
    }
}

/// A typed value for a single-field project update.
///
/// The orchestrator constructs the variant matching the field it prompts for;
/// the store maps each variant onto the corresponding column type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Amount(Money),
    Date(Date),
}
