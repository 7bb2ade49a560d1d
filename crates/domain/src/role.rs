// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The four stakeholder roles attached to every project.
///
/// Each role is persisted in its own table with an independent identifier
/// sequence. The order of `ALL` is the fixed order in which stakeholders are
/// collected and stored on a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    StructuralEngineer,
    ProjectManager,
    Architect,
    Customer,
}

impl Role {
    /// All roles, in the fixed stakeholder order.
    pub const ALL: [Self; 4] = [
        Self::StructuralEngineer,
        Self::ProjectManager,
        Self::Architect,
        Self::Customer,
    ];

    /// Returns the human-readable role name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StructuralEngineer => "Structural Engineer",
            Self::ProjectManager => "Project Manager",
            Self::Architect => "Architect",
            Self::Customer => "Customer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
