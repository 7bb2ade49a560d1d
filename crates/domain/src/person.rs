// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::role::Role;
use serde::{Deserialize, Serialize};

/// A project stakeholder in one of the four fixed roles.
///
/// The identifier is `None` until the person has been assigned one by the
/// store; it is immutable afterwards. All other fields are mutable through
/// explicit update operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    id: Option<i64>,
    role: Role,
    name: String,
    phone: String,
    email: String,
    address: String,
}

impl Person {
    /// Creates a person that has not been persisted yet.
    #[must_use]
    pub const fn new(role: Role, name: String, phone: String, email: String, address: String) -> Self {
        Self {
            id: None,
            role,
            name,
            phone,
            email,
            address,
        }
    }

    /// Creates a person with an assigned identifier.
    #[must_use]
    pub const fn with_id(
        id: i64,
        role: Role,
        name: String,
        phone: String,
        email: String,
        address: String,
    ) -> Self {
        Self {
            id: Some(id),
            role,
            name,
            phone,
            email,
            address,
        }
    }

    /// Returns the identifier, if one has been assigned.
    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}

/// The single stakeholder field targeted by an update operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonField {
    Name,
    Phone,
    Email,
    Address,
}

impl PersonField {
    /// Update menu order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Phone, Self::Email, Self::Address];

    /// Returns the operator-facing field label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone number",
            Self::Email => "Email",
            Self::Address => "Address",
        }
    }

    /// Returns the current value of this field on a person.
    #[must_use]
    pub fn value_of<'a>(&self, person: &'a Person) -> &'a str {
        match self {
            Self::Name => person.name(),
            Self::Phone => person.phone(),
            Self::Email => person.email(),
            Self::Address => person.address(),
        }
    }
}
