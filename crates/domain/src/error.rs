// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The entered amount is not a plain decimal amount with at most two
    /// decimal places.
    InvalidAmount(String),
    /// Fees and amounts paid must be non-negative.
    NegativeAmount(String),
    /// First name or surname was blank.
    BlankName,
    /// A project name could not be derived because the customer name carries
    /// no surname.
    MissingSurname(String),
    /// The day/month/year combination does not name a real calendar date.
    InvalidDate {
        /// The entered year.
        year: i32,
        /// The entered month.
        month: u8,
        /// The entered day.
        day: u8,
    },
    /// A stored date string could not be parsed.
    DateParse {
        /// The stored value.
        value: String,
        /// The parser's reason.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAmount(value) => write!(f, "Invalid amount: '{value}'"),
            Self::NegativeAmount(value) => {
                write!(f, "Amount must not be negative: '{value}'")
            }
            Self::BlankName => write!(f, "First name and surname must not be blank"),
            Self::MissingSurname(name) => {
                write!(f, "Customer name '{name}' has no surname to derive from")
            }
            Self::InvalidDate { year, month, day } => {
                write!(f, "Not a valid calendar date: {year}-{month}-{day}")
            }
            Self::DateParse { value, reason } => {
                write!(f, "Failed to parse date '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
