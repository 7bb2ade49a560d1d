// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// A monetary amount held as an exact count of cents.
///
/// Fees are entered and displayed with two decimal places. Holding cents in a
/// signed 64-bit integer keeps fee arithmetic exact; an amount due can be
/// negative when a customer has overpaid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub const ZERO: Self = Self { cents: 0 };

    /// Creates an amount from a raw cent count.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Returns the raw cent count.
    #[must_use]
    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// Parses an operator-entered amount such as `1234`, `1234.5` or `1234.56`.
    ///
    /// At most two decimal places are accepted. Negative amounts are rejected:
    /// fees and amounts paid are non-negative at entry.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NegativeAmount` for amounts with a leading sign,
    /// `DomainError::InvalidAmount` for anything else that is not a plain
    /// decimal amount.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidAmount(input.to_string()));
        }
        if trimmed.starts_with('-') || trimmed.starts_with('+') {
            return Err(DomainError::NegativeAmount(input.to_string()));
        }

        let (units_part, frac_part) = trimmed.split_once('.').unwrap_or((trimmed, ""));

        if units_part.is_empty() || !units_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidAmount(input.to_string()));
        }
        if frac_part.len() > 2 || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidAmount(input.to_string()));
        }

        let units: i64 = units_part
            .parse()
            .map_err(|_| DomainError::InvalidAmount(input.to_string()))?;
        let frac: i64 = match frac_part.len() {
            0 => 0,
            len => {
                let digits: i64 = frac_part
                    .parse()
                    .map_err(|_| DomainError::InvalidAmount(input.to_string()))?;
                if len == 1 { digits * 10 } else { digits }
            }
        };

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .map(|cents| Self { cents })
            .ok_or_else(|| DomainError::InvalidAmount(input.to_string()))
    }

    /// Returns `self - other`, exact in cents.
    #[must_use]
    pub const fn minus(self, other: Self) -> Self {
        Self {
            cents: self.cents - other.cents,
        }
    }

    /// Returns whether the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.cents > 0
    }
}

impl std::fmt::Display for Money {
    /// Formats the amount with two decimal places, e.g. `3000.00`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let magnitude = self.cents.unsigned_abs();
        write!(f, "{sign}{}.{:02}", magnitude / 100, magnitude % 100)
    }
}
