//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty identifiers, bounded
//! quantities and star values, parseable phone numbers) so that once a value
//! reaches the domain layer it can be treated as trusted.

use std::fmt::{Display, Formatter};

use phonenumber::{Mode, country, parse};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided quantity is zero or above the per-item limit.
    #[error("quantity must be between 1 and {max}", max = Quantity::MAX)]
    InvalidQuantity,
    /// Provided star value is outside 1..=5.
    #[error("rating value must be between 1 and 5")]
    InvalidRatingValue,
    /// Phone number did not meet expected format.
    #[error("invalid phone number")]
    InvalidPhone,
}

/// Backend product identifier, trimmed and guaranteed non-empty.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(String);

impl ProductId {
    pub fn new<S: Into<String>>(id: S) -> Result<Self, TypeConstraintError> {
        let trimmed = id.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cart line quantity, 1 through [`Quantity::MAX`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    pub const MAX: u32 = 99;

    pub fn new(value: u32) -> Result<Self, TypeConstraintError> {
        if (1..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidQuantity)
        }
    }

    pub const fn one() -> Self {
        Self(1)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Star rating value, 1 through 5.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct RatingValue(u8);

impl RatingValue {
    pub fn new(value: u8) -> Result<Self, TypeConstraintError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidRatingValue)
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Display for RatingValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Delivery phone number, normalized to international notation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parses and normalizes a phone string. Numbers without a country prefix
    /// are interpreted as Vietnamese, the shop's home market.
    pub fn new(raw: &str) -> Result<Self, TypeConstraintError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        let parsed = parse(Some(country::VN), trimmed)
            .map_err(|_| TypeConstraintError::InvalidPhone)?;
        if !phonenumber::is_valid(&parsed) {
            return Err(TypeConstraintError::InvalidPhone);
        }
        Ok(Self(parsed.format().mode(Mode::International).to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
