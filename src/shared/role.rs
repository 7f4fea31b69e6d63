use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid role: {0}")]
pub struct InvalidRoleError(pub String);

/// User category, ordered along the onboarding progression
/// passenger -> driver -> owner.
#[derive(
  ToSchema, Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize,
)]
pub enum Role {
  #[serde(rename = "PASSENGER")]
  Passenger,
  #[serde(rename = "DRIVER")]
  Driver,
  #[serde(rename = "OWNER")]
  Owner,
}

impl Role {
  /// Ordering table. Every role appears exactly once; dependents (wizard step
  /// indices, stored positions) rely on this sequence.
  pub const ALL: [Role; 3] = [Role::Passenger, Role::Driver, Role::Owner];

  pub fn index(self) -> usize {
    match self {
      Role::Passenger => 0,
      Role::Driver => 1,
      Role::Owner => 2,
    }
  }

  pub fn from_index(index: usize) -> Option<Role> {
    Self::ALL.get(index).copied()
  }

  /// Following role in the progression, `None` after `OWNER`.
  pub fn next(self) -> Option<Role> {
    Self::from_index(self.index() + 1)
  }

  pub fn compare(self, other: Role) -> Ordering {
    self.index().cmp(&other.index())
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Role::Passenger => "PASSENGER",
      Role::Driver => "DRIVER",
      Role::Owner => "OWNER",
    }
  }
}

/// Orders two roles received as text, e.g. from a query string.
pub fn compare(a: &str, b: &str) -> Result<Ordering, InvalidRoleError> {
  Ok(a.parse::<Role>()?.compare(b.parse::<Role>()?))
}

impl FromStr for Role {
  type Err = InvalidRoleError;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|role| role.as_str() == value)
      .ok_or_else(|| InvalidRoleError(value.to_string()))
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl PartialOrd for Role {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Role {
  fn cmp(&self, other: &Self) -> Ordering {
    self.compare(*other)
  }
}
