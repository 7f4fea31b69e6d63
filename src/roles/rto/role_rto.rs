use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::role::Role;

#[derive(ToSchema, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleRto {
  pub role: Role,
  pub index: usize,
  /// Following step in the progression.
  pub next: Option<Role>,
}

impl From<Role> for RoleRto {
  fn from(role: Role) -> Self {
    Self {
      role,
      index: role.index(),
      next: role.next(),
    }
  }
}

/// `ordering` is -1, 0 or 1 as `a` sorts before, with or after `b`.
#[derive(ToSchema, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompareRolesRto {
  pub a: String,
  pub b: String,
  pub ordering: i8,
}
