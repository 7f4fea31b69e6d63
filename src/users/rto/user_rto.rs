use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::role::Role;

#[derive(ToSchema, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRto {
  pub uuid: String,
  #[serde(rename = "clerkId")]
  pub external_id: String,
  pub email: String,
  pub name: String,
  pub role: Role,
  #[serde(rename = "roleIndex")]
  pub role_index: usize,
}
