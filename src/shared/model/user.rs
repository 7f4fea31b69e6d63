use chrono::{DateTime, Utc};
use nanoid::nanoid;
use serde::{Deserialize, Serialize};

use crate::shared::role::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub uuid: String,
  #[serde(rename = "clerkId")]
  pub external_id: String,
  pub email: String,
  pub name: String,
  pub role: Role,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Identity and role claim reconciled against the store.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertUser {
  pub external_id: String,
  pub email: String,
  pub role: Role,
  pub name: Option<String>,
}

impl User {
  pub fn from(upsert: UpsertUser, now: DateTime<Utc>) -> Self {
    Self {
      uuid: nanoid!(),
      external_id: upsert.external_id,
      email: upsert.email,
      name: upsert.name.unwrap_or_default(),
      role: upsert.role,
      created_at: now,
      updated_at: now,
    }
  }
}
