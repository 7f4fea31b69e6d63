use std::{
  collections::HashMap,
  sync::{Arc, RwLock},
};

use async_trait::async_trait;
use chrono::Utc;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::shared::model::user::{UpsertUser, User};

#[derive(Debug, Error)]
pub enum UserRepositoryError {
  #[cfg(feature = "dynamodb")]
  #[error("Serialization error: {0}")]
  SerializationError(#[from] serde_dynamo::Error),

  #[cfg(feature = "dynamodb")]
  #[error("Get item error: {0}")]
  GetItemError(
    #[from]
    aws_sdk_dynamodb::error::SdkError<
      aws_sdk_dynamodb::operation::get_item::GetItemError,
    >,
  ),

  #[cfg(feature = "dynamodb")]
  #[error("Update item error: {0}")]
  UpdateItemError(
    #[from]
    aws_sdk_dynamodb::error::SdkError<
      aws_sdk_dynamodb::operation::update_item::UpdateItemError,
    >,
  ),

  #[cfg(feature = "mongodb")]
  #[error("MongoDB error: {0}")]
  MongoError(#[from] mongodb::error::Error),

  #[cfg(feature = "mongodb")]
  #[error("BSON serialization error: {0}")]
  BsonError(#[from] mongodb::bson::ser::Error),

  #[error("Other error: {0}")]
  Other(String),
}

/// Narrow capability the role sync relies on. Implementations must perform
/// `find_or_create_and_update_role` as a single atomic write.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
  async fn find_by_external_id(
    &self,
    external_id: &str,
  ) -> Result<Option<User>, UserRepositoryError>;

  /// Updates only the role of an existing user, or creates the user from
  /// `upsert` when none exists for its external id.
  async fn find_or_create_and_update_role(
    &self,
    upsert: UpsertUser,
  ) -> Result<User, UserRepositoryError>;
}

// ### In-memory implementation ###

#[derive(Default)]
pub struct InMemoryUserRepository {
  pub users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

fn poisoned<T>(_: T) -> UserRepositoryError {
  UserRepositoryError::Other(String::from("User store lock poisoned"))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
  async fn find_by_external_id(
    &self,
    external_id: &str,
  ) -> Result<Option<User>, UserRepositoryError> {
    let users = self.users.read().map_err(poisoned)?;
    Ok(users.get(external_id).cloned())
  }

  async fn find_or_create_and_update_role(
    &self,
    upsert: UpsertUser,
  ) -> Result<User, UserRepositoryError> {
    // Lookup and write happen under one write lock.
    let mut users = self.users.write().map_err(poisoned)?;
    let now = Utc::now();
    let user = users
      .entry(upsert.external_id.clone())
      .and_modify(|user| {
        user.role = upsert.role;
        user.updated_at = now;
      })
      .or_insert_with(|| User::from(upsert, now));
    Ok(user.clone())
  }
}
