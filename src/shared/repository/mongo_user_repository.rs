use async_trait::async_trait;
use chrono::Utc;
use mongodb::{
  bson::{doc, to_bson, to_document},
  options::{IndexOptions, ReturnDocument},
  Collection, IndexModel,
};

use super::user_repository::{UserRepository, UserRepositoryError};
use crate::shared::{
  database::MongoDatabase,
  model::user::{UpsertUser, User},
};

pub struct MongoUserRepository {
  users: Collection<User>,
}

impl MongoUserRepository {
  /// Opens the users collection and makes sure `clerkId` is uniquely
  /// indexed. Without it, racing first upserts for one identity can insert
  /// two documents.
  pub async fn new(
    database: MongoDatabase,
    database_name: &str,
    collection: &str,
  ) -> Result<Self, UserRepositoryError> {
    let users: Collection<User> = database
      .mongo_client
      .database(database_name)
      .collection(collection);
    users.create_index(external_id_index()).await?;
    Ok(Self { users })
  }
}

fn external_id_index() -> IndexModel {
  IndexModel::builder()
    .keys(doc! { "clerkId": 1 })
    .options(
      IndexOptions::builder()
        .name(String::from("clerkId_unique"))
        .unique(true)
        .build(),
    )
    .build()
}

#[async_trait]
impl UserRepository for MongoUserRepository {
  async fn find_by_external_id(
    &self,
    external_id: &str,
  ) -> Result<Option<User>, UserRepositoryError> {
    Ok(self.users.find_one(doc! { "clerkId": external_id }).await?)
  }

  async fn find_or_create_and_update_role(
    &self,
    upsert: UpsertUser,
  ) -> Result<User, UserRepositoryError> {
    let now = Utc::now();
    let filter = doc! { "clerkId": upsert.external_id.as_str() };
    let role = to_bson(&upsert.role)?;

    // Fields written only when the document is created. The filter already
    // seeds `clerkId` into a new document.
    let mut on_insert = to_document(&User::from(upsert, now))?;
    on_insert.remove("clerkId");
    on_insert.remove("role");
    on_insert.remove("updatedAt");

    let update = doc! {
      "$set": { "role": role, "updatedAt": to_bson(&now)? },
      "$setOnInsert": on_insert,
    };

    self
      .users
      .find_one_and_update(filter, update)
      .upsert(true)
      .return_document(ReturnDocument::After)
      .await?
      .ok_or_else(|| {
        UserRepositoryError::Other(String::from("Upsert returned no document"))
      })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_external_id_index_is_unique() {
    let index = external_id_index();
    assert_eq!(index.keys, doc! { "clerkId": 1 });
    let options = index.options.expect("index options");
    assert_eq!(options.unique, Some(true));
    assert_eq!(options.name.as_deref(), Some("clerkId_unique"));
  }
}
