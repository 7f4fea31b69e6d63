use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use chrono::Utc;
use nanoid::nanoid;

use super::user_repository::{UserRepository, UserRepositoryError};
use crate::shared::{
  database::DynamoDatabase,
  model::user::{UpsertUser, User},
};

// `role` and `name` are DynamoDB reserved words, so every attribute goes
// through a placeholder.
const UPSERT_EXPRESSION: &str = "SET #role = :role, #updatedAt = :now, \
  #uuid = if_not_exists(#uuid, :uuid), \
  #email = if_not_exists(#email, :email), \
  #name = if_not_exists(#name, :name), \
  #createdAt = if_not_exists(#createdAt, :now)";

pub struct DynamoUserRepository {
  database: DynamoDatabase,
  table_name: String,
}

impl DynamoUserRepository {
  pub fn new(database: DynamoDatabase, table_name: &str) -> Self {
    Self {
      database,
      table_name: table_name.to_string(),
    }
  }
}

#[async_trait]
impl UserRepository for DynamoUserRepository {
  async fn find_by_external_id(
    &self,
    external_id: &str,
  ) -> Result<Option<User>, UserRepositoryError> {
    let result = self
      .database
      .dynamo_client
      .get_item()
      .table_name(&self.table_name)
      .key("clerkId", AttributeValue::S(external_id.to_string()))
      .send()
      .await?;

    match result.item {
      Some(item) => Ok(Some(serde_dynamo::from_item(item)?)),
      None => Ok(None),
    }
  }

  async fn find_or_create_and_update_role(
    &self,
    upsert: UpsertUser,
  ) -> Result<User, UserRepositoryError> {
    let now = Utc::now().to_rfc3339();

    let result = self
      .database
      .dynamo_client
      .update_item()
      .table_name(&self.table_name)
      .key("clerkId", AttributeValue::S(upsert.external_id))
      .update_expression(UPSERT_EXPRESSION)
      .expression_attribute_names("#role", "role")
      .expression_attribute_names("#updatedAt", "updatedAt")
      .expression_attribute_names("#uuid", "uuid")
      .expression_attribute_names("#email", "email")
      .expression_attribute_names("#name", "name")
      .expression_attribute_names("#createdAt", "createdAt")
      .expression_attribute_values(
        ":role",
        AttributeValue::S(upsert.role.as_str().to_string()),
      )
      .expression_attribute_values(":now", AttributeValue::S(now))
      .expression_attribute_values(":uuid", AttributeValue::S(nanoid!()))
      .expression_attribute_values(":email", AttributeValue::S(upsert.email))
      .expression_attribute_values(
        ":name",
        AttributeValue::S(upsert.name.unwrap_or_default()),
      )
      .return_values(ReturnValue::AllNew)
      .send()
      .await?;

    let attributes = result.attributes.ok_or_else(|| {
      UserRepositoryError::Other(String::from("Update returned no attributes"))
    })?;
    Ok(serde_dynamo::from_item(attributes)?)
  }
}
