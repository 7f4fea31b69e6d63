use serde::Deserialize;
use utoipa::ToSchema;
use validator_derive::Validate;

/// Role is kept as text here and parsed into `Role` by the handler, so an
/// unknown value is reported as an invalid role rather than a JSON error.
#[derive(ToSchema, Debug, Clone, Deserialize, Validate)]
pub struct SyncUserRoleDto {
  #[validate(length(min = 1, message = "clerkId must not be empty"))]
  #[serde(rename = "clerkId")]
  pub external_id: String,
  #[validate(email(message = "email must be a valid email address"))]
  pub email: String,
  #[schema(example = "DRIVER")]
  pub role: String,
  pub name: Option<String>,
}
