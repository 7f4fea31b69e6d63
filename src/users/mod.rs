pub mod dto;
pub mod rto;

use actix_web::{web, HttpResponse, Responder};
use dto::sync_user_role_dto::SyncUserRoleDto;
use rto::user_rto::UserRto;
use thiserror::Error;
use validator::Validate;

use crate::shared::http_error::HttpError;
use crate::shared::model::user::{UpsertUser, User};
use crate::shared::repository::user_repository::{
  UserRepository, UserRepositoryError,
};
use crate::shared::role::Role;
use crate::AppState;

#[derive(Debug, Error)]
pub enum SyncUserRoleError {
  #[error("clerkId must not be empty")]
  EmptyExternalId,
  /// Storage detail stays in the source and in the logs.
  #[error("Unable to sync user role")]
  Persistence(#[source] UserRepositoryError),
}

/// Reconciles the stored user for `upsert.external_id` with the given role.
/// Safe to retry: repeated calls converge to the same record.
#[tracing::instrument(
  skip_all,
  fields(external_id = %upsert.external_id, role = %upsert.role)
)]
pub async fn sync_role<UR: UserRepository>(
  user_repository: &UR,
  upsert: UpsertUser,
) -> Result<User, SyncUserRoleError> {
  if upsert.external_id.is_empty() {
    tracing::warn!("Rejected role sync without external id");
    return Err(SyncUserRoleError::EmptyExternalId);
  }

  match user_repository.find_or_create_and_update_role(upsert).await {
    Ok(user) => {
      tracing::info!(uuid = %user.uuid, "User role synced");
      Ok(user)
    }
    Err(error) => {
      tracing::error!(%error, "Failed to sync user role");
      Err(SyncUserRoleError::Persistence(error))
    }
  }
}

#[utoipa::path(
  post,
  path = "/v1/users/sync",
  request_body = SyncUserRoleDto,
  responses(
    (status = 200, description = "User created or role updated", body = UserRto),
    (status = 400, description = "Invalid payload or role", body = HttpError),
    (status = 500, description = "Unable to sync user role", body = HttpError)
  ),
  security(("master_key" = []))
)]
pub async fn sync_user_role<UR: UserRepository>(
  data: web::Data<AppState<UR>>,
  dto: web::Json<SyncUserRoleDto>,
) -> impl Responder {
  // Perform validation
  if let Err(validation_errors) = dto.validate() {
    return HttpResponse::BadRequest().json(validation_errors);
  }
  let dto = dto.into_inner();

  // Role text crosses the boundary here; past this point it is typed.
  let role = match dto.role.parse::<Role>() {
    Ok(role) => role,
    Err(error) => {
      return HttpResponse::BadRequest().json(HttpError::from(error.to_string()))
    }
  };

  let upsert = UpsertUser {
    external_id: dto.external_id,
    email: dto.email,
    role,
    name: dto.name,
  };

  match sync_role(&data.user_repository, upsert).await {
    Ok(user) => HttpResponse::Ok()
      .content_type("application/json")
      .json(UserRto::from(user)),
    Err(error @ SyncUserRoleError::EmptyExternalId) => {
      HttpResponse::BadRequest().json(HttpError::from(error.to_string()))
    }
    Err(error) => internal_server_error(error),
  }
}

#[utoipa::path(
  get,
  path = "/v1/users/{clerkId}",
  params(("clerkId" = String, Path, description = "External identity key")),
  responses(
    (status = 200, description = "User found", body = UserRto),
    (status = 404, description = "User not found", body = HttpError),
    (status = 500, description = "Unable to load user", body = HttpError)
  ),
  security(("master_key" = []))
)]
pub async fn find_user<UR: UserRepository>(
  data: web::Data<AppState<UR>>,
  external_id: web::Path<String>,
) -> impl Responder {
  match data
    .user_repository
    .find_by_external_id(&external_id)
    .await
  {
    Ok(Some(user)) => HttpResponse::Ok().json(UserRto::from(user)),
    Ok(None) => HttpResponse::NotFound()
      .content_type("application/json")
      .json(HttpError::from("User not found")),
    Err(error) => {
      tracing::error!(%error, external_id = %external_id, "Failed to load user");
      HttpResponse::InternalServerError()
        .content_type("application/json")
        .json(HttpError::from("Unable to load user"))
    }
  }
}

fn internal_server_error(error: SyncUserRoleError) -> HttpResponse {
  HttpResponse::InternalServerError()
    .content_type("application/json")
    .json(HttpError::from(error.to_string()))
}

impl From<User> for UserRto {
  fn from(user: User) -> Self {
    Self {
      uuid: user.uuid,
      external_id: user.external_id,
      email: user.email,
      name: user.name,
      role_index: user.role.index(),
      role: user.role,
    }
  }
}
