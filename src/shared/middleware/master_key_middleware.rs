use actix_web::{dev::ServiceRequest, error::ErrorUnauthorized, web, Error};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use subtle::ConstantTimeEq;

use crate::{shared::repository::user_repository::UserRepository, AppState};

/// Accepts requests whose bearer token equals the configured master key.
pub async fn bearer_validator<UR: UserRepository + 'static>(
  request: ServiceRequest,
  credentials: BearerAuth,
) -> Result<ServiceRequest, (Error, ServiceRequest)> {
  let authorized = request
    .app_data::<web::Data<AppState<UR>>>()
    .map(|data| {
      bool::from(
        credentials
          .token()
          .as_bytes()
          .ct_eq(data.config.master_key.as_bytes()),
      )
    })
    .unwrap_or(false);

  if authorized {
    Ok(request)
  } else {
    tracing::warn!(path = request.path(), "Rejected invalid master key");
    Err((ErrorUnauthorized("Unauthorized"), request))
  }
}
