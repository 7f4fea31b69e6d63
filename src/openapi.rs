use utoipa::{
  openapi::security::{Http, HttpAuthScheme, SecurityScheme},
  Modify, OpenApi,
};

use crate::{
  payments::{self, rto::gateway_rto::GatewayRto},
  roles::{
    self,
    rto::role_rto::{CompareRolesRto, RoleRto},
  },
  shared::{
    self, http_error::HttpError, payment_gateway::DeploymentMode, role::Role,
  },
  users::{self, dto::sync_user_role_dto::SyncUserRoleDto, rto::user_rto::UserRto},
};

#[derive(OpenApi)]
#[openapi(
  paths(
    shared::check_health,
    roles::list_roles,
    roles::find_role,
    roles::compare_roles,
    payments::payment_gateway,
    users::sync_user_role,
    users::find_user,
  ),
  components(schemas(
    Role,
    RoleRto,
    CompareRolesRto,
    DeploymentMode,
    GatewayRto,
    SyncUserRoleDto,
    UserRto,
    HttpError,
  )),
  modifiers(&MasterKeySecurity)
)]
pub struct ApiDoc;

struct MasterKeySecurity;

impl Modify for MasterKeySecurity {
  fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
    if let Some(components) = openapi.components.as_mut() {
      components.add_security_scheme(
        "master_key",
        SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
      );
    }
  }
}
