use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::payment_gateway::DeploymentMode;

#[derive(ToSchema, Debug, Clone, Serialize)]
pub struct GatewayRto {
  #[serde(rename = "deploymentMode")]
  pub deployment_mode: DeploymentMode,
  #[serde(rename = "baseUrl")]
  pub base_url: String,
}
