pub mod rto;

use actix_web::{web, HttpResponse, Responder};
use rto::gateway_rto::GatewayRto;

use crate::shared::repository::user_repository::UserRepository;
use crate::AppState;

#[utoipa::path(
  get,
  path = "/v1/payments/gateway",
  responses(
    (status = 200, description = "Payment gateway selected at startup", body = GatewayRto)
  ),
  security(("master_key" = []))
)]
pub async fn payment_gateway<UR: UserRepository>(
  data: web::Data<AppState<UR>>,
) -> impl Responder {
  HttpResponse::Ok().json(GatewayRto {
    deployment_mode: data.config.deployment_mode,
    base_url: data.config.payment_gateway_url.to_string(),
  })
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use actix_web::http::StatusCode;

  use super::*;
  use crate::{
    helpers::tests::{http_request, parse_http_response},
    shared::{
      config::Config, repository::user_repository::InMemoryUserRepository,
    },
  };

  async fn gateway_for(flag: Option<&str>) -> serde_json::Value {
    let vars: HashMap<&str, String> = flag
      .map(|flag| HashMap::from([("DEPLOYMENT_MODE", flag.to_string())]))
      .unwrap_or_default();
    let data = web::Data::new(AppState {
      user_repository: InMemoryUserRepository::new(),
      config: Config::from_vars(|key| vars.get(key).cloned()),
    });
    parse_http_response(
      payment_gateway(data).await,
      &http_request(),
      StatusCode::OK,
    )
    .await
  }

  #[actix_web::test]
  async fn test_payment_gateway_production() {
    let body = gateway_for(Some("production")).await;
    assert_eq!(body["deploymentMode"], "production");
    assert_eq!(body["baseUrl"], "https://api.safaricom.co.ke");
  }

  #[actix_web::test]
  async fn test_payment_gateway_defaults_to_sandbox() {
    for flag in [None, Some("development")] {
      let body = gateway_for(flag).await;
      assert_eq!(body["deploymentMode"], "sandbox");
      assert_eq!(body["baseUrl"], "https://sandbox.safaricom.co.ke");
    }
  }
}
