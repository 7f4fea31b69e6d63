use actix_web::{HttpResponse, Responder};

pub mod config;
pub mod database;
pub mod http_error;
pub mod middleware;
pub mod model;
pub mod payment_gateway;
pub mod repository;
pub mod role;

#[utoipa::path(
  post,
  path = "/health",
  responses(
      (status = 200, description = "Check the service health")
  )
)]
pub async fn check_health() -> impl Responder {
  HttpResponse::Ok().finish()
}
