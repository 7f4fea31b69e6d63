pub mod rto;

use std::cmp::Ordering;

use actix_web::{web, HttpResponse, Responder};
use rto::role_rto::{CompareRolesRto, RoleRto};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::shared::http_error::HttpError;
use crate::shared::role::{self, InvalidRoleError, Role};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CompareRolesQuery {
  pub a: String,
  pub b: String,
}

#[utoipa::path(
  get,
  path = "/v1/roles",
  responses(
    (status = 200, description = "Roles in progression order", body = [RoleRto])
  )
)]
pub async fn list_roles() -> impl Responder {
  let roles: Vec<RoleRto> = Role::ALL.into_iter().map(RoleRto::from).collect();
  HttpResponse::Ok().json(roles)
}

#[utoipa::path(
  get,
  path = "/v1/roles/{role}",
  params(("role" = String, Path, description = "Role name, e.g. DRIVER")),
  responses(
    (status = 200, description = "Position of the role", body = RoleRto),
    (status = 400, description = "Unknown role", body = HttpError)
  )
)]
pub async fn find_role(role: web::Path<String>) -> impl Responder {
  match role.parse::<Role>() {
    Ok(role) => HttpResponse::Ok().json(RoleRto::from(role)),
    Err(error) => invalid_role(error),
  }
}

#[utoipa::path(
  get,
  path = "/v1/roles/compare",
  params(CompareRolesQuery),
  responses(
    (status = 200, description = "Relative order of two roles", body = CompareRolesRto),
    (status = 400, description = "Unknown role", body = HttpError)
  )
)]
pub async fn compare_roles(
  query: web::Query<CompareRolesQuery>,
) -> impl Responder {
  let query = query.into_inner();
  match role::compare(&query.a, &query.b) {
    Ok(ordering) => HttpResponse::Ok().json(CompareRolesRto {
      a: query.a,
      b: query.b,
      ordering: match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
      },
    }),
    Err(error) => invalid_role(error),
  }
}

fn invalid_role(error: InvalidRoleError) -> HttpResponse {
  HttpResponse::BadRequest()
    .content_type("application/json")
    .json(HttpError::from(error.to_string()))
}

#[cfg(test)]
mod tests {
  use actix_web::http::StatusCode;

  use super::*;
  use crate::helpers::tests::{http_request, parse_http_response};

  #[actix_web::test]
  async fn test_list_roles_in_order() {
    let roles: Vec<RoleRto> =
      parse_http_response(list_roles().await, &http_request(), StatusCode::OK)
        .await;
    assert_eq!(
      roles,
      vec![
        RoleRto {
          role: Role::Passenger,
          index: 0,
          next: Some(Role::Driver)
        },
        RoleRto {
          role: Role::Driver,
          index: 1,
          next: Some(Role::Owner)
        },
        RoleRto {
          role: Role::Owner,
          index: 2,
          next: None
        },
      ]
    );
  }

  #[actix_web::test]
  async fn test_find_role() {
    let responder = find_role(web::Path::from(String::from("OWNER"))).await;
    let rto: RoleRto =
      parse_http_response(responder, &http_request(), StatusCode::OK).await;
    assert_eq!(rto.index, 2);

    let responder = find_role(web::Path::from(String::from("ADMIN"))).await;
    let error: HttpError =
      parse_http_response(responder, &http_request(), StatusCode::BAD_REQUEST)
        .await;
    assert_eq!(error.message, "Invalid role: ADMIN");
  }

  #[actix_web::test]
  async fn test_compare_roles() {
    let query = |a: &str, b: &str| {
      web::Query(CompareRolesQuery {
        a: a.to_string(),
        b: b.to_string(),
      })
    };

    let rto: CompareRolesRto = parse_http_response(
      compare_roles(query("PASSENGER", "OWNER")).await,
      &http_request(),
      StatusCode::OK,
    )
    .await;
    assert_eq!(rto.ordering, -1);
    assert_eq!(rto.a, "PASSENGER");

    let rto: CompareRolesRto = parse_http_response(
      compare_roles(query("OWNER", "PASSENGER")).await,
      &http_request(),
      StatusCode::OK,
    )
    .await;
    assert_eq!(rto.ordering, 1);

    let rto: CompareRolesRto = parse_http_response(
      compare_roles(query("DRIVER", "DRIVER")).await,
      &http_request(),
      StatusCode::OK,
    )
    .await;
    assert_eq!(rto.ordering, 0);

    let error: HttpError = parse_http_response(
      compare_roles(query("DRIVER", "ADMIN")).await,
      &http_request(),
      StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(error.message, "Invalid role: ADMIN");
  }
}
