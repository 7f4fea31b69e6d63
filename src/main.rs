mod openapi;
mod payments;
mod roles;
mod shared;
mod users;

use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{middleware::Logger, web, App, HttpServer};
use actix_web_httpauth::middleware::HttpAuthentication;
use openapi::ApiDoc;
use payments::payment_gateway;
use roles::{compare_roles, find_role, list_roles};
use shared::{
  check_health, config::Config,
  middleware::master_key_middleware::bearer_validator,
  repository::user_repository::UserRepository,
};
use tracing_subscriber::EnvFilter;
use users::{find_user, sync_user_role};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};
use utoipa_swagger_ui::SwaggerUi;

// This struct represents state
pub struct AppState<UR: UserRepository> {
  pub user_repository: UR,
  pub config: Config,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  let config = Config::from_env();
  init_tracing();

  let user_repository = build_user_repository(&config).await?;
  let server_address = config.host.clone();
  tracing::info!(
    address = %server_address,
    deployment_mode = %config.deployment_mode,
    payment_gateway = config.payment_gateway_url,
    "Starting server"
  );
  if config.deployment_mode.is_production() {
    tracing::warn!("Payment requests go to the live gateway");
  }

  let state = web::Data::new(AppState {
    user_repository,
    config,
  });

  HttpServer::new(move || {
    let state = state.clone();
    App::new()
      .wrap(Logger::default())
      .configure(|service_config| app_config(service_config, state))
  })
  .bind(server_address)?
  .run()
  .await
}

fn init_tracing() {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(not(any(feature = "mongodb", feature = "dynamodb")))]
async fn build_user_repository(
  _config: &Config,
) -> std::io::Result<shared::repository::user_repository::InMemoryUserRepository>
{
  tracing::warn!("No database feature enabled, users are kept in memory");
  Ok(shared::repository::user_repository::InMemoryUserRepository::new())
}

#[cfg(feature = "mongodb")]
async fn build_user_repository(
  config: &Config,
) -> std::io::Result<shared::repository::mongo_user_repository::MongoUserRepository>
{
  let database = shared::database::MongoDatabase::new(config)
    .await
    .map_err(std::io::Error::other)?;
  shared::repository::mongo_user_repository::MongoUserRepository::new(
    database,
    &config.database.name,
    &config.database.users_table,
  )
  .await
  .map_err(std::io::Error::other)
}

#[cfg(all(feature = "dynamodb", not(feature = "mongodb")))]
async fn build_user_repository(
  config: &Config,
) -> std::io::Result<
  shared::repository::dynamo_user_repository::DynamoUserRepository,
> {
  let database = shared::database::DynamoDatabase::new(config).await;
  Ok(
    shared::repository::dynamo_user_repository::DynamoUserRepository::new(
      database,
      &config.database.users_table,
    ),
  )
}

// Function to initialize the App
fn app_config<UR: UserRepository + 'static>(
  config: &mut web::ServiceConfig,
  state: web::Data<AppState<UR>>,
) {
  // Rate limit
  // Allow bursts with up to five requests per IP address
  // and replenishes two elements per second
  let governor_config = GovernorConfigBuilder::default()
    .requests_per_second(2)
    .burst_size(5)
    .finish()
    .unwrap_or_default();

  config
    .app_data(state)
    .route("/health", web::post().to(check_health))
    .service(
      SwaggerUi::new("/swagger-ui/{_:.*}")
        .url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .service(Scalar::with_url("/scalar", ApiDoc::openapi()))
    .service(
      web::scope("/v1")
        .service(
          web::scope("/roles")
            .route("", web::get().to(list_roles))
            .route("/compare", web::get().to(compare_roles))
            .route("/{role}", web::get().to(find_role)),
        )
        .service(
          web::scope("/payments")
            .wrap(HttpAuthentication::with_fn(bearer_validator::<UR>))
            .route("/gateway", web::get().to(payment_gateway::<UR>)),
        )
        .service(
          web::scope("/users")
            .wrap(HttpAuthentication::with_fn(bearer_validator::<UR>))
            .wrap(Governor::new(&governor_config))
            .route("/sync", web::post().to(sync_user_role::<UR>))
            .route("/{clerkId}", web::get().to(find_user::<UR>)),
        ),
    );
}
