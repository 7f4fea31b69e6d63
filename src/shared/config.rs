use std::env;

use super::payment_gateway::{resolve_endpoint, DeploymentMode};

#[derive(Clone, Debug)]
pub struct Config {
  pub host: String,
  pub master_key: String,
  pub deployment_mode: DeploymentMode,
  /// Payment gateway base URL, fixed for the lifetime of the process.
  pub payment_gateway_url: &'static str,
  pub database: DatabaseConfig,
}

#[derive(Clone, Debug)]
#[cfg_attr(
  not(any(feature = "mongodb", feature = "dynamodb")),
  allow(dead_code)
)]
pub struct DatabaseConfig {
  pub mongo_uri: String,
  pub name: String,
  pub users_table: String,
}

impl Config {
  /// Reads the process environment, loading `.env` first when present.
  pub fn from_env() -> Self {
    let _ = dotenvy::dotenv();
    Self::from_vars(|key| env::var(key).ok())
  }

  pub fn from_vars<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let var_or = |key: &str, default: &str| {
      lookup(key).unwrap_or_else(|| default.to_string())
    };

    let deployment_mode =
      DeploymentMode::from_flag(lookup("DEPLOYMENT_MODE").as_deref());

    Self {
      host: var_or("HOST", "0.0.0.0:3000"),
      master_key: var_or("MASTER_KEY", "DEV_MASTER_KEY"),
      deployment_mode,
      payment_gateway_url: resolve_endpoint(deployment_mode),
      database: DatabaseConfig {
        mongo_uri: var_or("MONGODB_URI", "mongodb://localhost:27017"),
        name: var_or("DATABASE_NAME", "ride_roles"),
        users_table: var_or("USERS_TABLE", "users"),
      },
    }
  }
}
