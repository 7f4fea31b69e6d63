use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;

pub const SANDBOX_URL: &str = "https://sandbox.safaricom.co.ke";
pub const LIVE_URL: &str = "https://api.safaricom.co.ke";

#[derive(ToSchema, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
  Production,
  #[default]
  Sandbox,
}

impl DeploymentMode {
  /// Only the exact value `production` selects live mode. Anything else,
  /// including an unset flag, stays on the sandbox.
  pub fn from_flag(flag: Option<&str>) -> Self {
    match flag {
      Some("production") => DeploymentMode::Production,
      _ => DeploymentMode::Sandbox,
    }
  }

  pub fn is_production(&self) -> bool {
    matches!(self, DeploymentMode::Production)
  }
}

impl fmt::Display for DeploymentMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DeploymentMode::Production => f.write_str("production"),
      DeploymentMode::Sandbox => f.write_str("sandbox"),
    }
  }
}

pub fn resolve_endpoint(mode: DeploymentMode) -> &'static str {
  match mode {
    DeploymentMode::Production => LIVE_URL,
    DeploymentMode::Sandbox => SANDBOX_URL,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_production_flag_resolves_live_url() {
    let mode = DeploymentMode::from_flag(Some("production"));
    assert!(mode.is_production());
    assert_eq!(resolve_endpoint(mode), "https://api.safaricom.co.ke");
  }

  #[test]
  fn test_other_flags_resolve_sandbox_url() {
    for flag in [
      None,
      Some(""),
      Some("development"),
      Some("staging"),
      Some("Production"),
      Some(" production"),
    ] {
      let mode = DeploymentMode::from_flag(flag);
      assert_eq!(mode, DeploymentMode::Sandbox, "flag {:?}", flag);
      assert_eq!(resolve_endpoint(mode), "https://sandbox.safaricom.co.ke");
    }
  }

  #[test]
  fn test_default_is_sandbox() {
    assert_eq!(resolve_endpoint(DeploymentMode::default()), SANDBOX_URL);
  }
}
