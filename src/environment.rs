use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the sensor API deployments the dashboard can read from.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Hosted sensor API.
    #[default]
    Production,
    /// Local development server.
    Local,
    /// Any other deployment, addressed by its base URL.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the base URL of the sensor API associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Production => "http://iot25.vercel.app".to_string(),
            Environment::Local => "http://localhost:3000".to_string(),
            Environment::Custom { api_url } => api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of the readings endpoint.
    pub fn data_url(&self) -> String {
        format!("{}/api/data", self.api_url())
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "local" => Ok(Environment::Local),
            lower if lower.starts_with("http://") || lower.starts_with("https://") => {
                Ok(Environment::Custom {
                    api_url: trimmed.to_string(),
                })
            }
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "Production"),
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}

/// Environment variable naming the deployment to poll.
pub const ENVIRONMENT_VAR: &str = "HEALTH_MONITOR_ENVIRONMENT";

/// Pick the deployment: explicit flag, then the config file, then the
/// environment variable, then production.
///
/// An unusable flag or config value is an error. An unusable environment
/// variable falls back to production.
pub fn resolve_environment(
    flag: Option<&str>,
    configured: Option<&str>,
    env_var: Option<&str>,
) -> Result<Environment, String> {
    for (source, value) in [("--api-url", flag), ("config api_url", configured)] {
        if let Some(value) = value {
            return value
                .parse::<Environment>()
                .map_err(|_| format!("Invalid {}: {}", source, value));
        }
    }
    Ok(env_var
        .and_then(|value| value.parse::<Environment>().ok())
        .unwrap_or_default())
}
