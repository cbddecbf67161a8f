//! Platform configuration module

use serde::{Deserialize, Serialize};

/// Deployment platform the server runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Local development, admin endpoints enabled
    Dev,
    /// Anything deployed
    Production,
}

impl Platform {
    /// Check if running in development
    pub fn is_dev(&self) -> bool {
        matches!(self, Platform::Dev)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::Production
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Dev => write!(f, "dev"),
            Platform::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Platform::Dev),
            "prod" | "production" => Ok(Platform::Production),
            _ => Err(format!("Invalid platform: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parsing() {
        assert_eq!("dev".parse::<Platform>().unwrap(), Platform::Dev);
        assert_eq!("DEV".parse::<Platform>().unwrap(), Platform::Dev);
        assert_eq!("production".parse::<Platform>().unwrap(), Platform::Production);
        assert!("staging".parse::<Platform>().is_err());
    }

    #[test]
    fn test_default_is_not_dev() {
        assert!(!Platform::default().is_dev());
    }
}
