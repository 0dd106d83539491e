use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    pub http_port: u16,
    pub environment: String,

    /// Remote catalog source URL; `None` keeps the built-in menu
    pub catalog_url: Option<String>,
    /// Allow the same dish to be selected twice in one session
    pub allow_duplicate_dish: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/catering".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            catalog_url: std::env::var("CATALOG_URL").ok().filter(|u| !u.is_empty()),
            allow_duplicate_dish: std::env::var("ALLOW_DUPLICATE_DISH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Create a config with custom overrides
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Directory the archive sink writes into
    pub fn archive_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("archive")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let config = Config::with_overrides("/tmp/catering-test", 8080);
        assert_eq!(config.work_dir, "/tmp/catering-test");
        assert_eq!(config.http_port, 8080);
        assert_eq!(
            config.archive_dir(),
            PathBuf::from("/tmp/catering-test/archive")
        );
    }
}
