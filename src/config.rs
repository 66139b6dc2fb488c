use std::path::PathBuf;
use std::time::Duration;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Backing file for the schema mirror
    pub path: PathBuf,

    /// Period between background saves
    pub save_interval: Duration,
}

impl DatabaseConfig {
    /// Create a configuration with the default one-second save interval
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            save_interval: Duration::from_secs(1),
        }
    }

    /// Set the save interval
    pub fn save_interval(mut self, interval: Duration) -> Self {
        self.save_interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DatabaseConfig::new("/tmp/tables.db");
        assert_eq!(config.save_interval, Duration::from_secs(1));
        assert_eq!(config.path, PathBuf::from("/tmp/tables.db"));
    }

    #[test]
    fn test_builder() {
        let config =
            DatabaseConfig::new("tables.db").save_interval(Duration::from_millis(50));
        assert_eq!(config.save_interval, Duration::from_millis(50));
    }
}
