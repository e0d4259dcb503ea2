use std::path::PathBuf;

/// Source table read once at startup, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "spacex_launch_dash.csv";

/// Runtime settings. Fixed at build time: the dashboard takes no flags and
/// reads no environment variables (other than `RUST_LOG` for logging).
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub dataset_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            host: "127.0.0.1".to_string(),
            port: 8050,
        }
    }
}

impl DashboardConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.dataset_path, PathBuf::from("spacex_launch_dash.csv"));
        assert_eq!(config.bind_addr(), "127.0.0.1:8050");
    }
}
