//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;

/// Configuration for the room assembly client.
///
/// Environment variables:
/// - `ROOMS_DATA_DIR` - Directory containing catalog and scenario files (default: `data`)
/// - `ROOMS_SCENARIO` - Scenario name under `scenarios/` (default: `crypt_and_hall`)
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    pub scenario: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            scenario: "crypt_and_hall".to_string(),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(data_dir) = read_env::<PathBuf>("ROOMS_DATA_DIR") {
            config.data_dir = data_dir;
        }

        if let Some(scenario) = read_env::<String>("ROOMS_SCENARIO") {
            config.scenario = scenario;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
