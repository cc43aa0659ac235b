//! Service configuration loaded via OrthoConfig.
//!
//! Values layer defaults, an optional configuration file, `PROFILES_*`
//! environment variables and command-line flags, later sources winning.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Settings for the user profile service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PROFILES")]
pub struct AppSettings {
    /// Interface or host name to bind; defaults to all interfaces.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Seed the sample users on start-up.
    #[ortho_config(default = false)]
    pub seed_example_data: bool,
    /// Actix worker count; defaults to the number of physical cores.
    pub workers: Option<usize>,
}

impl AppSettings {
    /// Host to bind, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Port to bind, falling back to 5000.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }
}
