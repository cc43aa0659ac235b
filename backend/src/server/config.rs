//! HTTP server configuration object.

use profile_api::settings::AppSettings;

/// Listener settings for [`super::create_server`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) workers: Option<usize>,
}

impl ServerConfig {
    /// Bind `host:port` with Actix's default worker count.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            workers: None,
        }
    }

    /// Override the worker count. Zero is ignored.
    #[must_use]
    pub fn with_workers(mut self, workers: Option<usize>) -> Self {
        self.workers = workers.filter(|count| *count > 0);
        self
    }
}

impl From<&AppSettings> for ServerConfig {
    fn from(settings: &AppSettings) -> Self {
        Self::new(settings.host(), settings.port()).with_workers(settings.workers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(0), None)]
    #[case(Some(4), Some(4))]
    #[case(None, None)]
    fn zero_workers_fall_back_to_default(
        #[case] requested: Option<usize>,
        #[case] expected: Option<usize>,
    ) {
        let config = ServerConfig::new("127.0.0.1", 5000).with_workers(requested);
        assert_eq!(config.workers, expected);
    }
}
