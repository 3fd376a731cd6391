use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Key for the generative-vision classifier API.
    pub classifier_api_key: String,
    pub classifier_base_url: String,
    pub classifier_model: String,
    pub classifier_timeout_secs: u64,
    pub overpass_base_url: String,
    pub geodata_timeout_secs: u64,
    pub facility_radius_m: u32,
    pub upload_dir: PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("classifier_api_key", &"[redacted]")
            .field("classifier_base_url", &self.classifier_base_url)
            .field("classifier_model", &self.classifier_model)
            .field("classifier_timeout_secs", &self.classifier_timeout_secs)
            .field("overpass_base_url", &self.overpass_base_url)
            .field("geodata_timeout_secs", &self.geodata_timeout_secs)
            .field("facility_radius_m", &self.facility_radius_m)
            .field("upload_dir", &self.upload_dir)
            .finish()
    }
}
