use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerRuntimeConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerRuntimeConfig {
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Default for ServerRuntimeConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
            upload_dir: default_upload_dir(),
            name: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_true")]
    pub registration_open: bool,
    #[serde(default = "default_token_ttl_seconds")]
    pub token_ttl_seconds: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            registration_open: default_true(),
            token_ttl_seconds: default_token_ttl_seconds(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_metrics_endpoint")]
    pub endpoint: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            endpoint: default_metrics_endpoint(),
        }
    }
}

const fn default_true() -> bool {
    true
}

const fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

fn default_upload_dir() -> String {
    "./uploads".to_string()
}

const fn default_token_ttl_seconds() -> i64 {
    60 * 60 * 24 * 14
}

fn default_metrics_endpoint() -> String {
    "/metrics".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_sections() {
        let config: ServerConfig = serde_yaml::from_str("server:\n  name: demo\n").expect("yaml");
        assert_eq!(config.server.name.as_deref(), Some("demo"));
        assert_eq!(config.server.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
        assert_eq!(config.server.upload_dir, "./uploads");
        assert!(config.auth.registration_open);
        assert_eq!(config.auth.token_ttl_seconds, 60 * 60 * 24 * 14);
        assert!(config.metrics.enabled);
        assert_eq!(config.metrics.endpoint, "/metrics");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let yaml = r#"
server:
  max_body_bytes: 1024
  upload_dir: /tmp/uploads
auth:
  registration_open: false
  token_ttl_seconds: 3600
metrics:
  enabled: false
  endpoint: /internal/metrics
"#;
        let config: ServerConfig = serde_yaml::from_str(yaml).expect("yaml");
        assert_eq!(config.server.max_body_bytes, 1024);
        assert_eq!(config.server.upload_dir, "/tmp/uploads");
        assert!(!config.auth.registration_open);
        assert_eq!(config.auth.token_ttl_seconds, 3600);
        assert!(!config.metrics.enabled);
        assert_eq!(config.metrics.endpoint, "/internal/metrics");
    }
}
