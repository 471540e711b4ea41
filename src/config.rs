//! Application configuration
//!
//! Defaults cover a local TypeDB Core server with the sample IAM dataset.
//! A TOML file (`iam-sample.toml` in the working directory, or a path given
//! with `--config`) and `IAM_SAMPLE_*` environment variables can override
//! any field. Environment variables win over the file, e.g.
//! `IAM_SAMPLE_SERVER_ADDRESS=10.0.0.5:1729 iam-sample-app`.

use std::path::Path;

use config::Config;
use serde::Deserialize;

use crate::connect::ServerEdition;
use crate::error::SampleError;

/// Default server address for a local TypeDB Core installation.
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:1729";

/// Name of the database the demonstration provisions and queries.
pub const DEFAULT_DATABASE_NAME: &str = "sample_app_db";

const DEFAULT_CONFIG_FILE: &str = "iam-sample.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// TypeDB server address as `host:port`.
    pub server_address: String,

    /// Database to provision and run the demonstration against.
    pub database_name: String,

    /// Deployment edition to connect to.
    pub edition: ServerEdition,

    /// Schema definition file, read from the working directory.
    pub schema_file: String,

    /// Seed dataset file, read from the working directory.
    pub data_file: String,

    /// User count the provisioning probe expects; must match the seed
    /// dataset in `data_file`.
    pub expected_user_count: i64,

    /// Username for the cloud edition.
    pub cloud_username: String,

    /// Password for the cloud edition.
    pub cloud_password: String,

    /// Whether to use TLS when connecting to a cloud deployment.
    pub cloud_tls: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            edition: ServerEdition::Core,
            schema_file: "iam-schema.tql".to_string(),
            data_file: "iam-data-single-query.tql".to_string(),
            expected_user_count: 3,
            cloud_username: "admin".to_string(),
            cloud_password: "password".to_string(),
            cloud_tls: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional TOML file plus environment
    /// overrides.
    ///
    /// When `path` is `None`, `iam-sample.toml` is used if it exists in the
    /// working directory; a named path that does not exist is an error.
    pub fn load(path: Option<&str>) -> Result<AppConfig, SampleError> {
        let mut builder = Config::builder();

        match path {
            Some(p) => {
                if !Path::new(p).exists() {
                    return Err(SampleError::Config(format!("config file '{p}' not found")));
                }
                builder = builder.add_source(config::File::with_name(p));
            }
            None => {
                if Path::new(DEFAULT_CONFIG_FILE).exists() {
                    builder = builder.add_source(config::File::with_name(DEFAULT_CONFIG_FILE));
                }
            }
        }

        builder = builder.add_source(config::Environment::with_prefix("IAM_SAMPLE"));

        let settings = builder
            .build()
            .map_err(|e| SampleError::Config(format!("failed to read configuration: {e}")))?;

        settings
            .try_deserialize::<AppConfig>()
            .map_err(|e| SampleError::Config(format!("invalid configuration: {e}")))
    }
}
