//! Driver connection management
//!
//! Establishes the driver handle all other modules share. The deployment
//! topology is a closed choice between a self-hosted Core server and a
//! managed Cloud deployment; keeping the dispatch here leaves every call
//! site agnostic of which one is in use.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use typedb_driver::{Connection, Credential};

use crate::config::AppConfig;
use crate::error::SampleError;

/// TypeDB deployment edition to connect to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServerEdition {
    /// Self-hosted TypeDB Core, plaintext connection.
    #[default]
    Core,
    /// Managed TypeDB Cloud deployment, authenticated connection.
    Cloud,
}

impl fmt::Display for ServerEdition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core => write!(f, "core"),
            Self::Cloud => write!(f, "cloud"),
        }
    }
}

impl FromStr for ServerEdition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "core" => Ok(Self::Core),
            "cloud" => Ok(Self::Cloud),
            _ => Err(format!("unknown edition '{s}'. Valid editions: core, cloud")),
        }
    }
}

/// Credential for a cloud deployment.
///
/// Treated as opaque by the rest of the application; only [`connect`]
/// looks inside.
#[derive(Debug, Clone)]
pub struct CloudCredential {
    pub username: String,
    pub password: String,
    pub tls_enabled: bool,
}

impl CloudCredential {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            username: config.cloud_username.clone(),
            password: config.cloud_password.clone(),
            tls_enabled: config.cloud_tls,
        }
    }
}

/// Open a driver handle against the given address.
///
/// The cloud edition requires a credential; passing `None` there is a
/// configuration error. Credential construction failures surface as
/// [`SampleError::Auth`], unreachable servers as
/// [`SampleError::Connection`].
pub fn connect(
    edition: ServerEdition,
    address: &str,
    credential: Option<&CloudCredential>,
) -> Result<Connection, SampleError> {
    tracing::debug!(%edition, address, "opening driver connection");
    match edition {
        ServerEdition::Core => Connection::new_core(address).map_err(SampleError::Connection),
        ServerEdition::Cloud => {
            let credential = credential.ok_or_else(|| {
                SampleError::Config("cloud edition requires a credential".to_string())
            })?;
            let driver_credential = if credential.tls_enabled {
                Credential::with_tls(&credential.username, &credential.password, None)
                    .map_err(SampleError::Auth)?
            } else {
                Credential::without_tls(&credential.username, &credential.password)
            };
            Connection::new_cloud(&[address], driver_credential).map_err(SampleError::Connection)
        }
    }
}
