use log::warn;
use logging::LoggingConfig;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use std::{
    fs,
    net::{Ipv4Addr, SocketAddr},
    path::Path,
    sync::LazyLock,
};

pub mod inventory;
pub mod logging;

pub use inventory::InventoryConfig;

pub static ADVANCED_CONFIG: LazyLock<AdvancedConfiguration> =
    LazyLock::new(AdvancedConfiguration::load);

pub static BASIC_CONFIG: LazyLock<BasicConfiguration> = LazyLock::new(BasicConfiguration::load);

/// Feature switches. Defaults reproduce the behaviour of a current Java server.
#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AdvancedConfiguration {
    pub logging: LoggingConfig,
    pub inventory: InventoryConfig,
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct BasicConfiguration {
    /// The address Bedrock clients connect to.
    pub bedrock_address: SocketAddr,
    /// The Java server the bridge forwards to.
    pub remote_address: String,
    /// Dumps extra diagnostics for rejected inventory requests.
    pub debug_mode: bool,
}

impl Default for BasicConfiguration {
    fn default() -> Self {
        Self {
            bedrock_address: SocketAddr::new(Ipv4Addr::new(0, 0, 0, 0).into(), 19132),
            remote_address: "127.0.0.1:25565".to_string(),
            debug_mode: false,
        }
    }
}

trait LoadTomlConfiguration {
    fn load() -> Self
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let path = Self::get_path();

        let config = if path.exists() {
            let file_content = fs::read_to_string(path)
                .unwrap_or_else(|_| panic!("Couldn't read configuration file at {:?}", path));

            toml::from_str(&file_content).unwrap_or_else(|err| {
                panic!(
                    "Couldn't parse config at {:?}. Reason: {}. This is probably caused by a config update, just delete the old config and start again",
                    path,
                    err.message()
                )
            })
        } else {
            let content = Self::default();

            match toml::to_string(&content) {
                Ok(serialized) => {
                    if let Err(err) = fs::write(path, serialized) {
                        warn!("Couldn't write default config to {:?}. Reason: {}", path, err);
                    }
                }
                Err(err) => warn!("Couldn't serialize default config for {:?}. Reason: {}", path, err),
            }

            content
        };

        config.validate();
        config
    }

    fn get_path() -> &'static Path;

    fn validate(&self);
}

impl LoadTomlConfiguration for AdvancedConfiguration {
    fn get_path() -> &'static Path {
        Path::new("features.toml")
    }

    fn validate(&self) {
        self.inventory.validate();
    }
}

impl LoadTomlConfiguration for BasicConfiguration {
    fn get_path() -> &'static Path {
        Path::new("basic.toml")
    }

    fn validate(&self) {
        assert!(
            !self.remote_address.is_empty(),
            "The remote address must not be empty"
        );
    }
}
