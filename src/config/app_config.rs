use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::config::hasher_config::HasherConfigData;
use crate::lib_constants::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME, DEFAULT_DATA_DIR};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default = "app_config_default_data_directory")]
    pub data_directory: PathBuf,

    #[serde(default = "app_config_default_admin_username")]
    pub admin_username: String,

    #[serde(default = "app_config_default_admin_password")]
    pub admin_password: String,

    #[serde(default)]
    pub hasher_config: HasherConfigData,
}

pub fn app_config_default_data_directory() -> PathBuf {
    DEFAULT_DATA_DIR.into()
}

pub fn app_config_default_admin_username() -> String {
    DEFAULT_ADMIN_USERNAME.into()
}

pub fn app_config_default_admin_password() -> String {
    DEFAULT_ADMIN_PASSWORD.into()
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_directory: app_config_default_data_directory(),
            admin_username: app_config_default_admin_username(),
            admin_password: app_config_default_admin_password(),
            hasher_config: HasherConfigData::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_defaults_match() {
        assert_eq!(
            AppConfig::default(),
            serde_json::de::from_str("{}").unwrap(),
        )
    }
}
