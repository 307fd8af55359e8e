use std::path::Path;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use crate::config::app_config::AppConfig;
use crate::lib_constants::APP_CONFIG_ENV_PREFIX;

pub trait FigmentExt {
    fn setup_app_config(
        self,
        config_file: Option<&Path>,
    ) -> Figment;
}

impl FigmentExt for Figment {
    fn setup_app_config(self, config_file: Option<&Path>) -> Figment {
        let figment = self.merge(Serialized::defaults(AppConfig::default()));
        let figment = match config_file {
            Some(config_file) => figment.merge(Toml::file_exact(config_file)),
            None => figment,
        };
        figment.merge(Env::prefixed(APP_CONFIG_ENV_PREFIX).split("__"))
    }
}

pub fn read_app_config(
    config_file: Option<&Path>,
    figment: Figment,
) -> Result<AppConfig, figment::Error> {
    figment
        .setup_app_config(config_file)
        .extract()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use figment::Jail;
    use crate::config::hasher_config::CredentialPolicyKind;
    use super::*;

    #[test]
    fn defaults_without_file() {
        Jail::expect_with(|_jail| {
            let config = read_app_config(None, Figment::new())?;
            assert_eq!(config, AppConfig::default());
            Ok(())
        });
    }

    #[test]
    fn file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "notevault.toml",
                r#"
                    data_directory = "/srv/notes"
                    admin_password = "hunter2"

                    [hasher_config]
                    policy = "argon2"
                "#,
            )?;
            let config = read_app_config(
                Some(Path::new("notevault.toml")),
                Figment::new(),
            )?;
            assert_eq!(config.data_directory, PathBuf::from("/srv/notes"));
            assert_eq!(config.admin_username, "admin");
            assert_eq!(config.admin_password, "hunter2");
            assert_eq!(config.hasher_config.policy, CredentialPolicyKind::Argon2);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("notevault.toml", r#"data_directory = "/srv/notes""#)?;
            jail.set_env("NOTEVAULT_DATA_DIRECTORY", "/var/notes");
            jail.set_env("NOTEVAULT_HASHER_CONFIG__ARGON2_T_COST", "5");
            let config = read_app_config(
                Some(Path::new("notevault.toml")),
                Figment::new(),
            )?;
            assert_eq!(config.data_directory, PathBuf::from("/var/notes"));
            assert_eq!(config.hasher_config.argon2_t_cost, 5);
            Ok(())
        });
    }

    #[test]
    fn missing_config_file_is_an_error() {
        Jail::expect_with(|_jail| {
            assert!(
                read_app_config(
                    Some(Path::new("does_not_exist.toml")),
                    Figment::new(),
                ).is_err()
            );
            Ok(())
        });
    }

    #[test]
    fn unknown_keys_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("notevault.toml", r#"jwt_private_key = "/x""#)?;
            assert!(
                read_app_config(
                    Some(Path::new("notevault.toml")),
                    Figment::new(),
                ).is_err()
            );
            Ok(())
        });
    }
}
