use serde::{Deserialize, Serialize};
use crate::lib_constants::{DEFAULT_ARGON2_M_COST, DEFAULT_ARGON2_OUTPUT_LEN, DEFAULT_ARGON2_P_COST, DEFAULT_ARGON2_T_COST};

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CredentialPolicyKind {
    #[default]
    WeakSha256,
    Argon2,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HasherConfigData {
    #[serde(default)]
    pub policy: CredentialPolicyKind,

    #[serde(default = "hasher_config_default_argon2_m_cost")]
    pub argon2_m_cost: u32,

    #[serde(default = "hasher_config_default_argon2_t_cost")]
    pub argon2_t_cost: u32,

    #[serde(default = "hasher_config_default_argon2_p_cost")]
    pub argon2_p_cost: u32,

    #[serde(default = "hasher_config_default_argon2_output_len")]
    pub argon2_output_len: Option<usize>,
}

pub fn hasher_config_default_argon2_m_cost() -> u32 {
    DEFAULT_ARGON2_M_COST
}

pub fn hasher_config_default_argon2_t_cost() -> u32 {
    DEFAULT_ARGON2_T_COST
}

pub fn hasher_config_default_argon2_p_cost() -> u32 {
    DEFAULT_ARGON2_P_COST
}

pub fn hasher_config_default_argon2_output_len() -> Option<usize> {
    DEFAULT_ARGON2_OUTPUT_LEN
}

impl HasherConfigData {
    pub fn make_params(&self) -> Result<argon2::Params, argon2::Error> {
        argon2::Params::new(
            self.argon2_m_cost,
            self.argon2_t_cost,
            self.argon2_p_cost,
            self.argon2_output_len,
        )
    }
}

impl Default for HasherConfigData {
    fn default() -> Self {
        HasherConfigData {
            policy: CredentialPolicyKind::default(),
            argon2_m_cost: DEFAULT_ARGON2_M_COST,
            argon2_t_cost: DEFAULT_ARGON2_T_COST,
            argon2_p_cost: DEFAULT_ARGON2_P_COST,
            argon2_output_len: DEFAULT_ARGON2_OUTPUT_LEN,
        }
    }
}
