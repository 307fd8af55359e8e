pub const DEFAULT_DATA_DIR: &str = "storage";
pub const ACCOUNTS_FILE_NAME: &str = "accounts.toml";
pub const NOTES_FILE_NAME: &str = "notes.toml";
pub const APP_CONFIG_ENV_PREFIX: &str = "NOTEVAULT_";

// the administrator is never stored, these are its only credentials
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

// the defaults are taken from the argon2 crate itself
pub const DEFAULT_ARGON2_M_COST: u32 = 19 * 1024;
pub const DEFAULT_ARGON2_T_COST: u32 = 2;
pub const DEFAULT_ARGON2_P_COST: u32 = 1;
pub const DEFAULT_ARGON2_OUTPUT_LEN: Option<usize> = Some(32);
