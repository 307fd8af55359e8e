use std::path::PathBuf;
use clap::{Args, Parser, Subcommand};

#[derive(Clone, Debug, Eq, Parser, PartialEq)]
#[command(version, author, about)]
pub struct CliConfig {
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Overrides `data_directory` from the configuration
    #[arg(long, global = true)]
    pub data_directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Eq, PartialEq, Subcommand)]
pub enum Command {
    /// Create a new user account
    Register(Credentials),

    /// Check a username and password
    Login(Credentials),

    /// Work with your own notes
    Notes {
        #[command(flatten)]
        credentials: Credentials,

        #[command(subcommand)]
        action: NotesAction,
    },

    /// Administrator views
    Admin {
        /// Prompted for when missing
        #[arg(long, short)]
        password: Option<String>,

        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Args, Clone, Debug, Eq, PartialEq)]
pub struct Credentials {
    #[arg(long, short)]
    pub username: String,

    /// Prompted for when missing
    #[arg(long, short)]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Subcommand)]
pub enum NotesAction {
    List {
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    Add {
        #[arg(long, short)]
        title: String,

        #[arg(long, short, default_value = "")]
        content: String,
    },

    Edit {
        #[arg(allow_negative_numbers = true)]
        index: i64,

        #[arg(long, short)]
        title: String,

        #[arg(long, short, default_value = "")]
        content: String,
    },

    Delete {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
}

#[derive(Clone, Debug, Eq, PartialEq, Subcommand)]
pub enum AdminAction {
    /// All accounts with their stored credentials
    Accounts {
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Notes of every user
    Notes {
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    ResetPassword {
        #[arg(long, short)]
        username: String,

        /// Prompted for when missing
        #[arg(long, short)]
        new_password: Option<String>,
    },
}
