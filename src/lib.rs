pub mod config;
pub mod storage;
pub mod data;
mod lib_constants;
pub mod rng;
pub mod hasher;
pub mod username_string;
pub mod logging;
pub mod user_db;
pub mod notes;
pub mod admin;
pub mod app;

pub use lib_constants::*;

#[macro_export]
macro_rules! error_exit {
    ($($arg:tt)+) => ({
        log::error!($($arg)+);
        std::process::exit(1)
    });
}
