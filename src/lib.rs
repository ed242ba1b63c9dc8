pub mod arguments;
pub mod config;
pub mod errors;
pub mod journal;
pub mod logger;
pub mod paths;

#[cfg(feature = "web")]
pub mod webserver;
