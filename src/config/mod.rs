/// Configuration system
///
/// - `macros`: the `config_struct!` macro (structs with embedded defaults)
/// - `schemas`: every configuration section
/// - `utils`: locating and loading the TOML file
pub mod macros;
pub mod schemas;
pub mod utils;

pub use schemas::{Config, DatabaseConfig, WebserverConfig};
pub use utils::{load_config_from_path, resolve_config_path};
