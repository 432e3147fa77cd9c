mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem,
    USER_CONFIG_NAME,
};
pub use model::{BadgeConfig, Config, InputConfig};
pub use validation::validate_config_semantics;
