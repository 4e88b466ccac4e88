mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Config, ExportConfig, ExportFormat, LoggingConfig, Orientation, PageFormat, UiConfig,
};
