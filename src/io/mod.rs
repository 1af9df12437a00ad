mod input;
mod logger;
pub(crate) mod settings;

pub use input::read_config;
pub use logger::{init_logger, log_level};
pub use settings::{Configuration, PropertiesConfig};
