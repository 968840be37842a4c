pub mod defaults;
pub mod loader;

pub use defaults::{default_config, default_markets};
pub use loader::{build_calendars, load_config, load_config_or_default, parse_config, ConfigSource};
