pub mod manager;
pub mod settings;
pub mod validator;

pub use manager::{load_from_path, ConfigManager, ConfigSource, CONFIG_ENV_VAR};
pub use settings::{RosterSettings, Settings, DEFAULT_ROTATION_DELAY_MS, MAX_ROTATION_DELAY_MS};
pub use validator::{SettingsValidator, ValidationError, ValidationResult};
