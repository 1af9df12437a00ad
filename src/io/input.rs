use crate::io::Configuration;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Reads the configuration from a TOML file. If the file does not exist, the default
/// settings are used. Every option that is missing in the file takes its default value.
pub fn read_config(config_file_path: &Path) -> Result<Configuration> {
    let config_string: String = if config_file_path.exists() {
        fs::read_to_string(config_file_path).with_context(|| {
            format!(
                "Unable to read config file: {}",
                config_file_path.display()
            )
        })?
    } else {
        debug!(
            "{} not found, the default settings are used",
            config_file_path.display()
        );
        String::from("")
    };
    let config: Configuration = toml::from_str(&config_string).with_context(|| {
        format!(
            "Unable to parse config file: {}",
            config_file_path.display()
        )
    })?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::process;

    fn temp_file(name: &str) -> std::path::PathBuf {
        env::temp_dir().join(format!("{}_{}", process::id(), name))
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = temp_file("does_not_exist.toml");
        let config: Configuration = read_config(&path).unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn read_from_file() {
        let path = temp_file("state_to_state.toml");
        fs::write(&path, "[properties]\nstate_to_state_properties = true\n").unwrap();
        let config: Configuration = read_config(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(config.properties.state_to_state_properties);
        assert!(config.properties.transition_properties);
    }

    #[test]
    fn invalid_file_is_reported() {
        let path = temp_file("invalid.toml");
        fs::write(&path, "[properties]\nstate_properties = \"yes\"\n").unwrap();
        let result = read_config(&path);
        fs::remove_file(&path).unwrap();
        let message: String = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Unable to parse config file"), "{}", message);
    }
}
