use crate::defaults::*;
use serde::{Deserialize, Serialize};

fn default_verbose() -> i8 {
    VERBOSE
}
fn default_transition_properties() -> bool {
    TRANSITION_PROPERTIES
}
fn default_state_properties() -> bool {
    STATE_PROPERTIES
}
fn default_state_to_state_properties() -> bool {
    STATE_TO_STATE_PROPERTIES
}
fn default_print_properties() -> bool {
    PRINT_PROPERTIES
}
fn default_properties_config() -> PropertiesConfig {
    let properties_config: PropertiesConfig = toml::from_str("").unwrap();
    properties_config
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Configuration {
    #[serde(default = "default_verbose")]
    pub verbose: i8,
    #[serde(default = "default_properties_config")]
    pub properties: PropertiesConfig,
}

impl Default for Configuration {
    fn default() -> Self {
        toml::from_str("").unwrap()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PropertiesConfig {
    #[serde(default = "default_transition_properties")]
    pub transition_properties: bool,
    #[serde(default = "default_state_properties")]
    pub state_properties: bool,
    #[serde(default = "default_state_to_state_properties")]
    pub state_to_state_properties: bool,
    /// Label of the ADC method for the properties, e.g. "adc2". If it is not set,
    /// the method of the excited states is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default = "default_print_properties")]
    pub print_properties: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Configuration = toml::from_str("").unwrap();
        assert_eq!(config.verbose, VERBOSE);
        assert!(config.properties.transition_properties);
        assert!(config.properties.state_properties);
        assert!(!config.properties.state_to_state_properties);
        assert!(config.properties.method.is_none());
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn partial_config() {
        let config: Configuration = toml::from_str(
            r#"
            verbose = 1

            [properties]
            transition_properties = false
            method = "cvs-adc2x"
            "#,
        )
        .unwrap();
        assert_eq!(config.verbose, 1);
        assert!(!config.properties.transition_properties);
        assert!(config.properties.state_properties);
        assert_eq!(config.properties.method.as_deref(), Some("cvs-adc2x"));
    }

    #[test]
    fn write_and_read_back() {
        let config: Configuration = Configuration::default();
        let config_string: String = toml::to_string(&config).unwrap();
        let read: Configuration = toml::from_str(&config_string).unwrap();
        assert_eq!(read, config);
    }
}
