//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::RunConfig;
use std::path::Path;

/// Loads and validates an `xfault.toml` configuration from a file path.
pub fn load_config(path: &Path) -> Result<RunConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates an `xfault.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<RunConfig, ConfigError> {
    let config: RunConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present.
fn validate_config(config: &RunConfig) -> Result<(), ConfigError> {
    if config.device_db_root.is_empty() {
        return Err(ConfigError::MissingField("device_db_root".to_string()));
    }
    if config.part.is_empty() {
        return Err(ConfigError::MissingField("part".to_string()));
    }
    if config.bitstream_path.is_empty() {
        return Err(ConfigError::MissingField("bitstream_path".to_string()));
    }
    if config.fault_bit_list_path.is_empty() {
        return Err(ConfigError::MissingField("fault_bit_list_path".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
device_db_root = "/db/artix7"
part = "xc7a35tcpg236-1"
bitstream_path = "design.bit"
fault_bit_list_path = "faults.txt"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.device_db_root, "/db/artix7");
        assert_eq!(config.part, "xc7a35tcpg236-1");
        assert_eq!(config.bitstream_path, "design.bit");
        assert_eq!(config.fault_bit_list_path, "faults.txt");
    }

    #[test]
    fn missing_part_errors() {
        let toml = r#"
device_db_root = "/db/artix7"
part = ""
bitstream_path = "design.bit"
fault_bit_list_path = "faults.txt"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn missing_bitstream_path_errors() {
        let toml = r#"
device_db_root = "/db/artix7"
part = "xc7a35tcpg236-1"
bitstream_path = ""
fault_bit_list_path = "faults.txt"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let toml = "this is not valid toml {{{}}}";
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn io_error_from_nonexistent_path() {
        let err = load_config(Path::new("/nonexistent/xfault.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
